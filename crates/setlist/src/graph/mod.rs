//! Compatibility graph: builder, degree ranking, path search, and validation.
//!
//! Purpose
//! - Turn a team → members mapping into an undirected graph whose edges join
//!   teams with disjoint member sets, and enumerate its Hamiltonian paths
//!   ("setlists"), optionally with a fixed start, end, or pinned positions.
//!
//! Why this design
//! - Adjacency is one `NodeSet` per team, so candidate generation is a couple
//!   of word-wise ANDs and a popcount per candidate.
//! - The search runs in degree-ranked index space (most constrained teams
//!   first) and is translated back to names before validation.
//! - Every result is re-checked against the raw member sets; a failing
//!   candidate is dropped, never surfaced.
//!
//! Code cross-refs: `bitset::NodeSet`, `error::{ConfigError, ValidationMismatch}`.
//!
//! Layout
//! - `types.rs` (data types), `build.rs` (construction), `ranking.rs`,
//!   `search.rs` (engine), `validate.rs` (validator + explain),
//!   `generate.rs` (caller wrapper).

mod build;
mod generate;
mod ranking;
mod search;
mod types;
mod validate;

pub use build::build_graph;
pub use generate::{GenerateCfg, Setlist, Setlists};
pub use ranking::Ranking;
pub use search::{PathSearch, SearchStats, SlotError, Slots};
pub use types::{CompatibilityGraph, Team};
pub(crate) use types::TeamId;
pub use validate::PairReport;


#[cfg(test)]
mod props;
