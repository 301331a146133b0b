//! Setlist search: order teams so that no two consecutive teams share a member.
//!
//! Teams are nodes of a compatibility graph (edge iff member sets are
//! disjoint); a setlist is a Hamiltonian path of that graph. The crate builds
//! the graph once and then enumerates setlists lazily, with optional fixed
//! start/end teams and pinned positions.
//!
//! ```
//! use setlist::{CompatibilityGraph, GenerateCfg};
//!
//! let graph = CompatibilityGraph::new([
//!     ("a", vec!["x"]),
//!     ("b", vec!["y"]),
//!     ("c", vec!["x"]),
//! ])
//! .unwrap();
//! let all: Vec<_> = graph.generate(&GenerateCfg::default()).unwrap().collect();
//! assert_eq!(all, vec![vec!["a", "b", "c"], vec!["c", "b", "a"]]);
//! ```

pub mod bitset;
pub mod error;
pub mod graph;
pub mod random;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use bitset::NodeSet;
pub use error::{ConfigError, TeamRole, ValidationMismatch};
pub use graph::{
    build_graph, CompatibilityGraph, GenerateCfg, PairReport, SearchStats, Setlist, Setlists,
    Team,
};

/// Common exports for callers.
pub mod prelude {
    pub use crate::error::{ConfigError, ValidationMismatch};
    pub use crate::graph::{CompatibilityGraph, GenerateCfg, PairReport, Setlist};
}
