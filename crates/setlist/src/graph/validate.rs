//! Independent re-check of sequences against raw member sets, and the
//! pairwise `explain` query.
//!
//! Adjacency bits are not consulted here: every check intersects the member
//! sets directly, so a bug in graph construction or ranking cannot slip an
//! invalid setlist past generation.

use std::fmt;

use crate::error::{ConfigError, TeamRole, ValidationMismatch};

use super::types::{CompatibilityGraph, TeamId};

/// Outcome of [`CompatibilityGraph::explain`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PairReport {
    Compatible {
        first: String,
        second: String,
    },
    /// Shared members, sorted.
    Overlap {
        first: String,
        second: String,
        shared: Vec<String>,
    },
}

impl PairReport {
    pub fn is_compatible(&self) -> bool {
        matches!(self, PairReport::Compatible { .. })
    }
}

impl fmt::Display for PairReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairReport::Compatible { first, second } => {
                write!(f, "{first} and {second} are compatible (no shared members).")
            }
            PairReport::Overlap {
                first,
                second,
                shared,
            } => write!(f, "{first} and {second} share: {shared:?}"),
        }
    }
}

impl CompatibilityGraph {
    /// Check that no two consecutive teams of `seq` share a member.
    ///
    /// Reports the first offending pair. Does not check that `seq` is a
    /// permutation of all teams.
    pub fn validate<S: AsRef<str>>(&self, seq: &[S]) -> Result<(), ValidationMismatch> {
        let ids = seq
            .iter()
            .map(|s| {
                let name = s.as_ref();
                self.id_of(name)
                    .ok_or_else(|| ValidationMismatch::UnknownTeam {
                        name: name.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.validate_ids(&ids)
    }

    pub(crate) fn validate_ids(&self, ids: &[TeamId]) -> Result<(), ValidationMismatch> {
        for pair in ids.windows(2) {
            let (a, b) = (self.team(pair[0]), self.team(pair[1]));
            if !a.is_disjoint(b) {
                return Err(ValidationMismatch::Overlap {
                    first: a.name.clone(),
                    second: b.name.clone(),
                    shared: a.shared_with(b),
                });
            }
        }
        Ok(())
    }

    /// Report what two named teams share, or that they are compatible.
    pub fn explain(&self, first: &str, second: &str) -> Result<PairReport, ConfigError> {
        let a = self.team(self.require(first, TeamRole::Query)?);
        let b = self.team(self.require(second, TeamRole::Query)?);
        let shared = a.shared_with(b);
        Ok(if shared.is_empty() {
            PairReport::Compatible {
                first: a.name.clone(),
                second: b.name.clone(),
            }
        } else {
            PairReport::Overlap {
                first: a.name.clone(),
                second: b.name.clone(),
                shared,
            }
        })
    }
}
