//! Data types for the compatibility graph.
//!
//! Kept small and explicit so `build`, `ranking`, and `search` read cleanly.

use std::collections::{HashMap, HashSet};

use crate::bitset::NodeSet;
use crate::error::{ConfigError, TeamRole};

/// Index of a team in input order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct TeamId(pub(crate) usize);

/// A named group and its (trimmed) member identifiers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    pub members: HashSet<String>,
}

impl Team {
    /// Members shared with `other`, sorted for stable reporting.
    pub fn shared_with(&self, other: &Team) -> Vec<String> {
        let (small, large) = if self.members.len() <= other.members.len() {
            (&self.members, &other.members)
        } else {
            (&other.members, &self.members)
        };
        let mut out: Vec<String> = small
            .iter()
            .filter(|m| large.contains(*m))
            .cloned()
            .collect();
        out.sort();
        out
    }

    /// True iff no member is shared. Iterates the smaller set.
    pub fn is_disjoint(&self, other: &Team) -> bool {
        self.members.is_disjoint(&other.members)
    }
}

/// Teams in input order plus one adjacency row per team.
///
/// Bit `j` of `adj[i]` is set iff `i != j` and teams `i`, `j` share no member.
/// Built once; read-only afterwards and safe to share across threads.
#[derive(Clone, Debug)]
pub struct CompatibilityGraph {
    pub(crate) teams: Vec<Team>,
    pub(crate) index: HashMap<String, TeamId>,
    pub(crate) adj: Vec<NodeSet>,
}

impl CompatibilityGraph {
    /// Number of teams (`n`).
    #[inline]
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    /// Always false for a constructed graph; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Teams in input order.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub(crate) fn team(&self, id: TeamId) -> &Team {
        &self.teams[id.0]
    }

    pub(crate) fn id_of(&self, name: &str) -> Option<TeamId> {
        self.index.get(name).copied()
    }

    pub(crate) fn require(&self, name: &str, role: TeamRole) -> Result<TeamId, ConfigError> {
        self.id_of(name).ok_or_else(|| ConfigError::UnknownTeam {
            role,
            name: name.to_string(),
        })
    }

    pub(crate) fn adjacent(&self, a: TeamId, b: TeamId) -> bool {
        self.adj[a.0].contains(b.0)
    }

    /// Number of teams `name` may sit next to.
    pub fn degree(&self, name: &str) -> Result<usize, ConfigError> {
        let id = self.require(name, TeamRole::Query)?;
        Ok(self.adj[id.0].count())
    }

    /// True iff `a` and `b` share no member (and are different teams).
    pub fn is_compatible(&self, a: &str, b: &str) -> Result<bool, ConfigError> {
        let a = self.require(a, TeamRole::Query)?;
        let b = self.require(b, TeamRole::Query)?;
        Ok(self.adjacent(a, b))
    }

    /// Names of the teams that may directly follow (or precede) `name`, in input order.
    pub fn compatible_with(&self, name: &str) -> Result<Vec<&str>, ConfigError> {
        let id = self.require(name, TeamRole::Query)?;
        Ok(self.adj[id.0]
            .iter()
            .map(|j| self.teams[j].name.as_str())
            .collect())
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(NodeSet::count).sum::<usize>() / 2
    }

    /// Member set of a named team, if known.
    pub fn members(&self, name: &str) -> Option<&HashSet<String>> {
        self.id_of(name).map(|id| &self.team(id).members)
    }
}
