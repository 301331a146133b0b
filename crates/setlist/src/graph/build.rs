//! Graph construction from a team → members mapping.

use std::collections::{HashMap, HashSet};

use crate::bitset::NodeSet;
use crate::error::ConfigError;

use super::types::{CompatibilityGraph, Team, TeamId};

/// Build the compatibility graph (teams as nodes; edges between disjoint member sets).
///
/// Input order is kept and later serves as the ranking tie-break. Members are
/// coerced with `ToString` and trimmed; duplicates collapse. A team name seen
/// twice keeps its first position and takes the later member list.
pub fn build_graph<I, K, M, S>(mapping: I) -> Result<CompatibilityGraph, ConfigError>
where
    I: IntoIterator<Item = (K, M)>,
    K: Into<String>,
    M: IntoIterator<Item = S>,
    S: ToString,
{
    let mut teams: Vec<Team> = Vec::new();
    let mut index: HashMap<String, TeamId> = HashMap::new();
    for (name, members) in mapping {
        let name = name.into();
        let members: HashSet<String> = members
            .into_iter()
            .map(|m| m.to_string().trim().to_string())
            .collect();
        match index.get(&name) {
            Some(&id) => teams[id.0].members = members,
            None => {
                index.insert(name.clone(), TeamId(teams.len()));
                teams.push(Team { name, members });
            }
        }
    }
    if teams.is_empty() {
        return Err(ConfigError::EmptyRoster);
    }

    let n = teams.len();
    let mut adj = vec![NodeSet::empty(n); n];
    // Each unordered pair is tested once and written to both rows.
    for i in 0..n {
        for j in (i + 1)..n {
            if teams[i].is_disjoint(&teams[j]) {
                adj[i].insert(j);
                adj[j].insert(i);
            }
        }
    }

    let graph = CompatibilityGraph { teams, index, adj };
    tracing::debug!(
        teams = graph.len(),
        edges = graph.edge_count(),
        "compatibility graph built"
    );
    Ok(graph)
}

impl CompatibilityGraph {
    /// See [`build_graph`].
    pub fn new<I, K, M, S>(mapping: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, M)>,
        K: Into<String>,
        M: IntoIterator<Item = S>,
        S: ToString,
    {
        build_graph(mapping)
    }
}
