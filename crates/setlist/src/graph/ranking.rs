//! Degree ranking: visit the most constrained teams first.
//!
//! Nodes are sorted by ascending degree; ties keep input order (stable sort).
//! The search then runs entirely in rank space, and results are translated
//! back through `order`. The rank-space adjacency is built once per search by
//! [`Ranking::adjacency`] and handed to the engine, which owns it.

use crate::bitset::NodeSet;

use super::types::CompatibilityGraph;

#[derive(Clone, Debug)]
pub struct Ranking<'g> {
    /// `order[rank]` = input index.
    pub order: Vec<usize>,
    /// `rank_of[input index]` = rank.
    pub rank_of: Vec<usize>,
    /// Team names aligned to rank order.
    pub names: Vec<&'g str>,
}

impl<'g> Ranking<'g> {
    pub fn by_degree(graph: &'g CompatibilityGraph) -> Self {
        let n = graph.len();
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by_key(|&i| graph.adj[i].count());

        let mut rank_of = vec![0; n];
        for (rank, &orig) in order.iter().enumerate() {
            rank_of[orig] = rank;
        }

        let names = order
            .iter()
            .map(|&orig| graph.teams[orig].name.as_str())
            .collect();

        Self {
            order,
            rank_of,
            names,
        }
    }

    /// Adjacency rows indexed by rank, bit positions also ranks.
    pub fn adjacency(&self, graph: &CompatibilityGraph) -> Vec<NodeSet> {
        let n = self.len();
        self.order
            .iter()
            .map(|&orig| {
                let mut row = NodeSet::empty(n);
                for j in graph.adj[orig].iter() {
                    row.insert(self.rank_of[j]);
                }
                row
            })
            .collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Translate a rank-space path to input indices.
    pub fn to_input(&self, path: &[usize]) -> Vec<usize> {
        path.iter().map(|&r| self.order[r]).collect()
    }
}
