//! Depth-first Hamiltonian-path enumeration with slot reservations.
//!
//! Purpose
//! - Enumerate, one at a time, every ordering of all nodes in which consecutive
//!   nodes are adjacent, optionally with some nodes pinned to fixed slots
//!   (a fixed start is a pin at slot 0, a fixed end a pin at slot n-1).
//!
//! Why this design
//! - An explicit stack of candidate frames replaces recursion, so the search
//!   suspends after each complete path and resumes on the next `next()` call.
//!   Dropping the iterator is the only cancellation needed.
//! - All mutation of `path`/`used` goes through `commit`/`undo`; sibling
//!   branches never observe each other's state.
//!
//! Candidate rules at depth `L`
//! - `L == 0`: the slot-0 pin if any, else every node in index order.
//! - `L > 0`: `adj[last] & !used`. If slot `L` is pinned, the set collapses to
//!   exactly the pinned node when present, else it is empty (dead branch).
//!   Otherwise all pinned nodes are masked out (reserved for their own slot).
//! - Unpinned candidates are ordered by ascending look-ahead degree
//!   `popcount(adj[c] & !used)`, ties by index.
//!
//! A forced end that is unreachable before the last slot is only discovered by
//! backtracking; adversarial graphs can make that slow.

use crate::bitset::NodeSet;

/// Per-slot pins plus the set of all pinned nodes.
#[derive(Clone, Debug)]
pub struct Slots {
    pins: Vec<Option<usize>>,
    reserved: NodeSet,
}

impl Slots {
    /// No pins for `n` slots.
    pub fn open(n: usize) -> Self {
        Self {
            pins: vec![None; n],
            reserved: NodeSet::empty(n),
        }
    }

    /// Pin `node` at `slot`. Pinning the same node twice is a no-op.
    pub fn pin(&mut self, slot: usize, node: usize) -> Result<(), SlotError> {
        let len = self.len();
        if slot >= len || node >= len {
            return Err(SlotError::OutOfRange { slot, node, len });
        }
        match self.pins[slot] {
            Some(occupant) if occupant != node => Err(SlotError::Taken { slot, occupant }),
            _ => {
                self.pins[slot] = Some(node);
                self.reserved.insert(node);
                Ok(())
            }
        }
    }

    #[inline]
    pub fn pinned_at(&self, slot: usize) -> Option<usize> {
        self.pins.get(slot).copied().flatten()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }
}

/// Why a pin could not be placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotError {
    OutOfRange { slot: usize, node: usize, len: usize },
    /// A different node already holds the slot.
    Taken { slot: usize, occupant: usize },
}

/// Counters for one enumeration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Partial paths whose candidate set was computed.
    pub expanded: u64,
    /// Partial paths with no candidates.
    pub dead_ends: u64,
    /// Complete paths yielded by the engine.
    pub emitted: u64,
    /// Complete paths dropped by validation (filled in by the caller wrapper).
    pub rejected: u64,
}

#[derive(Debug)]
struct Frame {
    candidates: Vec<usize>,
    next: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Fresh,
    Running,
    Done,
}

/// Lazy enumerator of complete paths over an adjacency array.
///
/// Finite and deterministic: a fresh instance over the same inputs yields the
/// same sequence. Not restartable mid-stream.
#[derive(Debug)]
pub struct PathSearch {
    adj: Vec<NodeSet>,
    slots: Slots,
    path: Vec<usize>,
    used: NodeSet,
    frames: Vec<Frame>,
    phase: Phase,
    stats: SearchStats,
}

impl PathSearch {
    /// `adj` must be symmetric and irreflexive with rows of width `adj.len()`;
    /// `slots.len()` must equal `adj.len()`.
    pub fn new(adj: Vec<NodeSet>, slots: Slots) -> Self {
        let n = adj.len();
        debug_assert_eq!(slots.len(), n);
        Self {
            adj,
            slots,
            path: Vec::with_capacity(n),
            used: NodeSet::empty(n),
            frames: Vec::with_capacity(n),
            phase: Phase::Fresh,
            stats: SearchStats::default(),
        }
    }

    /// Convenience constructor for the optional start/end case.
    ///
    /// With one node, start and end share slot 0 and must name that node.
    pub fn with_endpoints(
        adj: Vec<NodeSet>,
        start: Option<usize>,
        end: Option<usize>,
    ) -> Result<Self, SlotError> {
        let n = adj.len();
        let mut slots = Slots::open(n);
        if let Some(s) = start {
            slots.pin(0, s)?;
        }
        if let Some(e) = end {
            slots.pin(n.saturating_sub(1), e)?;
        }
        Ok(Self::new(adj, slots))
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[inline]
    fn n(&self) -> usize {
        self.adj.len()
    }

    fn commit(&mut self, c: usize) {
        self.used.insert(c);
        self.path.push(c);
    }

    fn undo(&mut self) {
        if let Some(c) = self.path.pop() {
            self.used.remove(c);
        }
    }

    /// Candidates for the slot at depth `path.len()`.
    fn candidates(&mut self) -> Vec<usize> {
        self.stats.expanded += 1;
        let depth = self.path.len();
        let Some(&last) = self.path.last() else {
            return match self.slots.pinned_at(0) {
                Some(s) => vec![s],
                None => (0..self.n()).collect(),
            };
        };
        let mut allowed = self.adj[last].and_not(&self.used);
        if let Some(p) = self.slots.pinned_at(depth) {
            return if allowed.contains(p) { vec![p] } else { Vec::new() };
        }
        allowed.subtract(&self.slots.reserved);
        let mut out: Vec<usize> = allowed.iter().collect();
        // stable: ties stay in ascending index order
        out.sort_by_key(|&c| self.adj[c].count_and_not(&self.used));
        out
    }

    /// Final slot filled: honour the last-slot pin (redundant with the
    /// candidate rule, kept as the terminal check).
    fn accepts_complete(&self) -> bool {
        let last = self.n().checked_sub(1).and_then(|l| self.slots.pinned_at(l));
        match last {
            Some(e) => self.path.last() == Some(&e),
            None => true,
        }
    }
}

impl Iterator for PathSearch {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        match self.phase {
            Phase::Done => return None,
            Phase::Fresh => {
                let root = self.candidates();
                self.frames.push(Frame {
                    candidates: root,
                    next: 0,
                });
                self.phase = Phase::Running;
            }
            Phase::Running => {}
        }
        let n = self.n();
        loop {
            let Some(frame) = self.frames.last_mut() else {
                self.phase = Phase::Done;
                return None;
            };
            let Some(&c) = frame.candidates.get(frame.next) else {
                // Frame exhausted: drop it and retract the choice that opened it.
                self.frames.pop();
                self.undo();
                continue;
            };
            frame.next += 1;
            self.commit(c);

            if self.path.len() == n {
                let found = self.accepts_complete().then(|| self.path.clone());
                self.undo();
                if let Some(p) = found {
                    self.stats.emitted += 1;
                    return Some(p);
                }
                continue;
            }

            let next = self.candidates();
            if next.is_empty() {
                self.stats.dead_ends += 1;
                self.undo();
                continue;
            }
            self.frames.push(Frame {
                candidates: next,
                next: 0,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adj_from_edges(n: usize, edges: &[(usize, usize)]) -> Vec<NodeSet> {
        let mut adj = vec![NodeSet::empty(n); n];
        for &(a, b) in edges {
            adj[a].insert(b);
            adj[b].insert(a);
        }
        adj
    }

    #[test]
    fn path_graph_has_two_orientations() {
        // 0 - 1 - 2
        let adj = adj_from_edges(3, &[(0, 1), (1, 2)]);
        let got: Vec<_> = PathSearch::with_endpoints(adj, None, None).unwrap().collect();
        assert_eq!(got, vec![vec![0, 1, 2], vec![2, 1, 0]]);
    }

    #[test]
    fn single_node_yields_itself_with_and_without_endpoints() {
        let adj = vec![NodeSet::empty(1)];
        assert_eq!(
            PathSearch::with_endpoints(adj.clone(), None, None)
                .unwrap()
                .collect::<Vec<_>>(),
            vec![vec![0]]
        );
        assert_eq!(
            PathSearch::with_endpoints(adj, Some(0), Some(0))
                .unwrap()
                .collect::<Vec<_>>(),
            vec![vec![0]]
        );
    }

    #[test]
    fn disconnected_graph_yields_nothing() {
        let adj = adj_from_edges(4, &[(0, 1), (2, 3)]);
        let mut s = PathSearch::with_endpoints(adj, None, None).unwrap();
        assert!(s.next().is_none());
        // stays exhausted
        assert!(s.next().is_none());
        assert!(s.stats().dead_ends > 0);
    }

    #[test]
    fn end_is_reserved_until_last_slot() {
        // triangle plus pendant: 0-1, 1-2, 0-2, 2-3
        let adj = adj_from_edges(4, &[(0, 1), (1, 2), (0, 2), (2, 3)]);
        let got: Vec<_> = PathSearch::with_endpoints(adj, None, Some(3)).unwrap().collect();
        assert_eq!(got, vec![vec![0, 1, 2, 3], vec![1, 0, 2, 3]]);
    }

    #[test]
    fn same_start_and_end_with_several_nodes_is_empty() {
        let adj = adj_from_edges(3, &[(0, 1), (1, 2), (0, 2)]);
        assert_eq!(PathSearch::with_endpoints(adj, Some(1), Some(1)).unwrap().count(), 0);
    }

    #[test]
    fn lookahead_order_prefers_tighter_neighbor() {
        // From 0, node 1 still has {3, 4} open, node 2 only {3}: 2 goes first.
        let adj = adj_from_edges(5, &[(0, 1), (0, 2), (2, 3), (1, 3), (1, 4), (3, 4)]);
        let first = PathSearch::with_endpoints(adj, Some(0), None).unwrap().next();
        assert_eq!(first, Some(vec![0, 2, 3, 1, 4]));
    }

    #[test]
    fn slot_pin_conflict_reports_occupant() {
        let mut slots = Slots::open(3);
        assert!(slots.pin(1, 2).is_ok());
        assert!(slots.pin(1, 2).is_ok());
        assert_eq!(slots.pin(1, 0), Err(SlotError::Taken { slot: 1, occupant: 2 }));
        assert_eq!(
            slots.pin(3, 0),
            Err(SlotError::OutOfRange { slot: 3, node: 0, len: 3 })
        );
    }

    #[test]
    fn endpoints_on_empty_or_single_node_graphs() {
        assert_eq!(
            PathSearch::with_endpoints(Vec::new(), None, Some(0)).unwrap_err(),
            SlotError::OutOfRange { slot: 0, node: 0, len: 0 }
        );
        let mut empty = PathSearch::with_endpoints(Vec::new(), None, None).unwrap();
        assert!(empty.next().is_none());
        assert_eq!(
            PathSearch::with_endpoints(vec![NodeSet::empty(1)], Some(0), Some(1)).unwrap_err(),
            SlotError::OutOfRange { slot: 0, node: 1, len: 1 }
        );
        let adj = adj_from_edges(3, &[(0, 1), (1, 2)]);
        assert_eq!(
            PathSearch::with_endpoints(adj, Some(0), Some(0)).map(Iterator::count),
            Ok(0)
        );
    }
}
