//! Node bit-vector.
//!
//! Purpose
//! - Adjacency rows and the search's used-set are sets of node indices.
//!   `NodeSet` wraps a `BitVec<u64, Lsb0>` so the search keeps word-level
//!   AND, AND-NOT, and popcount with no bound on the node count.
//!
//! Invariants
//! - Bits are only ever set through `insert`, so storage past `width` stays
//!   zero and word-wise operations on the raw slice are exact.
//! - Binary operations require equal widths (checked in debug builds).

use std::fmt;

use bitvec::prelude::*;
use bitvec::slice::IterOnes;

#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct NodeSet {
    bits: BitVec<u64, Lsb0>,
}

impl NodeSet {
    /// Empty set able to hold indices `0..width`.
    pub fn empty(width: usize) -> Self {
        Self {
            bits: bitvec![u64, Lsb0; 0; width],
        }
    }

    /// Set containing every index in `0..width`.
    pub fn full(width: usize) -> Self {
        let mut s = Self::empty(width);
        s.bits.fill(true);
        s
    }

    /// Set containing exactly `index`.
    pub fn singleton(width: usize, index: usize) -> Self {
        let mut s = Self::empty(width);
        s.insert(index);
        s
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn insert(&mut self, index: usize) {
        self.bits.set(index, true);
    }

    #[inline]
    pub fn remove(&mut self, index: usize) {
        self.bits.set(index, false);
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).is_some_and(|b| *b)
    }

    /// Population count.
    #[inline]
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// `self & other`.
    pub fn and(&self, other: &Self) -> Self {
        debug_assert_eq!(self.width(), other.width());
        let mut bits = self.bits.clone();
        bits &= other.bits.as_bitslice();
        Self { bits }
    }

    /// `self & !other`.
    pub fn and_not(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.subtract(other);
        out
    }

    /// In-place `self &= !other`.
    pub fn subtract(&mut self, other: &Self) {
        debug_assert_eq!(self.width(), other.width());
        for (a, b) in self
            .bits
            .as_raw_mut_slice()
            .iter_mut()
            .zip(other.bits.as_raw_slice())
        {
            *a &= !b;
        }
    }

    /// `popcount(self & !other)` without allocating.
    #[inline]
    pub fn count_and_not(&self, other: &Self) -> usize {
        debug_assert_eq!(self.width(), other.width());
        self.bits
            .as_raw_slice()
            .iter()
            .zip(other.bits.as_raw_slice())
            .map(|(a, b)| (a & !b).count_ones() as usize)
            .sum()
    }

    /// Ascending iteration over set bits.
    pub fn iter(&self) -> IterOnes<'_, u64, Lsb0> {
        self.bits.iter_ones()
    }
}

impl fmt::Debug for NodeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a NodeSet {
    type Item = usize;
    type IntoIter = IterOnes<'a, u64, Lsb0>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
