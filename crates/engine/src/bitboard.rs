//! Square sets backed by a 64-bit bitboard.

use crate::constants::SQUARE_COUNT;
use crate::coords::square_name;
use std::fmt;

// One bit per cell; an 8x8 board fits exactly.
pub type Bitboard = u64;

// --- Pre-computed Masks ---
pub const SQUARE_MASKS: [Bitboard; SQUARE_COUNT] = {
    let mut masks = [0; SQUARE_COUNT];
    let mut i = 0;
    while i < SQUARE_COUNT {
        masks[i] = 1 << i;
        i += 1;
    }
    masks
};

/// An unordered set of board indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SquareSet(Bitboard);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);

    pub fn new() -> Self {
        Self::EMPTY
    }

    pub fn insert(&mut self, index: usize) {
        self.0 |= SQUARE_MASKS[index];
    }

    pub fn contains(self, index: usize) -> bool {
        index < SQUARE_COUNT && self.0 & SQUARE_MASKS[index] != 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the members in ascending index order.
    pub fn iter(self) -> SquareIter {
        SquareIter(self.0)
    }
}

pub struct SquareIter(Bitboard);

impl Iterator for SquareIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for SquareIter {}

impl IntoIterator for SquareSet {
    type Item = usize;
    type IntoIter = SquareIter;

    fn into_iter(self) -> SquareIter {
        self.iter()
    }
}

impl FromIterator<usize> for SquareSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = SquareSet::new();
        for index in iter {
            set.insert(index);
        }
        set
    }
}

/// Space separated square names, e.g. `b4 d4`.
impl fmt::Display for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names: Vec<String> = self.iter().map(square_name).collect();
        write!(f, "{}", names.join(" "))
    }
}
