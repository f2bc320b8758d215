use serde::{Deserialize, Serialize};
use std::fmt;

/// One catalog entry. Identity is the position in the catalog, not the length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub length: i64,
    pub price: i64,
}

impl Piece {
    pub fn new(length: i64, price: i64) -> Self {
        Self { length, price }
    }

    /// Length usable as a table offset. Pieces that would not shorten the rod
    /// are never cut.
    pub fn usable_length(&self) -> Option<usize> {
        usize::try_from(self.length).ok().filter(|&len| len > 0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    pub pieces: Vec<Piece>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, piece: Piece) {
        self.pieces.push(piece);
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Piece> {
        self.pieces.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }
}

impl FromIterator<Piece> for Catalog {
    fn from_iter<I: IntoIterator<Item = Piece>>(iter: I) -> Self {
        Self {
            pieces: iter.into_iter().collect(),
        }
    }
}

/// How often a single catalog entry is used in a cut plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cut {
    pub index: usize,
    pub count: usize,
    pub length: i64,
    /// `count * price` of the piece.
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub cuts: Vec<Cut>,
    pub remainder: usize,
    pub value: i64,
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cut in &self.cuts {
            writeln!(f, "{} @ {} = {}", cut.count, cut.length, cut.value)?;
        }
        writeln!(f, "Remainder: {}", self.remainder)?;
        writeln!(f, "Value: {}", self.value)
    }
}
