//! Rod cutting by dynamic programming.
//!
//! A rod of integer length is cut into pieces from a [`Catalog`] of
//! `(length, price)` entries, each usable any number of times, so that the
//! summed price is maximal. Length that no piece can use is left over as the
//! remainder.
//!
//! ```
//! use rodcut::{Catalog, Piece, Problem};
//!
//! let catalog: Catalog = [(1, 1), (2, 5), (3, 8)]
//!     .into_iter()
//!     .map(|(length, price)| Piece::new(length, price))
//!     .collect();
//! let solution = Problem::new(4, catalog).solve().unwrap();
//! assert_eq!(solution.to_string(), "2 @ 2 = 10\nRemainder: 0\nValue: 10\n");
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod types;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use crate::catalog::{Ingested, read_catalog};
pub use crate::cli::{Args, Format};
pub use crate::config::Limits;
pub use crate::error::RodCutError;
pub use crate::types::{Catalog, Cut, Piece, Solution};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub rod_length: usize,
    pub catalog: Catalog,
}

impl Problem {
    pub fn new(rod_length: usize, catalog: Catalog) -> Self {
        Self {
            rod_length,
            catalog,
        }
    }

    pub fn solve(&self) -> Result<Solution, RodCutError> {
        let table = DpTable::fill(self.rod_length, &self.catalog)?;
        let value = table.best_value(self.rod_length);

        // Nothing improved on an uncut rod
        if value == 0 {
            return Ok(Solution {
                cuts: Vec::new(),
                remainder: self.rod_length,
                value: 0,
            });
        }

        let (usage, remainder) = table.backtrace(&self.catalog);
        let cuts = create_cuts(&usage, &self.catalog);
        log::debug!(
            "cut plan uses {} distinct pieces, remainder {}, value {}",
            cuts.len(),
            remainder,
            value
        );

        Ok(Solution {
            cuts,
            remainder,
            value,
        })
    }
}

/// Bottom-up table over sub-lengths `0..=rod_length`.
///
/// `best_value[len]` is the most a rod of length `len` is worth and
/// `choice[len]` the catalog index of the first piece cut from it, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpTable {
    best_value: Vec<i64>,
    choice: Vec<Option<usize>>,
}

impl DpTable {
    pub fn fill(rod_length: usize, catalog: &Catalog) -> Result<Self, RodCutError> {
        let size = rod_length.saturating_add(1);
        let mut best_value = allocate(size, 0i64)?;
        let mut choice = allocate(size, None)?;

        for length in 1..=rod_length {
            for (index, piece) in catalog.iter().enumerate() {
                let Some(piece_length) = piece.usable_length().filter(|&l| l <= length) else {
                    continue;
                };
                let candidate = piece.price.saturating_add(best_value[length - piece_length]);
                // Strict comparison: on ties the earliest catalog entry stays chosen
                if candidate > best_value[length] {
                    best_value[length] = candidate;
                    choice[length] = Some(index);
                }
            }
        }

        log::debug!(
            "filled table for rod length {} over {} pieces",
            rod_length,
            catalog.len()
        );
        Ok(Self { best_value, choice })
    }

    pub fn rod_length(&self) -> usize {
        self.best_value.len() - 1
    }

    pub fn best_value(&self, length: usize) -> i64 {
        self.best_value[length]
    }

    pub fn choice(&self, length: usize) -> Option<usize> {
        self.choice[length]
    }

    /// Follow the recorded first pieces down from the full rod length.
    ///
    /// Returns usage counts keyed by catalog index and the length left over
    /// once no piece is recorded.
    pub fn backtrace(&self, catalog: &Catalog) -> (BTreeMap<usize, usize>, usize) {
        let mut usage = BTreeMap::new();
        let mut remainder = self.rod_length();

        while remainder > 0 {
            let Some(index) = self.choice[remainder] else {
                break;
            };
            let Some(piece_length) = catalog.get(index).and_then(|p| p.usable_length()) else {
                break;
            };
            *usage.entry(index).or_insert(0) += 1;
            remainder -= piece_length;
        }

        (usage, remainder)
    }
}

fn allocate<T: Clone>(len: usize, value: T) -> Result<Vec<T>, RodCutError> {
    let mut values = Vec::new();
    values.try_reserve_exact(len)?;
    values.resize(len, value);
    Ok(values)
}

/// Turn usage counts into report lines, in catalog order
fn create_cuts(usage: &BTreeMap<usize, usize>, catalog: &Catalog) -> Vec<Cut> {
    usage
        .iter()
        .filter_map(|(&index, &count)| {
            let piece = catalog.get(index)?;
            let value = i64::try_from(count)
                .unwrap_or(i64::MAX)
                .saturating_mul(piece.price);

            (count > 0).then_some(Cut {
                index,
                count,
                length: piece.length,
                value,
            })
        })
        .collect()
}

/// Render a solution in the requested output format
pub fn render(solution: &Solution, format: Format) -> Result<String, RodCutError> {
    match format {
        Format::Text => Ok(solution.to_string()),
        Format::Yaml => Ok(serde_yaml::to_string(solution)?),
    }
}
