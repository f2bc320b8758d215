//! Capacity limits for a single run.

use crate::error::RodCutError;

pub const DEFAULT_MAX_PIECES: usize = 100;
pub const DEFAULT_MAX_ROD_LENGTH: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Catalog entries kept; further input is discarded with a warning.
    pub max_pieces: usize,
    /// Largest accepted rod length.
    pub max_rod_length: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_pieces: DEFAULT_MAX_PIECES,
            max_rod_length: DEFAULT_MAX_ROD_LENGTH,
        }
    }
}

impl Limits {
    /// Accept `1..=max_rod_length`, anything else is a usage error.
    pub fn validate_rod_length(&self, length: i64) -> Result<usize, RodCutError> {
        usize::try_from(length)
            .ok()
            .filter(|&len| (1..=self.max_rod_length).contains(&len))
            .ok_or(RodCutError::RodLengthOutOfRange {
                length,
                max: self.max_rod_length,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        let limits = Limits::default();
        assert_eq!(limits.validate_rod_length(1).unwrap(), 1);
        assert_eq!(limits.validate_rod_length(100).unwrap(), 100);
    }

    #[test]
    fn rejects_out_of_range() {
        let limits = Limits::default();
        for length in [0, -1, 101, i64::MIN, i64::MAX] {
            let err = limits.validate_rod_length(length).unwrap_err();
            assert!(
                matches!(err, RodCutError::RodLengthOutOfRange { max: 100, .. }),
                "{length}"
            );
        }
    }

    #[test]
    fn message_names_configured_bound() {
        let limits = Limits {
            max_pieces: 5,
            max_rod_length: 250,
        };
        assert_eq!(limits.validate_rod_length(250).unwrap(), 250);
        let err = limits.validate_rod_length(251).unwrap_err();
        assert_eq!(err.to_string(), "Rod length must be between 1 and 250.");
    }
}
