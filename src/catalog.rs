//! Reads `<length>, <price>` records into a [`Catalog`].
//!
//! Reading stops at the first record that is not two comma separated integers.
//! That is the end of the catalog, not an error.

use crate::config::Limits;
use crate::types::{Catalog, Piece};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingested {
    pub catalog: Catalog,
    /// Capacity was reached while unread input remained.
    pub truncated: bool,
}

pub fn read_catalog(input: &str, limits: &Limits) -> Ingested {
    let mut records = Records::new(input);
    let mut catalog = Catalog::new();
    while catalog.len() < limits.max_pieces {
        match records.next() {
            Some(piece) => catalog.push(piece),
            None => break,
        }
    }

    let truncated = catalog.len() >= limits.max_pieces && records.has_remaining();
    if truncated {
        log::warn!(
            "Max piece count reached ({}), ignoring remaining input",
            limits.max_pieces
        );
    }

    log::debug!("read {} catalog pieces", catalog.len());
    Ingested { catalog, truncated }
}

/// Iterator over well-formed records; fuses at the first malformed one.
struct Records<'a> {
    rest: &'a str,
    done: bool,
}

impl<'a> Records<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            rest: input,
            done: false,
        }
    }

    fn has_remaining(&self) -> bool {
        !self.rest.trim_start().is_empty()
    }

    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start();
    }

    fn integer(&mut self) -> Option<i64> {
        self.skip_whitespace();
        let sign = usize::from(self.rest.starts_with(['+', '-']));
        let digits = self.rest[sign..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if digits == 0 {
            return None;
        }
        let (token, rest) = self.rest.split_at(sign + digits);
        let value = token.parse().ok()?;
        self.rest = rest;
        Some(value)
    }

    fn comma(&mut self) -> Option<()> {
        self.skip_whitespace();
        self.rest = self.rest.strip_prefix(',')?;
        Some(())
    }

    fn record(&mut self) -> Option<Piece> {
        let length = self.integer()?;
        self.comma()?;
        let price = self.integer()?;
        Some(Piece::new(length, price))
    }
}

impl Iterator for Records<'_> {
    type Item = Piece;

    fn next(&mut self) -> Option<Piece> {
        if self.done {
            return None;
        }
        let piece = self.record();
        self.done = piece.is_none();
        piece
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pieces(input: &str) -> Vec<Piece> {
        read_catalog(input, &Limits::default()).catalog.pieces
    }

    #[test]
    fn reads_lines_in_order() {
        assert_eq!(
            pieces("1, 1\n2, 5\n3, 8\n"),
            vec![Piece::new(1, 1), Piece::new(2, 5), Piece::new(3, 8)]
        );
    }

    #[test]
    fn tolerates_spacing_and_line_layout() {
        assert_eq!(
            pieces("  4,10   5 ,\n 12\n\n+6,-3"),
            vec![Piece::new(4, 10), Piece::new(5, 12), Piece::new(6, -3)]
        );
    }

    #[test]
    fn stops_at_first_malformed_record() {
        assert_eq!(
            pieces("1, 2\n3; 4\n5, 6\n"),
            vec![Piece::new(1, 2)]
        );
        assert_eq!(pieces("2, 3\n7\n"), vec![Piece::new(2, 3)]);
        assert_eq!(pieces("x, 1\n"), Vec::new());
        assert_eq!(pieces("1, -\n"), Vec::new());
    }

    #[test]
    fn overflowing_integer_ends_catalog() {
        assert_eq!(
            pieces("1, 1\n99999999999999999999, 1\n"),
            vec![Piece::new(1, 1)]
        );
    }

    #[test]
    fn keeps_duplicates_and_invalid_pieces() {
        assert_eq!(
            pieces("2, 5\n2, 5\n0, 3\n-1, 4\n"),
            vec![
                Piece::new(2, 5),
                Piece::new(2, 5),
                Piece::new(0, 3),
                Piece::new(-1, 4)
            ]
        );
    }

    #[test]
    fn empty_input() {
        let ingested = read_catalog("", &Limits::default());
        assert!(ingested.catalog.is_empty());
        assert!(!ingested.truncated);
    }

    #[test]
    fn truncates_at_capacity() {
        let limits = Limits {
            max_pieces: 2,
            ..Limits::default()
        };
        let ingested = read_catalog("1, 1\n2, 2\n3, 3\n", &limits);
        assert_eq!(ingested.catalog.len(), 2);
        assert!(ingested.truncated);
    }

    #[test]
    fn exact_capacity_is_not_truncation() {
        let limits = Limits {
            max_pieces: 2,
            ..Limits::default()
        };
        let ingested = read_catalog("1, 1\n2, 2\n  \n", &limits);
        assert_eq!(ingested.catalog.len(), 2);
        assert!(!ingested.truncated);
    }

    #[test]
    fn trailing_text_after_full_catalog_is_truncation() {
        let limits = Limits {
            max_pieces: 2,
            ..Limits::default()
        };
        let ingested = read_catalog("1, 1\n2, 2\ngarbage\n", &limits);
        assert_eq!(ingested.catalog.len(), 2);
        assert!(ingested.truncated);
    }

    #[test]
    fn default_capacity_is_one_hundred() {
        let input = "1, 1\n".repeat(150);
        let ingested = read_catalog(&input, &Limits::default());
        assert_eq!(ingested.catalog.len(), 100);
        assert!(ingested.truncated);
    }
}
