//! Command-line argument definitions.

use clap::{Parser, ValueEnum};

use crate::config::{DEFAULT_MAX_PIECES, DEFAULT_MAX_ROD_LENGTH, Limits};

/// Cut a rod into catalog pieces for maximum value.
///
/// The catalog is read from standard input as `<length>, <price>` records.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Length of the rod to cut
    #[arg(allow_negative_numbers = true)]
    pub rod_length: i64,

    /// Maximum number of catalog pieces to read
    #[arg(long, default_value_t = DEFAULT_MAX_PIECES)]
    pub max_pieces: usize,

    /// Maximum accepted rod length
    #[arg(long, default_value_t = DEFAULT_MAX_ROD_LENGTH)]
    pub max_rod_length: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Yaml,
}

impl Args {
    pub fn limits(&self) -> Limits {
        Limits {
            max_pieces: self.max_pieces,
            max_rod_length: self.max_rod_length,
        }
    }
}
