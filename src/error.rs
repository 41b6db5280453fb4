//! Error types for grid construction and pattern loading.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors that can occur while building a [`Grid`](crate::Grid).
#[derive(Debug, Error)]
pub enum GridError {
    /// Either side of the grid is zero.
    #[error("invalid grid dimensions: {rows}x{cols} (both sides must be positive)")]
    InvalidDimension { rows: usize, cols: usize },

    /// The pattern file could not be opened or read.
    #[error("pattern source {} is unavailable: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The pattern source was read but its content is malformed.
    #[error("malformed pattern: {0}")]
    PatternFormat(#[from] PatternError),
}

/// Structural defects of a pattern source. Positions are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// No non-blank lines at all.
    #[error("pattern is empty")]
    Empty,

    /// A row whose length differs from the first row.
    #[error("line {line}: expected {expected} cells, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A character other than `0` or `1`.
    #[error("line {line}, column {column}: unexpected symbol {symbol:?}")]
    InvalidSymbol {
        line: usize,
        column: usize,
        symbol: char,
    },

    /// A blank line between two rows of the pattern body.
    #[error("line {line}: blank line inside pattern body")]
    EmbeddedBlankLine { line: usize },
}
