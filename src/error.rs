//! Error types
//!
//! Only level construction and configuration loading can fail. Once a
//! `Level` exists, every per-frame operation is total.

use thiserror::Error;

/// Defects in a level layout or its parameter list.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("cell size must be positive")]
    InvalidCellSize,

    #[error("cell at row {row}, col {col} lies outside the pixel coordinate range; reduce the cell size")]
    LevelTooLarge { row: usize, col: usize },

    #[error("layout has no player marker")]
    NoPlayer,

    #[error("layout has more than one player marker (row {}, col {} and row {}, col {})", first.0, first.1, second.0, second.1)]
    MultiplePlayers {
        first: (usize, usize),
        second: (usize, usize),
    },

    #[error("'{symbol}' at row {row}, col {col} has no parameter entry (the list ends after {index})")]
    MissingParameters {
        symbol: char,
        row: usize,
        col: usize,
        index: usize,
    },

    #[error("'{symbol}' at row {row}, col {col} expects {expected}, got {found:?}")]
    MalformedParameters {
        symbol: char,
        row: usize,
        col: usize,
        expected: &'static str,
        found: Vec<i32>,
    },

    #[error("{supplied} parameter entries supplied but the layout only uses {used}")]
    UnusedParameters { used: usize, supplied: usize },

    #[error("no stage at index {index} ({count} stages available)")]
    UnknownStage { index: usize, count: usize },
}

/// Failures while reading configuration or level files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
