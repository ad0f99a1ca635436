//! Error types for layout parsing and board validation.

use crate::color::Color;

/// Errors that occur when parsing a board layout string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// More than two whitespace-separated fields.
    #[error("expected 1 or 2 layout fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The placement section does not have exactly 8 files.
    #[error("expected 8 files in placement, found {found}")]
    WrongFileCount {
        /// Number of files found.
        found: usize,
    },
    /// A file in the placement describes more or fewer than 8 cells.
    #[error("file {file} describes {length} cells, expected 8")]
    BadFileLength {
        /// Zero-based file index.
        file: usize,
        /// Number of cells described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The side-to-move field is not "p" or "r".
    #[error("invalid side to move: \"{found}\"")]
    InvalidSide {
        /// The invalid side string.
        found: String,
    },
    /// The parsed board fails structural validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying board validation error.
        #[from]
        source: BoardError,
    },
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side has more than one keeper.
    #[error("expected at most 1 keeper for {color}, found {count}")]
    TooManyKeepers {
        /// Which side has the extra keepers.
        color: Color,
        /// Number of keepers found.
        count: usize,
    },
}
