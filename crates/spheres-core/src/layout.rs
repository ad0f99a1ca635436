//! Layout string parsing and serialization for [`Board`].
//!
//! A layout is eight `/`-separated groups, one per file starting at file 0.
//! Each group describes ranks 0..7: `S`/`K` are Purple sphere/keeper, `s`/`k`
//! are Red, and a digit skips that many empty cells. An optional second
//! field gives the side to move (`p` or `r`, default `p`).

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::cell::Cell;
use crate::color::Color;
use crate::error::LayoutError;
use crate::piece::Piece;

/// The layout string for the standard starting position.
pub const STARTING_LAYOUT: &str = "4K3/SSSSSSSS/8/8/8/8/ssssssss/4k3 p";

impl FromStr for Board {
    type Err = LayoutError;

    fn from_str(layout: &str) -> Result<Board, LayoutError> {
        let fields: Vec<&str> = layout.split_whitespace().collect();
        if fields.is_empty() || fields.len() > 2 {
            return Err(LayoutError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let files: Vec<&str> = fields[0].split('/').collect();
        if files.len() != 8 {
            return Err(LayoutError::WrongFileCount { found: files.len() });
        }

        let mut board = Board::empty();

        for (file, group) in files.iter().enumerate() {
            let mut rank: usize = 0;

            for c in group.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(LayoutError::InvalidPieceChar { character: c });
                    }
                    rank += digit as usize;
                    continue;
                }

                let piece =
                    Piece::from_layout_char(c).ok_or(LayoutError::InvalidPieceChar { character: c })?;
                let cell = Cell::new(file as u8, rank as u8).ok_or(LayoutError::BadFileLength {
                    file,
                    length: rank + 1,
                })?;
                board.put(cell, piece);
                rank += 1;
            }

            if rank != 8 {
                return Err(LayoutError::BadFileLength { file, length: rank });
            }
        }

        let side_to_move = match fields.get(1).copied() {
            None | Some("p") => Color::Purple,
            Some("r") => Color::Red,
            Some(other) => {
                return Err(LayoutError::InvalidSide {
                    found: other.to_string(),
                });
            }
        };
        board.set_side_to_move(side_to_move);

        board.validate()?;
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for file in 0u8..8 {
            let mut empty_count = 0u8;

            for rank in 0u8..8 {
                match Cell::new(file, rank).and_then(|cell| self.piece_at(cell)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }

            if file < 7 {
                write!(f, "/")?;
            }
        }

        write!(f, " {}", self.side_to_move())
    }
}
