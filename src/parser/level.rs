//! Legacy level record as stored in `levels.json`

use crate::error::{ConversionError, ConversionErrorKind, ConversionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of a car placed on the level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CarKind {
    /// A train that has to reach the target
    Normal,
    /// A train that only gets in the way
    Decoy,
    /// Anything else the legacy data carries; ignored on conversion
    #[serde(other)]
    Other,
}

/// One car entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarRecord {
    #[serde(rename = "type")]
    pub kind: CarKind,
    /// Zero-based (row, col)
    pub pos: (i64, i64),
    /// Legacy direction label (`RIGHT`, `LEFT`, `UP`, `DOWN`)
    pub direction: String,
}

/// One level entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelRecord {
    pub board: Vec<Vec<i64>>,
    pub mods: Vec<Vec<i64>>,
    pub mod_nums: Vec<Vec<i64>>,
    pub cars: Vec<CarRecord>,
    pub tracks: i64,
}

impl LevelRecord {
    /// Decode a raw document entry
    pub fn from_value(name: &str, value: &Value) -> ConversionResult<Self> {
        Self::deserialize(value).map_err(|e| {
            ConversionError::conversion(ConversionErrorKind::invalid_record(name, e.to_string()))
        })
    }

    pub fn height(&self) -> usize {
        self.board.len()
    }

    pub fn width(&self) -> usize {
        self.board.first().map_or(0, Vec::len)
    }

    /// Iterate `(row, col, board, modifier, mod_num)` in row-major order.
    ///
    /// Assumes the grids were checked with
    /// [`validate_grid_shape`](super::validation::validate_grid_shape).
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.board.iter().enumerate().flat_map(move |(r, row)| {
            row.iter().enumerate().map(move |(c, &board)| Cell {
                row: r,
                col: c,
                board,
                modifier: self.mods[r][c],
                mod_num: self.mod_nums[r][c],
            })
        })
    }
}

/// A single grid cell with its codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Zero-based row
    pub row: usize,
    /// Zero-based column
    pub col: usize,
    pub board: i64,
    pub modifier: i64,
    pub mod_num: i64,
}

impl Cell {
    /// One-based (row, col) as written to the output
    pub fn position(&self) -> (i64, i64) {
        (self.row as i64 + 1, self.col as i64 + 1)
    }
}
