//! Level record validation

use crate::error::{ConversionError, ConversionErrorKind, ConversionResult};
use crate::parser::LevelRecord;

/// Check that `mods` and `mod_nums` line up with `board` row for row.
///
/// `board` rows themselves are not required to share a length; the width
/// written to the output is taken from the first row.
pub fn validate_grid_shape(name: &str, level: &LevelRecord) -> ConversionResult<()> {
    for (label, grid) in [("mods", &level.mods), ("mod_nums", &level.mod_nums)] {
        if grid.len() != level.board.len() {
            return Err(mismatch(
                name,
                format!(
                    "{} has {} rows, board has {}",
                    label,
                    grid.len(),
                    level.board.len()
                ),
            ));
        }

        for (r, (row, board_row)) in grid.iter().zip(&level.board).enumerate() {
            if row.len() != board_row.len() {
                return Err(mismatch(
                    name,
                    format!(
                        "{} row {} has {} columns, board has {}",
                        label,
                        r,
                        row.len(),
                        board_row.len()
                    ),
                ));
            }
        }
    }

    Ok(())
}

fn mismatch(name: &str, message: String) -> ConversionError {
    ConversionError::conversion(ConversionErrorKind::shape_mismatch(name, message))
}
