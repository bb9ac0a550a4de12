//! Core conversion engine: one legacy level record to one `.dzn` record

use crate::conversion::tables::{self, modifier, Direction, Piece, SwitchControl};
use crate::conversion::ConversionResult;
use crate::error::{ConversionError, ConversionErrorKind};
use crate::formatter::DznFormatter;
use crate::parser::validation::validate_grid_shape;
use crate::parser::{CarKind, LevelRecord};
use serde_json::Value;
use std::collections::BTreeMap;

/// A car on its starting cell (one-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarPlacement {
    pub row: i64,
    pub col: i64,
    pub direction: Direction,
}

/// A piece present at level start (one-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PiecePlacement {
    pub row: i64,
    pub col: i64,
    pub piece: Piece,
}

/// Two linked tunnel mouths with the direction a train leaves each one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TunnelPair {
    pub first: (i64, i64),
    pub first_exit: Direction,
    pub second: (i64, i64),
    pub second_exit: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gate {
    pub row: i64,
    pub col: i64,
    pub group: i64,
    pub open: bool,
}

/// A `(row, col, id)` record: activations, toggled switches and stations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupedCell {
    pub row: i64,
    pub col: i64,
    pub id: i64,
}

/// Everything collected from one level, ready to be formatted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelData {
    pub width: usize,
    pub height: usize,
    pub tracks: i64,
    pub target: (i64, i64),
    pub trains: Vec<CarPlacement>,
    pub decoys: Vec<CarPlacement>,
    pub init_pos: Vec<PiecePlacement>,
    pub tunnel_pairs: Vec<TunnelPair>,
    pub gates: Vec<Gate>,
    pub activations: Vec<GroupedCell>,
    pub dswitches: Vec<GroupedCell>,
    pub stations: Vec<GroupedCell>,
}

/// Converts a single level
pub struct LevelConverter<'a> {
    name: &'a str,
    level: &'a LevelRecord,
}

impl<'a> LevelConverter<'a> {
    pub fn new(name: &'a str, level: &'a LevelRecord) -> Self {
        Self { name, level }
    }

    /// Collect all records of the level
    pub fn convert(&self) -> ConversionResult<LevelData> {
        validate_grid_shape(self.name, self.level)?;

        let target = self.find_target()?;
        let (trains, decoys) = self.collect_cars()?;
        let (init_pos, dswitches) = self.collect_pieces();
        let tunnel_pairs = self.collect_tunnel_pairs();
        let (gates, activations) = self.collect_gates_and_activations();
        let stations = self.collect_stations()?;

        Ok(LevelData {
            width: self.level.width(),
            height: self.level.height(),
            tracks: self.level.tracks,
            target,
            trains,
            decoys,
            init_pos,
            tunnel_pairs,
            gates,
            activations,
            dswitches,
            stations,
        })
    }

    /// First ending-track cell in row-major order
    fn find_target(&self) -> ConversionResult<(i64, i64)> {
        self.level
            .cells()
            .find(|cell| cell.board == tables::ENDING_TRACK)
            .map(|cell| cell.position())
            .ok_or_else(|| {
                ConversionError::conversion(ConversionErrorKind::missing_target(self.name))
            })
    }

    fn collect_cars(&self) -> ConversionResult<(Vec<CarPlacement>, Vec<CarPlacement>)> {
        let mut trains = Vec::new();
        let mut decoys = Vec::new();

        for car in &self.level.cars {
            let list = match car.kind {
                CarKind::Normal => &mut trains,
                CarKind::Decoy => &mut decoys,
                CarKind::Other => continue,
            };

            let direction = tables::direction_for_label(&car.direction).ok_or_else(|| {
                ConversionError::conversion(ConversionErrorKind::UnknownDirection {
                    level: self.name.to_string(),
                    direction: car.direction.clone(),
                })
            })?;

            let (r, c) = car.pos;
            list.push(CarPlacement {
                row: self.one_based(r, "car row")?,
                col: self.one_based(c, "car column")?,
                direction,
            });
        }

        Ok((trains, decoys))
    }

    /// Initial pieces plus the toggled switches that need runtime state
    fn collect_pieces(&self) -> (Vec<PiecePlacement>, Vec<GroupedCell>) {
        let mut init_pos = Vec::new();
        let mut dswitches = Vec::new();

        for cell in self.level.cells() {
            // tunnel mouths go to TUNNEL_PAIRS
            if cell.modifier == modifier::TUNNEL {
                continue;
            }

            let Some(mut piece) = tables::piece_for_board(cell.board) else {
                continue;
            };
            let (row, col) = cell.position();

            if let Some(control) = SwitchControl::from_modifier(cell.modifier) {
                if piece.is_switch() {
                    piece = piece.with_control(control);
                    if cell.mod_num > 0 {
                        dswitches.push(GroupedCell {
                            row,
                            col,
                            id: cell.mod_num,
                        });
                    }
                }
            }

            init_pos.push(PiecePlacement { row, col, piece });
        }

        (init_pos, dswitches)
    }

    fn collect_tunnel_pairs(&self) -> Vec<TunnelPair> {
        let mut endpoints: BTreeMap<i64, Vec<((i64, i64), Direction)>> = BTreeMap::new();

        for cell in self.level.cells() {
            if cell.modifier != modifier::TUNNEL {
                continue;
            }
            if let Some(exit) = tables::tunnel_exit(cell.board) {
                endpoints
                    .entry(cell.mod_num)
                    .or_default()
                    .push((cell.position(), exit));
            }
        }

        endpoints
            .into_values()
            .filter_map(|mouths| match mouths.as_slice() {
                // each mouth's code describes how a train arrives there from
                // the other side, so the exit recorded at one mouth is the
                // other mouth's direction
                [(first, first_code_exit), (second, second_code_exit)] => Some(TunnelPair {
                    first: *first,
                    first_exit: *second_code_exit,
                    second: *second,
                    second_exit: *first_code_exit,
                }),
                _ => None,
            })
            .collect()
    }

    fn collect_gates_and_activations(&self) -> (Vec<Gate>, Vec<GroupedCell>) {
        let mut gates = Vec::new();
        let mut activations = Vec::new();

        for cell in self.level.cells() {
            let (row, col) = cell.position();
            match cell.modifier {
                modifier::CLOSED_GATE | modifier::OPEN_GATE => gates.push(Gate {
                    row,
                    col,
                    group: cell.mod_num,
                    open: cell.modifier == modifier::OPEN_GATE,
                }),
                modifier::SWITCH if cell.mod_num > 0 => activations.push(GroupedCell {
                    row,
                    col,
                    id: cell.mod_num,
                }),
                _ => {}
            }
        }

        (gates, activations)
    }

    fn collect_stations(&self) -> ConversionResult<Vec<GroupedCell>> {
        self.level
            .cells()
            .filter(|cell| cell.modifier == modifier::STATION)
            .map(|cell| {
                let (row, col) = cell.position();
                // legacy train ids are zero-based
                Ok(GroupedCell {
                    row,
                    col,
                    id: self.one_based(cell.mod_num, "station train id")?,
                })
            })
            .collect()
    }

    /// Shift a zero-based legacy index to the one-based model convention
    fn one_based(&self, value: i64, what: &str) -> ConversionResult<i64> {
        value.checked_add(1).ok_or_else(|| {
            ConversionError::conversion(ConversionErrorKind::invalid_record(
                self.name,
                format!("{} {} is out of range", what, value),
            ))
        })
    }
}

/// Convert a decoded level to `.dzn` text
pub fn convert_level(name: &str, level: &LevelRecord) -> ConversionResult<String> {
    let data = LevelConverter::new(name, level).convert()?;
    Ok(DznFormatter::new().format(&data))
}

/// Decode a raw document entry and convert it to `.dzn` text
pub fn convert_level_value(name: &str, value: &Value) -> ConversionResult<String> {
    let level = LevelRecord::from_value(name, value)?;
    convert_level(name, &level)
}
