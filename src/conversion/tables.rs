//! Lookup tables from legacy level codes to `.dzn` enumeration tokens
//!
//! The tables are plain data so that partiality stays visible: a board code
//! mapped to `None`, or missing entirely, means "no piece" and the cell is
//! skipped.

use std::fmt;

/// Board code of the cell a train has to reach
pub const ENDING_TRACK: i64 = 3;

/// Legacy `mods` codes
pub mod modifier {
    pub const SWITCH: i64 = 1;
    pub const TUNNEL: i64 = 2;
    pub const CLOSED_GATE: i64 = 3;
    pub const OPEN_GATE: i64 = 4;
    /// Toggled by the trains themselves (`DSWITCH_*`)
    pub const SWAPPING_TRACK: i64 = 5;
    pub const STATION: i64 = 6;
    /// Toggled by an activation cell (`ESWITCH_*`)
    pub const SWITCH_RAIL: i64 = 7;
    pub const STARTING_CAR: i64 = 10;
}

/// Cardinal direction token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Left,
    Top,
    Down,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Right => "RIGHT",
            Direction::Left => "LEFT",
            Direction::Top => "TOP",
            Direction::Down => "DOWN",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Branch layout of a three-way switch, in token order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwitchLayout {
    LRD,
    TDR,
    TDL,
    LRT,
    DTR,
    RLT,
    DTL,
}

impl SwitchLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwitchLayout::LRD => "L_R_D",
            SwitchLayout::TDR => "T_D_R",
            SwitchLayout::TDL => "T_D_L",
            SwitchLayout::LRT => "L_R_T",
            SwitchLayout::DTR => "D_T_R",
            SwitchLayout::RLT => "R_L_T",
            SwitchLayout::DTL => "D_T_L",
        }
    }
}

/// How a three-way switch changes state during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwitchControl {
    /// Fixed for the whole run (`SWITCH_*`)
    Fixed,
    /// Flips whenever a train passes (`DSWITCH_*`)
    Swapping,
    /// Flipped by an activation cell (`ESWITCH_*`)
    Rail,
}

impl SwitchControl {
    fn prefix(&self) -> &'static str {
        match self {
            SwitchControl::Fixed => "SWITCH_",
            SwitchControl::Swapping => "DSWITCH_",
            SwitchControl::Rail => "ESWITCH_",
        }
    }

    /// Control implied by a cell modifier, if it toggles switches
    pub fn from_modifier(code: i64) -> Option<Self> {
        match code {
            modifier::SWAPPING_TRACK => Some(SwitchControl::Swapping),
            modifier::SWITCH_RAIL => Some(SwitchControl::Rail),
            _ => None,
        }
    }
}

/// Piece token of the target data format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Rock,
    StraightRL,
    StraightTD,
    CornerDR,
    CornerDL,
    CornerTR,
    CornerTL,
    Switch(SwitchControl, SwitchLayout),
    Tunnel(Direction),
}

impl Piece {
    pub fn is_switch(&self) -> bool {
        matches!(self, Piece::Switch(..))
    }

    /// Re-tag a switch piece with a different control; other pieces are returned as-is
    pub fn with_control(self, control: SwitchControl) -> Self {
        match self {
            Piece::Switch(_, layout) => Piece::Switch(control, layout),
            other => other,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Piece::Rock => f.write_str("ROCK"),
            Piece::StraightRL => f.write_str("STRAIGHT_RL"),
            Piece::StraightTD => f.write_str("STRAIGHT_TD"),
            Piece::CornerDR => f.write_str("CORNER_DR"),
            Piece::CornerDL => f.write_str("CORNER_DL"),
            Piece::CornerTR => f.write_str("CORNER_TR"),
            Piece::CornerTL => f.write_str("CORNER_TL"),
            Piece::Switch(control, layout) => {
                write!(f, "{}{}", control.prefix(), layout.as_str())
            }
            Piece::Tunnel(dir) => {
                let suffix = match dir {
                    Direction::Left => "L",
                    Direction::Right => "R",
                    Direction::Down => "D",
                    Direction::Top => "T",
                };
                write!(f, "TUNNEL_{}", suffix)
            }
        }
    }
}

const fn fixed(layout: SwitchLayout) -> Option<Piece> {
    Some(Piece::Switch(SwitchControl::Fixed, layout))
}

/// Board code to piece token
pub const BOARD_TO_PIECE: &[(i64, Option<Piece>)] = &[
    (0, None), // empty, left to the solver
    (1, Some(Piece::StraightRL)),
    (2, Some(Piece::StraightTD)),
    (3, Some(Piece::StraightRL)), // ending track, also recorded as TARGET
    (4, Some(Piece::Rock)),
    (5, Some(Piece::CornerDR)),
    (6, Some(Piece::CornerDL)),
    (7, Some(Piece::CornerTR)),
    (8, Some(Piece::CornerTL)),
    (9, fixed(SwitchLayout::LRD)),
    (10, fixed(SwitchLayout::TDR)),
    (11, fixed(SwitchLayout::LRD)),
    (12, fixed(SwitchLayout::TDL)),
    (13, fixed(SwitchLayout::LRT)),
    (14, fixed(SwitchLayout::DTR)),
    (15, fixed(SwitchLayout::RLT)),
    (16, fixed(SwitchLayout::DTL)),
    (17, Some(Piece::Tunnel(Direction::Left))),
    (18, Some(Piece::Tunnel(Direction::Right))),
    (19, Some(Piece::Tunnel(Direction::Down))),
    (20, Some(Piece::Tunnel(Direction::Top))),
    (21, Some(Piece::StraightRL)),
    (22, Some(Piece::StraightRL)),
    (29, Some(Piece::StraightRL)),
    (30, Some(Piece::StraightTD)),
    (31, Some(Piece::StraightTD)),
    // rocks around stations
    (34, Some(Piece::Rock)),
    (35, Some(Piece::Rock)),
    (36, Some(Piece::Rock)),
    (37, Some(Piece::Rock)),
];

/// Legacy car direction label to direction token
pub const DIRECTION_LABELS: &[(&str, Direction)] = &[
    ("RIGHT", Direction::Right),
    ("LEFT", Direction::Left),
    ("UP", Direction::Top),
    ("DOWN", Direction::Down),
];

/// Tunnel mouth code to the direction a train leaves through it
pub const TUNNEL_EXIT: &[(i64, Direction)] = &[
    (17, Direction::Left),
    (18, Direction::Right),
    (19, Direction::Down),
    (20, Direction::Top),
];

/// Piece for a board code; `None` for empty or unmapped codes
pub fn piece_for_board(code: i64) -> Option<Piece> {
    BOARD_TO_PIECE
        .iter()
        .find(|(c, _)| *c == code)
        .and_then(|(_, piece)| *piece)
}

/// Whether a board code has an entry in the table, even a `None` one
pub fn is_mapped_board_code(code: i64) -> bool {
    BOARD_TO_PIECE.iter().any(|(c, _)| *c == code)
}

pub fn direction_for_label(label: &str) -> Option<Direction> {
    DIRECTION_LABELS
        .iter()
        .find(|(l, _)| *l == label)
        .map(|(_, dir)| *dir)
}

pub fn tunnel_exit(code: i64) -> Option<Direction> {
    TUNNEL_EXIT
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, dir)| *dir)
}
