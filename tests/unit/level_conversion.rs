//! Single-level conversion through the public API

use levelconv::conversion::tables::{self, BOARD_TO_PIECE};
use levelconv::{convert_level_json, convert_level_str, ConversionErrorKind};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_minimal_level() {
    let level = json!({
        "board": [[3]],
        "mods": [[0]],
        "mod_nums": [[0]],
        "cars": [],
        "tracks": 1
    });

    let output = convert_level_json("1-1", &level).unwrap();
    assert!(output.contains("TARGET=(1,1);"));
    assert!(output.contains("TRAINS=[];"));
    assert!(output.contains("DECOYS=[];"));
    assert!(output.contains("INIT_POS=[\n(1,1,STRAIGHT_RL),\n];"));
    assert!(output.ends_with("STATIONS=[];\n"));
}

#[test]
fn test_swapping_switch_example() {
    let level = json!({
        "board": [[9, 3]],
        "mods": [[5, 0]],
        "mod_nums": [[2, 0]],
        "cars": [],
        "tracks": 2
    });

    let output = convert_level_json("2-1", &level).unwrap();
    assert!(output.contains("(1,1,DSWITCH_L_R_D),"));
    assert!(output.contains("DSWITCHES=[\n(1,1,2),\n];"));
}

#[test]
fn test_full_level_output() {
    let level = json!({
        "board": [
            [1, 9, 1, 17],
            [0, 2, 4, 0],
            [19, 1, 1, 3]
        ],
        "mods": [
            [10, 7, 3, 2],
            [0, 1, 0, 6],
            [2, 0, 4, 0]
        ],
        "mod_nums": [
            [0, 1, 1, 5],
            [0, 1, 0, 0],
            [5, 0, 2, 0]
        ],
        "cars": [
            {"type": "NORMAL", "pos": [0, 0], "direction": "RIGHT"},
            {"type": "DECOY", "pos": [2, 1], "direction": "UP"}
        ],
        "tracks": 7
    });

    let output = convert_level_json("5-3", &level).unwrap();
    let expected = "\
W=4;
H=3;

MAX_TIME=W*H;
MAX_TRACKS=7;

TARGET=(3,4);

TRAINS=[(1,1,RIGHT)];
DECOYS=[(3,2,TOP)];

INIT_POS=[
(1,1,STRAIGHT_RL),
(1,2,ESWITCH_L_R_D),
(1,3,STRAIGHT_RL),
(2,2,STRAIGHT_TD),
(2,3,ROCK),
(3,2,STRAIGHT_RL),
(3,3,STRAIGHT_RL),
(3,4,STRAIGHT_RL),
];
TUNNEL_PAIRS=[
  (1, 4, DOWN, 3, 1, LEFT),
];

GATES=[
(1,3,1,false),
(3,3,2,true),
];
ACTIVATIONS=[
(2,2,1),
];

DSWITCHES=[
(1,2,1),
];
STATIONS=[
  (2,4,1),
];
";
    assert_eq!(output, expected);
}

#[test]
fn test_conversion_is_deterministic() {
    let level = r#"{
        "board": [[18, 3, 20], [12, 1, 16]],
        "mods": [[2, 0, 2], [5, 6, 7]],
        "mod_nums": [[3, 0, 3], [4, 1, 4]],
        "cars": [{"type": "NORMAL", "pos": [1, 1], "direction": "LEFT"}],
        "tracks": 3
    }"#;

    let first = convert_level_str("6-1", level).unwrap();
    let second = convert_level_str("6-1", level).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_target_reports_level() {
    let level = json!({
        "board": [[1, 2]],
        "mods": [[0, 0]],
        "mod_nums": [[0, 0]],
        "cars": [],
        "tracks": 1
    });

    let err = convert_level_json("9-9", &level).unwrap_err();
    assert!(matches!(
        err.kind(),
        Some(ConversionErrorKind::MissingTarget { .. })
    ));
    assert_eq!(err.user_message(), "No target found for level 9-9");
}

#[test]
fn test_huge_station_number_fails_without_panicking() {
    let level = json!({
        "board": [[34, 3]],
        "mods": [[6, 0]],
        "mod_nums": [[i64::MAX, 0]],
        "cars": [],
        "tracks": 2
    });

    let err = convert_level_json("6-9", &level).unwrap_err();
    assert!(matches!(
        err.kind(),
        Some(ConversionErrorKind::InvalidRecord { .. })
    ));
    assert!(err.user_message().starts_with("Invalid level record 6-9"));
}

#[test]
fn test_missing_field_fails() {
    let level = json!({"board": [[3]], "mods": [[0]], "mod_nums": [[0]], "cars": []});
    let err = convert_level_json("1-1", &level).unwrap_err();
    assert!(err.user_message().contains("tracks"));
}

#[test]
fn test_every_mapped_code_translates_consistently() {
    for (code, piece) in BOARD_TO_PIECE {
        assert_eq!(tables::piece_for_board(*code), *piece);
        assert_eq!(tables::piece_for_board(*code), tables::piece_for_board(*code));
    }
}
