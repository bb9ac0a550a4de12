//! `.dzn` formatting of collected level data

use crate::conversion::engine::LevelData;

/// Layout of a multi-line list
#[derive(Debug, Clone, Copy, PartialEq)]
enum ListStyle {
    /// `NAME=[(..),(..)];` on a single line
    Inline,
    /// One tuple per line with a trailing comma, indented by `indent` spaces
    Block { indent: usize },
}

/// Writes a [`LevelData`] as MiniZinc data declarations
#[derive(Debug, Clone, Default)]
pub struct DznFormatter {
    lines: Vec<String>,
}

impl DznFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Format the full record, terminated by a single newline
    pub fn format(mut self, data: &LevelData) -> String {
        self.line(format!("W={};", data.width));
        self.line(format!("H={};", data.height));
        self.blank();
        self.line("MAX_TIME=W*H;");
        self.line(format!("MAX_TRACKS={};", data.tracks));
        self.blank();
        self.line(format!("TARGET=({},{});", data.target.0, data.target.1));
        self.blank();

        self.list(
            "TRAINS",
            ListStyle::Inline,
            data.trains
                .iter()
                .map(|t| format!("({},{},{})", t.row, t.col, t.direction)),
        );
        self.list(
            "DECOYS",
            ListStyle::Inline,
            data.decoys
                .iter()
                .map(|d| format!("({},{},{})", d.row, d.col, d.direction)),
        );
        self.blank();

        self.list(
            "INIT_POS",
            ListStyle::Block { indent: 0 },
            data.init_pos
                .iter()
                .map(|p| format!("({},{},{})", p.row, p.col, p.piece)),
        );
        self.list(
            "TUNNEL_PAIRS",
            ListStyle::Block { indent: 2 },
            data.tunnel_pairs.iter().map(|t| {
                format!(
                    "({}, {}, {}, {}, {}, {})",
                    t.first.0, t.first.1, t.first_exit, t.second.0, t.second.1, t.second_exit
                )
            }),
        );
        self.blank();

        self.list(
            "GATES",
            ListStyle::Block { indent: 0 },
            data.gates
                .iter()
                .map(|g| format!("({},{},{},{})", g.row, g.col, g.group, g.open)),
        );
        self.list(
            "ACTIVATIONS",
            ListStyle::Block { indent: 0 },
            data.activations
                .iter()
                .map(|a| format!("({},{},{})", a.row, a.col, a.id)),
        );
        self.blank();

        self.list(
            "DSWITCHES",
            ListStyle::Block { indent: 0 },
            data.dswitches
                .iter()
                .map(|s| format!("({},{},{})", s.row, s.col, s.id)),
        );
        self.list(
            "STATIONS",
            ListStyle::Block { indent: 2 },
            data.stations
                .iter()
                .map(|s| format!("({},{},{})", s.row, s.col, s.id)),
        );

        let mut output = self.lines.join("\n");
        output.push('\n');
        output
    }

    fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn list(&mut self, name: &str, style: ListStyle, items: impl Iterator<Item = String>) {
        let items: Vec<String> = items.collect();
        if items.is_empty() {
            self.line(format!("{}=[];", name));
            return;
        }

        match style {
            ListStyle::Inline => self.line(format!("{}=[{}];", name, items.join(","))),
            ListStyle::Block { indent } => {
                self.line(format!("{}=[", name));
                let pad = " ".repeat(indent);
                for item in items {
                    self.line(format!("{}{},", pad, item));
                }
                self.line("];");
            }
        }
    }
}
