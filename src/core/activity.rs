//! In-memory activity log of a session.
//!
//! Every handler records what it did (or why it did nothing) here; the
//! `log` command prints it. Entries live as long as the session.

use ansi_term::Colour;
use chrono::{DateTime, Local};
use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));

const OP_TARGET_MAX: usize = 40;

fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Colour for an operation name.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "reset" => Colour::Red,
        "done" => Colour::Yellow,
        "cancel" | "decline" => Colour::Purple,
        "ignore" => Colour::Fixed(244),
        "start" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

#[derive(Debug, Clone)]
pub struct ActivityEntry {
    pub id: usize,
    pub at: DateTime<Local>,
    pub operation: String,
    pub target: String,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct ActivityLog {
    entries: Vec<ActivityEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry stamped with the current local time.
    pub fn record(&mut self, operation: &str, target: &str, message: &str) {
        let id = self.entries.len() + 1;
        self.entries.push(ActivityEntry {
            id,
            at: Local::now(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        });
    }

    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the log as aligned lines:
    /// `id: timestamp | op (target) => message`
    pub fn render(&self, color: bool) -> String {
        if self.entries.is_empty() {
            return "No activity yet.\n".to_string();
        }

        let rows: Vec<(usize, String, String, String, &str)> = self
            .entries
            .iter()
            .map(|e| {
                let date = e.at.format("%FT%T%:z").to_string();
                let op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };
                (e.id, date, e.operation.clone(), op_target, e.message.as_str())
            })
            .collect();

        let op_w = rows
            .iter()
            .map(|(_, _, _, op_target, _)| op_target.width())
            .max()
            .unwrap_or(10)
            .min(OP_TARGET_MAX);
        let id_w = rows.len().to_string().len();
        let date_w = rows.iter().map(|(_, d, _, _, _)| d.len()).max().unwrap_or(0);

        let mut out = String::new();
        for (id, date, op, op_target, message) in rows {
            let visible = if op_target.width() > OP_TARGET_MAX {
                let mut s: String = op_target.chars().take(OP_TARGET_MAX - 3).collect();
                s.push_str("...");
                s
            } else {
                op_target
            };

            // only the operation word is coloured
            let painted = if color {
                let paint = color_for_operation(&op);
                match visible.split_once(' ') {
                    Some((word, rest)) => format!("{} {}", paint.paint(word), rest),
                    None => paint.paint(visible.as_str()).to_string(),
                }
            } else {
                visible
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&painted).width()));

            out.push_str(&format!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}\n",
                id,
                date,
                painted,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            ));
        }
        out
    }
}
