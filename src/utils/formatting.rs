//! Formatting utilities used for terminal output.

use crate::ui::messages::color_enabled;

pub fn bold(s: &str) -> String {
    if color_enabled() {
        format!("\x1b[1m{}\x1b[0m", s)
    } else {
        s.to_string()
    }
}

pub fn italic(s: &str) -> String {
    if color_enabled() {
        format!("\x1b[3m{}\x1b[0m", s)
    } else {
        s.to_string()
    }
}

/// Format a coordinate pair the way the CLI accepts it back.
pub fn coord_pair(lat: f64, lng: f64) -> String {
    format!("{lat},{lng}")
}
