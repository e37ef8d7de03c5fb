//! Text rendering of the whole view: header, map, list panel, footer.

use crate::core::session::Session;
use crate::map::{marker_label, render_map};
use crate::models::{Mode, Place};
use crate::utils::formatting::{bold, italic};
use textwrap::Options;
use unicode_width::UnicodeWidthStr;

pub const LIST_HEADING: &str = "Places";
pub const EMPTY_LIST: &str = "Click the map to add your first place.";

/// Title on the left, the mode's button on the right, over `width` columns.
pub fn render_header(title: &str, mode: Mode, width: usize) -> String {
    let button = format!("[ {} ]", mode.button_label());
    let gap = width
        .saturating_sub(title.width() + button.width())
        .max(1);
    format!("{}{}{}\n{}\n", bold(title), " ".repeat(gap), button, "─".repeat(width))
}

/// The place list panel. Numbers match the marker labels on the map.
pub fn render_list(places: &[Place], width: usize) -> String {
    let mut out = format!("{}\n", bold(LIST_HEADING));

    if places.is_empty() {
        out.push_str(&italic(EMPTY_LIST));
        out.push('\n');
        return out;
    }

    for (i, place) in places.iter().enumerate() {
        let first = format!("  {}. ", marker_label(i));
        let rest = " ".repeat(first.width());
        let opts = Options::new(width.max(20))
            .initial_indent(&first)
            .subsequent_indent(&rest);
        for line in textwrap::wrap(&place.list_line(), opts) {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

/// Marker popup: title always, notes only when present.
pub fn render_popup(number: usize, place: &Place, width: usize) -> String {
    let inner = width.saturating_sub(4).max(16);

    let mut lines: Vec<String> = vec![format!("#{} {}", marker_label(number - 1), place.title)];
    if place.has_notes() {
        lines.push(String::new());
        lines.extend(textwrap::wrap(&place.notes, inner).into_iter().map(|l| l.into_owned()));
    }
    lines.push(String::new());
    lines.push(format!("@ {}", place.position()));
    lines.push(format!("added {}", place.created_str()));

    let box_w = lines.iter().map(|l| l.width()).max().unwrap_or(0);

    let mut out = format!("╭{}╮\n", "─".repeat(box_w + 2));
    for line in &lines {
        let pad = " ".repeat(box_w - line.width());
        out.push_str(&format!("│ {line}{pad} │\n"));
    }
    out.push_str(&format!("╰{}╯\n", "─".repeat(box_w + 2)));
    out
}

pub fn render_footer(attribution: &str, width: usize) -> String {
    let pad = width.saturating_sub(attribution.width()) / 2;
    format!("{}{}\n", " ".repeat(pad), attribution)
}

/// Everything derived from the current session state.
pub fn render_view(session: &Session, title: &str) -> String {
    let view = session.viewport();
    let width = usize::from(view.cols()) + 2;
    let frame = render_map(view, session.places());

    let mut out = render_header(title, session.mode(), width);
    out.push_str(&frame.text);

    let mut status = format!(
        "{} marker(s) · center {} · zoom {}",
        frame.shown,
        view.center(),
        view.zoom()
    );
    if frame.offscreen > 0 {
        status.push_str(&format!(" · {} off-screen", frame.offscreen));
    }
    out.push_str(&status);
    out.push_str("\n\n");

    if session.mode().shows_list() {
        out.push_str(&render_list(session.places(), width));
        out.push('\n');
    }

    out.push_str(&render_footer(&session.tiles().attribution, width));
    out
}
