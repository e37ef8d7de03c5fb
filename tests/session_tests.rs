mod common;
use common::{ScriptedPrompter, test_config};

use placemap::core::capture::{NOTES_PROMPT, TITLE_PROMPT};
use placemap::core::session::{ClickOutcome, RESET_PROMPT, ResetOutcome, Session};
use placemap::errors::AppError;
use placemap::models::{LatLng, Mode};
use std::collections::HashSet;

fn session() -> Session {
    Session::new(&test_config())
}

#[test]
fn test_click_with_title_and_notes_adds_place() {
    let mut s = session();
    let mut p = ScriptedPrompter::new().answer("Home").answer("Grew up here");

    let outcome = s
        .on_map_click(&mut p, LatLng::new(40.0, -74.0))
        .expect("click");

    assert_eq!(outcome, ClickOutcome::Added(1));
    assert_eq!(p.asked, vec![TITLE_PROMPT, NOTES_PROMPT]);

    let places = s.places();
    assert_eq!(places.len(), 1);
    assert_eq!(places[0].lat, 40.0);
    assert_eq!(places[0].lng, -74.0);
    assert_eq!(places[0].title, "Home");
    assert_eq!(places[0].notes, "Grew up here");
    assert_eq!(places[0].list_line(), "Home — Grew up here");
}

#[test]
fn test_blank_title_and_cancelled_notes() {
    let mut s = session();
    let mut p = ScriptedPrompter::new().answer("").cancel();

    s.on_map_click(&mut p, LatLng::new(48.8, 2.3)).unwrap();

    let place = &s.places()[0];
    assert_eq!(place.title, "Untitled");
    assert_eq!(place.notes, "");
    assert_eq!(place.list_line(), "Untitled — No details");
}

#[test]
fn test_whitespace_is_trimmed() {
    let mut s = session();
    let mut p = ScriptedPrompter::new().answer("   ").answer("  lived 3 years  ");

    s.on_map_click(&mut p, LatLng::new(1.0, 2.0)).unwrap();

    let place = &s.places()[0];
    assert_eq!(place.title, "Untitled");
    assert_eq!(place.notes, "lived 3 years");
}

#[test]
fn test_cancelled_title_discards_click_without_notes_prompt() {
    let mut s = session();
    let mut p = ScriptedPrompter::new().cancel().answer("never asked");

    let outcome = s.on_map_click(&mut p, LatLng::new(10.0, 10.0)).unwrap();

    assert_eq!(outcome, ClickOutcome::Cancelled);
    assert!(s.places().is_empty());
    assert_eq!(p.asked, vec![TITLE_PROMPT]);
}

#[test]
fn test_place_count_matches_accepted_clicks() {
    let mut s = session();
    // 5 clicks, the 2nd and 4th cancel their title
    let mut p = ScriptedPrompter::new()
        .answer("a")
        .answer("")
        .cancel()
        .answer("b")
        .cancel()
        .cancel()
        .answer("c")
        .answer("note");

    for i in 0..5 {
        s.on_map_click(&mut p, LatLng::new(f64::from(i), 0.0)).unwrap();
    }

    let titles: Vec<&str> = s.places().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["a", "b", "c"]);
    assert_eq!(s.places()[0].lat, 0.0);
    assert_eq!(s.places()[1].lat, 2.0);
    assert_eq!(s.places()[2].lat, 4.0);
}

#[test]
fn test_ids_are_unique() {
    let mut s = session();
    let mut p = ScriptedPrompter::new();
    for i in 0..20 {
        p = p.answer(&format!("p{i}")).answer("");
    }
    for _ in 0..20 {
        s.on_map_click(&mut p, LatLng::new(0.0, 0.0)).unwrap();
    }

    let ids: HashSet<_> = s.places().iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), 20);
}

#[test]
fn test_coordinates_are_not_validated() {
    let mut s = session();
    let mut p = ScriptedPrompter::new().answer("Nowhere").answer("");

    s.on_map_click(&mut p, LatLng::new(123.0, 400.0)).unwrap();

    assert_eq!(s.places()[0].lat, 123.0);
    assert_eq!(s.places()[0].lng, 400.0);
}

#[test]
fn test_clicks_are_inert_in_done_mode() {
    let mut s = session();
    let mut p = ScriptedPrompter::new().answer("First").answer("");
    s.on_map_click(&mut p, LatLng::new(1.0, 1.0)).unwrap();
    s.on_done().unwrap();

    let mut p = ScriptedPrompter::new().answer("Second").answer("");
    let outcome = s.on_map_click(&mut p, LatLng::new(2.0, 2.0)).unwrap();

    assert_eq!(outcome, ClickOutcome::Inert);
    assert_eq!(s.places().len(), 1);
    assert!(p.asked.is_empty(), "no prompt in done mode");

    let outcome = s.on_tap(&mut p, 0, 0).unwrap();
    assert_eq!(outcome, ClickOutcome::Inert);
    assert_eq!(s.places().len(), 1);
}

#[test]
fn test_done_only_from_collect() {
    let mut s = session();
    assert_eq!(s.mode(), Mode::Collect);

    s.on_done().unwrap();
    assert_eq!(s.mode(), Mode::Done);

    let err = s.on_done().unwrap_err();
    assert!(matches!(err, AppError::Unavailable { action: "done", .. }));
}

#[test]
fn test_reset_requires_done_mode() {
    let mut s = session();
    let mut p = ScriptedPrompter::new().confirm_with(true);

    let err = s.on_reset(&mut p).unwrap_err();
    assert!(matches!(err, AppError::Unavailable { action: "reset", .. }));
    assert!(p.asked.is_empty());
}

#[test]
fn test_declined_reset_changes_nothing() {
    let mut s = session();
    let mut p = ScriptedPrompter::new().answer("Home").answer("");
    s.on_map_click(&mut p, LatLng::new(40.0, -74.0)).unwrap();
    s.on_done().unwrap();

    let mut p = ScriptedPrompter::new().confirm_with(false);
    let outcome = s.on_reset(&mut p).unwrap();

    assert_eq!(outcome, ResetOutcome::Declined);
    assert_eq!(p.asked, vec![RESET_PROMPT]);
    assert_eq!(s.places().len(), 1);
    assert_eq!(s.mode(), Mode::Done);
}

#[test]
fn test_confirmed_reset_clears_and_collects_again() {
    let mut s = session();
    let mut p = ScriptedPrompter::new()
        .answer("A")
        .answer("")
        .answer("B")
        .answer("");
    s.on_map_click(&mut p, LatLng::new(1.0, 1.0)).unwrap();
    s.on_map_click(&mut p, LatLng::new(2.0, 2.0)).unwrap();
    s.on_done().unwrap();

    let mut p = ScriptedPrompter::new().confirm_with(true);
    let outcome = s.on_reset(&mut p).unwrap();

    assert_eq!(outcome, ResetOutcome::Cleared(2));
    assert!(s.places().is_empty());
    assert_eq!(s.mode(), Mode::Collect);

    // collecting works again after a reset
    let mut p = ScriptedPrompter::new().answer("C").answer("");
    let outcome = s.on_map_click(&mut p, LatLng::new(3.0, 3.0)).unwrap();
    assert_eq!(outcome, ClickOutcome::Added(1));
}

#[test]
fn test_tap_on_center_cell_clicks_near_center() {
    let mut s = session();
    let (cols, rows) = (s.viewport().cols(), s.viewport().rows());
    let center = s.viewport().center();
    let mut p = ScriptedPrompter::new().answer("Middle").answer("");

    let outcome = s
        .on_tap(&mut p, i64::from(cols / 2), i64::from(rows / 2))
        .unwrap();

    assert_eq!(outcome, ClickOutcome::Added(1));
    let place = &s.places()[0];
    // one cell at zoom 4 is well under two degrees
    assert!((place.lat - center.lat).abs() < 2.0);
    assert!((place.lng - center.lng).abs() < 2.0);
    assert_eq!(
        s.viewport().cell_of(place.position()),
        Some((cols / 2, rows / 2))
    );
}

#[test]
fn test_tap_outside_grid_is_an_error() {
    let mut s = session();
    let mut p = ScriptedPrompter::new().answer("x").answer("");

    let err = s.on_tap(&mut p, -1, 0).unwrap_err();
    assert!(matches!(err, AppError::InvalidCell(-1, 0)));
    assert!(s.places().is_empty());
    assert!(p.asked.is_empty());
}

#[test]
fn test_unknown_marker() {
    let s = session();
    assert!(matches!(s.place(1), Err(AppError::UnknownMarker(1))));
    assert!(matches!(s.place(0), Err(AppError::UnknownMarker(0))));
}

#[test]
fn test_activity_log_tracks_actions() {
    let mut s = session();
    let mut p = ScriptedPrompter::new().answer("Home").answer("").cancel();
    s.on_map_click(&mut p, LatLng::new(40.0, -74.0)).unwrap();
    s.on_map_click(&mut p, LatLng::new(41.0, -74.0)).unwrap();
    s.on_done().unwrap();

    let ops: Vec<&str> = s
        .activity()
        .entries()
        .iter()
        .map(|e| e.operation.as_str())
        .collect();
    assert_eq!(ops, vec!["start", "add", "cancel", "done"]);

    let rendered = s.activity().render(false);
    assert!(rendered.contains("add (#1)"));
    assert!(rendered.contains("'Home'"));
    assert_eq!(rendered.lines().count(), 4);
}
