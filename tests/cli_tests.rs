use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::pm_isolated;

#[test]
fn test_session_home_scenario() {
    pm_isolated("home_scenario")
        .arg("run")
        .write_stdin("click 40.0 -74.0\nHome\nGrew up here\nlist\nquit\n")
        .assert()
        .success()
        .stdout(contains("Title for this location"))
        .stdout(contains("Add details"))
        .stdout(contains("Added #1 'Home'"))
        .stdout(contains("1. Home — Grew up here"))
        .stdout(contains("Session closed with 1 place(s)."));
}

#[test]
fn test_session_untitled_scenario_with_cancel_keyword() {
    pm_isolated("untitled_scenario")
        .arg("run")
        .write_stdin("click 48.8 2.3\n\n:cancel\nlist\nquit\n")
        .assert()
        .success()
        .stdout(contains("1. Untitled — No details"));
}

#[test]
fn test_end_of_input_cancels_notes_prompt() {
    pm_isolated("eof_notes")
        .write_stdin("click 48.8 2.3\nParis\n")
        .assert()
        .success()
        .stdout(contains("1. Paris — No details"))
        .stdout(contains("Session closed with 1 place(s)."));
}

#[test]
fn test_cancelled_title_adds_nothing() {
    pm_isolated("cancel_title")
        .arg("run")
        .write_stdin("click 10 10\n:cancel\nclick 11 11\n:cancel\nquit\n")
        .assert()
        .success()
        .stdout(contains("Click discarded"))
        .stdout(contains("Add details").not())
        .stdout(contains("Session closed with 0 place(s)."));
}

#[test]
fn test_done_mode_ignores_clicks_and_hides_list() {
    pm_isolated("done_mode")
        .arg("run")
        .write_stdin("click 1 1\nA\n\ndone\nclick 2 2\nlist\nquit\n")
        .assert()
        .success()
        .stdout(contains("[ Reset ]"))
        .stdout(contains("read-only"))
        .stdout(contains("Session closed with 1 place(s)."))
        .stderr(contains("'list' is not available in done mode"));
}

#[test]
fn test_reset_declined_then_confirmed() {
    pm_isolated("reset_flow")
        .arg("run")
        .write_stdin("click 1 1\nA\n\ndone\nreset\nn\nreset\ny\nquit\n")
        .assert()
        .success()
        .stdout(contains("Clear everything and start over?"))
        .stdout(contains("Reset cancelled."))
        .stdout(contains("Cleared 1 place(s). Back to collecting."))
        .stdout(contains("Click the map to add your first place."))
        .stdout(contains("Session closed with 0 place(s)."));
}

#[test]
fn test_reset_unavailable_while_collecting() {
    pm_isolated("reset_collect")
        .arg("run")
        .write_stdin("reset\nquit\n")
        .assert()
        .success()
        .stderr(contains("'reset' is not available in collect mode"));
}

#[test]
fn test_bad_commands_do_not_end_session() {
    pm_isolated("bad_commands")
        .arg("run")
        .write_stdin("fly away\nclick north pole\nzoom 42\npopup 3\nclick 5 5\nStill here\n\nquit\n")
        .assert()
        .success()
        .stderr(contains("unknown command 'fly'"))
        .stderr(contains("Invalid coordinate"))
        .stderr(contains("Invalid zoom level 42"))
        .stderr(contains("No marker #3"))
        .stdout(contains("Session closed with 1 place(s)."));
}

#[test]
fn test_popup_tiles_and_log_commands() {
    pm_isolated("popup_tiles_log")
        .arg("run")
        .write_stdin("click 40 -74\nHome\nGrew up here\npopup 1\ntiles\nlog\nquit\n")
        .assert()
        .success()
        .stdout(contains("#1 Home"))
        .stdout(contains("https://a.tile.openstreetmap.org/4/"))
        .stdout(contains("add (#1)"));
}

#[test]
fn test_tile_command() {
    pm_isolated("tile_cmd")
        .args(["tile", "40", "-74", "--zoom", "4"])
        .assert()
        .success()
        .stdout(contains("4/4/6"))
        .stdout(contains("https://b.tile.openstreetmap.org/4/4/6.png"))
        .stdout(contains("OpenStreetMap contributors"));
}

#[test]
fn test_tile_command_rejects_zoom_above_max() {
    pm_isolated("tile_zoom")
        .args(["tile", "0", "0", "--zoom", "25"])
        .assert()
        .failure()
        .stderr(contains("Invalid zoom level 25"));
}
