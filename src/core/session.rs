use crate::config::Config;
use crate::core::activity::ActivityLog;
use crate::core::capture::capture_click;
use crate::core::store::PlaceStore;
use crate::errors::{AppError, AppResult};
use crate::map::{TileSource, Viewport};
use crate::models::{LatLng, Mode, Place};
use crate::ui::prompt::Prompter;

pub const RESET_PROMPT: &str = "Clear everything and start over?";

/// Result of a map click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A place was appended; carries its 1-based marker number.
    Added(usize),
    /// The title prompt was cancelled.
    Cancelled,
    /// Clicks do nothing outside collect mode.
    Inert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// Number of places removed.
    Cleared(usize),
    Declined,
}

/// The one state object of a running map: places, mode, viewport and
/// activity log. All mutations go through the `on_*` handlers.
pub struct Session {
    store: PlaceStore,
    viewport: Viewport,
    tiles: TileSource,
    activity: ActivityLog,
}

impl Session {
    pub fn new(cfg: &Config) -> Self {
        let viewport = Viewport::new(
            LatLng::new(cfg.center_lat, cfg.center_lng),
            cfg.zoom,
            cfg.max_zoom,
            cfg.map_width,
            cfg.map_height,
        );
        let mut activity = ActivityLog::new();
        activity.record(
            "start",
            "",
            &format!("Map centered on {} at zoom {}", viewport.center(), viewport.zoom()),
        );

        Self {
            store: PlaceStore::new(),
            viewport,
            tiles: TileSource::from_config(cfg),
            activity,
        }
    }

    pub fn mode(&self) -> Mode {
        self.store.mode()
    }

    pub fn places(&self) -> &[Place] {
        self.store.places()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Pan and zoom are user-driven; handlers never touch the viewport.
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn tiles(&self) -> &TileSource {
        &self.tiles
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    /// Place behind marker `number` (1-based).
    pub fn place(&self, number: usize) -> AppResult<&Place> {
        self.store.get(number).ok_or(AppError::UnknownMarker(number))
    }

    /// A click on the map at `at`.
    pub fn on_map_click<P: Prompter + ?Sized>(
        &mut self,
        prompter: &mut P,
        at: LatLng,
    ) -> AppResult<ClickOutcome> {
        if !self.mode().accepts_clicks() {
            self.activity
                .record("ignore", "click", &format!("Click at {at} while done"));
            return Ok(ClickOutcome::Inert);
        }

        let Some(draft) = capture_click(prompter, at)? else {
            self.activity
                .record("cancel", "click", &format!("Title prompt cancelled at {at}"));
            return Ok(ClickOutcome::Cancelled);
        };

        let place = self.store.add(draft)?;
        let message = format!("'{}' at {}", place.title, place.position());
        let number = self.store.len();
        self.activity.record("add", &format!("#{number}"), &message);
        Ok(ClickOutcome::Added(number))
    }

    /// A click on grid cell `col`,`row` of the map surface.
    pub fn on_tap<P: Prompter + ?Sized>(
        &mut self,
        prompter: &mut P,
        col: i64,
        row: i64,
    ) -> AppResult<ClickOutcome> {
        if !self.mode().accepts_clicks() {
            self.activity
                .record("ignore", "tap", &format!("Tap at cell {col},{row} while done"));
            return Ok(ClickOutcome::Inert);
        }
        let at = self.viewport.cell_center(col, row)?;
        self.on_map_click(prompter, at)
    }

    /// The "Done" button.
    pub fn on_done(&mut self) -> AppResult<()> {
        self.store.finish()?;
        self.activity.record(
            "done",
            "",
            &format!("Finished with {} place(s)", self.store.len()),
        );
        Ok(())
    }

    /// The "Reset" button: clears everything after confirmation.
    pub fn on_reset<P: Prompter + ?Sized>(&mut self, prompter: &mut P) -> AppResult<ResetOutcome> {
        if self.mode() != Mode::Done {
            return Err(AppError::Unavailable {
                action: "reset",
                mode: self.mode().to_string(),
            });
        }

        if !prompter.confirm(RESET_PROMPT)? {
            self.activity.record("decline", "reset", "Reset not confirmed");
            return Ok(ResetOutcome::Declined);
        }

        let removed = self.store.clear();
        self.activity
            .record("reset", "", &format!("Cleared {removed} place(s)"));
        Ok(ResetOutcome::Cleared(removed))
    }
}
