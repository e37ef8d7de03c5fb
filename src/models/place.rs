use super::coords::LatLng;
use chrono::{DateTime, Local};
use uuid::Uuid;

/// Title used when the user leaves the title prompt blank.
pub const UNTITLED: &str = "Untitled";

/// Placeholder shown in the list for places without notes.
pub const NO_DETAILS: &str = "No details";

/// A place as collected from the click prompts, before it enters the store.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceDraft {
    pub lat: f64,
    pub lng: f64,
    pub title: String,
    pub notes: String,
}

impl PlaceDraft {
    /// Normalize raw prompt answers.
    ///
    /// - title is trimmed, blank becomes [`UNTITLED`]
    /// - notes are trimmed, a cancelled notes prompt (`None`) becomes `""`
    pub fn from_input(at: LatLng, raw_title: &str, raw_notes: Option<&str>) -> Self {
        let title = match raw_title.trim() {
            "" => UNTITLED.to_string(),
            t => t.to_string(),
        };
        let notes = raw_notes.map(str::trim).unwrap_or_default().to_string();

        Self {
            lat: at.lat,
            lng: at.lng,
            title,
            notes,
        }
    }
}

/// One visited location.
#[derive(Debug, Clone)]
pub struct Place {
    pub id: Uuid,              // rendering key only
    pub lat: f64,              // verbatim from the click
    pub lng: f64,              // verbatim from the click
    pub title: String,         // never empty
    pub notes: String,         // may be empty
    pub created_at: DateTime<Local>,
}

impl Place {
    /// Build a place from a draft, assigning a fresh id and timestamp.
    pub fn new(draft: PlaceDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            lat: draft.lat,
            lng: draft.lng,
            title: draft.title,
            notes: draft.notes,
            created_at: Local::now(),
        }
    }

    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }

    pub fn has_notes(&self) -> bool {
        !self.notes.is_empty()
    }

    /// Text shown after the title in the list panel.
    pub fn details(&self) -> &str {
        if self.has_notes() {
            &self.notes
        } else {
            NO_DETAILS
        }
    }

    /// `"<title> — <notes or placeholder>"`
    pub fn list_line(&self) -> String {
        format!("{} — {}", self.title, self.details())
    }

    pub fn created_str(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M").to_string()
    }
}
