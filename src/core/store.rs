use crate::errors::{AppError, AppResult};
use crate::models::{Mode, Place, PlaceDraft};

/// Ordered place sequence plus the view mode.
///
/// Places are only appended (while collecting) or cleared all at once;
/// their order is creation order.
#[derive(Debug, Default)]
pub struct PlaceStore {
    places: Vec<Place>,
    mode: Mode,
}

impl PlaceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// 1-based lookup, matching marker labels.
    pub fn get(&self, number: usize) -> Option<&Place> {
        number.checked_sub(1).and_then(|i| self.places.get(i))
    }

    /// Append a new place at the end of the sequence.
    pub fn add(&mut self, draft: PlaceDraft) -> AppResult<&Place> {
        if !self.mode.accepts_clicks() {
            return Err(AppError::Unavailable {
                action: "add",
                mode: self.mode.to_string(),
            });
        }
        self.places.push(Place::new(draft));
        self.places
            .last()
            .ok_or_else(|| AppError::Other("place vanished after insert".into()))
    }

    /// Collect → Done.
    pub fn finish(&mut self) -> AppResult<()> {
        match self.mode {
            Mode::Collect => {
                self.mode = Mode::Done;
                Ok(())
            }
            Mode::Done => Err(AppError::Unavailable {
                action: "done",
                mode: self.mode.to_string(),
            }),
        }
    }

    /// Drop every place and go back to collecting. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.places.len();
        self.places.clear();
        self.mode = Mode::Collect;
        removed
    }
}
