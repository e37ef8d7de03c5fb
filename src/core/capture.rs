use crate::errors::AppResult;
use crate::models::{LatLng, PlaceDraft};
use crate::ui::prompt::Prompter;

pub const TITLE_PROMPT: &str = "Title for this location (e.g., 'Home' or 'Trip to Paris'):";
pub const NOTES_PROMPT: &str = "Add details (years lived, fav spot, etc.):";

/// Turn a map click into a place draft through two blocking prompts.
///
/// Cancelling the title discards the click (no notes prompt is shown).
/// Cancelling the notes still yields a draft, with empty notes.
pub fn capture_click<P: Prompter + ?Sized>(
    prompter: &mut P,
    at: LatLng,
) -> AppResult<Option<PlaceDraft>> {
    let Some(title) = prompter.prompt(TITLE_PROMPT, "")? else {
        return Ok(None);
    };

    let notes = prompter.prompt(NOTES_PROMPT, "")?;

    Ok(Some(PlaceDraft::from_input(at, &title, notes.as_deref())))
}
