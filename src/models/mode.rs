use std::fmt;

/// View mode of a session.
///
/// `Collect` accepts map clicks and shows the place list,
/// `Done` only shows the markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Collect,
    Done,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Collect => "collect",
            Mode::Done => "done",
        }
    }

    /// Map clicks create places only while collecting.
    pub fn accepts_clicks(&self) -> bool {
        matches!(self, Mode::Collect)
    }

    pub fn shows_list(&self) -> bool {
        matches!(self, Mode::Collect)
    }

    /// Label of the single header button for this mode.
    pub fn button_label(&self) -> &'static str {
        match self {
            Mode::Collect => "Done",
            Mode::Done => "Reset",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
