//! Where the document is in its load sequence when the module starts.

/// `document.readyState`, as far as the page behaviors care.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    /// Unknown values are treated as still loading, so wiring waits for the events.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "interactive" => Self::Interactive,
            "complete" => Self::Complete,
            _ => Self::Loading,
        }
    }

    /// `DOMContentLoaded` has already fired.
    #[inline]
    pub fn dom_parsed(self) -> bool {
        self != Self::Loading
    }

    /// The window `load` event has already fired; listening for it would never run.
    #[inline]
    pub fn window_loaded(self) -> bool {
        self == Self::Complete
    }
}
