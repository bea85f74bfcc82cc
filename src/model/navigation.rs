//! Navigation Model
//!
//! Selection and scroll state over the visible product sequence.

/// Selection and viewport state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationModel {
    /// Selected row in the visible (filtered) sequence
    pub selected: Option<usize>,

    /// First visible row; the render loop keeps it in sync with what the
    /// list widget actually displayed
    pub offset: usize,
}

impl NavigationModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Force the viewport back to the top without touching the selection
    pub fn rescroll_to_top(&mut self) {
        self.offset = 0;
    }
}
