//! The boundary to the window that hosts the controls and the token display.

use crate::controller::Availability;
use crate::core::VisualizationError;

/// What the controller pushes out to the UI layer.
///
/// The controller calls `show_tokens` and `set_availability` after every
/// accepted command, and `close_window` when a visualization cannot be drawn.
pub trait Surface {
    /// Replaces the token row with `tokens`.
    fn show_tokens(&mut self, tokens: &[&'static str]);

    /// Broadcasts one availability flag to every gate control.
    fn set_availability(&mut self, availability: Availability);

    /// Terminates the hosting window.
    fn close_window(&mut self, reason: &VisualizationError);
}

/// A surface with no window behind it; remembers what it was told.
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    tokens: Vec<&'static str>,
    availability: Availability,
    broadcasts: usize,
    closed_by: Option<VisualizationError>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tokens(&self) -> &[&'static str] {
        &self.tokens
    }

    pub fn availability(&self) -> Availability {
        self.availability
    }

    /// How many availability broadcasts were received.
    pub fn broadcasts(&self) -> usize {
        self.broadcasts
    }

    pub fn is_closed(&self) -> bool {
        self.closed_by.is_some()
    }

    /// The error that closed the window, if any.
    pub fn closed_by(&self) -> Option<&VisualizationError> {
        self.closed_by.as_ref()
    }
}

impl Surface for HeadlessSurface {
    fn show_tokens(&mut self, tokens: &[&'static str]) {
        self.tokens = tokens.to_vec();
    }

    fn set_availability(&mut self, availability: Availability) {
        self.availability = availability;
        self.broadcasts += 1;
    }

    fn close_window(&mut self, reason: &VisualizationError) {
        self.closed_by = Some(reason.clone());
    }
}
