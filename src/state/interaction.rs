//! Pointer and keyboard interaction state for the carousel stage.

use coverflow::Focus;

/// State related to ongoing interactions with the carousel stage.
///
/// Responsibilities:
/// - Tracking whether a drag (swipe) is in progress
/// - Tracking where keyboard focus sits
/// - Remembering the last width reported to the carousel, so resizes are
///   only reported on change
#[derive(Debug, Clone)]
pub struct InteractionState {
    /// Whether the pointer is dragging across the stage
    is_dragging: bool,
    /// Focus as of the last frame
    focus: Focus,
    /// Width last sent to the input reconciler
    last_reported_width: Option<f32>,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionState {
    /// Creates an interaction state with no active interaction.
    pub fn new() -> Self {
        Self {
            is_dragging: false,
            focus: Focus::Outside,
            last_reported_width: None,
        }
    }

    /// Resets all interaction state.
    pub fn reset(&mut self) {
        self.is_dragging = false;
        self.focus = Focus::Outside;
        self.last_reported_width = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    /// Records `width` and returns true if it differs from the last report.
    pub fn width_changed(&mut self, width: f32) -> bool {
        let changed = self.last_reported_width != Some(width);
        self.last_reported_width = Some(width);
        changed
    }

    // ===== Low-Level Accessors (for input handlers) =====

    pub(crate) fn dragging_mut(&mut self) -> &mut bool {
        &mut self.is_dragging
    }
}
