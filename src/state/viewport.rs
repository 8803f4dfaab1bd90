//! Viewport width and page-level layout options.
//!
//! The carousel reads two environmental inputs: the viewport width and
//! the text direction. The viewer measures the width from the window but
//! can pin it to simulate other devices.

use coverflow::{EdgeMode, TextDirection};
use serde::{Deserialize, Serialize};

/// Narrowest and widest simulated viewport widths offered by the viewer.
pub const MIN_SIMULATED_WIDTH: f32 = 320.0;
pub const MAX_SIMULATED_WIDTH: f32 = 1920.0;

/// State related to the (possibly simulated) viewport.
///
/// Responsibilities:
/// - Tracking the measured window width
/// - Managing the simulated width override
/// - Holding text direction and edge behavior chosen in the header
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportState {
    /// Width measured from the window on the last frame
    #[serde(skip)]
    measured_width: f32,
    /// Pinned width, if simulating a device
    width_override: Option<f32>,
    direction: TextDirection,
    edge_mode: EdgeMode,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportState {
    /// Creates a viewport state with no override.
    pub fn new() -> Self {
        Self {
            measured_width: 0.0,
            width_override: None,
            direction: TextDirection::Ltr,
            edge_mode: EdgeMode::Circular,
        }
    }

    // ===== Viewport Queries =====

    /// Width the carousel should use for tier selection.
    pub fn effective_width(&self) -> f32 {
        self.width_override.unwrap_or(self.measured_width)
    }

    pub fn width_override(&self) -> Option<f32> {
        self.width_override
    }

    pub fn direction(&self) -> TextDirection {
        self.direction
    }

    pub fn edge_mode(&self) -> EdgeMode {
        self.edge_mode
    }

    // ===== Viewport Mutations =====

    /// Records the window width measured this frame.
    pub fn set_measured_width(&mut self, width: f32) {
        self.measured_width = width.max(0.0);
    }

    /// Pins (or with `None`, unpins) the simulated width.
    pub fn set_width_override(&mut self, width: Option<f32>) {
        self.width_override = width.map(|w| w.clamp(MIN_SIMULATED_WIDTH, MAX_SIMULATED_WIDTH));
    }

    pub fn set_direction(&mut self, direction: TextDirection) {
        self.direction = direction;
    }

    pub fn set_edge_mode(&mut self, edge_mode: EdgeMode) {
        self.edge_mode = edge_mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins_and_is_clamped() {
        let mut viewport = ViewportState::new();
        viewport.set_measured_width(1280.0);
        assert_eq!(viewport.effective_width(), 1280.0);

        viewport.set_width_override(Some(100.0));
        assert_eq!(viewport.effective_width(), MIN_SIMULATED_WIDTH);

        viewport.set_width_override(None);
        assert_eq!(viewport.effective_width(), 1280.0);
    }
}
