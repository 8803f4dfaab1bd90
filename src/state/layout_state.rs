//! Stage layout settings for the viewer.

use serde::{Deserialize, Serialize};

/// State related to how the stage is drawn.
///
/// Responsibilities:
/// - Card height and perspective distance used for projection
/// - Whether the per-card style table is shown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutState {
    /// Height of the center card in pixels
    card_height: f32,
    /// Perspective distance in pixels (CSS `perspective`)
    perspective: f32,
    /// Show the produced inline styles under the stage
    show_styles: bool,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutState {
    pub fn new() -> Self {
        Self {
            card_height: 240.0,
            perspective: 1000.0,
            show_styles: false,
        }
    }

    pub fn card_height(&self) -> f32 {
        self.card_height
    }

    pub fn perspective(&self) -> f32 {
        self.perspective
    }

    pub fn show_styles(&self) -> bool {
        self.show_styles
    }

    // ===== Low-Level Accessors (for UI handlers) =====

    pub(crate) fn card_height_mut(&mut self) -> &mut f32 {
        &mut self.card_height
    }

    pub(crate) fn perspective_mut(&mut self) -> &mut f32 {
        &mut self.perspective
    }

    pub(crate) fn show_styles_mut(&mut self) -> &mut bool {
        &mut self.show_styles
    }
}
