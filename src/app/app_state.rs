//! Centralized application state for the coverflow viewer.
//!
//! Application state is composed of focused state components, each
//! keeping its own invariants, so UI code can borrow them independently.

use coverflow::CarouselConfig;

use crate::state::{DeckState, InteractionState, LayoutState, ViewportState};

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Focused State Components =====
    /// Loaded deck and its carousel
    pub deck: DeckState,

    /// Viewport width, direction and edge mode
    pub viewport: ViewportState,

    /// Drag and focus state
    pub interaction: InteractionState,

    /// Stage drawing settings
    pub layout: LayoutState,

    // ===== Top-Level State =====
    /// Carousel options every newly attached deck starts from
    pub config: CarouselConfig,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(CarouselConfig::default())
    }
}

impl AppState {
    /// Creates application state from a carousel config.
    ///
    /// The config's direction and edge mode seed the viewport options.
    pub fn new(config: CarouselConfig) -> Self {
        let mut viewport = ViewportState::new();
        viewport.set_direction(config.direction);
        viewport.set_edge_mode(config.edge_mode);
        Self {
            deck: DeckState::new(),
            viewport,
            interaction: InteractionState::new(),
            layout: LayoutState::new(),
            config,
            error_message: None,
        }
    }

    /// Creates application state with persisted viewer settings applied.
    pub fn with_settings(
        config: CarouselConfig,
        viewport: ViewportState,
        layout: LayoutState,
    ) -> Self {
        Self {
            deck: DeckState::new(),
            viewport,
            interaction: InteractionState::new(),
            layout,
            config,
            error_message: None,
        }
    }

    // ===== High-Level Coordination Methods =====

    /// Resets deck-related state before loading a new deck.
    pub fn reset_deck_state(&mut self) {
        self.deck.clear();
        self.interaction.reset();
        self.error_message = None;
    }

    /// Config for a new attach: the base config with the viewer's current
    /// direction and edge mode.
    pub fn attach_config(&self) -> CarouselConfig {
        CarouselConfig {
            direction: self.viewport.direction(),
            edge_mode: self.viewport.edge_mode(),
            ..self.config.clone()
        }
    }
}
