//! Loaded deck and its carousel.
//!
//! This module owns the one carousel the viewer shows: the controller
//! attached to the loaded deck, the input reconciler feeding it, and where
//! the deck came from.

use std::path::{Path, PathBuf};

use coverflow::{
    AttachError, CarouselConfig, CarouselController, CarouselParts, Deck, EdgeMode, InputReconciler,
    TextDirection, Viewport,
};

/// State of the loaded deck.
///
/// Responsibilities:
/// - Managing the controller lifetime (attach on load, drop on clear)
/// - Keeping the input reconciler paired with its controller
/// - Tracking the deck source (file path or virtual seed)
#[derive(Default)]
pub struct DeckState {
    /// Controller and reconciler; `None` when nothing is attached
    carousel: Option<(CarouselController, InputReconciler)>,
    /// Path to the loaded deck file (None for virtual decks)
    file_path: Option<PathBuf>,
    /// Seed of the loaded virtual deck
    virtual_seed: Option<u64>,
}

impl DeckState {
    /// Creates a deck state with nothing attached.
    pub fn new() -> Self {
        Self {
            carousel: None,
            file_path: None,
            virtual_seed: None,
        }
    }

    /// Attaches a carousel to `deck`.
    ///
    /// On failure the previous carousel is dropped and nothing is attached.
    pub fn load_deck(
        &mut self,
        deck: Deck,
        path: Option<PathBuf>,
        config: &CarouselConfig,
        viewport: Viewport,
    ) -> Result<(), AttachError> {
        self.clear();
        let parts = CarouselParts::new(deck);
        let controller = CarouselController::attach_parts(parts, config, viewport)?;
        tracing::info!(
            cards = controller.total_cards(),
            path = ?path,
            tier = %controller.tier(),
            "deck loaded"
        );
        self.carousel = Some((controller, InputReconciler::new(config)));
        self.file_path = path;
        Ok(())
    }

    /// Records the seed of a virtual deck that was just attached.
    pub fn set_virtual_seed(&mut self, seed: u64) {
        self.virtual_seed = Some(seed);
    }

    /// Drops the carousel and deck source.
    pub fn clear(&mut self) {
        self.carousel = None;
        self.file_path = None;
        self.virtual_seed = None;
    }

    // ===== Queries =====

    pub fn controller(&self) -> Option<&CarouselController> {
        self.carousel.as_ref().map(|(controller, _)| controller)
    }

    pub fn is_attached(&self) -> bool {
        self.carousel.is_some()
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn virtual_seed(&self) -> Option<u64> {
        self.virtual_seed
    }

    // ===== Mutations =====

    /// Applies viewer-wide options to the attached controller.
    pub fn apply_options(&mut self, direction: TextDirection, edge_mode: EdgeMode) {
        if let Some((controller, input)) = self.carousel.as_mut() {
            if controller.direction() != direction {
                // A swipe that started under the old direction would resolve backwards
                input.reset();
            }
            controller.set_direction(direction);
            controller.set_edge_mode(edge_mode);
        }
    }

    // ===== Low-Level Accessors (for input handlers) =====

    /// Returns the controller and its reconciler together (splits borrows).
    pub(crate) fn for_input_handler(
        &mut self,
    ) -> Option<(&mut CarouselController, &mut InputReconciler)> {
        self.carousel.as_mut().map(|(controller, input)| (controller, input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_deck_leaves_nothing_attached() {
        let mut state = DeckState::new();
        let config = CarouselConfig::default();
        let viewport = Viewport::new(1000.0, TextDirection::Ltr);
        state.load_deck(Deck::from_names(["a", "b"]), None, &config, viewport).unwrap();
        assert!(state.is_attached());

        let result = state.load_deck(Deck::default(), None, &config, viewport);
        assert_eq!(result, Err(AttachError::NoCards));
        assert!(!state.is_attached());
        assert!(state.controller().is_none());
    }

    #[test]
    fn test_apply_options_reaches_controller() {
        let mut state = DeckState::new();
        let config = CarouselConfig::default();
        let viewport = Viewport::new(1000.0, TextDirection::Ltr);
        state.load_deck(Deck::from_names(["a", "b", "c"]), None, &config, viewport).unwrap();
        state.apply_options(TextDirection::Rtl, EdgeMode::Bounded);

        let controller = state.controller().unwrap();
        assert_eq!(controller.direction(), TextDirection::Rtl);
        assert_eq!(controller.edge_mode(), EdgeMode::Bounded);
    }
}
