//! Application-level coordination and workflow management.
//!
//! Handles deck loading, error reporting, and propagating header options
//! to the attached carousel.

use std::path::PathBuf;

use coverflow::{Deck, EdgeMode, TextDirection, Viewport};

use crate::app::AppState;
use crate::io::{AsyncLoader, LoadResult};

/// Cards in a deck generated from the header.
pub const VIRTUAL_DECK_CARDS: usize = 12;

/// Coordinates application-level operations and workflows.
///
/// This struct is responsible for:
/// - Managing deck loading workflows
/// - Attaching carousels to loaded decks
/// - Managing error states
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Starts loading a deck file in the background.
    ///
    /// The current carousel is dropped right away so the stage shows the
    /// loading indicator.
    pub fn open_file(
        state: &mut AppState,
        loader: &mut AsyncLoader,
        path: PathBuf,
        ctx: &egui::Context,
    ) {
        state.reset_deck_state();
        tracing::info!(path = %path.display(), "loading deck");
        loader.start_file_load(path, ctx);
    }

    /// Picks up a finished background load and attaches a carousel.
    ///
    /// Returns true if a load operation completed (success or error).
    pub fn check_loading_completion(state: &mut AppState, loader: &mut AsyncLoader) -> bool {
        match loader.check_completion() {
            LoadResult::Success { deck, path } => {
                Self::attach_deck(state, deck, Some(path));
                true
            }
            LoadResult::Error(error_msg) => {
                tracing::warn!(error = %error_msg, "deck load failed");
                state.error_message = Some(format!("Error loading deck: {}", error_msg));
                state.deck.clear();
                true
            }
            LoadResult::None => false,
        }
    }

    /// Generates and attaches a virtual deck.
    pub fn open_virtual_deck(state: &mut AppState, loader: &AsyncLoader, seed: u64) {
        state.reset_deck_state();
        let deck = loader.load_virtual_deck(VIRTUAL_DECK_CARDS, seed);
        if Self::attach_deck(state, deck, None) {
            state.deck.set_virtual_seed(seed);
        }
    }

    /// Attaches a carousel to `deck` using the viewer's current options.
    ///
    /// Returns true if a carousel is now attached.
    pub fn attach_deck(state: &mut AppState, deck: Deck, path: Option<PathBuf>) -> bool {
        let config = state.attach_config();
        let width = state.viewport.effective_width();
        let viewport = Viewport::new(width, state.viewport.direction());
        match state.deck.load_deck(deck, path, &config, viewport) {
            Ok(()) => {
                state.error_message = None;
                // The attach already used this width
                state.interaction.width_changed(width);
                true
            }
            Err(err) => {
                state.error_message = Some(format!("Carousel not attached: {}", err));
                false
            }
        }
    }

    /// Changes text direction for the viewer and the attached carousel.
    pub fn set_direction(state: &mut AppState, direction: TextDirection) {
        state.viewport.set_direction(direction);
        state.deck.apply_options(direction, state.viewport.edge_mode());
    }

    /// Changes edge behavior for the viewer and the attached carousel.
    pub fn set_edge_mode(state: &mut AppState, edge_mode: EdgeMode) {
        state.viewport.set_edge_mode(edge_mode);
        state.deck.apply_options(state.viewport.direction(), edge_mode);
    }
}
