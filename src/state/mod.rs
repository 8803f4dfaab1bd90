//! State management modules for the coverflow viewer.
//!
//! This module contains state-only logic (no UI concerns):
//! - Deck state (attached carousel, input reconciler, deck source)
//! - Viewport state (measured/simulated width, direction, edge mode)
//! - Interaction state (drag, focus, reported width)
//! - Layout state (card height, perspective, style table)

mod deck_state;
mod viewport;
mod interaction;
mod layout_state;

pub use deck_state::DeckState;
pub use viewport::{ViewportState, MAX_SIMULATED_WIDTH, MIN_SIMULATED_WIDTH};
pub use interaction::InteractionState;
pub use layout_state::LayoutState;
