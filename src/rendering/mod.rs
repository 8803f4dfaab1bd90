//! Rendering subsystem for the carousel stage
//!
//! - Card rendering (projected card rectangles, fills, labels)

pub mod card_renderer;
