//! Input handling subsystem for UI interactions.
//!
//! - Carousel input handling (keys, wheel, swipe, resize, clicks)

pub mod carousel_input_handler;
