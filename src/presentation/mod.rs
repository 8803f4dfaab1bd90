//! Presentation layer for visual styling.
//!
//! - Card fill colors and opacity handling

pub mod color_mapping;
