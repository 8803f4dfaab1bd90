//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the coverflow viewer:
//! - Header panel (deck controls, direction, edge mode, simulated width)
//! - Carousel panel (stage, nav buttons, live region, style table)
//! - Status bar (carousel position, tier, deck source)
//! - Panel manager (panel orchestration and layout)
//! - Input handling (keyboard, wheel, swipe, resize)

pub mod header;
pub mod carousel_panel;
pub mod status_bar;
pub mod panel_manager;
pub mod input;
