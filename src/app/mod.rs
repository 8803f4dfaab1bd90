//! Application-level modules for the coverflow viewer.
//!
//! This module contains the application coordinator, preference
//! persistence and centralized state.

mod app_state;
mod application_coordinator;
mod settings_coordinator;

pub use app_state::AppState;
pub use application_coordinator::ApplicationCoordinator;
pub use settings_coordinator::SettingsCoordinator;
