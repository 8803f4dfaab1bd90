//! Utility modules for the coverflow viewer.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{
    direction_label, edge_mode_label, format_memory_mb, format_position, format_tier,
    get_current_memory_mb,
};
