//! Text formatting utilities for the coverflow viewer.

use coverflow::{EdgeMode, TextDirection, Tier};
use sysinfo::{Pid, ProcessRefreshKind, RefreshKind, System};

/// Formats a 0-based index as a 1-based position.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_position(0, 12), "1 / 12");
/// ```
pub fn format_position(index: usize, total: usize) -> String {
    format!("{} / {}", index + 1, total)
}

/// Formats the active tier with the width that selected it.
pub fn format_tier(tier: Tier, width: f32, simulated: bool) -> String {
    let source = if simulated { "simulated" } else { "window" };
    format!("{} ({:.0}px {})", tier, width, source)
}

pub fn edge_mode_label(mode: EdgeMode) -> &'static str {
    match mode {
        EdgeMode::Circular => "Circular",
        EdgeMode::Bounded => "Bounded",
    }
}

pub fn direction_label(direction: TextDirection) -> &'static str {
    match direction {
        TextDirection::Ltr => "LTR",
        TextDirection::Rtl => "RTL",
    }
}

/// Gets the current process memory usage in megabytes.
///
/// Returns 0.0 if the process information cannot be retrieved.
pub fn get_current_memory_mb() -> f64 {
    let mut sys = System::new_with_specifics(
        RefreshKind::new().with_processes(ProcessRefreshKind::new().with_memory())
    );
    sys.refresh_processes_specifics(ProcessRefreshKind::new().with_memory());

    sys.process(Pid::from_u32(std::process::id()))
        .map(|process| process.memory() as f64 / (1024.0 * 1024.0))
        .unwrap_or(0.0)
}

/// Formats memory usage in MB as a human-readable string.
pub fn format_memory_mb(memory_mb: f64) -> String {
    if memory_mb > 1024.0 {
        format!("Memory: {:.2} GB", memory_mb / 1024.0)
    } else {
        format!("Memory: {:.1} MB", memory_mb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_position_is_one_based() {
        assert_eq!(format_position(0, 12), "1 / 12");
        assert_eq!(format_position(11, 12), "12 / 12");
    }

    #[test]
    fn test_format_tier() {
        assert_eq!(format_tier(Tier::Tablet, 800.4, true), "tablet (800px simulated)");
        assert_eq!(format_tier(Tier::Desktop, 1280.0, false), "desktop (1280px window)");
    }

    #[test]
    fn test_format_memory() {
        assert_eq!(format_memory_mb(512.5), "Memory: 512.5 MB");
        assert_eq!(format_memory_mb(2048.0), "Memory: 2.00 GB");
    }
}
