//! Status bar UI rendering
//!
//! Handles the bottom status bar showing carousel state and deck source.

use coverflow::Focus;
use eframe::egui;
use egui::RichText;

use crate::app::AppState;
use crate::utils::{
    direction_label, edge_mode_label, format_memory_mb, format_position, format_tier,
    get_current_memory_mb,
};

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());
        ui.label(RichText::new("|").strong());

        let Some(controller) = state.deck.controller() else {
            ui.label(RichText::new("No deck loaded").strong());
            return;
        };

        let width = state.viewport.effective_width();
        let simulated = state.viewport.width_override().is_some();
        let source = match (state.deck.file_path(), state.deck.virtual_seed()) {
            (Some(path), _) => path.display().to_string(),
            (None, Some(seed)) => format!("Virtual deck (seed {})", seed),
            (None, None) => "Unknown source".to_string(),
        };

        ui.label(RichText::new(format!(
            "Card: {} | Tier: {} | Edges: {} | Direction: {} | {}",
            format_position(controller.current_index(), controller.total_cards()),
            format_tier(controller.tier(), width, simulated),
            edge_mode_label(controller.edge_mode()),
            direction_label(controller.direction()),
            source
        )).strong());

        if state.interaction.focus() == Focus::Card {
            ui.label(RichText::new("| Keyboard").strong());
        }
        if state.interaction.is_dragging() {
            ui.label(RichText::new("| Swiping").strong().color(egui::Color32::YELLOW));
        }
    });
}
