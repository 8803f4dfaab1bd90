//! Header panel UI rendering
//!
//! Handles the top bar with deck controls, carousel options and the
//! simulated viewport width.

use coverflow::{EdgeMode, TextDirection};
use eframe::egui;
use egui::Color32;
use std::path::PathBuf;

use crate::app::AppState;
use crate::state::{MAX_SIMULATED_WIDTH, MIN_SIMULATED_WIDTH};
use crate::utils::{direction_label, edge_mode_label};

/// Seed of the first generated virtual deck.
const FIRST_VIRTUAL_SEED: u64 = 42;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a deck file
    OpenFileRequested(PathBuf),
    /// User asked for a generated deck
    OpenVirtualDeckRequested { seed: u64 },
    DirectionChanged(TextDirection),
    EdgeModeChanged(EdgeMode),
}

/// Renders the application header
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📁 Open Deck").clicked() {
            let mut dialog = rfd::FileDialog::new().add_filter("Deck Files", &["json"]);

            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenFileRequested(path));
            }
        }

        if ui.button("🔮 Virtual Deck").clicked() {
            // Each click shows a different deck
            let seed = state
                .deck
                .virtual_seed()
                .map(|seed| seed.wrapping_add(1))
                .unwrap_or(FIRST_VIRTUAL_SEED);
            interaction = Some(HeaderInteraction::OpenVirtualDeckRequested { seed });
        }

        ui.separator();

        ui.label("Direction:");
        let mut direction = state.viewport.direction();
        egui::ComboBox::from_id_salt("direction_selector")
            .selected_text(direction_label(direction))
            .show_ui(ui, |ui| {
                for option in [TextDirection::Ltr, TextDirection::Rtl] {
                    ui.selectable_value(&mut direction, option, direction_label(option));
                }
            });
        if direction != state.viewport.direction() {
            interaction = Some(HeaderInteraction::DirectionChanged(direction));
        }

        ui.label("Edges:");
        let mut edge_mode = state.viewport.edge_mode();
        egui::ComboBox::from_id_salt("edge_mode_selector")
            .selected_text(edge_mode_label(edge_mode))
            .show_ui(ui, |ui| {
                for option in [EdgeMode::Circular, EdgeMode::Bounded] {
                    ui.selectable_value(&mut edge_mode, option, edge_mode_label(option));
                }
            });
        if edge_mode != state.viewport.edge_mode() {
            interaction = Some(HeaderInteraction::EdgeModeChanged(edge_mode));
        }

        ui.separator();

        // Simulated viewport width
        let mut simulate = state.viewport.width_override().is_some();
        let mut width = state.viewport.width_override().unwrap_or(state.viewport.effective_width());
        let simulate_response = ui.checkbox(&mut simulate, "Simulate width");
        let slider_response = ui.add_enabled(
            simulate,
            egui::Slider::new(&mut width, MIN_SIMULATED_WIDTH..=MAX_SIMULATED_WIDTH).suffix("px"),
        );
        if simulate_response.changed() || slider_response.changed() {
            state.viewport.set_width_override(simulate.then_some(width));
        }

        ui.separator();

        ui.menu_button("Stage", |ui| {
            let card_height = egui::Slider::new(state.layout.card_height_mut(), 120.0..=400.0);
            ui.add(card_height.text("Card height"));
            let perspective = egui::Slider::new(state.layout.perspective_mut(), 400.0..=3000.0);
            ui.add(perspective.text("Perspective"));
            ui.checkbox(state.layout.show_styles_mut(), "Show card styles");
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(Color32::RED, err);
    }

    interaction
}
