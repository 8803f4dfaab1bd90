//! Panel orchestration and layout management.
//!
//! Lays out the header, status bar and carousel stage, and hands header
//! requests back to the application.

use std::path::PathBuf;

use coverflow::{EdgeMode, TextDirection};

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::ui::{carousel_panel, header, status_bar};

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested to open a deck file
    OpenFileRequested(PathBuf),
    /// User requested a generated deck
    OpenVirtualDeckRequested { seed: u64 },
    DirectionChanged(TextDirection),
    EdgeModeChanged(EdgeMode),
}

impl From<header::HeaderInteraction> for PanelInteraction {
    fn from(interaction: header::HeaderInteraction) -> Self {
        use header::HeaderInteraction;

        match interaction {
            HeaderInteraction::OpenFileRequested(path) => PanelInteraction::OpenFileRequested(path),
            HeaderInteraction::OpenVirtualDeckRequested { seed } => {
                PanelInteraction::OpenVirtualDeckRequested { seed }
            }
            HeaderInteraction::DirectionChanged(direction) => {
                PanelInteraction::DirectionChanged(direction)
            }
            HeaderInteraction::EdgeModeChanged(mode) => PanelInteraction::EdgeModeChanged(mode),
        }
    }
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Called from the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoader,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            interaction = header::render_header(ui, state).map(PanelInteraction::from);
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        let stage_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(8))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default().frame(stage_frame).show(ctx, |ui| {
            ui.heading("Categories");
            ui.separator();
            carousel_panel::render_carousel_panel(ui, ctx, state, loader);
        });

        interaction
    }
}
