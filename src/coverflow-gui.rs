//! Coverflow Category Carousel Viewer
//!
//! This module provides an interactive viewer for coverflow category decks using the egui framework.
//! The viewer features:
//! - 3D-style carousel stage with responsive desktop/tablet/mobile tiers
//! - Keyboard, button, wheel and swipe navigation with RTL support
//! - Asynchronous deck loading with loading indicators
//! - Simulated viewport widths and persistent viewer preferences
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `presentation/` - Card colors
//! - `io/` - Deck loading and virtual deck generation
//! - `utils/` - Utility functions for formatting
//! - `ui/` - UI panel rendering, interaction, and input handling
//! - `rendering/` - Low-level card painting
//! - `state/` - State management for deck, viewport and interaction

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;
use eframe::egui;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use coverflow::CarouselConfig;

mod utils;
mod presentation;
mod io;
mod app;
mod rendering;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator};
use io::AsyncLoader;
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Interactive viewer for coverflow category decks.
#[derive(Parser, Debug)]
#[command(name = "coverflow-gui", version, about)]
struct Args {
    /// Deck JSON file to open on startup
    deck: Option<PathBuf>,

    /// Carousel config file (defaults to <config dir>/coverflow/config.json)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Main application entry point that initializes and launches the coverflow viewer GUI.
fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let (config, config_error) = match CarouselConfig::load_or_default(args.config.as_deref()) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "falling back to default carousel config");
            (CarouselConfig::default(), Some(format!("Config error: {:#}", err)))
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 700.0])
            .with_title("Coverflow Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "Coverflow Viewer",
        options,
        Box::new(move |cc| {
            Ok(Box::new(CoverflowViewerApp::new(cc, config, config_error, args.deck)))
        }),
    )
}

/// The main coverflow viewer application.
///
/// Delegates most functionality to coordinators:
/// - `ApplicationCoordinator` handles deck loading, error handling, and header options
/// - `SettingsCoordinator` handles preference persistence
/// - `PanelManager` handles UI panel layout and rendering
struct CoverflowViewerApp {
    /// Centralized application state
    state: AppState,
    /// Asynchronous deck loader
    loader: AsyncLoader,
    /// Optional deck to load on first frame
    pending_file_load: Option<PathBuf>,
}

impl CoverflowViewerApp {
    /// Creates a new viewer instance with preferences loaded from persistent storage.
    ///
    /// An explicit deck argument wins over the last deck opened.
    fn new(
        cc: &eframe::CreationContext,
        config: CarouselConfig,
        config_error: Option<String>,
        initial_file: Option<PathBuf>,
    ) -> Self {
        let settings = SettingsCoordinator::load(cc.storage);

        let mut state = match settings.viewport {
            Some(viewport) => AppState::with_settings(config, viewport, settings.layout),
            None => {
                let mut state = AppState::new(config);
                state.layout = settings.layout;
                state
            }
        };
        state.error_message = config_error;

        let last_deck = settings.last_deck_path.filter(|path| path.is_file());
        let pending_file_load = initial_file.or(last_deck);

        Self {
            state,
            loader: AsyncLoader::new(),
            pending_file_load,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::OpenFileRequested(path) => {
                ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
            }
            PanelInteraction::OpenVirtualDeckRequested { seed } => {
                ApplicationCoordinator::open_virtual_deck(&mut self.state, &self.loader, seed);
            }
            PanelInteraction::DirectionChanged(direction) => {
                ApplicationCoordinator::set_direction(&mut self.state, direction);
            }
            PanelInteraction::EdgeModeChanged(edge_mode) => {
                ApplicationCoordinator::set_edge_mode(&mut self.state, edge_mode);
            }
        }
    }
}

impl eframe::App for CoverflowViewerApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save(storage, &self.state);
    }

    /// Main update loop:
    /// 1. Check for async loading completion
    /// 2. Track the window width
    /// 3. Load initial deck if one is pending
    /// 4. Render all panels via PanelManager
    /// 5. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader);

        self.state.viewport.set_measured_width(ctx.content_rect().width());

        if let Some(path) = self.pending_file_load.take() {
            ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
        }

        let interaction = PanelManager::render_all_panels(ctx, &mut self.state, &self.loader);
        if let Some(interaction) = interaction {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}
