//! Carousel stage rendering and interaction.
//!
//! Draws the attached carousel, its nav buttons and live region, and routes
//! this frame's input into the controller.

use coverflow::input::button_action;
use coverflow::{geometry, Action, CardVisual, InputEvent};
use eframe::egui;
use egui::RichText;

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::rendering::card_renderer;
use crate::ui::input::carousel_input_handler;

/// Extra vertical room above and below the center card.
const STAGE_PADDING: f32 = 40.0;

/// A card prepared for painting.
struct StageCard {
    index: usize,
    name: String,
    visual: CardVisual,
}

/// Renders the carousel stage in the central panel.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `ctx` - The egui context for input access
/// * `state` - Mutable reference to application state
/// * `loader` - Async loader, for the loading indicator
pub fn render_carousel_panel(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    state: &mut AppState,
    loader: &AsyncLoader,
) {
    if loader.is_loading() {
        ui.centered_and_justified(|ui| {
            ui.spinner();
        });
        return;
    }

    let Some(controller) = state.deck.controller() else {
        ui.centered_and_justified(|ui| {
            ui.label("Open a deck file or generate a virtual deck to start.");
        });
        return;
    };

    let card_width = controller.tier_config().card_width;
    let perspective = state.layout.perspective();
    let card_height = state.layout.card_height();
    let dark_mode = ui.visuals().dark_mode;

    // Back-to-front, so nearer cards paint (and take clicks) over farther ones
    let mut cards: Vec<StageCard> = controller
        .render()
        .into_iter()
        .enumerate()
        .filter(|(_, visual)| visual.visible)
        .map(|(index, visual)| StageCard {
            index,
            name: controller.deck().get(index).map(|c| c.name.clone()).unwrap_or_default(),
            visual,
        })
        .collect();
    cards.sort_by_key(|card| card.visual.z_index);

    let direction = controller.direction();
    let left_action = button_action(false, direction);
    let right_action = button_action(true, direction);
    let enabled = |action: Action| match action {
        Action::Next => controller.can_next(),
        _ => controller.can_prev(),
    };
    let left_enabled = enabled(left_action);
    let right_enabled = enabled(right_action);
    let live_text = controller.live_text().unwrap_or_default().to_string();

    let mut ui_events = Vec::new();

    // Stage
    let stage_size = egui::vec2(ui.available_width(), card_height + STAGE_PADDING * 2.0);
    let (stage_rect, stage_response) =
        ui.allocate_exact_size(stage_size, egui::Sense::click_and_drag());
    if stage_response.clicked() {
        stage_response.request_focus();
    }
    if stage_response.has_focus() {
        ui.memory_mut(|m| {
            m.set_focus_lock_filter(
                stage_response.id,
                egui::EventFilter {
                    horizontal_arrows: true,
                    ..Default::default()
                },
            )
        });
    }

    let painter = ui.painter_at(stage_rect);
    painter.rect_filled(stage_rect, 6.0, ui.visuals().extreme_bg_color);
    if stage_response.has_focus() {
        painter.rect_stroke(
            stage_rect,
            6.0,
            ui.visuals().selection.stroke,
            egui::StrokeKind::Inside,
        );
    }

    for card in &cards {
        let Some(projected) = geometry::project(&card.visual, perspective) else {
            continue;
        };
        let rect =
            card_renderer::card_rect(stage_rect.center(), card_width, card_height, &projected);
        let active = card.visual.active;
        card_renderer::paint_card(&painter, rect, &projected, &card.name, active, dark_mode);

        if card.visual.pointer_events() {
            let card_id = ui.id().with(("carousel_card", card.index));
            let card_response = ui.interact(rect, card_id, egui::Sense::click());
            if card_response.clicked() {
                stage_response.request_focus();
                ui_events.push(InputEvent::CardClicked(card.index));
            }
        }
    }

    // Nav buttons and live region
    ui.horizontal(|ui| {
        if ui.add_enabled(left_enabled, egui::Button::new("◀")).clicked() {
            ui_events.push(button_event(false));
        }
        if ui.add_enabled(right_enabled, egui::Button::new("▶")).clicked() {
            ui_events.push(button_event(true));
        }
        ui.separator();
        ui.label(RichText::new(&live_text).strong());
    });

    if state.layout.show_styles() {
        render_style_table(ui, &cards);
    }

    carousel_input_handler::handle_carousel_input(
        ctx,
        stage_rect,
        &stage_response,
        ui_events,
        state,
    );
}

/// Nav button events are physical: the left button is always "prev".
fn button_event(is_right_button: bool) -> InputEvent {
    if is_right_button {
        InputEvent::NextButton
    } else {
        InputEvent::PrevButton
    }
}

/// Shows the inline styles the carousel produces for visible cards.
fn render_style_table(ui: &mut egui::Ui, cards: &[StageCard]) {
    ui.separator();
    egui::ScrollArea::vertical().max_height(180.0).show(ui, |ui| {
        egui::Grid::new("card_styles").striped(true).show(ui, |ui| {
            ui.strong("#");
            ui.strong("Card");
            ui.strong("transform");
            ui.strong("opacity");
            ui.strong("z-index");
            ui.end_row();

            for card in cards.iter().rev() {
                ui.label(card.index.to_string());
                ui.label(&card.name);
                ui.monospace(card.visual.transform_css().unwrap_or_default());
                ui.label(format!("{:.2}", card.visual.opacity));
                ui.label(card.visual.z_index.to_string());
                ui.end_row();
            }
        });
    });
}
