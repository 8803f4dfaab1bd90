//! Card painting for the carousel stage.
//!
//! Cards are painted back-to-front from their projected geometry. egui has
//! no 3D transforms, so rotation shows up as horizontal foreshortening and
//! depth as uniform shrinking toward the stage center line.

use coverflow::ProjectedCard;
use eframe::egui;
use egui::{Align2, Color32, FontId, Stroke};

use crate::presentation::color_mapping;

/// Font size of the card name on the center card.
const NAME_FONT_SIZE: f32 = 16.0;
const CORNER_RADIUS: f32 = 10.0;

/// Screen rectangle of a projected card.
///
/// # Arguments
/// * `stage_center` - Center of the stage; the center card is drawn here
/// * `card_width` - Unscaled card width for the active tier
/// * `card_height` - Unscaled card height
/// * `projected` - Projected card geometry
pub fn card_rect(
    stage_center: egui::Pos2,
    card_width: f32,
    card_height: f32,
    projected: &ProjectedCard,
) -> egui::Rect {
    egui::Rect::from_center_size(
        egui::pos2(stage_center.x + projected.center_x, stage_center.y),
        egui::vec2(
            (card_width * projected.width_factor).max(1.0),
            (card_height * projected.height_factor).max(1.0),
        ),
    )
}

/// Paints one card.
///
/// # Arguments
/// * `painter` - Painter clipped to the stage
/// * `rect` - Card rectangle from [`card_rect`]
/// * `projected` - Projected card geometry (for opacity and text size)
/// * `name` - Card label
/// * `active` - Whether this is the centered card
/// * `dark_mode` - Whether dark visuals are active
pub fn paint_card(
    painter: &egui::Painter,
    rect: egui::Rect,
    projected: &ProjectedCard,
    name: &str,
    active: bool,
    dark_mode: bool,
) {
    let base = color_mapping::card_fill(name, dark_mode);
    let fill = color_mapping::with_opacity(base, projected.opacity);
    painter.rect_filled(rect, CORNER_RADIUS * projected.height_factor, fill);

    if active {
        painter.rect_stroke(
            rect,
            CORNER_RADIUS,
            Stroke::new(2.0, color_mapping::ACTIVE_STROKE),
            egui::StrokeKind::Outside,
        );
    }

    let text_color = if dark_mode { Color32::WHITE } else { Color32::BLACK };
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        name,
        FontId::proportional((NAME_FONT_SIZE * projected.height_factor).max(6.0)),
        color_mapping::with_opacity(text_color, projected.opacity),
    );
}
