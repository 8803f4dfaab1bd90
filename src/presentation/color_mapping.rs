//! Card colors.
//!
//! Fill colors are picked deterministically from the card name so a card
//! keeps its color while it moves around the stage.

use egui::Color32;

const DARK_PALETTE: [Color32; 6] = [
    Color32::from_rgb(0x3b, 0x5b, 0x92),
    Color32::from_rgb(0x5a, 0x3e, 0x85),
    Color32::from_rgb(0x2f, 0x6f, 0x62),
    Color32::from_rgb(0x8a, 0x4b, 0x2f),
    Color32::from_rgb(0x7a, 0x2f, 0x4f),
    Color32::from_rgb(0x4a, 0x5a, 0x2a),
];

const LIGHT_PALETTE: [Color32; 6] = [
    Color32::from_rgb(0xbf, 0xd4, 0xf2),
    Color32::from_rgb(0xd9, 0xc8, 0xf0),
    Color32::from_rgb(0xbf, 0xe6, 0xd9),
    Color32::from_rgb(0xf5, 0xd3, 0xbd),
    Color32::from_rgb(0xf2, 0xc4, 0xd6),
    Color32::from_rgb(0xdc, 0xe6, 0xb8),
];

/// Stroke color around the centered card.
pub const ACTIVE_STROKE: Color32 = Color32::from_rgb(0xf0, 0xb4, 0x29);

/// Returns the fill color for a card.
///
/// # Arguments
/// * `name` - The card name
/// * `dark_mode` - Whether the UI uses dark visuals
pub fn card_fill(name: &str, dark_mode: bool) -> Color32 {
    let hash = name
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
    let palette = if dark_mode { &DARK_PALETTE } else { &LIGHT_PALETTE };
    palette[hash as usize % palette.len()]
}

/// Applies card opacity to a color.
pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
    color.gamma_multiply(opacity.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_fill_is_stable() {
        assert_eq!(card_fill("Housing", true), card_fill("Housing", true));
        assert!(DARK_PALETTE.contains(&card_fill("Cars", true)));
        assert!(LIGHT_PALETTE.contains(&card_fill("Cars", false)));
    }

    #[test]
    fn test_with_opacity_clamps() {
        assert_eq!(with_opacity(Color32::WHITE, 1.5), Color32::WHITE);
        assert_eq!(with_opacity(Color32::WHITE, 0.0), Color32::TRANSPARENT);
    }
}
