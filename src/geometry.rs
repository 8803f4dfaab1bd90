//! Per-card geometry for the coverflow layout.
//!
//! Pure functions that turn `(card index, current index)` into the visual
//! parameters of one card for a tier:
//! - Signed offset with circular wraparound (shorter direction wins)
//! - Side-card transform read from the tier curves
//! - CSS transform string, the way a stylesheet would consume it
//! - A flat 2D projection used by the viewer to paint cards
//!
//! These functions are stateless and can be tested independently.

use crate::config::{EdgeMode, TextDirection};
use crate::tier::TierConfig;

/// Stacking order of the center card; side cards step down from here.
pub const CENTER_Z_INDEX: i32 = 10;
/// Stacking order of hidden cards.
pub const HIDDEN_Z_INDEX: i32 = 1;

const CENTER_TRANSFORM: &str = "translateX(0) translateZ(0) rotateY(0deg) scale(1.0)";

/// Signed distance from the current card to `index`.
///
/// In circular mode the raw difference is shifted by `total` once so the
/// result lies in `(-total/2, total/2]`. Bounded mode never wraps.
/// Returns 0 for an empty deck.
pub fn wrap_offset(index: usize, current: usize, total: usize, mode: EdgeMode) -> i64 {
    if total == 0 {
        return 0;
    }
    let total = total as i64;
    let mut diff = index as i64 - current as i64;
    if mode == EdgeMode::Circular {
        if diff * 2 > total {
            diff -= total;
        } else if diff * 2 <= -total {
            diff += total;
        }
    }
    diff
}

/// Derived visual state of one card.
///
/// This is the only thing the controller exposes about a card; the card
/// itself is never moved or reordered.
#[derive(Debug, Clone, PartialEq)]
pub struct CardVisual {
    /// Signed offset from the center card
    pub offset: i64,
    pub visible: bool,
    /// Horizontal offset in pixels, direction-adjusted
    pub translate_x: f32,
    /// Depth in pixels (negative is further away)
    pub translate_z: f32,
    /// Rotation around the vertical axis in degrees, direction-adjusted
    pub rotate_y: f32,
    pub scale: f32,
    pub opacity: f32,
    pub z_index: i32,
    /// The centered card ("active" marker)
    pub active: bool,
}

impl CardVisual {
    fn hidden(offset: i64) -> Self {
        Self {
            offset,
            visible: false,
            translate_x: 0.0,
            translate_z: 0.0,
            rotate_y: 0.0,
            scale: 1.0,
            opacity: 0.0,
            z_index: HIDDEN_Z_INDEX,
            active: false,
        }
    }

    fn center() -> Self {
        Self {
            offset: 0,
            visible: true,
            translate_x: 0.0,
            translate_z: 0.0,
            rotate_y: 0.0,
            scale: 1.0,
            opacity: 1.0,
            z_index: CENTER_Z_INDEX,
            active: true,
        }
    }

    /// Whether the card should receive pointer input.
    pub fn pointer_events(&self) -> bool {
        self.visible
    }

    /// CSS `transform` value, or `None` for hidden cards (transform cleared).
    pub fn transform_css(&self) -> Option<String> {
        if !self.visible {
            return None;
        }
        if self.active {
            return Some(CENTER_TRANSFORM.to_string());
        }
        Some(format!(
            "translateX({}px) translateZ({}px) rotateY({}deg) scale({})",
            self.translate_x, self.translate_z, self.rotate_y, self.scale
        ))
    }
}

/// Computes the visual state of a card at signed `offset` from the center.
pub fn card_visual(offset: i64, config: &TierConfig, direction: TextDirection) -> CardVisual {
    let distance = offset.unsigned_abs() as usize;
    if distance > config.half_visible {
        return CardVisual::hidden(offset);
    }
    if offset == 0 {
        return CardVisual::center();
    }

    let translate_x = offset as f32 * config.base_spacing();
    let rotate_y = config.rotate_y_curve.at(distance);
    // Left cards turn toward the center with a positive angle, right cards negative
    let rotation = if offset < 0 { rotate_y } else { -rotate_y };

    let (translate_x, rotation) = match direction {
        TextDirection::Ltr => (translate_x, rotation),
        TextDirection::Rtl => (-translate_x, -rotation),
    };

    CardVisual {
        offset,
        visible: true,
        translate_x,
        translate_z: config.translate_z_curve.at(distance),
        rotate_y: rotation,
        scale: config.scale_curve.at(distance),
        opacity: config.opacity_curve.at(distance),
        z_index: CENTER_Z_INDEX - distance as i32,
        active: false,
    }
}

/// A card flattened onto the screen plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedCard {
    /// Horizontal position of the card center relative to the stage center
    pub center_x: f32,
    /// Horizontal size multiplier (scale, depth and foreshortening)
    pub width_factor: f32,
    /// Vertical size multiplier (scale and depth)
    pub height_factor: f32,
    pub opacity: f32,
}

/// Projects a visible card with a simple pinhole perspective of
/// `perspective` pixels. Hidden cards project to nothing.
pub fn project(visual: &CardVisual, perspective: f32) -> Option<ProjectedCard> {
    if !visual.visible {
        return None;
    }
    let depth = if perspective > 0.0 {
        perspective / (perspective - visual.translate_z).max(1.0)
    } else {
        1.0
    };
    let foreshorten = visual.rotate_y.to_radians().cos().abs();
    Some(ProjectedCard {
        center_x: visual.translate_x * depth,
        width_factor: visual.scale * depth * foreshorten,
        height_factor: visual.scale * depth,
        opacity: visual.opacity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tier::TierTable;

    #[test]
    fn test_wrap_offset_picks_shorter_direction() {
        assert_eq!(wrap_offset(6, 0, 7, EdgeMode::Circular), -1);
        assert_eq!(wrap_offset(1, 0, 7, EdgeMode::Circular), 1);
        assert_eq!(wrap_offset(0, 6, 7, EdgeMode::Circular), 1);
        assert_eq!(wrap_offset(4, 0, 7, EdgeMode::Circular), -3);
        assert_eq!(wrap_offset(3, 0, 7, EdgeMode::Circular), 3);
    }

    #[test]
    fn test_wrap_offset_even_deck_half_open_range() {
        // (-total/2, total/2]: the opposite card sits on the right
        assert_eq!(wrap_offset(2, 0, 4, EdgeMode::Circular), 2);
        assert_eq!(wrap_offset(0, 2, 4, EdgeMode::Circular), 2);
    }

    #[test]
    fn test_wrap_offset_bounded_and_empty() {
        assert_eq!(wrap_offset(6, 0, 7, EdgeMode::Bounded), 6);
        assert_eq!(wrap_offset(0, 6, 7, EdgeMode::Bounded), -6);
        assert_eq!(wrap_offset(3, 1, 0, EdgeMode::Circular), 0);
    }

    #[test]
    fn test_center_card_visual() {
        let table = TierTable::default();
        let visual = card_visual(0, &table.desktop, TextDirection::Ltr);
        assert!(visual.active);
        assert_eq!(visual.scale, 1.0);
        assert_eq!(visual.opacity, 1.0);
        assert_eq!(visual.rotate_y, 0.0);
        assert_eq!(visual.translate_z, 0.0);
        assert_eq!(visual.z_index, CENTER_Z_INDEX);
        assert_eq!(
            visual.transform_css().as_deref(),
            Some("translateX(0) translateZ(0) rotateY(0deg) scale(1.0)")
        );
    }

    #[test]
    fn test_side_cards_read_curves() {
        let table = TierTable::default();
        let left = card_visual(-2, &table.desktop, TextDirection::Ltr);
        assert!(left.visible && !left.active);
        assert_eq!(left.scale, 0.78);
        assert_eq!(left.translate_z, -150.0);
        assert_eq!(left.rotate_y, 32.0);
        assert_eq!(left.opacity, 0.75);
        assert_eq!(left.z_index, 8);
        assert!(left.translate_x < 0.0);

        let right = card_visual(2, &table.desktop, TextDirection::Ltr);
        assert_eq!(right.rotate_y, -32.0);
        assert!(right.translate_x > 0.0);
    }

    #[test]
    fn test_rtl_mirrors_translation_and_rotation() {
        let table = TierTable::default();
        let ltr = card_visual(1, &table.tablet, TextDirection::Ltr);
        let rtl = card_visual(1, &table.tablet, TextDirection::Rtl);
        assert_eq!(rtl.translate_x, -ltr.translate_x);
        assert_eq!(rtl.rotate_y, -ltr.rotate_y);
        assert_eq!(rtl.scale, ltr.scale);
    }

    #[test]
    fn test_cards_beyond_half_window_are_hidden() {
        let table = TierTable::default();
        let visual = card_visual(2, &table.mobile, TextDirection::Ltr);
        assert!(!visual.visible);
        assert!(!visual.pointer_events());
        assert_eq!(visual.opacity, 0.0);
        assert_eq!(visual.z_index, HIDDEN_Z_INDEX);
        assert_eq!(visual.transform_css(), None);
        assert_eq!(project(&visual, 1000.0), None);
    }

    #[test]
    fn test_side_transform_css() {
        let table = TierTable::default();
        let visual = card_visual(1, &table.mobile, TextDirection::Ltr);
        assert_eq!(
            visual.transform_css().as_deref(),
            Some("translateX(144px) translateZ(-60px) rotateY(-25deg) scale(0.82)")
        );
    }

    #[test]
    fn test_projection_shrinks_distant_cards() {
        let table = TierTable::default();
        let center = project(&card_visual(0, &table.desktop, TextDirection::Ltr), 1000.0).unwrap();
        let side = project(&card_visual(3, &table.desktop, TextDirection::Ltr), 1000.0).unwrap();
        assert_eq!(center.center_x, 0.0);
        assert_eq!(center.width_factor, 1.0);
        assert!(side.width_factor < side.height_factor);
        assert!(side.height_factor < center.height_factor);
        assert!(side.center_x > 0.0);
    }
}
