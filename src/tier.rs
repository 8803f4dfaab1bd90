//! Responsive tiers for the coverflow carousel.
//!
//! A tier is picked purely from the viewport width and owns the visual
//! parameters used to lay out side cards: how many cards show on each side
//! of the center, the horizontal spacing unit, and four curves indexed by
//! absolute offset from the center card.
//!
//! # Examples
//!
//! ```
//! use coverflow::tier::{Tier, TierTable};
//!
//! let table = TierTable::default();
//! assert_eq!(table.tier_for_width(1000.0), Tier::Desktop);
//! assert_eq!(table.config(Tier::Mobile).half_visible, 1);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Responsive configuration bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Desktop,
    Tablet,
    Mobile,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Desktop => "desktop",
            Tier::Tablet => "tablet",
            Tier::Mobile => "mobile",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A lookup table indexed by absolute card offset.
///
/// Offsets past the last defined entry read the last entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Curve(Vec<f32>);

impl Curve {
    pub fn new(points: Vec<f32>) -> Self {
        Self(points)
    }

    /// Returns the value for `offset`, clamped to the last entry.
    ///
    /// An empty curve reads as `0.0`; [`TierTable::validate`] rejects those.
    pub fn at(&self, offset: usize) -> f32 {
        match self.0.get(offset) {
            Some(value) => *value,
            None => self.0.last().copied().unwrap_or(0.0),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[f32]> for Curve {
    fn from(points: &[f32]) -> Self {
        Self(points.to_vec())
    }
}

/// Visual parameters owned by one tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierConfig {
    /// Cards visible on each side of the center card
    pub half_visible: usize,
    /// Card width in pixels, before spacing
    pub card_width: f32,
    /// Multiplier applied to `card_width` to get the horizontal step
    pub spacing_factor: f32,
    pub scale_curve: Curve,
    /// Depth offsets (translateZ) in pixels, negative pushes back
    pub translate_z_curve: Curve,
    /// Rotation magnitudes (rotateY) in degrees
    pub rotate_y_curve: Curve,
    pub opacity_curve: Curve,
}

impl TierConfig {
    /// Horizontal distance between adjacent card centers.
    pub fn base_spacing(&self) -> f32 {
        self.card_width * self.spacing_factor
    }

    /// Number of cards on screen for this tier, center included.
    pub fn visible_count(&self) -> usize {
        self.half_visible * 2 + 1
    }

    fn validate(&self, tier: Tier) -> Result<(), ConfigError> {
        let curves = [
            ("scale_curve", &self.scale_curve),
            ("translate_z_curve", &self.translate_z_curve),
            ("rotate_y_curve", &self.rotate_y_curve),
            ("opacity_curve", &self.opacity_curve),
        ];
        for (name, curve) in curves {
            if curve.is_empty() {
                return Err(ConfigError::EmptyCurve { tier, curve: name });
            }
        }
        if self.card_width.is_nan() || self.card_width <= 0.0 {
            return Err(ConfigError::InvalidCardWidth { tier, width: self.card_width });
        }
        Ok(())
    }
}

/// The three tiers plus the width thresholds that select them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierTable {
    /// Minimum viewport width for the desktop tier
    pub desktop_min_width: f32,
    /// Minimum viewport width for the tablet tier
    pub tablet_min_width: f32,
    pub desktop: TierConfig,
    pub tablet: TierConfig,
    pub mobile: TierConfig,
}

static DEFAULT_TIERS: Lazy<TierTable> = Lazy::new(|| TierTable {
    desktop_min_width: 992.0,
    tablet_min_width: 768.0,
    desktop: TierConfig {
        half_visible: 3,
        card_width: 185.0,
        spacing_factor: 0.85,
        scale_curve: Curve::from(&[1.0, 0.88, 0.78, 0.70][..]),
        translate_z_curve: Curve::from(&[0.0, -80.0, -150.0, -200.0][..]),
        rotate_y_curve: Curve::from(&[0.0, 18.0, 32.0, 42.0][..]),
        opacity_curve: Curve::from(&[1.0, 0.9, 0.75, 0.6][..]),
    },
    tablet: TierConfig {
        half_visible: 2,
        card_width: 170.0,
        spacing_factor: 0.9,
        scale_curve: Curve::from(&[1.0, 0.85, 0.72][..]),
        translate_z_curve: Curve::from(&[0.0, -70.0, -130.0][..]),
        rotate_y_curve: Curve::from(&[0.0, 20.0, 38.0][..]),
        opacity_curve: Curve::from(&[1.0, 0.85, 0.65][..]),
    },
    mobile: TierConfig {
        half_visible: 1,
        card_width: 144.0,
        spacing_factor: 1.0,
        scale_curve: Curve::from(&[1.0, 0.82][..]),
        translate_z_curve: Curve::from(&[0.0, -60.0][..]),
        rotate_y_curve: Curve::from(&[0.0, 25.0][..]),
        opacity_curve: Curve::from(&[1.0, 0.8][..]),
    },
});

impl Default for TierTable {
    fn default() -> Self {
        DEFAULT_TIERS.clone()
    }
}

impl TierTable {
    /// Selects the tier for a viewport width using the threshold ladder.
    ///
    /// Anything that is not at least the tablet threshold (including NaN)
    /// falls through to mobile.
    pub fn tier_for_width(&self, width: f32) -> Tier {
        if width >= self.desktop_min_width {
            Tier::Desktop
        } else if width >= self.tablet_min_width {
            Tier::Tablet
        } else {
            Tier::Mobile
        }
    }

    pub fn config(&self, tier: Tier) -> &TierConfig {
        match tier {
            Tier::Desktop => &self.desktop,
            Tier::Tablet => &self.tablet,
            Tier::Mobile => &self.mobile,
        }
    }

    /// Checks thresholds and curves.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.desktop_min_width <= self.tablet_min_width {
            return Err(ConfigError::ThresholdOrder {
                desktop: self.desktop_min_width,
                tablet: self.tablet_min_width,
            });
        }
        self.desktop.validate(Tier::Desktop)?;
        self.tablet.validate(Tier::Tablet)?;
        self.mobile.validate(Tier::Mobile)?;
        Ok(())
    }
}
