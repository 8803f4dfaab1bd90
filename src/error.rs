//! Error types for carousel attachment and configuration.

use thiserror::Error;

use crate::tier::Tier;

/// Reasons a controller refuses to attach to a deck.
///
/// A refused attach leaves nothing behind: no controller exists and no
/// input is routed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachError {
    #[error("carousel has no cards")]
    NoCards,
    #[error("initial index {index} is outside a deck of {total} cards")]
    InitialIndexOutOfRange { index: usize, total: usize },
}

/// Invalid carousel configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{tier} tier has an empty {curve}")]
    EmptyCurve { tier: Tier, curve: &'static str },
    #[error("{tier} tier card width must be positive, got {width}")]
    InvalidCardWidth { tier: Tier, width: f32 },
    #[error("desktop threshold ({desktop}px) must be above tablet threshold ({tablet}px)")]
    ThresholdOrder { desktop: f32, tablet: f32 },
    #[error("swipe threshold must be positive, got {0}")]
    InvalidSwipeThreshold(f32),
}
