pub mod config;
pub mod controller;
pub mod debounce;
pub mod deck;
pub mod error;
pub mod geometry;
pub mod input;
pub mod tier;
pub mod virtual_deck;

// Export controller
pub use controller::{
    Action, CarouselController, CarouselParts, CarouselState, Navigation, Viewport,
};

// Export configuration
pub use config::{CarouselConfig, EdgeMode, TextDirection, Timings};
pub use tier::{Curve, Tier, TierConfig, TierTable};

// Export layout
pub use geometry::{CardVisual, ProjectedCard};

// Export input reconciliation
pub use debounce::Debouncer;
pub use input::{Focus, InputEvent, InputReconciler, InputResponse, Key};

// Export deck data
pub use deck::{Card, Deck};
pub use virtual_deck::VirtualDeckGenerator;

pub use error::{AttachError, ConfigError};
