//! The carousel controller: index state machine plus per-card layout.
//!
//! One controller exists per attached deck. It owns the current index, the
//! active tier and the options it was attached with, and produces the
//! visual state of every card on demand. There is no shared or global
//! state, so any number of carousels can live side by side.

use crate::config::{CarouselConfig, EdgeMode, TextDirection};
use crate::deck::{Card, Deck};
use crate::error::AttachError;
use crate::geometry::{self, CardVisual};
use crate::tier::{Tier, TierConfig, TierTable};

/// Index state of one carousel.
///
/// Invariant: `current_index < total_cards`, and `total_cards > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    current_index: usize,
    total_cards: usize,
    tier: Tier,
}

impl CarouselState {
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }
}

/// A logical navigation request, already resolved for text direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Prev,
    First,
    Last,
    GoTo(usize),
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Moved { from: usize, to: usize },
    /// Out of range, stopped at an edge, or already there
    Unchanged,
}

impl Navigation {
    pub fn moved(&self) -> bool {
        matches!(self, Navigation::Moved { .. })
    }
}

/// The host pieces a carousel attaches to.
///
/// Cards are required. Nav buttons and the live region are optional: a
/// carousel without buttons ignores button input, and one without a live
/// region produces no announcement text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselParts {
    pub deck: Deck,
    pub nav_buttons: bool,
    pub live_region: bool,
}

impl CarouselParts {
    /// A deck with both nav buttons and a live region.
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            nav_buttons: true,
            live_region: true,
        }
    }

    pub fn without_nav_buttons(mut self) -> Self {
        self.nav_buttons = false;
        self
    }

    pub fn without_live_region(mut self) -> Self {
        self.live_region = false;
        self
    }
}

impl From<Deck> for CarouselParts {
    fn from(deck: Deck) -> Self {
        Self::new(deck)
    }
}

/// Environment the carousel is laid out in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub direction: TextDirection,
}

impl Viewport {
    pub fn new(width: f32, direction: TextDirection) -> Self {
        Self { width, direction }
    }
}

/// Coverflow carousel attached to a deck.
#[derive(Debug, Clone)]
pub struct CarouselController {
    deck: Deck,
    state: CarouselState,
    edge_mode: EdgeMode,
    direction: TextDirection,
    tiers: TierTable,
    nav_buttons: bool,
    live_region: bool,
    live_text: Option<String>,
}

impl CarouselController {
    /// Attaches to `deck`, centering the card flagged `current` (or the
    /// first card).
    ///
    /// An empty deck is refused and no controller is created.
    pub fn attach(
        deck: Deck,
        config: &CarouselConfig,
        viewport_width: f32,
    ) -> Result<Self, AttachError> {
        let viewport = Viewport::new(viewport_width, config.direction);
        Self::attach_parts(CarouselParts::new(deck), config, viewport)
    }

    /// Attaches to `deck` with an explicit starting index.
    pub fn attach_at(
        deck: Deck,
        config: &CarouselConfig,
        viewport_width: f32,
        initial_index: usize,
    ) -> Result<Self, AttachError> {
        let viewport = Viewport::new(viewport_width, config.direction);
        Self::attach_with(CarouselParts::new(deck), config, viewport, Some(initial_index))
    }

    /// Attaches to whatever parts the host provides. The viewport's text
    /// direction takes precedence over the config's.
    pub fn attach_parts(
        parts: CarouselParts,
        config: &CarouselConfig,
        viewport: Viewport,
    ) -> Result<Self, AttachError> {
        Self::attach_with(parts, config, viewport, None)
    }

    fn attach_with(
        parts: CarouselParts,
        config: &CarouselConfig,
        viewport: Viewport,
        initial_index: Option<usize>,
    ) -> Result<Self, AttachError> {
        let CarouselParts { deck, nav_buttons, live_region } = parts;
        let total = deck.len();
        if total == 0 {
            tracing::warn!("refusing to attach carousel to an empty deck");
            return Err(AttachError::NoCards);
        }
        let initial_index = initial_index.or_else(|| deck.current_index()).unwrap_or(0);
        if initial_index >= total {
            return Err(AttachError::InitialIndexOutOfRange { index: initial_index, total });
        }

        let tier = config.tiers.tier_for_width(viewport.width);
        let mut controller = Self {
            deck,
            state: CarouselState {
                current_index: initial_index,
                total_cards: total,
                tier,
            },
            edge_mode: config.edge_mode,
            direction: viewport.direction,
            tiers: config.tiers.clone(),
            nav_buttons,
            live_region,
            live_text: None,
        };
        controller.announce();
        tracing::debug!(cards = total, index = initial_index, %tier, "carousel attached");
        Ok(controller)
    }

    // ===== Queries =====

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn total_cards(&self) -> usize {
        self.state.total_cards
    }

    pub fn tier(&self) -> Tier {
        self.state.tier
    }

    pub fn tier_config(&self) -> &TierConfig {
        self.tiers.config(self.state.tier)
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.deck.get(self.state.current_index)
    }

    pub fn edge_mode(&self) -> EdgeMode {
        self.edge_mode
    }

    pub fn direction(&self) -> TextDirection {
        self.direction
    }

    pub fn has_nav_buttons(&self) -> bool {
        self.nav_buttons
    }

    pub fn has_live_region(&self) -> bool {
        self.live_region
    }

    /// Text for the assistive-technology live region; always `None`
    /// without a region.
    pub fn live_text(&self) -> Option<&str> {
        self.live_text.as_deref()
    }

    /// Whether stepping backward can move. Always true when circular.
    pub fn can_prev(&self) -> bool {
        self.edge_mode == EdgeMode::Circular || self.state.current_index > 0
    }

    /// Whether stepping forward can move. Always true when circular.
    pub fn can_next(&self) -> bool {
        self.edge_mode == EdgeMode::Circular
            || self.state.current_index + 1 < self.state.total_cards
    }

    // ===== Navigation =====

    pub fn next(&mut self) -> Navigation {
        let total = self.state.total_cards;
        let current = self.state.current_index;
        let target = match self.edge_mode {
            EdgeMode::Circular => (current + 1) % total,
            EdgeMode::Bounded if current + 1 < total => current + 1,
            EdgeMode::Bounded => return Navigation::Unchanged,
        };
        self.move_to(target)
    }

    pub fn prev(&mut self) -> Navigation {
        let total = self.state.total_cards;
        let current = self.state.current_index;
        let target = match self.edge_mode {
            EdgeMode::Circular => (current + total - 1) % total,
            EdgeMode::Bounded if current > 0 => current - 1,
            EdgeMode::Bounded => return Navigation::Unchanged,
        };
        self.move_to(target)
    }

    /// Absolute jump. Indices outside the deck are ignored.
    pub fn go_to(&mut self, index: usize) -> Navigation {
        if index >= self.state.total_cards {
            tracing::debug!(index, total = self.state.total_cards, "ignoring out-of-range go_to");
            return Navigation::Unchanged;
        }
        self.move_to(index)
    }

    pub fn apply(&mut self, action: Action) -> Navigation {
        match action {
            Action::Next => self.next(),
            Action::Prev => self.prev(),
            Action::First => self.go_to(0),
            Action::Last => self.go_to(self.state.total_cards - 1),
            Action::GoTo(index) => self.go_to(index),
        }
    }

    /// Recenters on the card whose center is closest to `track_center`,
    /// after free scrolling has settled.
    ///
    /// `card_centers` holds one horizontal center per card, in deck order.
    /// Extra entries are ignored; an empty slice changes nothing.
    pub fn settle_to_nearest(&mut self, card_centers: &[f32], track_center: f32) -> Navigation {
        let nearest = card_centers
            .iter()
            .take(self.state.total_cards)
            .enumerate()
            .filter(|(_, center)| !center.is_nan())
            .min_by(|(_, a), (_, b)| {
                let da = (*a - track_center).abs();
                let db = (*b - track_center).abs();
                da.total_cmp(&db)
            })
            .map(|(index, _)| index);

        match nearest {
            Some(index) => self.go_to(index),
            None => Navigation::Unchanged,
        }
    }

    fn move_to(&mut self, target: usize) -> Navigation {
        let from = self.state.current_index;
        if target == from {
            return Navigation::Unchanged;
        }
        self.state.current_index = target;
        self.announce();
        tracing::debug!(from, to = target, "carousel navigated");
        Navigation::Moved { from, to: target }
    }

    fn announce(&mut self) {
        if !self.live_region {
            return;
        }
        let index = self.state.current_index;
        let name = self.deck.get(index).map(|card| card.name.as_str()).unwrap_or_default();
        self.live_text = Some(format!(
            "Category {} of {}: {}",
            index + 1,
            self.state.total_cards,
            name
        ));
    }

    // ===== Layout =====

    /// Re-derives the tier for a new viewport width. The index is kept.
    ///
    /// Returns true if the tier changed.
    pub fn resize(&mut self, viewport_width: f32) -> bool {
        let tier = self.tiers.tier_for_width(viewport_width);
        if tier == self.state.tier {
            return false;
        }
        tracing::debug!(
            from = %self.state.tier,
            to = %tier,
            viewport_width,
            "carousel tier changed"
        );
        self.state.tier = tier;
        true
    }

    pub fn set_direction(&mut self, direction: TextDirection) {
        self.direction = direction;
    }

    pub fn set_edge_mode(&mut self, edge_mode: EdgeMode) {
        self.edge_mode = edge_mode;
    }

    /// Signed offset of card `index` from the center card.
    pub fn offset_of(&self, index: usize) -> i64 {
        let state = &self.state;
        geometry::wrap_offset(index, state.current_index, state.total_cards, self.edge_mode)
    }

    /// Visual state of a single card, or `None` past the end of the deck.
    pub fn visual_for(&self, index: usize) -> Option<CardVisual> {
        if index >= self.state.total_cards {
            return None;
        }
        Some(geometry::card_visual(self.offset_of(index), self.tier_config(), self.direction))
    }

    /// Visual state of every card, in deck order.
    pub fn render(&self) -> Vec<CardVisual> {
        let config = self.tier_config();
        (0..self.state.total_cards)
            .map(|index| geometry::card_visual(self.offset_of(index), config, self.direction))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(n: usize) -> Deck {
        Deck::from_names((0..n).map(|i| format!("Category {}", i)))
    }

    fn circular(n: usize) -> CarouselController {
        CarouselController::attach(deck(n), &CarouselConfig::default(), 1200.0).unwrap()
    }

    fn bounded(n: usize) -> CarouselController {
        let config = CarouselConfig {
            edge_mode: EdgeMode::Bounded,
            ..CarouselConfig::default()
        };
        CarouselController::attach(deck(n), &config, 1200.0).unwrap()
    }

    #[test]
    fn test_empty_deck_does_not_attach() {
        let result = CarouselController::attach(Deck::default(), &CarouselConfig::default(), 1200.0);
        assert_eq!(result.unwrap_err(), AttachError::NoCards);
    }

    #[test]
    fn test_initial_index_from_current_card() {
        let mut cards = deck(4);
        cards.cards[2].current = true;
        let controller = CarouselController::attach(cards, &CarouselConfig::default(), 1200.0).unwrap();
        assert_eq!(controller.current_index(), 2);

        let err = CarouselController::attach_at(deck(4), &CarouselConfig::default(), 1200.0, 4).unwrap_err();
        assert_eq!(err, AttachError::InitialIndexOutOfRange { index: 4, total: 4 });
    }

    #[test]
    fn test_missing_live_region_gives_no_text() {
        let parts = CarouselParts::new(deck(3)).without_live_region();
        let viewport = Viewport::new(1200.0, TextDirection::Ltr);
        let mut controller = CarouselController::attach_parts(parts, &CarouselConfig::default(), viewport).unwrap();
        assert!(!controller.has_live_region());
        assert_eq!(controller.live_text(), None);

        controller.next();
        assert_eq!(controller.current_index(), 1);
        assert_eq!(controller.live_text(), None);
    }

    #[test]
    fn test_viewport_sets_tier_and_direction() {
        let mut cards = deck(5);
        cards.cards[3].current = true;
        let viewport = Viewport::new(800.0, TextDirection::Rtl);
        let controller = CarouselController::attach_parts(cards.into(), &CarouselConfig::default(), viewport).unwrap();
        assert_eq!(controller.tier(), Tier::Tablet);
        assert_eq!(controller.direction(), TextDirection::Rtl);
        assert_eq!(controller.current_index(), 3);
        assert!(controller.has_nav_buttons());

        let empty = CarouselParts::new(Deck::default()).without_nav_buttons();
        let err = CarouselController::attach_parts(empty, &CarouselConfig::default(), viewport).unwrap_err();
        assert_eq!(err, AttachError::NoCards);
    }

    #[test]
    fn test_circular_wraps_both_ends() {
        let mut controller = circular(5);
        assert_eq!(controller.prev(), Navigation::Moved { from: 0, to: 4 });
        assert_eq!(controller.next(), Navigation::Moved { from: 4, to: 0 });
        assert!(controller.can_prev() && controller.can_next());
    }

    #[test]
    fn test_bounded_stops_at_edges() {
        let mut controller = bounded(3);
        assert!(!controller.can_prev());
        assert_eq!(controller.prev(), Navigation::Unchanged);
        assert_eq!(controller.current_index(), 0);

        controller.next();
        controller.next();
        assert_eq!(controller.current_index(), 2);
        assert!(!controller.can_next());
        assert_eq!(controller.next(), Navigation::Unchanged);
        assert_eq!(controller.current_index(), 2);
    }

    #[test]
    fn test_single_card_never_moves() {
        let mut controller = circular(1);
        assert_eq!(controller.next(), Navigation::Unchanged);
        assert_eq!(controller.prev(), Navigation::Unchanged);
        assert_eq!(controller.render().len(), 1);
        assert!(controller.render()[0].active);
    }

    #[test]
    fn test_go_to_out_of_range_is_ignored() {
        let mut controller = circular(5);
        controller.go_to(3);
        assert_eq!(controller.go_to(5), Navigation::Unchanged);
        assert_eq!(controller.go_to(usize::MAX), Navigation::Unchanged);
        assert_eq!(controller.current_index(), 3);
    }

    #[test]
    fn test_apply_first_and_last() {
        let mut controller = circular(6);
        assert_eq!(controller.apply(Action::Last), Navigation::Moved { from: 0, to: 5 });
        assert_eq!(controller.apply(Action::First), Navigation::Moved { from: 5, to: 0 });
        assert_eq!(controller.apply(Action::GoTo(2)), Navigation::Moved { from: 0, to: 2 });
    }

    #[test]
    fn test_live_text_follows_navigation() {
        let mut controller = circular(3);
        assert_eq!(controller.live_text(), Some("Category 1 of 3: Category 0"));
        controller.prev();
        assert_eq!(controller.live_text(), Some("Category 3 of 3: Category 2"));
    }

    #[test]
    fn test_render_hides_cards_outside_window() {
        let controller = circular(9);
        let visuals = controller.render();
        let visible: Vec<i64> = visuals.iter().filter(|v| v.visible).map(|v| v.offset).collect();
        assert_eq!(visible.len(), 7);
        assert!(visuals[0].active);
        assert_eq!(visuals[8].offset, -1);
        assert!(!visuals[4].visible);
        assert!(!visuals[5].visible);
    }

    #[test]
    fn test_resize_keeps_index() {
        let mut controller = circular(9);
        controller.go_to(4);
        assert!(controller.resize(500.0));
        assert_eq!(controller.tier(), Tier::Mobile);
        assert_eq!(controller.current_index(), 4);
        assert_eq!(controller.render().iter().filter(|v| v.visible).count(), 3);
        assert!(!controller.resize(600.0));
    }

    #[test]
    fn test_settle_to_nearest() {
        let mut controller = bounded(4);
        let centers = [100.0, 300.0, 500.0, 700.0];
        assert_eq!(controller.settle_to_nearest(&centers, 480.0), Navigation::Moved { from: 0, to: 2 });
        assert_eq!(controller.settle_to_nearest(&centers, 520.0), Navigation::Unchanged);
        assert_eq!(controller.settle_to_nearest(&[], 520.0), Navigation::Unchanged);
    }

    #[test]
    fn test_bounded_render_does_not_wrap() {
        let controller = bounded(7);
        let visuals = controller.render();
        assert_eq!(visuals[6].offset, 6);
        assert!(!visuals[6].visible);
    }
}
