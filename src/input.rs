//! Input reconciliation for the carousel.
//!
//! Maps raw host events onto controller operations:
//! - Prev/next buttons
//! - Keyboard (arrows, Home/End, Enter/Space on a focused button)
//! - Touch or pointer swipes
//! - Wheel (debounced)
//! - Free-scroll settling (debounced)
//! - Viewport resize (debounced)
//!
//! Right-to-left text direction mirrors buttons, arrow keys and swipes.
//! Debounced channels are released by [`InputReconciler::poll`], which the
//! host calls with the current time; [`InputReconciler::next_deadline`]
//! tells it when to call again.

use std::time::Instant;

use crate::config::{CarouselConfig, TextDirection};
use crate::controller::{Action, CarouselController, Navigation};
use crate::debounce::Debouncer;

/// Keys the carousel cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Enter,
    Space,
    Other,
}

/// Where keyboard focus was when a key was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// A card inside the carousel
    Card,
    PrevButton,
    NextButton,
    /// Anywhere else on the page
    Outside,
}

/// A raw event delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PrevButton,
    NextButton,
    Key { key: Key, focus: Focus },
    TouchStart { x: f32, y: f32 },
    TouchEnd { x: f32, y: f32 },
    Wheel { delta_y: f32 },
    /// The card track scrolled; positions are in the same coordinate space
    Scroll { card_centers: Vec<f32>, track_center: f32 },
    Resize { width: f32 },
    CardClicked(usize),
}

/// What the host should do after an event or poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputResponse {
    /// Suppress the host's default handling (page scroll, etc.)
    pub prevent_default: bool,
    pub navigation: Navigation,
    /// The tier changed; the host must re-render all cards
    pub relayout: bool,
}

impl InputResponse {
    pub fn ignored() -> Self {
        Self {
            prevent_default: false,
            navigation: Navigation::Unchanged,
            relayout: false,
        }
    }

    fn consumed(navigation: Navigation) -> Self {
        Self {
            prevent_default: true,
            navigation,
            relayout: false,
        }
    }

    fn passive(navigation: Navigation) -> Self {
        Self {
            prevent_default: false,
            navigation,
            relayout: false,
        }
    }

    /// Whether anything visible changed.
    pub fn needs_render(&self) -> bool {
        self.navigation.moved() || self.relayout
    }

    /// Combines two responses; the later navigation wins if it moved.
    pub fn merge(self, other: InputResponse) -> Self {
        Self {
            prevent_default: self.prevent_default || other.prevent_default,
            navigation: if other.navigation.moved() { other.navigation } else { self.navigation },
            relayout: self.relayout || other.relayout,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ScrollSnapshot {
    card_centers: Vec<f32>,
    track_center: f32,
}

/// Maps a key press to a logical action.
///
/// Only keys pressed while a card has focus navigate; `Enter` and `Space`
/// activate a focused nav button.
pub fn key_action(key: Key, focus: Focus, direction: TextDirection) -> Option<Action> {
    match focus {
        Focus::Card => match (key, direction) {
            (Key::ArrowLeft, TextDirection::Ltr) | (Key::ArrowRight, TextDirection::Rtl) => {
                Some(Action::Prev)
            }
            (Key::ArrowRight, TextDirection::Ltr) | (Key::ArrowLeft, TextDirection::Rtl) => {
                Some(Action::Next)
            }
            (Key::Home, _) => Some(Action::First),
            (Key::End, _) => Some(Action::Last),
            _ => None,
        },
        Focus::PrevButton | Focus::NextButton if matches!(key, Key::Enter | Key::Space) => {
            Some(button_action(focus == Focus::NextButton, direction))
        }
        _ => None,
    }
}

/// Maps a nav button to a logical action; the buttons swap under RTL.
pub fn button_action(is_next_button: bool, direction: TextDirection) -> Action {
    match (is_next_button, direction.is_rtl()) {
        (true, false) | (false, true) => Action::Next,
        (false, false) | (true, true) => Action::Prev,
    }
}

/// Classifies a finished swipe.
///
/// The horizontal travel must dominate the vertical travel and exceed
/// `threshold`. Swiping left advances under LTR, swiping right under RTL.
pub fn swipe_action(dx: f32, dy: f32, threshold: f32, direction: TextDirection) -> Option<Action> {
    if dx.abs() <= dy.abs() || dx.abs() <= threshold {
        return None;
    }
    let advance = match direction {
        TextDirection::Ltr => dx < 0.0,
        TextDirection::Rtl => dx > 0.0,
    };
    Some(if advance { Action::Next } else { Action::Prev })
}

/// Routes events from every input channel into one controller.
#[derive(Debug, Clone)]
pub struct InputReconciler {
    swipe_threshold: f32,
    touch_start: Option<(f32, f32)>,
    wheel: Debouncer<f32>,
    resize: Debouncer<f32>,
    scroll: Debouncer<ScrollSnapshot>,
}

impl InputReconciler {
    pub fn new(config: &CarouselConfig) -> Self {
        Self {
            swipe_threshold: config.swipe_threshold_px,
            touch_start: None,
            wheel: Debouncer::new(config.timings.wheel()),
            resize: Debouncer::new(config.timings.resize()),
            scroll: Debouncer::new(config.timings.scroll_settle()),
        }
    }

    /// Handles one event at time `now`.
    pub fn handle(
        &mut self,
        controller: &mut CarouselController,
        event: InputEvent,
        now: Instant,
    ) -> InputResponse {
        let direction = controller.direction();
        match event {
            InputEvent::PrevButton | InputEvent::NextButton if !controller.has_nav_buttons() => {
                InputResponse::ignored()
            }
            InputEvent::PrevButton => {
                InputResponse::passive(controller.apply(button_action(false, direction)))
            }
            InputEvent::NextButton => {
                InputResponse::passive(controller.apply(button_action(true, direction)))
            }
            InputEvent::Key { key, focus } => match key_action(key, focus, direction) {
                Some(action) => InputResponse::consumed(controller.apply(action)),
                None => InputResponse::ignored(),
            },
            InputEvent::TouchStart { x, y } => {
                self.touch_start = Some((x, y));
                InputResponse::ignored()
            }
            InputEvent::TouchEnd { x, y } => {
                let Some((start_x, start_y)) = self.touch_start.take() else {
                    return InputResponse::ignored();
                };
                match swipe_action(x - start_x, y - start_y, self.swipe_threshold, direction) {
                    Some(action) => InputResponse::passive(controller.apply(action)),
                    None => InputResponse::ignored(),
                }
            }
            InputEvent::Wheel { delta_y } => {
                self.wheel.push(now, delta_y);
                InputResponse::consumed(Navigation::Unchanged)
            }
            InputEvent::Scroll { card_centers, track_center } => {
                self.scroll.push(now, ScrollSnapshot { card_centers, track_center });
                InputResponse::ignored()
            }
            InputEvent::Resize { width } => {
                self.resize.push(now, width);
                InputResponse::ignored()
            }
            InputEvent::CardClicked(index) => InputResponse::passive(controller.go_to(index)),
        }
    }

    /// Releases every debounced channel whose quiet period has elapsed.
    pub fn poll(&mut self, controller: &mut CarouselController, now: Instant) -> InputResponse {
        let mut response = InputResponse::ignored();

        if let Some(width) = self.resize.poll(now) {
            let relayout = controller.resize(width);
            response = response.merge(InputResponse {
                prevent_default: false,
                navigation: Navigation::Unchanged,
                relayout,
            });
        }

        if let Some(delta_y) = self.wheel.poll(now) {
            // Only a downward delta advances; zero steps back like an upward one
            let navigation = if delta_y > 0.0 { controller.next() } else { controller.prev() };
            response = response.merge(InputResponse::passive(navigation));
        }

        if let Some(snapshot) = self.scroll.poll(now) {
            let navigation =
                controller.settle_to_nearest(&snapshot.card_centers, snapshot.track_center);
            response = response.merge(InputResponse::passive(navigation));
        }

        response
    }

    /// Earliest time a pending channel becomes due.
    pub fn next_deadline(&self) -> Option<Instant> {
        [self.resize.deadline(), self.wheel.deadline(), self.scroll.deadline()]
            .into_iter()
            .flatten()
            .min()
    }

    /// Whether a swipe is in progress.
    pub fn is_tracking_touch(&self) -> bool {
        self.touch_start.is_some()
    }

    /// Drops any half-finished gesture and pending debounced input.
    pub fn reset(&mut self) {
        self.touch_start = None;
        self.wheel.cancel();
        self.resize.cancel();
        self.scroll.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{CarouselParts, Viewport};
    use crate::deck::Deck;
    use crate::tier::Tier;
    use std::time::Duration;

    const MS: Duration = Duration::from_millis(1);

    fn setup(direction: TextDirection) -> (CarouselController, InputReconciler) {
        let config = CarouselConfig {
            direction,
            ..CarouselConfig::default()
        };
        let deck = Deck::from_names(["a", "b", "c", "d", "e"]);
        let controller = CarouselController::attach(deck, &config, 1200.0).unwrap();
        (controller, InputReconciler::new(&config))
    }

    #[test]
    fn test_rtl_arrow_left_matches_ltr_arrow_right() {
        let now = Instant::now();
        let key = |key| InputEvent::Key { key, focus: Focus::Card };

        let (mut ltr, mut ltr_input) = setup(TextDirection::Ltr);
        let (mut rtl, mut rtl_input) = setup(TextDirection::Rtl);
        ltr_input.handle(&mut ltr, key(Key::ArrowRight), now);
        rtl_input.handle(&mut rtl, key(Key::ArrowLeft), now);
        assert_eq!(ltr.current_index(), 1);
        assert_eq!(rtl.current_index(), ltr.current_index());
    }

    #[test]
    fn test_handled_keys_prevent_default() {
        let now = Instant::now();
        let (mut controller, mut input) = setup(TextDirection::Ltr);

        let response = input.handle(&mut controller, InputEvent::Key { key: Key::End, focus: Focus::Card }, now);
        assert!(response.prevent_default);
        assert_eq!(controller.current_index(), 4);

        let response = input.handle(&mut controller, InputEvent::Key { key: Key::Home, focus: Focus::Card }, now);
        assert!(response.prevent_default);
        assert_eq!(controller.current_index(), 0);

        let response = input.handle(&mut controller, InputEvent::Key { key: Key::Other, focus: Focus::Card }, now);
        assert!(!response.prevent_default);

        let response = input.handle(&mut controller, InputEvent::Key { key: Key::ArrowRight, focus: Focus::Outside }, now);
        assert!(!response.prevent_default);
        assert_eq!(controller.current_index(), 0);
    }

    #[test]
    fn test_enter_on_focused_button() {
        assert_eq!(key_action(Key::Enter, Focus::NextButton, TextDirection::Ltr), Some(Action::Next));
        assert_eq!(key_action(Key::Space, Focus::PrevButton, TextDirection::Ltr), Some(Action::Prev));
        assert_eq!(key_action(Key::ArrowLeft, Focus::PrevButton, TextDirection::Ltr), None);
    }

    #[test]
    fn test_buttons_swap_under_rtl() {
        let now = Instant::now();
        let (mut controller, mut input) = setup(TextDirection::Rtl);
        input.handle(&mut controller, InputEvent::PrevButton, now);
        assert_eq!(controller.current_index(), 1);
        input.handle(&mut controller, InputEvent::NextButton, now);
        assert_eq!(controller.current_index(), 0);
    }

    #[test]
    fn test_buttons_ignored_without_nav_buttons() {
        let now = Instant::now();
        let config = CarouselConfig::default();
        let parts = CarouselParts::new(Deck::from_names(["a", "b", "c"])).without_nav_buttons();
        let viewport = Viewport::new(1200.0, TextDirection::Ltr);
        let mut controller = CarouselController::attach_parts(parts, &config, viewport).unwrap();
        let mut input = InputReconciler::new(&config);

        assert_eq!(input.handle(&mut controller, InputEvent::NextButton, now), InputResponse::ignored());
        assert_eq!(controller.current_index(), 0);

        // Keys still navigate
        input.handle(&mut controller, InputEvent::Key { key: Key::ArrowRight, focus: Focus::Card }, now);
        assert_eq!(controller.current_index(), 1);
    }

    #[test]
    fn test_swipe_classification() {
        assert_eq!(swipe_action(-80.0, 10.0, 50.0, TextDirection::Ltr), Some(Action::Next));
        assert_eq!(swipe_action(80.0, 10.0, 50.0, TextDirection::Ltr), Some(Action::Prev));
        assert_eq!(swipe_action(80.0, 10.0, 50.0, TextDirection::Rtl), Some(Action::Next));
        assert_eq!(swipe_action(-40.0, 0.0, 50.0, TextDirection::Ltr), None);
        assert_eq!(swipe_action(-80.0, 120.0, 50.0, TextDirection::Ltr), None);
    }

    #[test]
    fn test_touch_swipe_navigates() {
        let now = Instant::now();
        let (mut controller, mut input) = setup(TextDirection::Ltr);
        input.handle(&mut controller, InputEvent::TouchStart { x: 300.0, y: 100.0 }, now);
        assert!(input.is_tracking_touch());
        let response = input.handle(&mut controller, InputEvent::TouchEnd { x: 200.0, y: 110.0 }, now);
        assert!(response.navigation.moved());
        assert_eq!(controller.current_index(), 1);

        // A touch end without a start is ignored
        let response = input.handle(&mut controller, InputEvent::TouchEnd { x: 0.0, y: 0.0 }, now);
        assert_eq!(response, InputResponse::ignored());
    }

    #[test]
    fn test_wheel_burst_navigates_once() {
        let start = Instant::now();
        let (mut controller, mut input) = setup(TextDirection::Ltr);

        for step in 0..5u32 {
            let response = input.handle(&mut controller, InputEvent::Wheel { delta_y: 30.0 }, start + step * 10 * MS);
            assert!(response.prevent_default);
        }
        assert_eq!(input.next_deadline(), Some(start + 90 * MS));
        assert!(!input.poll(&mut controller, start + 80 * MS).needs_render());
        assert!(input.poll(&mut controller, start + 90 * MS).navigation.moved());
        assert_eq!(controller.current_index(), 1);

        input.handle(&mut controller, InputEvent::Wheel { delta_y: -3.0 }, start + 200 * MS);
        input.poll(&mut controller, start + 250 * MS);
        assert_eq!(controller.current_index(), 0);
    }

    #[test]
    fn test_zero_wheel_delta_steps_back() {
        let start = Instant::now();
        let (mut controller, mut input) = setup(TextDirection::Ltr);

        input.handle(&mut controller, InputEvent::Wheel { delta_y: 0.0 }, start);
        let response = input.poll(&mut controller, start + 60 * MS);
        assert_eq!(response.navigation, Navigation::Moved { from: 0, to: 4 });
        assert_eq!(controller.current_index(), 4);
    }

    #[test]
    fn test_resize_is_debounced() {
        let start = Instant::now();
        let (mut controller, mut input) = setup(TextDirection::Ltr);
        controller.go_to(3);

        input.handle(&mut controller, InputEvent::Resize { width: 800.0 }, start);
        input.handle(&mut controller, InputEvent::Resize { width: 500.0 }, start + 100 * MS);
        assert_eq!(controller.tier(), Tier::Desktop);

        let response = input.poll(&mut controller, start + 250 * MS);
        assert!(response.relayout);
        assert_eq!(controller.tier(), Tier::Mobile);
        assert_eq!(controller.current_index(), 3);
        assert_eq!(input.next_deadline(), None);
    }

    #[test]
    fn test_scroll_settles_on_nearest_card() {
        let start = Instant::now();
        let (mut controller, mut input) = setup(TextDirection::Ltr);
        let event = InputEvent::Scroll {
            card_centers: vec![0.0, 200.0, 400.0, 600.0, 800.0],
            track_center: 590.0,
        };
        input.handle(&mut controller, event, start);
        assert!(!input.poll(&mut controller, start + 50 * MS).needs_render());
        let response = input.poll(&mut controller, start + 100 * MS);
        assert_eq!(response.navigation, Navigation::Moved { from: 0, to: 3 });
    }

    #[test]
    fn test_card_click_recenters() {
        let now = Instant::now();
        let (mut controller, mut input) = setup(TextDirection::Ltr);
        input.handle(&mut controller, InputEvent::CardClicked(2), now);
        assert_eq!(controller.current_index(), 2);
        input.handle(&mut controller, InputEvent::CardClicked(9), now);
        assert_eq!(controller.current_index(), 2);
    }

    #[test]
    fn test_reset_drops_pending_input() {
        let now = Instant::now();
        let (mut controller, mut input) = setup(TextDirection::Ltr);
        input.handle(&mut controller, InputEvent::Wheel { delta_y: 1.0 }, now);
        input.handle(&mut controller, InputEvent::TouchStart { x: 0.0, y: 0.0 }, now);
        input.reset();
        assert!(!input.is_tracking_touch());
        assert_eq!(input.next_deadline(), None);
    }
}
