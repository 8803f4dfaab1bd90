//! Carousel input handling.
//!
//! Translates egui input into carousel input events:
//! - Arrow keys, Home and End while the stage has focus
//! - Mouse wheel over the stage (debounced)
//! - Drag across the stage as a swipe (touch input arrives as pointer drags)
//! - Window or simulated width changes (debounced)
//! - Button and card clicks collected by the panel
//!
//! Handled keys are consumed so nothing else in the UI reacts to them.

use std::time::Instant;

use coverflow::{Focus, InputEvent, InputResponse, Key};
use eframe::egui;

use crate::app::AppState;

const KEY_MAP: [(egui::Key, Key); 4] = [
    (egui::Key::ArrowLeft, Key::ArrowLeft),
    (egui::Key::ArrowRight, Key::ArrowRight),
    (egui::Key::Home, Key::Home),
    (egui::Key::End, Key::End),
];

/// Feeds this frame's input to the attached carousel.
///
/// # Arguments
/// * `ctx` - The egui context for input access
/// * `stage_rect` - Screen area of the stage
/// * `stage_response` - Interaction response of the stage
/// * `ui_events` - Events already produced by widgets (buttons, card clicks)
/// * `state` - Application state
///
/// # Returns
/// The combined response of every event and debounced release this frame
pub fn handle_carousel_input(
    ctx: &egui::Context,
    stage_rect: egui::Rect,
    stage_response: &egui::Response,
    ui_events: Vec<InputEvent>,
    state: &mut AppState,
) -> InputResponse {
    let now = Instant::now();
    let mut events = ui_events;

    let width = state.viewport.effective_width();
    if state.interaction.width_changed(width) {
        events.push(InputEvent::Resize { width });
    }

    let focus = if stage_response.has_focus() { Focus::Card } else { Focus::Outside };
    state.interaction.set_focus(focus);

    let mut pressed_keys = Vec::new();
    if focus == Focus::Card {
        ctx.input(|i| {
            for (egui_key, key) in KEY_MAP {
                if i.key_pressed(egui_key) {
                    pressed_keys.push((egui_key, key));
                }
            }
        });
    }

    let hovering_stage = ctx
        .input(|i| i.pointer.hover_pos())
        .is_some_and(|pos| stage_rect.contains(pos));
    if hovering_stage {
        let scroll_y = ctx.input(|i| {
            if i.raw_scroll_delta.y != 0.0 {
                i.raw_scroll_delta.y
            } else {
                i.smooth_scroll_delta.y
            }
        });
        if scroll_y != 0.0 {
            // egui scrolls up with positive y; pages scroll down with positive delta
            events.push(InputEvent::Wheel { delta_y: -scroll_y });
        }
    }

    if stage_response.drag_started() {
        if let Some(origin) = ctx.input(|i| i.pointer.press_origin()) {
            *state.interaction.dragging_mut() = true;
            events.push(InputEvent::TouchStart { x: origin.x, y: origin.y });
        }
    } else if stage_response.drag_stopped() {
        *state.interaction.dragging_mut() = false;
        if let Some(pos) = ctx.input(|i| i.pointer.interact_pos()) {
            events.push(InputEvent::TouchEnd { x: pos.x, y: pos.y });
        }
    }

    let Some((controller, reconciler)) = state.deck.for_input_handler() else {
        return InputResponse::ignored();
    };

    let mut response = InputResponse::ignored();
    for event in events {
        response = response.merge(reconciler.handle(controller, event, now));
    }

    for (egui_key, key) in pressed_keys {
        let key_response = reconciler.handle(controller, InputEvent::Key { key, focus }, now);
        if key_response.prevent_default {
            ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui_key));
        }
        response = response.merge(key_response);
    }

    response = response.merge(reconciler.poll(controller, now));

    if let Some(deadline) = reconciler.next_deadline() {
        ctx.request_repaint_after(deadline.saturating_duration_since(now));
    }
    if response.needs_render() {
        ctx.request_repaint();
    }

    response
}
