use eframe::egui;

use crate::app_types::{EnhancementKind, UiEvent};
use crate::slider::SliderEvent;

/// Handle keyboard shortcuts and files dropped onto the window
pub fn handle_keyboard_input(ctx: &egui::Context, alert_open: bool, events: &mut Vec<UiEvent>) {
    // don't steal digits from the settings text fields
    let typing = ctx.wants_keyboard_input();

    ctx.input(|i| {
        // enter/escape: acknowledge the alert, nothing else is accepted while it is open
        if alert_open {
            if i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape) {
                events.push(UiEvent::AlertDismissed);
            }
            return;
        }

        // ctrl+O: open image
        if i.key_pressed(egui::Key::O) && i.modifiers.command {
            events.push(UiEvent::OpenFileDialog);
        }

        // ctrl+s: save enhanced image
        if i.key_pressed(egui::Key::S) && i.modifiers.command {
            events.push(UiEvent::DownloadRequested);
        }

        // 1/2/3: enhance 2x / 4x / same size
        if !typing && !i.modifiers.any() {
            let keys = [egui::Key::Num1, egui::Key::Num2, egui::Key::Num3];
            for (key, kind) in keys.into_iter().zip(EnhancementKind::ALL) {
                if i.key_pressed(key) {
                    events.push(UiEvent::EnhanceRequested(kind));
                }
            }
        }

        // drag & drop: take the first dropped file with a path
        if let Some(path) = i.raw.dropped_files.iter().find_map(|f| f.path.clone()) {
            events.push(UiEvent::FileChosen(path));
        }
    });
}

/// Collect divider press and movement for this frame
/// press must land on the handle; movement is tracked window-wide while dragging
pub fn collect_slider_events(
    ctx: &egui::Context,
    handle: &egui::Response,
    dragging: bool,
) -> Vec<SliderEvent> {
    profiling::scope!("collect_slider_events");
    let mut out = Vec::new();
    let mut dragging = dragging;

    ctx.input(|i| {
        if handle.is_pointer_button_down_on() && i.pointer.primary_pressed() {
            out.push(SliderEvent::Pressed);
            dragging = true;
        }

        if dragging {
            if let Some(pos) = i.pointer.latest_pos() {
                out.push(SliderEvent::Moved { x: pos.x });
            }
        }
    });

    if dragging || handle.hovered() {
        ctx.set_cursor_icon(egui::CursorIcon::ResizeHorizontal);
    }
    out
}

/// Primary button released anywhere in the window, whichever view is showing
pub fn divider_release(ctx: &egui::Context) -> Option<SliderEvent> {
    ctx.input(|i| i.pointer.primary_released().then_some(SliderEvent::Released))
}
