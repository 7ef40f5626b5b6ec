use eframe::egui;

use crate::app_types::{EnhancementKind, UiEvent};
use crate::session::Session;

/// Render the top toolbar panel
pub fn render_toolbar(
    ctx: &egui::Context,
    session: &Session,
    interactive: bool,
    show_settings: bool,
    events: &mut Vec<UiEvent>,
) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.add_enabled_ui(interactive, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Open Image…").on_hover_text("Ctrl+O").clicked() {
                    events.push(UiEvent::OpenFileDialog);
                }

                ui.separator();

                // always clickable: without an upload they explain what is missing
                for (n, kind) in EnhancementKind::ALL.into_iter().enumerate() {
                    let hint = format!("POST /enhance_image_{} ({})", kind.endpoint_suffix(), n + 1);
                    if ui.button(kind.label()).on_hover_text(hint).clicked() {
                        events.push(UiEvent::EnhanceRequested(kind));
                    }
                }

                if session.in_flight() > 0 {
                    ui.spinner();
                }

                if session.download_visible() {
                    ui.separator();
                    if ui.button("⬇ Download").on_hover_text("Save enhanced image (Ctrl+S)").clicked() {
                        events.push(UiEvent::DownloadRequested);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = if show_settings { "⚙ Settings ✓" } else { "⚙ Settings" };
                    if ui.button(label).clicked() {
                        events.push(UiEvent::ToggleSettings);
                    }
                });
            });
        });
    });
}
