use eframe::egui;

use crate::app_types::UiEvent;
use crate::settings::AppSettings;

/// Show the settings window with configurable parameters
/// edits apply to the next request; "Save to Disk" persists them
/// while `enabled` is false the window is read-only and cannot be closed
pub fn show_settings_window(
    ctx: &egui::Context,
    show_settings: &mut bool,
    settings: &mut AppSettings,
    enabled: bool,
    events: &mut Vec<UiEvent>,
) {
    let mut open = *show_settings;
    egui::Window::new("⚙ Settings")
        .open(&mut open)
        .resizable(true)
        .default_width(420.0)
        .show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| settings_contents(ui, settings, events));
        });
    if enabled {
        *show_settings = open;
    }
}

fn settings_contents(ui: &mut egui::Ui, settings: &mut AppSettings, events: &mut Vec<UiEvent>) {
    ui.horizontal(|ui| {
        if ui.button("Save to Disk").on_hover_text("Save settings permanently").clicked() {
            events.push(UiEvent::SaveSettings);
        }
        if ui.button("Reset to Defaults").clicked() {
            events.push(UiEvent::ResetSettings);
        }
    });

    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);

    egui::CollapsingHeader::new(egui::RichText::new("🌐 Service").heading())
        .default_open(true)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label("Server URL:");
                ui.text_edit_singleline(&mut settings.server_url);
            });
            ui.label("  Endpoints are /enhance_image_2x, _4x and _same_size under this URL");
            ui.add_space(5.0);

            ui.horizontal(|ui| {
                ui.label("Request timeout:");
                ui.add(egui::DragValue::new(&mut settings.request_timeout_secs)
                    .range(0..=3600)
                    .suffix(" s"));
            });
            ui.label("  0 = wait as long as the server needs");
        });

    ui.add_space(10.0);

    egui::CollapsingHeader::new(egui::RichText::new("🎨 Display").heading())
        .default_open(true)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label("Divider grab width:");
                ui.add(egui::Slider::new(&mut settings.divider_handle_width, 4.0..=32.0)
                    .suffix(" pt"));
            });
        });
}
