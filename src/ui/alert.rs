use eframe::egui;

use crate::app_types::UiEvent;

/// Show a blocking message until the user acknowledges it
pub fn show_alert(ctx: &egui::Context, message: &str, events: &mut Vec<UiEvent>) {
    // dim everything behind the alert
    let screen = ctx.screen_rect();
    egui::Area::new(egui::Id::new("alert_backdrop"))
        .fixed_pos(screen.min)
        .order(egui::Order::Middle)
        .show(ctx, |ui| {
            ui.painter().rect_filled(screen, 0.0, egui::Color32::from_black_alpha(140));
            ui.allocate_rect(screen, egui::Sense::click());
        });

    egui::Window::new("Notice")
        .collapsible(false)
        .resizable(false)
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.set_min_width(280.0);
            ui.label(message);
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    events.push(UiEvent::AlertDismissed);
                }
            });
        });
}
