use eframe::egui;

use crate::session::Session;
use crate::slider::CompareSlider;

/// Render the bottom status bar panel
pub fn render_status_bar(
    ctx: &egui::Context,
    session: &Session,
    server_url: &str,
    original_dims: [usize; 2],
    slider: &CompareSlider,
) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            // left: selected file
            match session.uploaded() {
                Some(file) => {
                    ui.label(format!("{} ({} KiB)", file.file_name, file.bytes.len().div_ceil(1024)))
                        .on_hover_text(file.path.display().to_string());
                }
                None => {
                    ui.label("No image selected");
                }
            }

            ui.separator();

            // center: request state
            match session.in_flight() {
                0 => ui.label(format!("Server: {server_url}")),
                1 => ui.label("Enhancing… (1 request)"),
                n => ui.colored_label(
                    egui::Color32::from_rgb(230, 180, 60),
                    format!("Enhancing… ({n} overlapping requests, last to finish wins)"),
                ),
            };

            if session.enhanced().is_some() {
                ui.separator();
                let frame = slider.frame();
                ui.weak(format!(
                    "divider: {:.0} / {:.0} px (frame {:.0}×{:.0})",
                    slider.clip_width(),
                    frame.width,
                    frame.width,
                    frame.height
                ));
            }

            // right-aligned: image dimensions
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if original_dims[0] > 0 && original_dims[1] > 0 {
                    ui.label(format!("{}×{} px", original_dims[0], original_dims[1]));
                }
            });
        });
    });
}
