use eframe::egui::{self, TextureHandle};

use crate::app_types::UiEvent;
use crate::session::Session;
use crate::settings::AppSettings;
use crate::slider::{CompareSlider, ComparisonFrame, SliderEvent};
use crate::ui::input::{collect_slider_events, divider_release};
use crate::ui::overlays::{divider_handle_rect, draw_corner_label, draw_divider};

const FULL_UV: egui::Rect = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));

/// largest size with the texture's aspect ratio that fits into `avail`
pub fn fit_size(avail: egui::Vec2, tex_size: egui::Vec2) -> egui::Vec2 {
    if tex_size.x <= 0.0 || tex_size.y <= 0.0 {
        return egui::Vec2::ZERO;
    }
    let scale = (avail.x / tex_size.x).min(avail.y / tex_size.y).max(0.0);
    tex_size * scale
}

/// Render the central panel (welcome screen or the compare view)
pub fn render_central_panel(
    ctx: &egui::Context,
    original_tex: &Option<TextureHandle>,
    enhanced_tex: &Option<TextureHandle>,
    session: &Session,
    slider: &mut CompareSlider,
    settings: &AppSettings,
    interactive: bool,
    events: &mut Vec<UiEvent>,
) {
    egui::CentralPanel::default().show(ctx, |ui| {
        if session.uploaded().is_none() && original_tex.is_none() {
            render_welcome_screen(ui, events);
        } else {
            render_comparison(ui, original_tex, enhanced_tex, session, slider, settings, interactive);
        }
    });

    // after the view had its presses and moves; also ends drags it no longer draws
    if let Some(event) = divider_release(ctx) {
        slider.apply(event);
    }
}

/// Render the welcome screen when no image is loaded
fn render_welcome_screen(ui: &mut egui::Ui, events: &mut Vec<UiEvent>) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);

        ui.heading(egui::RichText::new("ImageLift")
            .size(32.0)
            .color(egui::Color32::from_rgb(100, 150, 255)));
        ui.label(egui::RichText::new("Image enhancement with before/after comparison")
            .size(16.0)
            .color(egui::Color32::from_rgb(150, 150, 150)));
        ui.add_space(30.0);

        // drag-drop zone visual
        let available = ui.available_rect_before_wrap();
        let drop_zone = ui.allocate_rect(
            egui::Rect::from_center_size(
                egui::pos2(available.center().x, available.min.y + 75.0),
                egui::vec2(400.0, 150.0),
            ),
            egui::Sense::hover(),
        );

        ui.painter().rect_stroke(
            drop_zone.rect,
            8.0,
            egui::Stroke::new(2.0, egui::Color32::from_rgb(100, 150, 255).linear_multiply(0.5)),
            egui::epaint::StrokeKind::Outside,
        );

        let mut child_ui = ui.new_child(egui::UiBuilder::new().max_rect(drop_zone.rect));
        child_ui.vertical_centered(|ui| {
            ui.add_space(35.0);
            ui.label(egui::RichText::new("📁").size(48.0));
            ui.add_space(10.0);
            ui.label(egui::RichText::new("Drag & Drop an image here").size(18.0));
            ui.label("or");
            if ui.button(egui::RichText::new("Open Image… (Ctrl+O)").size(14.0)).clicked() {
                events.push(UiEvent::OpenFileDialog);
            }
        });

        ui.add_space(40.0);

        ui.group(|ui| {
            ui.set_max_width(500.0);
            ui.label(egui::RichText::new("Keyboard Shortcuts:").strong());
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                ui.monospace("1");
                ui.label("→ Enhance 2×");
                ui.separator();
                ui.monospace("2");
                ui.label("→ Enhance 4×");
                ui.separator();
                ui.monospace("3");
                ui.label("→ Same size");
            });
            ui.horizontal(|ui| {
                ui.monospace("Ctrl+O");
                ui.label("→ Open");
                ui.separator();
                ui.monospace("Ctrl+S");
                ui.label("→ Save enhanced image");
            });
        });
    });
}

/// Render the original with the enhanced layer clipped to the divider
fn render_comparison(
    ui: &mut egui::Ui,
    original_tex: &Option<TextureHandle>,
    enhanced_tex: &Option<TextureHandle>,
    session: &Session,
    slider: &mut CompareSlider,
    settings: &AppSettings,
    interactive: bool,
) {
    profiling::scope!("render_comparison");
    let Some(original) = original_tex else {
        ui.centered_and_justified(|ui| {
            let name = session.uploaded().map(|f| f.file_name.as_str()).unwrap_or("");
            ui.label(format!("{name}: preview unavailable (the file can still be enhanced)"));
        });
        return;
    };

    ui.vertical_centered(|ui| {
        let size = fit_size(ui.available_size(), original.size_vec2());
        let (frame_rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
        slider.set_frame(ComparisonFrame::new(frame_rect.min.x, frame_rect.width(), frame_rect.height()));

        let painter = ui.painter_at(frame_rect);
        painter.image(original.id(), frame_rect, FULL_UV, egui::Color32::WHITE);

        let Some(enhanced) = session.enhanced() else {
            draw_corner_label(&painter, frame_rect, "Original", false);
            if session.in_flight() > 0 {
                painter.text(
                    frame_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "Enhancing…",
                    egui::FontId::proportional(20.0),
                    egui::Color32::WHITE,
                );
            }
            return;
        };

        let Some(enhanced_tex) = enhanced_tex else {
            draw_corner_label(&painter, frame_rect, "Original", true);
            draw_corner_label(
                &painter,
                frame_rect,
                &format!("enhanced image ({} bytes) could not be displayed", enhanced.bytes.len()),
                false,
            );
            return;
        };

        // pointer input first so the clip below reflects this frame's position
        let handle_rect = divider_handle_rect(frame_rect, slider.offset(), settings.divider_handle_width);
        let handle = ui.interact(handle_rect, ui.id().with("compare_divider"), egui::Sense::drag());
        for event in collect_slider_events(ui.ctx(), &handle, slider.is_dragging()) {
            if event == SliderEvent::Pressed && !interactive {
                continue;
            }
            slider.apply(event);
        }

        let clip = egui::Rect::from_min_size(
            frame_rect.min,
            egui::vec2(slider.clip_width(), frame_rect.height()),
        );
        painter
            .with_clip_rect(clip)
            .image(enhanced_tex.id(), frame_rect, FULL_UV, egui::Color32::WHITE);

        draw_divider(&painter, frame_rect, slider.offset(), slider.is_dragging());

        let enhanced_label = match session.enhanced_kind() {
            Some(kind) => format!("Enhanced ({})", kind.endpoint_suffix()),
            None => "Enhanced".to_owned(),
        };
        draw_corner_label(&painter, frame_rect, &enhanced_label, false);
        draw_corner_label(&painter, frame_rect, "Original", true);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_types::{EnhancedImage, EnhancementKind, UploadedFile};

    const SCREEN: egui::Rect =
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(800.0, 600.0));

    /// headless window showing a loaded original with an enhanced result
    struct View {
        ctx: egui::Context,
        original: Option<TextureHandle>,
        enhanced: Option<TextureHandle>,
        session: Session,
        slider: CompareSlider,
        settings: AppSettings,
    }

    impl View {
        fn new() -> Self {
            let ctx = egui::Context::default();
            let image = || egui::ColorImage::new([100, 50], egui::Color32::GRAY);
            let original = Some(ctx.load_texture("original", image(), egui::TextureOptions::LINEAR));
            let enhanced = Some(ctx.load_texture("enhanced", image(), egui::TextureOptions::LINEAR));

            let mut session = Session::new();
            session.upload(UploadedFile::from_bytes("cat.png", vec![1, 2, 3]));
            session.apply_outcome(
                EnhancementKind::Double,
                Ok(EnhancedImage { base64: "AQID".into(), bytes: vec![1, 2, 3] }),
            );

            Self {
                ctx,
                original,
                enhanced,
                session,
                slider: CompareSlider::new(),
                settings: AppSettings::default(),
            }
        }

        /// run one frame; `show_enhanced = false` renders as if the preview failed to decode
        fn frame(&mut self, events: Vec<egui::Event>, show_enhanced: bool, interactive: bool) {
            let raw = egui::RawInput {
                screen_rect: Some(SCREEN),
                events,
                ..Default::default()
            };
            let enhanced = if show_enhanced { self.enhanced.clone() } else { None };
            let mut ui_events = Vec::new();
            let _ = self.ctx.run(raw, |ctx| {
                render_central_panel(
                    ctx,
                    &self.original,
                    &enhanced,
                    &self.session,
                    &mut self.slider,
                    &self.settings,
                    interactive,
                    &mut ui_events,
                );
            });
        }

        /// a point on the divider handle, valid once a frame has been laid out
        fn handle_pos(&self) -> egui::Pos2 {
            let frame = self.slider.frame();
            egui::pos2(frame.left + self.slider.offset() + 1.0, frame.height * 0.5)
        }
    }

    fn moved(pos: egui::Pos2) -> egui::Event {
        egui::Event::PointerMoved(pos)
    }

    fn button(pos: egui::Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    /// lay out, hover the handle and press it
    fn press_handle(view: &mut View, interactive: bool) -> egui::Pos2 {
        view.frame(vec![], true, true);
        let pos = view.handle_pos();
        view.frame(vec![moved(pos)], true, true);
        view.frame(vec![button(pos, true)], true, interactive);
        pos
    }

    #[test]
    fn test_drag_moves_divider() {
        let mut view = View::new();
        let pos = press_handle(&mut view, true);
        assert!(view.slider.is_dragging());

        view.frame(vec![moved(pos + egui::vec2(50.0, 0.0))], true, true);
        let expected = pos.x + 50.0 - view.slider.frame().left;
        assert_eq!(view.slider.offset(), expected);
        assert_eq!(view.slider.clip_width(), expected);

        view.frame(vec![button(pos + egui::vec2(50.0, 0.0), false)], true, true);
        assert!(!view.slider.is_dragging());
    }

    #[test]
    fn test_release_ends_drag_when_enhanced_layer_is_not_drawn() {
        let mut view = View::new();
        let pos = press_handle(&mut view, true);
        let held = pos + egui::vec2(50.0, 0.0);
        view.frame(vec![moved(held)], true, true);
        let offset = view.slider.offset();

        // a newer result that could not be decoded is showing when the button goes up
        view.frame(vec![button(held, false)], false, true);
        assert!(!view.slider.is_dragging());

        // preview back, pointer moves with no button held
        view.frame(vec![moved(held + egui::vec2(70.0, 0.0))], true, true);
        assert!(!view.slider.is_dragging());
        assert_eq!(view.slider.offset(), offset);
    }

    #[test]
    fn test_press_ignored_while_alert_is_open() {
        let mut view = View::new();
        let pos = press_handle(&mut view, false);
        assert!(!view.slider.is_dragging());

        view.frame(vec![moved(pos + egui::vec2(40.0, 0.0))], true, false);
        assert_eq!(view.slider.offset(), 0.0);
    }

    #[test]
    fn test_release_still_ends_drag_while_alert_is_open() {
        let mut view = View::new();
        let pos = press_handle(&mut view, true);
        assert!(view.slider.is_dragging());

        // an alert opened mid-drag
        view.frame(vec![button(pos, false)], true, false);
        assert!(!view.slider.is_dragging());
    }

    #[test]
    fn test_fit_keeps_aspect_ratio() {
        let fitted = fit_size(egui::vec2(400.0, 400.0), egui::vec2(200.0, 100.0));
        assert_eq!(fitted, egui::vec2(400.0, 200.0));

        let fitted = fit_size(egui::vec2(100.0, 400.0), egui::vec2(200.0, 100.0));
        assert_eq!(fitted, egui::vec2(100.0, 50.0));
    }

    #[test]
    fn test_fit_empty_texture() {
        assert_eq!(fit_size(egui::vec2(100.0, 100.0), egui::Vec2::ZERO), egui::Vec2::ZERO);
    }

    #[test]
    fn test_fit_negative_space() {
        assert_eq!(fit_size(egui::vec2(-5.0, 10.0), egui::vec2(10.0, 10.0)), egui::Vec2::ZERO);
    }
}
