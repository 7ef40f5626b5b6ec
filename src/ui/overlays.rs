use eframe::egui;

/// rect of the grabbable divider handle for a frame and offset
pub fn divider_handle_rect(frame_rect: egui::Rect, offset: f32, handle_width: f32) -> egui::Rect {
    let x = frame_rect.min.x + offset;
    egui::Rect::from_min_max(
        egui::pos2(x - handle_width * 0.5, frame_rect.min.y),
        egui::pos2(x + handle_width * 0.5, frame_rect.max.y),
    )
}

/// Draw the vertical divider and its knob
pub fn draw_divider(painter: &egui::Painter, frame_rect: egui::Rect, offset: f32, active: bool) {
    profiling::scope!("draw_divider");
    let x = frame_rect.min.x + offset;
    let color = if active {
        egui::Color32::from_rgb(100, 150, 255)
    } else {
        egui::Color32::WHITE
    };

    painter.line_segment(
        [egui::pos2(x, frame_rect.min.y), egui::pos2(x, frame_rect.max.y)],
        egui::Stroke::new(2.0, color),
    );

    // knob in the vertical middle
    let center = egui::pos2(x, frame_rect.center().y);
    painter.circle_filled(center, 10.0, egui::Color32::from_black_alpha(160));
    painter.circle_stroke(center, 10.0, egui::Stroke::new(2.0, color));
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        "⟷",
        egui::FontId::proportional(12.0),
        color,
    );
}

/// Draw a small caption in a corner of the frame
pub fn draw_corner_label(painter: &egui::Painter, frame_rect: egui::Rect, text: &str, right: bool) {
    let (anchor, pos) = if right {
        (egui::Align2::RIGHT_TOP, frame_rect.right_top() + egui::vec2(-6.0, 6.0))
    } else {
        (egui::Align2::LEFT_TOP, frame_rect.left_top() + egui::vec2(6.0, 6.0))
    };
    let galley = painter.layout_no_wrap(
        text.to_owned(),
        egui::FontId::proportional(13.0),
        egui::Color32::WHITE,
    );
    let rect = anchor.anchor_size(pos, galley.size());
    painter.rect_filled(rect.expand(3.0), 3.0, egui::Color32::from_black_alpha(120));
    painter.galley(rect.min, galley, egui::Color32::WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_is_centered_on_divider() {
        let frame = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(200.0, 100.0));
        let handle = divider_handle_rect(frame, 50.0, 8.0);
        assert_eq!(handle.center().x, 60.0);
        assert_eq!(handle.width(), 8.0);
        assert_eq!(handle.height(), 100.0);
    }
}
