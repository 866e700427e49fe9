use egui::{Align2, Color32, FontId, Painter, Rect, Rounding, vec2};

use crate::utilities::alarm_type::AlarmType;
use crate::utilities::buttons::ButtonSpec;

pub const SURFACE_WIDTH: f32 = 600.0;
pub const SURFACE_HEIGHT: f32 = 500.0;

const BACKGROUND: Color32 = Color32::from_rgb(8, 4, 39);
const PANEL: Color32 = Color32::BLACK;
const DIGITS: Color32 = Color32::RED;
const SELECTED_FILL: Color32 = Color32::from_rgb(0, 128, 0);

/// Repaints the whole surface: background, clock panel, digits, then the
/// sound button row with the current selection highlighted.
pub fn draw_surface(
    painter: &Painter,
    surface: Rect,
    time_text: &str,
    buttons: &[ButtonSpec],
    selected: AlarmType,
) {
    painter.rect_filled(surface, Rounding::ZERO, BACKGROUND);

    let panel = Rect::from_center_size(surface.center(), vec2(550.0, 200.0));
    painter.rect_filled(panel, Rounding::ZERO, PANEL);
    painter.text(
        panel.center(),
        Align2::CENTER_CENTER,
        time_text,
        FontId::monospace(84.0),
        DIGITS,
    );

    for button in buttons {
        let rect = button.rect.translate(surface.min.to_vec2());
        let fill = if button.alarm == selected {
            SELECTED_FILL
        } else {
            PANEL
        };
        painter.rect_filled(rect, Rounding::ZERO, fill);
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            button.label,
            FontId::proportional(20.0),
            Color32::WHITE,
        );
    }
}
