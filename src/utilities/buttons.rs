use egui::{Pos2, Rect, pos2, vec2};

use crate::utilities::alarm_type::AlarmType;
use crate::utilities::display::SURFACE_WIDTH;

/// Sound button geometry in surface-local coordinates, fixed at startup.
pub struct ButtonSpec {
    pub rect: Rect,
    pub label: &'static str,
    pub alarm: AlarmType,
}

pub fn button_row() -> Vec<ButtonSpec> {
    let half = SURFACE_WIDTH / 2.0;
    let offsets = [-200.0, -50.0, 100.0];

    AlarmType::ALL
        .iter()
        .zip(offsets)
        .map(|(&alarm, dx)| ButtonSpec {
            rect: Rect::from_min_size(pos2(half + dx, 425.0), vec2(100.0, 40.0)),
            label: alarm.label(),
            alarm,
        })
        .collect()
}

/// List-order scan with inclusive bounds; the last matching button wins.
pub fn hit_test(buttons: &[ButtonSpec], pos: Pos2) -> Option<AlarmType> {
    let mut hit = None;
    for button in buttons {
        if button.rect.contains(pos) {
            hit = Some(button.alarm);
        }
    }
    hit
}
