use std::time::Duration;

use eframe::egui;

use crate::utilities::buttons::{self, ButtonSpec};
use crate::utilities::display;
use crate::utilities::selector::{AudioOutput, SoundSelector};
use crate::utilities::time_format::{self, ParseError};
use crate::utilities::timer::CountdownTimer;

mod utilities;

const INITIAL_COUNTDOWN_SECS: u64 = 10;

struct CountdownApp {
    timer: CountdownTimer,
    selector: SoundSelector,
    audio: Option<AudioOutput>,
    buttons: Vec<ButtonSpec>,
    duration_input: String,
    committed_input: String,
    parse_error: Option<ParseError>,
    repeat_alarm: bool,
}

impl Default for CountdownApp {
    fn default() -> Self {
        let audio = AudioOutput::open();
        if audio.is_none() {
            eprintln!("no audio output device, running silent");
        }

        Self {
            timer: CountdownTimer::new(INITIAL_COUNTDOWN_SECS),
            selector: SoundSelector::new(),
            audio,
            buttons: buttons::button_row(),
            duration_input: String::new(),
            committed_input: String::new(),
            parse_error: None,
            repeat_alarm: false,
        }
    }
}

impl CountdownApp {
    fn play_alarm(&self) {
        if let Some(audio) = &self.audio {
            self.selector.play_selected(&audio.sink);
        }
    }

    fn commit_duration_input(&mut self) {
        match time_format::parse(&self.duration_input) {
            Ok(seconds) => self.timer.set_duration(seconds),
            Err(err) => self.parse_error = Some(err),
        }
        self.committed_input = self.duration_input.clone();
    }

    fn handle_surface_click(&mut self, surface: egui::Rect, pointer: egui::Pos2) {
        let local = egui::pos2(pointer.x - surface.min.x, pointer.y - surface.min.y);
        if let Some(alarm) = buttons::hit_test(&self.buttons, local) {
            self.selector.select(alarm);
        }
    }

    fn show_parse_error(&mut self, ctx: &egui::Context) {
        let Some(err) = self.parse_error.clone() else {
            return;
        };

        egui::Window::new("Invalid time")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(err.to_string());
                ui.label("Enter a number of seconds or hh:mm:ss.");
                if ui.button("OK").clicked() {
                    self.parse_error = None;
                }
            });
    }
}

impl eframe::App for CountdownApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.timer.tick() {
            self.play_alarm();
        } else if self.repeat_alarm && self.timer.is_expired() {
            // continuous alarm: requeue once the previous playback drains
            if let Some(audio) = &self.audio {
                if audio.sink.empty() {
                    self.play_alarm();
                }
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let (surface, response) = ui.allocate_exact_size(
                    egui::vec2(display::SURFACE_WIDTH, display::SURFACE_HEIGHT),
                    egui::Sense::click(),
                );
                display::draw_surface(
                    ui.painter(),
                    surface,
                    &time_format::format(self.timer.remaining()),
                    &self.buttons,
                    self.selector.selected(),
                );
                if response.clicked() {
                    if let Some(pointer) = response.interact_pointer_pos() {
                        self.handle_surface_click(surface, pointer);
                    }
                }

                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    ui.label("Duration:");
                    let field = ui.add(
                        egui::TextEdit::singleline(&mut self.duration_input)
                            .hint_text("seconds or hh:mm:ss")
                            .desired_width(140.0),
                    );
                    // commit on blur or enter, like a DOM change event
                    if field.lost_focus() && self.duration_input != self.committed_input {
                        self.commit_duration_input();
                    }

                    let mute_label = if self.selector.is_muted() {
                        "Unmute"
                    } else {
                        "Mute"
                    };
                    if ui.button(mute_label).clicked() {
                        self.selector.toggle_mute();
                        // silence anything already playing, not just new plays
                        if let Some(audio) = &self.audio {
                            self.selector.apply_volume(&audio.sink);
                        }
                    }

                    ui.checkbox(&mut self.repeat_alarm, "Repeat alarm");
                });
            });
        });

        self.show_parse_error(ctx);

        // keep the redraw loop running for the lifetime of the app
        ctx.request_repaint_after(Duration::from_millis(50));
    }
}

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 610.0])
            .with_resizable(false)
            .with_title("Countdown Clock"),
        ..Default::default()
    };

    eframe::run_native(
        "Countdown Clock",
        options,
        Box::new(|_cc| Ok(Box::new(CountdownApp::default()))),
    )
}
