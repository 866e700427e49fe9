use std::collections::HashMap;

use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink};

use crate::utilities::alarm_type::AlarmType;
use crate::utilities::sound::SAMPLE_RATE;

/// Synthesized waveform bank plus the current selection and the global mute
/// flag. The bank is built once at startup and never changes.
pub struct SoundSelector {
    bank: HashMap<AlarmType, Vec<f32>>,
    selected: AlarmType,
    muted: bool,
}

impl SoundSelector {
    pub fn new() -> Self {
        let mut bank = HashMap::new();
        for &alarm in &AlarmType::ALL {
            bank.insert(alarm, alarm.create_sound());
        }
        Self {
            bank,
            selected: AlarmType::default(),
            muted: false,
        }
    }

    pub fn selected(&self) -> AlarmType {
        self.selected
    }

    pub fn select(&mut self, alarm: AlarmType) {
        self.selected = alarm;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Mute is global: one gain applied to every bank entry at playback.
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub fn gain(&self) -> f32 {
        if self.muted { 0.0 } else { 1.0 }
    }

    /// Pushes the current mute gain onto the sink, silencing (or restoring)
    /// playback that is already queued. Must be called whenever the mute
    /// state flips, not just on the next play.
    pub fn apply_volume(&self, sink: &Sink) {
        sink.set_volume(self.gain());
    }

    /// Queues the selected waveform. A muted play still appends to the sink,
    /// just at zero gain.
    pub fn play_selected(&self, sink: &Sink) {
        let samples = &self.bank[&self.selected];
        let gain = self.gain();
        let scaled: Vec<f32> = samples.iter().map(|&s| s * gain).collect();
        sink.set_volume(gain);
        sink.append(SamplesBuffer::new(1, SAMPLE_RATE, scaled));
    }
}

/// Audio device handle. The stream must stay alive for the sink to keep
/// playing. When no device can be opened the app runs without sound.
pub struct AudioOutput {
    _stream: OutputStream,
    _handle: OutputStreamHandle,
    pub sink: Sink,
}

impl AudioOutput {
    pub fn open() -> Option<Self> {
        let (stream, handle) = OutputStream::try_default().ok()?;
        let sink = Sink::try_new(&handle).ok()?;
        Some(Self {
            _stream: stream,
            _handle: handle,
            sink,
        })
    }
}
