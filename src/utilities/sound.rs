use rand::Rng;
use std::f32::consts::PI;

pub const SAMPLE_RATE: u32 = 44100;

pub fn create_siren_sound() -> Vec<f32> {
    let duration_ms = 1500;
    let samples = (SAMPLE_RATE * duration_ms / 1000) as usize;

    let mut wave: Vec<f32> = Vec::with_capacity(samples);
    for i in 0..samples {
        let t = i as f32 / SAMPLE_RATE as f32;
        // alternate between two tones four times a second
        let freq = if (t * 4.0) as u32 % 2 == 0 { 700.0 } else { 950.0 };
        let sample = (t * freq * 2.0 * PI).sin() * 0.3;
        wave.push(sample);
    }
    wave
}

pub fn create_beeper_sound() -> Vec<f32> {
    let duration_ms = 1200;
    let samples = (SAMPLE_RATE * duration_ms / 1000) as usize;

    let mut wave: Vec<f32> = Vec::with_capacity(samples);
    for i in 0..samples {
        let t = i as f32 / SAMPLE_RATE as f32;
        let cycle = t % 0.2;
        let sample = if cycle < 0.12 {
            let envelope = (-cycle * 4.0).exp();
            (t * 1000.0 * 2.0 * PI).sin() * 0.3 * envelope
        } else {
            0.0
        };
        wave.push(sample);
    }
    wave
}

pub fn create_rooster_sound() -> Vec<f32> {
    let duration_ms = 900;
    let samples = (SAMPLE_RATE * duration_ms / 1000) as usize;

    let mut wave: Vec<f32> = Vec::with_capacity(samples);
    let mut rng = rand::thread_rng();
    for i in 0..samples {
        let t = i as f32 / SAMPLE_RATE as f32;
        // pitch rises then falls, a rough crow contour
        let freq = 600.0 + 500.0 * (t * 3.5).sin().abs();
        let envelope = (-(t - 0.45) * (t - 0.45) * 8.0).exp();

        let noise: f32 = rng.gen_range(-1.0..1.0);
        let sample = ((t * freq * 2.0 * PI).sin() * 0.25 + noise * 0.05) * envelope;
        wave.push(sample);
    }
    wave
}
