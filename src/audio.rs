/// Synthesized sound effects — no asset files, every sample is rendered
/// from a small fundsp signal graph and played through a fire-and-forget
/// rodio sink.
///
/// Audio is optional hardware: when no output device exists, construction
/// fails quietly and every play call becomes a no-op.

use fundsp::prelude as dsp;
use rodio::{buffer::SamplesBuffer, OutputStream, OutputStreamHandle, Sink};

use crate::entities::GameEvent;

const SAMPLE_RATE: u32 = 44_100;

pub struct Audio {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl Audio {
    pub fn new() -> Option<Self> {
        let (stream, handle) = OutputStream::try_default().ok()?;
        Some(Self {
            _stream: stream,
            handle,
        })
    }

    /// Play the effect for one tick event. Each effect gets its own detached
    /// sink so overlapping sounds mix instead of cutting each other off.
    pub fn play(&self, event: GameEvent) {
        let samples = match event {
            GameEvent::Gunshot => gunshot_samples(SAMPLE_RATE),
            GameEvent::DuckHit => hit_samples(SAMPLE_RATE),
            GameEvent::HeartPickup => pickup_samples(SAMPLE_RATE),
            GameEvent::PlaneCrash => crash_samples(SAMPLE_RATE),
            GameEvent::PlaneFlyby => flyby_samples(SAMPLE_RATE),
        };
        if let Ok(sink) = Sink::try_new(&self.handle) {
            sink.append(SamplesBuffer::new(1, SAMPLE_RATE, samples));
            sink.detach();
        }
    }
}

// ── Effect generators ─────────────────────────────────────────────────────────

/// Short filtered-noise crack.
fn gunshot_samples(sample_rate: u32) -> Vec<f32> {
    let duration = 0.12;
    let mut node = (dsp::noise() >> dsp::bandpass_hz(900.0, 0.8) >> dsp::mul(0.6))
        * dsp::lfo(move |t: f32| dsp::xerp(0.4, 0.001, (t / duration).min(1.0)));
    render_mono(&mut node, sample_rate, duration)
}

/// Descending squawk when a bullet connects.
fn hit_samples(sample_rate: u32) -> Vec<f32> {
    let duration = 0.2;
    let mut node = (dsp::lfo(|t: f32| dsp::lerp(500.0, 150.0, (t / 0.15).min(1.0))) >> dsp::saw())
        * dsp::lfo(move |t: f32| dsp::lerp(0.2, 0.0, (t / duration).min(1.0)));
    render_mono(&mut node, sample_rate, duration)
}

/// Two rising sine notes for a heart pickup.
fn pickup_samples(sample_rate: u32) -> Vec<f32> {
    const NOTES: [f32; 2] = [520.0, 780.0];
    let note_gap = 0.09f32;
    let note_len = 0.14f32;
    let total_duration = note_gap * (NOTES.len() as f32 - 1.0) + note_len;
    let total_samples = (sample_rate as f32 * total_duration) as usize;
    let mut samples = vec![0.0f32; total_samples];

    for (idx, freq) in NOTES.iter().enumerate() {
        let start = (note_gap * idx as f32 * sample_rate as f32) as usize;
        let mut node = dsp::sine_hz::<f32>(*freq)
            * dsp::lfo(move |t: f32| dsp::xerp(0.15, 0.001, (t / note_len).min(1.0)));
        let tone = render_mono(&mut node, sample_rate, note_len);
        for (i, s) in tone.into_iter().enumerate() {
            let target = start + i;
            if target < total_samples {
                samples[target] += s;
            }
        }
    }

    samples
}

/// Low rumble plus noise for an airplane collision.
fn crash_samples(sample_rate: u32) -> Vec<f32> {
    let duration = 0.5;
    let mut node = ((dsp::lfo(|t: f32| dsp::lerp(180.0, 50.0, (t / 0.4).min(1.0))) >> dsp::saw())
        + (dsp::noise() >> dsp::bandpass_hz(400.0, 0.4)))
        * dsp::lfo(move |t: f32| dsp::lerp(0.25, 0.0, (t / duration).min(1.0)));
    render_mono(&mut node, sample_rate, duration)
}

/// Band-swept whoosh as an airplane enters the screen.
fn flyby_samples(sample_rate: u32) -> Vec<f32> {
    let duration = 0.35;
    let mut node = (dsp::noise() >> dsp::bandpass_hz(700.0, 0.5) >> dsp::mul(0.3))
        * dsp::lfo(move |t: f32| {
            let ramp = (t / duration).min(1.0);
            // swell in, fade out
            if ramp < 0.5 {
                dsp::lerp(0.02, 0.3, ramp * 2.0)
            } else {
                dsp::lerp(0.3, 0.0, (ramp - 0.5) * 2.0)
            }
        });
    render_mono(&mut node, sample_rate, duration)
}

fn render_mono(node: &mut dyn dsp::AudioUnit, sample_rate: u32, duration: f32) -> Vec<f32> {
    node.set_sample_rate(sample_rate as f64);
    node.reset();

    let sample_count = (sample_rate as f32 * duration) as usize;
    let mut samples = Vec::with_capacity(sample_count);
    for _ in 0..sample_count {
        samples.push(node.get_mono());
    }
    samples
}
