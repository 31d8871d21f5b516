//! Oscillator-based sound cues. No assets: each cue is synthesized on a
//! shared `AudioContext`, lazily created on the first (user-triggered) cue
//! so autoplay policies are satisfied. Failures degrade to silence.

use std::cell::RefCell;
use web_sys::{AudioContext, OscillatorType};

use crate::dom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Wheel rotation.
    Click,
    /// A lock opened, or the round was won.
    Win,
    /// The round was lost.
    Lose,
    /// Timer warning threshold.
    Tick,
    /// Fully wrong attempt.
    Wrong,
}

thread_local! {
    static CONTEXT: RefCell<Option<AudioContext>> = const { RefCell::new(None) };
}

fn with_context<F: FnOnce(&AudioContext)>(f: F) {
    CONTEXT.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            match AudioContext::new() {
                Ok(ctx) => *slot = Some(ctx),
                Err(err) => {
                    dom::console_error(&format!(
                        "audio unavailable: {}",
                        dom::js_error_message(&err)
                    ));
                    return;
                }
            }
        }
        if let Some(ctx) = slot.as_ref() {
            f(ctx);
        }
    });
}

#[allow(clippy::similar_names)]
fn tone(
    ctx: &AudioContext,
    wave: OscillatorType,
    frequency: f32,
    gain_level: f32,
    duration: f64,
    glide: &[(f32, f64)],
) {
    let Ok(osc) = ctx.create_oscillator() else {
        return;
    };
    let Ok(gain) = ctx.create_gain() else { return };
    if osc.connect_with_audio_node(&gain).is_err()
        || gain.connect_with_audio_node(&ctx.destination()).is_err()
    {
        return;
    }
    let now = ctx.current_time();
    osc.set_type(wave);
    osc.frequency().set_value(frequency);
    let _ = gain.gain().set_value_at_time(gain_level, now);
    let _ = gain.gain().exponential_ramp_to_value_at_time(0.01, now + duration);
    for (freq, offset) in glide {
        let _ = osc.frequency().set_value_at_time(*freq, now + offset);
    }
    let _ = osc.start_with_when(now);
    let _ = osc.stop_with_when(now + duration);
}

/// Play one cue. A disabled sound toggle silences everything.
pub fn play(cue: Cue, sound_enabled: bool) {
    if !sound_enabled {
        return;
    }
    with_context(|ctx| match cue {
        Cue::Click => tone(ctx, OscillatorType::Sine, 800.0, 0.1, 0.1, &[]),
        // Ascending C5-E5-G5-C6 arpeggio.
        Cue::Win => tone(
            ctx,
            OscillatorType::Sine,
            523.25,
            0.2,
            0.5,
            &[(659.25, 0.1), (783.99, 0.2), (1046.5, 0.3)],
        ),
        Cue::Lose => tone(ctx, OscillatorType::Sawtooth, 200.0, 0.15, 0.5, &[]),
        Cue::Tick => tone(ctx, OscillatorType::Square, 1000.0, 0.05, 0.05, &[]),
        Cue::Wrong => tone(ctx, OscillatorType::Sawtooth, 150.0, 0.15, 0.3, &[]),
    });
}
