//! Countdown timer state. Pure value type: the 1 Hz tick transport lives in
//! the platform layer, which calls `tick` once per second and forwards the
//! returned signals. A disabled timer never runs and never expires.

use serde::{Deserialize, Serialize};

pub const WARNING_THRESHOLD_SECONDS: i64 = 60;
pub const DANGER_THRESHOLD_SECONDS: i64 = 10;

/// Observable threshold signals emitted by a tick. These are not state
/// transitions; the session translates `Expired` into the lose transition
/// and the view translates the rest into styling and audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerSignal {
    Warning,
    Danger,
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    remaining_seconds: i64,
    configured_seconds: i64,
    enabled: bool,
    warning_enabled: bool,
    running: bool,
}

impl TimerState {
    #[must_use]
    pub fn new(minutes: u32, enabled: bool, warning_enabled: bool) -> Self {
        let configured = i64::from(minutes) * 60;
        Self {
            remaining_seconds: configured,
            configured_seconds: configured,
            enabled,
            warning_enabled,
            running: false,
        }
    }

    #[must_use]
    pub const fn remaining_seconds(&self) -> i64 {
        self.remaining_seconds
    }

    #[must_use]
    pub const fn configured_seconds(&self) -> i64 {
        self.configured_seconds
    }

    /// Seconds consumed so far; what the win screen reports.
    #[must_use]
    pub const fn elapsed_seconds(&self) -> i64 {
        self.configured_seconds - self.remaining_seconds
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        if self.enabled {
            self.running = true;
        }
    }

    /// Idempotent. A stopped timer ignores further ticks, so no tick can
    /// land after stop even if the transport fires once more.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Restore the full configured duration without starting.
    pub fn reset(&mut self) {
        self.remaining_seconds = self.configured_seconds;
        self.running = false;
    }

    /// Admin extension; no state transition, works mid-round.
    pub fn add_seconds(&mut self, seconds: i64) {
        self.remaining_seconds += seconds;
    }

    /// Advance the countdown by exactly one second and report any threshold
    /// crossed. Expiry stops the timer.
    pub fn tick(&mut self) -> Option<TimerSignal> {
        if !self.running {
            return None;
        }
        self.remaining_seconds -= 1;
        if self.remaining_seconds <= 0 {
            self.running = false;
            return Some(TimerSignal::Expired);
        }
        if self.remaining_seconds == DANGER_THRESHOLD_SECONDS {
            return Some(TimerSignal::Danger);
        }
        if self.warning_enabled && self.remaining_seconds == WARNING_THRESHOLD_SECONDS {
            return Some(TimerSignal::Warning);
        }
        None
    }

    /// mm:ss rendering of the remaining time, clamped at zero.
    #[must_use]
    pub fn clock(&self) -> String {
        let remaining = self.remaining_seconds.max(0);
        format!("{:02}:{:02}", remaining / 60, remaining % 60)
    }
}
