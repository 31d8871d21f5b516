//! A single combination lock: immutable per-round spec plus mutable wheel
//! state. The session owns every `Lock`; the view layer only reads
//! snapshots and forwards rotate commands.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::charset::Alphabet;

/// Rotation direction for one wheel. `Up` steps to the previous character,
/// `Down` to the next, matching a wheel dragged with its face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single unlock check on one lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockOutcome {
    /// The combination matched and the lock flipped open on this check.
    NewlyUnlocked,
    /// The lock was already open; nothing changed.
    AlreadyUnlocked,
    /// The combination did not match.
    Mismatch,
}

/// Immutable per-round lock definition. The secret is fixed for the round;
/// regenerating it requires building a new session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockSpec {
    pub name: String,
    pub digit_count: usize,
    pub alphabet: Alphabet,
    pub secret: String,
}

/// Mutable wheel state for one lock during play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockState {
    /// One index per wheel into the lock's alphabet.
    pub wheels: Vec<usize>,
    /// Monotonic within a round: flips false -> true and stays.
    pub unlocked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lock {
    spec: LockSpec,
    state: LockState,
}

impl Lock {
    #[must_use]
    pub fn new(spec: LockSpec) -> Self {
        let wheels = vec![0; spec.digit_count];
        Self {
            spec,
            state: LockState {
                wheels,
                unlocked: false,
            },
        }
    }

    #[must_use]
    pub const fn spec(&self) -> &LockSpec {
        &self.spec
    }

    #[must_use]
    pub const fn state(&self) -> &LockState {
        &self.state
    }

    #[must_use]
    pub const fn unlocked(&self) -> bool {
        self.state.unlocked
    }

    /// Step one wheel by one position, wrapping around the alphabet.
    /// Returns the new index, or `None` when the lock is already open
    /// (locked-open locks cannot be perturbed) or the index is out of range.
    pub fn rotate(&mut self, wheel_index: usize, direction: Direction) -> Option<usize> {
        if self.state.unlocked {
            return None;
        }
        let len = self.spec.alphabet.len();
        let slot = self.state.wheels.get_mut(wheel_index)?;
        *slot = match direction {
            Direction::Up => (*slot + len - 1) % len,
            Direction::Down => (*slot + 1) % len,
        };
        Some(*slot)
    }

    /// The characters currently shown across the wheels, in wheel order.
    /// Pure projection of wheel state, never stored.
    #[must_use]
    pub fn current_combination(&self) -> String {
        self.state
            .wheels
            .iter()
            .filter_map(|&idx| self.spec.alphabet.char_at(idx))
            .collect()
    }

    /// Return every wheel to index 0. Unlocked locks keep their wheels
    /// frozen at the winning combination for display.
    pub fn reset_wheels(&mut self) {
        if self.state.unlocked {
            return;
        }
        for slot in &mut self.state.wheels {
            *slot = 0;
        }
    }

    /// Compare the current combination against the secret and latch the
    /// unlocked flag on a match.
    pub fn try_unlock(&mut self) -> UnlockOutcome {
        if self.state.unlocked {
            return UnlockOutcome::AlreadyUnlocked;
        }
        if self.current_combination() == self.spec.secret {
            self.state.unlocked = true;
            log::info!("lock '{}' opened", self.spec.name);
            UnlockOutcome::NewlyUnlocked
        } else {
            UnlockOutcome::Mismatch
        }
    }

    /// Spin every wheel to the secret. Used by the admin force-win so the
    /// opened lock displays its winning combination.
    pub fn set_wheels_to_secret(&mut self) {
        if self.state.unlocked {
            return;
        }
        for (slot, ch) in self.state.wheels.iter_mut().zip(self.spec.secret.chars()) {
            if let Some(idx) = self.spec.alphabet.index_of(ch) {
                *slot = idx;
            }
        }
    }

    /// Test hook used by scenario tests to place the wheels on a known
    /// combination without walking every rotation.
    pub fn set_wheels_for_testing(&mut self, wheels: &[usize]) {
        assert_eq!(wheels.len(), self.spec.digit_count);
        self.state.wheels.copy_from_slice(wheels);
    }
}
