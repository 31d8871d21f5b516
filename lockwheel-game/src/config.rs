//! Round configuration: everything the setup screen collects, and the
//! builder that turns it into a running `PuzzleSession`.
//!
//! Building a session resolves each lock's alphabet once, generates any
//! combination left blank, and validates explicit ones against that same
//! alphabet snapshot. An empty character-class selection is corrected to
//! digits and written back into the config so the setup screen reflects it.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::charset::{self, CharClasses};
use crate::combination::{self, ComboError};
use crate::lock::{Lock, LockSpec};
use crate::session::PuzzleSession;
use crate::timer::TimerState;

pub const MIN_DIGIT_COUNT: usize = 2;
pub const MAX_DIGIT_COUNT: usize = 10;
pub const MAX_LOCK_COUNT: usize = 4;
pub const DEFAULT_DIGIT_COUNT: usize = 4;
pub const DEFAULT_TIMER_MINUTES: u32 = 15;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("no locks configured")]
    NoLocks,
    #[error("lock \"{lock_name}\": digit count {digit_count} must be between {MIN_DIGIT_COUNT} and {MAX_DIGIT_COUNT}")]
    DigitCountOutOfRange {
        lock_name: String,
        digit_count: usize,
    },
    #[error("lock \"{lock_name}\": {source}")]
    InvalidCombination {
        lock_name: String,
        #[source]
        source: ComboError,
    },
}

/// Raw setup values for one lock. A blank combination means "generate a
/// random one at round start".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockSetup {
    pub name: String,
    pub digit_count: usize,
    pub classes: CharClasses,
    pub combination: String,
}

impl Default for LockSetup {
    fn default() -> Self {
        Self {
            name: String::new(),
            digit_count: DEFAULT_DIGIT_COUNT,
            classes: CharClasses::default(),
            combination: String::new(),
        }
    }
}

impl LockSetup {
    #[must_use]
    pub fn named(index: usize) -> Self {
        Self {
            name: format!("Lock {}", index + 1),
            ..Self::default()
        }
    }

    /// Display name, falling back to a numbered label for blank input.
    #[must_use]
    pub fn display_name(&self, index: usize) -> String {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            format!("Lock {}", index + 1)
        } else {
            trimmed.to_string()
        }
    }
}

/// The whole organizer-facing round configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomConfig {
    pub locks: Vec<LockSetup>,
    pub timer_minutes: u32,
    pub timer_enabled: bool,
    pub timer_warning: bool,
    pub welcome_text: String,
    pub win_text: String,
    pub lose_text: String,
    pub hint_text: String,
    pub show_hint: bool,
    pub sound_enabled: bool,
    /// 0 = unlimited.
    pub max_attempts: u32,
    pub show_attempts: bool,
    pub fullscreen: bool,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            locks: vec![LockSetup::named(0)],
            timer_minutes: DEFAULT_TIMER_MINUTES,
            timer_enabled: true,
            timer_warning: true,
            welcome_text: String::new(),
            win_text: String::new(),
            lose_text: String::new(),
            hint_text: String::new(),
            show_hint: true,
            sound_enabled: true,
            max_attempts: 0,
            show_attempts: false,
            fullscreen: false,
        }
    }
}

impl RoomConfig {
    /// Grow or shrink the lock list to `count`, preserving existing entries.
    pub fn set_lock_count(&mut self, count: usize) {
        let count = count.clamp(1, MAX_LOCK_COUNT);
        while self.locks.len() < count {
            let index = self.locks.len();
            self.locks.push(LockSetup::named(index));
        }
        self.locks.truncate(count);
    }

    /// Build a running session from this configuration.
    ///
    /// Mutates `self`: the empty-selection correction is recorded back into
    /// each lock's classes, and generated or normalized combinations are
    /// stored so the admin view and a later replay agree on the secrets.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when no locks are configured, a digit count is
    /// out of range, or an explicit combination fails validation.
    pub fn build_session<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<PuzzleSession, ConfigError> {
        if self.locks.is_empty() {
            return Err(ConfigError::NoLocks);
        }
        let mut locks = Vec::with_capacity(self.locks.len());
        for index in 0..self.locks.len() {
            let setup = &mut self.locks[index];
            let name = setup.display_name(index);
            if !(MIN_DIGIT_COUNT..=MAX_DIGIT_COUNT).contains(&setup.digit_count) {
                return Err(ConfigError::DigitCountOutOfRange {
                    lock_name: name,
                    digit_count: setup.digit_count,
                });
            }
            let resolved = charset::resolve(setup.classes);
            if resolved.corrected {
                log::warn!("lock '{name}': no character class selected, using digits");
                setup.classes.numbers = true;
            }
            let secret = if setup.combination.trim().is_empty() {
                combination::generate(&resolved.alphabet, setup.digit_count, rng)
            } else {
                combination::validate(
                    setup.combination.trim(),
                    &resolved.alphabet,
                    setup.digit_count,
                )
                .map_err(|source| ConfigError::InvalidCombination {
                    lock_name: name.clone(),
                    source,
                })?
            };
            setup.combination = secret.clone();
            locks.push(Lock::new(LockSpec {
                name,
                digit_count: setup.digit_count,
                alphabet: resolved.alphabet,
                secret,
            }));
        }
        let timer = TimerState::new(self.timer_minutes, self.timer_enabled, self.timer_warning);
        Ok(PuzzleSession::start(locks, self.max_attempts, timer))
    }
}
