//! Lockwheel puzzle engine
//!
//! Platform-agnostic core logic for the Lockwheel escape-room toy: an
//! organizer configures one or more combination locks, players rotate
//! per-digit wheels, and a countdown timer plus attempts cap gate the
//! win/lose outcome. This crate has no UI or platform dependencies; the
//! web front end issues commands and renders the values these operations
//! return.

pub mod charset;
pub mod combination;
pub mod config;
pub mod lock;
pub mod session;
pub mod timer;

// Re-export commonly used types
pub use charset::{Alphabet, CharClasses, ResolvedAlphabet, resolve};
pub use combination::{ComboError, generate, validate};
pub use config::{
    ConfigError, DEFAULT_TIMER_MINUTES, LockSetup, MAX_DIGIT_COUNT, MAX_LOCK_COUNT,
    MIN_DIGIT_COUNT, RoomConfig,
};
pub use lock::{Direction, Lock, LockSpec, LockState, UnlockOutcome};
pub use session::{
    AttemptOutcome, CommandError, LoseReason, Phase, PuzzleSession, TickReport,
};
pub use timer::{TimerSignal, TimerState};
