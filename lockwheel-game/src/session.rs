//! The puzzle state machine: one round of play across one or many locks.
//!
//! A `PuzzleSession` owns every `Lock` and the `TimerState`; the view layer
//! issues commands and renders the outcome values these operations return.
//! `Playing` is the only phase that accepts rotate/check commands. `Won`
//! and `Lost` are terminal for the round; `replay` re-enters `Playing` with
//! the same secrets, a new round means building a fresh session from config.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::lock::{Direction, Lock, UnlockOutcome};
use crate::timer::{TimerSignal, TimerState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Setup,
    Playing,
    Won,
    Lost,
}

impl Phase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoseReason {
    TimeExpired,
    MaxAttemptsReached,
}

/// Result of one player "check" action across all locks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Zero locks newly unlocked; drives shake/sound feedback. `lost` is set
    /// when this attempt exhausted the attempts cap.
    Wrong { lost: Option<LoseReason> },
    /// At least one lock newly unlocked, others still closed. Deliberately
    /// not treated as a wrong attempt: partial progress is rewarded with no
    /// negative feedback.
    PartialUnlock { newly_unlocked: Vec<usize> },
    /// Every lock is open; the round is won.
    AllUnlocked {
        newly_unlocked: Vec<usize>,
        elapsed_seconds: i64,
        attempts: u32,
    },
}

/// Report produced by one timer tick while playing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub remaining_seconds: i64,
    pub signal: Option<TimerSignal>,
    /// Set when this tick expired the timer and lost the round.
    pub lost: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("command only valid while playing (phase is {phase})")]
    NotPlaying { phase: Phase },
}

/// One round of the escape-room puzzle: locks, attempts, countdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleSession {
    locks: Vec<Lock>,
    attempts: u32,
    max_attempts: u32,
    timer: TimerState,
    phase: Phase,
    lose_reason: Option<LoseReason>,
}

impl PuzzleSession {
    /// Start a round over the given locks. `max_attempts` of 0 means
    /// unlimited. The timer starts immediately when enabled.
    #[must_use]
    pub fn start(locks: Vec<Lock>, max_attempts: u32, mut timer: TimerState) -> Self {
        timer.start();
        log::info!(
            "round started: {} lock(s), max_attempts={max_attempts}, timer={}s",
            locks.len(),
            timer.configured_seconds()
        );
        Self {
            locks,
            attempts: 0,
            max_attempts,
            timer,
            phase: Phase::Playing,
            lose_reason: None,
        }
    }

    #[must_use]
    pub fn locks(&self) -> &[Lock] {
        &self.locks
    }

    #[must_use]
    pub fn lock(&self, index: usize) -> Option<&Lock> {
        self.locks.get(index)
    }

    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    #[must_use]
    pub const fn timer(&self) -> &TimerState {
        &self.timer
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn lose_reason(&self) -> Option<LoseReason> {
        self.lose_reason
    }

    /// Derived: every lock open.
    #[must_use]
    pub fn all_unlocked(&self) -> bool {
        self.locks.iter().all(Lock::unlocked)
    }

    /// Forward a rotate command to one lock. Returns the wheel's new index,
    /// or `None` outside `Playing`, for unlocked locks, or bad indices.
    pub fn rotate(
        &mut self,
        lock_index: usize,
        wheel_index: usize,
        direction: Direction,
    ) -> Option<usize> {
        if self.phase != Phase::Playing {
            return None;
        }
        self.locks
            .get_mut(lock_index)?
            .rotate(wheel_index, direction)
    }

    /// Reset every still-closed lock's wheels to index 0.
    pub fn reset_wheels(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        for lock in &mut self.locks {
            lock.reset_wheels();
        }
    }

    /// The central transition: check every closed lock against its secret.
    ///
    /// An attempt that newly unlocks at least one lock is never "wrong",
    /// even if others stay closed; only a fully unproductive attempt drives
    /// negative feedback and counts toward the attempts cap.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::NotPlaying` outside the `Playing` phase.
    pub fn submit_attempt(&mut self) -> Result<AttemptOutcome, CommandError> {
        if self.phase != Phase::Playing {
            return Err(CommandError::NotPlaying { phase: self.phase });
        }
        self.attempts += 1;

        let mut newly_unlocked = Vec::new();
        for (index, lock) in self.locks.iter_mut().enumerate() {
            if lock.try_unlock() == UnlockOutcome::NewlyUnlocked {
                newly_unlocked.push(index);
            }
        }

        if self.all_unlocked() {
            self.phase = Phase::Won;
            self.timer.stop();
            let elapsed_seconds = self.timer.elapsed_seconds();
            log::info!(
                "round won after {} attempt(s), {elapsed_seconds}s elapsed",
                self.attempts
            );
            return Ok(AttemptOutcome::AllUnlocked {
                newly_unlocked,
                elapsed_seconds,
                attempts: self.attempts,
            });
        }

        if newly_unlocked.is_empty() {
            let lost = if self.max_attempts > 0 && self.attempts >= self.max_attempts {
                self.lose(LoseReason::MaxAttemptsReached);
                Some(LoseReason::MaxAttemptsReached)
            } else {
                None
            };
            return Ok(AttemptOutcome::Wrong { lost });
        }

        Ok(AttemptOutcome::PartialUnlock { newly_unlocked })
    }

    /// Advance the countdown by one second. `None` outside `Playing` or
    /// when the timer is not running; an expired tick loses the round in
    /// the same step.
    pub fn tick(&mut self) -> Option<TickReport> {
        if self.phase != Phase::Playing || !self.timer.is_running() {
            return None;
        }
        let signal = self.timer.tick();
        let lost = signal == Some(TimerSignal::Expired);
        if lost {
            self.lose(LoseReason::TimeExpired);
        }
        Some(TickReport {
            remaining_seconds: self.timer.remaining_seconds(),
            signal,
            lost,
        })
    }

    /// Seconds remaining, for display between signals.
    #[must_use]
    pub const fn remaining_seconds(&self) -> i64 {
        self.timer.remaining_seconds()
    }

    /// Re-enter `Playing` from a terminal phase with the same secrets:
    /// wheels and unlocked flags reset, attempts zeroed, timer restored to
    /// the configured duration.
    pub fn replay(&mut self) {
        for lock in &mut self.locks {
            *lock = Lock::new(lock.spec().clone());
        }
        self.attempts = 0;
        self.lose_reason = None;
        self.timer.reset();
        self.timer.start();
        self.phase = Phase::Playing;
        log::info!("round replayed with the same combinations");
    }

    /// Privileged: win immediately, bypassing combination checks. The
    /// password gate lives at the boundary, not here.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::NotPlaying` outside the `Playing` phase.
    pub fn admin_force_win(&mut self) -> Result<AttemptOutcome, CommandError> {
        if self.phase != Phase::Playing {
            return Err(CommandError::NotPlaying { phase: self.phase });
        }
        let newly_unlocked: Vec<usize> = self
            .locks
            .iter_mut()
            .enumerate()
            .filter_map(|(index, lock)| {
                lock.set_wheels_to_secret();
                (lock.try_unlock() == UnlockOutcome::NewlyUnlocked).then_some(index)
            })
            .collect();
        self.phase = Phase::Won;
        self.timer.stop();
        log::warn!("admin forced a win");
        Ok(AttemptOutcome::AllUnlocked {
            newly_unlocked,
            elapsed_seconds: self.timer.elapsed_seconds(),
            attempts: self.attempts,
        })
    }

    /// Privileged: extend the countdown without a phase transition.
    pub fn admin_add_time(&mut self, seconds: i64) {
        if self.phase != Phase::Playing {
            return;
        }
        self.timer.add_seconds(seconds);
        log::warn!("admin added {seconds}s to the timer");
    }

    /// Leave `Playing` for the setup screen: stops the timer in the same
    /// step so no tick can land on a session that has moved on.
    pub fn abandon(&mut self) {
        self.timer.stop();
        self.phase = Phase::Setup;
        log::info!("round abandoned back to setup");
    }

    fn lose(&mut self, reason: LoseReason) {
        self.phase = Phase::Lost;
        self.lose_reason = Some(reason);
        self.timer.stop();
        log::info!("round lost: {reason:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::Alphabet;
    use crate::lock::LockSpec;

    fn lock(name: &str, secret: &str) -> Lock {
        Lock::new(LockSpec {
            name: name.to_string(),
            digit_count: secret.len(),
            alphabet: Alphabet::digits(),
            secret: secret.to_string(),
        })
    }

    fn two_lock_session() -> PuzzleSession {
        PuzzleSession::start(
            vec![lock("Left", "11"), lock("Right", "22")],
            0,
            TimerState::new(5, true, true),
        )
    }

    fn solve(session: &mut PuzzleSession, index: usize) {
        let secret = session.locks()[index].spec().secret.clone();
        let wheels: Vec<usize> = secret
            .chars()
            .map(|c| session.locks()[index].spec().alphabet.index_of(c).unwrap())
            .collect();
        session.locks[index].set_wheels_for_testing(&wheels);
    }

    #[test]
    fn session_starts_playing_with_running_timer() {
        let session = two_lock_session();
        assert_eq!(session.phase(), Phase::Playing);
        assert!(session.timer().is_running());
        assert_eq!(session.attempts(), 0);
        assert!(!session.all_unlocked());
    }

    #[test]
    fn fully_wrong_attempt_reports_wrong() {
        let mut session = two_lock_session();
        let outcome = session.submit_attempt().unwrap();
        assert_eq!(outcome, AttemptOutcome::Wrong { lost: None });
        assert_eq!(session.attempts(), 1);
        assert_eq!(session.phase(), Phase::Playing);
    }

    #[test]
    fn partial_unlock_is_not_a_wrong_attempt() {
        let mut session = two_lock_session();
        solve(&mut session, 0);
        let outcome = session.submit_attempt().unwrap();
        assert_eq!(
            outcome,
            AttemptOutcome::PartialUnlock {
                newly_unlocked: vec![0]
            }
        );
        assert_eq!(session.phase(), Phase::Playing);
    }

    #[test]
    fn solving_the_last_lock_wins() {
        let mut session = two_lock_session();
        solve(&mut session, 0);
        session.submit_attempt().unwrap();
        solve(&mut session, 1);
        let outcome = session.submit_attempt().unwrap();
        match outcome {
            AttemptOutcome::AllUnlocked {
                newly_unlocked,
                attempts,
                ..
            } => {
                assert_eq!(newly_unlocked, vec![1]);
                assert_eq!(attempts, 2);
            }
            other => panic!("expected win, got {other:?}"),
        }
        assert_eq!(session.phase(), Phase::Won);
        assert!(!session.timer().is_running());
    }

    #[test]
    fn cap_only_trips_on_a_fully_wrong_attempt() {
        let mut session = PuzzleSession::start(
            vec![lock("Left", "11"), lock("Right", "22")],
            3,
            TimerState::new(5, true, true),
        );
        // A productive attempt raises the counter but can never lose; only
        // a fully-wrong attempt is judged against the cap.
        solve(&mut session, 0);
        session.submit_attempt().unwrap();
        assert_eq!(session.submit_attempt().unwrap(), AttemptOutcome::Wrong { lost: None });
        let outcome = session.submit_attempt().unwrap();
        assert_eq!(
            outcome,
            AttemptOutcome::Wrong {
                lost: Some(LoseReason::MaxAttemptsReached)
            }
        );
        assert_eq!(session.phase(), Phase::Lost);
        assert_eq!(session.lose_reason(), Some(LoseReason::MaxAttemptsReached));
    }

    #[test]
    fn third_wrong_attempt_loses_second_does_not() {
        let mut session = PuzzleSession::start(
            vec![lock("Only", "12")],
            3,
            TimerState::new(5, true, true),
        );
        assert_eq!(session.submit_attempt().unwrap(), AttemptOutcome::Wrong { lost: None });
        assert_eq!(session.submit_attempt().unwrap(), AttemptOutcome::Wrong { lost: None });
        assert_eq!(
            session.submit_attempt().unwrap(),
            AttemptOutcome::Wrong {
                lost: Some(LoseReason::MaxAttemptsReached)
            }
        );
    }

    #[test]
    fn expired_timer_loses_the_round_in_the_same_tick() {
        let mut session = PuzzleSession::start(
            vec![lock("Only", "12")],
            0,
            TimerState::new(1, true, false),
        );
        for n in 1..=59 {
            let report = session.tick().expect("running timer reports every tick");
            assert!(!report.lost, "lost early at tick {n}");
            assert_eq!(report.remaining_seconds, 60 - n);
        }
        assert_eq!(session.remaining_seconds(), 1);
        let report = session.tick().expect("expiry tick reports");
        assert!(report.lost);
        assert_eq!(report.signal, Some(TimerSignal::Expired));
        assert_eq!(session.phase(), Phase::Lost);
        assert_eq!(session.lose_reason(), Some(LoseReason::TimeExpired));
        // Terminal phase: further ticks are inert.
        assert_eq!(session.tick(), None);
    }

    #[test]
    fn commands_rejected_outside_playing() {
        let mut session = two_lock_session();
        session.abandon();
        assert_eq!(session.phase(), Phase::Setup);
        assert!(!session.timer().is_running());
        assert_eq!(session.rotate(0, 0, Direction::Down), None);
        assert!(matches!(
            session.submit_attempt(),
            Err(CommandError::NotPlaying { phase: Phase::Setup })
        ));
        assert!(matches!(
            session.admin_force_win(),
            Err(CommandError::NotPlaying { .. })
        ));
    }

    #[test]
    fn replay_keeps_secrets_and_resets_everything_else() {
        let mut session = two_lock_session();
        solve(&mut session, 0);
        session.submit_attempt().unwrap();
        session.tick();
        let secrets: Vec<String> = session
            .locks()
            .iter()
            .map(|l| l.spec().secret.clone())
            .collect();
        session.replay();
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.attempts(), 0);
        assert!(session.timer().is_running());
        assert_eq!(session.remaining_seconds(), 300);
        for (lock, secret) in session.locks().iter().zip(&secrets) {
            assert_eq!(&lock.spec().secret, secret);
            assert!(!lock.unlocked());
            assert!(lock.state().wheels.iter().all(|&w| w == 0));
        }
    }

    #[test]
    fn admin_force_win_bypasses_combinations() {
        let mut session = two_lock_session();
        let outcome = session.admin_force_win().unwrap();
        assert!(matches!(outcome, AttemptOutcome::AllUnlocked { .. }));
        assert_eq!(session.phase(), Phase::Won);
        assert!(session.all_unlocked());
        assert!(!session.timer().is_running());
        // Wheels display the winning combinations.
        for lock in session.locks() {
            assert_eq!(lock.current_combination(), lock.spec().secret);
        }
    }

    #[test]
    fn admin_add_time_extends_without_transition() {
        let mut session = two_lock_session();
        session.admin_add_time(300);
        assert_eq!(session.remaining_seconds(), 600);
        assert_eq!(session.phase(), Phase::Playing);
    }

    #[test]
    fn rotate_routes_to_the_right_lock() {
        let mut session = two_lock_session();
        assert_eq!(session.rotate(1, 0, Direction::Down), Some(1));
        assert_eq!(session.locks()[0].state().wheels[0], 0);
        assert_eq!(session.locks()[1].state().wheels[0], 1);
        assert_eq!(session.rotate(2, 0, Direction::Down), None);
    }
}
