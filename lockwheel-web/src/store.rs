//! Reducer-backed session store: the single owner of the running
//! `PuzzleSession`. Components dispatch commands; the store applies them to
//! the core and records a feedback event the app layer turns into audio and
//! animation. Holding the session behind a reducer keeps the interval
//! callback honest: every tick acts on the latest state, never a stale
//! render's copy.

use std::rc::Rc;
use yew::Reducible;

use lockwheel_game::{AttemptOutcome, Direction, PuzzleSession, TimerSignal};

use crate::audio::Cue;

/// One observable consequence of a command, consumed by an effect that
/// plays audio and triggers the shake animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Click,
    LockOpened,
    Wrong,
    Won,
    Lost,
    TimerWarning,
}

impl Feedback {
    #[must_use]
    pub const fn cue(self) -> Cue {
        match self {
            Self::Click => Cue::Click,
            Self::LockOpened | Self::Won => Cue::Win,
            Self::Wrong => Cue::Wrong,
            Self::Lost => Cue::Lose,
            Self::TimerWarning => Cue::Tick,
        }
    }
}

#[derive(Debug, Clone)]
pub enum SessionAction {
    /// A freshly built session enters play.
    Start(Box<PuzzleSession>),
    Rotate {
        lock: usize,
        wheel: usize,
        direction: Direction,
    },
    Check,
    ResetWheels,
    Tick,
    Replay,
    AdminForceWin,
    AdminAddTime(i64),
    /// Back to the setup screen; the session is dropped.
    Abandon,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionStore {
    pub session: Option<PuzzleSession>,
    pub feedback: Option<Feedback>,
    /// Bumped with every feedback event so effects retrigger on repeats.
    pub feedback_seq: u32,
    /// Bumped on every fully wrong attempt; keys the shake animation.
    pub shake_seq: u32,
}

impl SessionStore {
    fn emit(&mut self, feedback: Feedback) {
        self.feedback = Some(feedback);
        self.feedback_seq = self.feedback_seq.wrapping_add(1);
    }
}

impl Reducible for SessionStore {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.feedback = None;
        match action {
            SessionAction::Start(session) => {
                next.session = Some(*session);
                next.shake_seq = 0;
            }
            SessionAction::Rotate {
                lock,
                wheel,
                direction,
            } => {
                if let Some(session) = next.session.as_mut()
                    && session.rotate(lock, wheel, direction).is_some()
                {
                    next.emit(Feedback::Click);
                }
            }
            SessionAction::Check => {
                if let Some(session) = next.session.as_mut()
                    && let Ok(outcome) = session.submit_attempt()
                {
                    match outcome {
                        AttemptOutcome::Wrong { lost } => {
                            next.shake_seq = next.shake_seq.wrapping_add(1);
                            if lost.is_some() {
                                next.emit(Feedback::Lost);
                            } else {
                                next.emit(Feedback::Wrong);
                            }
                        }
                        AttemptOutcome::PartialUnlock { .. } => next.emit(Feedback::LockOpened),
                        AttemptOutcome::AllUnlocked { .. } => next.emit(Feedback::Won),
                    }
                }
            }
            SessionAction::ResetWheels => {
                if let Some(session) = next.session.as_mut() {
                    session.reset_wheels();
                    next.emit(Feedback::Click);
                }
            }
            SessionAction::Tick => {
                if let Some(session) = next.session.as_mut()
                    && let Some(report) = session.tick()
                {
                    match report.signal {
                        Some(TimerSignal::Warning) => next.emit(Feedback::TimerWarning),
                        Some(TimerSignal::Expired) => next.emit(Feedback::Lost),
                        Some(TimerSignal::Danger) | None => {}
                    }
                }
            }
            SessionAction::Replay => {
                if let Some(session) = next.session.as_mut() {
                    session.replay();
                    next.shake_seq = 0;
                }
            }
            SessionAction::AdminForceWin => {
                if let Some(session) = next.session.as_mut()
                    && session.admin_force_win().is_ok()
                {
                    next.emit(Feedback::Won);
                }
            }
            SessionAction::AdminAddTime(seconds) => {
                if let Some(session) = next.session.as_mut() {
                    session.admin_add_time(seconds);
                }
            }
            SessionAction::Abandon => {
                if let Some(session) = next.session.as_mut() {
                    session.abandon();
                }
                next.session = None;
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lockwheel_game::{Phase, RoomConfig};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn started_store(secret: &str, max_attempts: u32) -> Rc<SessionStore> {
        let mut config = RoomConfig::default();
        config.locks[0].digit_count = secret.len();
        config.locks[0].combination = secret.to_string();
        config.max_attempts = max_attempts;
        let mut rng = SmallRng::seed_from_u64(11);
        let session = config.build_session(&mut rng).unwrap();
        Rc::new(SessionStore::default()).reduce(SessionAction::Start(Box::new(session)))
    }

    #[test]
    fn rotate_emits_a_click() {
        let store = started_store("1234", 0).reduce(SessionAction::Rotate {
            lock: 0,
            wheel: 0,
            direction: Direction::Down,
        });
        assert_eq!(store.feedback, Some(Feedback::Click));
        assert_eq!(store.session.as_ref().unwrap().locks()[0].state().wheels[0], 1);
    }

    #[test]
    fn wrong_check_shakes_and_buzzes() {
        let store = started_store("1234", 0).reduce(SessionAction::Check);
        assert_eq!(store.feedback, Some(Feedback::Wrong));
        assert_eq!(store.shake_seq, 1);
    }

    #[test]
    fn winning_check_celebrates() {
        let mut store = started_store("11", 0);
        for wheel in 0..2 {
            store = store.reduce(SessionAction::Rotate {
                lock: 0,
                wheel,
                direction: Direction::Down,
            });
        }
        let store = store.reduce(SessionAction::Check);
        assert_eq!(store.feedback, Some(Feedback::Won));
        assert_eq!(store.session.as_ref().unwrap().phase(), Phase::Won);
    }

    #[test]
    fn final_wrong_attempt_reports_the_loss() {
        let store = started_store("1234", 1).reduce(SessionAction::Check);
        assert_eq!(store.feedback, Some(Feedback::Lost));
        assert_eq!(store.session.as_ref().unwrap().phase(), Phase::Lost);
    }

    #[test]
    fn abandon_drops_the_session() {
        let store = started_store("1234", 0).reduce(SessionAction::Abandon);
        assert!(store.session.is_none());
    }

    #[test]
    fn replay_clears_shake_state() {
        let store = started_store("1234", 1).reduce(SessionAction::Check);
        assert_eq!(store.shake_seq, 1);
        let store = store.reduce(SessionAction::Replay);
        assert_eq!(store.shake_seq, 0);
        assert_eq!(store.session.as_ref().unwrap().phase(), Phase::Playing);
    }
}
