//! End-to-end round scenarios driven through the public API, the way the
//! web layer drives a session: config -> build -> rotate/check/tick.

use lockwheel_game::{
    AttemptOutcome, CharClasses, Direction, LoseReason, Phase, RoomConfig, TimerSignal,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn digits_config(secret: &str, timer_minutes: u32, max_attempts: u32) -> RoomConfig {
    let mut config = RoomConfig::default();
    config.locks[0].digit_count = secret.len();
    config.locks[0].combination = secret.to_string();
    config.timer_minutes = timer_minutes;
    config.max_attempts = max_attempts;
    config
}

#[test]
fn rotating_to_the_secret_and_checking_wins() {
    let mut config = digits_config("1234", 15, 0);
    let mut rng = SmallRng::seed_from_u64(1);
    let mut session = config.build_session(&mut rng).unwrap();

    // Three clicks on wheel 0 land on '3', which is not the secret's '1'.
    for _ in 0..3 {
        session.rotate(0, 0, Direction::Down);
    }
    assert_eq!(session.locks()[0].current_combination(), "3000");
    assert!(matches!(
        session.submit_attempt().unwrap(),
        AttemptOutcome::Wrong { lost: None }
    ));

    // Walk every wheel onto the secret: digits alphabet, so index == digit.
    session.rotate(0, 0, Direction::Up);
    session.rotate(0, 0, Direction::Up);
    for _ in 0..2 {
        session.rotate(0, 1, Direction::Down);
    }
    for _ in 0..3 {
        session.rotate(0, 2, Direction::Down);
    }
    for _ in 0..4 {
        session.rotate(0, 3, Direction::Down);
    }
    assert_eq!(session.locks()[0].current_combination(), "1234");

    match session.submit_attempt().unwrap() {
        AttemptOutcome::AllUnlocked {
            attempts,
            elapsed_seconds,
            ..
        } => {
            assert_eq!(attempts, 2);
            assert_eq!(elapsed_seconds, 0, "no tick ran, nothing elapsed");
        }
        other => panic!("expected a win, got {other:?}"),
    }
    assert_eq!(session.phase(), Phase::Won);
}

#[test]
fn elapsed_time_reflects_ticks_consumed_before_the_win() {
    let mut config = digits_config("11", 2, 0);
    config.locks[0].digit_count = 2;
    let mut rng = SmallRng::seed_from_u64(2);
    let mut session = config.build_session(&mut rng).unwrap();
    for _ in 0..45 {
        session.tick();
    }
    session.rotate(0, 0, Direction::Down);
    session.rotate(0, 1, Direction::Down);
    match session.submit_attempt().unwrap() {
        AttemptOutcome::AllUnlocked {
            elapsed_seconds, ..
        } => assert_eq!(elapsed_seconds, 45),
        other => panic!("expected a win, got {other:?}"),
    }
    // Won is terminal: the timer no longer moves.
    assert_eq!(session.tick(), None);
}

#[test]
fn one_minute_round_runs_out_on_the_sixtieth_tick() {
    let mut config = digits_config("1234", 1, 0);
    let mut rng = SmallRng::seed_from_u64(3);
    let mut session = config.build_session(&mut rng).unwrap();

    let mut signals = Vec::new();
    for _ in 0..59 {
        let report = session.tick().unwrap();
        signals.extend(report.signal);
        assert_eq!(session.phase(), Phase::Playing);
    }
    let last = session.tick().unwrap();
    assert_eq!(last.signal, Some(TimerSignal::Expired));
    assert!(last.lost);
    assert_eq!(session.phase(), Phase::Lost);
    assert_eq!(session.lose_reason(), Some(LoseReason::TimeExpired));
    // One minute leaves no room for the 60s warning; danger fired at 10.
    assert_eq!(signals, vec![TimerSignal::Danger]);
}

#[test]
fn warning_danger_expiry_arrive_in_order() {
    let mut config = digits_config("1234", 2, 0);
    config.timer_warning = true;
    let mut rng = SmallRng::seed_from_u64(4);
    let mut session = config.build_session(&mut rng).unwrap();
    let mut signals = Vec::new();
    while session.phase() == Phase::Playing {
        if let Some(report) = session.tick() {
            signals.extend(report.signal);
        }
    }
    assert_eq!(
        signals,
        vec![TimerSignal::Warning, TimerSignal::Danger, TimerSignal::Expired]
    );
}

#[test]
fn replay_after_a_loss_keeps_the_same_secret() {
    let mut config = digits_config("", 1, 2);
    config.locks[0].combination = String::new();
    let mut rng = SmallRng::seed_from_u64(5);
    let mut session = config.build_session(&mut rng).unwrap();
    let secret = session.locks()[0].spec().secret.clone();
    assert_eq!(config.locks[0].combination, secret);

    // Make sure the resting wheels are not accidentally the secret.
    if session.locks()[0].current_combination() == secret {
        session.rotate(0, 0, Direction::Down);
    }
    session.submit_attempt().unwrap();
    assert!(matches!(
        session.submit_attempt().unwrap(),
        AttemptOutcome::Wrong {
            lost: Some(LoseReason::MaxAttemptsReached)
        }
    ));
    assert_eq!(session.phase(), Phase::Lost);

    session.replay();
    assert_eq!(session.phase(), Phase::Playing);
    assert_eq!(session.attempts(), 0);
    assert_eq!(session.locks()[0].spec().secret, secret);
    assert_eq!(session.remaining_seconds(), 60);
}

#[test]
fn two_locks_partial_then_full_unlock() {
    let mut config = RoomConfig::default();
    config.set_lock_count(2);
    config.locks[0].digit_count = 2;
    config.locks[0].combination = "11".to_string();
    config.locks[1].digit_count = 2;
    config.locks[1].classes = CharClasses {
        numbers: false,
        letters: true,
        symbols: false,
    };
    config.locks[1].combination = "BB".to_string();
    let mut rng = SmallRng::seed_from_u64(6);
    let mut session = config.build_session(&mut rng).unwrap();

    // Solve only the digit lock.
    session.rotate(0, 0, Direction::Down);
    session.rotate(0, 1, Direction::Down);
    match session.submit_attempt().unwrap() {
        AttemptOutcome::PartialUnlock { newly_unlocked } => {
            assert_eq!(newly_unlocked, vec![0]);
        }
        other => panic!("expected partial unlock, got {other:?}"),
    }
    assert!(session.locks()[0].unlocked());
    assert!(!session.all_unlocked());

    // The letter lock: 'B' is index 1 in the A-Z alphabet.
    session.rotate(1, 0, Direction::Down);
    session.rotate(1, 1, Direction::Down);
    match session.submit_attempt().unwrap() {
        AttemptOutcome::AllUnlocked { newly_unlocked, .. } => {
            assert_eq!(newly_unlocked, vec![1]);
        }
        other => panic!("expected a win, got {other:?}"),
    }
}

#[test]
fn admin_override_path() {
    let mut config = digits_config("1234", 15, 0);
    let mut rng = SmallRng::seed_from_u64(8);
    let mut session = config.build_session(&mut rng).unwrap();
    for _ in 0..30 {
        session.tick();
    }
    session.admin_add_time(300);
    assert_eq!(session.remaining_seconds(), 15 * 60 - 30 + 300);

    let outcome = session.admin_force_win().unwrap();
    assert!(matches!(outcome, AttemptOutcome::AllUnlocked { .. }));
    assert_eq!(session.phase(), Phase::Won);
    assert_eq!(session.locks()[0].current_combination(), "1234");
}

#[test]
fn disabled_timer_rounds_cannot_time_out() {
    let mut config = digits_config("1234", 1, 0);
    config.timer_enabled = false;
    let mut rng = SmallRng::seed_from_u64(9);
    let mut session = config.build_session(&mut rng).unwrap();
    assert!(!session.timer().is_running());
    for _ in 0..200 {
        assert_eq!(session.tick(), None);
    }
    assert_eq!(session.phase(), Phase::Playing);
}
