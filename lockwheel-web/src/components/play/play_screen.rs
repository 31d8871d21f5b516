//! The play screen: locks grid, countdown, attempt controls, hint and
//! admin modals, and the terminal overlays.

use yew::prelude::*;

use lockwheel_game::{Direction, Phase, PuzzleSession, RoomConfig};

use crate::components::modal::Modal;
use crate::components::play::{AdminModal, LockPanel, ResultScreen, TimerDisplay};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub session: PuzzleSession,
    pub config: RoomConfig,
    pub shake_seq: u32,
    pub on_rotate: Callback<(usize, usize, Direction)>,
    pub on_check: Callback<()>,
    pub on_reset: Callback<()>,
    pub on_replay: Callback<()>,
    pub on_new_round: Callback<()>,
    pub on_admin_force_win: Callback<()>,
    pub on_admin_add_time: Callback<i64>,
    pub on_end_round: Callback<()>,
}

#[function_component(PlayScreen)]
pub fn play_screen(props: &Props) -> Html {
    let session = &props.session;
    let config = &props.config;

    let welcome_open = use_state(|| true);
    let hint_open = use_state(|| false);
    let admin_open = use_state(|| false);

    // A fresh round (start or replay) re-shows the welcome message.
    {
        let welcome_open = welcome_open.clone();
        use_effect_with(
            (session.phase(), session.attempts()),
            move |(phase, attempts)| {
                if *phase == Phase::Playing && *attempts == 0 {
                    welcome_open.set(true);
                }
                || {}
            },
        );
    }

    let click = |cb: &Callback<()>| {
        let cb = cb.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let close = |handle: &UseStateHandle<bool>| {
        let handle = handle.clone();
        Callback::from(move |()| handle.set(false))
    };
    let open = |handle: &UseStateHandle<bool>| {
        let handle = handle.clone();
        Callback::from(move |_: MouseEvent| handle.set(true))
    };

    let lock_count = session.locks().len();
    let attempts_label = if config.max_attempts > 0 {
        format!("{} / {}", session.attempts(), config.max_attempts)
    } else {
        session.attempts().to_string()
    };

    html! {
        <main class="screen play-screen">
            <header class="play-screen__header">
                { config.timer_enabled.then(|| html! {
                    <TimerDisplay
                        clock={session.timer().clock()}
                        remaining_seconds={session.remaining_seconds()}
                        warning_enabled={config.timer_warning}
                    />
                }).unwrap_or_default() }
                { config.show_attempts.then(|| html! {
                    <div class="play-screen__attempts">
                        { "Attempts: " }{ attempts_label.clone() }
                    </div>
                }).unwrap_or_default() }
                <button type="button" class="btn btn--ghost play-screen__admin" onclick={open(&admin_open)}>
                    { "⚙" }
                </button>
            </header>

            { (*welcome_open && !config.welcome_text.is_empty()).then(|| {
                let on_close = {
                    let welcome_open = welcome_open.clone();
                    Callback::from(move |_: MouseEvent| welcome_open.set(false))
                };
                html! {
                    <div class="play-screen__welcome">
                        <p>{ config.welcome_text.clone() }</p>
                        <button type="button" class="btn" onclick={on_close}>{ "Let's go" }</button>
                    </div>
                }
            }).unwrap_or_default() }

            <div class={classes!("play-screen__locks", format!("play-screen__locks--{lock_count}"))}>
                { for session.locks().iter().enumerate().map(|(index, lock)| html! {
                    <LockPanel
                        key={index}
                        {index}
                        lock={lock.clone()}
                        shake_seq={props.shake_seq}
                        on_rotate={props.on_rotate.clone()}
                    />
                }) }
            </div>

            <div class="play-screen__controls">
                <button type="button" class="btn btn--check" onclick={click(&props.on_check)}>
                    { "Check combination" }
                </button>
                <button type="button" class="btn" onclick={click(&props.on_reset)}>
                    { "Reset wheels" }
                </button>
                { config.show_hint.then(|| html! {
                    <button type="button" class="btn" onclick={open(&hint_open)}>
                        { "Hint" }
                    </button>
                }).unwrap_or_default() }
            </div>

            <Modal open={*hint_open} title="Hint" on_close={close(&hint_open)}>
                <p class="hint-text">{ config.hint_text.clone() }</p>
            </Modal>

            <AdminModal
                open={*admin_open}
                locks={session.locks().to_vec()}
                on_close={close(&admin_open)}
                on_force_win={props.on_admin_force_win.clone()}
                on_add_time={props.on_admin_add_time.clone()}
                on_end_round={props.on_end_round.clone()}
            />

            <ResultScreen
                phase={session.phase()}
                win_text={config.win_text.clone()}
                lose_text={config.lose_text.clone()}
                lose_reason={session.lose_reason()}
                elapsed_seconds={session.timer().elapsed_seconds()}
                attempts={session.attempts()}
                timer_enabled={config.timer_enabled}
                on_replay={props.on_replay.clone()}
                on_new_round={props.on_new_round.clone()}
            />
        </main>
    }
}
