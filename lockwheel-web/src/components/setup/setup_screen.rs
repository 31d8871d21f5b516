//! Organizer-facing setup screen: the whole `RoomConfig` as a form.

use yew::prelude::*;

use lockwheel_game::{MAX_LOCK_COUNT, RoomConfig};

use crate::components::setup::LockForm;
use crate::dom::{event_target_checked, event_target_value};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub config: RoomConfig,
    /// Validation message from the last rejected start attempt.
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_change: Callback<RoomConfig>,
    pub on_start: Callback<()>,
}

#[function_component(SetupScreen)]
pub fn setup_screen(props: &Props) -> Html {
    let text = |props: &Props, apply: fn(&mut RoomConfig, String)| {
        let config = props.config.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = event_target_value(&e) {
                let mut next = config.clone();
                apply(&mut next, value);
                on_change.emit(next);
            }
        })
    };
    let flag = |props: &Props, apply: fn(&mut RoomConfig, bool)| {
        let config = props.config.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(checked) = event_target_checked(&e) {
                let mut next = config.clone();
                apply(&mut next, checked);
                on_change.emit(next);
            }
        })
    };

    let on_lock_count = text(props, |config, value| {
        if let Ok(count) = value.parse() {
            config.set_lock_count(count);
        }
    });
    let on_timer_minutes = text(props, |config, value| {
        if let Ok(minutes) = value.parse::<u32>() {
            config.timer_minutes = minutes.clamp(1, 180);
        }
    });
    let on_max_attempts = text(props, |config, value| {
        if let Ok(attempts) = value.parse() {
            config.max_attempts = attempts;
        }
    });
    let on_welcome = text(props, |config, value| config.welcome_text = value);
    let on_win = text(props, |config, value| config.win_text = value);
    let on_lose = text(props, |config, value| config.lose_text = value);
    let on_hint = text(props, |config, value| config.hint_text = value);

    let on_timer_enabled = flag(props, |config, on| config.timer_enabled = on);
    let on_timer_warning = flag(props, |config, on| config.timer_warning = on);
    let on_show_hint = flag(props, |config, on| config.show_hint = on);
    let on_sound = flag(props, |config, on| config.sound_enabled = on);
    let on_show_attempts = flag(props, |config, on| config.show_attempts = on);
    let on_fullscreen = flag(props, |config, on| config.fullscreen = on);

    let on_lock_change = {
        let config = props.config.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |(index, setup)| {
            let mut next = config.clone();
            if index < next.locks.len() {
                next.locks[index] = setup;
                on_change.emit(next);
            }
        })
    };

    let on_start = {
        let cb = props.on_start.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <main class="screen setup-screen">
            <h1>{ "Lockwheel" }</h1>
            <p class="setup-screen__tagline">{ "Configure the locks, hand over the keyboard, start the clock." }</p>

            <section class="setup-screen__section">
                <h2>{ "Locks" }</h2>
                <label class="form-field">
                    { "Number of locks:" }
                    <select class="form-field__select" onchange={on_lock_count}>
                        { for (1..=MAX_LOCK_COUNT).map(|n| html! {
                            <option value={n.to_string()} selected={props.config.locks.len() == n}>
                                { n }
                            </option>
                        }) }
                    </select>
                </label>
                <div class="setup-screen__locks">
                    { for props.config.locks.iter().enumerate().map(|(index, setup)| html! {
                        <LockForm
                            key={index}
                            {index}
                            setup={setup.clone()}
                            on_change={on_lock_change.clone()}
                        />
                    }) }
                </div>
            </section>

            <section class="setup-screen__section">
                <h2>{ "Timer" }</h2>
                <label class="form-field">
                    { "Minutes:" }
                    <input type="number" min="1" max="180"
                        value={props.config.timer_minutes.to_string()}
                        onchange={on_timer_minutes} />
                </label>
                <label class="checkbox">
                    <input type="checkbox" checked={props.config.timer_enabled} onchange={on_timer_enabled} />
                    { "Countdown enabled" }
                </label>
                <label class="checkbox">
                    <input type="checkbox" checked={props.config.timer_warning} onchange={on_timer_warning} />
                    { "Warn at one minute" }
                </label>
            </section>

            <section class="setup-screen__section">
                <h2>{ "Attempts" }</h2>
                <label class="form-field">
                    { "Maximum attempts (0 = unlimited):" }
                    <input type="number" min="0" max="99"
                        value={props.config.max_attempts.to_string()}
                        onchange={on_max_attempts} />
                </label>
                <label class="checkbox">
                    <input type="checkbox" checked={props.config.show_attempts} onchange={on_show_attempts} />
                    { "Show attempt counter" }
                </label>
            </section>

            <section class="setup-screen__section">
                <h2>{ "Messages" }</h2>
                <label class="form-field">
                    { "Welcome message:" }
                    <textarea value={props.config.welcome_text.clone()} onchange={on_welcome} />
                </label>
                <label class="form-field">
                    { "Victory message:" }
                    <textarea value={props.config.win_text.clone()} onchange={on_win} />
                </label>
                <label class="form-field">
                    { "Defeat message:" }
                    <textarea value={props.config.lose_text.clone()} onchange={on_lose} />
                </label>
                <label class="form-field">
                    { "Hint text:" }
                    <textarea value={props.config.hint_text.clone()} onchange={on_hint} />
                </label>
                <label class="checkbox">
                    <input type="checkbox" checked={props.config.show_hint} onchange={on_show_hint} />
                    { "Show the hint button" }
                </label>
            </section>

            <section class="setup-screen__section">
                <h2>{ "Presentation" }</h2>
                <label class="checkbox">
                    <input type="checkbox" checked={props.config.sound_enabled} onchange={on_sound} />
                    { "Sound effects" }
                </label>
                <label class="checkbox">
                    <input type="checkbox" checked={props.config.fullscreen} onchange={on_fullscreen} />
                    { "Fullscreen on start" }
                </label>
            </section>

            { props.error.as_ref().map(|message| html! {
                <p class="setup-screen__error" role="alert">{ message.clone() }</p>
            }).unwrap_or_default() }

            <button type="button" class="btn btn--start" onclick={on_start}>
                { "Start the room" }
            </button>
        </main>
    }
}
