//! Organizer override panel. The password check is a plain string compare
//! at this boundary; the core session never sees it.

use yew::prelude::*;

use lockwheel_game::Lock;

use crate::components::modal::Modal;
use crate::dom::event_target_value;

const ADMIN_PASSWORD: &str = "Admin123";
const ADD_TIME_SECONDS: i64 = 300;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub locks: Vec<Lock>,
    pub on_close: Callback<()>,
    pub on_force_win: Callback<()>,
    pub on_add_time: Callback<i64>,
    pub on_end_round: Callback<()>,
}

#[function_component(AdminModal)]
pub fn admin_modal(props: &Props) -> Html {
    let authorized = use_state(|| false);
    let password = use_state(String::new);
    let password_wrong = use_state(|| false);

    // Re-lock the panel whenever it closes.
    {
        let authorized = authorized.clone();
        let password = password.clone();
        let password_wrong = password_wrong.clone();
        use_effect_with(props.open, move |open| {
            if !open {
                authorized.set(false);
                password.set(String::new());
                password_wrong.set(false);
            }
            || {}
        });
    }

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = event_target_value(&e) {
                password.set(value);
            }
        })
    };

    let submit_password = {
        let authorized = authorized.clone();
        let password = password.clone();
        let password_wrong = password_wrong.clone();
        move || {
            if *password == ADMIN_PASSWORD {
                authorized.set(true);
                password_wrong.set(false);
            } else {
                password_wrong.set(true);
            }
        }
    };
    let on_password_submit = {
        let submit = submit_password.clone();
        Callback::from(move |_: MouseEvent| submit())
    };
    let on_password_keydown = {
        let submit = submit_password;
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                submit();
            }
        })
    };

    // Every action also dismisses the panel, like the original modal.
    let on_force_win = {
        let cb = props.on_force_win.clone();
        let close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            cb.emit(());
            close.emit(());
        })
    };
    let on_add_time = {
        let cb = props.on_add_time.clone();
        let close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            cb.emit(ADD_TIME_SECONDS);
            close.emit(());
        })
    };
    let on_end_round = {
        let cb = props.on_end_round.clone();
        let close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            cb.emit(());
            close.emit(());
        })
    };

    let body = if *authorized {
        html! {
            <>
                <div class="admin-panel__locks">
                    { for props.locks.iter().map(|lock| html! {
                        <p>
                            <strong>{ format!("{}: ", lock.spec().name) }</strong>
                            <span class="admin-panel__solution">{ &lock.spec().secret }</span>
                            { if lock.unlocked() { " ✅" } else { " 🔒" } }
                        </p>
                    }) }
                </div>
                <div class="admin-panel__actions">
                    <button type="button" class="btn" onclick={on_force_win}>
                        { "Open everything (win)" }
                    </button>
                    <button type="button" class="btn" onclick={on_add_time}>
                        { "+5 minutes" }
                    </button>
                    <button type="button" class="btn btn--danger" onclick={on_end_round}>
                        { "End round" }
                    </button>
                </div>
            </>
        }
    } else {
        html! {
            <div class="admin-panel__gate">
                <label class="form-field">
                    { "Admin password:" }
                    <input
                        type="password"
                        value={(*password).clone()}
                        onchange={on_password_input}
                        onkeydown={on_password_keydown}
                    />
                </label>
                { (*password_wrong).then(|| html! {
                    <p class="admin-panel__error" role="alert">{ "Wrong password." }</p>
                }).unwrap_or_default() }
                <button type="button" class="btn" onclick={on_password_submit}>
                    { "Unlock panel" }
                </button>
            </div>
        }
    };

    html! {
        <Modal
            open={props.open}
            title="Game master"
            on_close={props.on_close.clone()}
        >
            { body }
        </Modal>
    }
}
