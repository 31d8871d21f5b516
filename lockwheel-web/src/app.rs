//! Top-level application: owns the round configuration and the session
//! store, drives the 1 Hz ticker while a timed round is playing, and turns
//! store feedback into audio.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;
use yew_router::prelude::*;

use lockwheel_game::{Phase, RoomConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::audio;
use crate::components::play::PlayScreen;
use crate::components::setup::SetupScreen;
use crate::dom;
use crate::interval::{SECOND_MS, Ticker};
use crate::routes::Route;
use crate::store::{SessionAction, SessionStore};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Setup,
    Play,
}

/// Main application component providing browser routing.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppInner />
        </BrowserRouter>
    }
}

#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let config = use_state(RoomConfig::default);
    let setup_error = use_state(|| None::<AttrValue>);
    let store = use_reducer(SessionStore::default);

    let screen = if store.session.is_some() {
        Screen::Play
    } else {
        Screen::Setup
    };

    // Keep the address bar in step with the screen.
    {
        let navigator = use_navigator();
        let route = use_route::<Route>();
        use_effect_with(screen, move |screen| {
            let target = Route::for_screen(*screen);
            if let Some(nav) = navigator
                && route != Some(target.clone())
            {
                nav.push(&target);
            }
            || {}
        });
    }

    // Run the countdown only while a timed round is actually playing; the
    // handle is dropped (and the interval cancelled) the moment that stops
    // being true, so no tick can land on a finished round.
    {
        let dispatcher = store.dispatcher();
        let ticking = store
            .session
            .as_ref()
            .is_some_and(|s| s.phase() == Phase::Playing && s.timer().is_running());
        use_effect_with(ticking, move |ticking| {
            let ticker = ticking
                .then(|| {
                    Ticker::start(SECOND_MS, move || {
                        dispatcher.dispatch(SessionAction::Tick);
                    })
                })
                .flatten();
            move || drop(ticker)
        });
    }

    // Audio follows store feedback.
    {
        let sound_enabled = config.sound_enabled;
        use_effect_with(
            (store.feedback_seq, store.feedback),
            move |(_, feedback)| {
                if let Some(feedback) = feedback {
                    audio::play(feedback.cue(), sound_enabled);
                }
                || {}
            },
        );
    }

    // Enter submits an attempt while playing, like the original keyboard
    // shortcut.
    {
        let dispatcher = store.dispatcher();
        let playing = store
            .session
            .as_ref()
            .is_some_and(|s| s.phase() == Phase::Playing);
        use_effect_with(playing, move |playing| {
            let listener = playing.then(|| {
                let closure = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
                    move |e: web_sys::KeyboardEvent| {
                        if e.key() == "Enter" {
                            dispatcher.dispatch(SessionAction::Check);
                        }
                    },
                );
                if let Err(err) = dom::document()
                    .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
                {
                    dom::console_error(&dom::js_error_message(&err));
                }
                closure
            });
            move || {
                if let Some(closure) = listener {
                    let _ = dom::document().remove_event_listener_with_callback(
                        "keydown",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let on_config_change = {
        let config = config.clone();
        Callback::from(move |next| config.set(next))
    };

    let on_start = {
        let config = config.clone();
        let setup_error = setup_error.clone();
        let store = store.clone();
        Callback::from(move |()| {
            let mut next = (*config).clone();
            let mut rng = ChaCha20Rng::seed_from_u64(js_sys::Date::now().to_bits());
            match next.build_session(&mut rng) {
                Ok(session) => {
                    if next.fullscreen {
                        dom::request_fullscreen();
                    }
                    setup_error.set(None);
                    // Corrections and generated secrets were written back.
                    config.set(next);
                    store.dispatch(SessionAction::Start(Box::new(session)));
                }
                Err(err) => {
                    log::warn!("round rejected: {err}");
                    config.set(next);
                    setup_error.set(Some(AttrValue::from(err.to_string())));
                }
            }
        })
    };

    let dispatch = |action: fn() -> SessionAction| {
        let store = store.clone();
        Callback::from(move |()| store.dispatch(action()))
    };
    let on_check = dispatch(|| SessionAction::Check);
    let on_reset = dispatch(|| SessionAction::ResetWheels);
    let on_replay = dispatch(|| SessionAction::Replay);
    let on_new_round = dispatch(|| SessionAction::Abandon);
    let on_end_round = dispatch(|| SessionAction::Abandon);
    let on_admin_force_win = dispatch(|| SessionAction::AdminForceWin);

    let on_rotate = {
        let store = store.clone();
        Callback::from(move |(lock, wheel, direction)| {
            store.dispatch(SessionAction::Rotate {
                lock,
                wheel,
                direction,
            });
        })
    };
    let on_admin_add_time = {
        let store = store.clone();
        Callback::from(move |seconds| store.dispatch(SessionAction::AdminAddTime(seconds)))
    };

    match &store.session {
        None => html! {
            <SetupScreen
                config={(*config).clone()}
                error={(*setup_error).clone()}
                on_change={on_config_change}
                on_start={on_start}
            />
        },
        Some(session) => html! {
            <PlayScreen
                session={session.clone()}
                config={(*config).clone()}
                shake_seq={store.shake_seq}
                {on_rotate}
                {on_check}
                {on_reset}
                {on_replay}
                {on_new_round}
                {on_admin_force_win}
                {on_admin_add_time}
                {on_end_round}
            />
        },
    }
}
