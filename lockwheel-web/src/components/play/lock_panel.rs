//! One lock: its name, wheels, and open/closed status.

use yew::prelude::*;

use lockwheel_game::{Direction, Lock};

use crate::components::play::Wheel;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub index: usize,
    pub lock: Lock,
    /// Changes on every fully wrong attempt; keying the body on it replays
    /// the shake animation.
    pub shake_seq: u32,
    pub on_rotate: Callback<(usize, usize, Direction)>,
}

#[function_component(LockPanel)]
pub fn lock_panel(props: &Props) -> Html {
    let index = props.index;
    let chars: Vec<char> = props.lock.spec().alphabet.chars().collect();
    let unlocked = props.lock.unlocked();
    let shaking = props.shake_seq > 0 && !unlocked;

    let body_class = classes!(
        "lock-panel__body",
        unlocked.then_some("lock-panel__body--open"),
        shaking.then_some("shake-animation"),
    );

    html! {
        <div class="lock-panel">
            <div class="lock-panel__name">{ &props.lock.spec().name }</div>
            <div class={body_class} key={props.shake_seq}>
                <div class="lock-panel__wheels">
                    { for props.lock.state().wheels.iter().enumerate().map(|(wheel_index, &value)| {
                        let on_rotate = {
                            let cb = props.on_rotate.clone();
                            Callback::from(move |direction| cb.emit((index, wheel_index, direction)))
                        };
                        html! {
                            <Wheel
                                key={wheel_index}
                                chars={chars.clone()}
                                {value}
                                {unlocked}
                                {on_rotate}
                            />
                        }
                    }) }
                </div>
                <div class="lock-panel__keyhole" aria-hidden="true"></div>
            </div>
            <div class={classes!("lock-panel__status", if unlocked {
                "lock-panel__status--open"
            } else {
                "lock-panel__status--closed"
            })}>
                { if unlocked { "✅ Open!" } else { "🔒 Locked" } }
            </div>
        </div>
    }
}
