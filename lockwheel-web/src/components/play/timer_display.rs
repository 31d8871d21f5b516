use yew::prelude::*;

use lockwheel_game::timer::{DANGER_THRESHOLD_SECONDS, WARNING_THRESHOLD_SECONDS};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub clock: AttrValue,
    pub remaining_seconds: i64,
    pub warning_enabled: bool,
}

/// mm:ss countdown with warning/danger styling derived from the remaining
/// time, so a replayed round styles itself correctly from the first render.
#[function_component(TimerDisplay)]
pub fn timer_display(props: &Props) -> Html {
    let danger = props.remaining_seconds <= DANGER_THRESHOLD_SECONDS;
    let warning =
        !danger && props.warning_enabled && props.remaining_seconds <= WARNING_THRESHOLD_SECONDS;
    let class = classes!(
        "timer-display",
        warning.then_some("timer-display--warning"),
        danger.then_some("timer-display--danger"),
    );
    html! {
        <div {class} role="timer" aria-live="polite">
            <span class="timer-display__icon" aria-hidden="true">{ "⏱" }</span>
            <span class="timer-display__clock">{ props.clock.clone() }</span>
        </div>
    }
}
