//! Terminal overlays: victory with confetti and round stats, or defeat
//! with the reason. Both offer a replay (same combinations) and a way back
//! to setup.

use yew::prelude::*;

use lockwheel_game::{LoseReason, Phase};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub phase: Phase,
    pub win_text: AttrValue,
    pub lose_text: AttrValue,
    pub lose_reason: Option<LoseReason>,
    pub elapsed_seconds: i64,
    pub attempts: u32,
    pub timer_enabled: bool,
    pub on_replay: Callback<()>,
    pub on_new_round: Callback<()>,
}

const CONFETTI_COUNT: usize = 100;
const CONFETTI_COLORS: [&str; 7] = [
    "#ff0000", "#00ff00", "#0000ff", "#ffff00", "#ff00ff", "#00ffff", "#ffd700",
];

fn confetti() -> Html {
    // Deterministic spread; the randomness of the original only fed CSS.
    html! {
        <div class="confetti" aria-hidden="true">
            { for (0..CONFETTI_COUNT).map(|i| {
                let color = CONFETTI_COLORS[i % CONFETTI_COLORS.len()];
                let left = (i * 97) % 100;
                let duration_ms = 2000 + (i * 53) % 2000;
                let delay_ms = (i * 31) % 500;
                let style = format!(
                    "background-color: {color}; left: {left}%; \
                     animation-duration: {duration_ms}ms; animation-delay: {delay_ms}ms;"
                );
                html! { <div class="confetti__piece" {style}></div> }
            }) }
        </div>
    }
}

fn format_elapsed(seconds: i64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[function_component(ResultScreen)]
pub fn result_screen(props: &Props) -> Html {
    let on_replay = {
        let cb = props.on_replay.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_new_round = {
        let cb = props.on_new_round.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    match props.phase {
        Phase::Won => html! {
            <div class="result-overlay result-overlay--won">
                { confetti() }
                <h2>{ "Escaped!" }</h2>
                { (!props.win_text.is_empty()).then(|| html! {
                    <p class="result-overlay__message">{ props.win_text.clone() }</p>
                }).unwrap_or_default() }
                <dl class="result-overlay__stats">
                    { props.timer_enabled.then(|| html! {
                        <>
                            <dt>{ "Time" }</dt>
                            <dd>{ format_elapsed(props.elapsed_seconds) }</dd>
                        </>
                    }).unwrap_or_default() }
                    <dt>{ "Attempts" }</dt>
                    <dd>{ props.attempts }</dd>
                </dl>
                <div class="result-overlay__actions">
                    <button type="button" class="btn" onclick={on_replay}>{ "Play again" }</button>
                    <button type="button" class="btn" onclick={on_new_round}>{ "New setup" }</button>
                </div>
            </div>
        },
        Phase::Lost => {
            let reason = match props.lose_reason {
                Some(LoseReason::TimeExpired) => "Time is up!",
                Some(LoseReason::MaxAttemptsReached) => "Maximum attempts reached!",
                None => "",
            };
            html! {
                <div class="result-overlay result-overlay--lost">
                    <h2>{ "Locked in." }</h2>
                    <p class="result-overlay__reason">{ reason }</p>
                    { (!props.lose_text.is_empty()).then(|| html! {
                        <p class="result-overlay__message">{ props.lose_text.clone() }</p>
                    }).unwrap_or_default() }
                    <div class="result-overlay__actions">
                        <button type="button" class="btn" onclick={on_replay}>{ "Try again" }</button>
                        <button type="button" class="btn" onclick={on_new_round}>{ "New setup" }</button>
                    </div>
                </div>
            }
        }
        Phase::Setup | Phase::Playing => Html::default(),
    }
}
