//! Per-lock configuration card on the setup screen.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use yew::prelude::*;

use lockwheel_game::{LockSetup, MAX_DIGIT_COUNT, MIN_DIGIT_COUNT, charset, combination};

use crate::dom::{event_target_checked, event_target_value};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub index: usize,
    pub setup: LockSetup,
    pub on_change: Callback<(usize, LockSetup)>,
}

fn entropy_seed() -> u64 {
    js_sys::Date::now().to_bits()
}

#[function_component(LockForm)]
pub fn lock_form(props: &Props) -> Html {
    let index = props.index;

    let patch = |props: &Props, apply: fn(&mut LockSetup, String)| {
        let setup = props.setup.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = event_target_value(&e) {
                let mut next = setup.clone();
                apply(&mut next, value);
                on_change.emit((index, next));
            }
        })
    };

    let on_name = patch(props, |setup, value| setup.name = value);
    let on_digit_count = patch(props, |setup, value| {
        if let Ok(count) = value.parse() {
            setup.digit_count = count;
            setup.combination = setup.combination.chars().take(count).collect();
        }
    });
    let on_combination = patch(props, |setup, value| setup.combination = value);

    let toggle = |props: &Props, apply: fn(&mut LockSetup, bool)| {
        let setup = props.setup.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(checked) = event_target_checked(&e) {
                let mut next = setup.clone();
                apply(&mut next, checked);
                on_change.emit((index, next));
            }
        })
    };
    let on_numbers = toggle(props, |setup, on| setup.classes.numbers = on);
    let on_letters = toggle(props, |setup, on| setup.classes.letters = on);
    let on_symbols = toggle(props, |setup, on| setup.classes.symbols = on);

    let on_random = {
        let setup = props.setup.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            let resolved = charset::resolve(setup.classes);
            let mut rng = ChaCha20Rng::seed_from_u64(entropy_seed());
            let mut next = setup.clone();
            if resolved.corrected {
                next.classes.numbers = true;
            }
            next.combination =
                combination::generate(&resolved.alphabet, setup.digit_count, &mut rng);
            on_change.emit((index, next));
        })
    };

    html! {
        <div class="lock-config-card">
            <div class="lock-config-card__header">
                <span class="lock-config-card__number">{ index + 1 }</span>
                <input
                    type="text"
                    class="lock-config-card__name"
                    value={props.setup.name.clone()}
                    placeholder={format!("Lock {}", index + 1)}
                    onchange={on_name}
                />
            </div>
            <div class="lock-config-card__body">
                <label class="form-field">
                    { "Wheels:" }
                    <select class="form-field__select" onchange={on_digit_count}>
                        { for (MIN_DIGIT_COUNT..=MAX_DIGIT_COUNT).map(|n| html! {
                            <option value={n.to_string()} selected={props.setup.digit_count == n}>
                                { format!("{n} wheels") }
                            </option>
                        }) }
                    </select>
                </label>
                <fieldset class="form-field form-field--classes">
                    <legend>{ "Characters:" }</legend>
                    <label class="checkbox">
                        <input type="checkbox" checked={props.setup.classes.numbers} onchange={on_numbers} />
                        { "0-9" }
                    </label>
                    <label class="checkbox">
                        <input type="checkbox" checked={props.setup.classes.letters} onchange={on_letters} />
                        { "A-Z" }
                    </label>
                    <label class="checkbox">
                        <input type="checkbox" checked={props.setup.classes.symbols} onchange={on_symbols} />
                        { "!@#$" }
                    </label>
                </fieldset>
                <label class="form-field">
                    { "Secret combination:" }
                    <div class="combination-row">
                        <input
                            type="text"
                            class="combination-row__input"
                            value={props.setup.combination.clone()}
                            placeholder="Blank = random"
                            maxlength={props.setup.digit_count.to_string()}
                            onchange={on_combination}
                        />
                        <button type="button" class="combination-row__random" title="Random combination" onclick={on_random}>
                            { "🎲" }
                        </button>
                    </div>
                </label>
            </div>
        </div>
    }
}
