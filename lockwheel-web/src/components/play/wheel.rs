//! One wheel column of a lock. Clicking the upper half steps the wheel
//! back, the lower half forward; the mouse wheel scrolls it either way.

use wasm_bindgen::JsCast;
use yew::prelude::*;

use lockwheel_game::Direction;

/// Fixed rendered height of one character cell; the strip transform and the
/// stylesheet agree on this.
pub const ITEM_HEIGHT_PX: usize = 60;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Alphabet characters in wheel order.
    pub chars: Vec<char>,
    /// Index of the character under the indicator.
    pub value: usize,
    /// Frozen wheels ignore input.
    pub unlocked: bool,
    pub on_rotate: Callback<Direction>,
}

#[function_component(Wheel)]
pub fn wheel(props: &Props) -> Html {
    let len = props.chars.len();

    let on_click = {
        let on_rotate = props.on_rotate.clone();
        let unlocked = props.unlocked;
        Callback::from(move |e: MouseEvent| {
            if unlocked {
                return;
            }
            let Some(target) = e
                .current_target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
            else {
                return;
            };
            let rect = target.get_bounding_client_rect();
            let click_y = f64::from(e.client_y()) - rect.top();
            if click_y < rect.height() / 2.0 {
                on_rotate.emit(Direction::Up);
            } else {
                on_rotate.emit(Direction::Down);
            }
        })
    };

    let on_wheel = {
        let on_rotate = props.on_rotate.clone();
        let unlocked = props.unlocked;
        Callback::from(move |e: WheelEvent| {
            if unlocked {
                return;
            }
            e.prevent_default();
            if e.delta_y() > 0.0 {
                on_rotate.emit(Direction::Down);
            } else {
                on_rotate.emit(Direction::Up);
            }
        })
    };

    // Triple the strip so the visible window always has neighbors to scroll
    // into; the middle copy is the live one.
    let offset = (len + props.value) * ITEM_HEIGHT_PX;
    let strip_style = format!("transform: translateY(-{offset}px);");

    html! {
        <div
            class={classes!("wheel", props.unlocked.then_some("wheel--frozen"))}
            onclick={on_click}
            onwheel={on_wheel}
        >
            <div class="wheel__strip" style={strip_style}>
                { for (0..len * 3).map(|i| {
                    let ch = props.chars[i % len];
                    html! { <div class="wheel__item">{ ch }</div> }
                }) }
            </div>
            <div class="wheel__indicator" aria-hidden="true"></div>
        </div>
    }
}
