//! Cancellable repeating tick source over `setInterval`.
//!
//! The session's countdown is the only unsolicited input in the game, so it
//! gets a real handle: `stop` is idempotent, dropping the handle cancels the
//! interval, and once cancelled no further callback can fire.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::dom::{self, window};

pub const SECOND_MS: i32 = 1000;

pub struct Ticker {
    id: Option<i32>,
    // Held so the browser-side callback stays alive while scheduled.
    _callback: Closure<dyn FnMut()>,
}

impl Ticker {
    /// Schedule `tick` every `period_ms` milliseconds. Returns `None` when
    /// the browser refuses to schedule the interval.
    #[must_use]
    pub fn start<F: FnMut() + 'static>(period_ms: i32, tick: F) -> Option<Self> {
        let callback = Closure::<dyn FnMut()>::new(tick);
        match window()
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                period_ms,
            ) {
            Ok(id) => Some(Self {
                id: Some(id),
                _callback: callback,
            }),
            Err(err) => {
                dom::console_error(&format!(
                    "failed to schedule interval: {}",
                    dom::js_error_message(&err)
                ));
                None
            }
        }
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.id.is_some()
    }

    /// Cancel the interval. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if let Some(id) = self.id.take() {
            window().clear_interval_with_handle(id);
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
