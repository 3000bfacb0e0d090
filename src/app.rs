//! Lunch Roulette Frontend App
//!
//! Main application component: wheel on the left, option management on
//! the right.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{AddOptionForm, NoticeBar, OptionList, WheelCanvas};
use crate::context::AppContext;
use crate::store::{store_notify, store_set_options, AppState, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::default());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new((reload_trigger, set_reload_trigger)));

    // Initial load, and one full re-list per successful mutation.
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        web_sys::console::log_1(&format!("[APP] Loading options, trigger={}", trigger).into());
        spawn_local(async move {
            match api::list().await {
                Ok(options) => {
                    web_sys::console::log_1(
                        &format!("[APP] Loaded {} options", options.len()).into(),
                    );
                    store_set_options(&store, options);
                }
                Err(e) => {
                    web_sys::console::log_1(&format!("[APP] Load failed: {}", e).into());
                    // Fall back to the placeholder wheel; the app stays
                    // interactive.
                    store_set_options(&store, Vec::new());
                    store_notify(&store, "Could not load options from the sheet.", true);
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            <NoticeBar />

            <main class="wheel-column">
                <h1>"Lunch Roulette"</h1>
                <WheelCanvas />
            </main>

            <aside class="options-column">
                <h2>"Options"</h2>
                <AddOptionForm />
                <OptionList />
            </aside>
        </div>
    }
}
