//! Notice Bar Component
//!
//! One-shot notification banner for spin results and failures,
//! replacing the original client's alert() calls.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::store::{store_clear_notice, use_app_store, AppStateStoreFields};

/// How long a notice stays up before auto-dismissing.
const NOTICE_MS: u32 = 4000;

/// Banner showing the current notice, if any
#[component]
pub fn NoticeBar() -> impl IntoView {
    let store = use_app_store();

    // Pending auto-dismiss timer; replaced (and thereby cancelled) when
    // a new notice arrives before the old one expires.
    let pending: StoredValue<Option<Timeout>, LocalStorage> = StoredValue::new_local(None);

    Effect::new(move |_| {
        let has_notice = store.notice().get().is_some();
        pending.update_value(|t| {
            t.take();
        });
        if has_notice {
            let timeout = Timeout::new(NOTICE_MS, move || store_clear_notice(&store));
            pending.set_value(Some(timeout));
        }
    });

    view! {
        {move || store.notice().get().map(|notice| {
            let class = if notice.error { "notice-bar error" } else { "notice-bar" };
            view! {
                <div class=class>
                    <span class="notice-text">{notice.text}</span>
                    <button class="notice-dismiss" on:click=move |_| store_clear_notice(&store)>
                        "×"
                    </button>
                </div>
            }
        })}
    }
}
