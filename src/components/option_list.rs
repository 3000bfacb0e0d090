//! Option List Component
//!
//! Plain list view of the current options with per-item delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::store::{
    mutation_follow_up, store_notify, use_app_store, AppStateStoreFields, MutationFollowUp,
};

/// List of current options, mirroring the wheel's segment order
#[component]
pub fn OptionList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let delete_option = move |name: String| {
        spawn_local(async move {
            match mutation_follow_up(api::delete(&name).await, "Failed to delete the option.") {
                MutationFollowUp::ReloadOnce => ctx.reload(),
                MutationFollowUp::Notify { user_text, detail } => {
                    web_sys::console::log_1(&format!("[DELETE] failed: {}", detail).into());
                    store_notify(&store, user_text, true);
                }
            }
        });
    };

    view! {
        <ul class="option-list">
            <Show when=move || store.options().get().is_empty()>
                <li class="option-list-empty">"No options yet."</li>
            </Show>
            <For
                each=move || store.options().get()
                key=|name| name.clone()
                children=move |name| {
                    let delete_name = name.clone();
                    view! {
                        <li class="option-item">
                            <span class="option-name">{name.clone()}</span>
                            <DeleteConfirmButton
                                button_class="delete-btn"
                                on_confirm=move |_| delete_option(delete_name.clone())
                            />
                        </li>
                    }
                }
            />
        </ul>
    }
}
