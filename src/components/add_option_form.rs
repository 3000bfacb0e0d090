//! Add Option Form Component
//!
//! Form for appending a new option to the remote store.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::AppContext;
use crate::store::{
    has_option, mutation_follow_up, store_notify, use_app_store, AppStateStoreFields,
    MutationFollowUp,
};

/// Why a submitted name was rejected without touching the network.
#[derive(Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Blank after trimming; ignored silently.
    Empty,
    Duplicate,
}

/// Trim and validate a candidate name against the current list. Only a
/// name that passes here is allowed to become a network request.
pub fn validate_new_option(options: &[String], raw: &str) -> Result<String, Rejection> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(Rejection::Empty);
    }
    if has_option(options, name) {
        return Err(Rejection::Duplicate);
    }
    Ok(name.to_string())
}

/// Form for adding a new lunch option
#[component]
pub fn AddOptionForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (new_name, set_new_name) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let add_option = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let name = match validate_new_option(&store.options().get(), &new_name.get()) {
            Ok(name) => name,
            Err(Rejection::Empty) => return,
            Err(Rejection::Duplicate) => {
                store_notify(&store, "That option already exists!", true);
                return;
            }
        };

        set_busy.set(true);
        spawn_local(async move {
            match mutation_follow_up(api::add(&name).await, "Failed to add the option.") {
                MutationFollowUp::ReloadOnce => {
                    set_new_name.set(String::new());
                    ctx.reload();
                }
                MutationFollowUp::Notify { user_text, detail } => {
                    web_sys::console::log_1(&format!("[ADD] failed: {}", detail).into());
                    store_notify(&store, user_text, true);
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <form class="add-option-form" on:submit=add_option>
            <input
                type="text"
                placeholder="Add a lunch option..."
                prop:value=move || new_name.get()
                prop:disabled=move || busy.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_new_name.set(input.value());
                }
            />
            <button type="submit" prop:disabled=move || busy.get()>
                {move || if busy.get() { "Adding..." } else { "Add" }}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_blank_input_rejected_silently() {
        assert_eq!(validate_new_option(&[], ""), Err(Rejection::Empty));
        assert_eq!(validate_new_option(&[], "   "), Err(Rejection::Empty));
    }

    #[test]
    fn test_duplicate_rejected_before_network() {
        let options = opts(&["Ramen", "Curry"]);
        assert_eq!(validate_new_option(&options, "Ramen"), Err(Rejection::Duplicate));
        // Trimmed before the comparison, like the original client.
        assert_eq!(validate_new_option(&options, "  Ramen  "), Err(Rejection::Duplicate));
    }

    #[test]
    fn test_fresh_name_passes_trimmed() {
        let options = opts(&["Ramen"]);
        assert_eq!(validate_new_option(&options, " Sushi "), Ok("Sushi".to_string()));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let options = opts(&["Ramen"]);
        assert_eq!(validate_new_option(&options, "ramen"), Ok("ramen".to_string()));
    }
}
