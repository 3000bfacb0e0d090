//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

/// Idle vs spinning; the only state machine in the app.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinPhase {
    #[default]
    Idle,
    Spinning,
}

/// One-shot user-facing notification (winner announcement or failure).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notice {
    pub text: String,
    pub error: bool,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current option list, in store order; segment i on the wheel is
    /// options[i].
    pub options: Vec<String>,
    /// Guards single-flight spinning.
    pub phase: SpinPhase,
    /// Pending notification, if any; cleared by the notice bar.
    pub notice: Option<Notice>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the option list after a re-fetch
pub fn store_set_options(store: &AppStore, options: Vec<String>) {
    store.options().set(options);
}

/// Surface a one-shot notice
pub fn store_notify(store: &AppStore, text: impl Into<String>, error: bool) {
    store.notice().set(Some(Notice { text: text.into(), error }));
}

/// Dismiss the current notice
pub fn store_clear_notice(store: &AppStore) {
    store.notice().set(None);
}

/// What the UI does after a mutation attempt has resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MutationFollowUp {
    /// Exactly one full re-list; the store is the sole source of truth.
    ReloadOnce,
    /// Surface the failure; the list stays untouched.
    Notify { user_text: String, detail: String },
}

/// Map a mutation result onto its follow-up. Success always means one
/// reload, never a local patch; failure means one notice with
/// `failure_text` and the raw error kept for the console.
pub fn mutation_follow_up(result: Result<(), String>, failure_text: &str) -> MutationFollowUp {
    match result {
        Ok(()) => MutationFollowUp::ReloadOnce,
        Err(detail) => MutationFollowUp::Notify {
            user_text: failure_text.to_string(),
            detail,
        },
    }
}

/// Exact-match membership test used by the add form's duplicate guard.
pub fn has_option(options: &[String], name: &str) -> bool {
    options.iter().any(|o| o == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_option_exact_match_only() {
        let options = vec!["Ramen".to_string(), "Curry".to_string()];
        assert!(has_option(&options, "Ramen"));
        // Case-sensitive and whitespace-sensitive by design.
        assert!(!has_option(&options, "ramen"));
        assert!(!has_option(&options, "Ramen "));
        assert!(!has_option(&options, "Sushi"));
    }

    #[test]
    fn test_has_option_empty_list() {
        assert!(!has_option(&[], "anything"));
    }

    #[test]
    fn test_successful_mutation_reloads_exactly_once() {
        // One success maps onto exactly one ReloadOnce; the handlers
        // bump the reload trigger once per ReloadOnce and never
        // otherwise.
        assert_eq!(mutation_follow_up(Ok(()), "unused"), MutationFollowUp::ReloadOnce);
    }

    #[test]
    fn test_failed_mutation_notifies_without_reload() {
        let follow_up = mutation_follow_up(Err("HTTP error 500".to_string()), "Failed to add.");
        assert_eq!(
            follow_up,
            MutationFollowUp::Notify {
                user_text: "Failed to add.".to_string(),
                detail: "HTTP error 500".to_string(),
            }
        );
    }
}
