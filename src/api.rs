//! Option Store Client
//!
//! Frontend bindings to the spreadsheet-backed option store: one fixed
//! endpoint, GET to list and POST to mutate, a `{status, data|message}`
//! envelope either way. The store is the sole source of truth; callers
//! re-list after every successful mutation instead of patching locally.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::{Envelope, Mutation};

/// Default Apps Script deployment. Override at build time with
/// `LUNCH_STORE_URL` to point at your own sheet.
const DEFAULT_SCRIPT_URL: &str =
    "https://script.google.com/macros/s/REPLACE_WITH_DEPLOYMENT_ID/exec";

pub fn script_url() -> &'static str {
    option_env!("LUNCH_STORE_URL").unwrap_or(DEFAULT_SCRIPT_URL)
}

/// Fetch the full option list.
pub async fn list() -> Result<Vec<String>, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    let envelope = send(&opts).await?;
    envelope.into_options()
}

/// Append one option. Duplicate and empty-name checks are the form's
/// job and happen before any network traffic.
pub async fn add(name: &str) -> Result<(), String> {
    mutate(Mutation { action: "add", name }).await
}

/// Remove one option by exact text match.
pub async fn delete(name: &str) -> Result<(), String> {
    mutate(Mutation { action: "delete", name }).await
}

async fn mutate(mutation: Mutation<'_>) -> Result<(), String> {
    let body = serde_json::to_string(&mutation).map_err(|e| e.to_string())?;
    let opts = RequestInit::new();
    opts.set_method("POST");
    // Plain string body, no content-type header: Apps Script rejects
    // preflighted requests, so the original client sends it this way too.
    opts.set_body(&JsValue::from_str(&body));
    let envelope = send(&opts).await?;
    envelope.into_options().map(|_| ())
}

async fn send(opts: &RequestInit) -> Result<Envelope, String> {
    let request = Request::new_with_str_and_init(script_url(), opts).map_err(js_err)?;
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    if !response.ok() {
        return Err(format!("HTTP error {}", response.status()));
    }
    let json = JsFuture::from(response.json().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

fn js_err(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}
