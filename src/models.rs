//! Wire Models
//!
//! Data structures matching the option store's JSON envelope.

use serde::{Deserialize, Serialize};

/// Response envelope returned by the option store endpoint.
///
/// Success carries the full option list in `data`; errors carry a
/// human-readable `message`. Mutating calls may omit `data` entirely.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Envelope {
    Success {
        #[serde(default)]
        data: Vec<String>,
    },
    Error { message: String },
}

impl Envelope {
    /// Unwrap the envelope into the option list, turning an application
    /// error into `Err` with the server's message.
    pub fn into_options(self) -> Result<Vec<String>, String> {
        match self {
            Envelope::Success { data } => Ok(data),
            Envelope::Error { message } => Err(message),
        }
    }
}

/// Request body for mutating calls (`{"action":"add","name":...}` etc).
#[derive(Debug, Serialize)]
pub struct Mutation<'a> {
    pub action: &'a str,
    pub name: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success_with_data() {
        let env: Envelope =
            serde_json::from_str(r#"{"status":"success","data":["A","B"]}"#).unwrap();
        assert_eq!(env.into_options().unwrap(), vec!["A", "B"]);
    }

    #[test]
    fn test_parse_success_without_data() {
        // Mutating calls omit `data`; it defaults to empty.
        let env: Envelope = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert_eq!(env.into_options().unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_parse_error_carries_message() {
        let env: Envelope =
            serde_json::from_str(r#"{"status":"error","message":"sheet unavailable"}"#).unwrap();
        assert_eq!(env.into_options().unwrap_err(), "sheet unavailable");
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert!(serde_json::from_str::<Envelope>(r#"{"status":"weird"}"#).is_err());
    }

    #[test]
    fn test_mutation_body_shape() {
        let body = serde_json::to_string(&Mutation { action: "add", name: "Ramen" }).unwrap();
        assert_eq!(body, r#"{"action":"add","name":"Ramen"}"#);
    }
}
