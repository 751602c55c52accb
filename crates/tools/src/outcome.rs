// The uniform result envelope every tool reports through.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Outcome of one tool invocation.
///
/// Exactly one of the payload (`Success`) or the error message (`Failure`)
/// exists. The serialized form is `{"success": true, "data": ...}` or
/// `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutcome {
    Success { data: Value },
    Failure { error: String },
}

impl ToolOutcome {
    /// Successful envelope around any serializable payload.
    pub fn success(data: impl Serialize) -> Self {
        match serde_json::to_value(data) {
            Ok(data) => Self::Success { data },
            Err(err) => Self::Failure {
                error: format!("failed to encode tool payload: {err}"),
            },
        }
    }

    /// Failed envelope with a message. An empty message is replaced so the
    /// error side is always non-empty.
    pub fn failure(error: impl Into<String>) -> Self {
        let error = error.into();
        Self::Failure {
            error: if error.is_empty() {
                "unspecified tool error".to_string()
            } else {
                error
            },
        }
    }

    /// The single place a fallible tool result becomes an envelope. The
    /// error chain is flattened into one message.
    pub fn from_result(result: anyhow::Result<Value>) -> Self {
        match result {
            Ok(data) => Self::Success { data },
            Err(err) => Self::failure(format!("{err:#}")),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn data(&self) -> Option<&Value> {
        match self {
            Self::Success { data } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error } => Some(error),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl Serialize for ToolOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let envelope = match self {
            Self::Success { data } => Envelope {
                success: true,
                data: Some(data.clone()),
                error: None,
            },
            Self::Failure { error } => Envelope {
                success: false,
                data: None,
                error: Some(error.clone()),
            },
        };
        envelope.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ToolOutcome {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let envelope = Envelope::deserialize(deserializer)?;
        match (envelope.success, envelope.data, envelope.error) {
            (true, Some(data), None) => Ok(Self::Success { data }),
            (false, None, Some(error)) => Ok(Self::Failure { error }),
            _ => Err(D::Error::custom(
                "envelope must carry exactly one of data or error, matching success",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use serde_json::json;

    #[test]
    fn success_serializes_with_data_only() {
        let outcome = ToolOutcome::success(json!({ "id": "p-1" }));
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({ "success": true, "data": { "id": "p-1" } })
        );
    }

    #[test]
    fn failure_serializes_with_error_only() {
        let outcome = ToolOutcome::failure("boom");
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({ "success": false, "error": "boom" })
        );
    }

    #[test]
    fn payload_passes_through_unchanged() {
        let payload = json!({
            "object": "page",
            "id": "p-1",
            "properties": { "title": { "title": [{ "plain_text": "Hi" }] } }
        });
        let outcome = ToolOutcome::from_result(Ok(payload.clone()));
        assert_eq!(outcome.data(), Some(&payload));
    }

    #[test]
    fn error_chain_is_flattened_into_message() {
        let result: anyhow::Result<Value> = Err(anyhow::anyhow!("connection refused"))
            .context("retrieve_page failed");
        let outcome = ToolOutcome::from_result(result);

        let error = outcome.error().unwrap();
        assert!(error.contains("retrieve_page failed"));
        assert!(error.contains("connection refused"));
    }

    #[test]
    fn failure_message_is_never_empty() {
        let outcome = ToolOutcome::failure("");
        assert!(!outcome.error().unwrap().is_empty());
    }

    #[test]
    fn round_trips_both_variants() {
        for outcome in [
            ToolOutcome::success(json!([1, 2, 3])),
            ToolOutcome::failure("nope"),
        ] {
            let value = serde_json::to_value(&outcome).unwrap();
            let back: ToolOutcome = serde_json::from_value(value).unwrap();
            assert_eq!(back, outcome);
        }
    }

    #[test]
    fn rejects_malformed_envelopes() {
        for raw in [
            json!({ "success": true, "error": "x" }),
            json!({ "success": false, "data": {} }),
            json!({ "success": true }),
            json!({ "success": false }),
            json!({ "success": true, "data": {}, "error": "x" }),
        ] {
            assert!(serde_json::from_value::<ToolOutcome>(raw).is_err());
        }
    }
}
