use crate::constants::{NO_PEER_RESPONDED, RESULT_HEADER};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a single peer's majority resolution call, together with the
/// peer that produced it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolutionOutcome {
    pub peer: String,
    pub body: Value,
    pub replaced: bool,
}

impl ResolutionOutcome {
    pub fn new(peer: String, body: Value, marker_phrase: &str) -> Self {
        let replaced = is_chain_replaced(&body, marker_phrase);
        Self {
            peer,
            body,
            replaced,
        }
    }
}

/// Tells whether a peer swapped its chain during resolution.
///
/// A top-level boolean `replaced` field wins when the node sends one, even
/// over a marker phrase found in the message: `{"replaced": false, ...}` is
/// never a replacement. Without that field the serialized body is searched
/// for the marker phrase.
pub fn is_chain_replaced(body: &Value, marker_phrase: &str) -> bool {
    if let Some(replaced) = body.get("replaced").and_then(Value::as_bool) {
        return replaced;
    }
    if marker_phrase.is_empty() {
        return false;
    }
    body.to_string().contains(marker_phrase)
}

/// Text written to the display surface at the end of a cycle.
pub fn render(outcome: Option<&ResolutionOutcome>) -> String {
    let rendered = match outcome {
        Some(outcome) => serde_json::to_string_pretty(&outcome.body)
            .unwrap_or_else(|_| outcome.body.to_string()),
        None => NO_PEER_RESPONDED.to_string(),
    };
    format!("{}\n{}", RESULT_HEADER, rendered)
}
