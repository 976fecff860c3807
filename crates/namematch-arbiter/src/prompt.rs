//! Helpers for arbiters backed by a text-completion model: evidence to
//! prompt, and a tolerant parser for the JSON verdict that comes back.

use namematch_core::errors::ArbiterError;
use namematch_core::models::{ArbiterDecision, ArbiterEvidence, ArbiterVerdict};
use serde_json::Value;

const INSTRUCTIONS: &str = "You are a company name matching expert. Determine if these two \
entries refer to the SAME company or DIFFERENT companies.";

const RESPONSE_FORMAT: &str = "Respond with a JSON object:\n\
{\"decision\": \"SAME|DIFFERENT|UNSURE\", \"confidence\": 0.0-1.0, \"reason\": \"short_label\"}\n\
Only output the JSON object, nothing else.";

/// Reason recorded when a reply cannot be read as a verdict.
pub const PARSE_ERROR_REASON: &str = "parse_error";

pub fn render_prompt(evidence: &ArbiterEvidence) -> Result<String, ArbiterError> {
    let body = serde_json::to_string_pretty(evidence).map_err(|e| ArbiterError::CallFailed {
        reason: format!("evidence serialization: {e}"),
    })?;
    Ok(format!("{INSTRUCTIONS}\n\nEvidence:\n{body}\n\n{RESPONSE_FORMAT}"))
}

/// Parse a model reply into a verdict. Accepts a bare object, an object
/// inside a fenced code block, or an object surrounded by prose. Anything
/// unreadable becomes UNSURE with reason `parse_error`.
pub fn parse_verdict(raw: &str) -> ArbiterVerdict {
    let Some(object) = extract_object(raw) else {
        return ArbiterVerdict::unsure(PARSE_ERROR_REASON);
    };
    let Ok(Value::Object(map)) = serde_json::from_str::<Value>(object) else {
        return ArbiterVerdict::unsure(PARSE_ERROR_REASON);
    };

    let decision = map
        .get("decision")
        .and_then(Value::as_str)
        .map(ArbiterDecision::parse_lenient)
        .unwrap_or(ArbiterDecision::Unsure);
    let confidence = match map.get("confidence") {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    };
    let reason = map
        .get("reason")
        .and_then(Value::as_str)
        .unwrap_or_default();

    ArbiterVerdict::new(decision, confidence, reason)
}

fn extract_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (start < end).then(|| &raw[start..=end])
}
