use serde_json::{Map, Value};

// ── Result Field Conventions ──────────────────────────

/// Present on every fallback result. Its absence means the value is
/// authoritative model output.
pub const ERROR_KEY: &str = "error";
/// Carries the original raw model output on fallback results.
pub const RAW_RESPONSE_KEY: &str = "rawResponse";
/// Set (to `true`) only on templateless fallback results.
pub const FALLBACK_USED_KEY: &str = "fallbackUsed";

const ERR_PARSE_WITH_TEMPLATE: &str = "AI parsing failed, using fallback data";
const ERR_PARSE: &str = "Failed to parse AI response";
const ERR_INVALID_FORMAT: &str = "Invalid AI response format";

// ── Input Type ────────────────────────────────────────

/// What a text-completion provider actually hands back: parsed JSON on some
/// code paths, raw text on others, nothing at all when the call went sideways.
#[derive(Debug, Clone)]
pub enum RawOutput {
    Structured(Value),
    Text(String),
    Absent,
}

impl From<Value> for RawOutput {
    fn from(v: Value) -> Self {
        RawOutput::Structured(v)
    }
}

impl From<String> for RawOutput {
    fn from(s: String) -> Self {
        RawOutput::Text(s)
    }
}

impl From<&str> for RawOutput {
    fn from(s: &str) -> Self {
        RawOutput::Text(s.to_string())
    }
}

// ── Normalization ─────────────────────────────────────

/// Convert raw model output into a predictable JSON value. Never panics and
/// never returns an error: parse failures are encoded in the returned value
/// as a fallback object carrying an `error` key (see [`is_fallback`]).
///
/// Attempts, in order:
/// 1. a JSON object or array passes through untouched — the provider layer
///    already parsed it, don't second-guess it;
/// 2. text has markdown fences stripped and is parsed directly;
/// 3. the first `{` through the last `}` of the original text is parsed;
/// 4. a fallback object is built from `fallback_template` (or from scratch).
pub fn normalize(raw: RawOutput, fallback_template: Option<&Map<String, Value>>) -> Value {
    match raw {
        RawOutput::Structured(Value::String(text)) | RawOutput::Text(text) => {
            normalize_text(&text, fallback_template)
        }
        RawOutput::Structured(value) if value.is_object() || value.is_array() => value,
        RawOutput::Structured(other) => {
            log::warn!("AI response is neither text nor a JSON container: {}", other);
            build_fallback(ERR_INVALID_FORMAT, other, fallback_template)
        }
        RawOutput::Absent => {
            log::warn!("AI response missing");
            build_fallback(ERR_INVALID_FORMAT, Value::Null, fallback_template)
        }
    }
}

/// True iff `value` is a fallback result rather than parsed model output.
pub fn is_fallback(value: &Value) -> bool {
    value.get(ERROR_KEY).is_some()
}

fn normalize_text(text: &str, fallback_template: Option<&Map<String, Value>>) -> Value {
    log::debug!(
        "AI raw response: {}",
        text.chars().take(500).collect::<String>()
    );

    // Fences are stripped globally, not just at the string boundaries, so a
    // payload containing literal triple backticks gets mangled. Kept as-is:
    // the prompt contract forbids fenced content inside the JSON, and callers
    // depend on the current recovery rate.
    let cleaned = text.replace("```json", "").replace("```", "");
    if let Ok(v) = serde_json::from_str::<Value>(cleaned.trim()) {
        return v;
    }

    // Recover an embedded object from the original, uncleaned text: first '{'
    // through the last '}', greedy, no brace balancing.
    if let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) {
        if start < end {
            if let Ok(v) = serde_json::from_str::<Value>(&text[start..=end]) {
                return v;
            }
        }
    }

    log::warn!(
        "Failed to parse AI response as JSON: {}",
        text.chars().take(300).collect::<String>()
    );
    let message = if fallback_template.is_some() {
        ERR_PARSE_WITH_TEMPLATE
    } else {
        ERR_PARSE
    };
    build_fallback(message, Value::String(text.to_string()), fallback_template)
}

fn build_fallback(
    message: &str,
    raw: Value,
    fallback_template: Option<&Map<String, Value>>,
) -> Value {
    match fallback_template {
        Some(template) => {
            let mut out = template.clone();
            out.insert(ERROR_KEY.to_string(), Value::String(message.to_string()));
            out.insert(RAW_RESPONSE_KEY.to_string(), raw);
            Value::Object(out)
        }
        None => {
            let mut out = Map::new();
            out.insert(ERROR_KEY.to_string(), Value::String(message.to_string()));
            out.insert(RAW_RESPONSE_KEY.to_string(), raw);
            out.insert(FALLBACK_USED_KEY.to_string(), Value::Bool(true));
            Value::Object(out)
        }
    }
}
