pub mod gemini;
pub mod openai;
pub mod prompts;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ── Types ─────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiRequest {
    pub system: String,
    pub prompt: String,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiResponse {
    pub text: String,
    pub provider: String,
    pub model: String,
}

#[derive(Debug)]
pub struct AiError(pub String);

impl std::fmt::Display for AiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Provider Enum ─────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
enum Provider {
    Gemini,
    OpenAi,
}

impl Provider {
    fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "gemini" => Some(Self::Gemini),
            "openai" => Some(Self::OpenAi),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::OpenAi => "openai",
        }
    }
}

// ── Public API ────────────────────────────────────────

/// Send a request through the failover chain. Returns the first successful response.
pub fn complete(settings: &HashMap<String, String>, req: &AiRequest) -> Result<AiResponse, AiError> {
    let chain_str = settings
        .get("ai_failover_chain")
        .cloned()
        .unwrap_or_else(|| "gemini,openai".to_string());

    let chain: Vec<Provider> = chain_str
        .split(',')
        .filter_map(Provider::from_str)
        .collect();

    if chain.is_empty() {
        return Err(AiError(
            "No AI providers configured in failover chain".into(),
        ));
    }

    let mut last_error = String::new();

    for provider in &chain {
        // Skip disabled providers
        let enabled_key = format!("ai_{}_enabled", provider.name());
        if settings.get(&enabled_key).map(|v| v.as_str()) != Some("true") {
            continue;
        }

        match call_provider(provider, settings, req) {
            Ok(resp) => return Ok(resp),
            Err(e) => {
                log::warn!("AI provider {} failed: {}", provider.name(), e.0);
                last_error = e.0;
            }
        }
    }

    Err(AiError(format!(
        "All AI providers failed. Last error: {}",
        last_error
    )))
}

/// Check if any AI provider is enabled
pub fn is_enabled(settings: &HashMap<String, String>) -> bool {
    ["gemini", "openai"].iter().any(|p| {
        settings
            .get(&format!("ai_{}_enabled", p))
            .map(|v| v.as_str())
            == Some("true")
    })
}

// ── Provider Dispatch ─────────────────────────────────

fn call_provider(
    provider: &Provider,
    settings: &HashMap<String, String>,
    req: &AiRequest,
) -> Result<AiResponse, AiError> {
    match provider {
        Provider::Gemini => gemini::call(settings, req),
        Provider::OpenAi => openai::call(settings, req),
    }
}
