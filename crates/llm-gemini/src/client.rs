use std::time::{Duration, Instant};

use crate::{Error, KeyRing};

/// Generation must finish inside this window; the upstream model can spend
/// tens of seconds on a long analysis pass.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

const TEMPERATURE: f64 = 0.3;
const MAX_OUTPUT_TOKENS: u32 = 4096;

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

#[derive(Clone, serde::Deserialize)]
pub struct GeminiEnv {
    /// Comma-separated; one key is fine, more get rotated round-robin.
    pub gemini_api_keys: String,
    #[serde(default = "default_model")]
    pub gemini_model: String,
    #[serde(default = "default_base_url")]
    pub gemini_base_url: String,
}

impl GeminiEnv {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }
}

/// One JSON-mode generation: the raw response text plus accounting.
#[derive(Debug, Clone)]
pub struct Generation {
    pub text: String,
    pub usage: Option<Usage>,
    pub cost_usd: f64,
}

#[derive(Debug, Clone, Copy, Default, serde::Serialize)]
pub struct Usage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}

pub struct GeminiClient {
    http: reqwest::Client,
    keys: KeyRing,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(env: &GeminiEnv) -> Result<Self, Error> {
        let keys = KeyRing::from_joined(&env.gemini_api_keys)?;
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            keys,
            model: env.gemini_model.clone(),
            base_url: env.gemini_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// One `generateContent` call in JSON mode: prompt in, the model's raw
    /// JSON text out. No retries here; retry/backoff belongs to the
    /// caller's queue policy.
    pub async fn generate_json(&self, prompt: &str) -> Result<Generation, Error> {
        let started = Instant::now();
        let url = format!(
            "{}/v1/models/{}:generateContent",
            self.base_url, self.model
        );

        let body = serde_json::json!({
            "contents": [
                { "role": "user", "parts": [{ "text": prompt }] }
            ],
            "generationConfig": {
                "responseMimeType": "application/json",
                "temperature": TEMPERATURE,
                "maxOutputTokens": MAX_OUTPUT_TOKENS,
            }
        });

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", self.keys.next_key())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(model = %self.model, status = status.as_u16(), "generateContent failed");
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|t| !t.is_empty())
            .ok_or(Error::EmptyResponse)?;

        let usage = parsed.usage_metadata.map(|u| Usage {
            prompt_tokens: u.prompt_token_count,
            completion_tokens: u.candidates_token_count,
            total_tokens: u.total_token_count,
        });

        tracing::info!(
            model = %self.model,
            processing_time_ms = started.elapsed().as_millis() as u64,
            tokens = usage.map_or(0, |u| u.total_tokens),
            "gemini response received"
        );

        Ok(Generation {
            text,
            cost_usd: estimate_cost_usd(&self.model, usage.as_ref()),
            usage,
        })
    }
}

/// Rough USD estimate from published per-token rates: flash-tier models
/// ride the free tier, pro-tier models bill about $0.01 per 1K tokens.
fn estimate_cost_usd(model: &str, usage: Option<&Usage>) -> f64 {
    let Some(usage) = usage else { return 0.0 };
    if model.contains("pro") {
        (usage.total_tokens as f64 / 1000.0) * 0.01
    } else {
        0.0
    }
}

#[derive(serde::Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(serde::Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(serde::Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(serde::Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u64,
    #[serde(default)]
    candidates_token_count: u64,
    #[serde(default)]
    total_token_count: u64,
}
