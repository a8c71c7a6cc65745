use std::future::Future;
use std::pin::Pin;

use rostrum_llm_gemini::GeminiClient;

pub type ModelError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Async contract for the model call at the back of the pipeline: prompt
/// text in, the model's raw JSON text out.
///
/// The pipeline never inspects the prompt or retries here; one request per
/// pass, and the caller's queue owns retry/backoff policy.
///
/// # Object safety
///
/// Object-safe via the explicit `BoxFuture` return type. Tests use a
/// canned implementation and never touch the network.
pub trait FeedbackModel: Send + Sync {
    fn generate<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, ModelError>>;
}

impl FeedbackModel for GeminiClient {
    fn generate<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, ModelError>> {
        Box::pin(async move {
            let generation = self.generate_json(prompt).await?;
            Ok(generation.text)
        })
    }
}
