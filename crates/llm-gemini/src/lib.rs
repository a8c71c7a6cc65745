mod client;
mod error;
mod keys;

pub use client::{GeminiClient, GeminiEnv, Generation, Usage};
pub use error::Error;
pub use keys::KeyRing;
