mod postgres;

pub use postgres::{DatabaseEnv, PostgresWordStore};

use std::future::Future;

use rostrum_chunking::Word;

pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

/// Read-only access to the persisted word stream of a transcript.
///
/// Implementations perform exactly one read and no mutation. An empty
/// result is a valid degenerate case: callers decide whether an empty
/// stream is acceptable for their operation, not the store.
pub trait WordStore: Send + Sync {
    /// Fetch the ordered word sequence for a transcript, optionally
    /// filtered to a single diarized speaker. Words come back in
    /// recognition order, re-indexed to be contiguous from zero within
    /// the returned (possibly filtered) sequence.
    fn list_words(
        &self,
        transcript_id: i64,
        speaker: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Word>, StoreError>> + Send;
}
