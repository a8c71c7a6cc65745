/// One recognized spoken token.
///
/// `start_ms`/`end_ms` are relative to the start of the fetched word stream,
/// which may itself sit anywhere inside a multi-speaker recording (see
/// [`crate::stream::WordStream`] for the offset bookkeeping). `index` is the
/// position in the speaker-filtered sequence, zero-based and contiguous.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Word {
    pub index: i64,
    pub text: String,
    pub start_ms: i64,
    pub end_ms: i64,
    pub confidence: f64,
    pub speaker: Option<String>,
}

/// A contiguous run of words treated as one unit for model review.
///
/// Chunks of one pass are non-overlapping, gap-free over the input, and
/// carry ids exactly `0..N` in output order. A chunk never outlives the
/// pass that produced it.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Chunk {
    pub chunk_id: u32,
    pub label: String,
    pub start_ms: i64,
    pub end_ms: i64,
    pub text: String,
    pub word_count: usize,
}
