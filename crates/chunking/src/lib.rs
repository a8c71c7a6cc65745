pub mod chunker;
pub mod format;
pub mod label;
pub mod moment;
pub mod stream;
pub mod time;
pub mod types;

pub use chunker::{MAX_DURATION_MS, MIN_DURATION_MS, TARGET_DURATION_MS, chunk_words, chunk_words_with};
pub use format::format_chunks;
pub use label::{LabelStrategy, PositionalLabels};
pub use moment::{CitedMoment, PlayableMoment, ResolveError, resolve_moments};
pub use stream::{StreamError, WordStream};
pub use types::{Chunk, Word};
