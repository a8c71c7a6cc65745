use crate::time::ms_to_clock;
use crate::types::Chunk;

/// Longest transcript quote carried on a playable moment.
const QUOTE_MAX_CHARS: usize = 200;

/// One model-cited annotation as it arrives: a chunk reference plus
/// authored content this core treats as opaque.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CitedMoment {
    pub chunk_id: u32,
    pub category: String,
    pub severity: String,
    pub issue: String,
    pub recommendation: String,
}

/// A cited moment resolved against the pass's chunk list.
///
/// `start_seconds`/`end_seconds` are absolute recording offsets for audio
/// seeking; `start_time`/`end_time` stay in the speaker's own time base for
/// on-screen display. The split lets a speaker-specific view say "this
/// happened at 2:15 in your speech" while the player seeks the correct
/// position in a recording that contains other speakers too.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PlayableMoment {
    pub chunk_id: u32,
    pub start_seconds: i64,
    pub end_seconds: i64,
    pub start_time: String,
    pub end_time: String,
    pub category: String,
    pub severity: String,
    pub what_they_said: String,
    pub issue: String,
    pub recommendation: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("cited chunk_id {0} does not exist in this pass")]
    UnknownChunk(u32),
}

/// Resolve model-cited moments into playable time ranges.
///
/// `offset_seconds` is the pass's speaker offset (zero when the word stream
/// was not speaker-filtered). A reference to a chunk that was never emitted
/// fails the whole pass: a wrong timestamp on a playable moment is worse
/// than no moment, so nothing is dropped or substituted.
pub fn resolve_moments(
    chunks: &[Chunk],
    cited: Vec<CitedMoment>,
    offset_seconds: i64,
) -> Result<Vec<PlayableMoment>, ResolveError> {
    cited
        .into_iter()
        .map(|m| {
            let chunk = chunks
                .iter()
                .find(|c| c.chunk_id == m.chunk_id)
                .ok_or(ResolveError::UnknownChunk(m.chunk_id))?;

            // Floor the start and ceil the end so the playable range is
            // never narrower than the chunk it cites.
            Ok(PlayableMoment {
                chunk_id: m.chunk_id,
                start_seconds: chunk.start_ms / 1000 + offset_seconds,
                end_seconds: (chunk.end_ms + 999) / 1000 + offset_seconds,
                start_time: ms_to_clock(chunk.start_ms),
                end_time: ms_to_clock(chunk.end_ms),
                category: m.category,
                severity: m.severity,
                what_they_said: truncate_quote(&chunk.text),
                issue: m.issue,
                recommendation: m.recommendation,
            })
        })
        .collect()
}

fn truncate_quote(text: &str) -> String {
    if text.chars().count() <= QUOTE_MAX_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(QUOTE_MAX_CHARS - 3).collect();
    format!("{cut}...")
}
