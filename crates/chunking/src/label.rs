/// Assigns the human-readable position tag carried on each chunk.
///
/// The default is positional arithmetic, blind to content. The seam exists
/// so a content-aware strategy can be swapped in without touching the
/// chunker; implementations receive the chunk's id, stream-local start and
/// joined text.
pub trait LabelStrategy: Send + Sync {
    fn label(&self, chunk_id: u32, start_ms: i64, text: &str) -> String;
}

/// Anything before this mark that isn't the opening chunk reads as
/// model/setup material.
const SETUP_WINDOW_MS: i64 = 120_000;

/// Position-based labels: the opening chunk, setup inside the first two
/// minutes, then numbered arguments at roughly two chunks apiece.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalLabels;

impl LabelStrategy for PositionalLabels {
    fn label(&self, chunk_id: u32, start_ms: i64, _text: &str) -> String {
        if chunk_id == 0 {
            "Hook & Opening".to_string()
        } else if start_ms < SETUP_WINDOW_MS {
            "Model/Setup".to_string()
        } else {
            let n = (chunk_id - 1) / 2 + 1;
            format!("Argument {n}")
        }
    }
}
