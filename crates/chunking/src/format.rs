use std::fmt::Write;

use crate::time::ms_to_clock;
use crate::types::Chunk;

/// Render the chunk list as the transcript block of the model prompt.
///
/// Pure function of the chunk list, byte-stable for stable input. The
/// `[CHUNK_n]` tags are the contract with the model: cited moments must
/// reference them literally, and the resolver only accepts ids that were
/// emitted here.
pub fn format_chunks(chunks: &[Chunk]) -> String {
    let mut out = String::new();

    out.push_str("# TIMESTAMPED TRANSCRIPT (CHUNKED)\n\n");
    out.push_str("Below is the debate speech divided into CHUNKS with timestamps.\n");
    out.push_str("Each chunk represents a semantic section (~25-50 seconds for precise feedback).\n\n");
    out.push_str("---\n\n");

    for chunk in chunks {
        let _ = writeln!(
            out,
            "[CHUNK_{}] [{} - {}] {}",
            chunk.chunk_id,
            ms_to_clock(chunk.start_ms),
            ms_to_clock(chunk.end_ms),
            chunk.label,
        );
        let _ = writeln!(out, "\"{}\"\n", chunk.text);
    }

    out.push_str("---\n\n");
    let _ = writeln!(out, "Total chunks: {}", chunks.len());
    out.push_str("When citing feedback moments, reference CHUNK_ID (e.g., CHUNK_5)\n");

    out
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    fn chunk(chunk_id: u32, label: &str, start_ms: i64, end_ms: i64, text: &str) -> Chunk {
        Chunk {
            chunk_id,
            label: label.to_string(),
            start_ms,
            end_ms,
            text: text.to_string(),
            word_count: text.split_whitespace().count(),
        }
    }

    #[test]
    fn golden_render() {
        let chunks = vec![
            chunk(0, "Hook & Opening", 0, 35_000, "we begin with a story"),
            chunk(1, "Model/Setup", 35_000, 71_500, "our model is simple"),
        ];

        let expected = indoc! {r#"
            # TIMESTAMPED TRANSCRIPT (CHUNKED)

            Below is the debate speech divided into CHUNKS with timestamps.
            Each chunk represents a semantic section (~25-50 seconds for precise feedback).

            ---

            [CHUNK_0] [00:00 - 00:35] Hook & Opening
            "we begin with a story"

            [CHUNK_1] [00:35 - 01:11] Model/Setup
            "our model is simple"

            ---

            Total chunks: 2
            When citing feedback moments, reference CHUNK_ID (e.g., CHUNK_5)
        "#};
        assert_eq!(format_chunks(&chunks), expected);
    }

    #[test]
    fn empty_chunk_list_still_renders_the_frame() {
        let rendered = format_chunks(&[]);
        assert!(rendered.contains("Total chunks: 0"));
        assert!(!rendered.contains("[CHUNK_"));
    }

    #[test]
    fn render_is_deterministic() {
        let chunks = vec![chunk(0, "Hook & Opening", 0, 10_000, "hello there")];
        assert_eq!(format_chunks(&chunks), format_chunks(&chunks));
    }
}
