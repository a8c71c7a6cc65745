use crate::label::{LabelStrategy, PositionalLabels};
use crate::stream::WordStream;
use crate::types::Chunk;

/// Preferred chunk length. The scan closes a chunk at the first word whose
/// elapsed time reaches this.
pub const TARGET_DURATION_MS: i64 = 35_000;

/// Lower bound on chunk length, kept as policy intent only: short chunks
/// are never merged into a neighbor mid-stream, and the end-of-stream
/// absorb rule is the one place the floor applies implicitly.
pub const MIN_DURATION_MS: i64 = 25_000;

/// Hard ceiling. While `TARGET < MAX` the target always trips first; the
/// ceiling stays as a safety net, and a single word longer than it still
/// becomes its own one-word chunk: the scan cannot subdivide a word.
pub const MAX_DURATION_MS: i64 = 50_000;

/// Partition a word stream into labeled, time-bounded chunks using the
/// default positional labels.
///
/// An empty stream yields an empty chunk list; that is a valid degenerate
/// case, not an error.
pub fn chunk_words(stream: &WordStream) -> Vec<Chunk> {
    chunk_words_with(stream, &PositionalLabels)
}

/// Same as [`chunk_words`] with a caller-supplied label strategy.
pub fn chunk_words_with(stream: &WordStream, labels: &dyn LabelStrategy) -> Vec<Chunk> {
    let words = stream.words();
    let mut chunks: Vec<Chunk> = Vec::new();
    let mut cursor = 0;

    while cursor < words.len() {
        let chunk_start_ms = words[cursor].start_ms;
        let mut end = cursor;

        for i in cursor + 1..words.len() {
            end = i;
            let elapsed_ms = words[i].end_ms - chunk_start_ms;
            if elapsed_ms >= TARGET_DURATION_MS || elapsed_ms >= MAX_DURATION_MS {
                break;
            }
        }
        // When the scan runs off the stream end without tripping a
        // threshold, `end` already sits on the last word: the remainder is
        // absorbed into this chunk rather than left as a fragment.

        let run = &words[cursor..=end];
        let text = run
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let chunk_id = chunks.len() as u32;
        let label = labels.label(chunk_id, chunk_start_ms, &text);

        chunks.push(Chunk {
            chunk_id,
            label,
            start_ms: chunk_start_ms,
            end_ms: run[run.len() - 1].end_ms,
            text,
            word_count: run.len(),
        });

        cursor = end + 1;
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Word;

    fn word(index: i64, start_ms: i64, end_ms: i64) -> Word {
        Word {
            index,
            text: format!("w{index}"),
            start_ms,
            end_ms,
            confidence: 1.0,
            speaker: None,
        }
    }

    /// `count` contiguous words of `step` ms each, starting at 0.
    fn contiguous(count: i64, step: i64) -> WordStream {
        let words = (0..count)
            .map(|i| word(i, i * step, (i + 1) * step))
            .collect();
        WordStream::new(words).unwrap()
    }

    #[test]
    fn empty_stream_yields_no_chunks() {
        let stream = WordStream::new(vec![]).unwrap();
        assert!(chunk_words(&stream).is_empty());
    }

    #[test]
    fn short_speech_becomes_a_single_chunk() {
        // 70 words spanning 0..40_000ms, but elapsed time only crosses the
        // target at the final word, so everything lands in one chunk.
        let mut words: Vec<Word> = (0..69).map(|i| word(i, i * 500, (i + 1) * 500)).collect();
        words.push(word(69, 34_500, 40_000));
        let stream = WordStream::new(words).unwrap();

        let chunks = chunk_words(&stream);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].chunk_id, 0);
        assert_eq!(chunks[0].label, "Hook & Opening");
        assert_eq!(chunks[0].start_ms, 0);
        assert_eq!(chunks[0].end_ms, 40_000);
        assert_eq!(chunks[0].word_count, 70);
    }

    #[test]
    fn chunk_closes_at_first_word_reaching_target() {
        // 1000ms words: word 34 ends at 35_000, exactly the target.
        let stream = contiguous(72, 1000);
        let chunks = chunk_words(&stream);

        assert_eq!(chunks[0].word_count, 35);
        assert_eq!(chunks[0].start_ms, 0);
        assert_eq!(chunks[0].end_ms, 35_000);
        assert_eq!(chunks[1].start_ms, 35_000);
    }

    #[test]
    fn chunks_cover_the_stream_without_gaps_or_overlap() {
        let stream = contiguous(200, 700);
        let chunks = chunk_words(&stream);

        assert!(chunks.len() > 1);
        let total_words: usize = chunks.iter().map(|c| c.word_count).sum();
        assert_eq!(total_words, 200);

        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.chunk_id, i as u32);
        }
        for pair in chunks.windows(2) {
            assert_eq!(pair[0].end_ms, pair[1].start_ms);
        }
        assert_eq!(chunks[0].start_ms, 0);
        assert_eq!(chunks.last().unwrap().end_ms, stream.duration_ms());
    }

    #[test]
    fn chunk_durations_stay_bounded() {
        let stream = contiguous(300, 900);
        let chunks = chunk_words(&stream);

        for chunk in &chunks[..chunks.len() - 1] {
            assert!(chunk.end_ms - chunk.start_ms <= MAX_DURATION_MS);
        }
    }

    #[test]
    fn lone_oversized_word_is_its_own_chunk() {
        let stream = WordStream::new(vec![word(0, 0, 60_000)]).unwrap();
        let chunks = chunk_words(&stream);

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].word_count, 1);
        assert_eq!(chunks[0].end_ms - chunks[0].start_ms, 60_000);
    }

    #[test]
    fn trailing_oversized_word_is_its_own_chunk() {
        let mut words: Vec<Word> = (0..35).map(|i| word(i, i * 1000, (i + 1) * 1000)).collect();
        words.push(word(35, 35_000, 95_000));
        let stream = WordStream::new(words).unwrap();

        let chunks = chunk_words(&stream);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1].word_count, 1);
        assert_eq!(chunks[1].end_ms - chunks[1].start_ms, 60_000);
    }

    #[test]
    fn chunk_text_joins_words_in_order() {
        let stream = WordStream::new(vec![
            word(0, 0, 400),
            word(1, 400, 800),
            word(2, 800, 1200),
        ])
        .unwrap();

        let chunks = chunk_words(&stream);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "w0 w1 w2");
    }

    #[test]
    fn labels_follow_chunk_position() {
        // ~35s chunks: chunks 1-3 start inside the first two minutes, the
        // rest fall into numbered-argument territory.
        let stream = contiguous(300, 1000);
        let chunks = chunk_words(&stream);

        assert_eq!(chunks[0].label, "Hook & Opening");
        assert_eq!(chunks[1].label, "Model/Setup");
        assert_eq!(chunks[2].label, "Model/Setup");
        assert_eq!(chunks[3].label, "Model/Setup");
        assert_eq!(chunks[4].label, "Argument 2");
        assert_eq!(chunks[5].label, "Argument 3");
    }
}
