use crate::types::Word;

/// Ordered word sequence for one feedback pass, rebased so the first word
/// starts at zero.
///
/// When the loader filtered to one speaker of a multi-speaker recording,
/// the filtered words start partway into the audio. `offset_ms` remembers
/// where: the first word's start in the unfiltered timeline. Everything
/// downstream (chunk boundaries, display times) works stream-local; only
/// audio seeking adds the offset back, in whole seconds; see
/// [`crate::moment::resolve_moments`].
#[derive(Debug, Clone)]
pub struct WordStream {
    words: Vec<Word>,
    offset_ms: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("word {index}: start {start_ms}ms precedes previous word's start {prev_start_ms}ms")]
    NonMonotonicStart {
        index: i64,
        start_ms: i64,
        prev_start_ms: i64,
    },

    #[error("word {index}: end {end_ms}ms precedes its own start {start_ms}ms")]
    NegativeDuration {
        index: i64,
        start_ms: i64,
        end_ms: i64,
    },
}

impl WordStream {
    /// Build a stream from loader output.
    ///
    /// Words must arrive in recognition order with non-decreasing starts and
    /// `end >= start`. A malformed timeline (broken recognizer output) is
    /// rejected here rather than turned into silently-wrong chunk
    /// boundaries later.
    pub fn new(mut words: Vec<Word>) -> Result<Self, StreamError> {
        validate(&words)?;

        let offset_ms = words.first().map_or(0, |w| w.start_ms);
        for w in &mut words {
            w.start_ms -= offset_ms;
            w.end_ms -= offset_ms;
        }

        Ok(Self { words, offset_ms })
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Start of the first word in the unfiltered recording.
    pub fn offset_ms(&self) -> i64 {
        self.offset_ms
    }

    /// The speaker offset as added to playable ranges: whole seconds,
    /// floored.
    pub fn offset_seconds(&self) -> i64 {
        self.offset_ms / 1000
    }

    /// Total stream duration, taken from the last word's end.
    pub fn duration_ms(&self) -> i64 {
        self.words.last().map_or(0, |w| w.end_ms)
    }
}

fn validate(words: &[Word]) -> Result<(), StreamError> {
    for (i, w) in words.iter().enumerate() {
        if w.end_ms < w.start_ms {
            return Err(StreamError::NegativeDuration {
                index: w.index,
                start_ms: w.start_ms,
                end_ms: w.end_ms,
            });
        }
        if i > 0 && w.start_ms < words[i - 1].start_ms {
            return Err(StreamError::NonMonotonicStart {
                index: w.index,
                start_ms: w.start_ms,
                prev_start_ms: words[i - 1].start_ms,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn empty_stream_is_valid() {
        let stream = WordStream::new(vec![]).unwrap();
        assert!(stream.is_empty());
        assert_eq!(stream.offset_ms(), 0);
        assert_eq!(stream.duration_ms(), 0);
    }

    #[test]
    fn unfiltered_stream_keeps_zero_offset() {
        let stream = WordStream::new(vec![word(0, 0, 400), word(1, 400, 900)]).unwrap();
        assert_eq!(stream.offset_ms(), 0);
        assert_eq!(stream.words()[1].end_ms, 900);
        assert_eq!(stream.duration_ms(), 900);
    }

    #[test]
    fn filtered_stream_rebases_to_zero() {
        let stream =
            WordStream::new(vec![word(0, 120_500, 121_000), word(1, 121_000, 121_400)]).unwrap();
        assert_eq!(stream.offset_ms(), 120_500);
        assert_eq!(stream.offset_seconds(), 120);
        assert_eq!(stream.words()[0].start_ms, 0);
        assert_eq!(stream.words()[1].end_ms, 900);
    }

    #[test]
    fn rejects_non_monotonic_starts() {
        let err = WordStream::new(vec![word(0, 1000, 1500), word(1, 800, 1200)]).unwrap_err();
        assert!(matches!(err, StreamError::NonMonotonicStart { index: 1, .. }));
    }

    #[test]
    fn rejects_end_before_start() {
        let err = WordStream::new(vec![word(0, 1000, 900)]).unwrap_err();
        assert!(matches!(err, StreamError::NegativeDuration { index: 0, .. }));
    }
}
