use rostrum_chunking::time::seconds_to_clock;
use rostrum_chunking::{
    LabelStrategy, PositionalLabels, WordStream, chunk_words_with, format_chunks, resolve_moments,
};
use rostrum_db_words::WordStore;

use crate::error::Error;
use crate::model::FeedbackModel;
use crate::prompt::{PromptContext, build_prompt, motion_type};
use crate::report::{AudioMetadata, ChunksMetadata, FeedbackReport};
use crate::response::ModelFeedback;

/// Inputs for one feedback pass.
#[derive(Debug, Clone)]
pub struct FeedbackRequest {
    pub transcript_id: i64,
    pub motion: String,
    pub position: String,
    /// Expected speech length in minutes, set by the debate format.
    pub expected_duration_minutes: u32,
    /// Measured speech length, shown to the model as `MM:SS`.
    pub actual_time_seconds: i64,
    pub audio_url: Option<String>,
    /// Restrict the pass to one diarized speaker of a multi-speaker
    /// recording. The resulting moments seek the full recording; their
    /// display times stay in the speaker's own time base.
    pub speaker: Option<String>,
}

/// Sequences one feedback pass: load words, chunk, format, prompt the
/// model, resolve cited moments, assemble the report.
///
/// Passes are independent; a generator may serve any number of them
/// concurrently. Each pass owns its chunk list and discards it with the
/// request; nothing is shared or cached across invocations.
pub struct FeedbackGenerator<S, M> {
    store: S,
    model: M,
    labels: Box<dyn LabelStrategy>,
}

impl<S, M> FeedbackGenerator<S, M>
where
    S: WordStore,
    M: FeedbackModel,
{
    pub fn new(store: S, model: M) -> Self {
        Self::with_labels(store, model, Box::new(PositionalLabels))
    }

    pub fn with_labels(store: S, model: M, labels: Box<dyn LabelStrategy>) -> Self {
        Self {
            store,
            model,
            labels,
        }
    }

    /// Run one full pass. The result is whole or absent: an empty word
    /// stream fails before any model work, and a model response that
    /// cannot be parsed and resolved cleanly fails the pass.
    pub async fn generate(&self, request: &FeedbackRequest) -> Result<FeedbackReport, Error> {
        let pass_id = uuid::Uuid::new_v4();

        let words = self
            .store
            .list_words(request.transcript_id, request.speaker.as_deref())
            .await
            .map_err(Error::Store)?;

        if words.is_empty() {
            return Err(Error::EmptyTranscript);
        }

        let stream = WordStream::new(words)?;
        let chunks = chunk_words_with(&stream, self.labels.as_ref());

        tracing::info!(
            %pass_id,
            transcript_id = request.transcript_id,
            speaker = request.speaker.as_deref(),
            chunks = chunks.len(),
            duration_ms = stream.duration_ms(),
            "chunked transcript"
        );

        let chunked_transcript = format_chunks(&chunks);
        let prompt = build_prompt(&PromptContext {
            motion: &request.motion,
            motion_type: motion_type(&request.motion),
            position: &request.position,
            expected_duration_minutes: request.expected_duration_minutes,
            actual_time: seconds_to_clock(request.actual_time_seconds),
            chunked_transcript: &chunked_transcript,
        })?;

        let raw = self.model.generate(&prompt).await.map_err(Error::Model)?;
        let feedback: ModelFeedback = serde_json::from_str(&raw)?;

        let moments = resolve_moments(&chunks, feedback.playable_moments, stream.offset_seconds())?;

        tracing::info!(%pass_id, moments = moments.len(), "resolved playable moments");

        Ok(FeedbackReport {
            rubric_scores: feedback.rubric_scores,
            strategic_overview: feedback.strategic_overview,
            playable_moments: moments,
            audio_metadata: AudioMetadata {
                url: request.audio_url.clone(),
                duration_seconds: (stream.duration_ms() + 999) / 1000,
            },
            chunks_metadata: ChunksMetadata {
                total_chunks: chunks.len(),
                chunk_labels: chunks.iter().map(|c| c.label.clone()).collect(),
            },
        })
    }
}
