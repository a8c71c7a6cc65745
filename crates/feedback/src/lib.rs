mod error;
mod generator;
mod model;
mod prompt;
mod report;
mod response;

pub use error::Error;
pub use generator::{FeedbackGenerator, FeedbackRequest};
pub use model::{BoxFuture, FeedbackModel, ModelError};
pub use prompt::{PromptContext, build_prompt, motion_type};
pub use report::{AudioMetadata, ChunksMetadata, FeedbackReport};
pub use response::{ModelFeedback, RubricScore, RubricScores, StrategicOverview};
