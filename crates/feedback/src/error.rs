use rostrum_chunking::{ResolveError, StreamError};

use crate::model::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no transcript words found")]
    EmptyTranscript,

    #[error(transparent)]
    Stream(#[from] StreamError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("malformed model response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error(transparent)]
    Template(#[from] minijinja::Error),

    #[error("word store: {0}")]
    Store(#[source] rostrum_db_words::StoreError),

    #[error("feedback model: {0}")]
    Model(#[source] ModelError),
}
