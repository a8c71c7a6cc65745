#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no api keys configured")]
    NoKeysConfigured,

    #[error(transparent)]
    Env(#[from] envy::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("api returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("no response text in candidates")]
    EmptyResponse,
}
