use thiserror::Error;

/// Failures inside the generation flow. None of these cross the request
/// boundary; the handler collapses them into [`UnexpectedError`].
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("API Error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Model Error: {0}")]
    Model(String),

    #[error("Schema Validation Failed: {0}")]
    Schema(String),
}

/// The only error kind the request handler ever surfaces. The message is
/// deliberately opaque; the underlying cause is logged server-side.
#[derive(Error, Debug)]
#[error("An unexpected error occurred while generating test cases.")]
pub struct UnexpectedError;
