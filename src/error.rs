use crate::provider::ProviderError;

/// Terminal outcome of a failed resolution. Display strings are the exact
/// messages handed back to HTTP clients.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ResolutionError {
    #[error("Transcripts are disabled for this video.")]
    TranscriptsDisabled,
    #[error("No transcript found for this video.")]
    NoTranscriptFound,
    #[error("{0}")]
    Upstream(String),
}

impl From<ProviderError> for ResolutionError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::TranscriptsDisabled => ResolutionError::TranscriptsDisabled,
            ProviderError::Upstream(msg) => ResolutionError::Upstream(msg),
        }
    }
}
