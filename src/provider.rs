use async_trait::async_trait;

/// One caption unit as returned by the upstream source. Timing is carried
/// along but only `text` ends up in the resolved transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedTextSegment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

#[cfg(test)]
impl TimedTextSegment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            start: 0.0,
            duration: 0.0,
        }
    }
}

/// Reference to a single language track in a catalog. Not fetched yet.
/// `track` is the provider's own description of the track, handed back to
/// the same provider on fetch so the selected track is the one fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptHandle<T> {
    pub video_id: String,
    pub language_code: String,
    pub language: String,
    pub is_generated: bool,
    pub track: T,
}

/// Transcripts available for one video.
#[derive(Debug, Clone)]
pub struct TranscriptCatalog<T> {
    pub video_id: String,
    pub transcripts: Vec<TranscriptHandle<T>>,
}

impl<T> TranscriptCatalog<T> {
    pub fn new(video_id: impl Into<String>, transcripts: Vec<TranscriptHandle<T>>) -> Self {
        Self {
            video_id: video_id.into(),
            transcripts,
        }
    }

    /// Looks up a track by exact language code. A manually created track
    /// takes precedence over an auto-generated one with the same code.
    pub fn find(&self, language_code: &str) -> Option<&TranscriptHandle<T>> {
        self.transcripts
            .iter()
            .filter(|t| t.language_code == language_code)
            .min_by_key(|t| t.is_generated)
    }

    pub fn language_codes(&self) -> Vec<&str> {
        self.transcripts
            .iter()
            .map(|t| t.language_code.as_str())
            .collect()
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ProviderError {
    #[error("Transcripts are disabled for video")]
    TranscriptsDisabled,
    #[error("{0}")]
    Upstream(String),
}

/// The external source that knows which transcripts exist and how to fetch them.
#[async_trait]
pub trait TranscriptProvider: Send + Sync {
    type Track: Send + Sync;

    async fn list_transcripts(
        &self,
        video_id: &str,
    ) -> Result<TranscriptCatalog<Self::Track>, ProviderError>;

    async fn fetch(
        &self,
        handle: &TranscriptHandle<Self::Track>,
    ) -> Result<Vec<TimedTextSegment>, ProviderError>;
}
