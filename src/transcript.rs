use std::sync::Arc;

use crate::error::ResolutionError;
use crate::formatter::join_segments;
use crate::provider::{ProviderError, TranscriptCatalog, TranscriptHandle, TranscriptProvider};

/// Languages tried in order: manual US English, any English, then Korean.
pub const FALLBACK_LANGUAGES: [&str; 3] = ["en-US", "en", "ko"];

pub struct TranscriptService<P> {
    provider: Arc<P>,
}

impl<P> Clone for TranscriptService<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
        }
    }
}

impl<P: TranscriptProvider> TranscriptService<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Fetches the transcript for `video_id` in the first available fallback
    /// language and returns its text joined into one string.
    pub async fn resolve(&self, video_id: &str) -> Result<String, ResolutionError> {
        let catalog = self
            .provider
            .list_transcripts(video_id)
            .await
            .map_err(|err| {
                if err == ProviderError::TranscriptsDisabled {
                    log::warn!("Transcripts are disabled for video {}", video_id);
                }
                ResolutionError::from(err)
            })?;

        let handle = Self::select_transcript(&catalog, &FALLBACK_LANGUAGES).ok_or_else(|| {
            log::warn!(
                "No transcript in {:?} for video {}. Available languages: {}",
                FALLBACK_LANGUAGES,
                video_id,
                catalog.language_codes().join(", ")
            );
            ResolutionError::NoTranscriptFound
        })?;

        let segments = self.provider.fetch(handle).await?;
        log::info!(
            "Resolved transcript for video {} in '{}' ({} segments)",
            video_id,
            handle.language_code,
            segments.len()
        );

        Ok(join_segments(&segments))
    }

    fn select_transcript<'a>(
        catalog: &'a TranscriptCatalog<P::Track>,
        preferred: &[&str],
    ) -> Option<&'a TranscriptHandle<P::Track>> {
        preferred.iter().find_map(|&lang| {
            let found = catalog.find(lang);
            if found.is_none() {
                log::debug!("No '{}' transcript for video {}", lang, catalog.video_id);
            }
            found
        })
    }
}
