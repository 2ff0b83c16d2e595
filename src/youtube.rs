use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use reqwest::Client;
use yt_transcript_rs::api::YouTubeTranscriptApi;
use yt_transcript_rs::errors::{CouldNotRetrieveTranscript, CouldNotRetrieveTranscriptReason};
use yt_transcript_rs::Transcript;

use crate::provider::{
    ProviderError, TimedTextSegment, TranscriptCatalog, TranscriptHandle, TranscriptProvider,
};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Transcript provider backed by YouTube's caption tracks.
///
/// The catalog is listed once per request; the selected track is fetched
/// through the same client without listing again.
pub struct YouTubeProvider {
    api: YouTubeTranscriptApi,
    client: Client,
}

impl YouTubeProvider {
    pub fn new() -> Result<Self, ProviderError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US"));
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| ProviderError::Upstream(format!("Failed to build HTTP client: {}", e)))?;

        let api = YouTubeTranscriptApi::new(None, None, Some(client.clone())).map_err(|e| {
            ProviderError::Upstream(format!("Failed to create YouTube transcript client: {}", e))
        })?;
        Ok(Self { api, client })
    }
}

fn classify(err: CouldNotRetrieveTranscript) -> ProviderError {
    match &err.reason {
        Some(CouldNotRetrieveTranscriptReason::TranscriptsDisabled) => {
            ProviderError::TranscriptsDisabled
        }
        _ => ProviderError::Upstream(err.to_string()),
    }
}

fn handle_for(video_id: &str, track: &Transcript) -> TranscriptHandle<Transcript> {
    TranscriptHandle {
        video_id: video_id.to_string(),
        language_code: track.language_code().to_string(),
        language: track.language().to_string(),
        is_generated: track.is_generated(),
        track: track.clone(),
    }
}

#[async_trait]
impl TranscriptProvider for YouTubeProvider {
    type Track = Transcript;

    async fn list_transcripts(
        &self,
        video_id: &str,
    ) -> Result<TranscriptCatalog<Transcript>, ProviderError> {
        let list = self
            .api
            .list_transcripts(video_id)
            .await
            .map_err(classify)?;

        let transcripts: Vec<_> = list
            .transcripts()
            .map(|track| handle_for(video_id, track))
            .collect();

        log::debug!(
            "Video {} has {} transcript track(s)",
            video_id,
            transcripts.len()
        );
        Ok(TranscriptCatalog::new(video_id, transcripts))
    }

    async fn fetch(
        &self,
        handle: &TranscriptHandle<Transcript>,
    ) -> Result<Vec<TimedTextSegment>, ProviderError> {
        let fetched = handle
            .track
            .fetch(&self.client, false)
            .await
            .map_err(|e| ProviderError::Upstream(e.to_string()))?;

        Ok(fetched
            .parts()
            .iter()
            .map(|part| TimedTextSegment {
                text: part.text.clone(),
                start: part.start,
                duration: part.duration,
            })
            .collect())
    }
}
