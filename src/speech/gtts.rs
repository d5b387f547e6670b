//! Google Translate TTS client
//!
//! Speaks a request by calling the translate-tts endpoint and returning the
//! MP3 payload. The service caps input at roughly 200 characters per call,
//! so longer text is split at sentence boundaries and the MP3 payloads are
//! concatenated — valid for MPEG audio streams.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::{SpeechError, SpeechRequest, SpeechSynthesizer};

/// Maximum characters per upstream call.
const MAX_CHUNK_CHARS: usize = 200;

/// HTTP client for the Google Translate text-to-speech endpoint.
#[derive(Debug, Clone)]
pub struct GoogleTranslateTts {
    http: reqwest::Client,
    endpoint: String,
}

impl GoogleTranslateTts {
    /// Build a client against the given endpoint base URL.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, SpeechError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch_chunk(&self, chunk: &str, language: &str) -> Result<Vec<u8>, SpeechError> {
        let response = self
            .http
            .get(self.endpoint.as_str())
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", language),
                ("q", chunk),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SpeechError::BadStatus(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(SpeechError::EmptyAudio);
        }
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTranslateTts {
    async fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, SpeechError> {
        let chunks = split_text(&request.text, MAX_CHUNK_CHARS);
        debug!(
            chunks = chunks.len(),
            language = %request.language,
            "Synthesizing speech"
        );

        let mut audio = Vec::new();
        for chunk in &chunks {
            let bytes = self.fetch_chunk(chunk, &request.language).await?;
            audio.extend_from_slice(&bytes);
        }

        if audio.is_empty() {
            return Err(SpeechError::EmptyAudio);
        }
        Ok(audio)
    }
}

/// Split text into chunks of at most `max_chars` characters, preferring
/// sentence boundaries (". ") and falling back to word boundaries.
fn split_text(text: &str, max_chars: usize) -> Vec<String> {
    if text.chars().count() <= max_chars {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0usize;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        // +1 for the joining space
        if current_chars > 0 && current_chars + 1 + word_chars > max_chars {
            chunks.push(std::mem::take(&mut current));
            current_chars = 0;
        }
        if current_chars > 0 {
            current.push(' ');
            current_chars += 1;
        }
        current.push_str(word);
        current_chars += word_chars;

        // Prefer breaking after a full stop once the chunk is reasonably full.
        if word.ends_with('.') && current_chars >= max_chars / 2 {
            chunks.push(std::mem::take(&mut current));
            current_chars = 0;
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_a_single_chunk() {
        let chunks = split_text("ನೈಟ್ರೋಜನ್ ಕೊರತೆ ಇದೆ.", 200);
        assert_eq!(chunks.len(), 1);
    }

    #[test]
    fn long_text_splits_under_limit() {
        let sentence = "ಯುರಿಯಾ ಅಥವಾ ವರ್ಮಿಕಂಪೋಸ್ಟ್ ಹಾಕಿ. ";
        let text = sentence.repeat(20);
        let chunks = split_text(&text, 200);
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 200, "chunk too long: {chunk}");
        }
    }

    #[test]
    fn split_preserves_all_words() {
        let text = "one two three four five six seven eight nine ten".repeat(8);
        let chunks = split_text(&text, 40);
        let rejoined = chunks.join(" ");
        let original_words: Vec<&str> = text.split_whitespace().collect();
        let rejoined_words: Vec<&str> = rejoined.split_whitespace().collect();
        assert_eq!(original_words, rejoined_words);
    }
}
