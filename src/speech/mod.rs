//! Speech synthesis boundary
//!
//! Wraps an external text-to-speech service behind [`SpeechSynthesizer`].
//! Synthesis failures are recoverable: callers surface them as visible
//! messages and the rest of the interaction stays usable.

mod artifact;
mod gtts;

pub use artifact::AudioStore;
pub use gtts::GoogleTranslateTts;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("speech request has no text")]
    EmptyText,

    #[error("speech service request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("speech service returned status {0}")]
    BadStatus(u16),

    #[error("speech service returned no audio data")]
    EmptyAudio,

    #[error("audio artifact error: {0}")]
    Artifact(#[from] std::io::Error),
}

/// Output audio container. Fixed to MP3 — the one format the playback
/// surface accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioFormat {
    Mp3,
}

impl AudioFormat {
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
        }
    }

    pub const fn extension(self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
        }
    }
}

/// A validated synthesis request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechRequest {
    pub text: String,
    /// BCP-47-ish language code, e.g. "kn" for Kannada.
    pub language: String,
    pub format: AudioFormat,
}

/// Build a synthesis request with the output container fixed to MP3.
///
/// Rejects text that is empty after trimming — there is nothing to speak
/// and the upstream service would return an opaque error.
pub fn build_speech_request(text: &str, language: &str) -> Result<SpeechRequest, SpeechError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(SpeechError::EmptyText);
    }
    Ok(SpeechRequest {
        text: text.to_string(),
        language: language.to_string(),
        format: AudioFormat::Mp3,
    })
}

/// Opaque synthesis boundary: text + language in, audio bytes out.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, SpeechError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builder_fixes_format_to_mp3() {
        let req = build_speech_request("ನೈಟ್ರೋಜನ್ ಕೊರತೆ ಇದೆ.", "kn").unwrap();
        assert_eq!(req.format, AudioFormat::Mp3);
        assert_eq!(req.language, "kn");
    }

    #[test]
    fn request_builder_trims_text() {
        let req = build_speech_request("  ಸಲಹೆ  ", "kn").unwrap();
        assert_eq!(req.text, "ಸಲಹೆ");
    }

    #[test]
    fn empty_text_is_rejected() {
        assert!(matches!(
            build_speech_request("   ", "kn"),
            Err(SpeechError::EmptyText)
        ));
    }
}
