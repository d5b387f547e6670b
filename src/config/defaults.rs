//! Built-in default values for deployment configuration

/// Default HTTP server bind address
pub const SERVER_ADDR: &str = "0.0.0.0:8080";

/// Default model artifact path
pub const MODEL_PATH: &str = "models/soil_nutrient_model.json";

/// Default speech synthesis endpoint (Google Translate TTS)
pub const SPEECH_ENDPOINT: &str = "https://translate.google.com/translate_tts";

/// Default speech language code (Kannada)
pub const SPEECH_LANGUAGE: &str = "kn";

/// Default speech request timeout (seconds)
pub const SPEECH_TIMEOUT_SECS: u64 = 15;

/// Default directory for transient audio artifacts
pub const AUDIO_DIR: &str = "./data/audio";

/// Default maximum audio artifact age before startup pruning (hours)
pub const AUDIO_MAX_AGE_HOURS: u64 = 24;
