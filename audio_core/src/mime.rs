//! Audio MIME type handling.
//!
//! Streamed speech responses declare their payload encoding with strings
//! like `audio/L16;rate=24000`. [`parse_audio_mime`] extracts the raw
//! sample parameters from such a string; [`extension_for_mime`] maps
//! self-describing audio types to their conventional file extension.

use serde::{Deserialize, Serialize};

/// Sample format carried by an `audio/L<bits>;rate=<hz>` MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleParameters {
    pub bits_per_sample: u16,
    pub sample_rate: u32,
}

impl Default for SampleParameters {
    fn default() -> Self {
        Self {
            bits_per_sample: 16,
            sample_rate: 24_000,
        }
    }
}

/// Parse bits per sample and sample rate from an audio MIME type string.
///
/// Never fails: a malformed or missing token keeps the default for that
/// field only (16 bit, 24 kHz). When a recognized key appears more than
/// once, the last occurrence wins.
pub fn parse_audio_mime(mime_type: &str) -> SampleParameters {
    let mut params = SampleParameters::default();

    for token in mime_type.split(';') {
        let token = token.trim();
        if token
            .get(..5)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("rate="))
        {
            if let Ok(rate) = token[5..].trim().parse::<u32>() {
                params.sample_rate = rate;
            }
        } else if let Some(rest) = token.strip_prefix("audio/L") {
            if let Ok(bits) = rest.parse::<u16>() {
                params.bits_per_sample = bits;
            }
        }
    }

    params
}

/// Map a declared audio MIME type to its conventional file extension.
///
/// Parameters after `;` are ignored. Returns `None` for types without a
/// well-known container — notably the raw `audio/L<bits>` family — which
/// callers treat as PCM to be wrapped.
pub fn extension_for_mime(mime_type: &str) -> Option<&'static str> {
    let essence = mime_type.split(';').next().unwrap_or_default().trim();
    let ext = match essence.to_ascii_lowercase().as_str() {
        "audio/wav" | "audio/x-wav" | "audio/wave" | "audio/vnd.wave" => "wav",
        "audio/mpeg" | "audio/mp3" => "mp3",
        "audio/mp4" => "m4a",
        "audio/aac" => "aac",
        "audio/ogg" => "ogg",
        "audio/opus" => "opus",
        "audio/flac" | "audio/x-flac" => "flac",
        "audio/webm" => "webm",
        _ => return None,
    };
    Some(ext)
}
