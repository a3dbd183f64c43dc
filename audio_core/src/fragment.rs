//! Response stream fragments.

use serde::{Deserialize, Serialize};

/// One unit pulled from a streamed generation response.
///
/// A fragment carries inline binary audio, model text, or nothing at all;
/// keep-alive and metadata-only chunks arrive as [`Fragment::Empty`]. In
/// captured stream dumps a fragment is one JSON value, with inline audio
/// base64-encoded the way it travels on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fragment {
    /// Inline binary audio with its declared MIME type.
    Audio {
        #[serde(with = "base64_bytes")]
        data: Vec<u8>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mime_type: Option<String>,
    },
    /// Model commentary interleaved with the audio.
    Text(String),
    /// A chunk with no usable payload.
    Empty,
}

impl Fragment {
    /// Audio fragment with a declared MIME type.
    pub fn audio(data: impl Into<Vec<u8>>, mime_type: impl Into<String>) -> Self {
        Fragment::Audio {
            data: data.into(),
            mime_type: Some(mime_type.into()),
        }
    }

    /// Text fragment.
    pub fn text(text: impl Into<String>) -> Self {
        Fragment::Text(text.into())
    }
}

mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        STANDARD.encode(bytes).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(serde::de::Error::custom)
    }
}
