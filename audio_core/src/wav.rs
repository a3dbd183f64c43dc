//! RIFF/WAVE container synthesis for raw PCM payloads.

use crate::mime::SampleParameters;

/// Length of the synthesized header in bytes.
pub const WAV_HEADER_LEN: usize = 44;

// Streamed raw PCM carries no channel information; the upstream speech
// models emit mono only.
const NUM_CHANNELS: u16 = 1;

/// Wrap raw PCM bytes in a RIFF/WAVE container.
///
/// Produces the standard 44-byte header followed by the payload, untouched.
/// All header integers are little-endian. The layout matches what standard
/// audio players expect for uncompressed PCM:
///
/// offset 0  `"RIFF"`, u32 chunk size (36 + data), `"WAVE"`
/// offset 12 `"fmt "`, u32 16, u16 format 1 (PCM), u16 channels,
///           u32 sample rate, u32 byte rate, u16 block align, u16 bits
/// offset 36 `"data"`, u32 data size, then the samples
pub fn wrap_pcm(pcm: &[u8], params: SampleParameters) -> Vec<u8> {
    let bytes_per_sample = u32::from(params.bits_per_sample) / 8;
    let block_align = u32::from(NUM_CHANNELS) * bytes_per_sample;
    let byte_rate = params.sample_rate * block_align;
    let data_size = pcm.len() as u32;
    let riff_size = 36 + data_size;

    let mut out = Vec::with_capacity(WAV_HEADER_LEN + pcm.len());

    // RIFF header
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&riff_size.to_le_bytes());
    out.extend_from_slice(b"WAVE");

    // fmt chunk
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes()); // fmt chunk size
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&NUM_CHANNELS.to_le_bytes());
    out.extend_from_slice(&params.sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&(block_align as u16).to_le_bytes());
    out.extend_from_slice(&params.bits_per_sample.to_le_bytes());

    // data chunk
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_size.to_le_bytes());
    out.extend_from_slice(pcm);

    out
}
