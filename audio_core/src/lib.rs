//! Streamed-audio capture pipeline.
//!
//! Generative speech APIs deliver audio as a stream of response fragments
//! whose inline payloads are often raw PCM described only by a MIME type
//! such as `audio/L16;rate=24000`. This crate turns such a stream into
//! playable files: [`parse_audio_mime`] reads the sample format from the
//! MIME string, [`wrap_pcm`] synthesizes a RIFF/WAVE container around raw
//! payloads, and [`Demuxer`] walks the fragment stream, emitting one named
//! output per audio-bearing fragment.

mod demux;
mod fragment;
mod mime;
mod sink;
mod wav;

pub use demux::{demux_to_sink, DemuxReport, Demuxer, OutputUnit};
pub use fragment::Fragment;
pub use mime::{extension_for_mime, parse_audio_mime, SampleParameters};
pub use sink::{DirSink, MemorySink, OutputSink, SinkError};
pub use wav::{wrap_pcm, WAV_HEADER_LEN};
