use clap::Parser;
use std::path::PathBuf;

/// Replay a captured speech-generation stream into playable audio files.
///
/// The dump is JSON Lines: one response fragment per line, with inline
/// audio payloads base64-encoded. Raw PCM payloads are wrapped in a WAV
/// container; payloads that already carry a container are written as-is.
#[derive(Parser, Debug)]
#[command(name = "demux")]
#[command(author, version, about)]
pub struct Cli {
    /// Captured stream dump to replay
    pub dump: PathBuf,

    /// Directory the audio files are written to
    #[arg(short, long, default_value = ".", env = "DEMUX_OUT_DIR")]
    pub out_dir: PathBuf,

    /// Stem for emitted files: <base-name>_part_<n>.<extension>
    #[arg(short, long, default_value = "audio", env = "DEMUX_BASE_NAME")]
    pub base_name: String,
}
