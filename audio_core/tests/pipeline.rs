//! End-to-end tests for the capture pipeline: dump decoding, stream
//! demultiplexing and file persistence.

use std::fs;
use std::path::PathBuf;

use audio_core::{demux_to_sink, Demuxer, DirSink, Fragment, WAV_HEADER_LEN};

fn temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("audio_core_e2e_{tag}_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// One fragment per line, inline audio base64-encoded — the captured-dump
/// wire shape.
const DUMP: &str = r#"
"empty"
{"text":"Generating dialogue audio..."}
{"audio":{"data":"AQI=","mime_type":"audio/L16;rate=16000"}}
{"audio":{"data":"UklGRgAAAAA=","mime_type":"audio/wav"}}
"#;

fn dump_fragments() -> Vec<Fragment> {
    DUMP.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_replayed_dump_writes_playable_files() {
    let dir = temp_dir("replay");
    let mut sink = DirSink::new(&dir);

    let report = demux_to_sink(dump_fragments(), "dialogue", &mut sink);

    assert_eq!(report.persisted, 2);
    assert!(report.failures.is_empty());

    // First unit: two raw PCM bytes wrapped in a synthesized container.
    let synthesized = fs::read(dir.join("dialogue_part_0.wav")).unwrap();
    assert_eq!(synthesized.len(), WAV_HEADER_LEN + 2);
    let reader = hound::WavReader::new(std::io::Cursor::new(synthesized)).unwrap();
    assert_eq!(reader.spec().sample_rate, 16_000);
    assert_eq!(reader.spec().channels, 1);
    assert_eq!(reader.spec().bits_per_sample, 16);

    // Second unit: already a container, bytes pass through unchanged.
    let passthrough = fs::read(dir.join("dialogue_part_1.wav")).unwrap();
    assert_eq!(passthrough, b"RIFF\x00\x00\x00\x00");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_sink_failure_does_not_halt_the_stream() {
    let missing = std::env::temp_dir().join(format!(
        "audio_core_e2e_missing_{}/nested",
        std::process::id()
    ));
    let mut sink = DirSink::new(&missing);

    let report = demux_to_sink(dump_fragments(), "dialogue", &mut sink);

    // Both units were attempted; neither halted processing.
    assert_eq!(report.persisted, 0);
    assert_eq!(report.failures.len(), 2);
    assert!(!report.no_audio());
    assert_eq!(report.failures[0].file_name, "dialogue_part_0.wav");
    assert_eq!(report.failures[1].file_name, "dialogue_part_1.wav");
}

#[test]
fn test_text_only_dump_produces_nothing() {
    let fragments = vec![
        Fragment::text("no audio today"),
        Fragment::Empty,
        Fragment::text("sorry"),
    ];
    let dir = temp_dir("text_only");
    let mut sink = DirSink::new(&dir);

    let report = demux_to_sink(fragments, "dialogue", &mut sink);

    assert!(report.no_audio());
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_demuxer_is_lazy_and_resumable_between_fragments() {
    let fragments = vec![
        Fragment::audio(vec![0u8; 2], "audio/L16;rate=24000"),
        Fragment::audio(vec![0u8; 2], "audio/L16;rate=24000"),
        Fragment::audio(vec![0u8; 2], "audio/L16;rate=24000"),
    ];
    let mut demuxer = Demuxer::new(fragments.into_iter(), "lazy");

    // The caller may stop pulling at any point between fragments.
    let first = demuxer.next().unwrap();
    assert_eq!(first.index, 0);
    assert_eq!(demuxer.emitted(), 1);

    let second = demuxer.next().unwrap();
    assert_eq!(second.index, 1);
    assert_eq!(demuxer.emitted(), 2);
}
