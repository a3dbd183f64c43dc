//! Splitting a response stream into persistable audio units.

use tracing::{debug, info, warn};

use crate::fragment::Fragment;
use crate::mime::{extension_for_mime, parse_audio_mime};
use crate::sink::{OutputSink, SinkError};
use crate::wav::wrap_pcm;

/// One named audio buffer ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputUnit {
    /// Position in the emitted sequence, starting at 0.
    pub index: usize,
    /// File stem: `<base_name>_part_<index>`.
    pub name: String,
    /// File extension without the leading dot.
    pub extension: String,
    /// Complete container bytes; persisted as a single buffer.
    pub data: Vec<u8>,
}

impl OutputUnit {
    /// Full file name, `<name>.<extension>`.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.extension)
    }
}

/// Pull-based iterator that turns audio-bearing fragments into
/// [`OutputUnit`]s.
///
/// Text fragments are surfaced through the logging layer and skipped;
/// empty fragments are skipped silently. Each audio fragment yields exactly
/// one unit, indexed contiguously from 0. Payloads whose MIME type maps to
/// a known container extension pass through unchanged; anything else is
/// treated as raw PCM and wrapped in a RIFF/WAVE container using the
/// parameters parsed from the MIME string.
#[derive(Debug)]
pub struct Demuxer<I> {
    fragments: I,
    base_name: String,
    next_index: usize,
}

impl<I> Demuxer<I>
where
    I: Iterator<Item = Fragment>,
{
    pub fn new(fragments: I, base_name: impl Into<String>) -> Self {
        Self {
            fragments,
            base_name: base_name.into(),
            next_index: 0,
        }
    }

    /// Number of units emitted so far.
    pub fn emitted(&self) -> usize {
        self.next_index
    }

    fn unit_for(&self, data: Vec<u8>, mime_type: Option<&str>) -> OutputUnit {
        let mime = mime_type.unwrap_or_default();
        let (extension, data) = match extension_for_mime(mime) {
            // The payload already carries its own container.
            Some(ext) => (ext, data),
            // No known container: assume raw PCM and wrap it.
            None => ("wav", wrap_pcm(&data, parse_audio_mime(mime))),
        };
        OutputUnit {
            index: self.next_index,
            name: format!("{}_part_{}", self.base_name, self.next_index),
            extension: extension.to_string(),
            data,
        }
    }
}

impl<I> Iterator for Demuxer<I>
where
    I: Iterator<Item = Fragment>,
{
    type Item = OutputUnit;

    fn next(&mut self) -> Option<OutputUnit> {
        loop {
            match self.fragments.next()? {
                Fragment::Empty => debug!("skipping fragment without payload"),
                Fragment::Text(text) => info!("text fragment: {text}"),
                Fragment::Audio { data, mime_type } => {
                    debug!(
                        bytes = data.len(),
                        mime_type = mime_type.as_deref().unwrap_or("<none>"),
                        "audio fragment"
                    );
                    let unit = self.unit_for(data, mime_type.as_deref());
                    self.next_index += 1;
                    return Some(unit);
                }
            }
        }
    }
}

/// Outcome of one stream-processing run.
#[derive(Debug, Default)]
pub struct DemuxReport {
    /// Units successfully handed to the sink.
    pub persisted: usize,
    /// Per-unit sink failures; the stream keeps going past them.
    pub failures: Vec<SinkError>,
}

impl DemuxReport {
    /// True when the stream carried no audio at all.
    pub fn no_audio(&self) -> bool {
        self.persisted == 0 && self.failures.is_empty()
    }
}

/// Drain a fragment stream into `sink`, one output unit per audio-bearing
/// fragment.
///
/// A sink failure is recorded in the report and does not stop the remaining
/// fragments from being processed. A run that emits no units at all is
/// reported through [`DemuxReport::no_audio`] and logged; it is not an
/// error.
pub fn demux_to_sink<I, S>(fragments: I, base_name: &str, sink: &mut S) -> DemuxReport
where
    I: IntoIterator<Item = Fragment>,
    S: OutputSink,
{
    let mut report = DemuxReport::default();

    for unit in Demuxer::new(fragments.into_iter(), base_name) {
        match sink.persist(&unit) {
            Ok(()) => report.persisted += 1,
            Err(err) => {
                warn!("{err}");
                report.failures.push(err);
            }
        }
    }

    if report.no_audio() {
        info!("stream produced no audio fragments");
    }

    report
}
