//! Persistence of demultiplexed audio units.

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

use crate::demux::OutputUnit;

/// Failure to persist one output unit.
///
/// Scoped to the unit that triggered it; stream processing continues with
/// the next fragment.
#[derive(Debug, Error)]
#[error("failed to persist {file_name}: {source}")]
pub struct SinkError {
    pub file_name: String,
    #[source]
    pub source: io::Error,
}

/// Destination for the named byte buffers produced by the demultiplexer.
///
/// Implementations must persist each unit as a single buffer: the container
/// header and its data are never written incrementally.
pub trait OutputSink {
    fn persist(&mut self, unit: &OutputUnit) -> Result<(), SinkError>;
}

/// Sink that writes each unit as a file in one directory.
#[derive(Debug, Clone)]
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    /// Sink over an existing directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Sink over a directory, created first if missing.
    pub fn create(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }
}

impl OutputSink for DirSink {
    fn persist(&mut self, unit: &OutputUnit) -> Result<(), SinkError> {
        let file_name = unit.file_name();
        let path = self.dir.join(&file_name);
        // One open-write-close per unit; the handle is released on every
        // exit path.
        fs::write(&path, &unit.data).map_err(|source| SinkError { file_name, source })?;
        info!("saved {}", path.display());
        Ok(())
    }
}

/// Sink that keeps units in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub units: Vec<OutputUnit>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputSink for MemorySink {
    fn persist(&mut self, unit: &OutputUnit) -> Result<(), SinkError> {
        self.units.push(unit.clone());
        Ok(())
    }
}
