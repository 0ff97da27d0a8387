//! Append-only quote history in JSON Lines format.
//!
//! The first line is a header naming the format and its version. Every
//! following line is one [`QuoteRecord`]. Records are only ever appended.

use crate::error::{QuoteError, Result};
use crate::model::{SetType, SizeCounts};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Format name written in the header line.
pub const HISTORY_FORMAT: &str = "garment-quote-history";

/// Current history schema version.
pub const HISTORY_VERSION: u32 = 1;

/// Header line of a history file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryHeader {
    pub format: String,
    pub version: u32,
}

impl HistoryHeader {
    /// Header for the current schema.
    pub fn current() -> Self {
        Self {
            format: HISTORY_FORMAT.to_string(),
            version: HISTORY_VERSION,
        }
    }

    fn is_supported(&self) -> bool {
        self.format == HISTORY_FORMAT && self.version == HISTORY_VERSION
    }
}

/// One completed quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub timestamp: DateTime<Utc>,
    pub model: String,
    pub set_type: SetType,
    pub sizes: SizeCounts,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fabric: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<NaiveDate>,
    #[serde(default)]
    pub comments: String,
    pub total_units: u64,
    pub total_cost: f64,
    pub suggested_unit_price: f64,
}

/// Records read back from the log.
#[derive(Debug, Default)]
pub struct HistoryReadout {
    /// Well-formed records, oldest first.
    pub records: Vec<QuoteRecord>,
    /// Lines that could not be parsed and were skipped.
    pub skipped: usize,
}

/// Handle on a history log file.
#[derive(Debug)]
pub struct HistoryLog {
    path: PathBuf,
    recovered: bool,
}

impl HistoryLog {
    /// Open the log, creating it if absent.
    ///
    /// A file whose header is missing, malformed or of an unknown version is
    /// discarded and recreated empty.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut recovered = false;

        if path.exists() {
            match read_header(&path) {
                Ok(header) if header.is_supported() => {}
                Ok(header) => {
                    tracing::warn!(
                        "History {} has unsupported header {}/{}, recreating it",
                        path.display(),
                        header.format,
                        header.version
                    );
                    recovered = true;
                }
                Err(e) => {
                    tracing::warn!("History {} is unreadable ({}), recreating it", path.display(), e);
                    recovered = true;
                }
            }
            if recovered {
                write_new(&path)?;
            }
        } else {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            write_new(&path)?;
            tracing::debug!("Created history {}", path.display());
        }

        Ok(Self { path, recovered })
    }

    /// Path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the log was discarded and recreated on open.
    pub fn recovered(&self) -> bool {
        self.recovered
    }

    /// Append one record as a single line.
    ///
    /// A final line left unterminated by an interrupted write is closed off
    /// first, so the new record starts on its own line.
    pub fn append(&self, record: &QuoteRecord) -> Result<()> {
        let line = serde_json::to_string(record)?;
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.error(e))?;
        if !ends_with_newline(&mut file).map_err(|e| self.error(e))? {
            tracing::warn!("History {}: closing off a truncated last line", self.path.display());
            file.write_all(b"\n").map_err(|e| self.error(e))?;
        }
        writeln!(file, "{}", line).map_err(|e| self.error(e))?;
        file.flush().map_err(|e| self.error(e))?;
        tracing::debug!("Appended quote for {} to {}", record.model, self.path.display());
        Ok(())
    }

    /// Read every well-formed record.
    ///
    /// Malformed lines are skipped and counted. If the file cannot be read at
    /// all, the history is reported as empty.
    pub fn read_all(&self) -> HistoryReadout {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!("Cannot read history {}: {}", self.path.display(), e);
                return HistoryReadout::default();
            }
        };

        let mut readout = HistoryReadout::default();
        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!("History {}: read stopped at line {}: {}", self.path.display(), idx + 1, e);
                    break;
                }
            };
            // Line 1 is the header.
            if idx == 0 || line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<QuoteRecord>(&line) {
                Ok(record) => readout.records.push(record),
                Err(e) => {
                    tracing::warn!(
                        "History {}: skipping malformed line {}: {}",
                        self.path.display(),
                        idx + 1,
                        e
                    );
                    readout.skipped += 1;
                }
            }
        }
        readout
    }

    fn error(&self, e: std::io::Error) -> QuoteError {
        QuoteError::History {
            path: self.path.clone(),
            message: e.to_string(),
        }
    }
}

fn read_header(path: &Path) -> Result<HistoryHeader> {
    let mut first = String::new();
    BufReader::new(File::open(path)?).read_line(&mut first)?;
    Ok(serde_json::from_str(first.trim())?)
}

fn ends_with_newline(file: &mut File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

fn write_new(path: &Path) -> Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "{}", serde_json::to_string(&HistoryHeader::current())?)?;
    Ok(())
}
