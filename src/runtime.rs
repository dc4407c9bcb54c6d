//! Search runtime reporting
//!
//! Measures how long a search took and persists a small summary record after it.

use chrono::{DateTime, Local};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::info;

/// Errors writing a runtime record
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Failed to write runtime record to {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("Failed to serialize runtime record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// File format of a persisted runtime record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeFormat {
    Json,
    Text,
}

/// Wall-clock timer started before a search
#[derive(Debug, Clone)]
pub struct Runtime {
    started_at: DateTime<Local>,
    start: Instant,
}

/// Summary of a finished run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuntimeRecord {
    pub start_time: DateTime<Local>,
    pub duration_seconds: f64,
    pub duration_minutes: f64,
    pub duration_hours: f64,
}

impl Runtime {
    #[must_use]
    pub fn start() -> Self {
        Self {
            started_at: Local::now(),
            start: Instant::now(),
        }
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Snapshot of the run so far
    #[must_use]
    pub fn record(&self) -> RuntimeRecord {
        RuntimeRecord::new(self.started_at, self.elapsed())
    }
}

impl RuntimeRecord {
    /// Build a record, rounding every duration to three decimals
    #[must_use]
    pub fn new(start_time: DateTime<Local>, elapsed: Duration) -> Self {
        let seconds = round3(elapsed.as_secs_f64());

        Self {
            start_time,
            duration_seconds: seconds,
            duration_minutes: round3(seconds / 60.0),
            duration_hours: round3(seconds / 3600.0),
        }
    }

    /// Human readable runtime line
    ///
    /// # Examples
    /// ```
    /// use chrono::Local;
    /// use std::time::Duration;
    /// use word_descrambler::runtime::RuntimeRecord;
    ///
    /// let record = RuntimeRecord::new(Local::now(), Duration::from_millis(61_250));
    /// assert_eq!(record.runtime_string(true), "Runtime: 0:01:01.250");
    /// assert_eq!(record.runtime_string(false), "Runtime: 61.250 seconds");
    /// ```
    #[must_use]
    pub fn runtime_string(&self, use_timedelta: bool) -> String {
        if use_timedelta {
            format!("Runtime: {}", format_timedelta(self.duration_seconds))
        } else {
            format!("Runtime: {:.3} seconds", self.duration_seconds)
        }
    }

    fn to_text(&self) -> String {
        format!(
            "start_time: {}\nduration_seconds: {}\nduration_minutes: {}\nduration_hours: {}\n",
            self.start_time.to_rfc3339(),
            self.duration_seconds,
            self.duration_minutes,
            self.duration_hours
        )
    }

    /// Write the record to `path`, creating parent directories as needed
    ///
    /// # Errors
    /// Returns `RuntimeError` if the record cannot be serialized or written.
    pub fn write(&self, path: &Path, format: RuntimeFormat) -> Result<(), RuntimeError> {
        let contents = match format {
            RuntimeFormat::Json => serde_json::to_string_pretty(self)?,
            RuntimeFormat::Text => self.to_text(),
        };

        let io_error = |source| RuntimeError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        fs::write(path, contents).map_err(io_error)?;

        info!(path = %path.display(), ?format, "wrote runtime record");
        Ok(())
    }
}

/// How runtime is reported after a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeReporter {
    pub use_timedelta: bool,
    pub save_path: PathBuf,
    /// `None` disables the persisted record
    pub format: Option<RuntimeFormat>,
}

impl RuntimeReporter {
    /// Finish `runtime`, persisting its record if a format is configured
    ///
    /// # Errors
    /// Returns `RuntimeError` if the record cannot be written.
    pub fn finish(&self, runtime: &Runtime) -> Result<RuntimeRecord, RuntimeError> {
        let record = runtime.record();
        if let Some(format) = self.format {
            record.write(&self.save_path, format)?;
        }
        Ok(record)
    }
}

/// Format seconds as `H:MM:SS.mmm`
#[must_use]
pub fn format_timedelta(seconds: f64) -> String {
    let total_millis = (seconds.max(0.0) * 1000.0).round() as u64;
    let hours = total_millis / 3_600_000;
    let minutes = (total_millis / 60_000) % 60;
    let secs = (total_millis / 1000) % 60;
    let millis = total_millis % 1000;

    format!("{hours}:{minutes:02}:{secs:02}.{millis:03}")
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
