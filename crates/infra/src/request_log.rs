//! File-backed request log sink
//!
//! Append-only audit trail of handled identification requests, one line
//! per request. The sink is opened once at startup; concurrent appends
//! are serialized through a mutex so individual entries never interleave.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::SecondsFormat;
use langsight_core::RequestLog;
use langsight_domain::{LangSightError, RequestLogEntry, RequestOutcome, Result};

/// Append-only request log backed by a file
#[derive(Debug)]
pub struct FileRequestLog {
    file: Mutex<File>,
}

impl FileRequestLog {
    /// Open the log file for appending, creating it if missing
    ///
    /// # Errors
    /// Returns `LangSightError::Config` when the file cannot be opened.
    /// Fatal at startup: a service that cannot record request outcomes
    /// must not start.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let file = OpenOptions::new().create(true).append(true).open(path).map_err(|e| {
            LangSightError::Config(format!(
                "failed to open request log {}: {}",
                path.display(),
                e
            ))
        })?;

        tracing::info!(path = %path.display(), "request log opened");

        Ok(Self { file: Mutex::new(file) })
    }

    /// Render one entry as a single log line
    ///
    /// Success: `<ts> INFO OK - text='<preview>' - lang=<code> - conf=<4dp>`
    /// Failure: `<ts> INFO FAILED - text='<preview>' - error=<message>`
    fn format_entry(entry: &RequestLogEntry) -> String {
        let timestamp = entry.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true);

        match &entry.outcome {
            RequestOutcome::Success { language_code, confidence } => format!(
                "{} INFO OK - text='{}' - lang={} - conf={:.4}",
                timestamp, entry.text_preview, language_code, confidence
            ),
            RequestOutcome::Failure { error } => format!(
                "{} INFO FAILED - text='{}' - error={}",
                timestamp, entry.text_preview, error
            ),
        }
    }
}

#[async_trait]
impl RequestLog for FileRequestLog {
    /// Append one entry and flush
    ///
    /// The write happens under the mutex as a single formatted line, so
    /// concurrent records cannot corrupt each other. I/O errors are
    /// reported to the caller, which treats them as best-effort.
    async fn record(&self, entry: RequestLogEntry) -> Result<()> {
        let line = Self::format_entry(&entry);

        let mut file = match self.file.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::warn!("request log mutex poisoned, recovering");
                poisoned.into_inner()
            }
        };

        writeln!(file, "{}", line)
            .and_then(|()| file.flush())
            .map_err(|e| LangSightError::Internal(format!("failed to append request log: {}", e)))
    }
}
