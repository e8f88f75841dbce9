//! Stdout sink for the interactive driver.

use std::io::Write;
use std::sync::Mutex;

use orderflow_pipeline::{Notice, OutputSink};

/// Prints status updates and notices as they happen.
///
/// Text mode writes `status: ...` lines and `[title] message` blocks; JSON
/// mode writes one object per line.
pub struct ConsoleSink<W> {
    out: Mutex<W>,
    json: bool,
    status: Mutex<Option<String>>,
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(out: W, json: bool) -> Self {
        Self {
            out: Mutex::new(out),
            json,
            status: Mutex::new(None),
        }
    }

    /// Last status written, if any.
    pub fn status(&self) -> Option<String> {
        self.status
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    fn write_line(&self, line: &str) -> anyhow::Result<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| anyhow::anyhow!("console writer poisoned"))?;
        writeln!(out, "{line}")?;
        out.flush()?;
        Ok(())
    }
}

impl<W: Write + Send> OutputSink for ConsoleSink<W> {
    fn set_status(&self, status: &str) -> anyhow::Result<()> {
        *self
            .status
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(status.to_string());

        if self.json {
            let line = serde_json::json!({ "kind": "status", "text": status });
            self.write_line(&line.to_string())
        } else {
            self.write_line(&format!("status: {status}"))
        }
    }

    fn notify(&self, notice: &Notice) -> anyhow::Result<()> {
        if self.json {
            self.write_line(&serde_json::to_string(notice)?)
        } else {
            let marker = if notice.is_warning() { "!" } else { "i" };
            self.write_line(&format!("[{marker} {}] {notice}", notice.title()))
        }
    }
}
