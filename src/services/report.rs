use crate::models::{LocalFile, RemoteObjectRef};
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Output sink for the status messages of a run.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn upload_succeeded(&self, file: &LocalFile, object: &RemoteObjectRef);
    fn upload_failed(&self, message: &str);
    fn upload_duration(&self, duration: Duration);
    fn comparing(&self);
    fn checksums_match(&self, checksum: &str);
    fn checksums_mismatch(&self, local: &str, remote: &str);
}

/// Plain status lines, written to stdout unless another sink is given.
pub struct ConsoleReporter {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleReporter {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }

    fn write_lines(&self, lines: &[String]) {
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        for line in lines {
            if let Err(e) = writeln!(out, "{}", line) {
                tracing::warn!("Failed to write report line: {}", e);
                return;
            }
        }
        let _ = out.flush();
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn upload_succeeded(&self, file: &LocalFile, object: &RemoteObjectRef) {
        self.write_lines(&[format!("File {} successfully uploaded to {}.", file, object)]);
    }

    fn upload_failed(&self, message: &str) {
        self.write_lines(&[format!("Upload failed: {}", message)]);
    }

    fn upload_duration(&self, duration: Duration) {
        self.write_lines(&[format!(
            "Upload completed in {:.2} seconds.",
            duration.as_secs_f64()
        )]);
    }

    fn comparing(&self) {
        self.write_lines(&["Comparing checksums...".to_string()]);
    }

    fn checksums_match(&self, checksum: &str) {
        self.write_lines(&[
            "Checksums match!".to_string(),
            format!("Checksum: {}", checksum),
        ]);
    }

    fn checksums_mismatch(&self, local: &str, remote: &str) {
        self.write_lines(&[
            "Checksums do not match!".to_string(),
            format!("Local: {}", local),
            format!("S3:    {}", remote),
        ]);
    }
}

/// Emits the same events as `tracing` records.
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn name(&self) -> &'static str {
        "tracing"
    }

    fn upload_succeeded(&self, file: &LocalFile, object: &RemoteObjectRef) {
        tracing::info!("✅ File {} successfully uploaded to {}", file, object);
    }

    fn upload_failed(&self, message: &str) {
        tracing::error!("❌ Upload failed: {}", message);
    }

    fn upload_duration(&self, duration: Duration) {
        tracing::info!("⏱️  Upload completed in {:.2} seconds", duration.as_secs_f64());
    }

    fn comparing(&self) {
        tracing::info!("🔍 Comparing checksums...");
    }

    fn checksums_match(&self, checksum: &str) {
        tracing::info!("✅ Checksums match: {}", checksum);
    }

    fn checksums_mismatch(&self, local: &str, remote: &str) {
        tracing::warn!(
            "⚠️  Checksums do not match! local={} remote={}",
            local,
            remote
        );
    }
}

/// Factory function to create a reporter based on config
pub fn create_reporter(style: &str) -> Arc<dyn Reporter> {
    match style.to_lowercase().as_str() {
        "console" | "stdout" | "plain" => Arc::new(ConsoleReporter::stdout()),
        "log" | "tracing" => Arc::new(TracingReporter),
        _ => {
            tracing::warn!("Unknown report style '{}', using console output", style);
            Arc::new(ConsoleReporter::stdout())
        }
    }
}
