//! JSONL transcript writer.
//!
//! Each [`ConversationEvent`] (log line, speech request, command, input) is
//! written as one JSON object per line carrying `type` and `timestamp`
//! fields. Files are opened in append mode so consecutive sessions share a
//! transcript, each starting with a `session_start` record.

use hal_application::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use serde_json::{Map, Value, json};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, warn};

/// Appends conversation events to a JSONL file.
pub struct JsonlTranscriptLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
    write_failed: AtomicBool,
}

impl JsonlTranscriptLogger {
    /// Open (or create) the transcript at `path`, creating parent directories.
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        debug!("Transcript opened at {}", path.display());

        let logger = Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
            write_failed: AtomicBool::new(false),
        };
        logger.log(ConversationEvent::new(
            "session_start",
            json!({ "version": env!("CARGO_PKG_VERSION") }),
        ));
        Ok(logger)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_line(&self, line: &str) -> std::io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| std::io::Error::other("transcript writer poisoned"))?;
        writeln!(writer, "{}", line)?;
        // Flush every record; a crash should not lose the tail of the chat.
        writer.flush()
    }
}

/// Merge `type` and `timestamp` into the payload; non-object payloads are
/// wrapped under `data`.
fn to_record(event: ConversationEvent, timestamp: String) -> Value {
    let mut record = Map::new();
    record.insert("type".to_string(), Value::from(event.event_type));
    record.insert("timestamp".to_string(), Value::from(timestamp));

    match event.payload {
        Value::Object(fields) => {
            for (key, value) in fields {
                record.entry(key).or_insert(value);
            }
        }
        other => {
            record.insert("data".to_string(), other);
        }
    }
    Value::Object(record)
}

impl ConversationLogger for JsonlTranscriptLogger {
    fn log(&self, event: ConversationEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let record = to_record(event, timestamp);

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Err(e) = self.write_line(&line)
            && !self.write_failed.swap(true, Ordering::Relaxed)
        {
            warn!("Could not write transcript {}: {}", self.path.display(), e);
        }
    }
}

impl Drop for JsonlTranscriptLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        let mut content = String::new();
        File::open(path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_one_record_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.transcript.jsonl");
        let logger = JsonlTranscriptLogger::open(&path).unwrap();
        assert_eq!(logger.path(), path.as_path());

        logger.log(ConversationEvent::new(
            "log_line",
            serde_json::json!({
                "text": "Hello! This is HAL.",
                "align": "right",
                "color": "#00805a"
            }),
        ));
        logger.log(ConversationEvent::new(
            "speech",
            serde_json::json!({ "text": "Hello! This is hal.", "ok": true }),
        ));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records.len(), 3);
        for record in &records {
            assert!(record.get("timestamp").is_some());
        }
        assert_eq!(records[0]["type"], "session_start");
        assert_eq!(records[1]["type"], "log_line");
        assert_eq!(records[1]["align"], "right");
        assert_eq!(records[2]["type"], "speech");
        assert_eq!(records[2]["ok"], true);
    }

    #[test]
    fn test_non_object_payload_is_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wrapped.jsonl");
        let logger = JsonlTranscriptLogger::open(&path).unwrap();

        logger.log(ConversationEvent::new("input", serde_json::json!("open the pod bay doors")));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records[1]["type"], "input");
        assert_eq!(records[1]["data"], "open the pod bay doors");
    }

    #[test]
    fn test_sessions_append() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("append.jsonl");
        drop(JsonlTranscriptLogger::open(&path).unwrap());
        drop(JsonlTranscriptLogger::open(&path).unwrap());

        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r["type"] == "session_start"));
    }

    #[test]
    fn test_payload_cannot_override_type() {
        let event = ConversationEvent::new("speech", json!({ "type": "spoofed", "text": "hi" }));
        let record = to_record(event, "2001-04-02T00:00:00.000Z".to_string());
        assert_eq!(record["type"], "speech");
        assert_eq!(record["text"], "hi");
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("t.jsonl");
        assert!(JsonlTranscriptLogger::open(&path).is_ok());
        assert!(path.exists());
    }
}
