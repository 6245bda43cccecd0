//! JSONL file writer for meeting events.
//!
//! Each [`ConversationEvent`] becomes one JSON line: the event payload plus
//! `type`, `timestamp` and a per-file `event_index`. Lines are appended, so
//! several meetings can share one log file.

use meeting_application::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

struct Sink {
    writer: BufWriter<File>,
    next_index: u64,
}

/// Conversation logger that appends one JSON object per line.
///
/// Thread-safe via a `Mutex`; flushed after every line and on `Drop`.
pub struct JsonlConversationLogger {
    sink: Mutex<Sink>,
    path: PathBuf,
}

impl JsonlConversationLogger {
    /// Open (or create) the log file at `path`, creating parent directories.
    ///
    /// Returns `None` after logging a warning when the file cannot be opened;
    /// the meeting then runs without a conversation log.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create conversation log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .inspect_err(|e| {
                warn!(
                    "Could not open conversation log file {}: {}",
                    path.display(),
                    e
                )
            })
            .ok()?;

        Some(Self {
            sink: Mutex::new(Sink {
                writer: BufWriter::new(file),
                next_index: 0,
            }),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(event: ConversationEvent, index: u64) -> Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut map = match event.payload {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        map.insert("type".to_string(), Value::from(event.event_type));
        map.insert("timestamp".to_string(), Value::from(timestamp));
        map.insert("event_index".to_string(), Value::from(index));
        Value::Object(map)
    }
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let Ok(mut sink) = self.sink.lock() else {
            return;
        };

        let record = Self::record(event, sink.next_index);
        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        sink.next_index += 1;
        // Flushed per line so an aborted meeting still leaves a complete log
        let _ = writeln!(sink.writer, "{}", line);
        let _ = sink.writer.flush();
    }
}

impl Drop for JsonlConversationLogger {
    fn drop(&mut self) {
        if let Ok(mut sink) = self.sink.lock() {
            let _ = sink.writer.flush();
        }
    }
}
