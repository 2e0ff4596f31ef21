//! Events pushed from the backend to the frontend.

use serde::Serialize;
use serde_json::Value;
use std::io::Write;
use std::sync::Mutex;

/// Emitted once by the background check when a newer release exists.
pub const UPDATE_AVAILABLE_EVENT: &str = "update-available";

/// Destination for events addressed to the frontend.
#[cfg_attr(test, mockall::automock)]
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &str, payload: Value);
}

#[derive(Serialize)]
struct EventMessage<'a> {
    event: &'a str,
    payload: Value,
}

/// Writes one JSON document per line. Events and bridge replies share the
/// same writer, so whole lines are written under a lock.
pub struct JsonLineSink {
    out: Mutex<Box<dyn Write + Send>>,
}

impl JsonLineSink {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }

    pub fn write_message<T: Serialize>(&self, message: &T) -> std::io::Result<()> {
        let mut line = serde_json::to_vec(message)?;
        line.push(b'\n');

        let mut out = self
            .out
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        out.write_all(&line)?;
        out.flush()
    }
}

impl EventSink for JsonLineSink {
    fn emit(&self, event: &str, payload: Value) {
        if let Err(e) = self.write_message(&EventMessage { event, payload }) {
            log::warn!("Failed to deliver {} event: {}", event, e);
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    /// Cloneable in-memory writer for inspecting sink output.
    #[derive(Clone, Default)]
    pub struct SharedBuffer(pub Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub fn lines(&self) -> Vec<serde_json::Value> {
            let bytes = self.0.lock().unwrap().clone();
            String::from_utf8(bytes)
                .unwrap()
                .lines()
                .map(|l| serde_json::from_str(l).unwrap())
                .collect()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
}
