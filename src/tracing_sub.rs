//! Tracing subscriber setup.
//!
//! Stdout belongs to the TUI, so diagnostics go to a log file when one
//! is configured and to stderr otherwise (visible after the alternate
//! screen closes, or when piping stderr elsewhere).

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use tracing::Level;

pub struct LogWriter {
    inner: LogTarget,
}

enum LogTarget {
    File(Arc<File>),
    Stderr(io::Stderr),
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.inner {
            LogTarget::File(f) => (&**f).write(buf),
            LogTarget::Stderr(s) => s.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.inner {
            LogTarget::File(f) => (&**f).flush(),
            LogTarget::Stderr(s) => s.flush(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SubscriberMakeWriter {
    file: Option<Arc<File>>,
}

impl SubscriberMakeWriter {
    pub fn to_file(file: File) -> Self {
        Self {
            file: Some(Arc::new(file)),
        }
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SubscriberMakeWriter {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        let inner = match &self.file {
            Some(file) => LogTarget::File(Arc::clone(file)),
            None => LogTarget::Stderr(io::stderr()),
        };
        LogWriter { inner }
    }
}

/// Install the global subscriber. Safe to call more than once; later
/// calls are no-ops.
pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    let make_writer = match log_file {
        Some(path) => SubscriberMakeWriter::to_file(File::create(path)?),
        None => SubscriberMakeWriter::default(),
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(make_writer)
        .with_ansi(false)
        .with_target(false)
        .try_init();
    Ok(())
}
