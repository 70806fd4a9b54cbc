use crate::list::LinkedList;
use log::{debug, info};
use std::fmt::Display;
use std::io::{self, Write};

/// Destination for the lines produced by [`LinkedList::report`].
pub trait ReportSink {
    fn emit(&mut self, line: &str) -> io::Result<()>;
}

/// Collects lines in memory.
impl ReportSink for Vec<String> {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

/// Forwards each line to the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ReportSink for LogSink {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        info!(target: "linked_list::report", "{}", line);
        Ok(())
    }
}

/// Writes each line, newline-terminated, to any `io::Write`.
#[derive(Debug)]
pub struct WriteSink<W: Write> {
    writer: W,
}

impl<W: Write> WriteSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for WriteSink<W> {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)
    }
}

fn value_or_null<T: Display>(value: Option<&T>) -> String {
    value.map_or_else(|| "null".to_string(), |v| v.to_string())
}

impl<T: Display> LinkedList<T> {
    /// `Size: <n>, Head: <v>, Tail: <v>`, with `null` standing in for a missing end.
    pub fn summary(&self) -> String {
        format!(
            "Size: {}, Head: {}, Tail: {}",
            self.size(),
            value_or_null(self.head().map(|n| n.value())),
            value_or_null(self.tail().map(|n| n.value())),
        )
    }

    /// Sends the rendering and then the summary line to `sink`.
    pub fn report<S: ReportSink + ?Sized>(&self, sink: &mut S) -> io::Result<()> {
        debug!("reporting list of size {}", self.size());
        sink.emit(&self.to_string())?;
        sink.emit(&self.summary())
    }
}
