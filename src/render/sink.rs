use std::fmt;
use std::io::{self, Write};

use crate::error::{ReportError, ReportResult};

/// Capability required by the text renderers: append one line of text.
pub trait TextSink {
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Adapts any [`io::Write`] (files, buffers, sockets) into a [`TextSink`].
///
/// Each line is terminated with `\n`. Flushing and closing stay with the
/// owner of the writer; renderers never call [`Write::flush`].
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TextSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")
    }
}

/// In-memory sink used by tests and callers that post-process lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Joined text, every line terminated with `\n`.
    #[must_use]
    pub fn to_text(&self) -> String {
        let capacity = self.lines.iter().map(|line| line.len() + 1).sum();
        let mut text = String::with_capacity(capacity);
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}

impl TextSink for LineBuffer {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_owned());
        Ok(())
    }
}

/// Stream handle handed to a chunk renderer by the report layer.
///
/// Reports of other formats pass byte streams; text renderers only accept
/// [`ReportStream::Text`].
pub enum ReportStream<'a> {
    Text(&'a mut dyn TextSink),
    Binary(&'a mut dyn Write),
}

impl<'a> ReportStream<'a> {
    /// Unwraps the text sink or fails with the `stream` type mismatch.
    pub fn into_text_sink(self) -> ReportResult<&'a mut dyn TextSink> {
        match self {
            Self::Text(sink) => Ok(sink),
            Self::Binary(_) => Err(ReportError::TypeMismatch(
                "The argument 'stream' must be the type of TextSink".to_owned(),
            )),
        }
    }
}

impl<'a> From<&'a mut LineBuffer> for ReportStream<'a> {
    fn from(sink: &'a mut LineBuffer) -> Self {
        Self::Text(sink)
    }
}

impl<'a, W: Write> From<&'a mut WriterSink<W>> for ReportStream<'a> {
    fn from(sink: &'a mut WriterSink<W>) -> Self {
        Self::Text(sink)
    }
}

impl fmt::Debug for ReportStream<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(_) => f.write_str("ReportStream::Text"),
            Self::Binary(_) => f.write_str("ReportStream::Binary"),
        }
    }
}

/// Counts lines passing through to the wrapped sink.
pub(super) struct CountingSink<'a> {
    inner: &'a mut dyn TextSink,
    pub(super) lines_written: usize,
}

impl<'a> CountingSink<'a> {
    pub(super) fn new(inner: &'a mut dyn TextSink) -> Self {
        Self {
            inner,
            lines_written: 0,
        }
    }
}

impl TextSink for CountingSink<'_> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.inner.write_line(line)?;
        self.lines_written += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_sink_terminates_each_line() {
        let mut sink = WriterSink::new(Vec::new());
        sink.write_line("first").expect("write first");
        sink.write_line("").expect("write empty");

        assert_eq!(sink.into_inner(), b"first\n\n".to_vec());
    }

    #[test]
    fn line_buffer_to_text_matches_writer_output() {
        let mut buffer = LineBuffer::new();
        let mut writer = WriterSink::new(Vec::new());
        for line in ["a", "", "b"] {
            buffer.write_line(line).expect("buffer write");
            writer.write_line(line).expect("writer write");
        }

        assert_eq!(buffer.to_text().into_bytes(), writer.into_inner());
    }

    #[test]
    fn binary_stream_is_rejected_as_text_sink() {
        let mut bytes: Vec<u8> = Vec::new();
        let err = ReportStream::Binary(&mut bytes)
            .into_text_sink()
            .err()
            .expect("binary stream must be rejected");

        assert!(matches!(err, ReportError::TypeMismatch(_)));
        assert!(bytes.is_empty());
    }
}
