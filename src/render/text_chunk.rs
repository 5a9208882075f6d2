use tracing::{debug, trace};

use crate::config::TxtReportConfig;
use crate::error::ReportResult;
use crate::explanation::{ChunkKind, ExplanationChunk};

use super::sink::CountingSink;
use super::validation::validate_render_arguments;
use super::{ChunkRenderer, HeaderWriter, ProvenanceHeaderWriter, ReportStream, TextSink};

/// Plain-text renderer for text chunks: the text itself, then an empty line.
#[derive(Debug, Clone, Default)]
pub struct TextChunkTextRenderer<H = ProvenanceHeaderWriter> {
    header_writer: H,
}

impl TextChunkTextRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &TxtReportConfig) -> ReportResult<Self> {
        Ok(Self {
            header_writer: ProvenanceHeaderWriter::from_config(config)?,
        })
    }
}

impl<H: HeaderWriter> TextChunkTextRenderer<H> {
    #[must_use]
    pub fn with_header_writer(header_writer: H) -> Self {
        Self { header_writer }
    }
}

impl<H: HeaderWriter> ChunkRenderer for TextChunkTextRenderer<H> {
    fn chunk_kind(&self) -> ChunkKind {
        ChunkKind::Text
    }

    fn render(
        &self,
        chunk: Option<&ExplanationChunk>,
        stream: Option<ReportStream<'_>>,
        include_header: bool,
    ) -> ReportResult<()> {
        let (chunk, text, sink) =
            validate_render_arguments(chunk, stream, ChunkKind::Text, ExplanationChunk::as_text)?;
        trace!(include_header, "render text chunk");

        let mut sink = CountingSink::new(sink);
        if include_header {
            self.header_writer.write_header(chunk, &mut sink)?;
        }
        sink.write_line(&text.content.text)?;
        sink.write_line("")?;

        debug!(
            lines_written = sink.lines_written,
            include_header, "rendered text chunk"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explanation::{ImageData, ImageExplanationChunk, TextData, TextExplanationChunk};
    use crate::render::LineBuffer;

    struct FixedHeader;

    impl HeaderWriter for FixedHeader {
        fn write_header(
            &self,
            _chunk: &ExplanationChunk,
            sink: &mut dyn TextSink,
        ) -> ReportResult<()> {
            sink.write_line("== header ==")?;
            Ok(())
        }
    }

    #[test]
    fn text_chunk_body_is_text_then_separator() {
        let chunk = ExplanationChunk::from(TextExplanationChunk::new(TextData::new("hello")));
        let mut sink = LineBuffer::new();

        TextChunkTextRenderer::new()
            .render(Some(&chunk), Some((&mut sink).into()), true)
            .expect("render");

        assert_eq!(sink.lines(), ["Rank: 0", "hello", ""]);
    }

    #[test]
    fn custom_header_precedes_text_body() {
        let chunk = ExplanationChunk::from(TextExplanationChunk::new(TextData::new("hello")));
        let mut sink = LineBuffer::new();

        TextChunkTextRenderer::with_header_writer(FixedHeader)
            .render(Some(&chunk), Some((&mut sink).into()), true)
            .expect("render");

        assert_eq!(sink.lines(), ["== header ==", "hello", ""]);
    }

    #[test]
    fn text_renderer_reports_text_kind() {
        assert_eq!(TextChunkTextRenderer::new().chunk_kind(), ChunkKind::Text);
    }

    #[test]
    fn image_chunk_is_rejected_by_text_renderer() {
        let content = ImageData::new("test.jpg").expect("valid image data");
        let chunk = ExplanationChunk::from(ImageExplanationChunk::new(content));
        let mut sink = LineBuffer::new();

        let err = TextChunkTextRenderer::new()
            .render(Some(&chunk), Some((&mut sink).into()), false)
            .expect_err("image chunk must be rejected");

        assert_eq!(
            err.to_string(),
            "The ExplanationChunk must be type of TextExplanationChunk"
        );
        assert!(sink.is_empty());
    }
}
