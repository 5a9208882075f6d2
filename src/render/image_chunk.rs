use tracing::{debug, trace};

use crate::config::TxtReportConfig;
use crate::error::ReportResult;
use crate::explanation::{ChunkKind, ExplanationChunk, ImageExplanationChunk};

use super::sink::CountingSink;
use super::validation::validate_render_arguments;
use super::{ChunkRenderer, HeaderWriter, ProvenanceHeaderWriter, ReportStream, TextSink};

pub const CAPTION_PREFIX: &str = "Caption is: ";
pub const IMAGE_PATH_PREFIX: &str = "The path to this image is: ";

/// Plain-text renderer for [`ImageExplanationChunk`].
///
/// Output layout, after the optional header block:
///
/// ```text
/// Caption is: <caption>               (only when the caption is non-empty)
/// The path to this image is: <path>
/// <empty line>
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImageChunkTextRenderer<H = ProvenanceHeaderWriter> {
    header_writer: H,
}

impl ImageChunkTextRenderer {
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

impl<H: HeaderWriter> ImageChunkTextRenderer<H> {
    #[must_use]
    pub fn with_header_writer(header_writer: H) -> Self {
        Self { header_writer }
    }

    #[must_use]
    pub fn header_writer(&self) -> &H {
        &self.header_writer
    }

    fn write_body(chunk: &ImageExplanationChunk, sink: &mut dyn TextSink) -> ReportResult<()> {
        if let Some(caption) = chunk.content.visible_caption() {
            sink.write_line(&format!("{CAPTION_PREFIX}{caption}"))?;
        }
        sink.write_line(&format!("{IMAGE_PATH_PREFIX}{}", chunk.content.image_path))?;
        sink.write_line("")?;
        Ok(())
    }
}

impl<H: HeaderWriter> ChunkRenderer for ImageChunkTextRenderer<H> {
    fn chunk_kind(&self) -> ChunkKind {
        ChunkKind::Image
    }

    fn render(
        &self,
        chunk: Option<&ExplanationChunk>,
        stream: Option<ReportStream<'_>>,
        include_header: bool,
    ) -> ReportResult<()> {
        let (chunk, image, sink) = validate_render_arguments(
            chunk,
            stream,
            ChunkKind::Image,
            ExplanationChunk::as_image,
        )?;
        image.content.validate()?;
        trace!(
            image_path = %image.content.image_path,
            include_header,
            "render image chunk"
        );

        let mut sink = CountingSink::new(sink);
        if include_header {
            self.header_writer.write_header(chunk, &mut sink)?;
        }
        Self::write_body(image, &mut sink)?;

        debug!(
            lines_written = sink.lines_written,
            include_header, "rendered image chunk"
        );
        Ok(())
    }
}
