mod header;
mod image_chunk;
mod sink;
mod text_chunk;
mod validation;

pub use header::{HeaderWriter, ProvenanceHeaderWriter};
pub use image_chunk::{CAPTION_PREFIX, IMAGE_PATH_PREFIX, ImageChunkTextRenderer};
pub use sink::{LineBuffer, ReportStream, TextSink, WriterSink};
pub use text_chunk::TextChunkTextRenderer;

use crate::config::TxtReportConfig;
use crate::error::ReportResult;
use crate::explanation::{ChunkKind, ExplanationChunk};

/// Contract implemented by every per-chunk text renderer.
///
/// Arguments stay optional because the report layer forwards whatever it was
/// given; renderers reject missing or mistyped arguments before writing.
pub trait ChunkRenderer {
    /// Chunk variant this renderer accepts.
    fn chunk_kind(&self) -> ChunkKind;

    fn render(
        &self,
        chunk: Option<&ExplanationChunk>,
        stream: Option<ReportStream<'_>>,
        include_header: bool,
    ) -> ReportResult<()>;

    /// Renders with the header flag taken from `config`.
    fn render_with_config(
        &self,
        chunk: Option<&ExplanationChunk>,
        stream: Option<ReportStream<'_>>,
        config: &TxtReportConfig,
    ) -> ReportResult<()> {
        self.render(chunk, stream, config.include_header)
    }
}
