use crate::error::{ReportError, ReportResult};
use crate::explanation::{ChunkKind, ExplanationChunk};

use super::{ReportStream, TextSink};

/// Checks render arguments in contract order and hands back the borrowed
/// chunk, its selected variant and the text sink.
///
/// Nothing is written to the sink here, so every failure leaves it untouched.
pub(super) fn validate_render_arguments<'c, 's, T>(
    chunk: Option<&'c ExplanationChunk>,
    stream: Option<ReportStream<'s>>,
    expected: ChunkKind,
    select: impl Fn(&'c ExplanationChunk) -> Option<&'c T>,
) -> ReportResult<(&'c ExplanationChunk, &'c T, &'s mut dyn TextSink)> {
    let (chunk, stream) = match (chunk, stream) {
        (None, None) => return Err(ReportError::MissingArguments),
        (None, Some(_)) => return Err(ReportError::MissingArgument { name: "echunk" }),
        (Some(_), None) => return Err(ReportError::MissingArgument { name: "stream" }),
        (Some(chunk), Some(stream)) => (chunk, stream),
    };

    let Some(variant) = select(chunk) else {
        return Err(ReportError::TypeMismatch(format!(
            "The ExplanationChunk must be type of {}",
            expected.type_name()
        )));
    };

    let sink = stream.into_text_sink()?;
    Ok((chunk, variant, sink))
}
