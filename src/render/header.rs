use crate::config::TxtReportConfig;
use crate::error::ReportResult;
use crate::explanation::ExplanationChunk;

use super::TextSink;

/// Writes the preamble that precedes a chunk body.
///
/// Implementations must write every header line before returning; renderers
/// start the body right after.
pub trait HeaderWriter {
    fn write_header(&self, chunk: &ExplanationChunk, sink: &mut dyn TextSink) -> ReportResult<()>;
}

/// Header listing the chunk provenance, one field per line.
///
/// `Rank` is always written; `Group`, `Rule` and `Tags` only when they carry
/// a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvenanceHeaderWriter {
    tag_separator: String,
}

impl Default for ProvenanceHeaderWriter {
    fn default() -> Self {
        Self {
            tag_separator: " ".to_owned(),
        }
    }
}

impl ProvenanceHeaderWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &TxtReportConfig) -> ReportResult<Self> {
        config.validate()?;
        Ok(Self {
            tag_separator: config.tag_separator.clone(),
        })
    }

    #[must_use]
    pub fn tag_separator(&self) -> &str {
        &self.tag_separator
    }
}

impl HeaderWriter for ProvenanceHeaderWriter {
    fn write_header(&self, chunk: &ExplanationChunk, sink: &mut dyn TextSink) -> ReportResult<()> {
        let provenance = chunk.provenance();
        sink.write_line(&format!("Rank: {}", provenance.rank))?;
        if let Some(group) = provenance.group() {
            sink.write_line(&format!("Group: {group}"))?;
        }
        if let Some(rule) = provenance.rule() {
            sink.write_line(&format!("Rule: {rule}"))?;
        }
        if !provenance.tags.is_empty() {
            let tags = provenance.tags.join(&self.tag_separator);
            sink.write_line(&format!("Tags: {tags}"))?;
        }
        Ok(())
    }
}
