use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};

/// Settings for the plain-text chunk renderers.
///
/// Serializable so report pipelines can persist their setup next to the
/// report definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxtReportConfig {
    #[serde(default = "default_include_header")]
    pub include_header: bool,
    #[serde(default = "default_tag_separator")]
    pub tag_separator: String,
}

impl Default for TxtReportConfig {
    fn default() -> Self {
        Self {
            include_header: default_include_header(),
            tag_separator: default_tag_separator(),
        }
    }
}

impl TxtReportConfig {
    #[must_use]
    pub fn with_include_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    #[must_use]
    pub fn with_tag_separator(mut self, tag_separator: impl Into<String>) -> Self {
        self.tag_separator = tag_separator.into();
        self
    }

    pub fn validate(&self) -> ReportResult<()> {
        if self.tag_separator.is_empty() {
            return Err(ReportError::InvalidData(
                "tag separator must not be empty".to_owned(),
            ));
        }
        if self.tag_separator.contains(['\n', '\r']) {
            return Err(ReportError::InvalidData(
                "tag separator must not contain line breaks".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> ReportResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ReportError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ReportResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ReportError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_include_header() -> bool {
    true
}

fn default_tag_separator() -> String {
    " ".to_owned()
}
