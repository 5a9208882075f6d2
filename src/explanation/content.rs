use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};

/// Image payload: a path or URI plus an optional caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData {
    pub image_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl ImageData {
    pub fn new(image_path: impl Into<String>) -> ReportResult<Self> {
        let data = Self {
            image_path: image_path.into(),
            caption: None,
        };
        data.validate()?;
        Ok(data)
    }

    pub fn with_caption(
        image_path: impl Into<String>,
        caption: impl Into<String>,
    ) -> ReportResult<Self> {
        let data = Self {
            image_path: image_path.into(),
            caption: Some(caption.into()),
        };
        data.validate()?;
        Ok(data)
    }

    /// Caption text when present and non-empty.
    #[must_use]
    pub fn visible_caption(&self) -> Option<&str> {
        self.caption.as_deref().filter(|caption| !caption.is_empty())
    }

    pub fn validate(&self) -> ReportResult<()> {
        if self.image_path.trim().is_empty() {
            return Err(ReportError::InvalidData(
                "image path must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Plain text payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextData {
    pub text: String,
}

impl TextData {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
