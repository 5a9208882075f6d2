use serde::{Deserialize, Serialize};

use super::{ImageData, TextData};

/// Where a chunk came from and how it is classified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkProvenance {
    #[serde(default)]
    pub rank: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl ChunkProvenance {
    #[must_use]
    pub fn new<T, S>(
        rank: i32,
        group: impl Into<String>,
        rule: impl Into<String>,
        tags: T,
    ) -> Self
    where
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rank,
            group: Some(group.into()),
            rule: Some(rule.into()),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref().filter(|group| !group.is_empty())
    }

    #[must_use]
    pub fn rule(&self) -> Option<&str> {
        self.rule.as_deref().filter(|rule| !rule.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageExplanationChunk {
    #[serde(flatten)]
    pub provenance: ChunkProvenance,
    pub content: ImageData,
}

impl ImageExplanationChunk {
    /// Chunk with default provenance: rank 0, no group, rule or tags.
    #[must_use]
    pub fn new(content: ImageData) -> Self {
        Self {
            provenance: ChunkProvenance::default(),
            content,
        }
    }

    #[must_use]
    pub fn with_provenance(provenance: ChunkProvenance, content: ImageData) -> Self {
        Self {
            provenance,
            content,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextExplanationChunk {
    #[serde(flatten)]
    pub provenance: ChunkProvenance,
    pub content: TextData,
}

impl TextExplanationChunk {
    #[must_use]
    pub fn new(content: TextData) -> Self {
        Self {
            provenance: ChunkProvenance::default(),
            content,
        }
    }

    #[must_use]
    pub fn with_provenance(provenance: ChunkProvenance, content: TextData) -> Self {
        Self {
            provenance,
            content,
        }
    }
}

/// Discriminant of [`ExplanationChunk`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkKind {
    Text,
    Image,
}

impl ChunkKind {
    /// Type name used in renderer error messages.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Text => "TextExplanationChunk",
            Self::Image => "ImageExplanationChunk",
        }
    }
}

/// Closed family of explanation chunks a report can contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExplanationChunk {
    Text(TextExplanationChunk),
    Image(ImageExplanationChunk),
}

impl ExplanationChunk {
    #[must_use]
    pub const fn kind(&self) -> ChunkKind {
        match self {
            Self::Text(_) => ChunkKind::Text,
            Self::Image(_) => ChunkKind::Image,
        }
    }

    #[must_use]
    pub const fn provenance(&self) -> &ChunkProvenance {
        match self {
            Self::Text(chunk) => &chunk.provenance,
            Self::Image(chunk) => &chunk.provenance,
        }
    }

    #[must_use]
    pub const fn as_image(&self) -> Option<&ImageExplanationChunk> {
        match self {
            Self::Image(chunk) => Some(chunk),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub const fn as_text(&self) -> Option<&TextExplanationChunk> {
        match self {
            Self::Text(chunk) => Some(chunk),
            Self::Image(_) => None,
        }
    }
}

impl From<ImageExplanationChunk> for ExplanationChunk {
    fn from(chunk: ImageExplanationChunk) -> Self {
        Self::Image(chunk)
    }
}

impl From<TextExplanationChunk> for ExplanationChunk {
    fn from(chunk: TextExplanationChunk) -> Self {
        Self::Text(chunk)
    }
}
