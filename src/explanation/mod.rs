//! Explanation chunk data model.
//!
//! Renderers consume these values read-only.

mod chunk;
mod content;

pub use chunk::{
    ChunkKind, ChunkProvenance, ExplanationChunk, ImageExplanationChunk, TextExplanationChunk,
};
pub use content::{ImageData, TextData};
