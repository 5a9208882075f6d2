//! txt-explain: plain-text report chunks for explanation data.
//!
//! Explanation chunks (text or image content tagged with rank, group, rule
//! and tags) are written to a caller-owned text sink in a fixed line layout,
//! optionally preceded by a provenance header.

pub mod config;
pub mod error;
pub mod explanation;
pub mod render;
pub mod telemetry;

pub use config::TxtReportConfig;
pub use error::{ReportError, ReportResult};
pub use render::{ChunkRenderer, ImageChunkTextRenderer, TextChunkTextRenderer};
