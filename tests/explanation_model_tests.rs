use txt_explain::explanation::{
    ChunkKind, ChunkProvenance, ExplanationChunk, ImageData, ImageExplanationChunk, TextData,
    TextExplanationChunk,
};
use txt_explain::{ReportError, TxtReportConfig};

#[test]
fn image_data_rejects_blank_path() {
    for path in ["", "   "] {
        let err = ImageData::new(path).expect_err("blank path must be rejected");
        assert!(matches!(err, ReportError::InvalidData(_)));
    }
}

#[test]
fn default_provenance_has_zero_rank_and_no_labels() {
    let chunk = ImageExplanationChunk::new(ImageData::new("a.png").expect("valid image data"));

    assert_eq!(chunk.provenance.rank, 0);
    assert_eq!(chunk.provenance.group(), None);
    assert_eq!(chunk.provenance.rule(), None);
    assert!(chunk.provenance.tags.is_empty());
}

#[test]
fn chunk_kind_and_variant_accessors_agree() {
    let image: ExplanationChunk =
        ImageExplanationChunk::new(ImageData::new("a.png").expect("valid image data")).into();
    let text: ExplanationChunk = TextExplanationChunk::new(TextData::new("t")).into();

    assert_eq!(image.kind(), ChunkKind::Image);
    assert!(image.as_image().is_some());
    assert!(image.as_text().is_none());
    assert_eq!(text.kind(), ChunkKind::Text);
    assert!(text.as_image().is_none());
}

#[test]
fn explanation_chunk_json_roundtrip() {
    let provenance = ChunkProvenance::new(-10, "testGroup", "testRule", ["tag1", "tag2"]);
    let content = ImageData::with_caption("test.jpg", "testCaption").expect("valid image data");
    let chunk = ExplanationChunk::from(ImageExplanationChunk::with_provenance(provenance, content));

    let json = serde_json::to_string(&chunk).expect("chunk should serialize");
    assert!(json.contains(r#""kind":"image""#));
    let restored: ExplanationChunk = serde_json::from_str(&json).expect("chunk should parse");

    assert_eq!(restored, chunk);
}

#[test]
fn config_defaults_fill_missing_fields() {
    let config = TxtReportConfig::from_json_str("{}").expect("empty config should parse");

    assert_eq!(config, TxtReportConfig::default());
    assert!(config.include_header);
    assert_eq!(config.tag_separator, " ");
}

#[test]
fn config_json_roundtrip() {
    let config = TxtReportConfig::default()
        .with_include_header(false)
        .with_tag_separator(", ");

    let json = config.to_json_pretty().expect("config should serialize");
    let restored = TxtReportConfig::from_json_str(&json).expect("config should deserialize");

    assert_eq!(restored, config);
}

#[test]
fn config_rejects_line_breaking_separator() {
    for input in [r#"{"tag_separator":""}"#, r#"{"tag_separator":"\n"}"#] {
        let err = TxtReportConfig::from_json_str(input).expect_err("separator must be rejected");
        assert!(matches!(err, ReportError::InvalidData(_)));
    }
}
