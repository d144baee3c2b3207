use aws_sdk_bedrockruntime::types::ImageFormat;

use motoria_classifier::classify::{
    GestureImage, classify_batch, image_format_for, parse_labels,
};
use motoria_classifier::error::ClassifierError;

fn frame(filename: &str, content_type: Option<&str>) -> GestureImage {
    GestureImage {
        filename: filename.to_string(),
        content_type: content_type.map(|s| s.to_string()),
        bytes: vec![0u8; 4],
    }
}

#[test]
fn parses_one_label_per_line() {
    let labels = parse_labels("fist\npalm\nok\n", 3).expect("parses");
    assert_eq!(labels, vec!["fist", "palm", "ok"]);
}

#[test]
fn normalizes_whitespace_and_case() {
    let labels = parse_labels("  Fist \n\nPALM\n", 2).expect("parses");
    assert_eq!(labels, vec!["fist", "palm"]);
}

#[test]
fn label_count_mismatch_is_an_error() {
    let err = parse_labels("fist\npalm\n", 3).expect_err("two labels for three images");
    assert!(matches!(err, ClassifierError::ResponseParse(_)));
}

#[test]
fn out_of_vocabulary_label_is_an_error() {
    let err = parse_labels("fist\nwave\n", 2).expect_err("'wave' is not in the vocabulary");
    assert!(matches!(err, ClassifierError::UnknownLabel(label) if label == "wave"));
}

#[test]
fn content_type_wins_over_extension() {
    let format = image_format_for(&frame("frame-001.bin", Some("image/png"))).expect("sniffs");
    assert_eq!(format, ImageFormat::Png);
}

#[test]
fn extension_is_the_fallback() {
    let format = image_format_for(&frame("frame-001.JPG", None)).expect("sniffs");
    assert_eq!(format, ImageFormat::Jpeg);

    // An unrecognized content type still falls through to the extension.
    let format = image_format_for(&frame("frame-002.webp", Some("application/octet-stream")))
        .expect("sniffs");
    assert_eq!(format, ImageFormat::Webp);
}

#[test]
fn unknown_format_is_an_error() {
    let err = image_format_for(&frame("frame-001.tiff", None)).expect_err("tiff unsupported");
    assert!(matches!(err, ClassifierError::UnsupportedImageFormat(_)));
}

/// An empty batch short-circuits before any model call, so this runs
/// without credentials.
#[tokio::test]
async fn empty_batch_returns_no_labels() {
    let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new("us-east-1"))
        .load()
        .await;

    let labels = classify_batch(&config, "us.anthropic.claude-sonnet-4-6", &[])
        .await
        .expect("empty batch succeeds");
    assert!(labels.is_empty());
}
