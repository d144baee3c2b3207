//! Batched gesture classification via the Bedrock Converse API.
//!
//! Every captured frame of a sub-test goes into a single Converse call as an
//! `ImageBlock`; the model is instructed to answer one vocabulary label per
//! line, in input order. There is no retry and no partial result — the call
//! yields a full batch of labels or fails as a whole.

use std::path::Path;

use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, ImageBlock, ImageFormat, ImageSource, Message,
    SystemContentBlock,
};
use tracing::info;

use crate::error::ClassifierError;

/// The fixed vocabulary the classifier answers with.
pub const GESTURE_LABELS: &[&str] = &[
    "call", "dislike", "fist", "four", "like", "mute", "ok", "one", "palm", "peace", "rock",
    "stop", "three", "two_up",
];

const CLASSIFY_SYSTEM_PROMPT: &str = "\
You label hand-gesture photographs. For every image, answer with exactly one \
label from the allowed vocabulary: lowercase, one label per line, in the \
order the images appear. Output nothing else — no numbering, no commentary.";

/// A single captured frame submitted for classification.
#[derive(Debug, Clone)]
pub struct GestureImage {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Classify a batch of gesture frames. Returns one label per image, in
/// input order.
///
/// An empty batch returns an empty label sequence without invoking the
/// model. The caller chooses the model (e.g. a Claude inference profile).
pub async fn classify_batch(
    config: &aws_config::SdkConfig,
    model_id: &str,
    images: &[GestureImage],
) -> Result<Vec<String>, ClassifierError> {
    if images.is_empty() {
        return Ok(Vec::new());
    }

    let client = aws_sdk_bedrockruntime::Client::new(config);

    let mut message = Message::builder().role(ConversationRole::User);
    for image in images {
        let format = image_format_for(image)?;
        let block = ImageBlock::builder()
            .format(format)
            .source(ImageSource::Bytes(aws_smithy_types::Blob::new(
                image.bytes.clone(),
            )))
            .build()
            .map_err(|e| ClassifierError::Invocation(e.to_string()))?;
        message = message.content(ContentBlock::Image(block));
    }
    message = message.content(ContentBlock::Text(format!(
        "Label each of the {} images. Allowed labels: {}.",
        images.len(),
        GESTURE_LABELS.join(", ")
    )));

    let message = message
        .build()
        .map_err(|e| ClassifierError::Invocation(e.to_string()))?;

    info!(model_id, batch = images.len(), "classifying gesture batch");

    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(CLASSIFY_SYSTEM_PROMPT.to_string()))
        .messages(message)
        .send()
        .await
        .map_err(|e| ClassifierError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| ClassifierError::ResponseParse("no message in response".to_string()))?;

    let text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(t) = block {
                Some(t.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    let labels = parse_labels(&text, images.len())?;

    info!(model_id, batch = images.len(), "gesture batch classified");

    Ok(labels)
}

/// Parse the model's response into exactly `expected` vocabulary labels.
pub fn parse_labels(text: &str, expected: usize) -> Result<Vec<String>, ClassifierError> {
    let labels: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_ascii_lowercase)
        .collect();

    if labels.len() != expected {
        return Err(ClassifierError::ResponseParse(format!(
            "expected {expected} labels, got {}",
            labels.len()
        )));
    }

    for label in &labels {
        if !GESTURE_LABELS.contains(&label.as_str()) {
            return Err(ClassifierError::UnknownLabel(label.clone()));
        }
    }

    Ok(labels)
}

/// Map a frame to a Bedrock `ImageFormat`, preferring the multipart content
/// type and falling back to the filename extension.
pub fn image_format_for(image: &GestureImage) -> Result<ImageFormat, ClassifierError> {
    if let Some(ct) = &image.content_type
        && let Some(format) = image_format_for_content_type(ct)
    {
        return Ok(format);
    }

    Path::new(&image.filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(image_format_for_extension)
        .ok_or_else(|| ClassifierError::UnsupportedImageFormat(image.filename.clone()))
}

fn image_format_for_content_type(content_type: &str) -> Option<ImageFormat> {
    match content_type.to_ascii_lowercase().as_str() {
        "image/png" => Some(ImageFormat::Png),
        "image/jpeg" | "image/jpg" => Some(ImageFormat::Jpeg),
        "image/gif" => Some(ImageFormat::Gif),
        "image/webp" => Some(ImageFormat::Webp),
        _ => None,
    }
}

/// Map a file extension to a Bedrock `ImageFormat`. Returns `None` for
/// extensions the Converse API cannot carry.
pub fn image_format_for_extension(ext: &str) -> Option<ImageFormat> {
    match ext.to_lowercase().as_str() {
        "png" => Some(ImageFormat::Png),
        "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
        "gif" => Some(ImageFormat::Gif),
        "webp" => Some(ImageFormat::Webp),
        _ => None,
    }
}
