use aws_sdk_s3::Client as S3Client;

/// Shared application state, injected into all route handlers via Axum state.
///
/// The classifier is addressed through the shared SDK config plus a model id;
/// handlers pass both explicitly per call.
#[derive(Clone)]
pub struct AppState {
    pub s3: S3Client,
    pub bucket: String,
    pub sdk_config: aws_config::SdkConfig,
    pub classifier_model_id: String,
    pub jwt_secret: String,
    pub token_ttl_minutes: u64,
}
