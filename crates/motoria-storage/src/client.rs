use aws_sdk_s3::Client;

/// Load the default AWS configuration (region, credentials, endpoints).
/// Shared with the classifier, which builds its own client from it.
pub async fn load_config() -> aws_config::SdkConfig {
    aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await
}

/// Build an S3 client from the shared configuration.
pub fn build_client(config: &aws_config::SdkConfig) -> Client {
    Client::new(config)
}
