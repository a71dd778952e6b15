//! Centralized configuration (environment variables + defaults).

/// Direct database URL override. When set, the secret store is skipped.
pub fn database_url_override() -> Option<String> {
    std::env::var("DATABASE_URL").ok()
}

/// Base URL of the secret store holding the database credentials.
pub fn secrets_url() -> Option<String> {
    std::env::var("SECRETS_URL").ok()
}

/// Name of the secret to fetch from the secret store.
pub fn secret_name() -> String {
    std::env::var("SECRET_NAME").unwrap_or_else(|_| "prod".to_string())
}

/// Object-storage bucket the sales reports are uploaded to.
pub fn s3_bucket() -> String {
    std::env::var("AWS_S3NAME").unwrap_or_else(|_| "sales-reports".to_string())
}

/// Region used when deriving the default object-storage endpoint.
pub fn aws_region() -> String {
    std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string())
}

/// Explicit object-storage endpoint (e.g. a MinIO deployment). When unset,
/// the AWS virtual-hosted endpoint for bucket+region is used.
pub fn s3_endpoint() -> Option<String> {
    std::env::var("S3_ENDPOINT").ok()
}

/// Address the HTTP server binds to.
pub fn bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_env_is_unset() {
        // These variables are not set in the test environment.
        std::env::remove_var("SECRET_NAME");
        std::env::remove_var("AWS_S3NAME");
        std::env::remove_var("AWS_REGION");
        std::env::remove_var("BIND_ADDR");
        assert_eq!(secret_name(), "prod");
        assert_eq!(s3_bucket(), "sales-reports");
        assert_eq!(aws_region(), "us-east-1");
        assert_eq!(bind_addr(), "0.0.0.0:3000");
    }
}
