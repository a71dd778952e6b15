//! Object-storage upload for generated reports.
//!
//! Talks to an S3-compatible endpoint (MinIO, or AWS via the virtual-hosted
//! bucket URL) with a plain HTTP PUT. The client is cheap to clone; the
//! underlying connection pool is shared.

use crate::infra::config;

#[derive(Clone)]
pub struct ObjectStoreClient {
    http: reqwest::Client,
    base_url: String,
}

impl ObjectStoreClient {
    /// Builds the client from `AWS_S3NAME` / `AWS_REGION` / `S3_ENDPOINT`.
    pub fn from_env() -> Self {
        Self::new(config::s3_endpoint(), &config::s3_bucket(), &config::aws_region())
    }

    pub fn new(endpoint: Option<String>, bucket: &str, region: &str) -> Self {
        let base_url = match endpoint {
            Some(endpoint) => format!("{}/{}", endpoint.trim_end_matches('/'), bucket),
            None => format!("https://{}.s3.{}.amazonaws.com", bucket, region),
        };
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// URL an object key resolves to once uploaded.
    pub fn object_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url, key)
    }

    /// Uploads the body under `key` and returns the object's URL.
    pub async fn put(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> anyhow::Result<String> {
        let url = self.object_url(key);
        let response = self
            .http
            .put(&url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "object store returned {} uploading '{}'",
                response.status(),
                key
            ));
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aws_endpoint_is_derived_from_bucket_and_region() {
        let store = ObjectStoreClient::new(None, "sales-reports", "us-east-1");
        assert_eq!(
            store.object_url("reports/sales-report-1.pdf"),
            "https://sales-reports.s3.us-east-1.amazonaws.com/reports/sales-report-1.pdf"
        );
    }

    #[test]
    fn explicit_endpoint_is_used_verbatim() {
        let store =
            ObjectStoreClient::new(Some("http://localhost:9000/".to_string()), "reports", "x");
        assert_eq!(
            store.object_url("reports/sales-report-1.pdf"),
            "http://localhost:9000/reports/reports/sales-report-1.pdf"
        );
    }
}
