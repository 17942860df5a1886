pub mod client;
pub mod sign;
pub mod types;

use reqwest::Client;

/// Service name used in the signature scope
pub const SERVICE_NAME: &str = "acm";

/// Value of `X-Amz-Target` is `CertificateManager.<Operation>`
pub const TARGET_PREFIX: &str = "CertificateManager";

pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// Create a standardized HTTP client with security best practices
pub fn create_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .use_rustls_tls()
        .build()
}
