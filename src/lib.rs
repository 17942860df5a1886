pub mod acm;
pub mod cert;
pub mod cli;
pub mod config;
pub mod utils;

// Re-export specific items to avoid conflicts
pub use acm::client::AcmClient;
pub use cert::{
    resolve_certificate_arn, CertificateDescriber, CertificateDetail, CertificateLister,
    CertificateResolver, CertificateSummary, CertificateType, Query,
};
pub use config::AcmSettings;
pub use utils::errors::{AcmLookupError, Result};
