pub mod lookup;
pub mod metadata;
#[cfg(test)]
pub(crate) mod test_mocks;

pub use lookup::{
    resolve_certificate_arn, CertificateDescriber, CertificateLister, CertificateResolver, Query,
};
pub use metadata::{
    CertificateDetail, CertificatePage, CertificateSummary, CertificateType, SummaryColumn,
    DEFAULT_STATUS, KNOWN_STATUSES,
};
