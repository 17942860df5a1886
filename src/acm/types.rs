use crate::cert::{CertificateDetail, CertificateSummary, CertificateType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListCertificatesRequest<'a> {
    pub certificate_statuses: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListCertificatesResponse {
    #[serde(default)]
    pub certificate_summary_list: Vec<SummaryItem>,
    pub next_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SummaryItem {
    pub certificate_arn: String,
    #[serde(default)]
    pub domain_name: String,
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCertificateRequest<'a> {
    pub certificate_arn: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCertificateResponse {
    pub certificate: DetailItem,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetailItem {
    pub certificate_arn: String,
    pub domain_name: Option<String>,
    #[serde(rename = "Type")]
    pub cert_type: CertificateType,
    pub status: Option<String>,
    /// Epoch seconds
    pub created_at: Option<f64>,
    /// Epoch seconds
    pub imported_at: Option<f64>,
}

/// Error body of the JSON 1.1 protocol
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "__type")]
    pub error_type: Option<String>,
    #[serde(alias = "Message")]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// `com.amazonaws.acm#ResourceNotFoundException` -> `ResourceNotFoundException`
    pub fn code(&self) -> Option<&str> {
        self.error_type.as_deref().map(|t| {
            let t = t.rsplit('#').next().unwrap_or(t);
            t.split(':').next().unwrap_or(t)
        })
    }
}

pub fn epoch_to_datetime(seconds: f64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis((seconds * 1000.0).round() as i64)
}

impl From<SummaryItem> for CertificateSummary {
    fn from(item: SummaryItem) -> Self {
        Self {
            domain_name: item.domain_name,
            arn: item.certificate_arn,
            status: item.status,
        }
    }
}

impl From<DetailItem> for CertificateDetail {
    fn from(item: DetailItem) -> Self {
        Self {
            arn: item.certificate_arn,
            domain_name: item.domain_name,
            cert_type: item.cert_type,
            status: item.status,
            created_at: item.created_at.and_then(epoch_to_datetime),
            imported_at: item.imported_at.and_then(epoch_to_datetime),
        }
    }
}
