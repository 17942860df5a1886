use crate::utils::output::GetColumnValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Status requested when the caller gives none
pub const DEFAULT_STATUS: &str = "ISSUED";

/// Statuses the certificate manager reports
pub const KNOWN_STATUSES: &[&str] = &[
    "PENDING_VALIDATION",
    "ISSUED",
    "INACTIVE",
    "EXPIRED",
    "VALIDATION_TIMED_OUT",
    "REVOKED",
    "FAILED",
];

/// Listing record: identity and domain only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateSummary {
    pub domain_name: String,
    pub arn: String,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryColumn {
    Domain,
    Status,
    Arn,
}

impl FromStr for SummaryColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "domain" | "domain_name" => Ok(Self::Domain),
            "status" => Ok(Self::Status),
            "arn" => Ok(Self::Arn),
            _ => Err(format!("Invalid column: {s}")),
        }
    }
}

impl SummaryColumn {
    pub const DEFAULT: &'static [SummaryColumn] = &[Self::Domain, Self::Status, Self::Arn];

    pub fn header(&self) -> &'static str {
        match self {
            Self::Domain => "Domain",
            Self::Status => "Status",
            Self::Arn => "ARN",
        }
    }
}

impl GetColumnValue for CertificateSummary {
    fn get_column_value(&self, column: &SummaryColumn) -> String {
        match column {
            SummaryColumn::Domain => self.domain_name.clone(),
            SummaryColumn::Status => self.status.clone().unwrap_or_else(|| "-".to_string()),
            SummaryColumn::Arn => self.arn.clone(),
        }
    }
}

/// One page of listing results plus the token for the next page
#[derive(Debug, Clone, Default)]
pub struct CertificatePage {
    pub summaries: Vec<CertificateSummary>,
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CertificateType {
    AmazonIssued,
    Imported,
    Private,
    Other(String),
}

impl CertificateType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::AmazonIssued => "AMAZON_ISSUED",
            Self::Imported => "IMPORTED",
            Self::Private => "PRIVATE",
            Self::Other(s) => s,
        }
    }

    /// Exact, case-sensitive comparison against a requested type name
    pub fn matches(&self, requested: &str) -> bool {
        self.as_str() == requested
    }
}

impl From<String> for CertificateType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "AMAZON_ISSUED" => Self::AmazonIssued,
            "IMPORTED" => Self::Imported,
            "PRIVATE" => Self::Private,
            _ => Self::Other(s),
        }
    }
}

impl From<CertificateType> for String {
    fn from(t: CertificateType) -> Self {
        t.as_str().to_string()
    }
}

impl FromStr for CertificateType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl fmt::Display for CertificateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full record returned by a describe call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateDetail {
    pub arn: String,
    pub domain_name: Option<String>,
    pub cert_type: CertificateType,
    pub status: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub imported_at: Option<DateTime<Utc>>,
}

impl CertificateDetail {
    /// Recency timestamp: creation time, falling back to import time
    pub fn recency(&self) -> Option<DateTime<Utc>> {
        self.created_at.or(self.imported_at)
    }
}

impl fmt::Display for CertificateDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ARN: {}, Type: {}", self.arn, self.cert_type)?;
        if let Some(ts) = self.recency() {
            write!(f, ", Since: {}", ts.format("%Y-%m-%d %H:%M"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn detail(created: Option<i64>, imported: Option<i64>) -> CertificateDetail {
        CertificateDetail {
            arn: "arn:aws:acm:us-east-1:123456789012:certificate/a".to_string(),
            domain_name: None,
            cert_type: CertificateType::Imported,
            status: None,
            created_at: created.map(|t| Utc.timestamp_opt(t, 0).unwrap()),
            imported_at: imported.map(|t| Utc.timestamp_opt(t, 0).unwrap()),
        }
    }

    #[test]
    fn test_recency_prefers_created_at() {
        let d = detail(Some(200), Some(100));
        assert_eq!(d.recency().unwrap().timestamp(), 200);

        let d = detail(None, Some(100));
        assert_eq!(d.recency().unwrap().timestamp(), 100);

        assert!(detail(None, None).recency().is_none());
    }

    #[test]
    fn test_certificate_type_strings() {
        assert_eq!(
            CertificateType::from("AMAZON_ISSUED".to_string()),
            CertificateType::AmazonIssued
        );
        assert_eq!(
            CertificateType::from("SOMETHING_NEW".to_string()),
            CertificateType::Other("SOMETHING_NEW".to_string())
        );
        assert!(CertificateType::Imported.matches("IMPORTED"));
        assert!(!CertificateType::Imported.matches("imported"));
        assert!(CertificateType::Other("X".to_string()).matches("X"));
    }

    #[test]
    fn test_summary_columns() {
        let summary = CertificateSummary {
            domain_name: "example.com".to_string(),
            arn: "arn:1".to_string(),
            status: None,
        };
        assert_eq!("ARN".parse::<SummaryColumn>().unwrap(), SummaryColumn::Arn);
        assert!("serial".parse::<SummaryColumn>().is_err());
        assert_eq!(summary.get_column_value(&SummaryColumn::Domain), "example.com");
        assert_eq!(summary.get_column_value(&SummaryColumn::Status), "-");
    }

    #[test]
    fn test_certificate_type_serde() {
        let t: CertificateType = serde_json::from_str("\"PRIVATE\"").unwrap();
        assert_eq!(t, CertificateType::Private);
        assert_eq!(
            serde_json::to_string(&CertificateType::AmazonIssued).unwrap(),
            "\"AMAZON_ISSUED\""
        );
    }
}
