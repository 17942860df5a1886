//! In-memory certificate store used by the lookup tests

use crate::cert::{
    CertificateDescriber, CertificateDetail, CertificateLister, CertificatePage,
    CertificateSummary, CertificateType,
};
use crate::utils::errors::{AcmLookupError, Result};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

pub fn summary(domain: &str, arn: &str) -> CertificateSummary {
    CertificateSummary {
        domain_name: domain.to_string(),
        arn: arn.to_string(),
        status: Some("ISSUED".to_string()),
    }
}

#[derive(Default)]
pub struct InMemoryCertificates {
    certificates: Vec<(CertificateSummary, CertificateDetail)>,
    page_size: Option<usize>,
    fail_list: bool,
    fail_describe: Option<String>,
    listed: Mutex<Vec<Vec<String>>>,
    described: AtomicUsize,
}

impl InMemoryCertificates {
    pub fn with_certificate(
        mut self,
        summary: CertificateSummary,
        cert_type: CertificateType,
        created_at: Option<DateTime<Utc>>,
        imported_at: Option<DateTime<Utc>>,
    ) -> Self {
        let detail = CertificateDetail {
            arn: summary.arn.clone(),
            domain_name: Some(summary.domain_name.clone()),
            cert_type,
            status: summary.status.clone(),
            created_at,
            imported_at,
        };
        self.certificates.push((summary, detail));
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn failing_describe(mut self, arn: &str) -> Self {
        self.fail_describe = Some(arn.to_string());
        self
    }

    /// Status filters seen by each listing call, in call order
    pub fn listed_statuses(&self) -> Vec<Vec<String>> {
        self.listed.lock().unwrap().clone()
    }

    pub fn describe_calls(&self) -> usize {
        self.described.load(Ordering::SeqCst)
    }

    fn service_error(message: &str) -> AcmLookupError {
        AcmLookupError::Service {
            code: "InternalFailure".to_string(),
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl CertificateLister for InMemoryCertificates {
    async fn list_certificates_page(
        &self,
        statuses: &[String],
        next_token: Option<&str>,
    ) -> Result<CertificatePage> {
        self.listed.lock().unwrap().push(statuses.to_vec());
        if self.fail_list {
            return Err(Self::service_error("listing unavailable"));
        }

        let start = next_token.map(|t| t.parse::<usize>().unwrap()).unwrap_or(0);
        let size = self.page_size.unwrap_or(self.certificates.len().max(1));
        let end = (start + size).min(self.certificates.len());

        Ok(CertificatePage {
            summaries: self.certificates[start..end]
                .iter()
                .map(|(summary, _)| summary.clone())
                .collect(),
            next_token: (end < self.certificates.len()).then(|| end.to_string()),
        })
    }
}

#[async_trait]
impl CertificateDescriber for InMemoryCertificates {
    async fn describe_certificate(&self, arn: &str) -> Result<CertificateDetail> {
        self.described.fetch_add(1, Ordering::SeqCst);
        if self.fail_describe.as_deref() == Some(arn) {
            return Err(Self::service_error("describe unavailable"));
        }

        self.certificates
            .iter()
            .find(|(_, detail)| detail.arn == arn)
            .map(|(_, detail)| detail.clone())
            .ok_or_else(|| AcmLookupError::Service {
                code: "ResourceNotFoundException".to_string(),
                message: format!("Could not find certificate {arn}"),
            })
    }
}
