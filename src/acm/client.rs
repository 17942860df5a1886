use crate::acm::sign::{sign_request, SigningParams};
use crate::acm::types::{
    DescribeCertificateRequest, DescribeCertificateResponse, ErrorResponse,
    ListCertificatesRequest, ListCertificatesResponse,
};
use crate::acm::{CONTENT_TYPE, SERVICE_NAME, TARGET_PREFIX};
use crate::cert::{CertificateDescriber, CertificateDetail, CertificateLister, CertificatePage};
use crate::config::AcmSettings;
use crate::utils::errors::{AcmLookupError, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub struct AcmClient {
    client: Client,
    settings: AcmSettings,
    url: Url,
}

impl AcmClient {
    pub fn new(settings: AcmSettings) -> Result<Self> {
        let client = super::create_http_client()?;
        let endpoint = settings.endpoint_url();
        let url = Url::parse(&endpoint)
            .map_err(|e| AcmLookupError::Config(format!("Invalid endpoint '{endpoint}': {e}")))?;
        if url.host_str().is_none() {
            return Err(AcmLookupError::Config(format!(
                "Endpoint '{endpoint}' has no host"
            )));
        }

        Ok(Self {
            client,
            settings,
            url,
        })
    }

    pub fn endpoint(&self) -> &str {
        self.url.as_str()
    }

    /// Host header value as it is sent, including a non-default port
    fn host(&self) -> String {
        let host = self.url.host_str().unwrap_or_default();
        match self.url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        }
    }

    /// Signed JSON 1.1 call to `operation`
    async fn call<B, T>(&self, operation: &str, body: &B) -> Result<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let payload = serde_json::to_string(body)?;
        let amz_date = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
        let target = format!("{TARGET_PREFIX}.{operation}");
        let credentials = &self.settings.credentials;

        let mut headers = vec![
            ("Host".to_string(), self.host()),
            ("Content-Type".to_string(), CONTENT_TYPE.to_string()),
            ("X-Amz-Date".to_string(), amz_date.clone()),
            ("X-Amz-Target".to_string(), target),
        ];
        if let Some(token) = &credentials.session_token {
            headers.push(("X-Amz-Security-Token".to_string(), token.clone()));
        }

        let params = SigningParams {
            access_key_id: &credentials.access_key_id,
            secret_access_key: &credentials.secret_access_key,
            region: &self.settings.region,
            service: SERVICE_NAME,
            amz_date: &amz_date,
        };
        let authorization = sign_request(&params, "POST", self.url.path(), "", &headers, &payload);

        tracing::debug!("Making {} request to: {}", operation, self.url);
        let mut request = self.client.post(self.url.clone());
        for (name, value) in headers.iter().filter(|(name, _)| name != "Host") {
            request = request.header(name.as_str(), value.as_str());
        }
        let response = request
            .header("Authorization", authorization)
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);
        let text = response.text().await?;

        if !status.is_success() {
            return Err(Self::service_error(status, &text));
        }
        Ok(serde_json::from_str(&text)?)
    }

    fn service_error(status: StatusCode, body: &str) -> AcmLookupError {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(error) if error.error_type.is_some() => AcmLookupError::Service {
                code: error.code().unwrap_or_default().to_string(),
                message: error.message.unwrap_or_default(),
            },
            _ => AcmLookupError::Service {
                code: format!("HTTP {}", status.as_u16()),
                message: body.to_string(),
            },
        }
    }

    /// One `ListCertificates` page
    pub async fn list_certificates(
        &self,
        statuses: &[String],
        next_token: Option<&str>,
    ) -> Result<ListCertificatesResponse> {
        let request = ListCertificatesRequest {
            certificate_statuses: statuses,
            next_token,
            max_items: self.settings.max_items,
        };
        self.call("ListCertificates", &request).await
    }

    pub async fn describe(&self, arn: &str) -> Result<DescribeCertificateResponse> {
        let request = DescribeCertificateRequest {
            certificate_arn: arn,
        };
        self.call("DescribeCertificate", &request).await
    }
}

#[async_trait]
impl CertificateLister for AcmClient {
    async fn list_certificates_page(
        &self,
        statuses: &[String],
        next_token: Option<&str>,
    ) -> Result<CertificatePage> {
        let response = self.list_certificates(statuses, next_token).await?;
        Ok(CertificatePage {
            summaries: response
                .certificate_summary_list
                .into_iter()
                .map(Into::into)
                .collect(),
            next_token: response.next_token,
        })
    }
}

#[async_trait]
impl CertificateDescriber for AcmClient {
    async fn describe_certificate(&self, arn: &str) -> Result<CertificateDetail> {
        tracing::debug!("Describing certificate {}", arn);
        let response = self.describe(arn).await?;
        Ok(response.certificate.into())
    }
}
