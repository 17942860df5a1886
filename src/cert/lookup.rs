use crate::cert::{CertificateDetail, CertificatePage, CertificateSummary, DEFAULT_STATUS};
use crate::utils::errors::{AcmLookupError, Result};
use async_trait::async_trait;

/// Source of paged certificate summaries
#[async_trait]
pub trait CertificateLister: Send + Sync {
    /// Fetch one page of summaries restricted to `statuses`
    async fn list_certificates_page(
        &self,
        statuses: &[String],
        next_token: Option<&str>,
    ) -> Result<CertificatePage>;
}

/// Source of full certificate records
#[async_trait]
pub trait CertificateDescriber: Send + Sync {
    async fn describe_certificate(&self, arn: &str) -> Result<CertificateDetail>;
}

#[async_trait]
impl<'a, T: CertificateLister + ?Sized> CertificateLister for &'a T {
    async fn list_certificates_page(
        &self,
        statuses: &[String],
        next_token: Option<&str>,
    ) -> Result<CertificatePage> {
        (**self).list_certificates_page(statuses, next_token).await
    }
}

#[async_trait]
impl<'a, T: CertificateDescriber + ?Sized> CertificateDescriber for &'a T {
    async fn describe_certificate(&self, arn: &str) -> Result<CertificateDetail> {
        (**self).describe_certificate(arn).await
    }
}

/// Lookup request
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub domain: String,
    pub statuses: Vec<String>,
    pub types: Vec<String>,
    pub most_recent: bool,
}

impl Query {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Self::default()
        }
    }

    pub fn with_statuses<I, S>(mut self, statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.statuses = statuses.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn most_recent(mut self, most_recent: bool) -> Self {
        self.most_recent = most_recent;
        self
    }

    /// Statuses to list, defaulting to ISSUED when none were given
    pub fn status_filter(&self) -> Vec<String> {
        if self.statuses.is_empty() {
            vec![DEFAULT_STATUS.to_string()]
        } else {
            self.statuses.clone()
        }
    }
}

/// Resolves a domain to exactly one certificate ARN
pub struct CertificateResolver<L, D> {
    lister: L,
    describer: D,
}

impl<L, D> CertificateResolver<L, D>
where
    L: CertificateLister,
    D: CertificateDescriber,
{
    pub fn new(lister: L, describer: D) -> Self {
        Self { lister, describer }
    }

    pub async fn resolve(&self, query: &Query) -> Result<String> {
        resolve_certificate_arn(&self.lister, &self.describer, query).await
    }
}

/// Collect every summary for `statuses`, following continuation tokens to the end
pub async fn list_all_certificates<L>(
    lister: &L,
    statuses: &[String],
) -> Result<Vec<CertificateSummary>>
where
    L: CertificateLister + ?Sized,
{
    let mut summaries = Vec::new();
    let mut next_token: Option<String> = None;

    loop {
        let page = lister
            .list_certificates_page(statuses, next_token.as_deref())
            .await
            .map_err(AcmLookupError::listing)?;
        tracing::debug!("Listed page with {} certificates", page.summaries.len());
        summaries.extend(page.summaries);

        match page.next_token {
            Some(token) if !token.is_empty() => next_token = Some(token),
            _ => break,
        }
    }

    Ok(summaries)
}

/// ARNs of the summaries whose domain equals `domain` exactly, in listing order
pub async fn find_candidate_arns<L>(
    lister: &L,
    statuses: &[String],
    domain: &str,
) -> Result<Vec<String>>
where
    L: CertificateLister + ?Sized,
{
    let summaries = list_all_certificates(lister, statuses).await?;

    Ok(summaries
        .into_iter()
        .filter(|summary| {
            tracing::trace!("Checking certificate domain: '{}'", summary.domain_name);
            summary.domain_name == domain
        })
        .map(|summary| summary.arn)
        .collect())
}

/// Describe each candidate and keep those whose type is one of `types`.
///
/// An empty `types` list keeps nothing and makes no describe calls, so a
/// lookup without a type filter always ends in `NotFound`. Callers rely on
/// that outcome, although it is most likely an inherited defect.
pub async fn filter_by_type<D>(
    describer: &D,
    arns: &[String],
    types: &[String],
) -> Result<Vec<CertificateDetail>>
where
    D: CertificateDescriber + ?Sized,
{
    if types.is_empty() {
        tracing::debug!(
            "No certificate types requested, discarding {} candidates",
            arns.len()
        );
        return Ok(Vec::new());
    }

    let mut details = Vec::new();
    for arn in arns {
        let detail = describer
            .describe_certificate(arn)
            .await
            .map_err(AcmLookupError::describing)?;

        if types.iter().any(|t| detail.cert_type.matches(t)) {
            tracing::debug!("Certificate {} matches type {}", arn, detail.cert_type);
            details.push(detail);
        } else {
            tracing::trace!("Skipping {} of type {}", arn, detail.cert_type);
        }
    }

    Ok(details)
}

/// Sort newest first by creation time, else import time. Equal timestamps keep their order.
pub fn sort_by_recency(details: &mut [CertificateDetail]) -> Result<()> {
    if let Some(missing) = details.iter().find(|d| d.recency().is_none()) {
        return Err(AcmLookupError::MissingTimestamp {
            arn: missing.arn.clone(),
        });
    }
    details.sort_by(|a, b| b.recency().cmp(&a.recency()));
    Ok(())
}

/// Full lookup: list, match domain, filter by type, disambiguate
pub async fn resolve_certificate_arn<L, D>(
    lister: &L,
    describer: &D,
    query: &Query,
) -> Result<String>
where
    L: CertificateLister + ?Sized,
    D: CertificateDescriber + ?Sized,
{
    let statuses = query.status_filter();
    tracing::debug!(
        "Searching for certificate for domain '{}' with statuses {:?}",
        query.domain,
        statuses
    );

    let arns = find_candidate_arns(lister, &statuses, &query.domain).await?;
    tracing::debug!(
        "Found {} certificates for domain '{}'",
        arns.len(),
        query.domain
    );

    let mut details = filter_by_type(describer, &arns, &query.types).await?;

    if details.is_empty() {
        return Err(AcmLookupError::NotFound {
            domain: query.domain.clone(),
        });
    }

    if details.len() > 1 {
        if !query.most_recent {
            return Err(AcmLookupError::AmbiguousMatch {
                domain: query.domain.clone(),
                count: details.len(),
            });
        }
        sort_by_recency(&mut details)?;
    }

    let selected = details.swap_remove(0);
    tracing::info!(
        "Selected certificate {} for domain '{}'",
        selected.arn,
        query.domain
    );
    Ok(selected.arn)
}
