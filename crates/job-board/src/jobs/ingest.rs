use std::sync::Arc;

use chrono::{Local, NaiveDateTime, SecondsFormat, Timelike};
use tracing::{debug, info, warn};

use super::directory::OrganizationDirectory;
use super::domain::{
    JobPosting, PostingId, PostingSubmission, RequestReceipt, RequestSubmission, WorkRequest,
    UNKNOWN_ORGANIZATION,
};
use super::format::{compact_to_instant, instant_to_dotted, ParseError};
use super::query::split_list;
use super::store::EntityStore;

/// How malformed fields inside a well-formed payload are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestionPolicy {
    /// Reject unparseable amounts and dates instead of substituting defaults.
    pub strict_input: bool,
}

impl IngestionPolicy {
    pub fn lenient() -> Self {
        Self {
            strict_input: false,
        }
    }

    pub fn strict() -> Self {
        Self { strict_input: true }
    }
}

/// Error raised while turning a submission into a stored entity.
#[derive(Debug, thiserror::Error)]
pub enum IngestionError {
    #[error("field `{field}` rejected: {source}")]
    InvalidField {
        field: &'static str,
        #[source]
        source: ParseError,
    },
}

/// Normalizes creation payloads and appends them to the store.
#[derive(Debug)]
pub struct IngestionGateway {
    store: Arc<EntityStore>,
    directory: Arc<OrganizationDirectory>,
    policy: IngestionPolicy,
}

impl IngestionGateway {
    pub fn new(
        store: Arc<EntityStore>,
        directory: Arc<OrganizationDirectory>,
        policy: IngestionPolicy,
    ) -> Self {
        Self {
            store,
            directory,
            policy,
        }
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn directory(&self) -> &OrganizationDirectory {
        &self.directory
    }

    /// Create a posting stamped with the current local time.
    pub fn create_posting(
        &self,
        submission: PostingSubmission,
    ) -> Result<JobPosting, IngestionError> {
        let now = Local::now().naive_local();
        self.create_posting_at(submission, now)
    }

    /// Create a posting stamped with `created_at`, truncated to whole seconds.
    pub fn create_posting_at(
        &self,
        submission: PostingSubmission,
        created_at: NaiveDateTime,
    ) -> Result<JobPosting, IngestionError> {
        let PostingSubmission {
            salary,
            title,
            date_of_begin,
            date_of_end,
            organization,
            description,
            types_of_work,
        } = submission;

        let salary = self.amount("salary", salary.as_deref())?;
        let types_of_work = split_list(types_of_work.as_deref());
        let organization = self
            .directory
            .display_name(organization.as_deref().unwrap_or_default())
            .to_string();
        let date_of_begin = self.compact_date("dateofbegin", date_of_begin.as_deref())?;
        let date_of_end = self.compact_date("dateofend", date_of_end.as_deref())?;
        let date_of_document = created_at.with_nanosecond(0).unwrap_or(created_at);

        let posting = self.store.insert_posting_with(|number| JobPosting {
            organization,
            description: description.unwrap_or_default(),
            date_of_begin,
            date_of_end,
            salary,
            title: title.unwrap_or_default(),
            date_of_document,
            types_of_work,
            number,
        });

        info!(
            number = %posting.number.as_str(),
            organization = %posting.organization,
            salary = posting.salary,
            "posting created"
        );

        Ok(JobPosting::clone(&posting))
    }

    /// Store a request and acknowledge it with the resolved organization.
    pub fn create_request(
        &self,
        submission: RequestSubmission,
    ) -> Result<RequestReceipt, IngestionError> {
        let RequestSubmission {
            start_period,
            end_period,
            student,
            description,
            posting,
        } = submission;

        let posting = PostingId(posting.unwrap_or_default());
        let organization = match self.store.find_posting(&posting) {
            Some(found) => found.organization.clone(),
            None => {
                debug!(posting = %posting.as_str(), "request references an unknown posting");
                UNKNOWN_ORGANIZATION.to_string()
            }
        };

        let request = WorkRequest {
            posting: posting.clone(),
            organization,
            student: student.unwrap_or_default(),
            description: description.unwrap_or_default(),
            start_period: self.dotted_date("startperiod", start_period.as_deref())?,
            end_period: self.dotted_date("endperiod", end_period.as_deref())?,
            approved: None,
        };

        let receipt = RequestReceipt {
            status: "ok",
            message: "request created",
            posting,
            student: request.student.clone(),
            organization: request.organization.clone(),
            start: request.start_period.clone(),
            end: request.end_period.clone(),
            datetime: Local::now().to_rfc3339_opts(SecondsFormat::Secs, false),
        };

        self.store.append_request(request);

        info!(
            posting = %receipt.posting.as_str(),
            organization = %receipt.organization,
            "request created"
        );

        Ok(receipt)
    }

    fn amount(&self, field: &'static str, raw: Option<&str>) -> Result<i64, IngestionError> {
        let raw = raw.unwrap_or_default().trim();
        if raw.is_empty() {
            return Ok(0);
        }

        raw.parse::<i64>().or_else(|_| {
            self.degrade(
                field,
                ParseError::Amount {
                    value: raw.to_string(),
                },
                0,
            )
        })
    }

    fn compact_date(
        &self,
        field: &'static str,
        raw: Option<&str>,
    ) -> Result<Option<NaiveDateTime>, IngestionError> {
        let raw = raw.unwrap_or_default();
        if raw.is_empty() {
            return Ok(None);
        }

        match compact_to_instant(raw) {
            Ok(instant) => Ok(Some(instant)),
            Err(source) => self.degrade(field, source, None),
        }
    }

    // Dotted conversion never fails on its own; strict mode still refuses
    // values it would have echoed back unchanged.
    fn dotted_date(
        &self,
        field: &'static str,
        raw: Option<&str>,
    ) -> Result<String, IngestionError> {
        let raw = raw.unwrap_or_default();
        if self.policy.strict_input && !raw.is_empty() {
            if let Err(source) = compact_to_instant(raw) {
                return Err(IngestionError::InvalidField { field, source });
            }
        }
        Ok(instant_to_dotted(raw))
    }

    fn degrade<T>(
        &self,
        field: &'static str,
        source: ParseError,
        fallback: T,
    ) -> Result<T, IngestionError> {
        if self.policy.strict_input {
            return Err(IngestionError::InvalidField { field, source });
        }
        warn!(field, error = %source, "substituting default for malformed field");
        Ok(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn gateway(policy: IngestionPolicy) -> IngestionGateway {
        IngestionGateway::new(
            Arc::new(EntityStore::new()),
            Arc::new(OrganizationDirectory::standard()),
            policy,
        )
    }

    fn created_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 5)
            .and_then(|date| date.and_hms_nano_opt(19, 40, 47, 123_456_789))
            .expect("valid instant")
    }

    fn submission() -> PostingSubmission {
        PostingSubmission {
            salary: Some(" 50000 ".to_string()),
            title: Some("Волонтер".to_string()),
            date_of_begin: Some("20260101".to_string()),
            date_of_end: Some("20270101".to_string()),
            organization: Some("f2742040-cdb4-11f0-ae42-38d57ae2c1c1".to_string()),
            description: Some("Доставка лекарств".to_string()),
            types_of_work: Some(" Помощь пожилым, ,Медицина,Медицина ".to_string()),
        }
    }

    #[test]
    fn posting_fields_are_normalized() {
        let gateway = gateway(IngestionPolicy::lenient());
        let posting = gateway
            .create_posting_at(submission(), created_at())
            .expect("posting created");

        assert_eq!(posting.number.as_str(), "000001");
        assert_eq!(posting.organization, "Волонтеры ДВФУ");
        assert_eq!(posting.salary, 50_000);
        assert_eq!(
            posting.types_of_work,
            ["Помощь пожилым", "Медицина", "Медицина"]
        );
        assert_eq!(
            posting.date_of_begin,
            NaiveDate::from_ymd_opt(2026, 1, 1).and_then(|date| date.and_hms_opt(0, 0, 0))
        );
        assert_eq!(posting.date_of_document.nanosecond(), 0);
        assert_eq!(gateway.store().snapshot_postings().len(), 1);
    }

    #[test]
    fn lenient_policy_substitutes_defaults() {
        let gateway = gateway(IngestionPolicy::lenient());
        let mut raw = submission();
        raw.salary = Some("пятьдесят".to_string());
        raw.date_of_begin = Some("2026-01-01".to_string());
        raw.organization = Some("Новая организация".to_string());

        let posting = gateway
            .create_posting_at(raw, created_at())
            .expect("lenient ingestion never rejects");

        assert_eq!(posting.salary, 0);
        assert_eq!(posting.date_of_begin, None);
        assert!(posting.date_of_end.is_some());
        assert_eq!(posting.organization, "Новая организация");
    }

    #[test]
    fn strict_policy_rejects_malformed_fields_without_allocating() {
        let gateway = gateway(IngestionPolicy::strict());
        let mut raw = submission();
        raw.salary = Some("12k".to_string());

        match gateway.create_posting_at(raw, created_at()) {
            Err(IngestionError::InvalidField { field: "salary", .. }) => {}
            other => panic!("expected salary rejection, got {other:?}"),
        }
        assert_eq!(gateway.store().posting_count(), 0);

        let posting = gateway
            .create_posting_at(submission(), created_at())
            .expect("well formed posting");
        assert_eq!(posting.number.as_str(), "000001");
    }

    #[test]
    fn strict_policy_still_accepts_missing_fields() {
        let gateway = gateway(IngestionPolicy::strict());
        let posting = gateway
            .create_posting_at(PostingSubmission::default(), created_at())
            .expect("empty fields degrade quietly");
        assert_eq!(posting.salary, 0);
        assert!(posting.types_of_work.is_empty());
        assert_eq!(posting.organization, "");
    }

    #[test]
    fn request_freezes_organization_of_referenced_posting() {
        let gateway = gateway(IngestionPolicy::lenient());
        let posting = gateway
            .create_posting_at(submission(), created_at())
            .expect("posting created");

        let receipt = gateway
            .create_request(RequestSubmission {
                start_period: Some("20260602".to_string()),
                end_period: Some("not a date".to_string()),
                student: Some("Иванов Иван Иванович".to_string()),
                description: Some("Есть опыт".to_string()),
                posting: Some(posting.number.0.clone()),
            })
            .expect("request created");

        assert_eq!(receipt.organization, "Волонтеры ДВФУ");
        assert_eq!(receipt.start, "02.06.2026 00:00:00");
        assert_eq!(receipt.end, "not a date");
        assert_eq!(receipt.status, "ok");

        let stored = gateway.store().snapshot_requests();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].posting, posting.number);
    }

    #[test]
    fn request_for_unknown_posting_uses_sentinel() {
        let gateway = gateway(IngestionPolicy::lenient());
        let receipt = gateway
            .create_request(RequestSubmission {
                posting: Some("000404".to_string()),
                ..RequestSubmission::default()
            })
            .expect("lookup misses never fail");

        assert_eq!(receipt.organization, UNKNOWN_ORGANIZATION);
        assert_eq!(
            gateway.store().snapshot_requests()[0].organization,
            UNKNOWN_ORGANIZATION
        );
    }

    #[test]
    fn strict_policy_rejects_malformed_request_dates() {
        let gateway = gateway(IngestionPolicy::strict());
        let result = gateway.create_request(RequestSubmission {
            start_period: Some("02.06.2026".to_string()),
            ..RequestSubmission::default()
        });
        assert!(matches!(
            result,
            Err(IngestionError::InvalidField {
                field: "startperiod",
                ..
            })
        ));
        assert!(gateway.store().snapshot_requests().is_empty());
    }
}
