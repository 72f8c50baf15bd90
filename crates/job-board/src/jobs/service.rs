use std::sync::Arc;

use tracing::info;

use super::directory::{AccountDirectory, OrganizationDirectory};
use super::domain::{
    AccountView, CloseReceipt, JobPosting, PostingId, PostingSubmission, RequestReceipt,
    RequestSubmission, WorkRequest, CATEGORY_TAGS,
};
use super::ingest::{IngestionError, IngestionGateway, IngestionPolicy};
use super::query::{select_postings, select_requests, PostingFilter};
use super::store::EntityStore;

/// Facade the HTTP layer talks to: writes go through the gateway, reads run
/// the query engine over a fresh snapshot.
#[derive(Debug)]
pub struct JobService {
    gateway: IngestionGateway,
    accounts: AccountDirectory,
}

impl JobService {
    pub fn new(gateway: IngestionGateway, accounts: AccountDirectory) -> Self {
        Self { gateway, accounts }
    }

    /// Service over `store` using the standard organization and account
    /// tables.
    pub fn with_store(store: Arc<EntityStore>, policy: IngestionPolicy) -> Self {
        let gateway =
            IngestionGateway::new(store, Arc::new(OrganizationDirectory::standard()), policy);
        Self::new(gateway, AccountDirectory::standard())
    }

    pub fn gateway(&self) -> &IngestionGateway {
        &self.gateway
    }

    pub fn create_posting(
        &self,
        submission: PostingSubmission,
    ) -> Result<JobPosting, IngestionError> {
        self.gateway.create_posting(submission)
    }

    pub fn list_postings(&self, filter: &PostingFilter) -> Vec<Arc<JobPosting>> {
        let snapshot = self.gateway.store().snapshot_postings();
        select_postings(&snapshot, filter, self.gateway.directory())
    }

    pub fn tags(&self) -> &'static [&'static str] {
        &CATEGORY_TAGS
    }

    pub fn create_request(
        &self,
        submission: RequestSubmission,
    ) -> Result<RequestReceipt, IngestionError> {
        self.gateway.create_request(submission)
    }

    pub fn list_requests(&self, posting: Option<&PostingId>) -> Vec<Arc<WorkRequest>> {
        let snapshot = self.gateway.store().snapshot_requests();
        select_requests(&snapshot, posting)
    }

    pub fn check_account(&self, login: &str) -> AccountView {
        AccountView {
            organization: self.accounts.organization_for(login).to_string(),
        }
    }

    /// Acknowledge a close. Postings stay listed; nothing is removed.
    pub fn close_posting(&self, posting: PostingId) -> CloseReceipt {
        let known = self.gateway.store().find_posting(&posting).is_some();
        info!(posting = %posting.as_str(), known, "posting close acknowledged");
        CloseReceipt {
            status: "ok",
            message: "vacancy close accepted",
            posting,
            known,
        }
    }
}
