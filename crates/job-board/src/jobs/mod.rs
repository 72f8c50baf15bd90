//! In-memory job board backing the 1C `jobservice` mock.
//!
//! Writes enter through [`IngestionGateway`], reads run [`select_postings`]
//! and [`select_requests`] over snapshots of the [`EntityStore`], and
//! [`job_router`] exposes both over HTTP.

pub mod directory;
pub mod domain;
pub mod format;
pub mod ingest;
pub mod query;
pub mod router;
mod seed;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use directory::{AccountDirectory, OrganizationDirectory};
pub use domain::{
    AccountView, CloseReceipt, CloseSubmission, JobPosting, PostingId, PostingSubmission,
    RequestReceipt, RequestSubmission, WorkRequest, CATEGORY_TAGS, UNKNOWN_ORGANIZATION,
};
pub use format::{compact_to_instant, instant_to_dotted, next_identifier, ParseError};
pub use ingest::{IngestionError, IngestionGateway, IngestionPolicy};
pub use query::{select_postings, select_requests, PostingFilter, PostingListQuery};
pub use router::{job_router, DecodeError};
pub use service::JobService;
pub use store::{EntityStore, Snapshot};
