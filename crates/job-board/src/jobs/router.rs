use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::domain::{
    AccountView, CloseReceipt, CloseSubmission, JobPosting, PostingId, PostingSubmission,
    RequestReceipt, RequestSubmission, WorkRequest,
};
use super::query::{first_value, PostingFilter, PostingListQuery};
use super::service::JobService;
use crate::error::AppError;

/// Fixed envelope answered to every SOAP call from legacy clients.
pub const SOAP_ENVELOPE: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8"?>"#,
    r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">"#,
    r#"<soap:Body><m:JobServiceResponse xmlns:m="http://www.1c.ru/JobService">"#,
    r#"<m:return>ok</m:return>"#,
    r#"</m:JobServiceResponse></soap:Body></soap:Envelope>"#,
);

/// Payload that is not well-formed JSON for the endpoint.
#[derive(Debug, thiserror::Error)]
#[error("invalid JSON: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

/// Decoded query string. Repeated keys are kept, so they never reject a read.
type QueryPairs = Query<Vec<(String, String)>>;

/// JSON body of a request list lookup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestListQuery {
    #[serde(default)]
    pub vacancy: Option<String>,
}

/// JSON body of an account lookup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountQuery {
    #[serde(default)]
    pub user: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum RequestListEntry {
    Count { count: usize },
    Request(Arc<WorkRequest>),
}

/// Routes of the 1C `jobservice` HTTP service.
pub fn job_router(service: Arc<JobService>) -> Router {
    Router::new()
        .route(
            "/JobService/hs/jobservice/vacancy",
            post(create_posting_handler),
        )
        .route(
            "/JobService/hs/jobservice/vacancy/close",
            post(close_posting_handler),
        )
        .route(
            "/JobService/hs/jobservice/vacancylist",
            get(list_postings_handler),
        )
        .route(
            "/JobService/hs/jobservice/vacancylist/",
            get(list_postings_handler),
        )
        .route("/JobService/hs/jobservice/tags", get(tags_handler))
        .route(
            "/JobService/hs/jobservice/request",
            post(create_request_handler),
        )
        .route(
            "/JobService/hs/jobservice/requestlist",
            get(list_requests_handler).post(list_requests_handler),
        )
        .route(
            "/JobService/hs/jobservice/checkaccount",
            get(check_account_handler).post(check_account_handler),
        )
        .route("/JobService/ws/jobservice", post(soap_handler))
        .with_state(service)
}

pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, DecodeError> {
    Ok(serde_json::from_slice(body)?)
}

// Optional lookup bodies are best effort: anything unreadable counts as
// "not supplied" and the query string is consulted instead.
fn lookup_key<T, F>(body: &[u8], fallback: Option<String>, key: F) -> Option<String>
where
    T: DeserializeOwned,
    F: Fn(T) -> Option<String>,
{
    serde_json::from_slice::<T>(body)
        .ok()
        .and_then(key)
        .filter(|value| !value.trim().is_empty())
        .or(fallback)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub(crate) async fn create_posting_handler(
    State(service): State<Arc<JobService>>,
    body: Bytes,
) -> Result<(StatusCode, Json<JobPosting>), AppError> {
    let submission: PostingSubmission = decode(&body)?;
    let posting = service.create_posting(submission)?;
    Ok((StatusCode::CREATED, Json(posting)))
}

pub(crate) async fn list_postings_handler(
    State(service): State<Arc<JobService>>,
    Query(pairs): QueryPairs,
) -> Json<Vec<Arc<JobPosting>>> {
    let filter = PostingFilter::from(&PostingListQuery::from_pairs(&pairs));
    Json(service.list_postings(&filter))
}

pub(crate) async fn tags_handler(
    State(service): State<Arc<JobService>>,
) -> Json<&'static [&'static str]> {
    Json(service.tags())
}

pub(crate) async fn create_request_handler(
    State(service): State<Arc<JobService>>,
    body: Bytes,
) -> Result<(StatusCode, Json<RequestReceipt>), AppError> {
    let submission: RequestSubmission = decode(&body)?;
    let receipt = service.create_request(submission)?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

pub(crate) async fn list_requests_handler(
    State(service): State<Arc<JobService>>,
    Query(pairs): QueryPairs,
    body: Bytes,
) -> Json<Vec<RequestListEntry>> {
    let fallback = first_value(&pairs, "vacancy");
    let posting = lookup_key(&body, fallback, |parsed: RequestListQuery| {
        parsed.vacancy
    })
    .map(PostingId);
    let requests = service.list_requests(posting.as_ref());

    let mut entries = Vec::with_capacity(requests.len() + 1);
    entries.push(RequestListEntry::Count {
        count: requests.len(),
    });
    entries.extend(requests.into_iter().map(RequestListEntry::Request));
    Json(entries)
}

pub(crate) async fn check_account_handler(
    State(service): State<Arc<JobService>>,
    Query(pairs): QueryPairs,
    body: Bytes,
) -> Json<AccountView> {
    let fallback = first_value(&pairs, "user");
    let login = lookup_key(&body, fallback, |parsed: AccountQuery| parsed.user);
    Json(service.check_account(login.as_deref().unwrap_or_default()))
}

pub(crate) async fn close_posting_handler(
    State(service): State<Arc<JobService>>,
    body: Bytes,
) -> Result<Json<CloseReceipt>, AppError> {
    let submission: CloseSubmission = decode(&body)?;
    let posting = PostingId(submission.posting.unwrap_or_default());
    Ok(Json(service.close_posting(posting)))
}

pub(crate) async fn soap_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/xml; charset=utf-8")],
        SOAP_ENVELOPE,
    )
}
