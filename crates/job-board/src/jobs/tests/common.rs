use std::sync::Arc;

use axum::http::{header, Request};
use axum::response::Response;
use serde_json::Value;

use crate::jobs::{
    job_router, EntityStore, IngestionPolicy, JobService, PostingSubmission, RequestSubmission,
};

pub(super) fn seeded_service() -> Arc<JobService> {
    Arc::new(JobService::with_store(
        Arc::new(EntityStore::seeded()),
        IngestionPolicy::lenient(),
    ))
}

pub(super) fn empty_service(policy: IngestionPolicy) -> Arc<JobService> {
    Arc::new(JobService::with_store(Arc::new(EntityStore::new()), policy))
}

pub(super) fn router(service: &Arc<JobService>) -> axum::Router {
    job_router(Arc::clone(service))
}

pub(super) fn posting_submission() -> PostingSubmission {
    PostingSubmission {
        salary: Some("75000".to_string()),
        title: Some("Frontend-разработчик".to_string()),
        date_of_begin: Some("20260301".to_string()),
        date_of_end: Some("20260901".to_string()),
        organization: Some("76fa74fd-ea4f-11f0-ae6f-38d57ae2c1c1".to_string()),
        description: Some("Личный кабинет работодателя".to_string()),
        types_of_work: Some("Программирование, Дизайн".to_string()),
    }
}

pub(super) fn request_submission(posting: &str) -> RequestSubmission {
    RequestSubmission {
        start_period: Some("20260602".to_string()),
        end_period: Some("20260701".to_string()),
        student: Some("Сидоров Сидор Сидорович".to_string()),
        description: Some("Пишу на TypeScript второй год".to_string()),
        posting: Some(posting.to_string()),
    }
}

pub(super) fn json_request(method: &str, uri: &str, body: Vec<u8>) -> Request<axum::body::Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(body))
        .expect("request builds")
}

pub(super) fn empty_request(method: &str, uri: &str) -> Request<axum::body::Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(axum::body::Body::empty())
        .expect("request builds")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
