use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::directory::OrganizationDirectory;
use super::domain::{JobPosting, PostingId, WorkRequest};

/// Posting selection criteria. Dimensions combine with AND, tags with OR.
///
/// `None` leaves a dimension unfiltered. A supplied list that ends up empty
/// (or whose organization ids all fail to resolve) matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingFilter {
    /// Inclusive lower bound; absent or non-positive values disable it.
    pub min_compensation: Option<i64>,
    /// Organization ids, matched against postings by display name.
    pub organizations: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}

/// Raw listing query string as sent by the frontend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingListQuery {
    #[serde(default, rename = "salaryMIN")]
    pub salary_min: Option<String>,
    #[serde(default, rename = "typesofwork")]
    pub types_of_work: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
}

impl PostingListQuery {
    /// Build from decoded query pairs, tolerating repeated keys.
    ///
    /// The first `salaryMIN` wins. Repeated list keys are joined with commas,
    /// so `typesofwork=A&typesofwork=B` reads as `typesofwork=A,B`.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            salary_min: first_value(pairs, "salaryMIN"),
            types_of_work: joined_values(pairs, "typesofwork"),
            organization: joined_values(pairs, "organization"),
        }
    }
}

/// First value of `key` among decoded query pairs.
pub(crate) fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
}

fn joined_values(pairs: &[(String, String)], key: &str) -> Option<String> {
    let values: Vec<&str> = pairs
        .iter()
        .filter(|(name, value)| name == key && !value.is_empty())
        .map(|(_, value)| value.as_str())
        .collect();
    (!values.is_empty()).then(|| values.join(","))
}

impl PostingFilter {
    pub fn is_empty(&self) -> bool {
        self.effective_min_compensation().is_none()
            && self.organizations.is_none()
            && self.tags.is_none()
    }

    fn effective_min_compensation(&self) -> Option<i64> {
        self.min_compensation.filter(|amount| *amount > 0)
    }
}

impl From<&PostingListQuery> for PostingFilter {
    fn from(query: &PostingListQuery) -> Self {
        Self {
            min_compensation: query
                .salary_min
                .as_deref()
                .and_then(|raw| raw.trim().parse().ok()),
            organizations: supplied_list(query.organization.as_deref()),
            tags: supplied_list(query.types_of_work.as_deref()),
        }
    }
}

/// Comma separated list with whitespace trimmed and empty segments dropped.
pub fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Like [`split_list`], but keeps "not supplied" apart from "no segments".
fn supplied_list(raw: Option<&str>) -> Option<Vec<String>> {
    raw.filter(|raw| !raw.is_empty())
        .map(|raw| split_list(Some(raw)))
}

/// Postings from `snapshot` that satisfy `filter`, in insertion order.
///
/// Organization ids the directory does not know are dropped. When ids were
/// given and none of them resolve, nothing matches; the same holds for a
/// supplied tag list with no usable segments.
pub fn select_postings(
    snapshot: &[Arc<JobPosting>],
    filter: &PostingFilter,
    directory: &OrganizationDirectory,
) -> Vec<Arc<JobPosting>> {
    if filter.is_empty() {
        return snapshot.to_vec();
    }

    let min_compensation = filter.effective_min_compensation();
    let organizations: Option<HashSet<&str>> = filter.organizations.as_ref().map(|ids| {
        ids.iter()
            .filter_map(|id| directory.resolve(id))
            .collect()
    });
    let tags: Option<HashSet<&str>> = filter
        .tags
        .as_ref()
        .map(|tags| tags.iter().map(String::as_str).collect());

    snapshot
        .iter()
        .filter(|posting| min_compensation.map_or(true, |min| posting.salary >= min))
        .filter(|posting| {
            organizations
                .as_ref()
                .map_or(true, |names| names.contains(posting.organization.as_str()))
        })
        .filter(|posting| {
            tags.as_ref()
                .map_or(true, |wanted| posting.has_any_tag(|tag| wanted.contains(tag)))
        })
        .cloned()
        .collect()
}

/// Requests filed against `posting`, or every request when it is `None`.
pub fn select_requests(
    snapshot: &[Arc<WorkRequest>],
    posting: Option<&PostingId>,
) -> Vec<Arc<WorkRequest>> {
    snapshot
        .iter()
        .filter(|request| posting.map_or(true, |id| &request.posting == id))
        .cloned()
        .collect()
}
