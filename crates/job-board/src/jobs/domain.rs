use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use super::format::{serialize_instant, serialize_optional_instant};

/// Organization recorded on requests whose posting reference does not resolve.
pub const UNKNOWN_ORGANIZATION: &str = "Неизвестная организация";

/// Controlled vocabulary offered to the frontend for tagging postings.
pub const CATEGORY_TAGS: [&str; 15] = [
    "Наука",
    "Медицина",
    "Литература",
    "Технологии",
    "Творчество",
    "Программирование",
    "Алгоритмы",
    "ICPC",
    "Помощь пожилым",
    "Общественная польза",
    "Робототехника",
    "Кибербезопасность",
    "Маркетинг",
    "Дизайн",
    "Финансы",
];

/// Zero-padded sequential posting number, e.g. `000042`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PostingId(pub String);

impl PostingId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PostingId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A job or volunteer opportunity as published to the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobPosting {
    pub organization: String,
    pub description: String,
    #[serde(serialize_with = "serialize_optional_instant")]
    pub date_of_begin: Option<NaiveDateTime>,
    #[serde(serialize_with = "serialize_optional_instant")]
    pub date_of_end: Option<NaiveDateTime>,
    pub salary: i64,
    pub title: String,
    #[serde(serialize_with = "serialize_instant")]
    pub date_of_document: NaiveDateTime,
    pub types_of_work: Vec<String>,
    pub number: PostingId,
}

impl JobPosting {
    pub fn has_any_tag(&self, mut wanted: impl FnMut(&str) -> bool) -> bool {
        self.types_of_work.iter().any(|tag| wanted(tag.as_str()))
    }
}

/// A student's application against a posting. Dates are kept in the dotted
/// 1C form because 1C is the only consumer of requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WorkRequest {
    #[serde(skip_serializing)]
    pub posting: PostingId,
    pub organization: String,
    pub student: String,
    pub description: String,
    pub start_period: String,
    pub end_period: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved: Option<bool>,
}

/// Payload accepted by the posting creation endpoint. Every field is optional
/// on the wire; missing values behave like empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingSubmission {
    #[serde(default, deserialize_with = "string_or_number")]
    pub salary: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "dateofbegin")]
    pub date_of_begin: Option<String>,
    #[serde(default, rename = "dateofend")]
    pub date_of_end: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "typesofwork")]
    pub types_of_work: Option<String>,
}

/// Payload accepted by the request creation endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSubmission {
    #[serde(default, rename = "startperiod")]
    pub start_period: Option<String>,
    #[serde(default, rename = "endperiod")]
    pub end_period: Option<String>,
    #[serde(default)]
    pub student: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "vacancy")]
    pub posting: Option<String>,
}

/// Acknowledgement returned once a request has been stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestReceipt {
    pub status: &'static str,
    pub message: &'static str,
    #[serde(rename = "vacancy")]
    pub posting: PostingId,
    pub student: String,
    #[serde(rename = "org")]
    pub organization: String,
    pub start: String,
    pub end: String,
    pub datetime: String,
}

/// Acknowledgement for a posting close. Closing never changes listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CloseReceipt {
    pub status: &'static str,
    pub message: &'static str,
    #[serde(rename = "vacancy")]
    pub posting: PostingId,
    pub known: bool,
}

/// Payload of the close endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloseSubmission {
    #[serde(default, rename = "vacancy")]
    pub posting: Option<String>,
}

/// Organization attached to a login, empty for students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountView {
    #[serde(rename = "Организация")]
    pub organization: String,
}

// Salaries arrive as strings from the 1C form but as numbers from newer
// frontends.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(value)) => Some(value),
        Some(Raw::Integer(value)) => Some(value.to_string()),
        Some(Raw::Float(value)) => Some(value.to_string()),
        None => None,
    })
}
