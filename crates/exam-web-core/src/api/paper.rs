//! Exam paper endpoints: manual creation, AI assembly, lookup, listing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::request::ApiRequest;

/// Publication state of a paper, as accepted by the listing filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaperStatus {
    Draft,
    Published,
    Stopped,
}

impl PaperStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PaperStatus::Draft => "DRAFT",
            PaperStatus::Published => "PUBLISHED",
            PaperStatus::Stopped => "STOPPED",
        }
    }
}

/// Filters for [`get_papers`].  Unset fields are left out of the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaperQuery {
    /// Fuzzy match on the paper name.
    pub name: Option<String>,
    pub status: Option<PaperStatus>,
}

/// Creates a paper from an explicit question selection.
pub fn create_paper(data: Value) -> ApiRequest {
    ApiRequest::post("/api/papers").json(data)
}

/// Creates a paper by letting the backend pick questions from rules.
pub fn create_paper_with_ai(data: Value) -> ApiRequest {
    ApiRequest::post("/api/papers/ai").json(data)
}

pub fn get_paper_by_id(id: i64) -> ApiRequest {
    ApiRequest::get(format!("/api/papers/{id}"))
}

pub fn get_papers(query: &PaperQuery) -> ApiRequest {
    ApiRequest::get("/api/papers/list")
        .param_opt("name", query.name.clone())
        .param_opt("status", query.status.map(PaperStatus::as_str))
}
