//! Short technical video endpoints.
//!
//! The user-facing endpoints live under `/api/videos`; moderation endpoints
//! live under `/api/admin/videos`.  Uploads are `multipart/form-data` and carry
//! an explicit `Content-Type` override so the transport does not fall back to
//! JSON.

use super::request::{ApiRequest, MultipartForm, Params};
use super::{DEFAULT_LIST_LIMIT, DEFAULT_STATS_DAYS};

const MULTIPART_CONTENT_TYPE: &str = "multipart/form-data";

/// Paging and filtering for [`get_videos`].
///
/// The backend defaults `page` to 1 and `size` to 10 when they are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub category_id: Option<i64>,
    pub keyword: Option<String>,
}

/// Moderation verdict for [`audit_video`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditStatus {
    Approved,
    Rejected,
}

impl AuditStatus {
    /// Numeric code understood by the backend (1 = approved, 2 = rejected).
    pub fn code(self) -> u8 {
        match self {
            AuditStatus::Approved => 1,
            AuditStatus::Rejected => 2,
        }
    }
}

// ── User-facing ───────────────────────────────────────────────────────────────

pub fn get_videos(query: &VideoQuery) -> ApiRequest {
    ApiRequest::get("/api/videos")
        .param_opt("page", query.page)
        .param_opt("size", query.size)
        .param_opt("categoryId", query.category_id)
        .param_opt("keyword", query.keyword.clone())
}

pub fn get_video_detail(id: i64) -> ApiRequest {
    ApiRequest::get(format!("/api/videos/{id}"))
}

/// Most-viewed videos; `limit` defaults to 10.
pub fn get_popular_videos(limit: Option<u32>) -> ApiRequest {
    ApiRequest::get("/api/videos/popular").param("limit", limit.unwrap_or(DEFAULT_LIST_LIMIT))
}

/// Most recently published videos; `limit` defaults to 10.
pub fn get_latest_videos(limit: Option<u32>) -> ApiRequest {
    ApiRequest::get("/api/videos/latest").param("limit", limit.unwrap_or(DEFAULT_LIST_LIMIT))
}

/// Records that the user watched `view_duration` seconds of a video.
///
/// The duration travels as a query parameter even though the verb is POST.
pub fn record_video_view(video_id: i64, view_duration: u64) -> ApiRequest {
    ApiRequest::post(format!("/api/videos/{video_id}/view")).param("viewDuration", view_duration)
}

pub fn toggle_video_like(video_id: i64) -> ApiRequest {
    ApiRequest::post(format!("/api/videos/{video_id}/like"))
}

/// User submission of a new video (metadata fields plus the file).
pub fn submit_video(form: MultipartForm) -> ApiRequest {
    ApiRequest::post("/api/videos/submit")
        .multipart(form)
        .header("Content-Type", MULTIPART_CONTENT_TYPE)
}

// ── Administration ────────────────────────────────────────────────────────────

pub fn get_videos_for_admin(params: &Params) -> ApiRequest {
    ApiRequest::get("/api/admin/videos").extend_params(params)
}

pub fn upload_video_by_admin(form: MultipartForm) -> ApiRequest {
    ApiRequest::post("/api/admin/videos/upload")
        .multipart(form)
        .header("Content-Type", MULTIPART_CONTENT_TYPE)
}

/// Approves or rejects a submitted video.  `reason` is expected on rejection
/// but is not enforced here.
pub fn audit_video(video_id: i64, status: AuditStatus, reason: Option<&str>) -> ApiRequest {
    ApiRequest::post(format!("/api/admin/videos/{video_id}/audit"))
        .param("status", status.code())
        .param_opt("reason", reason)
}

pub fn offline_video(video_id: i64) -> ApiRequest {
    ApiRequest::post(format!("/api/admin/videos/{video_id}/offline"))
}

pub fn delete_video(video_id: i64) -> ApiRequest {
    ApiRequest::delete(format!("/api/admin/videos/{video_id}"))
}

pub fn get_video_statistics() -> ApiRequest {
    ApiRequest::get("/api/admin/videos/statistics")
}

/// Per-video statistics over the last `days` days (default 30).
pub fn get_video_detail_stats(video_id: i64, days: Option<u32>) -> ApiRequest {
    ApiRequest::get(format!("/api/admin/videos/{video_id}/stats"))
        .param("days", days.unwrap_or(DEFAULT_STATS_DAYS))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
