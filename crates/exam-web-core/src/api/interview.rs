//! Interview preparation endpoints.
//!
//! Four related backend areas share this module:
//!
//! - company interview questions (`/api/interview-questions`)
//! - mock interviews (`/api/mock-interview`, plus one `/interview` lookup)
//! - invite codes (`/interview/codes`)
//! - interview credits and results (`/api/user-interview-credits`, `/interview`)

use serde_json::{json, Value};

use super::request::{ApiRequest, Params};
use super::DEFAULT_LIST_LIMIT;

// ── Company questions ─────────────────────────────────────────────────────────

pub fn get_interview_questions(params: &Params) -> ApiRequest {
    ApiRequest::get("/api/interview-questions/list").extend_params(params)
}

pub fn get_interview_question_detail(id: i64) -> ApiRequest {
    ApiRequest::get(format!("/api/interview-questions/{id}"))
}

/// User-contributed question, queued for moderation.
pub fn upload_question(data: Value) -> ApiRequest {
    ApiRequest::post("/api/user-contributions/upload").json(data)
}

pub fn get_hot_questions(limit: Option<u32>) -> ApiRequest {
    ApiRequest::get("/api/interview-questions/hot")
        .param("limit", limit.unwrap_or(DEFAULT_LIST_LIMIT))
}

pub fn get_latest_questions(limit: Option<u32>) -> ApiRequest {
    ApiRequest::get("/api/interview-questions/latest")
        .param("limit", limit.unwrap_or(DEFAULT_LIST_LIMIT))
}

pub fn increment_view_count(id: i64) -> ApiRequest {
    ApiRequest::post(format!("/api/interview-questions/{id}/view"))
}

pub fn get_direction_stats() -> ApiRequest {
    ApiRequest::get("/api/interview-questions/stats/direction")
}

pub fn get_company_stats() -> ApiRequest {
    ApiRequest::get("/api/interview-questions/stats/company")
}

// ── Mock interviews ───────────────────────────────────────────────────────────

pub fn start_mock_interview(data: Value) -> ApiRequest {
    ApiRequest::post("/api/mock-interview/start").json(data)
}

pub fn submit_interview_answer(data: Value) -> ApiRequest {
    ApiRequest::post("/api/mock-interview/submit-answer").json(data)
}

pub fn complete_mock_interview(interview_id: i64) -> ApiRequest {
    ApiRequest::post(format!("/api/mock-interview/{interview_id}/complete"))
}

/// Note the `/interview` prefix: this lookup is not served under `/api`.
pub fn get_mock_interview_detail(interview_id: i64) -> ApiRequest {
    ApiRequest::get(format!("/interview/mock-interview/{interview_id}"))
}

pub fn get_user_interview_records(user_id: i64, params: &Params) -> ApiRequest {
    ApiRequest::get(format!("/api/mock-interview/user/{user_id}/records")).extend_params(params)
}

// ── Invite codes ──────────────────────────────────────────────────────────────

pub fn get_interview_codes(params: &Params) -> ApiRequest {
    ApiRequest::get("/interview/codes").extend_params(params)
}

pub fn generate_interview_codes(data: Value) -> ApiRequest {
    ApiRequest::post("/interview/codes/generate").json(data)
}

pub fn activate_interview_code(code: &str) -> ApiRequest {
    ApiRequest::post("/interview/codes/activate").json(json!({ "code": code }))
}

pub fn delete_interview_code(code_id: i64) -> ApiRequest {
    ApiRequest::delete(format!("/interview/codes/{code_id}"))
}

pub fn get_invitees_list() -> ApiRequest {
    ApiRequest::get("/interview/codes/invitees")
}

pub fn request_interview_code(data: Value) -> ApiRequest {
    ApiRequest::post("/interview/codes/request").json(data)
}

// ── Credits, results, history ─────────────────────────────────────────────────

pub fn get_user_credits(user_id: i64) -> ApiRequest {
    ApiRequest::get(format!("/api/user-interview-credits/user/{user_id}"))
}

pub fn get_active_credits(user_id: i64) -> ApiRequest {
    ApiRequest::get(format!("/api/user-interview-credits/active/{user_id}"))
}

pub fn get_interview_result(interview_id: i64) -> ApiRequest {
    ApiRequest::get(format!("/interview/result/{interview_id}"))
}

pub fn get_user_interview_history(params: &Params) -> ApiRequest {
    ApiRequest::get("/interview/history").extend_params(params)
}

pub fn get_interview_statistics() -> ApiRequest {
    ApiRequest::get("/interview/statistics")
}

pub fn share_interview_result(interview_id: i64, share_type: &str) -> ApiRequest {
    ApiRequest::post("/interview/share").json(json!({
        "interviewId": interview_id,
        "shareType": share_type,
    }))
}

pub fn get_credits_history() -> ApiRequest {
    ApiRequest::get("/interview/credits/history")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::{HttpMethod, RequestBody};

    #[test]
    fn test_hot_and_latest_default_limit() {
        assert_eq!(get_hot_questions(None).query_param("limit"), Some(&json!(10)));
        assert_eq!(get_latest_questions(None).query_param("limit"), Some(&json!(10)));
        assert_eq!(get_hot_questions(Some(3)).query_param("limit"), Some(&json!(3)));
    }

    #[test]
    fn test_question_listing_forwards_params() {
        let mut params = Params::new();
        params.insert("company".into(), json!("ByteDance"));
        params.insert("page".into(), json!(1));
        let req = get_interview_questions(&params);
        assert_eq!(req.url, "/api/interview-questions/list");
        assert_eq!(req.query_param("company"), Some(&json!("ByteDance")));
        assert_eq!(req.query_param("page"), Some(&json!(1)));
    }

    #[test]
    fn test_upload_question_targets_contributions() {
        let req = upload_question(json!({"title": "HashMap"}));
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "/api/user-contributions/upload");
    }

    #[test]
    fn test_mock_interview_detail_is_outside_api_prefix() {
        assert_eq!(
            get_mock_interview_detail(5).url,
            "/interview/mock-interview/5"
        );
        assert_eq!(
            complete_mock_interview(5).url,
            "/api/mock-interview/5/complete"
        );
    }

    #[test]
    fn test_user_records_substitutes_user_id() {
        let req = get_user_interview_records(42, &Params::new());
        assert_eq!(req.url, "/api/mock-interview/user/42/records");
        assert!(req.params.is_empty());
    }

    #[test]
    fn test_activate_code_wraps_code_in_object() {
        let req = activate_interview_code("ABCD-1234");
        assert_eq!(req.url, "/interview/codes/activate");
        assert_eq!(req.data, Some(RequestBody::Json(json!({"code": "ABCD-1234"}))));
    }

    #[test]
    fn test_delete_code_uses_delete_verb() {
        let req = delete_interview_code(9);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "/interview/codes/9");
    }

    #[test]
    fn test_share_result_body() {
        let req = share_interview_result(7, "link");
        assert_eq!(req.url, "/interview/share");
        assert_eq!(
            req.data,
            Some(RequestBody::Json(json!({"interviewId": 7, "shareType": "link"})))
        );
    }

    #[test]
    fn test_credit_endpoints() {
        assert_eq!(get_user_credits(3).url, "/api/user-interview-credits/user/3");
        assert_eq!(get_active_credits(3).url, "/api/user-interview-credits/active/3");
        assert_eq!(get_credits_history().url, "/interview/credits/history");
    }

    #[test]
    fn test_stat_endpoints_are_parameterless_gets() {
        for req in [
            get_direction_stats(),
            get_company_stats(),
            get_interview_statistics(),
            get_invitees_list(),
        ] {
            assert_eq!(req.method, HttpMethod::Get);
            assert!(req.params.is_empty());
            assert!(req.data.is_none());
        }
    }
}
