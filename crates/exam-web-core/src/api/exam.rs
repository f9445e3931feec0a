//! Exam session endpoints: start, submit, grade, and history.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::request::ApiRequest;

/// One answered question inside a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSubmission {
    pub question_id: i64,
    pub user_answer: String,
}

/// Starts an exam on `paper_id` for the named student.
pub fn start_exam(paper_id: i64, student_name: &str) -> ApiRequest {
    ApiRequest::post("/api/exams/start").json(json!({
        "paperId": paper_id,
        "studentName": student_name,
    }))
}

/// Submits the answers recorded for an exam session.
pub fn submit_answers(exam_record_id: i64, answers: &[AnswerSubmission]) -> ApiRequest {
    let body = answers
        .iter()
        .map(|a| json!({ "questionId": a.question_id, "userAnswer": a.user_answer }))
        .collect();
    ApiRequest::post(format!("/api/exams/{exam_record_id}/submit"))
        .json(serde_json::Value::Array(body))
}

/// Asks the backend to grade a submitted exam.
pub fn grade_exam(exam_record_id: i64) -> ApiRequest {
    ApiRequest::post(format!("/api/exams/{exam_record_id}/grade"))
}

pub fn get_my_exam_records() -> ApiRequest {
    ApiRequest::get("/api/exams/records")
}

pub fn get_exam_record_by_id(id: i64) -> ApiRequest {
    ApiRequest::get(format!("/api/exams/{id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::{HttpMethod, RequestBody};

    #[test]
    fn test_start_exam_posts_paper_and_student() {
        let req = start_exam(3, "张三");
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "/api/exams/start");
        assert_eq!(
            req.data,
            Some(RequestBody::Json(json!({"paperId": 3, "studentName": "张三"})))
        );
    }

    #[test]
    fn test_submit_answers_substitutes_record_id_and_sends_array() {
        let answers = vec![
            AnswerSubmission { question_id: 1, user_answer: "A".into() },
            AnswerSubmission { question_id: 2, user_answer: "true".into() },
        ];
        let req = submit_answers(7, &answers);
        assert_eq!(req.url, "/api/exams/7/submit");
        assert_eq!(
            req.data,
            Some(RequestBody::Json(json!([
                {"questionId": 1, "userAnswer": "A"},
                {"questionId": 2, "userAnswer": "true"},
            ])))
        );
    }

    #[test]
    fn test_grade_exam_has_no_body() {
        let req = grade_exam(7);
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "/api/exams/7/grade");
        assert!(req.data.is_none());
        assert!(req.params.is_empty());
    }

    #[test]
    fn test_record_lookups_are_gets() {
        assert_eq!(get_my_exam_records().url, "/api/exams/records");
        assert_eq!(get_my_exam_records().method, HttpMethod::Get);
        assert_eq!(get_exam_record_by_id(12).url, "/api/exams/12");
    }

    #[test]
    fn test_answer_submission_uses_camel_case() {
        let a = AnswerSubmission { question_id: 5, user_answer: "B".into() };
        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            json!({"questionId": 5, "userAnswer": "B"})
        );
    }
}
