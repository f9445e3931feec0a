//! Name-based lookup of the request builders in `exam_web_core::api`.
//!
//! The CLI addresses an endpoint as `<resource> <operation>`, using the
//! builder's own function name:
//!
//! ```text
//! exam-web api video get_latest_videos --limit 5
//! exam-web api exam start_exam --id 3 --text 张三
//! exam-web api interview activate_interview_code --text ABC123
//! ```
//!
//! [`build_request`] turns that pair plus loosely-typed [`ApiArgs`] into the
//! typed builder call.  Arguments an operation does not use are ignored.

use exam_web_core::api::exam::{self, AnswerSubmission};
use exam_web_core::api::paper::{self, PaperQuery, PaperStatus};
use exam_web_core::api::video::{self, AuditStatus, VideoQuery};
use exam_web_core::api::{interview, video_category, Params};
use exam_web_core::{ApiRequest, MultipartForm};
use serde_json::Value;
use thiserror::Error;

/// Resource names accepted by [`build_request`].
pub const RESOURCES: [&str; 5] = ["exam", "paper", "video", "video-category", "interview"];

/// Errors from mapping CLI input onto a request builder.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown resource {0:?} (expected one of: exam, paper, video, video-category, interview)")]
    UnknownResource(String),

    #[error("unknown operation {operation:?} for resource {resource:?}")]
    UnknownOperation { resource: String, operation: String },

    #[error("{operation} requires --{argument}")]
    MissingArgument {
        operation: String,
        argument: &'static str,
    },

    #[error("invalid --{argument}: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },
}

/// Loosely-typed arguments collected from the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiArgs {
    /// Path id: exam record, paper, video, category, question, interview, user, or code id.
    pub id: Option<i64>,
    pub limit: Option<u32>,
    pub days: Option<u32>,
    /// Watch duration in seconds for `record_video_view`.
    pub duration: Option<u64>,
    /// Free text: student name, invite code, share type, or audit reason.
    pub text: Option<String>,
    /// Paper status (`draft|published|stopped`) or audit verdict (`approved|rejected`).
    pub status: Option<String>,
    /// JSON body.
    pub body: Option<Value>,
    /// Query parameters passed through as-is.
    pub params: Params,
    /// Multipart body for uploads.
    pub form: Option<MultipartForm>,
}

/// Operation names per resource, in the order they are listed by `--help`.
pub fn operations(resource: &str) -> Option<&'static [&'static str]> {
    let ops: &'static [&'static str] = match resource {
        "exam" => &[
            "start_exam",
            "submit_answers",
            "grade_exam",
            "get_my_exam_records",
            "get_exam_record_by_id",
        ],
        "paper" => &[
            "create_paper",
            "create_paper_with_ai",
            "get_paper_by_id",
            "get_papers",
        ],
        "video" => &[
            "get_videos",
            "get_video_detail",
            "get_popular_videos",
            "get_latest_videos",
            "record_video_view",
            "toggle_video_like",
            "submit_video",
            "get_videos_for_admin",
            "upload_video_by_admin",
            "audit_video",
            "offline_video",
            "delete_video",
            "get_video_statistics",
            "get_video_detail_stats",
        ],
        "video-category" => &[
            "get_video_categories",
            "get_video_category_tree",
            "get_category_tree",
            "get_top_video_categories",
            "get_child_video_categories",
            "get_video_category_by_id",
            "add_video_category",
            "update_video_category",
            "delete_video_category",
        ],
        "interview" => &[
            "get_interview_questions",
            "get_interview_question_detail",
            "upload_question",
            "get_hot_questions",
            "get_latest_questions",
            "increment_view_count",
            "get_direction_stats",
            "get_company_stats",
            "start_mock_interview",
            "submit_interview_answer",
            "complete_mock_interview",
            "get_mock_interview_detail",
            "get_user_interview_records",
            "get_interview_codes",
            "generate_interview_codes",
            "activate_interview_code",
            "delete_interview_code",
            "get_invitees_list",
            "request_interview_code",
            "get_user_credits",
            "get_active_credits",
            "get_interview_result",
            "get_user_interview_history",
            "get_interview_statistics",
            "share_interview_result",
            "get_credits_history",
        ],
        _ => return None,
    };
    Some(ops)
}

/// Builds the request for `resource`/`operation` from `args`.
///
/// # Errors
///
/// Returns a [`CatalogError`] for an unknown resource or operation, or when a
/// required argument is missing or malformed.
pub fn build_request(
    resource: &str,
    operation: &str,
    args: ApiArgs,
) -> Result<ApiRequest, CatalogError> {
    let ctx = Ctx { operation, args };
    match resource {
        "exam" => ctx.exam(),
        "paper" => ctx.paper(),
        "video" => ctx.video(),
        "video-category" => ctx.video_category(),
        "interview" => ctx.interview(),
        other => Err(Unresolved::Error(CatalogError::UnknownResource(
            other.to_string(),
        ))),
    }
    .map_err(|e| match e {
        Unresolved::Unknown => CatalogError::UnknownOperation {
            resource: resource.to_string(),
            operation: operation.to_string(),
        },
        Unresolved::Error(e) => e,
    })
}

enum Unresolved {
    Unknown,
    Error(CatalogError),
}

impl From<CatalogError> for Unresolved {
    fn from(e: CatalogError) -> Self {
        Unresolved::Error(e)
    }
}

struct Ctx<'a> {
    operation: &'a str,
    args: ApiArgs,
}

impl Ctx<'_> {
    fn id(&self) -> Result<i64, CatalogError> {
        self.args.id.ok_or_else(|| self.missing("id"))
    }

    fn text(&self) -> Result<String, CatalogError> {
        self.args.text.clone().ok_or_else(|| self.missing("text"))
    }

    fn body(&self) -> Result<Value, CatalogError> {
        self.args.body.clone().ok_or_else(|| self.missing("json"))
    }

    fn form(&self) -> Result<MultipartForm, CatalogError> {
        self.args.form.clone().ok_or_else(|| self.missing("file"))
    }

    fn missing(&self, argument: &'static str) -> CatalogError {
        CatalogError::MissingArgument {
            operation: self.operation.to_string(),
            argument,
        }
    }

    fn exam(&self) -> Result<ApiRequest, Unresolved> {
        Ok(match self.operation {
            "start_exam" => exam::start_exam(self.id()?, &self.text()?),
            "submit_answers" => {
                let answers: Vec<AnswerSubmission> = serde_json::from_value(self.body()?)
                    .map_err(|e| CatalogError::InvalidArgument {
                        argument: "json",
                        reason: e.to_string(),
                    })?;
                exam::submit_answers(self.id()?, &answers)
            }
            "grade_exam" => exam::grade_exam(self.id()?),
            "get_my_exam_records" => exam::get_my_exam_records(),
            "get_exam_record_by_id" => exam::get_exam_record_by_id(self.id()?),
            _ => return Err(Unresolved::Unknown),
        })
    }

    fn paper(&self) -> Result<ApiRequest, Unresolved> {
        Ok(match self.operation {
            "create_paper" => paper::create_paper(self.body()?),
            "create_paper_with_ai" => paper::create_paper_with_ai(self.body()?),
            "get_paper_by_id" => paper::get_paper_by_id(self.id()?),
            "get_papers" => paper::get_papers(&PaperQuery {
                name: self.args.text.clone(),
                status: self.paper_status()?,
            }),
            _ => return Err(Unresolved::Unknown),
        })
    }

    fn paper_status(&self) -> Result<Option<PaperStatus>, CatalogError> {
        let Some(raw) = &self.args.status else {
            return Ok(None);
        };
        serde_json::from_value(Value::String(raw.to_ascii_uppercase()))
            .map(Some)
            .map_err(|_| CatalogError::InvalidArgument {
                argument: "status",
                reason: format!("{raw:?} is not one of draft, published, stopped"),
            })
    }

    fn audit_status(&self) -> Result<AuditStatus, CatalogError> {
        let raw = self.args.status.as_deref().ok_or_else(|| self.missing("status"))?;
        match raw.to_ascii_lowercase().as_str() {
            "approved" | "1" => Ok(AuditStatus::Approved),
            "rejected" | "2" => Ok(AuditStatus::Rejected),
            _ => Err(CatalogError::InvalidArgument {
                argument: "status",
                reason: format!("{raw:?} is not one of approved, rejected"),
            }),
        }
    }

    fn video_query(&self) -> Result<VideoQuery, CatalogError> {
        let params = &self.args.params;
        Ok(VideoQuery {
            page: number_param(params, "page")?,
            size: number_param(params, "size")?,
            category_id: number_param(params, "categoryId")?,
            keyword: params
                .get("keyword")
                .map(|v| v.as_str().map_or_else(|| v.to_string(), str::to_string)),
        })
    }

    fn video(&self) -> Result<ApiRequest, Unresolved> {
        Ok(match self.operation {
            "get_videos" => video::get_videos(&self.video_query()?),
            "get_video_detail" => video::get_video_detail(self.id()?),
            "get_popular_videos" => video::get_popular_videos(self.args.limit),
            "get_latest_videos" => video::get_latest_videos(self.args.limit),
            "record_video_view" => {
                let duration = self.args.duration.ok_or_else(|| self.missing("duration"))?;
                video::record_video_view(self.id()?, duration)
            }
            "toggle_video_like" => video::toggle_video_like(self.id()?),
            "submit_video" => video::submit_video(self.form()?),
            "get_videos_for_admin" => video::get_videos_for_admin(&self.args.params),
            "upload_video_by_admin" => video::upload_video_by_admin(self.form()?),
            "audit_video" => {
                video::audit_video(self.id()?, self.audit_status()?, self.args.text.as_deref())
            }
            "offline_video" => video::offline_video(self.id()?),
            "delete_video" => video::delete_video(self.id()?),
            "get_video_statistics" => video::get_video_statistics(),
            "get_video_detail_stats" => video::get_video_detail_stats(self.id()?, self.args.days),
            _ => return Err(Unresolved::Unknown),
        })
    }

    fn video_category(&self) -> Result<ApiRequest, Unresolved> {
        Ok(match self.operation {
            "get_video_categories" => video_category::get_video_categories(),
            "get_video_category_tree" => video_category::get_video_category_tree(),
            "get_category_tree" => video_category::get_category_tree(),
            "get_top_video_categories" => video_category::get_top_video_categories(),
            "get_child_video_categories" => {
                video_category::get_child_video_categories(self.id()?)
            }
            "get_video_category_by_id" => video_category::get_video_category_by_id(self.id()?),
            "add_video_category" => video_category::add_video_category(self.body()?),
            "update_video_category" => video_category::update_video_category(self.body()?),
            "delete_video_category" => video_category::delete_video_category(self.id()?),
            _ => return Err(Unresolved::Unknown),
        })
    }

    fn interview(&self) -> Result<ApiRequest, Unresolved> {
        let params = &self.args.params;
        Ok(match self.operation {
            "get_interview_questions" => interview::get_interview_questions(params),
            "get_interview_question_detail" => {
                interview::get_interview_question_detail(self.id()?)
            }
            "upload_question" => interview::upload_question(self.body()?),
            "get_hot_questions" => interview::get_hot_questions(self.args.limit),
            "get_latest_questions" => interview::get_latest_questions(self.args.limit),
            "increment_view_count" => interview::increment_view_count(self.id()?),
            "get_direction_stats" => interview::get_direction_stats(),
            "get_company_stats" => interview::get_company_stats(),
            "start_mock_interview" => interview::start_mock_interview(self.body()?),
            "submit_interview_answer" => interview::submit_interview_answer(self.body()?),
            "complete_mock_interview" => interview::complete_mock_interview(self.id()?),
            "get_mock_interview_detail" => interview::get_mock_interview_detail(self.id()?),
            "get_user_interview_records" => {
                interview::get_user_interview_records(self.id()?, params)
            }
            "get_interview_codes" => interview::get_interview_codes(params),
            "generate_interview_codes" => interview::generate_interview_codes(self.body()?),
            "activate_interview_code" => interview::activate_interview_code(&self.text()?),
            "delete_interview_code" => interview::delete_interview_code(self.id()?),
            "get_invitees_list" => interview::get_invitees_list(),
            "request_interview_code" => interview::request_interview_code(self.body()?),
            "get_user_credits" => interview::get_user_credits(self.id()?),
            "get_active_credits" => interview::get_active_credits(self.id()?),
            "get_interview_result" => interview::get_interview_result(self.id()?),
            "get_user_interview_history" => interview::get_user_interview_history(params),
            "get_interview_statistics" => interview::get_interview_statistics(),
            "share_interview_result" => {
                interview::share_interview_result(self.id()?, &self.text()?)
            }
            "get_credits_history" => interview::get_credits_history(),
            _ => return Err(Unresolved::Unknown),
        })
    }
}

/// Reads an optional numeric query parameter given as a JSON number or a
/// numeric string.
fn number_param<T: std::str::FromStr>(
    params: &Params,
    key: &'static str,
) -> Result<Option<T>, CatalogError> {
    let Some(value) = params.get(key) else {
        return Ok(None);
    };
    let text = value.as_str().map_or_else(|| value.to_string(), str::to_string);
    text.parse().map(Some).map_err(|_| CatalogError::InvalidArgument {
        argument: "param",
        reason: format!("{key}={text} is not a number"),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
