//! Declarative route definitions.

use serde::Serialize;

/// Every page the host shell knows how to render.
///
/// The router only names the view; constructing it is the host's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum View {
    Home,
    AdminLayout,
    Welcome,
    QuestionManage,
    CategoryManage,
    PaperManage,
    ScoreManage,
    BannerManage,
    NoticeManage,
    VideoManage,
    VideoCategoryManage,
    PaperCreate,
    PaperListForExam,
    ExamStart,
    Exam,
    ExamResult,
    ExamRanking,
    Practice,
    VideoList,
    VideoDetail,
    InterviewQuestionList,
    InterviewQuestionDetail,
    InterviewPractice,
    MockInterview,
    MockInterviewDetail,
    InterviewResult,
    InterviewCodes,
    ActivateCode,
    CompanyManage,
    PendingQuestionManage,
}

/// Static metadata attached to a route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteMeta {
    /// Display title, without the platform suffix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl RouteMeta {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }

    /// Merges `child` over `self`: fields the child sets win.
    pub fn merged_with(&self, child: &RouteMeta) -> RouteMeta {
        RouteMeta {
            title: child.title.clone().or_else(|| self.title.clone()),
        }
    }
}

/// One entry of the route table, possibly owning child entries.
///
/// Built with a small fluent API:
///
/// ```rust
/// use exam_web_core::routing::{RouteRecord, View};
///
/// let record = RouteRecord::new("/exam/:id")
///     .name("Exam")
///     .view(View::Exam)
///     .title("在线考试");
/// assert_eq!(record.meta.title.as_deref(), Some("在线考试"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord {
    /// Absolute for top-level records, relative for children.
    pub path: String,
    pub name: Option<String>,
    pub view: Option<View>,
    pub meta: RouteMeta,
    /// Redirect target template (absolute, may reference captured params).
    pub redirect: Option<String>,
    pub children: Vec<RouteRecord>,
}

impl RouteRecord {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            view: None,
            meta: RouteMeta::default(),
            redirect: None,
            children: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn view(mut self, view: View) -> Self {
        self.view = Some(view);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.meta = RouteMeta::titled(title);
        self
    }

    pub fn redirect(mut self, target: impl Into<String>) -> Self {
        self.redirect = Some(target.into());
        self
    }

    pub fn children(mut self, children: Vec<RouteRecord>) -> Self {
        self.children = children;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_merge_prefers_child_title() {
        let parent = RouteMeta::titled("后台");
        let child = RouteMeta::titled("欢迎");
        assert_eq!(parent.merged_with(&child).title.as_deref(), Some("欢迎"));
    }

    #[test]
    fn test_meta_merge_inherits_parent_title() {
        let parent = RouteMeta::titled("后台");
        assert_eq!(
            parent.merged_with(&RouteMeta::default()).title.as_deref(),
            Some("后台")
        );
    }

    #[test]
    fn test_builder_sets_fields() {
        let r = RouteRecord::new("/admin")
            .name("AdminLayout")
            .view(View::AdminLayout)
            .redirect("/admin/welcome")
            .children(vec![RouteRecord::new("welcome")]);
        assert_eq!(r.name.as_deref(), Some("AdminLayout"));
        assert_eq!(r.view, Some(View::AdminLayout));
        assert_eq!(r.redirect.as_deref(), Some("/admin/welcome"));
        assert_eq!(r.children.len(), 1);
        assert_eq!(r.meta, RouteMeta::default());
    }
}
