//! The pure before-navigation decision.
//!
//! [`decide_transition`] looks only at the two resolved routes.  It does not
//! know whether the exam was actually submitted; that check belongs to the
//! exam page itself, which asks the backend.
//!
//! # The rule
//!
//! ```text
//! origin path contains "/exam-result/"   (a result page)
//!   AND target path contains "/exam/"    (an exam page)
//!   AND origin :id == target :id         (the same exam)
//!   ─────────────────────────────────────────────────────
//!   → redirect to /exam/list
//! ```
//!
//! Everything else is allowed.  Missing or empty ids never compare equal, so
//! the rule fails open.

use serde::Serialize;

use crate::routing::ResolvedRoute;

/// Suffix appended to every page title.
pub const PLATFORM_NAME: &str = "智能学习平台";

/// Substring that marks an exam result page.
pub const EXAM_RESULT_MARKER: &str = "/exam-result/";

/// Substring that marks a live exam page.
pub const EXAM_MARKER: &str = "/exam/";

/// Where a blocked result → exam navigation is sent instead.
pub const EXAM_LIST_PATH: &str = "/exam/list";

const ID_PARAM: &str = "id";

/// What the before-hook decided for one transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "path", rename_all = "snake_case")]
pub enum TransitionDecision {
    /// Proceed to the requested target.
    Allow,
    /// Abandon the requested target and navigate to this path instead.
    Redirect(String),
}

/// Decides whether the transition `from` → `to` may proceed.
///
/// # Example
///
/// ```rust
/// use exam_web_core::{decide_transition, RouteTable, TransitionDecision};
///
/// let table = RouteTable::standard();
/// let from = table.resolve("/exam-result/7").unwrap();
///
/// let same = table.resolve("/exam/7").unwrap();
/// assert_eq!(
///     decide_transition(&from, &same),
///     TransitionDecision::Redirect("/exam/list".to_string())
/// );
///
/// let other = table.resolve("/exam/9").unwrap();
/// assert_eq!(decide_transition(&from, &other), TransitionDecision::Allow);
/// ```
pub fn decide_transition(from: &ResolvedRoute, to: &ResolvedRoute) -> TransitionDecision {
    let leaving_result = from.path.contains(EXAM_RESULT_MARKER);
    let entering_exam = to.path.contains(EXAM_MARKER);
    if !(leaving_result && entering_exam) {
        return TransitionDecision::Allow;
    }

    match (non_empty_id(from), non_empty_id(to)) {
        (Some(a), Some(b)) if a == b => TransitionDecision::Redirect(EXAM_LIST_PATH.to_string()),
        _ => TransitionDecision::Allow,
    }
}

/// Formats the document title for `route`, or `None` when it declares none.
pub fn document_title(route: &ResolvedRoute, platform_name: &str) -> Option<String> {
    route
        .title()
        .map(|title| format!("{title} - {platform_name}"))
}

fn non_empty_id(route: &ResolvedRoute) -> Option<&str> {
    route.param(ID_PARAM).filter(|id| !id.is_empty())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{RouteMeta, RouteTable};
    use std::collections::BTreeMap;

    fn resolve(path: &str) -> ResolvedRoute {
        RouteTable::standard().resolve(path).unwrap()
    }

    /// A hand-built route, for shapes the standard table cannot produce.
    fn raw(path: &str, id: Option<&str>) -> ResolvedRoute {
        let mut params = BTreeMap::new();
        if let Some(id) = id {
            params.insert("id".to_string(), id.to_string());
        }
        ResolvedRoute {
            path: path.to_string(),
            full_path: path.to_string(),
            name: None,
            matched: Vec::new(),
            params,
            meta: RouteMeta::default(),
            redirected_from: None,
        }
    }

    #[test]
    fn test_same_exam_from_result_redirects_to_list() {
        let decision = decide_transition(&resolve("/exam-result/7"), &resolve("/exam/7"));
        assert_eq!(decision, TransitionDecision::Redirect("/exam/list".to_string()));
    }

    #[test]
    fn test_different_exam_from_result_is_allowed() {
        let decision = decide_transition(&resolve("/exam-result/7"), &resolve("/exam/9"));
        assert_eq!(decision, TransitionDecision::Allow);
    }

    #[test]
    fn test_exam_list_from_result_is_allowed() {
        // `/exam/list` contains the exam marker but captures no id.
        let decision = decide_transition(&resolve("/exam-result/7"), &resolve("/exam/list"));
        assert_eq!(decision, TransitionDecision::Allow);
    }

    #[test]
    fn test_exam_start_with_same_number_is_allowed() {
        // The start page captures `paperId`, not `id`.
        let decision = decide_transition(&resolve("/exam-result/7"), &resolve("/exam/start/7"));
        assert_eq!(decision, TransitionDecision::Allow);
    }

    #[test]
    fn test_result_page_without_id_is_not_a_result_origin() {
        // "/exam-result" lacks the trailing slash of the marker.
        let decision = decide_transition(&resolve("/exam-result"), &resolve("/exam/7"));
        assert_eq!(decision, TransitionDecision::Allow);
    }

    #[test]
    fn test_missing_ids_on_both_sides_fail_open() {
        let decision = decide_transition(&raw("/exam-result/x/y", None), &raw("/exam/", None));
        assert_eq!(decision, TransitionDecision::Allow);
    }

    #[test]
    fn test_empty_ids_fail_open() {
        let decision = decide_transition(&raw("/exam-result/", Some("")), &raw("/exam/", Some("")));
        assert_eq!(decision, TransitionDecision::Allow);
    }

    #[test]
    fn test_unrelated_transition_passes_through() {
        let decision = decide_transition(&resolve("/home"), &resolve("/exam/7"));
        assert_eq!(decision, TransitionDecision::Allow);
        let decision = decide_transition(&resolve("/exam-result/7"), &resolve("/videos/7"));
        assert_eq!(decision, TransitionDecision::Allow);
    }

    #[test]
    fn test_document_title_appends_platform_name() {
        let title = document_title(&resolve("/exam/7"), PLATFORM_NAME);
        assert_eq!(title.as_deref(), Some("在线考试 - 智能学习平台"));
    }

    #[test]
    fn test_document_title_absent_without_meta() {
        assert_eq!(document_title(&resolve("/nowhere"), PLATFORM_NAME), None);
    }

    #[test]
    fn test_decision_serializes_with_tag() {
        let json = serde_json::to_value(TransitionDecision::Redirect("/exam/list".into())).unwrap();
        assert_eq!(json, serde_json::json!({"decision": "redirect", "path": "/exam/list"}));
    }
}
