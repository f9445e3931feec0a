//! Navigator: runs the before/after hooks around every transition.
//!
//! # Transition lifecycle
//!
//! ```text
//! navigate("/exam/7")
//!   ├─ resolve target (static redirects such as /video/:id are followed here)
//!   ├─ before-hook:
//!   │    ├─ title sink ← "<title> - 智能学习平台"     (only if the target has a title)
//!   │    └─ decide_transition(current, target)
//!   │         ├─ Allow         → continue
//!   │         └─ Redirect(p)   → resolve p, run the before-hook again
//!   ├─ commit: current = target
//!   └─ after-hook: title sink ← title of the committed route
//! ```
//!
//! A guard redirect re-runs the before-hook against the same origin, the way
//! a router treats `next(path)` as a fresh navigation.  The number of guard
//! redirects per call is capped at [`MAX_REDIRECTS`].
//!
//! # One transition at a time
//!
//! [`Navigator::navigate`] takes `&mut self`, so the borrow checker already
//! rules out overlapping transitions on one navigator.  Hosts that receive
//! navigation requests from several tasks put the navigator behind a queue
//! (see `NavigationService` in `exam-web-client`), which reports
//! [`NavigationState`] while a transition is being evaluated.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use super::guard::{decide_transition, document_title, TransitionDecision, PLATFORM_NAME};
use crate::routing::{ResolvedRoute, RouteError, RouteTable, MAX_REDIRECTS};

/// Receives document title updates.
///
/// In a browser host this writes `document.title`; the CLI logs it; tests
/// record it.
pub trait TitleSink: Send + Sync {
    fn set_title(&self, title: &str);
}

/// Whether a transition is currently being evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationState {
    Idle,
    Transitioning,
}

/// Errors that abort a navigation.  The current route is left unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error(transparent)]
    Route(#[from] RouteError),

    /// The guard kept redirecting.
    #[error("navigation guard redirected more than {0} times")]
    GuardLoop(usize),
}

/// The result of a committed navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationOutcome {
    /// The location the caller asked for.
    pub requested: String,
    /// The route that was committed and should be rendered.
    pub route: ResolvedRoute,
    /// Paths the guard redirected to, in order.  Empty when the guard allowed
    /// the original target.
    pub guard_redirects: Vec<String>,
}

impl NavigationOutcome {
    /// `true` when the guard replaced the requested target.
    pub fn was_redirected(&self) -> bool {
        !self.guard_redirects.is_empty()
    }
}

/// Drives transitions over a [`RouteTable`].
pub struct Navigator {
    table: RouteTable,
    current: ResolvedRoute,
    titles: Arc<dyn TitleSink>,
    platform_name: String,
}

impl Navigator {
    /// Creates a navigator positioned at the start location (`/`, unmatched).
    pub fn new(table: RouteTable, titles: Arc<dyn TitleSink>) -> Self {
        Self {
            table,
            current: ResolvedRoute::start(),
            titles,
            platform_name: PLATFORM_NAME.to_string(),
        }
    }

    /// Overrides the suffix used in document titles.
    pub fn with_platform_name(mut self, name: impl Into<String>) -> Self {
        self.platform_name = name.into();
        self
    }

    /// The most recently committed route.
    pub fn current(&self) -> &ResolvedRoute {
        &self.current
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Navigates to `location`.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::Route`] if the location (or a guard redirect
    /// target) cannot be resolved, and [`NavigationError::GuardLoop`] if the
    /// guard redirects more than [`MAX_REDIRECTS`] times.  On error nothing is
    /// committed and the after-hook does not run.
    pub fn navigate(&mut self, location: &str) -> Result<NavigationOutcome, NavigationError> {
        let mut target = self.table.resolve(location)?;
        let mut guard_redirects = Vec::new();

        loop {
            self.before_each(&target);
            match decide_transition(&self.current, &target) {
                TransitionDecision::Allow => break,
                TransitionDecision::Redirect(path) => {
                    if guard_redirects.len() >= MAX_REDIRECTS {
                        return Err(NavigationError::GuardLoop(MAX_REDIRECTS));
                    }
                    info!(
                        from = %self.current.path,
                        blocked = %target.path,
                        to = %path,
                        "blocked return to a finished exam"
                    );
                    target = self.table.resolve(&path)?;
                    guard_redirects.push(path);
                }
            }
        }

        let from = std::mem::replace(&mut self.current, target);
        self.after_each();
        info!(from = %from.full_path, to = %self.current.full_path, "navigation committed");

        Ok(NavigationOutcome {
            requested: location.to_string(),
            route: self.current.clone(),
            guard_redirects,
        })
    }

    fn before_each(&self, target: &ResolvedRoute) {
        if let Some(title) = document_title(target, &self.platform_name) {
            self.titles.set_title(&title);
        }
    }

    fn after_each(&self) {
        match document_title(&self.current, &self.platform_name) {
            Some(title) => self.titles.set_title(&title),
            None => debug!(path = %self.current.path, "route has no title; leaving it unchanged"),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
