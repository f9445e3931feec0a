//! Navigation hooks: the guard decision and the navigator that runs it.
//!
//! - [`guard`] holds the pure rule ([`guard::decide_transition`]) and the
//!   title formatting.
//! - [`navigator`] drives one transition at a time through resolve →
//!   before-hook → commit → after-hook, writing titles to a [`TitleSink`].

pub mod guard;
pub mod navigator;

pub use guard::{
    decide_transition, document_title, TransitionDecision, EXAM_LIST_PATH, PLATFORM_NAME,
};
pub use navigator::{NavigationError, NavigationOutcome, NavigationState, Navigator, TitleSink};
