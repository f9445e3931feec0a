//! NavigationService: one navigator, many callers, strictly in order.
//!
//! # How it works (for beginners)
//!
//! [`Navigator::navigate`] needs `&mut self`, so only one transition can run at
//! a time.  To let many async tasks request navigations, the navigator is moved
//! into a dedicated Tokio task (an "actor") that owns it exclusively:
//!
//! ```text
//! task A ─┐
//! task B ─┼─► mpsc queue ─► worker task ─► Navigator::navigate
//! task C ─┘        ▲              │
//!                  │              ├─► watch: Idle / Transitioning
//!                  └── oneshot ◄──┘   (reply with the outcome)
//! ```
//!
//! Requests are processed in the order they were queued.  Each caller gets
//! its own reply over a `oneshot` channel.  The current [`NavigationState`] is
//! published on a `watch` channel that any number of observers can read.

use exam_web_core::{NavigationError, NavigationOutcome, NavigationState, Navigator};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// How many navigation requests may wait in the queue before callers are
/// back-pressured.
pub const NAVIGATION_QUEUE_CAPACITY: usize = 64;

/// Errors returned by [`NavigationHandle::navigate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The navigator rejected the transition.
    #[error(transparent)]
    Navigation(#[from] NavigationError),

    /// The worker task is gone, so the request was never processed.
    #[error("navigation service has stopped")]
    Stopped,
}

struct NavigationRequest {
    location: String,
    reply: oneshot::Sender<Result<NavigationOutcome, NavigationError>>,
}

/// Entry point for starting the worker task.
pub struct NavigationService;

impl NavigationService {
    /// Moves `navigator` into a new Tokio task and returns a handle to it.
    ///
    /// The task runs until every [`NavigationHandle`] clone has been dropped,
    /// then hands the navigator back through the returned [`JoinHandle`].
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn(navigator: Navigator) -> (NavigationHandle, JoinHandle<Navigator>) {
        let (tx, rx) = mpsc::channel(NAVIGATION_QUEUE_CAPACITY);
        let (state_tx, state_rx) = watch::channel(NavigationState::Idle);

        let worker = tokio::spawn(run_worker(navigator, rx, state_tx));
        let handle = NavigationHandle {
            requests: tx,
            state: state_rx,
        };
        (handle, worker)
    }
}

async fn run_worker(
    mut navigator: Navigator,
    mut requests: mpsc::Receiver<NavigationRequest>,
    state: watch::Sender<NavigationState>,
) -> Navigator {
    info!("navigation service started");

    while let Some(request) = requests.recv().await {
        state.send_replace(NavigationState::Transitioning);
        let result = navigator.navigate(&request.location);
        state.send_replace(NavigationState::Idle);

        if request.reply.send(result).is_err() {
            debug!(location = %request.location, "caller went away before the reply");
        }
    }

    info!("navigation service stopped");
    navigator
}

/// Cloneable handle for submitting navigations and observing state.
#[derive(Clone)]
pub struct NavigationHandle {
    requests: mpsc::Sender<NavigationRequest>,
    state: watch::Receiver<NavigationState>,
}

impl NavigationHandle {
    /// Queues a navigation to `location` and waits for its outcome.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::Navigation`] if the navigator rejected the transition.
    /// - [`ServiceError::Stopped`] if the worker task is no longer running.
    pub async fn navigate(
        &self,
        location: impl Into<String>,
    ) -> Result<NavigationOutcome, ServiceError> {
        let (reply, response) = oneshot::channel();
        let request = NavigationRequest {
            location: location.into(),
            reply,
        };

        self.requests
            .send(request)
            .await
            .map_err(|_| ServiceError::Stopped)?;
        let result = response.await.map_err(|_| ServiceError::Stopped)?;
        Ok(result?)
    }

    /// The state at the moment of the call.
    pub fn state(&self) -> NavigationState {
        *self.state.borrow()
    }

    /// A receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<NavigationState> {
        self.state.clone()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use exam_web_core::{RouteError, RouteTable, TitleSink, View};
    use std::sync::{mpsc as std_mpsc, Arc, Mutex};

    #[derive(Default)]
    struct RecordingTitles {
        titles: Mutex<Vec<String>>,
    }

    impl TitleSink for RecordingTitles {
        fn set_title(&self, title: &str) {
            self.titles.lock().unwrap().push(title.to_string());
        }
    }

    fn spawn_service() -> (NavigationHandle, JoinHandle<Navigator>, Arc<RecordingTitles>) {
        let titles = Arc::new(RecordingTitles::default());
        let navigator = Navigator::new(RouteTable::standard(), titles.clone());
        let (handle, worker) = NavigationService::spawn(navigator);
        (handle, worker, titles)
    }

    #[tokio::test]
    async fn test_navigate_returns_committed_route() {
        // Arrange
        let (handle, _worker, titles) = spawn_service();

        // Act
        let outcome = handle.navigate("/practice").await.unwrap();

        // Assert
        assert_eq!(outcome.route.view(), Some(View::Practice));
        assert_eq!(
            titles.titles.lock().unwrap().last().map(String::as_str),
            Some("刷题练习 - 智能学习平台")
        );
    }

    #[tokio::test]
    async fn test_requests_are_processed_in_queue_order() {
        let (handle, _worker, _) = spawn_service();

        // `join!` polls the first future first, so its request is queued first.
        let (first, second) =
            tokio::join!(handle.navigate("/exam-result/7"), handle.navigate("/exam/7"));

        assert_eq!(first.unwrap().route.path, "/exam-result/7");
        let second = second.unwrap();
        assert!(second.was_redirected());
        assert_eq!(second.route.path, "/exam/list");
    }

    #[tokio::test]
    async fn test_navigation_error_is_reported_to_caller() {
        let (handle, _worker, _) = spawn_service();

        let err = handle.navigate("exam/7").await.unwrap_err();

        assert_eq!(
            err,
            ServiceError::Navigation(NavigationError::Route(RouteError::InvalidPath(
                "exam/7".to_string()
            )))
        );
    }

    #[tokio::test]
    async fn test_state_returns_to_idle_after_transition() {
        let (handle, _worker, _) = spawn_service();
        let mut states = handle.subscribe();
        assert_eq!(handle.state(), NavigationState::Idle);

        handle.navigate("/home").await.unwrap();

        assert!(states.has_changed().unwrap());
        assert_eq!(*states.borrow_and_update(), NavigationState::Idle);
    }

    /// Blocks the first `set_title` call until the test opens the gate.
    struct GatedTitles {
        gate: Mutex<Option<std_mpsc::Receiver<()>>>,
    }

    impl TitleSink for GatedTitles {
        fn set_title(&self, _title: &str) {
            let gate = self.gate.lock().unwrap().take();
            if let Some(gate) = gate {
                let _ = gate.recv();
            }
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_state_is_transitioning_while_navigation_is_in_flight() {
        // Arrange
        let (open_gate, gate) = std_mpsc::channel();
        let titles = Arc::new(GatedTitles {
            gate: Mutex::new(Some(gate)),
        });
        let navigator = Navigator::new(RouteTable::standard(), titles);
        let (handle, _worker) = NavigationService::spawn(navigator);
        let mut states = handle.subscribe();

        // Act
        let pending = tokio::spawn({
            let handle = handle.clone();
            async move { handle.navigate("/practice").await }
        });
        states.changed().await.unwrap();

        // Assert
        assert_eq!(*states.borrow_and_update(), NavigationState::Transitioning);
        assert_eq!(handle.state(), NavigationState::Transitioning);

        open_gate.send(()).unwrap();
        let outcome = pending.await.unwrap().unwrap();
        assert_eq!(outcome.route.view(), Some(View::Practice));
        assert_eq!(handle.state(), NavigationState::Idle);
        assert_eq!(*states.borrow_and_update(), NavigationState::Idle);
    }

    #[tokio::test]
    async fn test_worker_returns_navigator_when_handles_drop() {
        let (handle, worker, _) = spawn_service();
        let clone = handle.clone();
        handle.navigate("/videos/3").await.unwrap();

        drop(handle);
        drop(clone);
        let navigator = worker.await.unwrap();

        assert_eq!(navigator.current().path, "/videos/3");
    }

    #[tokio::test]
    async fn test_stopped_worker_is_reported() {
        let (handle, worker, _) = spawn_service();
        worker.abort();
        let _ = worker.await;

        let err = handle.navigate("/home").await.unwrap_err();

        assert_eq!(err, ServiceError::Stopped);
    }
}
