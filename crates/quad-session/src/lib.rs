//! # quad-session
//!
//! Observable search session state.
//!
//! [`SearchSession`] holds the state of the most recent search — query,
//! school, results, status, and error — and publishes it as whole-state
//! snapshots through a [`tokio::sync::watch`] channel. Every transition
//! replaces the entire state in one `send_replace`, so observers never see
//! a half-updated mix of old and new fields.
//!
//! The session does not coordinate concurrent searches: if a caller fires
//! two requests without serializing them, a slow earlier response can land
//! after a later one and record stale results. Callers that allow overlap
//! must guard against that themselves (e.g. by comparing the response's
//! query against the currently held one before calling [`SearchSession::succeed`]).

use serde::Serialize;
use tokio::sync::watch;

use quad_core::{CourseRow, SearchStatus};

/// Full snapshot of the current search session.
///
/// Invariants, enforced by construction in the transition methods:
/// - `status == Success` ⇒ `error` is `None` and `results` holds the last
///   successful response
/// - `status == Error` ⇒ `results` is empty and `error` is `Some`
/// - `status == Loading` ⇒ `results` is empty and `error` is `None`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionState {
    pub query: String,
    pub school: Option<String>,
    pub results: Vec<CourseRow>,
    pub status: SearchStatus,
    pub error: Option<String>,
}

/// Single-writer container for [`SessionState`].
///
/// All mutation goes through the four transition methods; there is no way
/// to update an individual field.
pub struct SearchSession {
    tx: watch::Sender<SessionState>,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    /// Create a session in the initial idle state.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SessionState::default());
        Self { tx }
    }

    /// Return to the initial idle state, regardless of prior state.
    pub fn reset(&self) {
        self.tx.send_replace(SessionState::default());
    }

    /// Record that a search for `query` against `school` is in flight.
    pub fn start(&self, query: impl Into<String>, school: impl Into<String>) {
        self.tx.send_replace(SessionState {
            query: query.into(),
            school: Some(school.into()),
            results: Vec::new(),
            status: SearchStatus::Loading,
            error: None,
        });
    }

    /// Record a completed search and its results.
    pub fn succeed(
        &self,
        query: impl Into<String>,
        school: impl Into<String>,
        results: Vec<CourseRow>,
    ) {
        self.tx.send_replace(SessionState {
            query: query.into(),
            school: Some(school.into()),
            results,
            status: SearchStatus::Success,
            error: None,
        });
    }

    /// Record a failed search and the message to display.
    pub fn fail(
        &self,
        query: impl Into<String>,
        school: impl Into<String>,
        error: impl Into<String>,
    ) {
        self.tx.send_replace(SessionState {
            query: query.into(),
            school: Some(school.into()),
            results: Vec::new(),
            status: SearchStatus::Error,
            error: Some(error.into()),
        });
    }

    /// Subscribe to state snapshots. The receiver sees the state current at
    /// subscription time and is marked changed on every later transition.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.tx.subscribe()
    }

    /// Clone of the current state.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.tx.borrow().clone()
    }
}
