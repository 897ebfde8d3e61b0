//! Submission boundary: the single current-result slot and its transitions.
//!
//! Every submission first clears the previous result, then validates, then
//! runs one request on the blocking pool. Every failure becomes one displayed
//! message and leaves the session usable. Observers get the transitions in
//! order through an optional event channel.

use tokio::sync::mpsc::UnboundedSender;

use crate::api::ApiClient;
use crate::messages::StatusMessages;
use crate::models::{DownloadRequest, VideoInfo};
use crate::presenter::Presentation;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Pending,
    Ready(Presentation),
    /// The message to display.
    Failed(String),
}

/// State transitions, in the order they happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The previously shown result was removed.
    Cleared,
    /// Input rejected locally; no request was made.
    Invalid(String),
    /// A request was issued.
    Pending,
    Ready(VideoInfo),
    Failed(String),
}

pub struct Session {
    client: ApiClient,
    messages: StatusMessages,
    state: FormState,
    events: Option<UnboundedSender<SessionEvent>>,
}

impl Session {
    pub fn new(client: ApiClient, messages: StatusMessages) -> Self {
        Self {
            client,
            messages,
            state: FormState::Idle,
            events: None,
        }
    }

    /// Report transitions to `tx`.
    pub fn with_events(mut self, tx: UnboundedSender<SessionEvent>) -> Self {
        self.events = Some(tx);
        self
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// The result currently shown, if any.
    pub fn current(&self) -> Option<&Presentation> {
        match &self.state {
            FormState::Ready(p) => Some(p),
            _ => None,
        }
    }

    /// True while a submission is awaiting its response. Submission controls
    /// should be disabled while this holds.
    pub fn is_pending(&self) -> bool {
        matches!(self.state, FormState::Pending) || self.client.is_in_flight()
    }

    /// Submits `input` and returns the settled state.
    pub async fn submit(&mut self, input: &str) -> &FormState {
        if self.current().is_some() {
            self.emit(SessionEvent::Cleared);
        }
        self.state = FormState::Idle;

        let request = match DownloadRequest::new(input) {
            Ok(r) => r,
            Err(e) => {
                let message = e.to_string();
                self.emit(SessionEvent::Invalid(message.clone()));
                self.state = FormState::Failed(message);
                return &self.state;
            }
        };

        self.state = FormState::Pending;
        self.emit(SessionEvent::Pending);

        let client = self.client.clone();
        let pending = PendingGuard::new(&mut self.state);
        let outcome =
            tokio::task::spawn_blocking(move || client.fetch_video_info(&request)).await;
        pending.settle();

        let (state, event) = match outcome {
            Ok(Ok(info)) => (
                FormState::Ready(Presentation::new(info.clone())),
                SessionEvent::Ready(info),
            ),
            Ok(Err(e)) => {
                tracing::warn!("submission failed: {}", e);
                let message = e.user_message(&self.messages);
                (
                    FormState::Failed(message.clone()),
                    SessionEvent::Failed(message),
                )
            }
            Err(e) => {
                tracing::error!("request task did not complete: {}", e);
                let message = self.messages.unknown.clone();
                (
                    FormState::Failed(message.clone()),
                    SessionEvent::Failed(message),
                )
            }
        };

        self.emit(event);
        self.state = state;
        &self.state
    }

    /// Forgets the shown result or error.
    pub fn reset(&mut self) {
        if self.current().is_some() {
            self.emit(SessionEvent::Cleared);
        }
        self.state = FormState::Idle;
    }

    fn emit(&self, event: SessionEvent) {
        if let Some(tx) = &self.events {
            let _ = tx.send(event);
        }
    }
}

/// Puts a `Pending` state back to `Idle` if `submit` is dropped before the
/// request settles. The request itself keeps running on the blocking pool
/// and holds the client's in-flight flag until it finishes.
struct PendingGuard<'a> {
    state: &'a mut FormState,
    settled: bool,
}

impl<'a> PendingGuard<'a> {
    fn new(state: &'a mut FormState) -> Self {
        Self {
            state,
            settled: false,
        }
    }

    fn settle(mut self) {
        self.settled = true;
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            *self.state = FormState::Idle;
        }
    }
}
