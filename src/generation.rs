//! Lifecycle of a single generation.
//!
//! Every call to the completion API runs through one [`Invocation`]:
//!
//! ```text
//! Idle -> Composing -> AwaitingResponse -> Ready
//!             |               |
//!             +-> Errored <---+
//! ```
//!
//! `Ready` and `Errored` are terminal. A new request always starts a fresh
//! invocation; there is no resume or retry-in-place.

use crate::error::Result;
use serde::Serialize;
use std::fmt;
use std::future::Future;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// What an invocation is producing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvocationKind {
    Prompt,
    Architecture,
    Improvement,
}

impl fmt::Display for InvocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvocationKind::Prompt => write!(f, "prompt"),
            InvocationKind::Architecture => write!(f, "architecture"),
            InvocationKind::Improvement => write!(f, "improvement"),
        }
    }
}

/// State of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationState {
    Idle,
    Composing,
    AwaitingResponse,
    Ready,
    Errored,
}

impl GenerationState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GenerationState::Ready | GenerationState::Errored)
    }

    /// Whether `next` is a legal successor of this state.
    pub fn can_transition_to(&self, next: GenerationState) -> bool {
        use GenerationState::*;
        matches!(
            (self, next),
            (Idle, Composing)
                | (Composing, AwaitingResponse)
                | (Composing, Errored)
                | (AwaitingResponse, Ready)
                | (AwaitingResponse, Errored)
        )
    }
}

impl fmt::Display for GenerationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GenerationState::Idle => "idle",
            GenerationState::Composing => "composing",
            GenerationState::AwaitingResponse => "awaiting_response",
            GenerationState::Ready => "ready",
            GenerationState::Errored => "errored",
        };
        f.write_str(name)
    }
}

/// Tracks one generation from composition to its terminal state.
#[derive(Debug)]
pub struct Invocation {
    id: Uuid,
    kind: InvocationKind,
    state: GenerationState,
    history: Vec<GenerationState>,
    started: Instant,
}

impl Invocation {
    pub fn new(kind: InvocationKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            state: GenerationState::Idle,
            history: vec![GenerationState::Idle],
            started: Instant::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> InvocationKind {
        self.kind
    }

    pub fn state(&self) -> GenerationState {
        self.state
    }

    /// Every state visited so far, starting with `Idle`.
    pub fn history(&self) -> &[GenerationState] {
        &self.history
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Move to `next`. Illegal transitions leave the state unchanged and
    /// return `false`.
    pub fn transition(&mut self, next: GenerationState) -> bool {
        if !self.state.can_transition_to(next) {
            tracing::warn!(
                invocation = %self.id,
                kind = %self.kind,
                from = %self.state,
                to = %next,
                "ignored illegal generation state transition"
            );
            return false;
        }

        tracing::debug!(
            invocation = %self.id,
            kind = %self.kind,
            from = %self.state,
            to = %next,
            elapsed_ms = self.elapsed().as_millis() as u64,
            "generation state changed"
        );
        self.state = next;
        self.history.push(next);
        true
    }

    /// Run the synchronous composition step.
    pub fn compose<T>(&mut self, build: impl FnOnce() -> Result<T>) -> Result<T> {
        self.transition(GenerationState::Composing);
        let result = build();
        if result.is_err() {
            self.transition(GenerationState::Errored);
        }
        result
    }

    /// Suspend on the outbound call.
    ///
    /// A failed call settles the invocation as `Errored`; a successful one
    /// leaves it awaiting [`Invocation::settle`], since the response may still
    /// need to be interpreted.
    pub async fn await_response<T, F>(&mut self, call: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        self.transition(GenerationState::AwaitingResponse);
        let result = call.await;
        if let Err(err) = &result {
            tracing::warn!(invocation = %self.id, kind = %self.kind, error = %err, "completion call failed");
            self.transition(GenerationState::Errored);
        }
        result
    }

    /// Record the final outcome and pass it through.
    pub fn settle<T>(&mut self, result: Result<T>) -> Result<T> {
        match &result {
            Ok(_) => {
                self.transition(GenerationState::Ready);
            }
            Err(err) => {
                tracing::warn!(invocation = %self.id, kind = %self.kind, error = %err, "generation failed");
                self.transition(GenerationState::Errored);
            }
        }
        result
    }
}
