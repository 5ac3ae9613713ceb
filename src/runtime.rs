//! Runtime for executing interview sessions
//!
//! Each session owns its own state behind a mutex so that turns for one
//! candidate are processed strictly in order while distinct sessions run
//! independently. A session is dropped from memory on the turn that ends it;
//! what survives is the anonymised record in the archive.

mod executor;
pub mod traits;

#[cfg(test)]
pub mod testing;

#[allow(unused_imports)] // Public API re-exports
pub use executor::{InterviewRuntime, Reply, TurnOutcome};
pub use traits::*;

use crate::archive::JsonArchive;
use crate::state_machine::{Event, SessionContext, SessionState, TransitionError};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

/// Type alias for production runtime with concrete implementations
pub type ProductionRuntime = InterviewRuntime<LlmQuestionProvider, LlmClarifier, Arc<JsonArchive>>;

/// Session manager wired to the production collaborators
pub type ProductionSessions = SessionManager<LlmQuestionProvider, LlmClarifier, Arc<JsonArchive>>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Transition(#[from] TransitionError),
}

/// Manager for all live interview sessions
pub struct SessionManager<Q, C, R>
where
    Q: QuestionProvider,
    C: Clarifier,
    R: RecordStore,
{
    runtime: InterviewRuntime<Q, C, R>,
    sessions: RwLock<HashMap<String, Arc<Mutex<SessionState>>>>,
}

impl<Q, C, R> SessionManager<Q, C, R>
where
    Q: QuestionProvider,
    C: Clarifier,
    R: RecordStore,
{
    pub fn new(runtime: InterviewRuntime<Q, C, R>) -> Self {
        Self {
            runtime,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Open a new session and run its greeting turn
    pub async fn create(&self) -> Result<(String, TurnOutcome), SessionError> {
        let session_id = Uuid::new_v4().to_string();
        let context = SessionContext::new(session_id.clone());
        let mut state = SessionState::new();
        let outcome = self.runtime.run_turn(&context, &mut state, Event::Start).await?;

        let mut sessions = self.sessions.write().await;
        sessions.insert(session_id.clone(), Arc::new(Mutex::new(state)));

        tracing::info!(session_id = %session_id, live = sessions.len(), "Interview session created");
        Ok((session_id, outcome))
    }

    /// Feed one line of candidate input into a session.
    ///
    /// The session lock is held until the outcome (including the committed
    /// phase) is built, so the returned status always matches the replies.
    pub async fn submit(&self, session_id: &str, text: &str) -> Result<TurnOutcome, SessionError> {
        let slot = self.slot(session_id).await?;
        let mut state = slot.lock().await;
        let context = SessionContext::new(session_id);
        let outcome = self
            .runtime
            .run_turn(&context, &mut state, Event::user_input(text))
            .await?;

        if !outcome.active {
            // No path waits on a session lock while holding the map lock
            let mut sessions = self.sessions.write().await;
            sessions.remove(session_id);
            tracing::info!(
                session_id = %session_id,
                phase = outcome.phase.name(),
                live = sessions.len(),
                "Interview session closed"
            );
        }
        Ok(outcome)
    }

    /// Current state of a session, for transcript replay
    pub async fn snapshot(&self, session_id: &str) -> Result<SessionState, SessionError> {
        let slot = self.slot(session_id).await?;
        let state = slot.lock().await;
        Ok(state.clone())
    }

    #[cfg(test)]
    pub async fn live_sessions(&self) -> usize {
        self.sessions.read().await.len()
    }

    async fn slot(&self, session_id: &str) -> Result<Arc<Mutex<SessionState>>, SessionError> {
        self.sessions
            .read()
            .await
            .get(session_id)
            .cloned()
            .ok_or_else(|| SessionError::NotFound(session_id.to_string()))
    }
}
