use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::error;

use super::domain::{AnswerUpdate, QuizAnswers, SubmissionPhase};
use super::estimate::{EstimateEngine, RoiEstimate};
use super::gating::{self, GatingReport};
use super::store::{SessionId, SessionRecord, SessionStore, StoreError, SubmissionClaim};
use super::submission::{ContextOverrides, ContextProvider, FormSubmission, FormsGateway};

/// Confirmation copy shown once results are revealed.
pub const REVEAL_CONFIRMATION: &str =
    "Thank you for your submission, review your ROI results below.";

/// Service composing the session store, gating rules, computation engine,
/// and the outbound form gateway.
pub struct QuizFlowService<S, G, C> {
    store: Arc<S>,
    gateway: Arc<G>,
    context: Arc<C>,
    engine: EstimateEngine,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("quiz-{id:06}")
}

impl<S, G, C> QuizFlowService<S, G, C>
where
    S: SessionStore + 'static,
    G: FormsGateway + 'static,
    C: ContextProvider + 'static,
{
    pub fn new(store: Arc<S>, gateway: Arc<G>, context: Arc<C>) -> Self {
        Self {
            store,
            gateway,
            context,
            engine: EstimateEngine::default(),
        }
    }

    /// Open a fresh session with default answers.
    pub fn open(&self) -> Result<SessionView, QuizServiceError> {
        let record = self.store.insert(SessionRecord::new(next_session_id()))?;
        Ok(self.view_of(record))
    }

    /// Apply one keyed answer update and return the refreshed view.
    ///
    /// Answers stay editable in every phase; the estimate always tracks the
    /// current answers.
    pub fn answer(
        &self,
        session_id: &str,
        update: AnswerUpdate,
    ) -> Result<SessionView, QuizServiceError> {
        let mut record = self.store.fetch(session_id)?.ok_or(StoreError::NotFound)?;
        record.answers.apply(update);
        self.store.update(record.clone())?;
        Ok(self.view_of(record))
    }

    /// Current state of a session for API responses.
    pub fn view(&self, session_id: &str) -> Result<SessionView, QuizServiceError> {
        let record = self.store.fetch(session_id)?.ok_or(StoreError::NotFound)?;
        Ok(self.view_of(record))
    }

    /// Submit answers and results to the form endpoint, then reveal.
    ///
    /// A no-op returning the current view unless the session is idle and
    /// gating holds. The store claim keeps concurrent submits single-flight.
    /// Dispatch failure is logged and recorded on the session, never shown
    /// to the visitor; the session returns to idle and may submit again.
    pub fn submit(
        &self,
        session_id: &str,
        overrides: ContextOverrides,
    ) -> Result<SessionView, QuizServiceError> {
        let record = self.store.fetch(session_id)?.ok_or(StoreError::NotFound)?;
        if record.phase != SubmissionPhase::Idle || !gating::evaluate(&record.answers).satisfied {
            return Ok(self.view_of(record));
        }

        let claim = self
            .store
            .claim_for_submission(session_id)?
            .ok_or(StoreError::NotFound)?;
        let mut record = match claim {
            SubmissionClaim::Claimed(record) => record,
            SubmissionClaim::Refused(record) => return Ok(self.view_of(record)),
        };

        // Answers may have changed between the gating check and the claim.
        if !gating::evaluate(&record.answers).satisfied {
            record.phase = SubmissionPhase::Idle;
            self.store.update(record.clone())?;
            return Ok(self.view_of(record));
        }

        let estimate = self.engine.compute(&record.answers);
        let context = self.context.capture().with_overrides(overrides);
        let submission = FormSubmission::assemble(&record.answers, &estimate, context);

        match self.gateway.submit(&submission) {
            Ok(()) => {
                record.phase = SubmissionPhase::Revealed;
                record.submitted_at = Some(Utc::now());
                record.last_failure = None;
            }
            Err(err) => {
                error!(session_id = %record.session_id, error = %err, "quiz submission dispatch failed");
                record.phase = SubmissionPhase::Idle;
                record.last_failure = Some(err.to_string());
            }
        }
        self.store.update(record.clone())?;
        Ok(self.view_of(record))
    }

    fn view_of(&self, record: SessionRecord) -> SessionView {
        let gating = gating::evaluate(&record.answers);
        let estimate = gating
            .satisfied
            .then(|| self.engine.compute(&record.answers));
        let confirmation =
            (record.phase == SubmissionPhase::Revealed).then_some(REVEAL_CONFIRMATION);

        SessionView {
            session_id: record.session_id,
            phase: record.phase.label(),
            answers: record.answers,
            gating,
            estimate,
            confirmation,
        }
    }
}

/// Error raised by the quiz flow service.
#[derive(Debug, thiserror::Error)]
pub enum QuizServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Sanitized representation of a session exposed to hosting adapters.
///
/// The estimate rides along only while gating is satisfied, so incomplete
/// questionnaires never leak derived figures.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: SessionId,
    pub phase: &'static str,
    pub answers: QuizAnswers,
    pub gating: GatingReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<RoiEstimate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<&'static str>,
}
