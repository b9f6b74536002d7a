use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{QuizAnswers, SubmissionPhase};

/// Identifier assigned to a questionnaire session when it is opened.
pub type SessionId = String;

/// Stored state for one visitor's pass through the questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub session_id: SessionId,
    pub answers: QuizAnswers,
    pub phase: SubmissionPhase,
    /// Set once the submission is accepted downstream.
    pub submitted_at: Option<DateTime<Utc>>,
    /// Operator-facing note describing the most recent dispatch failure.
    pub last_failure: Option<String>,
}

impl SessionRecord {
    pub fn new(session_id: impl Into<SessionId>) -> Self {
        Self {
            session_id: session_id.into(),
            answers: QuizAnswers::default(),
            phase: SubmissionPhase::Idle,
            submitted_at: None,
            last_failure: None,
        }
    }
}

/// Outcome of an attempt to take ownership of a session's submission.
///
/// `Claimed` means the store moved the session from `Idle` to `Submitting`
/// in one step and the caller now owns the dispatch. `Refused` means another
/// caller already holds the claim or the results are already revealed; the
/// current record rides along so callers can report state without a second
/// fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionClaim {
    Claimed(SessionRecord),
    Refused(SessionRecord),
}

/// Storage abstraction so the flow service can be exercised in isolation.
pub trait SessionStore: Send + Sync {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, StoreError>;
    fn update(&self, record: SessionRecord) -> Result<(), StoreError>;
    fn fetch(&self, session_id: &str) -> Result<Option<SessionRecord>, StoreError>;
    /// Atomically move an `Idle` session to `Submitting`; `None` when the
    /// session does not exist.
    fn claim_for_submission(&self, session_id: &str)
        -> Result<Option<SubmissionClaim>, StoreError>;
}

/// Error enumeration for session storage failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("session already exists")]
    Conflict,
    #[error("session not found")]
    NotFound,
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}
