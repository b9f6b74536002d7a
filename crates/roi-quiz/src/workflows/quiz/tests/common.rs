use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::config::CalculatorConfig;
use crate::workflows::quiz::definition::QuizDefinition;
use crate::workflows::quiz::domain::{Industry, QuizAnswers, SubmissionPhase};
use crate::workflows::quiz::router::quiz_router;
use crate::workflows::quiz::service::QuizFlowService;
use crate::workflows::quiz::store::{SessionRecord, SessionStore, StoreError, SubmissionClaim};
use crate::workflows::quiz::submission::{
    ContextProvider, FormSubmission, FormsGateway, SubmissionContext, SubmissionError,
};

pub(super) fn calculator_config() -> CalculatorConfig {
    CalculatorConfig {
        title: "ROI Calculator".to_string(),
        subtitle: "What's the value of a purpose-built platform? Estimate hours and dollars \
                   saved and time to launch."
            .to_string(),
        class_name: String::new(),
        page_uri: "https://www.example.com/roi-calculator".to_string(),
        page_name: "ROI Calculator".to_string(),
    }
}

pub(super) fn complete_answers(industry: Industry) -> QuizAnswers {
    QuizAnswers {
        industry: Some(industry),
        administrators: 10,
        reviewers: 20,
        average_salary: 50_000,
        launch_time_months: 4,
        total_employees: "100".to_string(),
        first_name: "Dana".to_string(),
        last_name: "Whitley".to_string(),
        work_email: "dana.whitley@acmegrants.org".to_string(),
        company_name: "Acme Grants".to_string(),
        phone: "555-0100".to_string(),
    }
}

pub(super) fn build_service() -> (
    QuizFlowService<MemorySessionStore, RecordingGateway, StaticContext>,
    Arc<MemorySessionStore>,
    Arc<RecordingGateway>,
) {
    let store = Arc::new(MemorySessionStore::default());
    let gateway = Arc::new(RecordingGateway::default());
    let service = QuizFlowService::new(store.clone(), gateway.clone(), Arc::new(StaticContext));
    (service, store, gateway)
}

/// Open a session and write a complete answer set straight into the store.
pub(super) fn open_complete_session<G>(
    service: &QuizFlowService<MemorySessionStore, G, StaticContext>,
    store: &MemorySessionStore,
    industry: Industry,
) -> String
where
    G: FormsGateway + 'static,
{
    let view = service.open().expect("session opens");
    let mut record = store
        .fetch(&view.session_id)
        .expect("store reachable")
        .expect("record present");
    record.answers = complete_answers(industry);
    store.update(record).expect("store accepts update");
    view.session_id
}

pub(super) fn quiz_router_with_service(
    service: QuizFlowService<MemorySessionStore, RecordingGateway, StaticContext>,
) -> axum::Router {
    quiz_router(
        Arc::new(service),
        QuizDefinition::from_config(&calculator_config()),
    )
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[derive(Default, Clone)]
pub(super) struct MemorySessionStore {
    records: Arc<Mutex<HashMap<String, SessionRecord>>>,
}

impl SessionStore for MemorySessionStore {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        if guard.contains_key(&record.session_id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(record.session_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: SessionRecord) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        guard.insert(record.session_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, session_id: &str) -> Result<Option<SessionRecord>, StoreError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.get(session_id).cloned())
    }

    fn claim_for_submission(
        &self,
        session_id: &str,
    ) -> Result<Option<SubmissionClaim>, StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        match guard.get_mut(session_id) {
            Some(record) if record.phase == SubmissionPhase::Idle => {
                record.phase = SubmissionPhase::Submitting;
                Ok(Some(SubmissionClaim::Claimed(record.clone())))
            }
            Some(record) => Ok(Some(SubmissionClaim::Refused(record.clone()))),
            None => Ok(None),
        }
    }
}

#[derive(Default, Clone)]
pub(super) struct RecordingGateway {
    submissions: Arc<Mutex<Vec<FormSubmission>>>,
}

impl RecordingGateway {
    pub(super) fn submissions(&self) -> Vec<FormSubmission> {
        self.submissions
            .lock()
            .expect("gateway mutex poisoned")
            .clone()
    }
}

impl FormsGateway for RecordingGateway {
    fn submit(&self, submission: &FormSubmission) -> Result<(), SubmissionError> {
        self.submissions
            .lock()
            .expect("gateway mutex poisoned")
            .push(submission.clone());
        Ok(())
    }
}

pub(super) struct RejectingGateway {
    pub(super) status: u16,
}

impl FormsGateway for RejectingGateway {
    fn submit(&self, _submission: &FormSubmission) -> Result<(), SubmissionError> {
        Err(SubmissionError::Rejected {
            status: self.status,
        })
    }
}

/// Fails the first `failures` dispatches, then accepts the rest.
pub(super) struct FlakyGateway {
    failures_remaining: Mutex<u32>,
    submissions: Mutex<Vec<FormSubmission>>,
}

impl FlakyGateway {
    pub(super) fn new(failures: u32) -> Self {
        Self {
            failures_remaining: Mutex::new(failures),
            submissions: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn delivered(&self) -> usize {
        self.submissions.lock().expect("gateway mutex poisoned").len()
    }
}

impl FormsGateway for FlakyGateway {
    fn submit(&self, submission: &FormSubmission) -> Result<(), SubmissionError> {
        let mut remaining = self
            .failures_remaining
            .lock()
            .expect("gateway mutex poisoned");
        if *remaining > 0 {
            *remaining -= 1;
            return Err(SubmissionError::Rejected { status: 502 });
        }
        self.submissions
            .lock()
            .expect("gateway mutex poisoned")
            .push(submission.clone());
        Ok(())
    }
}

pub(super) struct UnavailableStore;

impl SessionStore for UnavailableStore {
    fn insert(&self, _record: SessionRecord) -> Result<SessionRecord, StoreError> {
        Err(StoreError::Unavailable("session database offline".to_string()))
    }

    fn update(&self, _record: SessionRecord) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("session database offline".to_string()))
    }

    fn fetch(&self, _session_id: &str) -> Result<Option<SessionRecord>, StoreError> {
        Err(StoreError::Unavailable("session database offline".to_string()))
    }

    fn claim_for_submission(
        &self,
        _session_id: &str,
    ) -> Result<Option<SubmissionClaim>, StoreError> {
        Err(StoreError::Unavailable("session database offline".to_string()))
    }
}

pub(super) struct StaticContext;

impl ContextProvider for StaticContext {
    fn capture(&self) -> SubmissionContext {
        SubmissionContext {
            page_uri: "https://www.example.com/roi-calculator".to_string(),
            page_name: "ROI Calculator".to_string(),
            hutk: None,
        }
    }
}
