use metrics_exporter_prometheus::PrometheusHandle;
use roi_quiz::workflows::quiz::{
    Industry, SessionRecord, SessionStore, StoreError, SubmissionClaim, SubmissionPhase,
};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local session store backing the service.
///
/// `claim_for_submission` performs its check-and-set under the same lock as
/// every other operation, so at most one caller ever sees a `Claimed` result
/// for an idle session.
#[derive(Default, Clone)]
pub(crate) struct InMemorySessionStore {
    records: Arc<Mutex<HashMap<String, SessionRecord>>>,
}

impl SessionStore for InMemorySessionStore {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, StoreError> {
        let mut guard = self.records.lock().expect("session mutex poisoned");
        match guard.entry(record.session_id.clone()) {
            Entry::Occupied(_) => Err(StoreError::Conflict),
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                Ok(record)
            }
        }
    }

    fn update(&self, record: SessionRecord) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("session mutex poisoned");
        match guard.get_mut(&record.session_id) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    fn fetch(&self, session_id: &str) -> Result<Option<SessionRecord>, StoreError> {
        let guard = self.records.lock().expect("session mutex poisoned");
        Ok(guard.get(session_id).cloned())
    }

    fn claim_for_submission(
        &self,
        session_id: &str,
    ) -> Result<Option<SubmissionClaim>, StoreError> {
        let mut guard = self.records.lock().expect("session mutex poisoned");
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

pub(crate) fn parse_industry(raw: &str) -> Result<Industry, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "nonprofit" => Ok(Industry::Nonprofit),
        "public" => Ok(Industry::Public),
        "private" => Ok(Industry::Private),
        other => Err(format!(
            "unknown industry '{other}' (expected nonprofit, public, or private)"
        )),
    }
}
