//! End-to-end specifications for the questionnaire flow.
//!
//! Scenarios drive the public service facade and HTTP router the way a
//! hosting front end would: open a session, stream keyed answer updates,
//! then submit and watch the results reveal, without reaching into private
//! modules.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use roi_quiz::config::CalculatorConfig;
    use roi_quiz::workflows::quiz::domain::SubmissionPhase;
    use roi_quiz::workflows::quiz::store::{
        SessionRecord, SessionStore, StoreError, SubmissionClaim,
    };
    use roi_quiz::workflows::quiz::submission::{
        ContextProvider, FormSubmission, FormsGateway, SubmissionContext, SubmissionError,
    };
    use roi_quiz::workflows::quiz::{quiz_router, QuizDefinition, QuizFlowService};
    use serde_json::{json, Value};

    pub(super) fn calculator_config() -> CalculatorConfig {
        CalculatorConfig {
            title: "ROI Calculator".to_string(),
            subtitle: "What's the value of a purpose-built platform? Estimate hours and \
                       dollars saved and time to launch."
                .to_string(),
            class_name: String::new(),
            page_uri: "https://www.example.com/roi-calculator".to_string(),
            page_name: "ROI Calculator".to_string(),
        }
    }

    /// Keyed updates for a complete private-tier questionnaire, in the order
    /// a visitor would supply them.
    pub(super) fn answer_payloads() -> Vec<Value> {
        vec![
            json!({"field": "industry", "value": "private"}),
            json!({"field": "administrators", "value": 10}),
            json!({"field": "reviewers", "value": 20}),
            json!({"field": "average_salary", "value": 50000}),
            json!({"field": "launch_time_months", "value": 4}),
            json!({"field": "total_employees", "value": "100"}),
            json!({"field": "first_name", "value": "Dana"}),
            json!({"field": "last_name", "value": "Whitley"}),
            json!({"field": "work_email", "value": "dana.whitley@acmegrants.org"}),
            json!({"field": "company_name", "value": "Acme Grants"}),
            json!({"field": "phone", "value": "555-0100"}),
        ]
    }

    #[derive(Default, Clone)]
    pub(super) struct MemorySessionStore {
        records: Arc<Mutex<HashMap<String, SessionRecord>>>,
    }

    impl SessionStore for MemorySessionStore {
        fn insert(&self, record: SessionRecord) -> Result<SessionRecord, StoreError> {
            let mut guard = self.records.lock().expect("lock");
            if guard.contains_key(&record.session_id) {
                return Err(StoreError::Conflict);
            }
            guard.insert(record.session_id.clone(), record.clone());
            Ok(record)
        }

        fn update(&self, record: SessionRecord) -> Result<(), StoreError> {
            let mut guard = self.records.lock().expect("lock");
            guard.insert(record.session_id.clone(), record);
            Ok(())
        }

        fn fetch(&self, session_id: &str) -> Result<Option<SessionRecord>, StoreError> {
            let guard = self.records.lock().expect("lock");
            Ok(guard.get(session_id).cloned())
        }

        fn claim_for_submission(
            &self,
            session_id: &str,
        ) -> Result<Option<SubmissionClaim>, StoreError> {
            let mut guard = self.records.lock().expect("lock");
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
            self.submissions.lock().expect("lock").clone()
        }
    }

    impl FormsGateway for RecordingGateway {
        fn submit(&self, submission: &FormSubmission) -> Result<(), SubmissionError> {
            self.submissions.lock().expect("lock").push(submission.clone());
            Ok(())
        }
    }

    /// Rejects every dispatch with the configured status.
    pub(super) struct RejectingGateway(pub(super) u16);

    impl FormsGateway for RejectingGateway {
        fn submit(&self, _submission: &FormSubmission) -> Result<(), SubmissionError> {
            Err(SubmissionError::Rejected { status: self.0 })
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

    pub(super) fn build_router() -> (axum::Router, Arc<RecordingGateway>) {
        let store = Arc::new(MemorySessionStore::default());
        let gateway = Arc::new(RecordingGateway::default());
        let service = Arc::new(QuizFlowService::new(
            store,
            gateway.clone(),
            Arc::new(StaticContext),
        ));
        let router = quiz_router(service, QuizDefinition::from_config(&calculator_config()));
        (router, gateway)
    }

    pub(super) async fn read_json_body(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        serde_json::from_slice(&body).expect("json")
    }
}

mod journey {
    use super::common::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    #[tokio::test]
    async fn full_questionnaire_round_trip_reveals_results() {
        let (router, gateway) = build_router();

        let response = router
            .clone()
            .oneshot(
                Request::post("/api/v1/quiz/sessions")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("open dispatch");
        assert_eq!(response.status(), StatusCode::CREATED);
        let opened = read_json_body(response).await;
        let session_id = opened
            .get("session_id")
            .and_then(Value::as_str)
            .expect("session id assigned")
            .to_string();
        assert_eq!(opened.get("phase"), Some(&json!("idle")));

        for payload in answer_payloads() {
            let response = router
                .clone()
                .oneshot(
                    Request::post(format!("/api/v1/quiz/sessions/{session_id}/answers"))
                        .header(header::CONTENT_TYPE, "application/json")
                        .body(Body::from(serde_json::to_vec(&payload).expect("serialize")))
                        .expect("request"),
                )
                .await
                .expect("answer dispatch");
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = router
            .clone()
            .oneshot(
                Request::get(format!("/api/v1/quiz/sessions/{session_id}"))
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("view dispatch");
        let view = read_json_body(response).await;
        assert_eq!(view.pointer("/gating/satisfied"), Some(&json!(true)));
        assert_eq!(view.get("phase"), Some(&json!("idle")));
        assert!(
            view.get("confirmation").is_none(),
            "results stay unconfirmed before submission"
        );
        assert_eq!(
            view.pointer("/estimate/admin_hours_per_week"),
            Some(&json!(32)),
            "10 private administrators save 32 hours a week"
        );

        let response = router
            .clone()
            .oneshot(
                Request::post(format!("/api/v1/quiz/sessions/{session_id}/submission"))
                    .header(header::COOKIE, "hubspotutk=integration-token")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("submission dispatch");
        assert_eq!(response.status(), StatusCode::OK);
        let revealed = read_json_body(response).await;
        assert_eq!(revealed.get("phase"), Some(&json!("revealed")));
        assert!(revealed.get("confirmation").is_some());

        let submissions = gateway.submissions();
        assert_eq!(submissions.len(), 1);
        let submission = &submissions[0];
        assert_eq!(submission.context.hutk.as_deref(), Some("integration-token"));
        let names: Vec<_> = submission
            .fields
            .iter()
            .map(|field| field.name.as_str())
            .collect();
        assert_eq!(names.first(), Some(&"firstname"));
        assert!(names.contains(&"total_employees"));
        assert_eq!(names.last(), Some(&"retention_per_year"));

        let response = router
            .clone()
            .oneshot(
                Request::get(format!("/api/v1/quiz/sessions/{session_id}"))
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("view dispatch");
        let after = read_json_body(response).await;
        assert_eq!(
            after.get("phase"),
            Some(&json!("revealed")),
            "reveal is terminal"
        );
    }

    #[tokio::test]
    async fn definition_route_describes_the_questionnaire() {
        let (router, _) = build_router();

        let response = router
            .oneshot(
                Request::get("/api/v1/quiz/definition")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("definition dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload.get("title"), Some(&json!("ROI Calculator")));
        assert_eq!(
            payload
                .get("launch_buckets")
                .and_then(Value::as_array)
                .map(Vec::len),
            Some(7)
        );
        assert_eq!(
            payload
                .get("contact_fields")
                .and_then(Value::as_array)
                .map(Vec::len),
            Some(5)
        );
    }
}

mod recovery {
    use std::sync::Arc;

    use super::common::*;
    use roi_quiz::workflows::quiz::domain::{AnswerUpdate, Industry};
    use roi_quiz::workflows::quiz::{ContextOverrides, QuizFlowService};

    fn complete(service: &QuizFlowService<MemorySessionStore, RejectingGateway, StaticContext>) -> String {
        let session_id = service.open().expect("open").session_id;
        let updates = vec![
            AnswerUpdate::Industry(Industry::Public),
            AnswerUpdate::Administrators(10),
            AnswerUpdate::FirstName("Dana".to_string()),
            AnswerUpdate::LastName("Whitley".to_string()),
            AnswerUpdate::WorkEmail("dana.whitley@acmegrants.org".to_string()),
            AnswerUpdate::CompanyName("Acme Grants".to_string()),
        ];
        for update in updates {
            service.answer(&session_id, update).expect("update applies");
        }
        session_id
    }

    #[test]
    fn rejected_submissions_leave_the_session_interactive() {
        let service = QuizFlowService::new(
            Arc::new(MemorySessionStore::default()),
            Arc::new(RejectingGateway(503)),
            Arc::new(StaticContext),
        );
        let session_id = complete(&service);

        let view = service
            .submit(&session_id, ContextOverrides::default())
            .expect("failure never reaches the visitor");

        assert_eq!(view.phase, "idle");
        assert!(view.confirmation.is_none());
        assert!(view.gating.satisfied, "answers remain intact for a retry");

        let retry = service
            .submit(&session_id, ContextOverrides::default())
            .expect("retry is accepted");
        assert_eq!(retry.phase, "idle", "still failing, still interactive");
    }
}
