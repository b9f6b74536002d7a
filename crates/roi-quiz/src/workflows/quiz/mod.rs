//! Lead-capture ROI questionnaire workflow.
//!
//! Visitors answer a short multi-step form; their answers drive an estimated
//! return-on-investment figure that stays hidden until the contact form is
//! submitted to the CRM. The modules here cover the answer record, the
//! computation rules, submit gating, the outbound form client, and the
//! session flow service with its HTTP adapter.

pub mod definition;
pub mod domain;
pub(crate) mod estimate;
pub(crate) mod gating;
pub mod hubspot;
pub mod router;
pub mod service;
pub mod store;
pub mod submission;

#[cfg(test)]
mod tests;

pub use definition::{IndustryOption, QuizDefinition, SliderSpec, TextFieldSpec};
pub use domain::{AnswerUpdate, Industry, QuizAnswers, SubmissionPhase};
pub use estimate::{EstimateEngine, RoiEstimate, SavingsVerb};
pub use gating::{GatingReport, GatingRequirement};
pub use hubspot::HubSpotFormsClient;
pub use router::quiz_router;
pub use service::{QuizFlowService, QuizServiceError, SessionView, REVEAL_CONFIRMATION};
pub use store::{SessionId, SessionRecord, SessionStore, StoreError, SubmissionClaim};
pub use submission::{
    ConfiguredPageContext, ContextOverrides, ContextProvider, FormField, FormSubmission,
    FormsGateway, SubmissionContext, SubmissionError,
};
