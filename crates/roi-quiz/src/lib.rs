//! Core library for the ROI questionnaire service.
//!
//! The `workflows::quiz` module carries the domain: a flat answer record with
//! keyed updates, a pure savings estimator, a gated submission flow, and a
//! forms gateway that forwards accepted submissions to a CRM endpoint. The
//! remaining modules provide the service plumbing (configuration, telemetry,
//! and the application error boundary).

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
