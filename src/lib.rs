//! Burhan Scale - Weighted maturity self-assessment
//!
//! An admin-editable rubric of domains and weighted questions, a pure scoring
//! engine that turns answers into per-domain scores and an overall maturity
//! tier, and an immutable history of completed assessments.

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
