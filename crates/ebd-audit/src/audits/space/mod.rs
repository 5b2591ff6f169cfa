//! Space audit pipeline: intake validation, rule evaluation, and reporting.
//!
//! A caller builds a [`SpaceAuditRequest`], the intake guard turns it into
//! validated [`SpaceParameters`], and the [`AuditEngine`] runs each rule
//! evaluator over the record, bundling the per-module verdicts into an
//! [`AuditReport`]. The evaluators are pure functions of their inputs and the
//! injected [`AuditConfig`]; no state survives an evaluation.

pub mod batch;
pub mod domain;
pub(crate) mod evaluation;
pub mod intake;
pub mod report;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use batch::{BatchImportError, BatchOutcome};
pub use domain::{
    AuditModule, AuditStatus, HealingFactors, HealingGrade, HealingSummary, SpaceParameters,
    Verdict, ZoneCategory,
};
pub use evaluation::{resolve_friction_requirement, AuditConfig, AuditEngine, FrictionRequirement};
pub use intake::{IntakeError, IntakeGuard, SpaceAuditRequest};
pub use report::AuditReport;
pub use router::audit_router;
pub use service::{AuditServiceError, SpaceAuditService};
