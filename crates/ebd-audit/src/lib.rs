//! Evidence-based design (EBD) audit engine for care-environment spaces.
//!
//! The core of the crate is `audits::space`: a set of stateless rule
//! evaluators that compare measured space parameters (flooring friction,
//! illuminance, clearances, psychosocial factors) against evidence-based
//! thresholds and aggregate the verdicts into a single report. Everything
//! else is wiring: configuration, telemetry, and an HTTP boundary that
//! presentation layers consume.

pub mod audits;
pub mod config;
pub mod error;
pub mod telemetry;
