use tracing::debug;

use super::evaluation::{AuditConfig, AuditEngine};
use super::intake::{IntakeError, IntakeGuard, SpaceAuditRequest};
use super::report::AuditReport;

/// Service composing the intake guard and the rule engine.
///
/// Deliberately stateless: every call validates, evaluates, and returns a
/// fresh report. Nothing is persisted between invocations.
pub struct SpaceAuditService {
    guard: IntakeGuard,
    engine: AuditEngine,
}

impl SpaceAuditService {
    pub fn new(config: AuditConfig) -> Self {
        Self {
            guard: IntakeGuard,
            engine: AuditEngine::new(config),
        }
    }

    pub fn engine(&self) -> &AuditEngine {
        &self.engine
    }

    /// Validate one request and run the full audit over it.
    pub fn audit(&self, request: SpaceAuditRequest) -> Result<AuditReport, AuditServiceError> {
        let space_id = request.space_id.clone();
        let parameters = self.guard.parameters_from_request(request)?;
        let report = self.engine.evaluate(&parameters).with_space_id(space_id);
        debug!(
            zone = report.zone.label(),
            overall = report.overall.label(),
            findings = report.remediation.len(),
            "space audit evaluated"
        );
        Ok(report)
    }
}

impl Default for SpaceAuditService {
    fn default() -> Self {
        Self::new(AuditConfig::default())
    }
}

/// Error raised by the audit service.
#[derive(Debug, thiserror::Error)]
pub enum AuditServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
}
