mod config;
mod friction;
mod healing;
mod illuminance;
mod requirement;
mod spatial;

pub use config::AuditConfig;
pub use requirement::{resolve_friction_requirement, FrictionRequirement};

use super::domain::{SpaceParameters, Verdict};
use super::report::AuditReport;

/// Stateless evaluator binding the threshold configuration.
///
/// `evaluate` is a pure function of the parameter record: identical inputs
/// always produce identical verdicts, and no module reads another's output.
pub struct AuditEngine {
    config: AuditConfig,
}

impl AuditEngine {
    pub fn new(config: AuditConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Run every applicable rule module over the space and bundle the
    /// verdicts. The healing module only runs when its factors were supplied.
    pub fn evaluate(&self, space: &SpaceParameters) -> AuditReport {
        let verdicts = self.verdicts(space);
        AuditReport::from_verdicts(space.zone, verdicts)
    }

    pub(crate) fn verdicts(&self, space: &SpaceParameters) -> Vec<Verdict> {
        let mut verdicts = vec![
            friction::audit_surface_friction(space, &self.config),
            illuminance::audit_illuminance(space, &self.config),
            spatial::audit_turning_clearance(space, &self.config),
            spatial::audit_ramp_slope(space, &self.config),
        ];

        if let Some(factors) = &space.healing {
            verdicts.push(healing::audit_healing_score(factors, &self.config));
        }

        verdicts
    }
}
