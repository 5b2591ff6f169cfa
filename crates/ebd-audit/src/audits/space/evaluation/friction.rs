use super::super::domain::{AuditModule, AuditStatus, SpaceParameters, Verdict};
use super::config::AuditConfig;
use super::requirement::resolve_friction_requirement;

const HIGH_RISK_ADVISORY: &str =
    "high-risk zone: JAMA/Lancet cohort data place hip-fracture likelihood from falls here \
     far above baseline";

/// Surface-friction audit: measured DCOF and DIN rating against the resolved
/// requirement. The two checks are independent; either shortfall fails the
/// module and both may produce notes.
pub(crate) fn audit_surface_friction(space: &SpaceParameters, config: &AuditConfig) -> Verdict {
    let requirement = resolve_friction_requirement(space.zone, space.slope_ratio, config);

    let mut status = AuditStatus::Pass;
    let mut notes = Vec::new();

    if space.dcof < requirement.min_dcof {
        status = AuditStatus::Fail;
        notes.push(format!(
            "DCOF {:.2} below required {:.2} ({})",
            space.dcof, requirement.min_dcof, requirement.reference
        ));
    }

    if space.din_r_value < requirement.min_r_value {
        status = AuditStatus::Fail;
        notes.push(format!(
            "slip rating R{} below required R{} ({})",
            space.din_r_value, requirement.min_r_value, requirement.reference
        ));
    }

    // Additive context on failure, not a separate check.
    if status == AuditStatus::Fail && config.advisory_zones.contains(&space.zone) {
        notes.push(HIGH_RISK_ADVISORY.to_string());
    }

    Verdict::new(AuditModule::SurfaceFriction, status, notes)
}
