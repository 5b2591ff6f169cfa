use super::super::domain::{AuditModule, AuditStatus, SpaceParameters, Verdict};
use super::config::AuditConfig;

const REF_TURNING: &str = "ADA 2010";

/// Turning-circle audit against the accessible-turning minimum.
///
/// A diameter of zero means the clearance was never measured and the check is
/// skipped; a measured sub-minimum value fails.
pub(crate) fn audit_turning_clearance(space: &SpaceParameters, config: &AuditConfig) -> Verdict {
    let mut status = AuditStatus::Pass;
    let mut notes = Vec::new();

    let diameter = space.turning_diameter_mm;
    if diameter > 0.0 && diameter < config.min_turning_diameter_mm {
        status = AuditStatus::Fail;
        notes.push(format!(
            "turning diameter {:.0} mm below {:.0} mm ({}; powered-wheelchair collision risk)",
            diameter, config.min_turning_diameter_mm, REF_TURNING
        ));
    }

    Verdict::new(AuditModule::TurningClearance, status, notes)
}

/// Ramp-slope audit. Boundary rule: closed lower bound, open upper bound.
/// A slope of exactly 1:20 passes; exactly 1:12 warns; anything steeper fails.
pub(crate) fn audit_ramp_slope(space: &SpaceParameters, config: &AuditConfig) -> Verdict {
    let slope = space.slope_ratio;

    let mut status = AuditStatus::Pass;
    let mut notes = Vec::new();

    if slope > config.slope_fail_ratio {
        status = AuditStatus::Fail;
        notes.push(format!(
            "slope ratio {:.3} exceeds 1:12 ({:.3}) accessible maximum",
            slope, config.slope_fail_ratio
        ));
    } else if slope > config.slope_warn_ratio {
        status = AuditStatus::Warning;
        notes.push(format!(
            "slope ratio {:.3} within the 1:12 limit but above 1:20 ({:.3}); \
             exertion cost is high, consider flattening",
            slope, config.slope_warn_ratio
        ));
    }

    Verdict::new(AuditModule::RampSlope, status, notes)
}
