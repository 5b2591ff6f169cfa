use super::super::domain::{AuditModule, AuditStatus, SpaceParameters, Verdict};
use super::config::AuditConfig;

const REF_ILLUMINANCE: &str = "IES RP-28-16";

/// Illuminance audit: absolute lux target for the zone plus, when an adjacent
/// reading exists, the adaptation-ratio bound guarding against transient
/// blindness between zones.
pub(crate) fn audit_illuminance(space: &SpaceParameters, config: &AuditConfig) -> Verdict {
    let target = config.lux_target(space.zone);

    let mut status = AuditStatus::Pass;
    let mut notes = Vec::new();

    if space.lux < target {
        status = AuditStatus::Fail;
        notes.push(format!(
            "illuminance {:.0} lx below target {:.0} lx ({})",
            space.lux, target, REF_ILLUMINANCE
        ));
    }

    if let Some(adjacent) = space.adjacent_lux.filter(|value| *value > 0.0) {
        // +0.01 keeps the ratio finite when either reading is zero.
        let ratio = space.lux.max(adjacent) / (space.lux.min(adjacent) + 0.01);
        if ratio > config.max_adaptation_ratio {
            status = AuditStatus::Fail;
            notes.push(format!(
                "adaptation ratio {:.1}:1 exceeds {:.1}:1 (transient blindness risk between zones)",
                ratio, config.max_adaptation_ratio
            ));
        }
    }

    Verdict::new(AuditModule::Illuminance, status, notes)
}
