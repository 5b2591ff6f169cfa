use crate::audits::space::domain::ZoneCategory;
use crate::audits::space::evaluation::{resolve_friction_requirement, AuditConfig};

#[test]
fn corridor_on_flat_floor_uses_dry_baseline() {
    let config = AuditConfig::default();
    let requirement = resolve_friction_requirement(ZoneCategory::Corridor, 0.0, &config);
    assert_eq!(requirement.min_dcof, 0.42);
    assert_eq!(requirement.min_r_value, 9);
    assert_eq!(requirement.reference, "ANSI A326.3");
}

#[test]
fn slope_above_trigger_uses_ramp_uplift() {
    let config = AuditConfig::default();
    let requirement = resolve_friction_requirement(ZoneCategory::Corridor, 0.04, &config);
    assert!((requirement.min_dcof - (0.60 + 0.04 * 1.5)).abs() < 1e-9);
    assert_eq!(requirement.min_r_value, 11);
    assert_eq!(requirement.reference, "EBD Physics + DIN 51130");
}

#[test]
fn steep_ramp_steps_up_to_r12() {
    let config = AuditConfig::default();
    let requirement = resolve_friction_requirement(ZoneCategory::Corridor, 0.06, &config);
    assert_eq!(requirement.min_r_value, 12);
}

#[test]
fn therapy_pool_outranks_generic_wet_risk() {
    let config = AuditConfig::default();
    let requirement = resolve_friction_requirement(ZoneCategory::TherapyPool, 0.0, &config);
    assert_eq!(requirement.min_dcof, 0.60);
    assert_eq!(requirement.min_r_value, 12);
}

#[test]
fn wet_risk_zone_uses_geriatric_uplift() {
    let config = AuditConfig::default();
    for zone in [
        ZoneCategory::Bathroom,
        ZoneCategory::Dining,
        ZoneCategory::OutdoorRamp,
    ] {
        let requirement = resolve_friction_requirement(zone, 0.0, &config);
        assert_eq!(requirement.min_dcof, 0.55, "zone {:?}", zone);
        assert_eq!(requirement.min_r_value, 11, "zone {:?}", zone);
        assert_eq!(requirement.reference, "EBD Geriatric Safety Uplift");
    }
}

#[test]
fn therapy_pool_on_ramp_uses_ramp_thresholds() {
    // Precedence: the ramp condition wins over the pool override.
    let config = AuditConfig::default();
    let requirement = resolve_friction_requirement(ZoneCategory::TherapyPool, 0.03, &config);
    assert_eq!(requirement.reference, "EBD Physics + DIN 51130");
    assert!((requirement.min_dcof - (0.60 + 0.03 * 1.5)).abs() < 1e-9);
}

#[test]
fn resolution_is_deterministic() {
    let config = AuditConfig::default();
    let first = resolve_friction_requirement(ZoneCategory::Bathroom, 0.01, &config);
    let second = resolve_friction_requirement(ZoneCategory::Bathroom, 0.01, &config);
    assert_eq!(first, second);
}
