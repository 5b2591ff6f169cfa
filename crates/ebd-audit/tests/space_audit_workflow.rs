use ebd_audit::audits::space::{
    AuditModule, AuditStatus, HealingFactors, HealingGrade, SpaceAuditRequest, SpaceAuditService,
    ZoneCategory,
};

fn room_101() -> SpaceAuditRequest {
    SpaceAuditRequest {
        space_id: Some("ROOM-101".to_string()),
        zone: ZoneCategory::Bathroom,
        slope_ratio: 0.0,
        dcof: 0.35,
        din_r_value: 9,
        lux: 150.0,
        adjacent_lux: Some(600.0),
        turning_diameter_mm: 1400.0,
        healing: None,
    }
}

fn ramp_202() -> SpaceAuditRequest {
    SpaceAuditRequest {
        space_id: Some("RAMP-202".to_string()),
        zone: ZoneCategory::OutdoorRamp,
        slope_ratio: 0.05,
        dcof: 0.70,
        din_r_value: 12,
        lux: 350.0,
        adjacent_lux: Some(300.0),
        turning_diameter_mm: 1800.0,
        healing: None,
    }
}

#[test]
fn non_compliant_bathroom_fails_three_modules() {
    let service = SpaceAuditService::default();
    let report = service.audit(room_101()).expect("fixture is well formed");

    assert_eq!(report.overall, AuditStatus::Fail);

    let failing: Vec<_> = report
        .verdicts
        .iter()
        .filter(|verdict| verdict.status == AuditStatus::Fail)
        .map(|verdict| verdict.module)
        .collect();
    assert_eq!(
        failing,
        vec![
            AuditModule::SurfaceFriction,
            AuditModule::Illuminance,
            AuditModule::TurningClearance,
        ]
    );

    // Every remediation line names the module it came from.
    assert!(report
        .remediation
        .iter()
        .all(|note| note.starts_with('[')));
}

#[test]
fn well_designed_ramp_is_fully_compliant() {
    let service = SpaceAuditService::default();
    let report = service.audit(ramp_202()).expect("fixture is well formed");

    assert!(report.is_compliant());
    assert!(report.remediation.is_empty());
    assert!(report
        .verdicts
        .iter()
        .all(|verdict| verdict.status == AuditStatus::Pass));
}

#[test]
fn healing_factors_extend_the_report() {
    let service = SpaceAuditService::default();
    let mut request = ramp_202();
    request.healing = Some(HealingFactors {
        material_type_count: 4,
        natural_view_ratio: 0.35,
        caregiver_distance_m: 8.0,
        shaded_coverage_ratio: 0.5,
    });

    let report = service.audit(request).expect("fixture is well formed");
    assert_eq!(report.verdicts.len(), 5);

    let healing = report
        .verdicts
        .iter()
        .find(|verdict| verdict.module == AuditModule::HealingScore)
        .and_then(|verdict| verdict.healing)
        .expect("healing summary present");
    assert_eq!(healing.score, 100.0);
    assert_eq!(healing.grade, HealingGrade::S);
}

#[test]
fn reports_serialize_for_presentation_layers() {
    let service = SpaceAuditService::default();
    let report = service.audit(room_101()).expect("fixture is well formed");

    let value = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(value["zone"], "bathroom");
    assert_eq!(value["overall"], "fail");
    assert_eq!(value["verdicts"][0]["module"], "surface_friction");
}
