use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::audits::space::domain::{HealingFactors, SpaceParameters, ZoneCategory};
use crate::audits::space::evaluation::{AuditConfig, AuditEngine};
use crate::audits::space::intake::SpaceAuditRequest;
use crate::audits::space::router::audit_router;
use crate::audits::space::service::SpaceAuditService;

pub(super) fn engine() -> AuditEngine {
    AuditEngine::new(AuditConfig::default())
}

pub(super) fn service() -> SpaceAuditService {
    SpaceAuditService::default()
}

pub(super) fn router() -> axum::Router {
    audit_router(Arc::new(service()))
}

pub(super) fn space(zone: ZoneCategory) -> SpaceParameters {
    SpaceParameters {
        zone,
        slope_ratio: 0.0,
        dcof: 0.0,
        din_r_value: 0,
        lux: 0.0,
        adjacent_lux: None,
        turning_diameter_mm: 0.0,
        healing: None,
    }
}

/// The non-compliant bathroom from the survey fixtures (ROOM-101).
pub(super) fn failing_bathroom() -> SpaceParameters {
    SpaceParameters {
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

/// The compliant outdoor ramp from the survey fixtures (RAMP-202).
pub(super) fn compliant_ramp() -> SpaceParameters {
    SpaceParameters {
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

pub(super) fn healing_factors() -> HealingFactors {
    HealingFactors {
        material_type_count: 4,
        natural_view_ratio: 0.35,
        caregiver_distance_m: 8.0,
        shaded_coverage_ratio: 0.5,
    }
}

pub(super) fn failing_bathroom_request() -> SpaceAuditRequest {
    let space = failing_bathroom();
    SpaceAuditRequest {
        space_id: Some("ROOM-101".to_string()),
        zone: space.zone,
        slope_ratio: space.slope_ratio,
        dcof: space.dcof,
        din_r_value: space.din_r_value,
        lux: space.lux,
        adjacent_lux: space.adjacent_lux,
        turning_diameter_mm: space.turning_diameter_mm,
        healing: None,
    }
}

pub(super) fn verdict_for(
    engine: &AuditEngine,
    space: &SpaceParameters,
    module: crate::audits::space::domain::AuditModule,
) -> crate::audits::space::domain::Verdict {
    engine
        .verdicts(space)
        .into_iter()
        .find(|verdict| verdict.module == module)
        .expect("module verdict present")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
