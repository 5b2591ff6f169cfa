use clap::Args;
use ebd_audit::audits::space::{
    HealingFactors, SpaceAuditRequest, SpaceAuditService, ZoneCategory,
};
use ebd_audit::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct AuditArgs {
    /// Identifier echoed back in the report
    #[arg(long)]
    space_id: Option<String>,
    /// Zone category: corridor, bathroom, outdoor_ramp, therapy_pool, dining, reading_area
    #[arg(long, value_parser = parse_zone)]
    zone: ZoneCategory,
    /// Slope ratio (rise/run)
    #[arg(long, default_value_t = 0.0)]
    slope_ratio: f64,
    /// Measured wet dynamic coefficient of friction
    #[arg(long, default_value_t = 0.0)]
    dcof: f64,
    /// Measured DIN slip rating (9-13, 0 when unmeasured)
    #[arg(long, default_value_t = 0)]
    r_value: u8,
    /// Measured illuminance in lux
    #[arg(long, default_value_t = 0.0)]
    lux: f64,
    /// Adjacent-zone illuminance in lux, for the adaptation check
    #[arg(long)]
    adjacent_lux: Option<f64>,
    /// Wheelchair turning diameter in millimeters
    #[arg(long, default_value_t = 0.0)]
    turning_diameter_mm: f64,
    /// Distinct surface material count (enables the healing-score module)
    #[arg(long)]
    material_types: Option<u32>,
    /// Natural-view ratio, 0.0-1.0
    #[arg(long, default_value_t = 0.0)]
    view_ratio: f64,
    /// Caregiver-to-activity distance in meters
    #[arg(long, default_value_t = 0.0)]
    caregiver_distance_m: f64,
    /// Shaded-area coverage ratio, 0.0-1.0
    #[arg(long, default_value_t = 0.0)]
    shade_ratio: f64,
}

impl AuditArgs {
    fn into_request(self) -> SpaceAuditRequest {
        let healing = self.material_types.map(|count| HealingFactors {
            material_type_count: count,
            natural_view_ratio: self.view_ratio,
            caregiver_distance_m: self.caregiver_distance_m,
            shaded_coverage_ratio: self.shade_ratio,
        });

        SpaceAuditRequest {
            space_id: self.space_id,
            zone: self.zone,
            slope_ratio: self.slope_ratio,
            dcof: self.dcof,
            din_r_value: self.r_value,
            lux: self.lux,
            adjacent_lux: self.adjacent_lux,
            turning_diameter_mm: self.turning_diameter_mm,
            healing,
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// Path to a CSV export of space measurements
    #[arg(long)]
    file: std::path::PathBuf,
}

fn parse_zone(value: &str) -> Result<ZoneCategory, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "corridor" => Ok(ZoneCategory::Corridor),
        "bathroom" => Ok(ZoneCategory::Bathroom),
        "outdoor_ramp" => Ok(ZoneCategory::OutdoorRamp),
        "therapy_pool" => Ok(ZoneCategory::TherapyPool),
        "dining" => Ok(ZoneCategory::Dining),
        "reading_area" => Ok(ZoneCategory::ReadingArea),
        other => Err(format!("unknown zone category '{other}'")),
    }
}

/// Audit a single space described on the command line and print the report.
pub(crate) fn run_audit(args: AuditArgs) -> Result<(), AppError> {
    let service = SpaceAuditService::default();
    let report = service.audit(args.into_request())?;
    println!(
        "{}",
        serde_json::to_string_pretty(&report).expect("report serializes")
    );
    Ok(())
}

/// Audit every row of a measurement CSV and print a compliance summary.
pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let service = SpaceAuditService::default();
    let outcome = ebd_audit::audits::space::batch::audit_csv_file(&args.file, &service)?;

    for report in &outcome.reports {
        println!(
            "{}",
            serde_json::to_string_pretty(report).expect("report serializes")
        );
    }
    println!(
        "-- {} space(s) audited, {} non-compliant",
        outcome.reports.len(),
        outcome.non_compliant()
    );
    Ok(())
}

fn demo_requests() -> Vec<SpaceAuditRequest> {
    vec![
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
        },
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
        },
        SpaceAuditRequest {
            space_id: Some("LOUNGE-301".to_string()),
            zone: ZoneCategory::ReadingArea,
            slope_ratio: 0.0,
            dcof: 0.50,
            din_r_value: 10,
            lux: 400.0,
            adjacent_lux: Some(350.0),
            turning_diameter_mm: 1600.0,
            healing: Some(HealingFactors {
                material_type_count: 4,
                natural_view_ratio: 0.35,
                caregiver_distance_m: 8.0,
                shaded_coverage_ratio: 0.3,
            }),
        },
    ]
}

/// Audit the built-in survey fixtures and print one report per space.
pub(crate) fn run_demo(_args: DemoArgs) -> Result<(), AppError> {
    let service = SpaceAuditService::default();

    for request in demo_requests() {
        let report = service.audit(request)?;
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("report serializes")
        );
        println!(
            "-- {} [{}]: {} ({} remediation item(s))\n",
            report.space_id.as_deref().unwrap_or("unnamed"),
            report.zone.label(),
            report.overall.label(),
            report.remediation.len()
        );
    }

    Ok(())
}
