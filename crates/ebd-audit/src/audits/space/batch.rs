use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::ZoneCategory;
use super::intake::{IntakeError, SpaceAuditRequest};
use super::report::AuditReport;
use super::service::SpaceAuditService;

/// Errors raised while importing a measurement CSV.
#[derive(Debug, thiserror::Error)]
pub enum BatchImportError {
    #[error("failed to read measurement export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid measurement CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: {source}")]
    Intake {
        row: usize,
        #[source]
        source: IntakeError,
    },
}

/// Result of a batch run: one report per CSV row, in file order.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub reports: Vec<AuditReport>,
}

impl BatchOutcome {
    pub fn non_compliant(&self) -> usize {
        self.reports
            .iter()
            .filter(|report| !report.is_compliant())
            .count()
    }
}

/// Audit every space in a CSV export. Blank optional cells take the
/// documented defaults (zero / skip), matching single-request intake.
pub fn audit_csv<R: Read>(
    reader: R,
    service: &SpaceAuditService,
) -> Result<BatchOutcome, BatchImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut reports = Vec::new();
    for (index, record) in csv_reader.deserialize::<MeasurementRow>().enumerate() {
        let row = record?;
        let request = row.into_request();
        let report = service
            .audit(request)
            .map_err(|error| match error {
                super::service::AuditServiceError::Intake(source) => BatchImportError::Intake {
                    // header is row 1 in the source file
                    row: index + 2,
                    source,
                },
            })?;
        reports.push(report);
    }

    Ok(BatchOutcome { reports })
}

pub fn audit_csv_file(
    path: &Path,
    service: &SpaceAuditService,
) -> Result<BatchOutcome, BatchImportError> {
    let file = std::fs::File::open(path)?;
    audit_csv(file, service)
}

#[derive(Debug, Deserialize)]
struct MeasurementRow {
    #[serde(default)]
    space_id: Option<String>,
    zone: ZoneCategory,
    #[serde(default, deserialize_with = "empty_as_none")]
    slope_ratio: Option<f64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    dcof: Option<f64>,
    #[serde(default, deserialize_with = "empty_as_none_u8")]
    r_value: Option<u8>,
    #[serde(default, deserialize_with = "empty_as_none")]
    lux: Option<f64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    adjacent_lux: Option<f64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    turning_diameter_mm: Option<f64>,
}

impl MeasurementRow {
    fn into_request(self) -> SpaceAuditRequest {
        SpaceAuditRequest {
            space_id: self.space_id.filter(|value| !value.is_empty()),
            zone: self.zone,
            slope_ratio: self.slope_ratio.unwrap_or(0.0),
            dcof: self.dcof.unwrap_or(0.0),
            din_r_value: self.r_value.unwrap_or(0),
            lux: self.lux.unwrap_or(0.0),
            adjacent_lux: self.adjacent_lux,
            turning_diameter_mm: self.turning_diameter_mm.unwrap_or(0.0),
            healing: None,
        }
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<f64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

// Ratings must parse as whole non-negative integers; a lossy float cast here
// would let a negative or fractional cell slip past the DIN validation that
// the JSON intake path enforces.
fn empty_as_none_u8<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<u8>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
