use serde::{Deserialize, Serialize};

use super::domain::{HealingFactors, SpaceParameters, ZoneCategory};

/// Inbound measurement payload for one space.
///
/// Numeric fields default to zero when absent; a missing adjacent-lux reading
/// skips the adaptation check and missing healing factors skip the healing
/// module. Absence is a valid signal, never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceAuditRequest {
    #[serde(default)]
    pub space_id: Option<String>,
    pub zone: ZoneCategory,
    #[serde(default)]
    pub slope_ratio: f64,
    #[serde(default)]
    pub dcof: f64,
    #[serde(default)]
    pub din_r_value: u8,
    #[serde(default)]
    pub lux: f64,
    #[serde(default)]
    pub adjacent_lux: Option<f64>,
    #[serde(default)]
    pub turning_diameter_mm: f64,
    #[serde(default)]
    pub healing: Option<HealingFactors>,
}

/// Validation errors raised by the intake guard.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeError {
    #[error("invalid input: {field} is a physical measurement and cannot be negative (got {value})")]
    NegativeMeasurement { field: &'static str, value: f64 },
    #[error("invalid input: {field} must lie within [{min}, {max}] (got {value})")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },
    #[error("invalid input: DIN slip rating must be one of R9-R13, or 0 when unmeasured (got {0})")]
    InvalidDinRating(u8),
    #[error("invalid input: material_type_count must be at least 1 when healing factors are supplied")]
    EmptyMaterialPalette,
}

/// Guard converting raw requests into validated, read-only parameter records.
///
/// The engine itself never validates; all range policing happens here, at the
/// boundary, mirroring how measured values arrive from survey forms.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    pub fn parameters_from_request(
        &self,
        request: SpaceAuditRequest,
    ) -> Result<SpaceParameters, IntakeError> {
        require_non_negative("slope_ratio", request.slope_ratio)?;
        require_non_negative("dcof", request.dcof)?;
        require_non_negative("lux", request.lux)?;
        require_non_negative("turning_diameter_mm", request.turning_diameter_mm)?;
        if let Some(adjacent) = request.adjacent_lux {
            require_non_negative("adjacent_lux", adjacent)?;
        }

        require_within("dcof", request.dcof, 0.0, 1.0)?;

        if !matches!(request.din_r_value, 0 | 9..=13) {
            return Err(IntakeError::InvalidDinRating(request.din_r_value));
        }

        if let Some(factors) = &request.healing {
            require_non_negative("caregiver_distance_m", factors.caregiver_distance_m)?;
            require_within("natural_view_ratio", factors.natural_view_ratio, 0.0, 1.0)?;
            require_within(
                "shaded_coverage_ratio",
                factors.shaded_coverage_ratio,
                0.0,
                1.0,
            )?;
            if factors.material_type_count == 0 {
                return Err(IntakeError::EmptyMaterialPalette);
            }
        }

        Ok(SpaceParameters {
            zone: request.zone,
            slope_ratio: request.slope_ratio,
            dcof: request.dcof,
            din_r_value: request.din_r_value,
            lux: request.lux,
            adjacent_lux: request.adjacent_lux,
            turning_diameter_mm: request.turning_diameter_mm,
            healing: request.healing,
        })
    }
}

fn require_non_negative(field: &'static str, value: f64) -> Result<(), IntakeError> {
    if value < 0.0 {
        return Err(IntakeError::NegativeMeasurement { field, value });
    }
    Ok(())
}

fn require_within(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), IntakeError> {
    if value < min || value > max {
        return Err(IntakeError::OutOfRange {
            field,
            min,
            max,
            value,
        });
    }
    Ok(())
}
