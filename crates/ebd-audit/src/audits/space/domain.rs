use serde::{Deserialize, Serialize};

/// Functional classification of a space, driving which thresholds apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneCategory {
    Corridor,
    Bathroom,
    OutdoorRamp,
    TherapyPool,
    Dining,
    ReadingArea,
}

impl ZoneCategory {
    pub const fn label(self) -> &'static str {
        match self {
            ZoneCategory::Corridor => "corridor",
            ZoneCategory::Bathroom => "bathroom",
            ZoneCategory::OutdoorRamp => "outdoor_ramp",
            ZoneCategory::TherapyPool => "therapy_pool",
            ZoneCategory::Dining => "dining",
            ZoneCategory::ReadingArea => "reading_area",
        }
    }
}

/// Psychosocial inputs consumed only by the healing-score module.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealingFactors {
    pub material_type_count: u32,
    pub natural_view_ratio: f64,
    pub caregiver_distance_m: f64,
    pub shaded_coverage_ratio: f64,
}

/// Validated, read-only measurement record for one space.
///
/// Constructed once per audit request by the intake guard and handed to the
/// engine by reference; evaluators never mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceParameters {
    pub zone: ZoneCategory,
    pub slope_ratio: f64,
    pub dcof: f64,
    pub din_r_value: u8,
    pub lux: f64,
    pub adjacent_lux: Option<f64>,
    pub turning_diameter_mm: f64,
    pub healing: Option<HealingFactors>,
}

/// Identifies which rule module produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditModule {
    SurfaceFriction,
    Illuminance,
    TurningClearance,
    RampSlope,
    HealingScore,
}

impl AuditModule {
    pub const fn label(self) -> &'static str {
        match self {
            AuditModule::SurfaceFriction => "surface_friction",
            AuditModule::Illuminance => "illuminance",
            AuditModule::TurningClearance => "turning_clearance",
            AuditModule::RampSlope => "ramp_slope",
            AuditModule::HealingScore => "healing_score",
        }
    }
}

/// Tri-state compliance outcome for a single rule module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditStatus {
    Pass,
    Warning,
    Fail,
}

impl AuditStatus {
    pub const fn label(self) -> &'static str {
        match self {
            AuditStatus::Pass => "pass",
            AuditStatus::Warning => "warning",
            AuditStatus::Fail => "fail",
        }
    }

    /// Worse of two statuses, used when folding verdicts into a report.
    pub fn worst(self, other: Self) -> Self {
        self.max(other)
    }
}

/// Letter grade for the psychosocial healing score. The scale deliberately
/// stops at B: the reference rubric defines no lower grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealingGrade {
    S,
    A,
    B,
}

impl HealingGrade {
    pub const fn label(self) -> &'static str {
        match self {
            HealingGrade::S => "S",
            HealingGrade::A => "A",
            HealingGrade::B => "B",
        }
    }
}

/// Composite healing-score result attached to the healing verdict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealingSummary {
    pub score: f64,
    pub grade: HealingGrade,
}

/// Outcome of one rule module for one space.
///
/// Every diagnostic note embeds the measured value, the violated threshold,
/// and the standard citation; a bare status is never emitted on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub module: AuditModule,
    pub status: AuditStatus,
    pub notes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub healing: Option<HealingSummary>,
}

impl Verdict {
    pub(crate) fn new(module: AuditModule, status: AuditStatus, notes: Vec<String>) -> Self {
        Self {
            module,
            status,
            notes,
            healing: None,
        }
    }
}
