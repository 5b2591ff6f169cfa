use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::super::domain::ZoneCategory;

/// Immutable threshold set injected into the engine at construction.
///
/// Tests swap in alternate values through this struct instead of patching
/// globals; the defaults reproduce the published evidence-based baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Dry-surface DCOF floor (ANSI A326.3).
    pub base_dcof: f64,
    /// Dry-surface DIN slip rating floor.
    pub base_r_value: u8,
    /// Slope ratio above which a surface is treated as a ramp.
    pub ramp_slope_trigger: f64,
    /// DCOF floor for ramps before the slope-proportional uplift.
    pub ramp_base_dcof: f64,
    /// Multiplier applied to the slope ratio when uplifting ramp DCOF.
    pub ramp_dcof_slope_factor: f64,
    /// Slope ratio at which ramp DIN demand steps from R11 to R12.
    pub ramp_r_step_slope: f64,
    /// DCOF floor for therapy pool surrounds.
    pub pool_dcof: f64,
    pub pool_r_value: u8,
    /// DCOF floor for generic wet-risk zones.
    pub wet_risk_dcof: f64,
    pub wet_risk_r_value: u8,
    /// Zones covered by the wet-risk uplift.
    pub wet_risk_zones: BTreeSet<ZoneCategory>,
    /// Zones that receive the high-injury advisory note on friction failure.
    pub advisory_zones: BTreeSet<ZoneCategory>,
    /// Per-zone illuminance targets in lux; zones not listed use the default.
    pub lux_targets: BTreeMap<ZoneCategory, f64>,
    pub default_lux_target: f64,
    /// Maximum tolerated adjacent-zone illuminance ratio.
    pub max_adaptation_ratio: f64,
    /// Accessible turning-circle minimum in millimeters.
    pub min_turning_diameter_mm: f64,
    /// Slope above which a ramp draws an exertion warning (1:20).
    pub slope_warn_ratio: f64,
    /// Slope above which a ramp fails outright (1:12).
    pub slope_fail_ratio: f64,
    /// Shaded-coverage ratio below which the climate penalty applies.
    pub shade_coverage_floor: f64,
    /// Multiplier applied to the healing score under the climate penalty.
    pub shade_penalty_factor: f64,
    pub grade_s_cutoff: f64,
    pub grade_a_cutoff: f64,
}

impl Default for AuditConfig {
    fn default() -> Self {
        let wet_risk_zones = BTreeSet::from([
            ZoneCategory::Bathroom,
            ZoneCategory::Dining,
            ZoneCategory::OutdoorRamp,
            ZoneCategory::TherapyPool,
        ]);
        // TherapyPool is deliberately absent: whether pool decks carry the
        // injury advisory is a per-deployment decision.
        let advisory_zones = BTreeSet::from([ZoneCategory::Bathroom, ZoneCategory::OutdoorRamp]);
        let lux_targets = BTreeMap::from([(ZoneCategory::Bathroom, 500.0)]);

        Self {
            base_dcof: 0.42,
            base_r_value: 9,
            ramp_slope_trigger: 0.02,
            ramp_base_dcof: 0.60,
            ramp_dcof_slope_factor: 1.5,
            ramp_r_step_slope: 0.05,
            pool_dcof: 0.60,
            pool_r_value: 12,
            wet_risk_dcof: 0.55,
            wet_risk_r_value: 11,
            wet_risk_zones,
            advisory_zones,
            lux_targets,
            default_lux_target: 300.0,
            max_adaptation_ratio: 3.0,
            min_turning_diameter_mm: 1525.0,
            slope_warn_ratio: 1.0 / 20.0,
            slope_fail_ratio: 1.0 / 12.0,
            shade_coverage_floor: 0.4,
            shade_penalty_factor: 0.6,
            grade_s_cutoff: 90.0,
            grade_a_cutoff: 80.0,
        }
    }
}

impl AuditConfig {
    pub fn lux_target(&self, zone: ZoneCategory) -> f64 {
        self.lux_targets
            .get(&zone)
            .copied()
            .unwrap_or(self.default_lux_target)
    }
}
