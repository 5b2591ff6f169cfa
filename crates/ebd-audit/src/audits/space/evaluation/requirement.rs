use serde::{Deserialize, Serialize};

use super::super::domain::ZoneCategory;
use super::config::AuditConfig;

pub(crate) const REF_BASE: &str = "ANSI A326.3";
pub(crate) const REF_RAMP: &str = "EBD Physics + DIN 51130";
pub(crate) const REF_WET_RISK: &str = "EBD Geriatric Safety Uplift";

/// Slip-resistance demand resolved for one (zone, slope) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrictionRequirement {
    pub min_dcof: f64,
    pub min_r_value: u8,
    pub reference: &'static str,
}

/// Resolve the friction requirement for a zone and slope.
///
/// Exactly one branch applies. The precedence is fixed: a ramp condition
/// outranks the therapy-pool override, which outranks the generic wet-risk
/// uplift, which outranks the dry baseline. TherapyPool sits in the wet-risk
/// set as well, so the dedicated branch must come first or the pool demand
/// would silently relax to the generic uplift.
pub fn resolve_friction_requirement(
    zone: ZoneCategory,
    slope_ratio: f64,
    config: &AuditConfig,
) -> FrictionRequirement {
    if slope_ratio > config.ramp_slope_trigger {
        let min_r_value = if slope_ratio < config.ramp_r_step_slope {
            11
        } else {
            12
        };
        FrictionRequirement {
            min_dcof: config.ramp_base_dcof + slope_ratio * config.ramp_dcof_slope_factor,
            min_r_value,
            reference: REF_RAMP,
        }
    } else if zone == ZoneCategory::TherapyPool {
        FrictionRequirement {
            min_dcof: config.pool_dcof,
            min_r_value: config.pool_r_value,
            reference: REF_WET_RISK,
        }
    } else if config.wet_risk_zones.contains(&zone) {
        FrictionRequirement {
            min_dcof: config.wet_risk_dcof,
            min_r_value: config.wet_risk_r_value,
            reference: REF_WET_RISK,
        }
    } else {
        FrictionRequirement {
            min_dcof: config.base_dcof,
            min_r_value: config.base_r_value,
            reference: REF_BASE,
        }
    }
}
