use super::super::domain::{
    AuditModule, AuditStatus, HealingFactors, HealingGrade, HealingSummary, Verdict,
};
use super::config::AuditConfig;

const SENSORY_WEIGHT: f64 = 0.3;
const NATURE_WEIGHT: f64 = 0.4;
const SOCIAL_WEIGHT: f64 = 0.3;

/// Psychosocial healing score: three weighted sub-scores and a flat climate
/// penalty when shade coverage falls short. Emits one note per sub-score and
/// a penalty note when triggered; the score is rounded to one decimal.
pub(crate) fn audit_healing_score(factors: &HealingFactors, config: &AuditConfig) -> Verdict {
    let mut notes = Vec::new();

    // Both extremes are penalized: too few materials reads as sensory
    // deprivation, too many as cognitive overload.
    let sensory = match factors.material_type_count {
        3..=5 => 100.0,
        0..=2 => 60.0,
        _ => 70.0,
    };
    notes.push(format!(
        "sensory variety: {} material types scores {:.0} (target band 3-5)",
        factors.material_type_count, sensory
    ));

    let nature = ((factors.natural_view_ratio / 0.3) * 60.0 + 40.0).min(100.0);
    notes.push(format!(
        "biophilic exposure: natural-view ratio {:.2} scores {:.0} (saturates at 0.30)",
        factors.natural_view_ratio, nature
    ));

    let social = if (6.0..=15.0).contains(&factors.caregiver_distance_m) {
        100.0
    } else {
        50.0
    };
    notes.push(format!(
        "social distance: caregiver at {:.1} m scores {:.0} (supportive band 6-15 m)",
        factors.caregiver_distance_m, social
    ));

    let base = SENSORY_WEIGHT * sensory + NATURE_WEIGHT * nature + SOCIAL_WEIGHT * social;

    let final_score = if factors.shaded_coverage_ratio < config.shade_coverage_floor {
        let penalized = base * config.shade_penalty_factor;
        notes.push(format!(
            "climate penalty: shaded coverage {:.2} below {:.2}, score reduced {:.1} -> {:.1}",
            factors.shaded_coverage_ratio, config.shade_coverage_floor, base, penalized
        ));
        penalized
    } else {
        base
    };

    // Grade off the exact value; rounding is presentation only, so a 89.96
    // reports as 90.0 but still grades A.
    let grade = if final_score >= config.grade_s_cutoff {
        HealingGrade::S
    } else if final_score >= config.grade_a_cutoff {
        HealingGrade::A
    } else {
        HealingGrade::B
    };
    let score = (final_score * 10.0).round() / 10.0;

    // The scale has no failing grade; a B verdict surfaces as an advisory.
    let status = match grade {
        HealingGrade::S | HealingGrade::A => AuditStatus::Pass,
        HealingGrade::B => AuditStatus::Warning,
    };

    let mut verdict = Verdict::new(AuditModule::HealingScore, status, notes);
    verdict.healing = Some(HealingSummary { score, grade });
    verdict
}
