use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{AuditStatus, Verdict, ZoneCategory};

/// Aggregated audit outcome for one space: the ordered per-module verdicts,
/// the worst status across them, and a flattened remediation list that
/// presentation layers can print without walking the verdict tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,
    pub zone: ZoneCategory,
    pub overall: AuditStatus,
    pub verdicts: Vec<Verdict>,
    pub remediation: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl AuditReport {
    pub(crate) fn from_verdicts(zone: ZoneCategory, verdicts: Vec<Verdict>) -> Self {
        let overall = verdicts
            .iter()
            .fold(AuditStatus::Pass, |acc, verdict| acc.worst(verdict.status));

        let remediation = verdicts
            .iter()
            .filter(|verdict| verdict.status != AuditStatus::Pass)
            .flat_map(|verdict| {
                verdict
                    .notes
                    .iter()
                    .map(move |note| format!("[{}] {}", verdict.module.label(), note))
            })
            .collect();

        Self {
            space_id: None,
            zone,
            overall,
            verdicts,
            remediation,
            generated_at: Utc::now(),
        }
    }

    pub fn with_space_id(mut self, space_id: Option<String>) -> Self {
        self.space_id = space_id;
        self
    }

    pub fn is_compliant(&self) -> bool {
        self.overall == AuditStatus::Pass
    }
}
