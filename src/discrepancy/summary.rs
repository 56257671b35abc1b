use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::types::{FieldDiscrepancy, Importance, Severity};

/// Aggregate view of a discrepancy list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscrepancySummary {
    pub total: usize,
    pub by_severity: BTreeMap<Severity, usize>,
    pub by_importance: BTreeMap<Importance, usize>,
    /// Every entry with critical severity, in input order.
    pub critical: Vec<FieldDiscrepancy>,
}

impl DiscrepancySummary {
    pub fn has_critical(&self) -> bool {
        !self.critical.is_empty()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.by_severity.get(&severity).copied().unwrap_or(0)
    }
}

pub fn summarize_discrepancies(discrepancies: &[FieldDiscrepancy]) -> DiscrepancySummary {
    let mut summary = DiscrepancySummary {
        total: discrepancies.len(),
        ..Default::default()
    };

    for discrepancy in discrepancies {
        *summary.by_severity.entry(discrepancy.severity).or_insert(0) += 1;
        *summary
            .by_importance
            .entry(discrepancy.importance)
            .or_insert(0) += 1;
        if discrepancy.is_critical() {
            summary.critical.push(discrepancy.clone());
        }
    }

    summary
}
