use super::domain::{Lead, LeadStatus};
use serde::Serialize;
use std::collections::HashMap;

/// Per-category tally over a lead snapshot. Recomputed from scratch on every
/// call; there is no incremental state to fall out of sync with a fetch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StatusBreakdown {
    counts: HashMap<LeadStatus, usize>,
    total: usize,
}

impl StatusBreakdown {
    pub fn from_leads(leads: &[Lead]) -> Self {
        let mut counts = HashMap::new();
        for lead in leads {
            *counts.entry(lead.status_category()).or_insert(0) += 1;
        }

        Self {
            counts,
            total: leads.len(),
        }
    }

    /// Count for a category; categories with no leads report zero rather
    /// than being absent.
    pub fn count(&self, status: LeadStatus) -> usize {
        self.counts.get(&status).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Slices in the fixed category order. Every category is present, and
    /// shares are zero (not NaN) when the snapshot is empty.
    pub fn slices(&self) -> Vec<StatusSlice> {
        LeadStatus::ordered()
            .into_iter()
            .map(|status| {
                let count = self.count(status);
                let share = if self.total == 0 {
                    0.0
                } else {
                    count as f64 / self.total as f64
                };

                StatusSlice {
                    status,
                    label: status.label(),
                    count,
                    share,
                    color: status.color(),
                }
            })
            .collect()
    }
}

/// One category's portion of the snapshot, ready for chart geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusSlice {
    pub status: LeadStatus,
    pub label: &'static str,
    pub count: usize,
    pub share: f64,
    pub color: &'static str,
}
