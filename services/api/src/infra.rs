use leadboard::leads::directory::{DirectoryError, LeadDirectory};
use leadboard::leads::{Activity, Lead, LeadId, StatusHistoryEntry};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Directory backed by in-process vectors. Insertion order is preserved,
/// which makes it the reference implementation for the "history in return
/// order" contract.
#[derive(Default)]
pub(crate) struct InMemoryLeadDirectory {
    inner: Mutex<DirectoryData>,
}

#[derive(Default)]
struct DirectoryData {
    leads: Vec<Lead>,
    activities: Vec<Activity>,
    history: Vec<StatusHistoryEntry>,
}

impl InMemoryLeadDirectory {
    pub(crate) fn from_leads(leads: Vec<Lead>) -> Self {
        Self {
            inner: Mutex::new(DirectoryData {
                leads,
                ..DirectoryData::default()
            }),
        }
    }

    pub(crate) fn with_data(
        leads: Vec<Lead>,
        activities: Vec<Activity>,
        history: Vec<StatusHistoryEntry>,
    ) -> Self {
        Self {
            inner: Mutex::new(DirectoryData {
                leads,
                activities,
                history,
            }),
        }
    }
}

impl LeadDirectory for InMemoryLeadDirectory {
    fn fetch_leads(&self) -> Result<Vec<Lead>, DirectoryError> {
        let guard = self.inner.lock().expect("directory mutex poisoned");
        Ok(guard.leads.clone())
    }

    fn fetch_lead_by_id(&self, id: &LeadId) -> Result<Option<Lead>, DirectoryError> {
        let guard = self.inner.lock().expect("directory mutex poisoned");
        Ok(guard.leads.iter().find(|lead| &lead.id == id).cloned())
    }

    fn fetch_activities(&self, lead_id: &LeadId) -> Result<Vec<Activity>, DirectoryError> {
        let guard = self.inner.lock().expect("directory mutex poisoned");
        Ok(guard
            .activities
            .iter()
            .filter(|activity| &activity.lead_id == lead_id)
            .cloned()
            .collect())
    }

    fn fetch_status_history(
        &self,
        lead_id: &LeadId,
    ) -> Result<Vec<StatusHistoryEntry>, DirectoryError> {
        let guard = self.inner.lock().expect("directory mutex poisoned");
        Ok(guard
            .history
            .iter()
            .filter(|entry| &entry.lead_id == lead_id)
            .cloned()
            .collect())
    }
}

fn lead(id: &str, name: &str, phone: &str, email: &str, status: &str, source: &str) -> Lead {
    Lead {
        id: LeadId::from(id),
        full_name: name.to_string(),
        phone: (!phone.is_empty()).then(|| phone.to_string()),
        email: (!email.is_empty()).then(|| email.to_string()),
        status: status.to_string(),
        source: source.to_string(),
    }
}

/// Showroom-flavored seed snapshot used when no CSV export is configured.
pub(crate) fn sample_leads() -> Vec<Lead> {
    vec![
        lead(
            "l-1001",
            "Jane Doe",
            "555-0101",
            "jane.doe@example.com",
            "New",
            "Website",
        ),
        lead(
            "l-1002",
            "John Smith",
            "555-0102",
            "",
            "Contacted",
            "Referral",
        ),
        lead(
            "l-1003",
            "Ana Ruiz",
            "",
            "ana.ruiz@example.com",
            "In Progress",
            "Walk-in",
        ),
        lead(
            "l-1004",
            "Wei Chen",
            "555-0104",
            "wei.chen@example.com",
            "Not Interested",
            "Campaign",
        ),
        lead("l-1005", "Sam Okafor", "555-0105", "", "new", "Website"),
        lead(
            "l-1006",
            "Priya Nair",
            "555-0106",
            "priya.nair@example.com",
            "Follow up later",
            "Trade show",
        ),
    ]
}

pub(crate) fn sample_directory() -> InMemoryLeadDirectory {
    let activities = vec![
        Activity {
            id: "a-1".to_string(),
            lead_id: LeadId::from("l-1002"),
            kind: "call".to_string(),
            outcome: "answered".to_string(),
            note: "Asked for pricing on the hatchback trim".to_string(),
        },
        Activity {
            id: "a-2".to_string(),
            lead_id: LeadId::from("l-1003"),
            kind: "visit".to_string(),
            outcome: "test drive booked".to_string(),
            note: "Prefers a weekend slot".to_string(),
        },
    ];

    let history = vec![
        StatusHistoryEntry {
            id: "h-1".to_string(),
            lead_id: LeadId::from("l-1002"),
            previous_status: "New".to_string(),
            new_status: "Contacted".to_string(),
        },
        StatusHistoryEntry {
            id: "h-2".to_string(),
            lead_id: LeadId::from("l-1003"),
            previous_status: "New".to_string(),
            new_status: "Contacted".to_string(),
        },
        StatusHistoryEntry {
            id: "h-3".to_string(),
            lead_id: LeadId::from("l-1003"),
            previous_status: "Contacted".to_string(),
            new_status: "In Progress".to_string(),
        },
    ];

    InMemoryLeadDirectory::with_data(sample_leads(), activities, history)
}
