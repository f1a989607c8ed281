use super::domain::{Activity, Lead, LeadId, StatusHistoryEntry};

/// Read-only access to the hosted lead store. The analytics core never
/// fetches for itself; it is handed snapshots pulled through this seam, which
/// also lets the router and tests run against in-memory fakes.
///
/// Status-history entries carry no timestamp; the order this trait returns
/// them in is the display order.
pub trait LeadDirectory: Send + Sync {
    fn fetch_leads(&self) -> Result<Vec<Lead>, DirectoryError>;
    fn fetch_lead_by_id(&self, id: &LeadId) -> Result<Option<Lead>, DirectoryError>;
    fn fetch_activities(&self, lead_id: &LeadId) -> Result<Vec<Activity>, DirectoryError>;
    fn fetch_status_history(
        &self,
        lead_id: &LeadId,
    ) -> Result<Vec<StatusHistoryEntry>, DirectoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("lead directory unavailable: {0}")]
    Unavailable(String),
}
