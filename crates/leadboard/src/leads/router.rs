use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::directory::{DirectoryError, LeadDirectory};
use super::domain::LeadId;
use super::filter::{search_leads, SearchScope};
use super::summary::StatusBreakdown;
use super::views::{LeadDetailView, LeadListView};

/// Router builder exposing the read endpoints the lead views consume.
pub fn lead_router<D>(directory: Arc<D>) -> Router
where
    D: LeadDirectory + 'static,
{
    Router::new()
        .route("/api/v1/leads", get(list_handler::<D>))
        .route("/api/v1/leads/:lead_id", get(detail_handler::<D>))
        .with_state(directory)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LeadListParams {
    #[serde(default)]
    q: String,
    #[serde(default)]
    scope: SearchScope,
}

pub(crate) async fn list_handler<D>(
    State(directory): State<Arc<D>>,
    Query(params): Query<LeadListParams>,
) -> Response
where
    D: LeadDirectory + 'static,
{
    let leads = match directory.fetch_leads() {
        Ok(leads) => leads,
        Err(error) => return directory_failure(error),
    };

    let slices = StatusBreakdown::from_leads(&leads).slices();
    let matched = search_leads(&leads, &params.q, params.scope);

    let view = LeadListView {
        total: leads.len(),
        matched: matched.len(),
        leads: matched,
        slices,
    };
    (StatusCode::OK, axum::Json(view)).into_response()
}

pub(crate) async fn detail_handler<D>(
    State(directory): State<Arc<D>>,
    Path(lead_id): Path<String>,
) -> Response
where
    D: LeadDirectory + 'static,
{
    let id = LeadId(lead_id);
    let lead = match directory.fetch_lead_by_id(&id) {
        Ok(Some(lead)) => lead,
        Ok(None) => {
            let payload = json!({ "error": format!("lead {id} not found") });
            return (StatusCode::NOT_FOUND, axum::Json(payload)).into_response();
        }
        Err(error) => return directory_failure(error),
    };

    let activities = match directory.fetch_activities(&id) {
        Ok(activities) => activities,
        Err(error) => return directory_failure(error),
    };
    let status_history = match directory.fetch_status_history(&id) {
        Ok(history) => history,
        Err(error) => return directory_failure(error),
    };

    let view = LeadDetailView {
        lead,
        activities,
        status_history,
    };
    (StatusCode::OK, axum::Json(view)).into_response()
}

fn directory_failure(error: DirectoryError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::domain::{Activity, Lead, StatusHistoryEntry};

    struct FixtureDirectory {
        leads: Vec<Lead>,
        activities: Vec<Activity>,
        history: Vec<StatusHistoryEntry>,
    }

    impl LeadDirectory for FixtureDirectory {
        fn fetch_leads(&self) -> Result<Vec<Lead>, DirectoryError> {
            Ok(self.leads.clone())
        }

        fn fetch_lead_by_id(&self, id: &LeadId) -> Result<Option<Lead>, DirectoryError> {
            Ok(self.leads.iter().find(|lead| &lead.id == id).cloned())
        }

        fn fetch_activities(&self, lead_id: &LeadId) -> Result<Vec<Activity>, DirectoryError> {
            Ok(self
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
            Ok(self
                .history
                .iter()
                .filter(|entry| &entry.lead_id == lead_id)
                .cloned()
                .collect())
        }
    }

    struct BrokenDirectory;

    impl LeadDirectory for BrokenDirectory {
        fn fetch_leads(&self) -> Result<Vec<Lead>, DirectoryError> {
            Err(DirectoryError::Unavailable("connection refused".to_string()))
        }

        fn fetch_lead_by_id(&self, _id: &LeadId) -> Result<Option<Lead>, DirectoryError> {
            Err(DirectoryError::Unavailable("connection refused".to_string()))
        }

        fn fetch_activities(&self, _lead_id: &LeadId) -> Result<Vec<Activity>, DirectoryError> {
            Err(DirectoryError::Unavailable("connection refused".to_string()))
        }

        fn fetch_status_history(
            &self,
            _lead_id: &LeadId,
        ) -> Result<Vec<StatusHistoryEntry>, DirectoryError> {
            Err(DirectoryError::Unavailable("connection refused".to_string()))
        }
    }

    fn fixture() -> FixtureDirectory {
        let jane = Lead {
            id: LeadId::from("l-1"),
            full_name: "Jane Doe".to_string(),
            phone: Some("12345".to_string()),
            email: Some("jane@example.com".to_string()),
            status: "New".to_string(),
            source: "Website".to_string(),
        };
        let john = Lead {
            id: LeadId::from("l-2"),
            full_name: "John Smith".to_string(),
            phone: None,
            email: None,
            status: "Contacted".to_string(),
            source: "Referral".to_string(),
        };

        FixtureDirectory {
            leads: vec![jane, john],
            activities: vec![Activity {
                id: "a-1".to_string(),
                lead_id: LeadId::from("l-1"),
                kind: "call".to_string(),
                outcome: "answered".to_string(),
                note: "asked for a test drive".to_string(),
            }],
            history: vec![StatusHistoryEntry {
                id: "h-1".to_string(),
                lead_id: LeadId::from("l-1"),
                previous_status: "New".to_string(),
                new_status: "Contacted".to_string(),
            }],
        }
    }

    #[tokio::test]
    async fn list_handler_returns_filtered_leads_and_full_breakdown() {
        let directory = Arc::new(fixture());
        let params = LeadListParams {
            q: "jane".to_string(),
            scope: SearchScope::NameAndPhone,
        };

        let response = list_handler(State(directory), Query(params)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn detail_handler_reports_missing_leads_as_not_found() {
        let directory = Arc::new(fixture());
        let response =
            detail_handler(State(directory), Path("l-does-not-exist".to_string())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn detail_handler_returns_lead_with_activities_and_history() {
        let directory = Arc::new(fixture());
        let response = detail_handler(State(directory), Path("l-1".to_string())).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn directory_outage_maps_to_bad_gateway() {
        let directory = Arc::new(BrokenDirectory);
        let response = list_handler(State(directory), Query(LeadListParams::default())).await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
