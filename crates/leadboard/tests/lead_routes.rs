use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use leadboard::leads::directory::{DirectoryError, LeadDirectory};
use leadboard::leads::router::lead_router;
use leadboard::leads::{Activity, Lead, LeadId, StatusHistoryEntry};
use tower::ServiceExt;

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

fn lead(id: &str, name: &str, phone: Option<&str>, status: &str) -> Lead {
    Lead {
        id: LeadId::from(id),
        full_name: name.to_string(),
        phone: phone.map(str::to_string),
        email: None,
        status: status.to_string(),
        source: "website".to_string(),
    }
}

fn fixture_router() -> axum::Router {
    let directory = FixtureDirectory {
        leads: vec![
            lead("l-1", "Jane Doe", Some("12345"), "New"),
            lead("l-2", "John Smith", Some("99901"), "Contacted"),
            lead("l-3", "Ana Ruiz", None, "Not Interested"),
        ],
        activities: vec![Activity {
            id: "a-1".to_string(),
            lead_id: LeadId::from("l-1"),
            kind: "call".to_string(),
            outcome: "answered".to_string(),
            note: "wants a callback on Monday".to_string(),
        }],
        history: vec![
            StatusHistoryEntry {
                id: "h-1".to_string(),
                lead_id: LeadId::from("l-1"),
                previous_status: "New".to_string(),
                new_status: "Contacted".to_string(),
            },
            StatusHistoryEntry {
                id: "h-2".to_string(),
                lead_id: LeadId::from("l-1"),
                previous_status: "Contacted".to_string(),
                new_status: "In Progress".to_string(),
            },
        ],
    };

    lead_router(Arc::new(directory))
}

async fn get_json(router: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    let value = serde_json::from_slice(&bytes).expect("body is json");
    (status, value)
}

#[tokio::test]
async fn lead_list_returns_every_lead_for_empty_query() {
    let (status, body) = get_json(fixture_router(), "/api/v1/leads").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    assert_eq!(body["matched"], 3);
    assert_eq!(body["leads"].as_array().expect("array").len(), 3);
    assert_eq!(body["slices"].as_array().expect("array").len(), 5);
}

#[tokio::test]
async fn lead_list_filters_by_name_and_phone() {
    let (status, body) = get_json(fixture_router(), "/api/v1/leads?q=jane").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["matched"], 1);
    assert_eq!(body["leads"][0]["full_name"], "Jane Doe");

    let (_, body) = get_json(fixture_router(), "/api/v1/leads?q=999").await;
    assert_eq!(body["matched"], 1);
    assert_eq!(body["leads"][0]["id"], "l-2");

    // Breakdown reflects the whole snapshot, not the filtered subset.
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn status_scope_widens_the_match() {
    let (_, narrow) = get_json(fixture_router(), "/api/v1/leads?q=interested").await;
    assert_eq!(narrow["matched"], 0);

    let (_, wide) = get_json(
        fixture_router(),
        "/api/v1/leads?q=interested&scope=name_phone_and_status",
    )
    .await;
    assert_eq!(wide["matched"], 1);
    assert_eq!(wide["leads"][0]["id"], "l-3");
}

#[tokio::test]
async fn lead_detail_includes_activities_and_ordered_history() {
    let (status, body) = get_json(fixture_router(), "/api/v1/leads/l-1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lead"]["full_name"], "Jane Doe");
    assert_eq!(body["activities"].as_array().expect("array").len(), 1);

    let history = body["status_history"].as_array().expect("array");
    assert_eq!(history.len(), 2);
    // Directory return order is the display order.
    assert_eq!(history[0]["id"], "h-1");
    assert_eq!(history[1]["id"], "h-2");
}

#[tokio::test]
async fn unknown_lead_id_is_a_json_404() {
    let (status, body) = get_json(fixture_router(), "/api/v1/leads/l-404").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("l-404"));
}
