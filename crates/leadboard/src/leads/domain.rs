use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier assigned to a lead by the upstream data store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadId(pub String);

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LeadId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A sales prospect as fetched from the directory. Treated as an immutable
/// snapshot; the analytics core never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: LeadId,
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub status: String,
    pub source: String,
}

impl Lead {
    /// Canonical pipeline category for this lead's free-text status.
    pub fn status_category(&self) -> LeadStatus {
        LeadStatus::classify(&self.status)
    }
}

/// A touchpoint logged against a lead (call, email, visit, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub lead_id: LeadId,
    pub kind: String,
    pub outcome: String,
    pub note: String,
}

/// One status transition. The upstream store records no timestamp; entries
/// are meaningful only in the order the directory returns them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusHistoryEntry {
    pub id: String,
    pub lead_id: LeadId,
    pub previous_status: String,
    pub new_status: String,
}

/// The fixed pipeline stages a lead can occupy. Any status text that does not
/// match a known stage classifies as `Unknown` rather than being dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    New,
    Contacted,
    InProgress,
    NotInterested,
    Unknown,
}

impl LeadStatus {
    /// Display order used by every chart and summary, so a category always
    /// occupies the same relative position across renders.
    pub const fn ordered() -> [Self; 5] {
        [
            Self::New,
            Self::Contacted,
            Self::InProgress,
            Self::NotInterested,
            Self::Unknown,
        ]
    }

    /// Total classification: every string maps to exactly one category.
    /// Matching is case-insensitive but otherwise exact.
    pub fn classify(status: &str) -> Self {
        match status.to_ascii_lowercase().as_str() {
            "new" => Self::New,
            "contacted" => Self::Contacted,
            "in progress" => Self::InProgress,
            "not interested" => Self::NotInterested,
            _ => Self::Unknown,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Contacted => "Contacted",
            Self::InProgress => "In Progress",
            Self::NotInterested => "Not Interested",
            Self::Unknown => "Unknown",
        }
    }

    /// Single source of truth for the status palette. Charts and badges must
    /// all read from here so the colors cannot drift between views.
    pub const fn color(self) -> &'static str {
        match self {
            Self::New => "#3b82f6",
            Self::Contacted => "#22c55e",
            Self::InProgress => "#eab308",
            Self::NotInterested => "#ef4444",
            Self::Unknown => "#9ca3af",
        }
    }
}
