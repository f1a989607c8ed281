pub mod charts;
pub mod directory;
pub mod domain;
pub mod filter;
pub mod import;
pub mod router;
pub mod views;

mod summary;

pub use domain::{Activity, Lead, LeadId, LeadStatus, StatusHistoryEntry};
pub use summary::{StatusBreakdown, StatusSlice};
