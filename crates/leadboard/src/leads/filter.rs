use super::domain::Lead;
use serde::Deserialize;

/// Which lead fields a search query is matched against. The list view
/// searches name and phone; the management view also matches the status text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    #[default]
    NameAndPhone,
    NamePhoneAndStatus,
}

/// Case-insensitive substring search over a lead snapshot. Order-preserving,
/// non-mutating; an empty query matches every lead.
pub fn search_leads(leads: &[Lead], query: &str, scope: SearchScope) -> Vec<Lead> {
    if query.is_empty() {
        return leads.to_vec();
    }

    let needle = query.to_lowercase();
    leads
        .iter()
        .filter(|lead| matches(lead, query, &needle, scope))
        .cloned()
        .collect()
}

fn matches(lead: &Lead, raw_query: &str, needle: &str, scope: SearchScope) -> bool {
    if lead.full_name.to_lowercase().contains(needle) {
        return true;
    }

    // Phone numbers are digits; compare them as-is rather than lowercased.
    if lead
        .phone
        .as_deref()
        .is_some_and(|phone| phone.contains(raw_query))
    {
        return true;
    }

    scope == SearchScope::NamePhoneAndStatus && lead.status.to_lowercase().contains(needle)
}
