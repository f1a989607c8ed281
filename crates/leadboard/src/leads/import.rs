use super::domain::{Lead, LeadId};
use serde::{Deserialize, Deserializer};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Imports a lead snapshot from a CSV export with the headers
/// `Lead ID, Full Name, Phone, Email, Status, Source`.
pub struct LeadCsvImporter;

impl LeadCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Lead>, LeadImportError> {
        let file = File::open(path.as_ref()).map_err(|source| LeadImportError::Open {
            path: path.as_ref().display().to_string(),
            source,
        })?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Lead>, LeadImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut leads = Vec::new();
        for (index, record) in csv_reader.deserialize::<LeadRow>().enumerate() {
            let row = record?;
            leads.push(row.into_lead(index)?);
        }

        Ok(leads)
    }
}

#[derive(Debug, Deserialize)]
struct LeadRow {
    #[serde(rename = "Lead ID", default, deserialize_with = "empty_string_as_none")]
    id: Option<String>,
    #[serde(rename = "Full Name", default, deserialize_with = "empty_string_as_none")]
    full_name: Option<String>,
    #[serde(rename = "Phone", default, deserialize_with = "empty_string_as_none")]
    phone: Option<String>,
    #[serde(rename = "Email", default, deserialize_with = "empty_string_as_none")]
    email: Option<String>,
    #[serde(rename = "Status", default)]
    status: String,
    #[serde(rename = "Source", default)]
    source: String,
}

impl LeadRow {
    fn into_lead(self, index: usize) -> Result<Lead, LeadImportError> {
        let row = index + 2; // header line plus one-based numbering
        let id = self.id.ok_or(LeadImportError::MissingField {
            field: "Lead ID",
            row,
        })?;
        let full_name = self.full_name.ok_or(LeadImportError::MissingField {
            field: "Full Name",
            row,
        })?;

        Ok(Lead {
            id: LeadId(id),
            full_name,
            phone: self.phone,
            email: self.email,
            status: self.status,
            source: self.source,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[derive(Debug, thiserror::Error)]
pub enum LeadImportError {
    #[error("unable to open lead export '{path}': {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },
    #[error("malformed lead export: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row} is missing required field '{field}'")]
    MissingField { field: &'static str, row: usize },
}
