use crate::infra::sample_leads;
use clap::Args;
use leadboard::error::AppError;
use leadboard::leads::charts::bar_heights;
use leadboard::leads::filter::{search_leads, SearchScope};
use leadboard::leads::import::LeadCsvImporter;
use leadboard::leads::{Lead, StatusBreakdown};
use std::path::PathBuf;

/// Width of the widest text bar in the terminal output.
const BAR_COLUMNS: f64 = 40.0;

#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    /// Lead CSV export to report on (sample snapshot when omitted)
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Restrict the report to leads matching this search query
    #[arg(long)]
    pub(crate) query: Option<String>,
}

pub(crate) fn run_leads_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs { csv, query } = args;

    let (leads, source) = match csv {
        Some(path) => {
            let leads = LeadCsvImporter::from_path(&path)?;
            (leads, format!("CSV export {}", path.display()))
        }
        None => (sample_leads(), "sample snapshot".to_string()),
    };

    let leads = match query.as_deref() {
        Some(q) => search_leads(&leads, q, SearchScope::NamePhoneAndStatus),
        None => leads,
    };

    render_leads_report(&leads, &source, query.as_deref());
    Ok(())
}

fn render_leads_report(leads: &[Lead], source: &str, query: Option<&str>) {
    println!("Lead pipeline report");
    println!("Data source: {source}");
    if let Some(q) = query {
        println!("Query: '{q}' ({} matching lead(s))", leads.len());
    }

    let breakdown = StatusBreakdown::from_leads(leads);
    println!("\nTotal leads: {}", breakdown.total());

    let slices = breakdown.slices();
    // bar_heights never fails for a positive width and well-formed slices.
    let bars = bar_heights(&slices, BAR_COLUMNS).unwrap_or_default();

    println!("\nStatus breakdown");
    for (slice, bar) in slices.iter().zip(&bars) {
        let columns = bar.height.round() as usize;
        println!(
            "- {:<15} {:>3} ({:>5.1}%) {}",
            slice.label,
            slice.count,
            slice.share * 100.0,
            "#".repeat(columns)
        );
    }

    if breakdown.is_empty() {
        println!("\nNo leads in this snapshot.");
    }
}
