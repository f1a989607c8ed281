use super::charts::{self, Bar, ChartError, DonutArc, PieArc, TrendPoint};
use super::domain::{Activity, Lead, StatusHistoryEntry};
use super::summary::{StatusBreakdown, StatusSlice};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload for the searchable list views: the (possibly filtered) leads plus
/// the breakdown of the full snapshot for the summary cards.
#[derive(Debug, Clone, Serialize)]
pub struct LeadListView {
    pub total: usize,
    pub matched: usize,
    pub leads: Vec<Lead>,
    pub slices: Vec<StatusSlice>,
}

/// Everything the per-lead detail view renders. Activities and history are
/// kept in directory return order.
#[derive(Debug, Clone, Serialize)]
pub struct LeadDetailView {
    pub lead: Lead,
    pub activities: Vec<Activity>,
    pub status_history: Vec<StatusHistoryEntry>,
}

/// Drawing parameters for the dashboard charts. Defaults match the reference
/// layout: a 70px pie radius, 140px bars, and a 60/170/20 trend grid.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct DashboardParams {
    pub pie_radius: f64,
    pub max_bar_height: f64,
    pub trend_step_x: f64,
    pub trend_baseline_y: f64,
    pub trend_scale_y: f64,
}

impl Default for DashboardParams {
    fn default() -> Self {
        Self {
            pie_radius: 70.0,
            max_bar_height: 140.0,
            trend_step_x: 60.0,
            trend_baseline_y: 170.0,
            trend_scale_y: 20.0,
        }
    }
}

/// One fully derived dashboard render pass: aggregate counts plus the
/// geometry for every chart type, computed fresh from the given snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub generated_at: DateTime<Utc>,
    pub total_leads: usize,
    pub slices: Vec<StatusSlice>,
    pub donut: Vec<DonutArc>,
    pub pie: Vec<PieArc>,
    pub bars: Vec<Bar>,
    pub trend: Vec<TrendPoint>,
}

impl DashboardSnapshot {
    pub fn build(leads: &[Lead], params: DashboardParams) -> Result<Self, ChartError> {
        let breakdown = StatusBreakdown::from_leads(leads);
        let slices = breakdown.slices();

        let donut = charts::donut_arcs(&slices)?;
        let pie = charts::pie_arcs(&slices, params.pie_radius)?;
        let bars = charts::bar_heights(&slices, params.max_bar_height)?;
        let trend = charts::trend_points(
            &slices,
            params.trend_step_x,
            params.trend_baseline_y,
            params.trend_scale_y,
        )?;

        Ok(Self {
            generated_at: Utc::now(),
            total_leads: breakdown.total(),
            slices,
            donut,
            pie,
            bars,
            trend,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::domain::{LeadId, LeadStatus};

    fn lead(id: &str, status: &str) -> Lead {
        Lead {
            id: LeadId::from(id),
            full_name: format!("Lead {id}"),
            phone: None,
            email: None,
            status: status.to_string(),
            source: "website".to_string(),
        }
    }

    #[test]
    fn snapshot_derives_all_chart_families_from_one_breakdown() {
        let leads = vec![lead("1", "new"), lead("2", "contacted"), lead("3", "new")];
        let snapshot =
            DashboardSnapshot::build(&leads, DashboardParams::default()).expect("valid snapshot");

        assert_eq!(snapshot.total_leads, 3);
        assert_eq!(snapshot.slices.len(), 5);
        assert_eq!(snapshot.donut.len(), 5);
        assert_eq!(snapshot.pie.len(), 5);
        assert_eq!(snapshot.bars.len(), 5);
        assert_eq!(snapshot.trend.len(), 5);

        // The same breakdown feeds every chart.
        assert_eq!(snapshot.slices[0].status, LeadStatus::New);
        assert_eq!(snapshot.slices[0].count, 2);
        assert!((snapshot.bars[0].height - 140.0).abs() < 1e-9);
    }

    #[test]
    fn snapshot_of_empty_directory_is_all_zeroes() {
        let snapshot =
            DashboardSnapshot::build(&[], DashboardParams::default()).expect("empty is valid");
        assert_eq!(snapshot.total_leads, 0);
        assert!(snapshot.donut.iter().all(|arc| arc.length == 0.0));
        assert!(snapshot.bars.iter().all(|bar| bar.height == 0.0));
    }

    #[test]
    fn snapshot_rejects_bad_drawing_parameters() {
        let params = DashboardParams {
            pie_radius: -1.0,
            ..DashboardParams::default()
        };
        assert!(DashboardSnapshot::build(&[], params).is_err());
    }
}
