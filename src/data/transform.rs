use std::fmt;

use super::model::{LaunchDataset, Outcome};

// ---------------------------------------------------------------------------
// Chart inputs: site selection and payload range
// ---------------------------------------------------------------------------

/// The payload slider is bounded to this interval regardless of the data.
pub const PAYLOAD_BOUNDS: (f64, f64) = (0.0, 10_000.0);
/// Slider step in kg.
pub const PAYLOAD_STEP: f64 = 1_000.0;

/// Fixed mapping for the scatter plot's outcome axis.
pub const OUTCOME_AXIS_LABELS: [(f64, &str); 2] = [(0.0, "Fail"), (1.0, "Success")];

/// Current dropdown state: all sites, or one specific site offered by the
/// dropdown (i.e. present in the dataset when the options were derived).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    AllSites,
    Site(String),
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::AllSites => write!(f, "All Sites"),
            SiteSelection::Site(s) => write!(f, "{s}"),
        }
    }
}

/// Closed payload-mass interval `[low, high]` in kg.
///
/// The UI keeps `low <= high` inside [`PAYLOAD_BOUNDS`]; a constructed
/// inverted range is tolerated and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        PayloadRange { low, high }
    }

    /// Inclusive membership test.
    pub fn contains(&self, mass_kg: f64) -> bool {
        self.low <= mass_kg && mass_kg <= self.high
    }
}

// ---------------------------------------------------------------------------
// Chart outputs
// ---------------------------------------------------------------------------

/// Pie chart specification: a title and one (label, count) slice per group.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSpec {
    pub title: String,
    pub slices: Vec<(String, u64)>,
}

impl PieSpec {
    /// Sum of all slice counts.
    pub fn total(&self) -> u64 {
        self.slices.iter().map(|(_, n)| n).sum()
    }
}

/// Scatter chart specification: a title, the indices of the matching
/// records (dataset order preserved), and the fixed outcome-axis labels.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSpec {
    pub title: String,
    pub indices: Vec<usize>,
    pub axis_labels: [(f64, &'static str); 2],
}

// ---------------------------------------------------------------------------
// Pure transforms
// ---------------------------------------------------------------------------

/// Count-or-insert into an ordered group list. Keeps first-seen order so the
/// output is deterministic without pre-listing the groups.
fn bump(groups: &mut Vec<(String, u64)>, label: &str) {
    match groups.iter_mut().find(|(l, _)| l == label) {
        Some((_, n)) => *n += 1,
        None => groups.push((label.to_string(), 1)),
    }
}

/// Derive the success-distribution pie for the given site selection.
///
/// * `AllSites`: successful launches grouped by site. Sites with zero
///   successes are omitted, not zero-filled.
/// * A specific site: that site's launches partitioned by the outcome values
///   actually present; an outcome with no launches yields no slice.
pub fn aggregate(dataset: &LaunchDataset, selection: &SiteSelection) -> PieSpec {
    let mut slices: Vec<(String, u64)> = Vec::new();

    match selection {
        SiteSelection::AllSites => {
            for rec in &dataset.records {
                if rec.outcome == Outcome::Success {
                    bump(&mut slices, &rec.site);
                }
            }
            PieSpec {
                title: "Total Successful Launches by Site".to_string(),
                slices,
            }
        }
        SiteSelection::Site(site) => {
            for rec in &dataset.records {
                if &rec.site == site {
                    bump(&mut slices, &rec.outcome.to_string());
                }
            }
            PieSpec {
                title: format!("Success vs. Failure for {site}"),
                slices,
            }
        }
    }
}

/// Select the records shown on the payload-vs-outcome scatter plot.
///
/// Keeps records with `low <= payload <= high` (both ends inclusive) and,
/// for a specific site, `site == selection`. The filter is stable: indices
/// come out in dataset order. An inverted range matches nothing.
pub fn filter_for_scatter(
    dataset: &LaunchDataset,
    selection: &SiteSelection,
    range: PayloadRange,
) -> ScatterSpec {
    let indices: Vec<usize> = dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            if !range.contains(rec.payload_mass_kg) {
                return false;
            }
            match selection {
                SiteSelection::AllSites => true,
                SiteSelection::Site(site) => &rec.site == site,
            }
        })
        .map(|(i, _)| i)
        .collect();

    let title = match selection {
        SiteSelection::AllSites => "Payload vs. Outcome for all Sites".to_string(),
        SiteSelection::Site(site) => format!("Payload vs. Outcome for {site}"),
    };

    ScatterSpec {
        title,
        indices,
        axis_labels: OUTCOME_AXIS_LABELS,
    }
}
