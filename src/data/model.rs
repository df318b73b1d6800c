use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Outcome – discrete launch result
// ---------------------------------------------------------------------------

/// Launch outcome, carried in the CSV as the `class` column (`0` or `1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Decode the CSV `class` value. Anything other than 0 or 1 is rejected.
    pub fn from_class(class: u8) -> Option<Outcome> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    /// The numeric value used on the scatter plot's outcome axis.
    pub fn as_class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Failure => write!(f, "Failure"),
            Outcome::Success => write!(f, "Success"),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single launch (one CSV row).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub site: String,
    /// Payload mass in kg, non-negative (validated at load).
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version: String,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed indices. Immutable after load.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All launches (rows), in file order.
    pub records: Vec<LaunchRecord>,
    /// Distinct launch sites in first-seen order (drives the dropdown).
    pub sites: Vec<String>,
    /// Distinct booster versions, sorted (drives the colour map).
    pub booster_versions: Vec<String>,
    /// Smallest payload mass observed, 0.0 for an empty dataset.
    pub payload_min: f64,
    /// Largest payload mass observed, 0.0 for an empty dataset.
    pub payload_max: f64,
}

impl LaunchDataset {
    /// Build the site/booster indices and payload extent from loaded rows.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = Vec::new();
        let mut boosters: BTreeSet<String> = BTreeSet::new();
        let mut payload_min = f64::INFINITY;
        let mut payload_max = f64::NEG_INFINITY;

        for rec in &records {
            if !sites.iter().any(|s| s == &rec.site) {
                sites.push(rec.site.clone());
            }
            boosters.insert(rec.booster_version.clone());
            payload_min = payload_min.min(rec.payload_mass_kg);
            payload_max = payload_max.max(rec.payload_mass_kg);
        }

        if records.is_empty() {
            payload_min = 0.0;
            payload_max = 0.0;
        }

        LaunchDataset {
            records,
            sites,
            booster_versions: boosters.into_iter().collect(),
            payload_min,
            payload_max,
        }
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
