use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

// ---------------------------------------------------------------------------
// CSV schema
// ---------------------------------------------------------------------------

pub const COL_SITE: &str = "Launch Site";
pub const COL_PAYLOAD: &str = "Payload Mass (kg)";
pub const COL_CLASS: &str = "class";
pub const COL_BOOSTER: &str = "Booster Version";

const REQUIRED_COLUMNS: [&str; 4] = [COL_SITE, COL_PAYLOAD, COL_CLASS, COL_BOOSTER];

/// Schema violations that make a CSV unusable as a launch dataset.
/// All of these are fatal at startup.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("CSV missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("CSV row {row}: class is {value}, expected 0 or 1")]
    BadClass { row: usize, value: u8 },
    #[error("CSV row {row}: payload mass {value} is not a non-negative number")]
    BadPayload { row: usize, value: f64 },
    #[error("CSV row {row}: empty launch site")]
    EmptySite { row: usize },
}

/// One CSV row as it appears on disk. Columns beyond the required four
/// (flight number, orbit, ...) are ignored.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Launch Site")]
    site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: u8,
    #[serde(rename = "Booster Version")]
    booster_version: String,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch dataset from a CSV file.
///
/// Expected layout: header row containing at least `Launch Site`,
/// `Payload Mass (kg)`, `class` (0 or 1) and `Booster Version`.
pub fn load_csv(path: &Path) -> Result<LaunchDataset> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;

    let headers = reader.headers().context("reading CSV headers")?.clone();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(SchemaError::MissingColumn(col).into());
        }
    }

    let mut records = Vec::new();

    for (row_no, result) in reader.deserialize::<RawRow>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;

        if raw.site.trim().is_empty() {
            return Err(SchemaError::EmptySite { row: row_no }.into());
        }
        if !raw.payload_mass_kg.is_finite() || raw.payload_mass_kg < 0.0 {
            return Err(SchemaError::BadPayload {
                row: row_no,
                value: raw.payload_mass_kg,
            }
            .into());
        }
        let outcome = Outcome::from_class(raw.class).ok_or(SchemaError::BadClass {
            row: row_no,
            value: raw.class,
        })?;

        records.push(LaunchRecord {
            site: raw.site,
            payload_mass_kg: raw.payload_mass_kg,
            outcome,
            booster_version: raw.booster_version,
        });
    }

    if records.is_empty() {
        bail!("CSV {} contains no launch records", path.display());
    }

    Ok(LaunchDataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_well_formed_csv() {
        let file = write_csv(
            "Launch Site,Payload Mass (kg),class,Booster Version\n\
             CCAFS LC-40,500,0,F9 v1.0 B0003\n\
             CCAFS LC-40,2000,1,F9 FT B1021\n\
             KSC LC-39A,3000,1,F9 B5 B1049\n",
        );
        let ds = load_csv(file.path()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.sites, vec!["CCAFS LC-40", "KSC LC-39A"]);
        assert_eq!(ds.records[0].outcome, Outcome::Failure);
        assert_eq!(ds.records[1].outcome, Outcome::Success);
        assert_eq!(ds.payload_min, 500.0);
        assert_eq!(ds.payload_max, 3000.0);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let file = write_csv(
            "Flight Number,Launch Site,Payload Mass (kg),class,Booster Version,Orbit\n\
             1,CCAFS LC-40,500,1,F9 v1.0 B0003,LEO\n",
        );
        let ds = load_csv(file.path()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].booster_version, "F9 v1.0 B0003");
    }

    #[test]
    fn missing_column_is_fatal() {
        let file = write_csv(
            "Launch Site,Payload Mass (kg),Booster Version\n\
             CCAFS LC-40,500,F9 v1.0 B0003\n",
        );
        let err = load_csv(file.path()).unwrap_err();
        assert!(err.to_string().contains("class"), "{err}");
    }

    #[test]
    fn bad_class_value_is_fatal() {
        let file = write_csv(
            "Launch Site,Payload Mass (kg),class,Booster Version\n\
             CCAFS LC-40,500,2,F9 v1.0 B0003\n",
        );
        assert!(load_csv(file.path()).is_err());
    }

    #[test]
    fn negative_payload_is_fatal() {
        let file = write_csv(
            "Launch Site,Payload Mass (kg),class,Booster Version\n\
             CCAFS LC-40,-1,1,F9 v1.0 B0003\n",
        );
        assert!(load_csv(file.path()).is_err());
    }

    #[test]
    fn missing_file_is_fatal() {
        assert!(load_csv(Path::new("/definitely/not/here.csv")).is_err());
    }
}
