use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use tracing::{debug, warn};

use crate::config::AnalysisConfig;
use crate::error::IntelError;
use crate::models::{PostFeatures, ProfileRecord, ProfileRow, Prospect};

const NAME_COLUMN: &str = "Name";
const TITLE_COLUMN: &str = "Title";

const PROFILE_COLUMNS: [&str; 10] = [
    "name",
    "title",
    "company",
    "role_function",
    "seniority",
    "company_type",
    "geo",
    "score",
    "score_reason",
    "excluded",
];
const PROSPECT_COLUMNS: [&str; 8] = [
    "name",
    "title",
    "company",
    "role_function",
    "seniority",
    "score",
    "outreach_priority",
    "score_reason",
];

#[derive(Debug, Default)]
pub struct ProfileInput {
    pub rows: Vec<ProfileRow>,
    pub skipped: Vec<IntelError>,
}

fn open(path: &Path) -> Result<File, IntelError> {
    File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => IntelError::MissingInput {
            path: path.to_path_buf(),
        },
        _ => IntelError::Io(err),
    })
}

pub fn read_profiles(path: &Path) -> Result<ProfileInput, IntelError> {
    let input = read_profile_rows(open(path)?)?;
    debug!(
        path = %path.display(),
        rows = input.rows.len(),
        skipped = input.skipped.len(),
        "read audience export"
    );
    Ok(input)
}

fn column_index(headers: &csv::StringRecord, column: &'static str) -> Result<usize, IntelError> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(column))
        .ok_or(IntelError::MissingColumn { column })
}

/// Requires `Name` and `Title` headers. Rows with a blank title are skipped
/// and returned in [`ProfileInput::skipped`]; titles are kept as read.
pub fn read_profile_rows<R: Read>(reader: R) -> Result<ProfileInput, IntelError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);
    let headers = reader.headers()?.clone();
    let name_idx = column_index(&headers, NAME_COLUMN)?;
    let title_idx = column_index(&headers, TITLE_COLUMN)?;

    let mut input = ProfileInput::default();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) if matches!(err.kind(), csv::ErrorKind::Io(_)) => return Err(err.into()),
            Err(err) => {
                let line = err.position().map(|p| p.line()).unwrap_or_default();
                warn!(line, error = %err, "skipping unreadable row");
                input.skipped.push(IntelError::MalformedRow {
                    line,
                    reason: err.to_string(),
                });
                continue;
            }
        };
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        match record.get(title_idx) {
            Some(title) if !title.trim().is_empty() => input.rows.push(ProfileRow {
                name: record.get(name_idx).unwrap_or_default().trim().to_string(),
                title: title.to_string(),
            }),
            _ => {
                warn!(line, "skipping row without a title");
                input.skipped.push(IntelError::MalformedRow {
                    line,
                    reason: "missing title".to_string(),
                });
            }
        }
    }

    Ok(input)
}

fn write_csv<T: serde::Serialize>(
    path: &Path,
    columns: &[&str],
    rows: &[T],
) -> Result<(), IntelError> {
    let mut writer = csv::Writer::from_path(path)?;
    if rows.is_empty() {
        writer.write_record(columns)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_profiles(path: &Path, records: &[ProfileRecord]) -> Result<(), IntelError> {
    write_csv(path, &PROFILE_COLUMNS, records)
}

pub fn write_prospects(path: &Path, prospects: &[Prospect]) -> Result<(), IntelError> {
    write_csv(path, &PROSPECT_COLUMNS, prospects)
}

pub fn write_post_features(path: &Path, features: &PostFeatures) -> Result<(), IntelError> {
    fs::write(path, serde_json::to_string_pretty(features)?)?;
    Ok(())
}

pub fn read_post_text(path: &Path) -> Result<String, IntelError> {
    let mut text = String::new();
    open(path)?.read_to_string(&mut text)?;
    Ok(text.trim().to_string())
}

pub fn load_config(path: &Path) -> Result<AnalysisConfig, IntelError> {
    Ok(serde_json::from_reader(io::BufReader::new(open(path)?))?)
}

pub fn write_config(path: &Path, config: &AnalysisConfig) -> Result<(), IntelError> {
    fs::write(path, serde_json::to_string_pretty(config)?)?;
    Ok(())
}
