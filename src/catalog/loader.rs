//! Parses the flat course file into a fresh `Catalog`.
//!
//! Format: one record per line, `IDENTIFIER,TITLE[,PREREQ]*`, no header and no
//! quoting. The parser is forgiving: blank lines and rows with
//! fewer than two fields are dropped without surfacing an error. The only
//! failures are I/O failures opening or reading the file.

use crate::catalog::identity::CourseId;
use crate::catalog::model::{Catalog, CourseRecord};
use crate::split_fields;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// Identifier and title are mandatory; anything shorter is a malformed row.
const MIN_FIELDS: usize = 2;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Row counters gathered while parsing; only used for diagnostics.
pub struct LoadStats {
    pub rows: usize,
    pub blank: usize,
    pub skipped: usize,
    pub replaced: usize,
}

/// Open `path` and parse it into a new catalog.
///
/// Opening happens before anything is parsed, so a missing file never yields a
/// partial catalog.
pub fn load_catalog_from_path(path: &Path) -> Result<Catalog> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let (catalog, stats) = parse_catalog(BufReader::new(file))
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        courses = catalog.len(),
        rows = stats.rows,
        blank = stats.blank,
        skipped = stats.skipped,
        replaced = stats.replaced,
        "parsed course file"
    );
    Ok(catalog)
}

/// Parse course rows from any buffered reader.
pub fn parse_catalog<R: BufRead>(reader: R) -> Result<(Catalog, LoadStats)> {
    let mut catalog = Catalog::new();
    let mut stats = LoadStats::default();

    for (idx, line) in reader.split(b'\n').enumerate() {
        let bytes = line?;
        let decoded = String::from_utf8_lossy(&bytes);
        let text = decoded.strip_suffix('\r').unwrap_or(&*decoded);
        stats.rows += 1;

        if text.trim().is_empty() {
            stats.blank += 1;
            continue;
        }

        let Some(record) = parse_record(text) else {
            tracing::trace!(line = idx + 1, "skipping row with fewer than {MIN_FIELDS} fields");
            stats.skipped += 1;
            continue;
        };

        if catalog.insert(record).is_some() {
            stats.replaced += 1;
        }
    }

    Ok((catalog, stats))
}

/// Turn one non-blank line into a record, or `None` when it is malformed.
pub fn parse_record(line: &str) -> Option<CourseRecord> {
    let fields = split_fields(line);
    if fields.len() < MIN_FIELDS {
        return None;
    }

    let id = CourseId::normalize(fields[0]);
    let title = fields[1].to_string();
    let prerequisites = fields[MIN_FIELDS..]
        .iter()
        .filter(|field| !field.is_empty())
        .map(|field| CourseId::normalize(field))
        .collect();

    Some(CourseRecord::new(id, title, prerequisites))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    fn parse(input: &str) -> (Catalog, LoadStats) {
        parse_catalog(Cursor::new(input.as_bytes().to_vec())).expect("parse")
    }

    fn prereqs(record: &CourseRecord) -> Vec<&str> {
        record.prerequisites.iter().map(CourseId::as_str).collect()
    }

    #[test]
    fn parses_sample_rows() {
        let (catalog, stats) = parse("CSCI101,Intro to Programming\nCSCI200,Data Structures,CSCI101\n");
        assert_eq!(catalog.len(), 2);
        assert_eq!(stats.rows, 2);
        let ds = catalog.lookup("CSCI200").expect("CSCI200 loaded");
        assert_eq!(ds.title, "Data Structures");
        assert_eq!(prereqs(ds), vec!["CSCI101"]);
        assert!(catalog.lookup("CSCI101").unwrap().prerequisites.is_empty());
    }

    #[test]
    fn trims_fields_and_normalizes_ids_but_not_titles() {
        let (catalog, _) = parse("  csci300 ,  Intro to Algorithms  , csci200 , math201 \n");
        let record = catalog.lookup("CSCI300").expect("record");
        assert_eq!(record.id.as_str(), "CSCI300");
        assert_eq!(record.title, "Intro to Algorithms");
        assert_eq!(prereqs(record), vec!["CSCI200", "MATH201"]);
    }

    #[test]
    fn skips_blank_and_single_field_rows() {
        let (catalog, stats) = parse("\n   \nCSCI300\nCSCI101,Intro\n\t\n");
        assert_eq!(catalog.len(), 1);
        assert!(catalog.lookup("CSCI300").is_none());
        assert_eq!(stats.blank, 3);
        assert_eq!(stats.skipped, 1);
    }

    #[test]
    fn trailing_delimiter_does_not_make_a_title() {
        let (catalog, stats) = parse("CSCI300,\nCSCI400,Capstone,\n");
        assert!(catalog.lookup("CSCI300").is_none());
        assert_eq!(stats.skipped, 1);
        assert!(catalog.lookup("CSCI400").unwrap().prerequisites.is_empty());
    }

    #[test]
    fn empty_prerequisite_fields_are_dropped() {
        let (catalog, _) = parse("CSCI350,Operating Systems,,CSCI300, ,CSCI200\n");
        let record = catalog.lookup("CSCI350").unwrap();
        assert_eq!(prereqs(record), vec!["CSCI300", "CSCI200"]);
    }

    #[test]
    fn last_duplicate_wins() {
        let (catalog, stats) = parse("CSCI101,First\ncsci101,Second,MATH100\n");
        assert_eq!(catalog.len(), 1);
        assert_eq!(stats.replaced, 1);
        let record = catalog.lookup("CSCI101").unwrap();
        assert_eq!(record.title, "Second");
        assert_eq!(prereqs(record), vec!["MATH100"]);
    }

    #[test]
    fn crlf_trailing_delimiter_is_still_skipped() {
        let (catalog, stats) = parse("CSCI300,\r\nCSCI101,Intro\r\n");
        assert!(catalog.lookup("CSCI300").is_none());
        assert_eq!(stats.skipped, 1);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn accepts_crlf_and_invalid_utf8() {
        let mut bytes = b"CSCI101,Intro\r\nCSCI102,Caf".to_vec();
        bytes.push(0xff);
        bytes.extend_from_slice(b"\r\n");
        let (catalog, _) = parse_catalog(Cursor::new(bytes)).expect("parse");
        assert_eq!(catalog.lookup("CSCI101").unwrap().title, "Intro");
        assert_eq!(catalog.lookup("CSCI102").unwrap().title, "Caf\u{fffd}");
    }

    #[test]
    fn unknown_prerequisites_are_kept() {
        let (catalog, _) = parse("CSCI400,Capstone,CSCI999\n");
        assert_eq!(prereqs(catalog.lookup("CSCI400").unwrap()), vec!["CSCI999"]);
        assert!(catalog.lookup("CSCI999").is_none());
    }

    #[test]
    fn load_from_path_reads_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "MATH201,Discrete Mathematics")?;
        writeln!(file, "CSCI200,Data Structures,CSCI101")?;
        let catalog = load_catalog_from_path(file.path())?;
        assert_eq!(catalog.len(), 2);
        Ok(())
    }

    #[test]
    fn load_from_missing_path_fails_with_path_context() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("missing.csv");
        let err = load_catalog_from_path(&missing).expect_err("missing file should fail");
        assert!(format!("{err:#}").contains("missing.csv"));
    }
}
