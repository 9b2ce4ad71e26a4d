use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const STATUS_ACTIVE: &str = "active";
/// Placeholder resolved by the database at insert time.
pub const CREATED_AT_PLACEHOLDER: &str = "NOW()";

/// One parsed catalog entry. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub category: String,
    pub status: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written(usize),
    Empty,
}

/// Write one category's records with a header row. Nothing is written for an
/// empty slice; an existing file at `path` is overwritten otherwise.
pub fn write_projects(records: &[ProjectRecord], path: &Path) -> Result<WriteOutcome> {
    if records.is_empty() {
        println!("No projects to write for {}", path.display());
        return Ok(WriteOutcome::Empty);
    }

    let wrap = |source: csv::Error| Error::WriteOutput {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::Writer::from_path(path).map_err(wrap)?;
    for record in records {
        writer.serialize(record).map_err(wrap)?;
    }
    writer.flush().map_err(|e| wrap(e.into()))?;

    println!("Written {} projects to {}", records.len(), path.display());
    Ok(WriteOutcome::Written(records.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, description: &str) -> ProjectRecord {
        ProjectRecord {
            id: "00000000-0000-4000-8000-000000000000".into(),
            name: title.into(),
            title: title.into(),
            description: description.into(),
            url: "https://example.com".into(),
            category: "security".into(),
            status: STATUS_ACTIVE.into(),
            created_at: CREATED_AT_PLACEHOLDER.into(),
        }
    }

    #[test]
    fn empty_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects_empty.csv");
        assert_eq!(write_projects(&[], &path).unwrap(), WriteOutcome::Empty);
        assert!(!path.exists());
    }

    #[test]
    fn header_and_quoting() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects_security.csv");
        let rows = vec![
            record("ToolX", "plain"),
            record("Quoted", "has, comma and \"quotes\""),
        ];
        assert_eq!(write_projects(&rows, &path).unwrap(), WriteOutcome::Written(2));

        let written = std::fs::read_to_string(&path).unwrap();
        let mut lines = written.lines();
        assert_eq!(
            lines.next(),
            Some("id,name,title,description,url,category,status,created_at")
        );
        assert!(written.contains(r#""has, comma and ""quotes""""#));

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let back: Vec<ProjectRecord> = reader.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(back, rows);
    }

    #[test]
    fn overwrites_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects_security.csv");
        std::fs::write(&path, "stale\nstale\nstale\n").unwrap();
        write_projects(&[record("Fresh", "")], &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains("stale"));
        assert_eq!(written.lines().count(), 2);
    }
}
