//! CSV issue row parsing
//!
//! Batch files are CSV with a header row. The `title` column is required
//! per row; `body` and `labels` default to empty when the column is absent.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::Result;

/// A CSV record as it appears in a batch file
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(default)]
    title: String,
    #[serde(default)]
    body: String,
    #[serde(default)]
    labels: String,
}

/// One well-formed issue row
///
/// The title is trimmed and non-empty by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRow {
    /// Issue title
    pub title: String,
    /// Issue body, empty if the field was absent
    pub body: String,
    /// Labels in source order
    pub labels: Vec<String>,
}

/// Outcome of parsing one data row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// Row with a usable title
    Issue(IssueRow),
    /// Row whose title was empty after trimming
    ///
    /// `line` is 1-based and counts the header line.
    MissingTitle { line: u64 },
}

/// Split a comma-delimited label field, trimming each entry and dropping
/// empty ones
pub fn parse_labels(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a batch file, returning one outcome per data row in file order
pub fn read_batch(path: &Path) -> Result<Vec<RowOutcome>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut outcomes = Vec::new();

    for (idx, record) in reader.deserialize::<RawRow>().enumerate() {
        let raw = record?;
        // Data rows start on line 2, after the header.
        let line = idx as u64 + 2;

        let title = raw.title.trim();
        if title.is_empty() {
            outcomes.push(RowOutcome::MissingTitle { line });
            continue;
        }

        outcomes.push(RowOutcome::Issue(IssueRow {
            title: title.to_string(),
            body: raw.body,
            labels: parse_labels(&raw.labels),
        }));
    }

    debug!(path = %path.display(), rows = outcomes.len(), "Parsed batch file");
    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_parse_labels_splits_and_trims() {
        assert_eq!(parse_labels("bug, urgent"), vec!["bug", "urgent"]);
        assert_eq!(parse_labels("  one  "), vec!["one"]);
    }

    #[test]
    fn test_parse_labels_drops_empty_segments() {
        assert!(parse_labels("").is_empty());
        assert!(parse_labels(" , ,").is_empty());
        assert_eq!(parse_labels("a,,b"), vec!["a", "b"]);
    }

    #[test]
    fn test_read_batch_basic_row() {
        let file = write_csv(
            "title,body,labels\nFix login bug,Users cannot log in,\"bug, urgent\"\n",
        );
        let outcomes = read_batch(file.path()).unwrap();

        assert_eq!(outcomes.len(), 1);
        assert_eq!(
            outcomes[0],
            RowOutcome::Issue(IssueRow {
                title: "Fix login bug".to_string(),
                body: "Users cannot log in".to_string(),
                labels: vec!["bug".to_string(), "urgent".to_string()],
            })
        );
    }

    #[test]
    fn test_read_batch_trims_title() {
        let file = write_csv("title,body,labels\n  Padded title  ,,\n");
        let outcomes = read_batch(file.path()).unwrap();

        match &outcomes[0] {
            RowOutcome::Issue(row) => {
                assert_eq!(row.title, "Padded title");
                assert!(row.body.is_empty());
                assert!(row.labels.is_empty());
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_read_batch_empty_title_reports_line() {
        let file = write_csv("title,body,labels\nFirst,,\n   ,,\nThird,,\n");
        let outcomes = read_batch(file.path()).unwrap();

        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[1], RowOutcome::MissingTitle { line: 3 });
    }

    #[test]
    fn test_read_batch_missing_optional_columns() {
        let file = write_csv("title\nJust a title\n");
        let outcomes = read_batch(file.path()).unwrap();

        match &outcomes[0] {
            RowOutcome::Issue(row) => {
                assert_eq!(row.title, "Just a title");
                assert!(row.body.is_empty());
                assert!(row.labels.is_empty());
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_read_batch_preserves_order() {
        let file = write_csv("title,body,labels\nA,,\nB,,\nC,,\n");
        let titles: Vec<String> = read_batch(file.path())
            .unwrap()
            .into_iter()
            .filter_map(|o| match o {
                RowOutcome::Issue(row) => Some(row.title),
                RowOutcome::MissingTitle { .. } => None,
            })
            .collect();

        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_read_batch_missing_file_errors() {
        let result = read_batch(Path::new("/nonexistent/batch-12345.csv"));
        assert!(result.is_err());
    }
}
