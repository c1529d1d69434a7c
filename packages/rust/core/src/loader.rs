//! CSV record loading and normalization.
//!
//! The header row defines field names. A title-bearing column is required;
//! every other column is carried through as a record extra. Malformed rows
//! are skipped and recorded, never silently dropped.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info, warn};

use siteforge_shared::{KeywordFilter, Record, Result, SiteforgeError, SkippedRecord};

/// Column names accepted as the record title, in preference order.
const TITLE_COLUMNS: &[&str] = &["title", "keyword", "product_name"];

/// Column name holding the delimited keyword list.
const KEYWORDS_COLUMN: &str = "keywords";

/// Result of loading one CSV file.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Records that survived normalization and the keyword filter,
    /// in file order with `index` assigned sequentially.
    pub records: Vec<Record>,
    /// Rows dropped for data reasons, with line numbers.
    pub skipped: Vec<SkippedRecord>,
    /// Rows excluded by the keyword filter (not an error).
    pub filtered_out: usize,
}

/// Load and normalize records from a CSV file.
///
/// Fails with a config error when the file is missing or the header has no
/// title column. Row-level problems are recorded in the outcome and the
/// load continues.
pub fn load_records(path: &Path, filter: &KeywordFilter) -> Result<LoadOutcome> {
    if !path.exists() {
        return Err(SiteforgeError::config(format!(
            "input CSV not found: {}",
            path.display()
        )));
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| SiteforgeError::config(format!("cannot open {}: {e}", path.display())))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| SiteforgeError::config(format!("cannot read CSV header: {e}")))?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    let title_col = TITLE_COLUMNS
        .iter()
        .find_map(|name| headers.iter().position(|h| h == name))
        .ok_or_else(|| {
            SiteforgeError::config(format!(
                "CSV header has no title column (expected one of: {})",
                TITLE_COLUMNS.join(", ")
            ))
        })?;
    let keywords_col = headers.iter().position(|h| h == KEYWORDS_COLUMN);

    let mut outcome = LoadOutcome::default();

    for (row_idx, row) in reader.records().enumerate() {
        // Header is line 1, first data row is line 2.
        let line = row_idx + 2;
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                warn!(line, error = %e, "malformed CSV row skipped");
                outcome.skipped.push(SkippedRecord {
                    line,
                    title: String::new(),
                    reason: format!("malformed row: {e}"),
                });
                continue;
            }
        };

        let title = clean_text(row.get(title_col).unwrap_or_default());
        if title.is_empty() {
            outcome.skipped.push(SkippedRecord {
                line,
                title: String::new(),
                reason: "empty title".into(),
            });
            continue;
        }

        let keywords = keywords_col
            .and_then(|col| row.get(col))
            .map(split_keywords)
            .unwrap_or_default();

        if !filter.matches(&keywords) {
            outcome.filtered_out += 1;
            continue;
        }

        let mut extras = BTreeMap::new();
        for (col, header) in headers.iter().enumerate() {
            if col == title_col || Some(col) == keywords_col || header.is_empty() {
                continue;
            }
            if let Some(value) = row.get(col) {
                let value = value.trim();
                if !value.is_empty() {
                    extras.insert(header.clone(), value.to_string());
                }
            }
        }

        outcome.records.push(Record {
            index: outcome.records.len(),
            title,
            keywords,
            slug: String::new(),
            extras,
        });
    }

    info!(
        loaded = outcome.records.len(),
        skipped = outcome.skipped.len(),
        filtered_out = outcome.filtered_out,
        "CSV load complete"
    );
    debug!(path = %path.display(), "input consumed");

    Ok(outcome)
}

/// Split a delimited keywords cell on `,`/`;`/`|`, trimming and dropping
/// empty tokens.
fn split_keywords(cell: &str) -> Vec<String> {
    cell.split([',', ';', '|'])
        .map(|token| clean_text(token))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Normalize a text cell: decode common mojibake sequences, flatten smart
/// punctuation, and collapse whitespace.
fn clean_text(raw: &str) -> String {
    let mut s = raw.to_string();
    for (bad, good) in [
        ("\u{2013}", "-"),
        ("\u{2014}", "-"),
        ("\u{2018}", "'"),
        ("\u{2019}", "'"),
        ("\u{201c}", "\""),
        ("\u{201d}", "\""),
        ("â€“", "-"),
        ("â€”", "-"),
        ("â€˜", "'"),
        ("â€™", "'"),
        ("â€œ", "\""),
        ("&amp;amp;", "&"),
        ("&amp;", "&"),
    ] {
        s = s.replace(bad, good);
    }
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
