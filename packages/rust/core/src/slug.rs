//! Slug assignment with deterministic collision resolution.

use std::collections::BTreeMap;

use tracing::debug;

use siteforge_shared::{Record, SkippedRecord, slugify};

/// Annotate records with unique slugs, preserving order.
///
/// The first record to claim a base slug keeps it unmodified; each later
/// collision gets `-2`, `-3`, … in order of appearance, so the assignment
/// is a pure function of the input sequence. Records whose title normalizes
/// to an empty slug are dropped and recorded in `skipped`.
pub fn assign_slugs(records: Vec<Record>, skipped: &mut Vec<SkippedRecord>) -> Vec<Record> {
    let mut used: BTreeMap<String, usize> = BTreeMap::new();
    let mut out = Vec::with_capacity(records.len());

    for mut record in records {
        let base = slugify(&record.title);
        if base.is_empty() {
            skipped.push(SkippedRecord {
                line: 0,
                title: record.title.clone(),
                reason: "title normalizes to an empty slug".into(),
            });
            continue;
        }
        let n = used.entry(base.clone()).or_insert(0);
        *n += 1;
        record.slug = if *n == 1 {
            base
        } else {
            format!("{base}-{n}")
        };
        out.push(record);
    }

    debug!(assigned = out.len(), "slug assignment complete");
    out
}
