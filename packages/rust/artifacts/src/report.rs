//! Generation report: the single source of truth for what a run produced,
//! including the failures that did not stop it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use siteforge_shared::{FileOutput, PageFailure, SiteConfig, SkippedRecord};

/// Metadata for one written output file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileMeta {
    /// Site-relative output path.
    pub path: String,
    /// Output classification label.
    pub kind: String,
    /// SHA-256 of the file content.
    pub sha256: String,
    /// Content length in bytes.
    pub size_bytes: usize,
}

/// The `generation_report.json` structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    /// RFC 3339 UTC timestamp of the run.
    pub generated_at: String,
    /// Input CSV path as configured.
    pub input_csv: String,
    /// Output directory as configured.
    pub output_dir: String,
    /// Canonical site URL.
    pub site_url: String,
    /// File counts per output kind.
    pub counts: BTreeMap<String, usize>,
    /// Total output file count.
    pub count_total: usize,
    /// Per-file metadata (path, checksum, size).
    pub files: Vec<FileMeta>,
    /// Rows skipped during loading/slug assignment, with reasons.
    pub skipped_records: Vec<SkippedRecord>,
    /// Rows excluded by the keyword filter.
    pub filtered_out: usize,
    /// Pages omitted because of template errors.
    pub template_failures: Vec<PageFailure>,
    /// Effective configuration snapshot (post-defaulting).
    pub config: SiteConfig,
    /// IndexNow submission summary, when a submission ran.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexnow: Option<serde_json::Value>,
}

/// Everything the report builder aggregates over.
#[derive(Debug)]
pub struct ReportInput<'a> {
    pub config: &'a SiteConfig,
    pub outputs: &'a [FileOutput],
    pub skipped: &'a [SkippedRecord],
    pub template_failures: &'a [PageFailure],
    pub filtered_out: usize,
    pub generated_at: String,
}

/// Aggregate the run into a [`GenerationReport`]. Pure — no I/O, no
/// failure modes of its own.
pub fn build_report(input: ReportInput<'_>) -> GenerationReport {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut files = Vec::with_capacity(input.outputs.len());

    for output in input.outputs {
        *counts.entry(output.kind.label().to_string()).or_insert(0) += 1;
        files.push(FileMeta {
            path: output.path.clone(),
            kind: output.kind.label().to_string(),
            sha256: sha256_hex(&output.content),
            size_bytes: output.content.len(),
        });
    }

    GenerationReport {
        generated_at: input.generated_at,
        input_csv: input.config.input.clone(),
        output_dir: input.config.output.clone(),
        site_url: input.config.site_url.clone(),
        counts,
        count_total: input.outputs.len(),
        files,
        skipped_records: input.skipped.to_vec(),
        filtered_out: input.filtered_out,
        template_failures: input.template_failures.to_vec(),
        config: input.config.clone(),
        indexnow: None,
    }
}

fn sha256_hex(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}
