//! Core domain types shared across the siteforge crates.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// One normalized input row that survived loading.
///
/// `index` is the record's position in the original load order. Relevance
/// ranking and listing construction tie-break on it, so it must be carried
/// explicitly rather than recovered from container position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Position in the original loaded order (before any re-sorting).
    pub index: usize,
    /// Display title; never empty for a surviving record.
    pub title: String,
    /// Ordered keyword tokens; may be empty.
    pub keywords: Vec<String>,
    /// Unique URL slug, assigned once at load time.
    pub slug: String,
    /// All other CSV columns, passed through to placeholder substitution.
    pub extras: BTreeMap<String, String>,
}

impl Record {
    /// The article output path for this record.
    pub fn article_path(&self) -> String {
        format!("{}.html", self.slug)
    }
}

// ---------------------------------------------------------------------------
// Skips and page-level failures
// ---------------------------------------------------------------------------

/// A row that was dropped during loading or slug assignment, with the
/// reason recorded for the generation report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedRecord {
    /// 1-based CSV line number (0 when unknown).
    pub line: usize,
    /// The row's title, when one could be read.
    pub title: String,
    /// Human-readable skip reason.
    pub reason: String,
}

/// A page that could not be rendered; the run continued without it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageFailure {
    /// Target output path of the failed page.
    pub path: String,
    /// The template error message.
    pub reason: String,
}

// ---------------------------------------------------------------------------
// File outputs
// ---------------------------------------------------------------------------

/// Classification of every output unit the planner can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Article,
    Listing,
    Home,
    StaticPage,
    SitemapShard,
    SitemapIndex,
    Robots,
    Headers,
    Redirects,
    Asset,
}

impl PageKind {
    /// Whether this output is an HTML page that belongs in the sitemap.
    pub fn in_sitemap(self) -> bool {
        matches!(
            self,
            Self::Article | Self::Listing | Self::Home | Self::StaticPage
        )
    }

    /// Stable label used for report counts.
    pub fn label(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Listing => "listing",
            Self::Home => "home",
            Self::StaticPage => "static_page",
            Self::SitemapShard => "sitemap_shard",
            Self::SitemapIndex => "sitemap_index",
            Self::Robots => "robots",
            Self::Headers => "headers",
            Self::Redirects => "redirects",
            Self::Asset => "asset",
        }
    }
}

/// One rendered output: a site-relative path plus its final content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutput {
    /// Site-relative path, e.g. `best-planner.html` or `assets/site.css`.
    pub path: String,
    /// Output classification.
    pub kind: PageKind,
    /// Final file content.
    pub content: String,
}
