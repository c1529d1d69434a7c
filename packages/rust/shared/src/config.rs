//! Site configuration for siteforge.
//!
//! Config is a single JSON object passed via `--config-file`. Missing keys
//! fall back to defaults; `--write-config-template` emits a fully-defaulted
//! skeleton for new sites.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteforgeError};
use crate::urls::normalize_site_url;

// ---------------------------------------------------------------------------
// Config structs (matching the site config JSON schema)
// ---------------------------------------------------------------------------

/// Top-level site config, deserialized from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Input CSV path (relative paths resolve against the working directory).
    #[serde(default = "default_input")]
    pub input: String,

    /// Output directory for the generated site.
    #[serde(default = "default_output")]
    pub output: String,

    /// Website brand name.
    #[serde(default = "default_site_name")]
    pub site_name: String,

    /// Final deployed site URL; used verbatim as the canonical prefix.
    #[serde(default = "default_site_url")]
    pub site_url: String,

    /// Affiliate tag appended to outbound product links.
    #[serde(default)]
    pub tag: String,

    /// Deterministic seed for copy variation. Empty selects a fixed default
    /// so two runs with the same config produce identical pages.
    #[serde(default)]
    pub seed: String,

    /// Keyword filter entries. Empty matches every record.
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Optional fixed sort key for listing pages (`"title"`). Absent keeps
    /// the CSV load order.
    #[serde(default)]
    pub sort_key: Option<String>,

    /// Author display name.
    #[serde(default = "default_author_name")]
    pub author_name: String,

    /// Author role text.
    #[serde(default = "default_author_role")]
    pub author_role: String,

    /// Author bio text.
    #[serde(default = "default_author_bio")]
    pub author_bio: String,

    /// Contact email shown on the contact page and in page footers.
    #[serde(default = "default_contact_email")]
    pub contact_email: String,

    /// Bound on the record set surfaced in listing and home pages.
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// How many cards the home page shows.
    #[serde(default = "default_home_cards_limit")]
    pub home_cards_limit: usize,

    /// Records per `all-guides` listing page.
    #[serde(default = "default_guides_page_size")]
    pub guides_page_size: usize,

    /// Related guides per article.
    #[serde(default = "default_related_links_count")]
    pub related_links_count: usize,

    /// URLs per sitemap file before sharding kicks in.
    #[serde(default = "default_sitemap_chunk_size")]
    pub sitemap_chunk_size: usize,

    /// Operator-editable page copy fragments keyed by name.
    #[serde(default = "default_page_copy")]
    pub page_copy: BTreeMap<String, String>,

    /// IndexNow settings.
    #[serde(default)]
    pub indexnow: IndexNowConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            site_name: default_site_name(),
            site_url: default_site_url(),
            tag: String::new(),
            seed: String::new(),
            keywords: Vec::new(),
            sort_key: None,
            author_name: default_author_name(),
            author_role: default_author_role(),
            author_bio: default_author_bio(),
            contact_email: default_contact_email(),
            top_n: default_top_n(),
            home_cards_limit: default_home_cards_limit(),
            guides_page_size: default_guides_page_size(),
            related_links_count: default_related_links_count(),
            sitemap_chunk_size: default_sitemap_chunk_size(),
            page_copy: default_page_copy(),
            indexnow: IndexNowConfig::default(),
        }
    }
}

fn default_input() -> String {
    "productdata.csv".into()
}
fn default_output() -> String {
    "generated_site".into()
}
fn default_site_name() -> String {
    "Buyer Verdict Hub".into()
}
fn default_site_url() -> String {
    "https://example.pages.dev".into()
}
fn default_author_name() -> String {
    "Editorial Desk".into()
}
fn default_author_role() -> String {
    "Product Research Team".into()
}
fn default_author_bio() -> String {
    "We analyze product data and structure guides to help buyers compare faster.".into()
}
fn default_contact_email() -> String {
    "hello@example.com".into()
}
fn default_top_n() -> usize {
    10
}
fn default_home_cards_limit() -> usize {
    250
}
fn default_guides_page_size() -> usize {
    500
}
fn default_related_links_count() -> usize {
    6
}
fn default_sitemap_chunk_size() -> usize {
    40_000
}

/// `indexnow` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexNowConfig {
    /// IndexNow API key. Empty disables key file + submission entirely.
    #[serde(default)]
    pub key: String,

    /// Public URL or site-relative path of the key file. Empty derives
    /// `<site_url>/<key>.txt`.
    #[serde(default)]
    pub key_location: String,

    /// Submission endpoint.
    #[serde(default = "default_indexnow_endpoint")]
    pub endpoint: String,

    /// Submit URLs automatically after generation.
    #[serde(default)]
    pub submit: bool,

    /// URLs per POST batch.
    #[serde(default = "default_indexnow_batch_size")]
    pub batch_size: usize,
}

impl Default for IndexNowConfig {
    fn default() -> Self {
        Self {
            key: String::new(),
            key_location: String::new(),
            endpoint: default_indexnow_endpoint(),
            submit: false,
            batch_size: default_indexnow_batch_size(),
        }
    }
}

fn default_indexnow_endpoint() -> String {
    "https://api.indexnow.org/indexnow".into()
}
fn default_indexnow_batch_size() -> usize {
    10_000
}

// ---------------------------------------------------------------------------
// Default page copy
// ---------------------------------------------------------------------------

/// Built-in page copy used by the config template and as the fallback for
/// auxiliary fragments. The six `*_html` body keys are required at render
/// time: a static page whose key is absent from the operator's `page_copy`
/// is omitted and reported as a template error.
pub fn default_page_copy() -> BTreeMap<String, String> {
    let entries: [(&str, &str); 14] = [
        ("home_hero_kicker", "Programmatic Affiliate Hub"),
        ("home_hero_title", "{{site_name}}"),
        (
            "home_hero_intro",
            "Find structured comparisons with disclosure, author info, and buying guidance. \
             Use search to quickly filter guides.",
        ),
        (
            "home_search_placeholder",
            "Search a keyword (e.g. planner, solar lights...)",
        ),
        ("home_latest_guides_title", "Latest Buying Guides"),
        ("home_important_pages_title", "Important Pages"),
        ("guides_index_title", "All Buying Guides"),
        (
            "guides_index_intro",
            "Browse all generated guides. This index is paginated for crawl efficiency \
             and better internal linking.",
        ),
        ("guides_card_cta_text", "Open guide"),
        (
            "about_html",
            "<h1>About {{site_name}}</h1>\
             <p>This website publishes large-scale product comparison guides using structured \
             data and repeatable editorial templates. Our goal is to help readers shortlist \
             products faster without depending only on marketing claims.</p>\
             <h2>How We Build Content</h2>\
             <p>Each guide is generated from product-level inputs and a consistent layout that \
             includes affiliate disclosure, buying guidance, FAQ, and author details.</p>\
             <h2>Corrections and Updates</h2>\
             <p>If you find factual errors, outdated details, or technical issues, contact us \
             by email at <a href='mailto:{{contact_email}}'>{{contact_email}}</a>.</p>",
        ),
        (
            "contact_html",
            "<h1>Contact Us</h1>\
             <p>For corrections, partnership inquiries, copyright concerns, and general \
             questions, please contact us via email.</p>\
             <div class='contact-email-box'><strong>Email:</strong> \
             <a href='mailto:{{contact_email}}'>{{contact_email}}</a></div>\
             <p>When contacting us, include the page URL and a short explanation so we can \
             review your request faster.</p>",
        ),
        (
            "disclosure_html",
            "<h1>Affiliate Disclosure</h1>\
             <p>This website participates in affiliate advertising programs, including Amazon \
             Associates and similar partner networks.</p>\
             <p>When visitors click affiliate links and make qualifying purchases, we may earn \
             a commission at no additional cost to the buyer.</p>\
             <p>Product prices, stock availability, ratings, and reviews may change over time. \
             Always verify current details on the merchant website before making a final \
             purchase decision.</p>",
        ),
        (
            "editorial_html",
            "<h1>Editorial Policy</h1>\
             <h2>Selection Framework</h2>\
             <p>Guides are assembled from structured input datasets and consistency rules, \
             including rank signals, review confidence, and feature relevance.</p>\
             <h2>Content Updates</h2>\
             <p>Pages may be regenerated when source data changes or when layout and policy \
             improvements are deployed site-wide.</p>\
             <h2>Independence</h2>\
             <p>Affiliate commissions do not guarantee product placement. Ranking logic follows \
             predefined data-driven rules.</p>",
        ),
        (
            "privacy_html",
            "<h1>Privacy Policy</h1>\
             <p>This site may use analytics, server logs, and affiliate tracking parameters to \
             understand traffic and link performance.</p>\
             <p>We do not intentionally collect sensitive personal data through article pages.</p>\
             <p>Third-party services (such as affiliate networks) may process data under their \
             own privacy policies. If you have privacy-related questions, contact us by email \
             at <a href='mailto:{{contact_email}}'>{{contact_email}}</a>.</p>",
        ),
    ];

    let mut copy = BTreeMap::new();
    for (key, value) in entries {
        copy.insert(key.to_string(), value.to_string());
    }
    copy.insert(
        "terms_html".to_string(),
        "<h1>Terms of Use</h1>\
         <p>All content is provided for informational purposes and may change without notice.</p>\
         <p>Before buying any product, you should verify product details, shipping, warranty, \
         and return policy on the seller platform.</p>\
         <p>By using this website, you agree to evaluate products independently and use this \
         information at your own discretion.</p>"
            .to_string(),
    );
    copy.insert(
        "article_footer_note".to_string(),
        "This page is for informational purposes and does not replace independent product \
         research."
            .to_string(),
    );
    copy
}

// ---------------------------------------------------------------------------
// Keyword filter
// ---------------------------------------------------------------------------

/// Keyword filter derived from the config `keywords` list.
///
/// Matching rule: a record matches when any of its keyword strings contains
/// a filter entry as a case-insensitive, whitespace-normalized substring.
/// So the filter entry `camping` matches a record keyword `camping gear`.
/// An empty filter matches every record.
#[derive(Debug, Clone)]
pub struct KeywordFilter {
    entries: Vec<String>,
}

impl KeywordFilter {
    /// Build a filter from raw config entries; blanks are dropped.
    pub fn from_entries(entries: &[String]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|e| normalize_text(e))
                .filter(|e| !e.is_empty())
                .collect(),
        }
    }

    /// True when no entries are configured (match everything).
    pub fn is_match_all(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when any record keyword matches any filter entry.
    pub fn matches(&self, keywords: &[String]) -> bool {
        if self.entries.is_empty() {
            return true;
        }
        keywords.iter().any(|kw| {
            let kw = normalize_text(kw);
            self.entries.iter().any(|entry| kw.contains(entry.as_str()))
        })
    }
}

/// Lowercase and collapse internal whitespace.
fn normalize_text(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Load the site config from a JSON file, normalize, and validate it.
pub fn load_config_from(path: &Path) -> Result<SiteConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        SiteforgeError::config(format!("cannot read config file {}: {e}", path.display()))
    })?;

    let mut config: SiteConfig = serde_json::from_str(&content).map_err(|e| {
        SiteforgeError::config(format!("failed to parse {}: {e}", path.display()))
    })?;

    config.site_url = normalize_site_url(&config.site_url);
    config.validate()?;

    tracing::debug!(path = %path.display(), site = %config.site_name, "config loaded");
    Ok(config)
}

/// Write a fully-defaulted config template (including the default page copy)
/// to the given path.
pub fn write_config_template(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|e| SiteforgeError::io(parent, e))?;
        }
        _ => {}
    }
    let template = SiteConfig::default();
    let content = serde_json::to_string_pretty(&template)
        .map_err(|e| SiteforgeError::config(e.to_string()))?;
    std::fs::write(path, content).map_err(|e| SiteforgeError::io(path, e))?;
    tracing::info!(path = %path.display(), "wrote config template");
    Ok(())
}

impl SiteConfig {
    /// Validate invariants that rendering depends on.
    pub fn validate(&self) -> Result<()> {
        let limits = [
            ("top_n", self.top_n),
            ("home_cards_limit", self.home_cards_limit),
            ("guides_page_size", self.guides_page_size),
            ("related_links_count", self.related_links_count),
            ("sitemap_chunk_size", self.sitemap_chunk_size),
            ("indexnow.batch_size", self.indexnow.batch_size),
        ];
        for (name, value) in limits {
            if value == 0 {
                return Err(SiteforgeError::config(format!(
                    "{name} must be a positive integer"
                )));
            }
        }
        if self.site_name.trim().is_empty() {
            return Err(SiteforgeError::config("site_name must not be empty"));
        }
        if !self.site_url.starts_with("http://") && !self.site_url.starts_with("https://") {
            return Err(SiteforgeError::config(format!(
                "site_url must be an absolute URL: {}",
                self.site_url
            )));
        }
        Ok(())
    }

    /// The keyword filter derived from this config.
    pub fn keyword_filter(&self) -> KeywordFilter {
        KeywordFilter::from_entries(&self.keywords)
    }

    /// The copy-variation seed, defaulted so runs are reproducible even
    /// when the operator leaves it blank.
    pub fn effective_seed(&self) -> &str {
        if self.seed.trim().is_empty() {
            "siteforge"
        } else {
            self.seed.trim()
        }
    }
}
