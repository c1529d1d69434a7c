//! Shared types, error model, and configuration for siteforge.
//!
//! This crate is the foundation depended on by all other siteforge crates.
//! It provides:
//! - [`SiteforgeError`] — the unified error type
//! - Domain types ([`Record`], [`FileOutput`], [`PageKind`])
//! - Configuration ([`SiteConfig`], [`KeywordFilter`], config loading)
//! - Canonical URL construction ([`absolute_url`] and friends)

pub mod config;
pub mod error;
pub mod types;
pub mod urls;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    IndexNowConfig, KeywordFilter, SiteConfig, default_page_copy, load_config_from,
    write_config_template,
};
pub use error::{Result, SiteforgeError};
pub use types::{FileOutput, PageFailure, PageKind, Record, SkippedRecord};
pub use urls::{
    absolute_url, ensure_affiliate_tag, normalize_public_path, normalize_site_url, site_host,
    slugify,
};
