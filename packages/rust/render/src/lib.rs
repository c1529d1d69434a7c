//! HTML/XML rendering for siteforge.
//!
//! Turns planned pages into final textual content: article pages, the home
//! and listing pages, static policy pages, sitemap XML, robots/headers/
//! redirects, and embedded assets. Rendering is pure — every function takes
//! its inputs explicitly and returns a `String`, so the pipeline stays a
//! deterministic function of (records, config, dates).

pub mod article;
pub mod assets;
pub mod copybank;
pub mod layout;
pub mod listing;
pub mod placeholders;
pub mod schema;
pub mod sitemap;
pub mod statics;

pub use article::render_article_page;
pub use layout::{PageShell, escape_html, render_layout};
pub use listing::{listing_path, render_guides_page, render_home_page};
pub use placeholders::PlaceholderContext;
pub use statics::{STATIC_PAGES, StaticPageSpec, headers_file, redirects_file, robots_txt};

/// Wall-clock strings resolved once per generation run.
///
/// All date-dependent output flows through this struct so tests (and the
/// determinism property) can pin every timestamp.
#[derive(Debug, Clone)]
pub struct RenderDates {
    /// Generation year, bound to the `{{year}}` placeholder.
    pub year: i32,
    /// `YYYY-MM-DD`, used for sitemap `lastmod`.
    pub date: String,
    /// Human-readable date shown in article meta lines.
    pub human: String,
    /// RFC 3339 UTC timestamp for schema `dateModified`.
    pub iso: String,
}
