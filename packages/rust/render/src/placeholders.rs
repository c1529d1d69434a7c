//! `{{token}}` placeholder substitution over operator page copy.
//!
//! Unknown tokens are deliberately preserved verbatim (the *preserve-unknown*
//! leniency mode) so braces in copy text that merely look like placeholders
//! are never destroyed. Tests assert on this behavior explicitly.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use siteforge_shared::{Record, SiteConfig};

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([a-zA-Z0-9_]+)\s*\}\}").unwrap());

/// Substitution context: a flat name → value map.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderContext {
    values: BTreeMap<String, String>,
}

impl PlaceholderContext {
    /// Build the site-wide context: identity fields plus the generation year.
    pub fn site(config: &SiteConfig, year: i32) -> Self {
        let mut values = BTreeMap::new();
        values.insert("site_name".into(), config.site_name.clone());
        values.insert("site_url".into(), config.site_url.clone());
        values.insert("contact_email".into(), config.contact_email.clone());
        values.insert("author_name".into(), config.author_name.clone());
        values.insert("author_role".into(), config.author_role.clone());
        values.insert("author_bio".into(), config.author_bio.clone());
        values.insert("year".into(), year.to_string());
        Self { values }
    }

    /// Add one extra token; later inserts win.
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }

    /// Layer a record's fields on top of the site context (article pages).
    /// The record's `title` and `slug` are exposed alongside every extra
    /// CSV column.
    pub fn with_record(mut self, record: &Record) -> Self {
        for (key, value) in &record.extras {
            self.values.insert(key.clone(), value.clone());
        }
        self.values.insert("title".into(), record.title.clone());
        self.values.insert("slug".into(), record.slug.clone());
        self
    }

    /// Substitute `{{name}}` tokens, preserving unknown tokens verbatim.
    pub fn apply(&self, text: &str) -> String {
        TOKEN_RE
            .replace_all(text, |caps: &Captures<'_>| {
                match self.values.get(&caps[1]) {
                    Some(value) => value.clone(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        SiteConfig {
            site_name: "Gear Lab".into(),
            contact_email: "team@gearlab.example".into(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn substitutes_site_tokens() {
        let ctx = PlaceholderContext::site(&config(), 2026);
        let out = ctx.apply("Welcome to {{site_name}}, est. {{year}}.");
        assert_eq!(out, "Welcome to Gear Lab, est. 2026.");
    }

    #[test]
    fn unknown_tokens_preserved_verbatim() {
        let ctx = PlaceholderContext::site(&config(), 2026);
        let out = ctx.apply("Contact {{contact_email}} about {{not_a_token}}.");
        assert_eq!(
            out,
            "Contact team@gearlab.example about {{not_a_token}}."
        );
    }

    #[test]
    fn tolerates_inner_whitespace() {
        let ctx = PlaceholderContext::site(&config(), 2026);
        assert_eq!(ctx.apply("{{ site_name }}"), "Gear Lab");
    }

    #[test]
    fn record_fields_layer_over_site_context() {
        let mut extras = std::collections::BTreeMap::new();
        extras.insert("rating".to_string(), "4.6".to_string());
        let record = Record {
            index: 0,
            title: "Best Planner".into(),
            keywords: vec![],
            slug: "best-planner".into(),
            extras,
        };
        let ctx = PlaceholderContext::site(&config(), 2026).with_record(&record);
        assert_eq!(
            ctx.apply("{{title}} rated {{rating}} on {{site_name}}"),
            "Best Planner rated 4.6 on Gear Lab"
        );
    }
}
