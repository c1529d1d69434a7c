//! Static policy/company pages, robots.txt, and the Cloudflare Pages
//! `_headers`/`_redirects` deployment files.

use std::collections::BTreeMap;

use siteforge_shared::{Result, SiteConfig, SiteforgeError, absolute_url};

use crate::RenderDates;
use crate::layout::{PageShell, render_layout};
use crate::placeholders::PlaceholderContext;

/// One static page: output path, required copy key, and head metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticPageSpec {
    pub path: &'static str,
    pub copy_key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Every static page the planner emits, exactly once each.
pub const STATIC_PAGES: &[StaticPageSpec] = &[
    StaticPageSpec {
        path: "about.html",
        copy_key: "about_html",
        title: "About",
        description: "Learn about our editorial method and how this website builds product \
                      comparison guides.",
    },
    StaticPageSpec {
        path: "contact.html",
        copy_key: "contact_html",
        title: "Contact",
        description: "Contact the editorial team for corrections, suggestions, or business \
                      inquiries.",
    },
    StaticPageSpec {
        path: "affiliate-disclosure.html",
        copy_key: "disclosure_html",
        title: "Affiliate Disclosure",
        description: "Understand how affiliate links work on this website.",
    },
    StaticPageSpec {
        path: "editorial-policy.html",
        copy_key: "editorial_html",
        title: "Editorial Policy",
        description: "How this website selects, updates, and presents product recommendations.",
    },
    StaticPageSpec {
        path: "privacy-policy.html",
        copy_key: "privacy_html",
        title: "Privacy Policy",
        description: "Privacy policy for visitors and data handling practices.",
    },
    StaticPageSpec {
        path: "terms-of-use.html",
        copy_key: "terms_html",
        title: "Terms of Use",
        description: "Terms governing use of this website and its content.",
    },
];

/// Render one static page from operator copy.
///
/// The copy key is hard-required: a missing key is a template error, the
/// page is omitted, and the failure lands in the generation report while
/// every other page still renders.
pub fn render_static_page(
    config: &SiteConfig,
    dates: &RenderDates,
    spec: &StaticPageSpec,
    page_copy: &BTreeMap<String, String>,
) -> Result<String> {
    let raw = page_copy.get(spec.copy_key).ok_or_else(|| {
        SiteforgeError::template(format!(
            "page_copy key missing: {} (required by {})",
            spec.copy_key, spec.path
        ))
    })?;

    let ctx = PlaceholderContext::site(config, dates.year);
    let body_html = ctx.apply(raw);

    Ok(render_layout(
        config,
        dates.year,
        &PageShell {
            page_title: format!("{} | {}", spec.title, config.site_name),
            meta_description: spec.description.to_string(),
            current_path: spec.path.to_string(),
            main_html: format!("<section class='content-card'>{body_html}</section>"),
            schema_objects: Vec::new(),
            og_image_url: None,
            noindex: false,
        },
    ))
}

/// robots.txt pointing crawlers at the sitemap.
pub fn robots_txt(config: &SiteConfig) -> String {
    format!(
        "User-agent: *\nAllow: /\nSitemap: {}\n",
        absolute_url(&config.site_url, "sitemap.xml")
    )
}

/// Cloudflare Pages `_headers` file.
pub fn headers_file() -> String {
    [
        "/*",
        "  X-Content-Type-Options: nosniff",
        "  Referrer-Policy: strict-origin-when-cross-origin",
        "  X-Frame-Options: SAMEORIGIN",
        "",
        "/assets/*",
        "  Cache-Control: public, max-age=31536000, immutable",
        "",
    ]
    .join("\n")
}

/// Cloudflare Pages `_redirects` file mapping extensionless URLs back to
/// the generated `.html` files.
pub fn redirects_file() -> String {
    [
        "/index.html / 301",
        "/:slug.html /:slug 301",
        "/home / 301",
        "/all-guides/ /all-guides.html 301",
        "/privacy /privacy-policy.html 301",
        "/terms /terms-of-use.html 301",
        "",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dates() -> RenderDates {
        RenderDates {
            year: 2026,
            date: "2026-08-06".into(),
            human: "August 06, 2026".into(),
            iso: "2026-08-06T00:00:00Z".into(),
        }
    }

    #[test]
    fn all_six_static_pages_are_specified() {
        assert_eq!(STATIC_PAGES.len(), 6);
        let paths: Vec<_> = STATIC_PAGES.iter().map(|s| s.path).collect();
        assert!(paths.contains(&"privacy-policy.html"));
        assert!(paths.contains(&"terms-of-use.html"));
    }

    #[test]
    fn static_page_substitutes_placeholders() {
        let config = SiteConfig::default();
        let spec = &STATIC_PAGES[0];
        let html = render_static_page(&config, &dates(), spec, &config.page_copy).unwrap();
        assert!(html.contains(&config.site_name));
        assert!(!html.contains("{{site_name}}"));
    }

    #[test]
    fn missing_copy_key_is_template_error() {
        let config = SiteConfig::default();
        let mut copy = config.page_copy.clone();
        copy.remove("privacy_html");
        let spec = STATIC_PAGES
            .iter()
            .find(|s| s.copy_key == "privacy_html")
            .unwrap();
        let err = render_static_page(&config, &dates(), spec, &copy).unwrap_err();
        assert!(matches!(err, SiteforgeError::Template { .. }));
        assert!(err.to_string().contains("privacy_html"));
    }

    #[test]
    fn robots_references_sitemap() {
        let config = SiteConfig::default();
        let robots = robots_txt(&config);
        assert!(robots.contains("Sitemap: https://example.pages.dev/sitemap.xml"));
    }

    #[test]
    fn headers_and_redirects_are_stable() {
        assert!(headers_file().contains("X-Content-Type-Options: nosniff"));
        assert!(redirects_file().contains("/:slug.html /:slug 301"));
    }
}
