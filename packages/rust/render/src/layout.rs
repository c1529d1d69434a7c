//! Shared HTML shell: head metadata, header/footer chrome, and the helpers
//! every page type renders through.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::Value;

use siteforge_shared::{SiteConfig, absolute_url, slugify};

/// Escape text for safe embedding in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Top navigation entries, in display order.
pub fn nav_items() -> [(&'static str, &'static str); 4] {
    [
        ("Home", "index.html"),
        ("Best Picks", "all-guides.html"),
        ("About", "about.html"),
        ("Contact", "contact.html"),
    ]
}

/// Everything [`render_layout`] needs to assemble one full page.
#[derive(Debug, Clone, Default)]
pub struct PageShell {
    /// `<title>` text.
    pub page_title: String,
    /// Meta description.
    pub meta_description: String,
    /// Output path of the page being rendered (canonical URL basis).
    pub current_path: String,
    /// Rendered `<main>` content.
    pub main_html: String,
    /// JSON-LD objects embedded in the head.
    pub schema_objects: Vec<Value>,
    /// Social preview image; falls back to the site logo.
    pub og_image_url: Option<String>,
    /// Emit `noindex,follow` instead of `index,follow`.
    pub noindex: bool,
}

/// Assemble the final HTML document for a page.
///
/// The canonical link, `og:url`, and breadcrumb schema all derive from
/// `absolute_url(site_url, current_path)`; the sitemap uses the same
/// function, which keeps the four in agreement by construction.
pub fn render_layout(config: &SiteConfig, year: i32, shell: &PageShell) -> String {
    let robots = if shell.noindex {
        "noindex,follow"
    } else {
        "index,follow"
    };
    let canonical = absolute_url(&config.site_url, &shell.current_path);
    let social_image = shell
        .og_image_url
        .clone()
        .filter(|u| !u.trim().is_empty())
        .unwrap_or_else(|| absolute_url(&config.site_url, "assets/site-logo.svg"));

    let schema_tags = shell
        .schema_objects
        .iter()
        .map(|obj| {
            format!(
                "<script type='application/ld+json'>{}</script>",
                serde_json::to_string(obj).unwrap_or_default()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<!doctype html>\n<html lang='en'>\n<head>\n\
         <meta charset='utf-8'>\n\
         <meta name='viewport' content='width=device-width, initial-scale=1'>\n\
         <title>{title}</title>\n\
         <meta name='description' content='{desc}'>\n\
         <meta name='robots' content='{robots}'>\n\
         <meta property='og:type' content='website'>\n\
         <meta property='og:site_name' content='{site_name}'>\n\
         <meta property='og:title' content='{title}'>\n\
         <meta property='og:description' content='{desc}'>\n\
         <meta property='og:url' content='{canonical}'>\n\
         <meta property='og:image' content='{image}'>\n\
         <meta name='twitter:card' content='summary_large_image'>\n\
         <link rel='canonical' href='{canonical}'>\n\
         <link rel='stylesheet' href='assets/site.css'>\n\
         {schema_tags}\n\
         </head>\n<body>\n{header}\n<main class='page-wrap'>{main}</main>\n{footer}\n</body>\n</html>",
        title = escape_html(&shell.page_title),
        desc = escape_html(&shell.meta_description),
        robots = robots,
        site_name = escape_html(&config.site_name),
        canonical = escape_html(&canonical),
        image = escape_html(&social_image),
        schema_tags = schema_tags,
        header = render_header(config, &shell.current_path),
        main = shell.main_html,
        footer = render_footer(config, year),
    )
}

/// Sticky site header with nav links; the current page gets `active`.
pub fn render_header(config: &SiteConfig, current_path: &str) -> String {
    let current = if current_path.is_empty() {
        "index.html"
    } else {
        current_path
    };
    let links: String = nav_items()
        .iter()
        .map(|(label, href)| {
            let is_guides = *href == "all-guides.html" && current.starts_with("all-guides");
            let active = if current == *href || is_guides {
                " active"
            } else {
                ""
            };
            format!(
                "<a class='nav-link{active}' href='{}'>{}</a>",
                escape_html(href),
                escape_html(label)
            )
        })
        .collect();
    format!(
        "<header class='site-header'><div class='site-header-inner'>\
         <a class='logo' href='index.html'><span class='logo-mark'></span><span>{}</span></a>\
         <nav class='site-nav'>{links}<a class='nav-cta' href='all-guides.html'>Get Recommendations</a></nav>\
         </div></header>",
        escape_html(&config.site_name)
    )
}

/// Site footer with policy links and the copyright year.
pub fn render_footer(config: &SiteConfig, year: i32) -> String {
    format!(
        "<footer class='site-footer'><div class='site-footer-inner'>\
         <div><strong>{name}</strong> publishes structured, transparent buying research built \
         for fast decision-making.</div>\
         <div class='footer-columns'>\
         <div class='footer-col'><h4>Product Research</h4>\
         <a href='editorial-policy.html'>Methodology</a>\
         <a href='affiliate-disclosure.html'>Disclosure</a>\
         <a href='all-guides.html'>Best Picks</a></div>\
         <div class='footer-col'><h4>Company</h4>\
         <a href='about.html'>About</a>\
         <a href='contact.html'>Contact</a></div>\
         <div class='footer-col'><h4>Legal</h4>\
         <a href='privacy-policy.html'>Privacy</a>\
         <a href='terms-of-use.html'>Terms</a></div>\
         </div>\
         <div>&copy; {year} {name}. All rights reserved.</div>\
         </div></footer>",
        name = escape_html(&config.site_name),
        year = year,
    )
}

/// The affiliate disclosure banner shown on every article.
pub fn render_disclosure_block() -> String {
    "<section class='disclosure-card'>\
     <strong>Affiliate Disclosure:</strong> \
     this site may earn from qualifying purchases made through outbound links. \
     Prices, ratings, and availability may change over time.\
     </section>"
        .to_string()
}

/// The author byline box rendered after each article body.
pub fn render_author_box(config: &SiteConfig) -> String {
    format!(
        "<section class='author-card'>\
         <div class='author-name'>{}</div>\
         <div class='author-role'>{}</div>\
         <div>{}</div>\
         <div class='micro-note'>For correction requests, use the contact page.</div>\
         </section>",
        escape_html(&config.author_name),
        escape_html(&config.author_role),
        escape_html(&config.author_bio),
    )
}

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h([23])([^>]*)>(.*?)</h[23]>").unwrap());
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Give every `<h2>`/`<h3>` a stable slug `id` for in-page anchors.
/// Repeated heading text gets `-2`, `-3`, … the same way slugs do.
pub fn add_heading_ids(article_html: &str) -> String {
    let mut seen: BTreeMap<String, usize> = BTreeMap::new();
    HEADING_RE
        .replace_all(article_html, |caps: &Captures<'_>| {
            let level = &caps[1];
            let attrs = caps[2].to_string();
            let inner = &caps[3];
            let plain = TAG_RE.replace_all(inner, "");
            let base = slugify(plain.trim());
            if base.is_empty() || attrs.to_lowercase().contains(" id=") {
                return caps[0].to_string();
            }
            let n = seen.entry(base.clone()).or_insert(0);
            *n += 1;
            let anchor = if *n == 1 {
                base
            } else {
                format!("{base}-{n}")
            };
            format!("<h{level}{attrs} id='{anchor}'>{inner}</h{level}>")
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_html_metacharacters() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#x27;&amp;&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn layout_canonical_matches_absolute_url() {
        let config = SiteConfig::default();
        let shell = PageShell {
            page_title: "Test".into(),
            meta_description: "Desc".into(),
            current_path: "best-planner.html".into(),
            main_html: "<p>body</p>".into(),
            ..PageShell::default()
        };
        let html = render_layout(&config, 2026, &shell);
        let expected = absolute_url(&config.site_url, "best-planner.html");
        assert!(html.contains(&format!("<link rel='canonical' href='{expected}'>")));
        assert!(html.contains(&format!("<meta property='og:url' content='{expected}'>")));
        assert!(html.contains("index,follow"));
    }

    #[test]
    fn noindex_flag_switches_robots_meta() {
        let config = SiteConfig::default();
        let shell = PageShell {
            noindex: true,
            ..PageShell::default()
        };
        let html = render_layout(&config, 2026, &shell);
        assert!(html.contains("noindex,follow"));
    }

    #[test]
    fn header_marks_guides_pages_active() {
        let config = SiteConfig::default();
        let header = render_header(&config, "all-guides-3.html");
        assert!(header.contains("nav-link active' href='all-guides.html'"));
    }

    #[test]
    fn heading_ids_deduplicate() {
        let html = "<h2>Overview</h2><p>x</p><h2>Overview</h2><h3 id='keep'>Kept</h3>";
        let out = add_heading_ids(html);
        assert!(out.contains("<h2 id='overview'>Overview</h2>"));
        assert!(out.contains("<h2 id='overview-2'>Overview</h2>"));
        assert!(out.contains("<h3 id='keep'>Kept</h3>"));
    }
}
