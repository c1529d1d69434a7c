//! Sitemap XML rendering: single urlset, numbered shards, and the shard
//! index. Shard partitioning itself is the planner's job; this module only
//! turns an already-chunked URL list into XML.

use siteforge_shared::absolute_url;

use crate::layout::escape_html;

const XML_HEADER: &str = "<?xml version='1.0' encoding='UTF-8'?>";

/// Render a `<urlset>` sitemap for the given page paths.
pub fn render_urlset(site_url: &str, paths: &[String], lastmod: &str) -> String {
    let urls: Vec<String> = paths
        .iter()
        .map(|path| {
            format!(
                "<url><loc>{}</loc><lastmod>{}</lastmod></url>",
                escape_html(&absolute_url(site_url, path)),
                lastmod
            )
        })
        .collect();
    format!(
        "{XML_HEADER}\n<urlset xmlns='http://www.sitemaps.org/schemas/sitemap/0.9'>\n{}\n</urlset>\n",
        urls.join("\n")
    )
}

/// Render a `<sitemapindex>` referencing the given shard file names.
pub fn render_index(site_url: &str, shard_names: &[String], lastmod: &str) -> String {
    let entries: Vec<String> = shard_names
        .iter()
        .map(|name| {
            format!(
                "<sitemap><loc>{}</loc><lastmod>{}</lastmod></sitemap>",
                escape_html(&absolute_url(site_url, name)),
                lastmod
            )
        })
        .collect();
    format!(
        "{XML_HEADER}\n<sitemapindex xmlns='http://www.sitemaps.org/schemas/sitemap/0.9'>\n{}\n</sitemapindex>\n",
        entries.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urlset_uses_canonical_urls() {
        let xml = render_urlset(
            "https://example.com",
            &["index.html".into(), "best-planner.html".into()],
            "2026-08-06",
        );
        assert!(xml.contains("<loc>https://example.com/</loc>"));
        assert!(xml.contains("<loc>https://example.com/best-planner</loc>"));
        assert!(xml.contains("<lastmod>2026-08-06</lastmod>"));
        assert!(xml.starts_with("<?xml version='1.0'"));
    }

    #[test]
    fn index_references_shards() {
        let xml = render_index(
            "https://example.com",
            &["sitemap-1.xml".into(), "sitemap-2.xml".into()],
            "2026-08-06",
        );
        assert!(xml.contains("<loc>https://example.com/sitemap-1.xml</loc>"));
        assert!(xml.contains("<loc>https://example.com/sitemap-2.xml</loc>"));
        assert!(xml.contains("sitemapindex"));
    }
}
