//! Structured-data (JSON-LD) fragments for article and home pages.

use serde_json::{Value, json};

use siteforge_shared::{SiteConfig, absolute_url};

/// Inputs for the per-article schema block.
#[derive(Debug, Clone)]
pub struct ArticleSchemaInput<'a> {
    pub article_title: &'a str,
    pub article_description: &'a str,
    /// Absolute article URL — must equal the page's canonical URL.
    pub article_url: &'a str,
    /// RFC 3339 modification timestamp.
    pub updated_iso: &'a str,
    /// Absolute social/feature image URL.
    pub image_url: &'a str,
    /// The record title used in FAQ question text.
    pub keyword: &'a str,
}

/// Build the Article + FAQPage + BreadcrumbList schema objects for one
/// article page. The breadcrumb's final item is the article URL itself,
/// which keeps it consistent with the canonical link and sitemap entry.
pub fn article_schema(config: &SiteConfig, input: &ArticleSchemaInput<'_>) -> Vec<Value> {
    let article = json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": input.article_title,
        "description": input.article_description,
        "image": input.image_url,
        "mainEntityOfPage": {"@type": "WebPage", "@id": input.article_url},
        "datePublished": input.updated_iso,
        "dateModified": input.updated_iso,
        "author": {
            "@type": "Person",
            "name": config.author_name,
            "url": absolute_url(&config.site_url, "about.html"),
        },
        "publisher": {
            "@type": "Organization",
            "name": config.site_name,
            "url": config.site_url,
            "logo": {
                "@type": "ImageObject",
                "url": absolute_url(&config.site_url, "assets/site-logo.svg"),
                "width": 512,
                "height": 512,
            },
        },
    });

    let faq = json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": [
            {
                "@type": "Question",
                "name": format!("Is {} a good choice for everyday use?", input.keyword),
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": format!(
                        "{} is generally a safe option for balanced quality and reliability.",
                        input.keyword
                    ),
                },
            },
            {
                "@type": "Question",
                "name": format!("What should I check before buying {}?", input.keyword),
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": "Verify current pricing, ratings, and return policy on the \
                             merchant page before purchase.",
                },
            },
        ],
    });

    let breadcrumb = json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": [
            {
                "@type": "ListItem",
                "position": 1,
                "name": "Home",
                "item": absolute_url(&config.site_url, "index.html"),
            },
            {
                "@type": "ListItem",
                "position": 2,
                "name": input.article_title,
                "item": input.article_url,
            },
        ],
    });

    vec![article, faq, breadcrumb]
}

/// WebSite schema for the home page.
pub fn website_schema(config: &SiteConfig) -> Vec<Value> {
    vec![json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": config.site_name,
        "url": absolute_url(&config.site_url, "index.html"),
    })]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breadcrumb_final_item_is_article_url() {
        let config = SiteConfig::default();
        let url = absolute_url(&config.site_url, "best-planner.html");
        let objects = article_schema(
            &config,
            &ArticleSchemaInput {
                article_title: "Best Planner",
                article_description: "desc",
                article_url: &url,
                updated_iso: "2026-08-06T00:00:00Z",
                image_url: "https://img.example/x.jpg",
                keyword: "Best Planner",
            },
        );
        assert_eq!(objects.len(), 3);
        let breadcrumb = &objects[2];
        assert_eq!(breadcrumb["itemListElement"][1]["item"], url.as_str());
        let article = &objects[0];
        assert_eq!(article["mainEntityOfPage"]["@id"], url.as_str());
    }

    #[test]
    fn faq_mentions_keyword() {
        let config = SiteConfig::default();
        let objects = article_schema(
            &config,
            &ArticleSchemaInput {
                article_title: "t",
                article_description: "d",
                article_url: "https://x/y",
                updated_iso: "2026-01-01T00:00:00Z",
                image_url: "i",
                keyword: "Solar Lights",
            },
        );
        let faq = serde_json::to_string(&objects[1]).unwrap();
        assert!(faq.contains("Solar Lights"));
    }
}
