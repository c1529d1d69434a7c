//! Article page rendering: one buying-guide page per record.

use std::collections::BTreeMap;

use siteforge_shared::{Record, SiteConfig, absolute_url, ensure_affiliate_tag};

use crate::RenderDates;
use crate::copybank;
use crate::layout::{
    PageShell, add_heading_ids, escape_html, render_author_box, render_disclosure_block,
    render_layout,
};
use crate::placeholders::PlaceholderContext;
use crate::schema::{ArticleSchemaInput, article_schema};

/// Strip a leading "Best " from a title for breadcrumb/FAQ phrasing.
fn display_topic(title: &str) -> &str {
    let lower = title.to_lowercase();
    if lower.starts_with("best ") {
        &title[5..]
    } else {
        title
    }
}

/// Render one complete article page.
///
/// Copy variation is deterministic per `(seed, slug)`; the canonical URL,
/// `og:url`, breadcrumb schema item, and (downstream) sitemap entry all
/// derive from the same `absolute_url` call.
pub fn render_article_page(
    config: &SiteConfig,
    dates: &RenderDates,
    record: &Record,
    related: &[Record],
    page_copy: &BTreeMap<String, String>,
) -> String {
    let seed = config.effective_seed();
    let slug = &record.slug;
    let topic = display_topic(&record.title);

    let meta_title = copybank::fill(
        copybank::pick(seed, slug, "meta_title", copybank::META_TITLE),
        &record.title,
        dates.year,
    );
    let meta_desc = copybank::fill(
        copybank::pick(seed, slug, "meta_desc", copybank::META_DESC),
        topic,
        dates.year,
    );
    let h1 = format!("{} in {} - Complete Buying Guide", record.title, dates.year);

    let intro = format!(
        "<p>{}</p><p>{}</p>",
        escape_html(&copybank::fill(
            copybank::pick(seed, slug, "intro_open", copybank::INTRO_OPEN),
            topic,
            dates.year,
        )),
        escape_html(copybank::pick(seed, slug, "intro_mid", copybank::INTRO_MID)),
    );

    let feature = render_feature_image(record);
    let details = render_key_details(record);
    let cta = render_product_cta(config, record);
    let faq = render_faq(seed, slug, &record.title);

    let body = add_heading_ids(&format!(
        "{intro}{feature}{details}{cta}<h2>Frequently Asked Questions</h2>{faq}"
    ));

    let related_html = render_related_posts(related);
    let footer_note = page_copy
        .get("article_footer_note")
        .map(|note| {
            let ctx = PlaceholderContext::site(config, dates.year).with_record(record);
            format!("<p class='micro-note'>{}</p>", ctx.apply(note))
        })
        .unwrap_or_default();

    let main_html = format!(
        "<article class='article-card'>\
         <nav class='breadcrumb'><a href='index.html'>Home</a><span>/</span><span>{topic}</span></nav>\
         <h1>{h1}</h1>\
         <p class='meta-line'>Last updated: {updated} | Reviewed by {author}</p>\
         {disclosure}\
         <div class='article-body'>{body}</div>\
         {author_box}\
         {related}\
         {footer_note}\
         </article>",
        topic = escape_html(topic),
        h1 = escape_html(&h1),
        updated = escape_html(&dates.human),
        author = escape_html(&config.author_name),
        disclosure = render_disclosure_block(),
        body = body,
        author_box = render_author_box(config),
        related = related_html,
        footer_note = footer_note,
    );

    let article_url = absolute_url(&config.site_url, &record.article_path());
    let image_url = feature_image_url(config, record);
    let schema_objects = article_schema(
        config,
        &ArticleSchemaInput {
            article_title: &h1,
            article_description: &meta_desc,
            article_url: &article_url,
            updated_iso: &dates.iso,
            image_url: &image_url,
            keyword: &record.title,
        },
    );

    tracing::debug!(slug = %record.slug, related = related.len(), "rendering article page");

    render_layout(
        config,
        dates.year,
        &PageShell {
            page_title: meta_title,
            meta_description: meta_desc,
            current_path: record.article_path(),
            main_html,
            schema_objects,
            og_image_url: Some(image_url),
            noindex: false,
        },
    )
}

/// Absolute URL of the record's feature image, falling back to the site logo.
fn feature_image_url(config: &SiteConfig, record: &Record) -> String {
    match record.extras.get("image_url").map(|s| s.trim()) {
        Some(url) if url.starts_with("http://") || url.starts_with("https://") => url.to_string(),
        Some(url) if !url.is_empty() => absolute_url(&config.site_url, url),
        _ => absolute_url(&config.site_url, "assets/site-logo.svg"),
    }
}

/// The hero image block; empty when the record carries no image.
fn render_feature_image(record: &Record) -> String {
    match record.extras.get("image_url").map(|s| s.trim()) {
        Some(url) if !url.is_empty() => format!(
            "<figure class='feature-image'>\
             <img src='{src}' alt='{alt}' loading='eager' decoding='async'>\
             </figure>",
            src = escape_html(url),
            alt = escape_html(&record.title),
        ),
        _ => String::new(),
    }
}

/// Extra CSV columns become a "Key Details" list. Link-ish and image
/// columns are skipped; they render elsewhere.
fn render_key_details(record: &Record) -> String {
    let skipped = ["url", "product_url", "image_url", "keywords"];
    let rows: String = record
        .extras
        .iter()
        .filter(|(key, value)| !skipped.contains(&key.as_str()) && !value.trim().is_empty())
        .map(|(key, value)| {
            let label = key.replace('_', " ");
            format!(
                "<li><strong>{}:</strong> {}</li>",
                escape_html(&label),
                escape_html(value.trim())
            )
        })
        .collect();
    if rows.is_empty() {
        return String::new();
    }
    format!("<h2>Key Details</h2><ul class='key-details'>{rows}</ul>")
}

/// Outbound product button with the affiliate tag ensured on the URL.
fn render_product_cta(config: &SiteConfig, record: &Record) -> String {
    let raw = record
        .extras
        .get("product_url")
        .or_else(|| record.extras.get("url"))
        .map(|s| s.trim())
        .unwrap_or_default();
    if raw.is_empty() {
        return String::new();
    }
    let tagged = ensure_affiliate_tag(raw, &config.tag);
    format!(
        "<div class='product-cta'>\
         <a href='{href}' target='_blank' rel='nofollow sponsored noopener' class='buy-btn'>\
         Check Current Price</a>\
         </div>",
        href = escape_html(&tagged),
    )
}

/// Deterministic three-question FAQ block.
fn render_faq(seed: &str, slug: &str, title: &str) -> String {
    format!(
        "<h3>Q1: Is {title} a good choice for everyday use?</h3>\
         <p>A: It depends on your priorities, but {title} is usually a safe choice for \
         balanced quality and reliability.</p>\
         <h3>Q2: Are expensive options worth it?</h3><p>A: {worth}</p>\
         <h3>Q3: What should I avoid before buying?</h3><p>A: {avoid}</p>",
        title = escape_html(title),
        worth = escape_html(copybank::pick(seed, slug, "faq_worth", copybank::FAQ_WORTH_IT)),
        avoid = escape_html(copybank::pick(seed, slug, "faq_avoid", copybank::FAQ_AVOID)),
    )
}

/// The "Related Guides" card grid; empty when no related records exist.
pub fn render_related_posts(related: &[Record]) -> String {
    if related.is_empty() {
        return String::new();
    }
    let cards: String = related
        .iter()
        .map(|r| {
            format!(
                "<a class='related-item' href='{href}'>\
                 <div class='article-card-content'><h3>{title}</h3></div>\
                 </a>",
                href = escape_html(&r.article_path()),
                title = escape_html(&r.title),
            )
        })
        .collect();
    format!(
        "<section class='related-card'><h2>Related Guides</h2>\
         <div class='related-grid'>{cards}</div></section>"
    )
}
