//! Home and paginated listing ("all guides") pages.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use siteforge_shared::{Record, SiteConfig, default_page_copy};

use crate::RenderDates;
use crate::layout::{PageShell, escape_html, render_layout};
use crate::placeholders::PlaceholderContext;
use crate::schema::website_schema;

static DEFAULT_COPY: LazyLock<BTreeMap<String, String>> = LazyLock::new(default_page_copy);

/// Fetch an auxiliary copy fragment, falling back to the built-in default.
/// Only the six static `*_html` body keys are hard-required; hero and CTA
/// strings degrade gracefully.
fn copy_or_default<'a>(page_copy: &'a BTreeMap<String, String>, key: &str) -> &'a str {
    page_copy
        .get(key)
        .or_else(|| DEFAULT_COPY.get(key))
        .map(String::as_str)
        .unwrap_or_default()
}

/// One listing card shared by the home grid and the guides pages.
fn render_card(record: &Record, cta: &str) -> String {
    format!(
        "<a class='article-link-card article-card-item' href='{href}' data-title='{title}'>\
         <div class='article-card-content'>\
         <h3>{title}</h3>\
         <p>Comparison, buying guide, FAQ and final verdict.</p>\
         <span class='card-cta'>{cta}</span>\
         </div></a>",
        href = escape_html(&record.article_path()),
        title = escape_html(&record.title),
        cta = escape_html(cta),
    )
}

/// Render the home page: hero, client-side search, the first
/// `home_cards_limit` records as cards, and the important-pages block.
pub fn render_home_page(
    config: &SiteConfig,
    dates: &RenderDates,
    visible: &[Record],
    total_surfaced: usize,
    page_copy: &BTreeMap<String, String>,
) -> String {
    let ctx = PlaceholderContext::site(config, dates.year);
    let kicker = ctx.apply(copy_or_default(page_copy, "home_hero_kicker"));
    let mut hero_title = ctx.apply(copy_or_default(page_copy, "home_hero_title"));
    if hero_title.trim().is_empty() {
        hero_title = config.site_name.clone();
    }
    let hero_intro = ctx.apply(copy_or_default(page_copy, "home_hero_intro"));
    let search_placeholder = ctx.apply(copy_or_default(page_copy, "home_search_placeholder"));

    let cards: String = visible
        .iter()
        .map(|r| render_card(r, "See Top Picks"))
        .collect();
    let hidden_count = total_surfaced.saturating_sub(visible.len());
    let hidden_note = if hidden_count > 0 {
        format!(
            "<p class='micro-note'>{hidden_count} additional guides are available. \
             <a href='all-guides.html'>Browse all guides</a>.</p>"
        )
    } else {
        String::new()
    };

    let important_links = "<a href='all-guides.html'>Best Picks</a>\
         <a href='about.html'>About</a>\
         <a href='contact.html'>Contact</a>\
         <a href='affiliate-disclosure.html'>Affiliate Disclosure</a>\
         <a href='editorial-policy.html'>Editorial Policy</a>\
         <a href='privacy-policy.html'>Privacy Policy</a>\
         <a href='terms-of-use.html'>Terms of Use</a>";

    let main_html = format!(
        "<section class='hero-card'>\
         <span class='hero-kicker'>{kicker}</span>\
         <h1>{title}</h1>\
         <p>{intro}</p>\
         <div class='hero-search-wrap'>\
         <input id='pageSearch' class='search-input' placeholder='{placeholder}'></div>\
         </section>\
         <section class='content-card'>\
         <h2>{latest}</h2>\
         <div class='article-grid' id='articleGrid'>{cards}</div>\
         {hidden_note}\
         <script>\
         const q=document.getElementById('pageSearch');\
         const items=[...document.querySelectorAll('.article-card-item')];\
         q?.addEventListener('input',()=>{{const v=q.value.trim().toLowerCase();\
         items.forEach(it=>{{const t=(it.dataset.title||'').toLowerCase();\
         it.style.display=t.includes(v)?'block':'none';}});}});\
         </script>\
         </section>\
         <section class='content-card'>\
         <h3>{important}</h3>\
         <div class='final-link-grid'>{links}</div>\
         <div class='final-contact'>Need a correction? Email \
         <a href='mailto:{email}'>{email}</a>.</div>\
         </section>",
        kicker = kicker,
        title = escape_html(&hero_title),
        intro = escape_html(&hero_intro),
        placeholder = escape_html(&search_placeholder),
        latest = escape_html(copy_or_default(page_copy, "home_latest_guides_title")),
        cards = cards,
        hidden_note = hidden_note,
        important = escape_html(copy_or_default(page_copy, "home_important_pages_title")),
        links = important_links,
        email = escape_html(&config.contact_email),
    );

    render_layout(
        config,
        dates.year,
        &PageShell {
            page_title: format!("{} | Product Comparisons and Buying Guides", config.site_name),
            meta_description: "Structured product comparisons, buying guides, and legal \
                               disclosures."
                .into(),
            current_path: "index.html".into(),
            main_html,
            schema_objects: website_schema(config),
            og_image_url: None,
            noindex: false,
        },
    )
}

/// Output path for listing page `n` (1-based).
pub fn listing_path(page_number: usize) -> String {
    if page_number == 1 {
        "all-guides.html".to_string()
    } else {
        format!("all-guides-{page_number}.html")
    }
}

/// Render one paginated guides page.
pub fn render_guides_page(
    config: &SiteConfig,
    dates: &RenderDates,
    page_items: &[Record],
    page_number: usize,
    total_pages: usize,
    page_copy: &BTreeMap<String, String>,
) -> String {
    let ctx = PlaceholderContext::site(config, dates.year);
    let cta = ctx.apply(copy_or_default(page_copy, "guides_card_cta_text"));
    let cards: String = page_items.iter().map(|r| render_card(r, &cta)).collect();

    let mut controls = String::from("<div class='footer-links'>");
    if page_number > 1 {
        controls.push_str(&format!(
            "<a href='{}'>Previous</a>",
            escape_html(&listing_path(page_number - 1))
        ));
    }
    controls.push_str(&format!("<span>Page {page_number} of {total_pages}</span>"));
    if page_number < total_pages {
        controls.push_str(&format!(
            "<a href='{}'>Next</a>",
            escape_html(&listing_path(page_number + 1))
        ));
    }
    controls.push_str("</div>");

    let main_html = format!(
        "<section class='content-card'>\
         <h1>{title}</h1>\
         <p>{intro}</p>\
         {controls}\
         <div class='article-grid'>{cards}</div>\
         {controls}\
         </section>",
        title = ctx.apply(copy_or_default(page_copy, "guides_index_title")),
        intro = ctx.apply(copy_or_default(page_copy, "guides_index_intro")),
        controls = controls,
        cards = cards,
    );

    render_layout(
        config,
        dates.year,
        &PageShell {
            page_title: format!(
                "All Guides - Page {page_number} | {}",
                config.site_name
            ),
            meta_description: format!(
                "Browse page {page_number} of all buying guides on {}.",
                config.site_name
            ),
            current_path: listing_path(page_number),
            main_html,
            schema_objects: Vec::new(),
            og_image_url: None,
            noindex: false,
        },
    )
}
