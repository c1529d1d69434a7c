//! End-to-end generation pipeline: CSV → records → slugs → relevance →
//! plan → render → report.
//!
//! `generate` is a pure function of (CSV contents, config, dates): it does
//! no filesystem writes of its own and returns the full `(path, content)`
//! set plus the generation report. Persistence lives in
//! `siteforge-artifacts`; the CLI wires the two together.

use std::path::Path;

use chrono::{Datelike, SecondsFormat, Utc};
use tracing::{info, instrument, warn};

use siteforge_artifacts::{GenerationReport, ReportInput, build_report};
use siteforge_render::{
    RenderDates, render_article_page, render_guides_page, render_home_page,
};
use siteforge_render::assets::{SITE_CSS, SITE_LOGO_SVG};
use siteforge_render::sitemap::{render_index, render_urlset};
use siteforge_render::statics::{headers_file, redirects_file, render_static_page, robots_txt};
use siteforge_shared::{FileOutput, PageFailure, Record, Result, SiteConfig, absolute_url};

use crate::loader::load_records;
use crate::planner::{PlanEntry, SitemapPlan, plan, plan_sitemaps};
use crate::relevance::RelevanceIndex;
use crate::slug::assign_slugs;

/// Result of one generation run.
#[derive(Debug)]
pub struct GenerateOutcome {
    /// Every output file, in plan order (sitemaps last).
    pub outputs: Vec<FileOutput>,
    /// The aggregated generation report.
    pub report: GenerationReport,
    /// Canonical URLs of all emitted HTML pages, sorted — the list the
    /// IndexNow collaborator submits.
    pub urls: Vec<String>,
}

/// Resolve the wall-clock strings for this run.
pub fn current_dates() -> RenderDates {
    let now = Utc::now();
    RenderDates {
        year: now.year(),
        date: now.format("%Y-%m-%d").to_string(),
        human: now.format("%B %d, %Y").to_string(),
        iso: now.to_rfc3339_opts(SecondsFormat::Secs, true),
    }
}

/// Run the full generation pipeline.
///
/// Configuration errors abort before any output exists. Row-level and
/// page-level failures are recovered locally and recorded in the report.
#[instrument(skip_all, fields(input = %config.input, site = %config.site_name))]
pub fn generate(config: &SiteConfig, dates: &RenderDates) -> Result<GenerateOutcome> {
    config.validate()?;

    // --- Load and normalize records ---
    let filter = config.keyword_filter();
    let mut outcome = load_records(Path::new(&config.input), &filter)?;
    let records = assign_slugs(std::mem::take(&mut outcome.records), &mut outcome.skipped);

    // --- Relevance index + page plan (strictly sequential) ---
    let index = RelevanceIndex::build(&records);
    let entries = plan(&records, config, &index);

    // --- Render planned pages ---
    let mut outputs: Vec<FileOutput> = Vec::with_capacity(entries.len() + 2);
    let mut template_failures: Vec<PageFailure> = Vec::new();

    for entry in &entries {
        let path = entry.path(&records);
        let content = match entry {
            PlanEntry::Article { position, related } => {
                let related_records: Vec<Record> =
                    related.iter().map(|&pos| records[pos].clone()).collect();
                render_article_page(
                    config,
                    dates,
                    &records[*position],
                    &related_records,
                    &config.page_copy,
                )
            }
            PlanEntry::Home {
                positions,
                total_surfaced,
            } => {
                let visible: Vec<Record> =
                    positions.iter().map(|&pos| records[pos].clone()).collect();
                render_home_page(config, dates, &visible, *total_surfaced, &config.page_copy)
            }
            PlanEntry::Listing {
                page_number,
                total_pages,
                positions,
            } => {
                let items: Vec<Record> =
                    positions.iter().map(|&pos| records[pos].clone()).collect();
                render_guides_page(
                    config,
                    dates,
                    &items,
                    *page_number,
                    *total_pages,
                    &config.page_copy,
                )
            }
            PlanEntry::StaticPage { spec } => {
                match render_static_page(config, dates, spec, &config.page_copy) {
                    Ok(html) => html,
                    Err(e) => {
                        warn!(path = %path, error = %e, "static page omitted");
                        template_failures.push(PageFailure {
                            path: path.clone(),
                            reason: e.to_string(),
                        });
                        continue;
                    }
                }
            }
            PlanEntry::Robots => robots_txt(config),
            PlanEntry::Headers => headers_file(),
            PlanEntry::Redirects => redirects_file(),
            PlanEntry::AssetCss => SITE_CSS.to_string(),
            PlanEntry::AssetLogo => SITE_LOGO_SVG.to_string(),
        };
        outputs.push(FileOutput {
            path,
            kind: entry.kind(),
            content,
        });
    }

    // --- Sitemaps over the pages that actually rendered ---
    let page_paths: Vec<String> = outputs
        .iter()
        .filter(|o| o.kind.in_sitemap())
        .map(|o| o.path.clone())
        .collect();

    for sitemap in plan_sitemaps(&page_paths, config.sitemap_chunk_size) {
        let content = match &sitemap {
            SitemapPlan::Single { pages, .. } | SitemapPlan::Shard { pages, .. } => {
                render_urlset(&config.site_url, pages, &dates.date)
            }
            SitemapPlan::Index { shards, .. } => {
                render_index(&config.site_url, shards, &dates.date)
            }
        };
        outputs.push(FileOutput {
            path: sitemap.path().to_string(),
            kind: sitemap.kind(),
            content,
        });
    }

    // --- Canonical URL list for the IndexNow collaborator ---
    let mut urls: Vec<String> = page_paths
        .iter()
        .map(|path| absolute_url(&config.site_url, path))
        .collect();
    urls.sort();
    urls.dedup();

    let report = build_report(ReportInput {
        config,
        outputs: &outputs,
        skipped: &outcome.skipped,
        template_failures: &template_failures,
        filtered_out: outcome.filtered_out,
        generated_at: dates.iso.clone(),
    });

    info!(
        articles = records.len(),
        files = outputs.len(),
        skipped = outcome.skipped.len(),
        template_failures = template_failures.len(),
        "generation complete"
    );

    Ok(GenerateOutcome {
        outputs,
        report,
        urls,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use siteforge_shared::PageKind;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_csv(tag: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "siteforge-pipeline-{tag}-{}.csv",
            std::process::id()
        ));
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    fn dates() -> RenderDates {
        RenderDates {
            year: 2026,
            date: "2026-08-06".into(),
            human: "August 06, 2026".into(),
            iso: "2026-08-06T00:00:00Z".into(),
        }
    }

    fn config_for(csv: &Path) -> SiteConfig {
        SiteConfig {
            input: csv.to_string_lossy().to_string(),
            site_url: "https://example.com".into(),
            ..SiteConfig::default()
        }
    }

    const SAMPLE: &str = "title,keywords,rating\n\
        Best Planner,\"planner, office\",4.6\n\
        best planner!!,\"planner, desk\",4.1\n\
        Solar Garden Lights,\"garden, solar\",4.4\n";

    #[test]
    fn generates_articles_statics_and_sitemap() {
        let csv = write_csv("basic", SAMPLE);
        let outcome = generate(&config_for(&csv), &dates()).unwrap();

        let paths: Vec<&str> = outcome.outputs.iter().map(|o| o.path.as_str()).collect();
        assert!(paths.contains(&"best-planner.html"));
        assert!(paths.contains(&"best-planner-2.html"));
        assert!(paths.contains(&"solar-garden-lights.html"));
        assert!(paths.contains(&"index.html"));
        assert!(paths.contains(&"all-guides.html"));
        assert!(paths.contains(&"privacy-policy.html"));
        assert!(paths.contains(&"robots.txt"));
        assert!(paths.contains(&"_headers"));
        assert!(paths.contains(&"_redirects"));
        assert!(paths.contains(&"assets/site.css"));
        assert!(paths.contains(&"sitemap.xml"));
        let _ = std::fs::remove_file(&csv);
    }

    #[test]
    fn article_paths_are_unique() {
        let csv = write_csv("unique", SAMPLE);
        let outcome = generate(&config_for(&csv), &dates()).unwrap();
        let mut article_paths: Vec<&str> = outcome
            .outputs
            .iter()
            .filter(|o| o.kind == PageKind::Article)
            .map(|o| o.path.as_str())
            .collect();
        let total = article_paths.len();
        article_paths.sort();
        article_paths.dedup();
        assert_eq!(article_paths.len(), total);
        let _ = std::fs::remove_file(&csv);
    }

    #[test]
    fn generate_is_byte_identical_across_runs() {
        let csv = write_csv("determinism", SAMPLE);
        let config = config_for(&csv);
        let a = generate(&config, &dates()).unwrap();
        let b = generate(&config, &dates()).unwrap();
        assert_eq!(a.outputs, b.outputs);
        assert_eq!(a.urls, b.urls);
        let _ = std::fs::remove_file(&csv);
    }

    #[test]
    fn sitemap_covers_exactly_the_emitted_pages() {
        let csv = write_csv("coverage", SAMPLE);
        let outcome = generate(&config_for(&csv), &dates()).unwrap();

        let sitemap = outcome
            .outputs
            .iter()
            .find(|o| o.path == "sitemap.xml")
            .unwrap();
        for output in outcome
            .outputs
            .iter()
            .filter(|o| o.kind.in_sitemap())
        {
            let url = absolute_url("https://example.com", &output.path);
            assert!(
                sitemap.content.contains(&format!("<loc>{url}</loc>")),
                "sitemap missing {url}"
            );
        }
        // And nothing that is not a page.
        assert!(!sitemap.content.contains("robots.txt"));
        assert!(!sitemap.content.contains("site.css"));
        let _ = std::fs::remove_file(&csv);
    }

    #[test]
    fn missing_privacy_copy_omits_page_and_reports_it() {
        let csv = write_csv("missingcopy", SAMPLE);
        let mut config = config_for(&csv);
        config.page_copy.remove("privacy_html");

        let outcome = generate(&config, &dates()).unwrap();
        let paths: Vec<&str> = outcome.outputs.iter().map(|o| o.path.as_str()).collect();
        assert!(!paths.contains(&"privacy-policy.html"));
        assert!(paths.contains(&"about.html"));
        assert!(paths.contains(&"terms-of-use.html"));

        assert_eq!(outcome.report.template_failures.len(), 1);
        assert_eq!(
            outcome.report.template_failures[0].path,
            "privacy-policy.html"
        );

        // The omitted page must not appear in the sitemap either.
        let sitemap = outcome
            .outputs
            .iter()
            .find(|o| o.path == "sitemap.xml")
            .unwrap();
        assert!(!sitemap.content.contains("privacy-policy"));
        let _ = std::fs::remove_file(&csv);
    }

    #[test]
    fn keyword_filter_flows_through_pipeline() {
        let csv = write_csv(
            "filter",
            "title,keywords\n\
             Tent,\"camping, outdoor\"\n\
             Desk Chair,office\n\
             Camp Stove,\"travel, camping gear\"\n",
        );
        let mut config = config_for(&csv);
        config.keywords = vec!["camping".into()];

        let outcome = generate(&config, &dates()).unwrap();
        let articles: Vec<&str> = outcome
            .outputs
            .iter()
            .filter(|o| o.kind == PageKind::Article)
            .map(|o| o.path.as_str())
            .collect();
        assert_eq!(articles, vec!["tent.html", "camp-stove.html"]);
        assert_eq!(outcome.report.filtered_out, 1);
        let _ = std::fs::remove_file(&csv);
    }

    #[test]
    fn large_sites_shard_the_sitemap() {
        let mut content = String::from("title,keywords\n");
        for i in 0..120 {
            content.push_str(&format!("Product {i:03},widget\n"));
        }
        let csv = write_csv("shards", &content);
        let mut config = config_for(&csv);
        config.top_n = 200;
        config.sitemap_chunk_size = 50;

        let outcome = generate(&config, &dates()).unwrap();
        let shard_count = outcome
            .outputs
            .iter()
            .filter(|o| o.kind == PageKind::SitemapShard)
            .count();
        // 120 articles + home + listing + 6 statics = 128 pages → 3 shards.
        assert_eq!(shard_count, 3);
        let index = outcome
            .outputs
            .iter()
            .find(|o| o.kind == PageKind::SitemapIndex)
            .unwrap();
        assert_eq!(index.path, "sitemap.xml");
        assert!(index.content.contains("sitemap-3.xml"));
        let _ = std::fs::remove_file(&csv);
    }

    #[test]
    fn urls_are_sorted_canonical_and_deduplicated() {
        let csv = write_csv("urls", SAMPLE);
        let outcome = generate(&config_for(&csv), &dates()).unwrap();
        let mut sorted = outcome.urls.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(outcome.urls, sorted);
        assert!(outcome.urls.iter().all(|u| u.starts_with("https://example.com/")));
        assert!(outcome.urls.contains(&"https://example.com/".to_string()));
        let _ = std::fs::remove_file(&csv);
    }

    #[test]
    fn report_counts_match_outputs() {
        let csv = write_csv("report", SAMPLE);
        let outcome = generate(&config_for(&csv), &dates()).unwrap();
        assert_eq!(outcome.report.count_total, outcome.outputs.len());
        assert_eq!(outcome.report.counts.get("article"), Some(&3));
        assert_eq!(outcome.report.counts.get("static_page"), Some(&6));
        assert_eq!(outcome.report.counts.get("home"), Some(&1));
        let _ = std::fs::remove_file(&csv);
    }
}
