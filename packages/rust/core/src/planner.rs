//! Page planning: decide the full set of logical pages to emit.
//!
//! Planning is strictly sequential and order-sensitive (slug collision
//! order and relevance tie-breaks both depend on load order), so it runs
//! before any rendering. Sitemap planning is a second step over the set of
//! pages that actually rendered, keeping sitemap completeness exact even
//! when individual pages fail.

use tracing::debug;

use siteforge_render::statics::{STATIC_PAGES, StaticPageSpec};
use siteforge_render::listing_path;
use siteforge_shared::{PageKind, Record, SiteConfig};

use crate::relevance::RelevanceIndex;

/// One planned output unit, prior to rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanEntry {
    /// One article per surviving record, with its related-record positions.
    Article {
        position: usize,
        related: Vec<usize>,
    },
    /// The home page card slice (positions into the surfaced set).
    Home {
        positions: Vec<usize>,
        total_surfaced: usize,
    },
    /// One paginated listing page.
    Listing {
        page_number: usize,
        total_pages: usize,
        positions: Vec<usize>,
    },
    /// One static copy page.
    StaticPage { spec: &'static StaticPageSpec },
    Robots,
    Headers,
    Redirects,
    AssetCss,
    AssetLogo,
}

impl PlanEntry {
    /// Target output path for this entry.
    pub fn path(&self, records: &[Record]) -> String {
        match self {
            Self::Article { position, .. } => records[*position].article_path(),
            Self::Home { .. } => "index.html".to_string(),
            Self::Listing { page_number, .. } => listing_path(*page_number),
            Self::StaticPage { spec } => spec.path.to_string(),
            Self::Robots => "robots.txt".to_string(),
            Self::Headers => "_headers".to_string(),
            Self::Redirects => "_redirects".to_string(),
            Self::AssetCss => "assets/site.css".to_string(),
            Self::AssetLogo => "assets/site-logo.svg".to_string(),
        }
    }

    /// Output classification for report counts and sitemap membership.
    pub fn kind(&self) -> PageKind {
        match self {
            Self::Article { .. } => PageKind::Article,
            Self::Home { .. } => PageKind::Home,
            Self::Listing { .. } => PageKind::Listing,
            Self::StaticPage { .. } => PageKind::StaticPage,
            Self::Robots => PageKind::Robots,
            Self::Headers => PageKind::Headers,
            Self::Redirects => PageKind::Redirects,
            Self::AssetCss | Self::AssetLogo => PageKind::Asset,
        }
    }
}

/// Plan every page except sitemaps (see [`plan_sitemaps`]).
///
/// Articles cover all surviving records. Listing and home pages cover the
/// surfaced set: records in load order (or title order when `sort_key` is
/// `"title"`), bounded by `top_n` before pagination.
pub fn plan(records: &[Record], config: &SiteConfig, index: &RelevanceIndex) -> Vec<PlanEntry> {
    let mut entries = Vec::new();

    for position in 0..records.len() {
        entries.push(PlanEntry::Article {
            position,
            related: index.related_to(records, position, config.related_links_count),
        });
    }

    let surfaced = surfaced_positions(records, config);

    let home_count = surfaced.len().min(config.home_cards_limit);
    entries.push(PlanEntry::Home {
        positions: surfaced[..home_count].to_vec(),
        total_surfaced: surfaced.len(),
    });

    let mut chunks: Vec<Vec<usize>> = surfaced
        .chunks(config.guides_page_size.max(1))
        .map(|chunk| chunk.to_vec())
        .collect();
    if chunks.is_empty() {
        // An empty record set still gets its listing page so nav links hold.
        chunks.push(Vec::new());
    }
    let total_pages = chunks.len();
    for (i, positions) in chunks.into_iter().enumerate() {
        entries.push(PlanEntry::Listing {
            page_number: i + 1,
            total_pages,
            positions,
        });
    }

    for spec in STATIC_PAGES {
        entries.push(PlanEntry::StaticPage { spec });
    }
    entries.push(PlanEntry::Robots);
    entries.push(PlanEntry::Headers);
    entries.push(PlanEntry::Redirects);
    entries.push(PlanEntry::AssetCss);
    entries.push(PlanEntry::AssetLogo);

    debug!(
        articles = records.len(),
        surfaced = surfaced.len(),
        listing_pages = total_pages,
        total_entries = entries.len(),
        "page plan built"
    );
    entries
}

/// The record positions surfaced in home/listing pages: optionally
/// re-ordered by the configured sort key, then bounded by `top_n`.
fn surfaced_positions(records: &[Record], config: &SiteConfig) -> Vec<usize> {
    let mut positions: Vec<usize> = (0..records.len()).collect();
    if config.sort_key.as_deref() == Some("title") {
        positions.sort_by(|&a, &b| {
            let ta = records[a].title.to_lowercase();
            let tb = records[b].title.to_lowercase();
            ta.cmp(&tb).then_with(|| records[a].index.cmp(&records[b].index))
        });
    }
    positions.truncate(config.top_n);
    positions
}

// ---------------------------------------------------------------------------
// Sitemap planning
// ---------------------------------------------------------------------------

/// One planned sitemap file.
#[derive(Debug, Clone, PartialEq)]
pub enum SitemapPlan {
    /// All URLs fit in one `sitemap.xml` urlset.
    Single { path: String, pages: Vec<String> },
    /// A numbered shard of the page set.
    Shard { path: String, pages: Vec<String> },
    /// The `sitemap.xml` index referencing every shard.
    Index { path: String, shards: Vec<String> },
}

impl SitemapPlan {
    pub fn path(&self) -> &str {
        match self {
            Self::Single { path, .. } | Self::Shard { path, .. } | Self::Index { path, .. } => path,
        }
    }

    pub fn kind(&self) -> PageKind {
        match self {
            Self::Shard { .. } => PageKind::SitemapShard,
            Self::Single { .. } | Self::Index { .. } => PageKind::SitemapIndex,
        }
    }
}

/// Partition the emitted page paths into sitemap files.
///
/// Paths are sorted and deduplicated first so shard contents are stable.
/// At most `chunk_size` URLs go into one file; above that, numbered shards
/// plus one index are planned.
pub fn plan_sitemaps(page_paths: &[String], chunk_size: usize) -> Vec<SitemapPlan> {
    let mut pages: Vec<String> = page_paths.to_vec();
    pages.sort();
    pages.dedup();

    let chunk_size = chunk_size.max(1);
    if pages.len() <= chunk_size {
        return vec![SitemapPlan::Single {
            path: "sitemap.xml".to_string(),
            pages,
        }];
    }

    let mut plans = Vec::new();
    let mut shard_names = Vec::new();
    for (i, chunk) in pages.chunks(chunk_size).enumerate() {
        let name = format!("sitemap-{}.xml", i + 1);
        shard_names.push(name.clone());
        plans.push(SitemapPlan::Shard {
            path: name,
            pages: chunk.to_vec(),
        });
    }
    plans.push(SitemapPlan::Index {
        path: "sitemap.xml".to_string(),
        shards: shard_names,
    });
    plans
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn records(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| Record {
                index: i,
                title: format!("Guide {i:03}"),
                keywords: vec![format!("topic-{}", i % 3)],
                slug: format!("guide-{i:03}"),
                extras: BTreeMap::new(),
            })
            .collect()
    }

    fn config() -> SiteConfig {
        SiteConfig {
            top_n: 100,
            home_cards_limit: 4,
            guides_page_size: 3,
            ..SiteConfig::default()
        }
    }

    #[test]
    fn one_article_entry_per_record() {
        let records = records(5);
        let index = RelevanceIndex::build(&records);
        let entries = plan(&records, &config(), &index);
        let articles = entries
            .iter()
            .filter(|e| matches!(e, PlanEntry::Article { .. }))
            .count();
        assert_eq!(articles, 5);
    }

    #[test]
    fn pagination_reconstructs_surfaced_set_exactly() {
        let records = records(10);
        let index = RelevanceIndex::build(&records);
        let entries = plan(&records, &config(), &index);

        let mut concatenated = Vec::new();
        for entry in &entries {
            if let PlanEntry::Listing { positions, .. } = entry {
                concatenated.extend_from_slice(positions);
            }
        }
        assert_eq!(concatenated, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn top_n_bounds_listings_before_pagination_not_articles() {
        let records = records(10);
        let index = RelevanceIndex::build(&records);
        let cfg = SiteConfig {
            top_n: 7,
            guides_page_size: 3,
            ..config()
        };
        let entries = plan(&records, &cfg, &index);

        let articles = entries
            .iter()
            .filter(|e| matches!(e, PlanEntry::Article { .. }))
            .count();
        assert_eq!(articles, 10);

        let listed: usize = entries
            .iter()
            .filter_map(|e| match e {
                PlanEntry::Listing { positions, .. } => Some(positions.len()),
                _ => None,
            })
            .sum();
        assert_eq!(listed, 7);

        let pages = entries
            .iter()
            .filter(|e| matches!(e, PlanEntry::Listing { .. }))
            .count();
        assert_eq!(pages, 3); // ceil(7 / 3)
    }

    #[test]
    fn statics_planned_exactly_once_regardless_of_records() {
        for n in [0usize, 1, 25] {
            let records = records(n);
            let index = RelevanceIndex::build(&records);
            let entries = plan(&records, &config(), &index);
            let statics = entries
                .iter()
                .filter(|e| matches!(e, PlanEntry::StaticPage { .. }))
                .count();
            assert_eq!(statics, 6);
            let robots = entries.iter().filter(|e| matches!(e, PlanEntry::Robots)).count();
            assert_eq!(robots, 1);
        }
    }

    #[test]
    fn listing_paths_number_from_page_two() {
        let records = records(7);
        let index = RelevanceIndex::build(&records);
        let entries = plan(&records, &config(), &index);
        let paths: Vec<String> = entries
            .iter()
            .filter(|e| matches!(e, PlanEntry::Listing { .. }))
            .map(|e| e.path(&records))
            .collect();
        assert_eq!(
            paths,
            vec!["all-guides.html", "all-guides-2.html", "all-guides-3.html"]
        );
    }

    #[test]
    fn title_sort_key_reorders_surfaced_set() {
        let mut recs = records(3);
        recs[0].title = "Zebra Guide".into();
        recs[2].title = "Alpha Guide".into();
        let index = RelevanceIndex::build(&recs);
        let cfg = SiteConfig {
            sort_key: Some("title".into()),
            ..config()
        };
        let entries = plan(&recs, &cfg, &index);
        let home_positions = entries
            .iter()
            .find_map(|e| match e {
                PlanEntry::Home { positions, .. } => Some(positions.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(home_positions, vec![2, 1, 0]);
    }

    #[test]
    fn plan_is_deterministic() {
        let records = records(12);
        let index = RelevanceIndex::build(&records);
        let a = plan(&records, &config(), &index);
        let b = plan(&records, &config(), &index);
        assert_eq!(a, b);
    }

    #[test]
    fn small_page_set_yields_single_sitemap() {
        let paths: Vec<String> = (0..10).map(|i| format!("page-{i}.html")).collect();
        let plans = plan_sitemaps(&paths, 100);
        assert_eq!(plans.len(), 1);
        assert!(matches!(&plans[0], SitemapPlan::Single { path, pages }
            if path == "sitemap.xml" && pages.len() == 10));
    }

    #[test]
    fn sharding_scenario_250_urls_chunk_100() {
        let paths: Vec<String> = (0..250).map(|i| format!("page-{i:04}.html")).collect();
        let plans = plan_sitemaps(&paths, 100);

        let shards: Vec<_> = plans
            .iter()
            .filter(|p| matches!(p, SitemapPlan::Shard { .. }))
            .collect();
        assert_eq!(shards.len(), 3);

        let index = plans
            .iter()
            .find_map(|p| match p {
                SitemapPlan::Index { path, shards } => Some((path.clone(), shards.clone())),
                _ => None,
            })
            .unwrap();
        assert_eq!(index.0, "sitemap.xml");
        assert_eq!(
            index.1,
            vec!["sitemap-1.xml", "sitemap-2.xml", "sitemap-3.xml"]
        );

        // Completeness: the union of shard pages is exactly the input set.
        let mut union: Vec<String> = plans
            .iter()
            .filter_map(|p| match p {
                SitemapPlan::Shard { pages, .. } => Some(pages.clone()),
                _ => None,
            })
            .flatten()
            .collect();
        union.sort();
        let mut expected = paths.clone();
        expected.sort();
        assert_eq!(union, expected);
    }

    #[test]
    fn sitemap_paths_are_deduplicated() {
        let paths = vec![
            "a.html".to_string(),
            "b.html".to_string(),
            "a.html".to_string(),
        ];
        let plans = plan_sitemaps(&paths, 100);
        assert!(matches!(&plans[0], SitemapPlan::Single { pages, .. } if pages.len() == 2));
    }
}
