//! Keyword relevance index for related-guide lookups.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use siteforge_shared::Record;

/// Tokens too generic to signal relatedness.
const STOP_WORDS: &[&str] = &[
    "for", "the", "and", "with", "best", "top", "guide", "in", "to", "of",
];

/// Minimum token length considered meaningful.
const MIN_TOKEN_LEN: usize = 3;

/// Keyword-token index over the loaded record sequence.
///
/// Built once after slug assignment; positions refer to the record slice it
/// was built from, and bucket insertion order follows load order so lookups
/// stay deterministic.
#[derive(Debug)]
pub struct RelevanceIndex {
    /// token → record positions that carry it, in load order.
    buckets: BTreeMap<String, Vec<usize>>,
    /// Per-position token sets, parallel to the source records.
    tokens: Vec<BTreeSet<String>>,
}

impl RelevanceIndex {
    /// Index every record's keyword tokens.
    pub fn build(records: &[Record]) -> Self {
        let mut buckets: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        let mut tokens = Vec::with_capacity(records.len());

        for (pos, record) in records.iter().enumerate() {
            let set = keyword_tokens(&record.keywords);
            for token in &set {
                buckets.entry(token.clone()).or_default().push(pos);
            }
            tokens.push(set);
        }

        debug!(
            records = records.len(),
            distinct_tokens = buckets.len(),
            "relevance index built"
        );
        Self { buckets, tokens }
    }

    /// Positions of up to `limit` records related to the record at `pos`.
    ///
    /// Candidates must share at least one keyword token. Ranking is by
    /// shared-token count descending, ties broken by the candidate's
    /// original load index ascending; the query record is excluded. Returns
    /// an empty vec when the record has no keywords or nothing overlaps.
    pub fn related_to(&self, records: &[Record], pos: usize, limit: usize) -> Vec<usize> {
        let Some(query_tokens) = self.tokens.get(pos) else {
            return Vec::new();
        };
        if query_tokens.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut scores: BTreeMap<usize, usize> = BTreeMap::new();
        for token in query_tokens {
            if let Some(candidates) = self.buckets.get(token) {
                for &candidate in candidates {
                    if candidate != pos {
                        *scores.entry(candidate).or_insert(0) += 1;
                    }
                }
            }
        }

        let mut ranked: Vec<(usize, usize)> = scores.into_iter().collect();
        ranked.sort_by(|(pos_a, score_a), (pos_b, score_b)| {
            score_b
                .cmp(score_a)
                .then_with(|| records[*pos_a].index.cmp(&records[*pos_b].index))
        });
        ranked.truncate(limit);
        ranked.into_iter().map(|(candidate, _)| candidate).collect()
    }
}

/// Tokenize keyword strings into lowercase alphanumeric runs, dropping
/// stop words and very short tokens.
fn keyword_tokens(keywords: &[String]) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    for keyword in keywords {
        let mut current = String::new();
        for ch in keyword.chars().flat_map(|c| c.to_lowercase()) {
            if ch.is_ascii_alphanumeric() {
                current.push(ch);
            } else if !current.is_empty() {
                push_token(&mut out, std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            push_token(&mut out, current);
        }
    }
    out
}

fn push_token(out: &mut BTreeSet<String>, token: String) {
    if token.len() >= MIN_TOKEN_LEN && !STOP_WORDS.contains(&token.as_str()) {
        out.insert(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap as Map;

    fn record(index: usize, keywords: &[&str]) -> Record {
        Record {
            index,
            title: format!("Record {index}"),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            slug: format!("record-{index}"),
            extras: Map::new(),
        }
    }

    #[test]
    fn ranks_by_overlap_then_load_order() {
        let records = vec![
            record(0, &["camping gear", "outdoor lights"]),
            record(1, &["camping stove"]),
            record(2, &["outdoor camping gear"]),
            record(3, &["office chair"]),
        ];
        let index = RelevanceIndex::build(&records);
        // Record 0 tokens: camping, gear, outdoor, lights.
        // Record 2 shares camping+gear+outdoor (3), record 1 shares camping (1).
        let related = index.related_to(&records, 0, 5);
        assert_eq!(related, vec![2, 1]);
    }

    #[test]
    fn ties_break_on_original_index() {
        let records = vec![
            record(0, &["solar lights"]),
            record(1, &["solar panel"]),
            record(2, &["solar charger"]),
        ];
        let index = RelevanceIndex::build(&records);
        let related = index.related_to(&records, 2, 5);
        // Both candidates share exactly one token ("solar"); load order wins.
        assert_eq!(related, vec![0, 1]);
    }

    #[test]
    fn respects_limit_and_excludes_self() {
        let records: Vec<_> = (0..10).map(|i| record(i, &["widget deluxe"])).collect();
        let index = RelevanceIndex::build(&records);
        let related = index.related_to(&records, 4, 3);
        assert_eq!(related.len(), 3);
        assert!(!related.contains(&4));
    }

    #[test]
    fn no_keywords_means_no_related() {
        let records = vec![record(0, &[]), record(1, &["camping gear"])];
        let index = RelevanceIndex::build(&records);
        assert!(index.related_to(&records, 0, 5).is_empty());
        // And nothing overlaps record 1 either.
        assert!(index.related_to(&records, 1, 5).is_empty());
    }

    #[test]
    fn stop_words_and_short_tokens_ignored() {
        let records = vec![
            record(0, &["best planner for the office"]),
            record(1, &["top planner guide"]),
        ];
        let index = RelevanceIndex::build(&records);
        // Only "planner" and "office" survive tokenization for record 0.
        let related = index.related_to(&records, 0, 5);
        assert_eq!(related, vec![1]);
    }
}
