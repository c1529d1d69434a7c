//! IndexNow submission client.
//!
//! Notifies a discovery endpoint about the canonical URLs a generation run
//! produced. The generation pipeline never touches the network; only this
//! collaborator does, and only when a key is configured and submission is
//! requested. Batch failures are tallied into the outcome instead of
//! aborting, so one bad batch never hides the rest of the submission.

use serde::Serialize;
use tracing::{info, warn};

use siteforge_shared::{SiteConfig, absolute_url, site_host};

/// User agent sent with submission requests.
const USER_AGENT: &str = concat!("siteforge-indexnow/", env!("CARGO_PKG_VERSION"));

/// Summary of one submission attempt, embedded in the generation report.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SubmitOutcome {
    /// Whether a key was configured at all.
    pub enabled: bool,
    /// True when every batch was accepted and at least one URL went out.
    pub submitted: bool,
    /// Endpoint the batches were POSTed to.
    pub endpoint: String,
    /// Host field of the payload.
    pub host: String,
    /// Resolved public key file location.
    pub key_location: String,
    /// Number of batches attempted.
    pub batch_count: usize,
    /// URLs accepted across all batches.
    pub submitted_url_count: usize,
    /// Batches that failed or were rejected.
    pub failed_batches: usize,
    /// HTTP status of the last completed request (0 = none).
    pub last_status_code: u16,
    /// First error encountered, empty on full success.
    pub error: String,
}

/// Resolve the public location of the IndexNow key file.
///
/// An explicit absolute URL wins; a relative path resolves against the
/// site URL; empty derives `<site_url>/<key>.txt`.
pub fn resolve_key_location(config: &SiteConfig) -> String {
    let custom = config.indexnow.key_location.trim();
    if custom.is_empty() {
        return absolute_url(&config.site_url, &format!("{}.txt", config.indexnow.key.trim()));
    }
    if custom.starts_with("http://") || custom.starts_with("https://") {
        return custom.to_string();
    }
    absolute_url(&config.site_url, custom)
}

/// Deduplicate, sort, and batch the URL list for submission.
fn prepare_batches(urls: &[String], batch_size: usize) -> Vec<Vec<String>> {
    let mut list: Vec<String> = urls
        .iter()
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .collect();
    list.sort();
    list.dedup();

    let batch_size = batch_size.max(1);
    list.chunks(batch_size).map(|c| c.to_vec()).collect()
}

/// Submit the URL list to the configured IndexNow endpoint.
///
/// Never returns an error: everything that went wrong is folded into the
/// outcome so the caller can persist it in the generation report.
pub async fn submit(config: &SiteConfig, urls: &[String]) -> SubmitOutcome {
    let mut outcome = SubmitOutcome {
        enabled: !config.indexnow.key.trim().is_empty(),
        endpoint: config.indexnow.endpoint.trim().to_string(),
        host: site_host(&config.site_url),
        ..SubmitOutcome::default()
    };
    if outcome.endpoint.is_empty() {
        outcome.endpoint = "https://api.indexnow.org/indexnow".to_string();
    }

    let key = config.indexnow.key.trim();
    if key.is_empty() {
        outcome.error = "indexnow_key_missing".into();
        return outcome;
    }

    let batches = prepare_batches(urls, config.indexnow.batch_size);
    if batches.is_empty() {
        outcome.error = "url_list_empty".into();
        return outcome;
    }
    outcome.key_location = resolve_key_location(config);
    outcome.batch_count = batches.len();

    let client = match reqwest::Client::builder().user_agent(USER_AGENT).build() {
        Ok(client) => client,
        Err(e) => {
            outcome.error = format!("client_build: {e}");
            outcome.failed_batches = batches.len();
            return outcome;
        }
    };

    for batch in &batches {
        let payload = serde_json::json!({
            "host": outcome.host,
            "key": key,
            "keyLocation": outcome.key_location,
            "urlList": batch,
        });

        let response = client
            .post(&outcome.endpoint)
            .json(&payload)
            .send()
            .await;

        match response {
            Ok(resp) => {
                let status = resp.status().as_u16();
                outcome.last_status_code = status;
                if status == 200 || status == 202 {
                    outcome.submitted_url_count += batch.len();
                } else {
                    outcome.failed_batches += 1;
                    if outcome.error.is_empty() {
                        outcome.error = format!("http_{status}");
                    }
                    warn!(status, "IndexNow batch rejected");
                }
            }
            Err(e) => {
                outcome.failed_batches += 1;
                if outcome.error.is_empty() {
                    outcome.error = format!("request_error: {e}");
                }
                warn!(error = %e, "IndexNow batch failed");
            }
        }
    }

    outcome.submitted = outcome.submitted_url_count > 0 && outcome.failed_batches == 0;
    info!(
        submitted = outcome.submitted,
        urls = outcome.submitted_url_count,
        failed_batches = outcome.failed_batches,
        "IndexNow submission finished"
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        let mut config = SiteConfig {
            site_url: "https://example.com".into(),
            ..SiteConfig::default()
        };
        config.indexnow.key = "abc123".into();
        config
    }

    #[test]
    fn key_location_derived_from_key() {
        assert_eq!(
            resolve_key_location(&config()),
            "https://example.com/abc123.txt"
        );
    }

    #[test]
    fn key_location_respects_absolute_override() {
        let mut cfg = config();
        cfg.indexnow.key_location = "https://cdn.example.com/verify.txt".into();
        assert_eq!(
            resolve_key_location(&cfg),
            "https://cdn.example.com/verify.txt"
        );
    }

    #[test]
    fn key_location_resolves_relative_override() {
        let mut cfg = config();
        cfg.indexnow.key_location = "keys/indexnow.txt".into();
        assert_eq!(
            resolve_key_location(&cfg),
            "https://example.com/keys/indexnow.txt"
        );
    }

    #[test]
    fn batches_are_sorted_deduplicated_and_chunked() {
        let urls = vec![
            "https://example.com/b".to_string(),
            "https://example.com/a".to_string(),
            "https://example.com/b".to_string(),
            "  ".to_string(),
            "https://example.com/c".to_string(),
        ];
        let batches = prepare_batches(&urls, 2);
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0], vec!["https://example.com/a", "https://example.com/b"]);
        assert_eq!(batches[1], vec!["https://example.com/c"]);
    }

    #[test]
    fn empty_url_list_yields_no_batches() {
        assert!(prepare_batches(&[], 10).is_empty());
        assert!(prepare_batches(&["  ".to_string()], 10).is_empty());
    }
}
