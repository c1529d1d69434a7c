//! Canonical URL construction and affiliate link handling.
//!
//! Every public URL on the site is built through [`absolute_url`] so the
//! canonical link tag, Open Graph URL, sitemap entries, and breadcrumb
//! schema always agree byte-for-byte.

use url::Url;

/// Normalize a configured site URL: default the scheme to https and strip
/// any trailing slash so path joining stays predictable.
pub fn normalize_site_url(raw: &str) -> String {
    let clean = raw.trim();
    if clean.is_empty() {
        return "https://example.pages.dev".to_string();
    }
    let with_scheme = if clean.starts_with("http://") || clean.starts_with("https://") {
        clean.to_string()
    } else {
        format!("https://{clean}")
    };
    with_scheme.trim_end_matches('/').to_string()
}

/// Normalize an output file path into its public path form.
///
/// `index.html` collapses to the site root and the `.html` suffix is
/// dropped (the deployed site serves extensionless URLs via `_redirects`).
/// Query strings and fragments are preserved.
pub fn normalize_public_path(path: &str) -> String {
    let raw = path.trim().trim_start_matches('/');
    if raw.is_empty() {
        return String::new();
    }

    let (before_hash, fragment) = match raw.split_once('#') {
        Some((p, f)) => (p, Some(f)),
        None => (raw, None),
    };
    let (mut clean, query) = match before_hash.split_once('?') {
        Some((p, q)) => (p.trim().to_string(), Some(q)),
        None => (before_hash.trim().to_string(), None),
    };

    if clean == "index" || clean == "index.html" {
        clean.clear();
    } else if let Some(stripped) = clean.strip_suffix(".html") {
        clean = stripped.to_string();
    }

    let mut rebuilt = clean;
    if let Some(q) = query {
        rebuilt = if rebuilt.is_empty() {
            format!("?{q}")
        } else {
            format!("{rebuilt}?{q}")
        };
    }
    if let Some(f) = fragment {
        rebuilt = if rebuilt.is_empty() {
            format!("#{f}")
        } else {
            format!("{rebuilt}#{f}")
        };
    }
    rebuilt
}

/// Build the absolute public URL for an output path.
pub fn absolute_url(site_url: &str, path: &str) -> String {
    let public = normalize_public_path(path);
    if public.is_empty() {
        format!("{site_url}/")
    } else {
        format!("{site_url}/{public}")
    }
}

/// Extract the host part of the site URL (used by the IndexNow payload).
pub fn site_host(site_url: &str) -> String {
    match Url::parse(site_url) {
        Ok(parsed) => parsed.host_str().unwrap_or_default().to_lowercase(),
        Err(_) => site_url
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .split('/')
            .next()
            .unwrap_or_default()
            .to_lowercase(),
    }
}

/// Reduce text to a URL-safe path segment: lowercased, non-alphanumeric
/// runs collapsed to a single `-`, leading/trailing separators trimmed.
/// Returns an empty string when nothing survives; callers decide whether
/// that is an error (slug assignment) or a skip (heading anchors).
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_sep = false;
    for ch in text.chars().flat_map(|c| c.to_lowercase()) {
        if ch.is_ascii_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('-');
            }
            pending_sep = false;
            out.push(ch);
        } else {
            pending_sep = true;
        }
    }
    out
}

/// Append the affiliate `tag` query parameter to a product URL when the
/// URL does not already carry one. Unparseable URLs pass through verbatim.
pub fn ensure_affiliate_tag(raw: &str, tag: &str) -> String {
    if tag.is_empty() || raw.is_empty() {
        return raw.to_string();
    }
    let Ok(mut parsed) = Url::parse(raw) else {
        return raw.to_string();
    };
    let has_tag = parsed.query_pairs().any(|(k, _)| k == "tag");
    if !has_tag {
        parsed.query_pairs_mut().append_pair("tag", tag);
    }
    parsed.to_string()
}
