//! IndexNow key file and URL manifest.
//!
//! The manifest (`indexnow-urls.txt`) is the canonical list of public URLs
//! a run produced. It is what `--indexnow-submit-existing` replays without
//! regenerating the site.

use std::path::{Path, PathBuf};

use tracing::debug;

use siteforge_shared::{Result, SiteforgeError};

/// File name of the URL manifest inside the output directory.
pub const URL_MANIFEST_NAME: &str = "indexnow-urls.txt";

/// Write the `<key>.txt` verification file. Returns `None` when no key is
/// configured (IndexNow disabled).
pub fn write_key_file(output_dir: &Path, key: &str) -> Result<Option<PathBuf>> {
    let key = key.trim();
    if key.is_empty() {
        return Ok(None);
    }
    let path = output_dir.join(format!("{key}.txt"));
    std::fs::write(&path, key).map_err(|e| SiteforgeError::io(&path, e))?;
    debug!(path = %path.display(), "wrote IndexNow key file");
    Ok(Some(path))
}

/// Write the URL manifest, one URL per line.
pub fn write_url_manifest(output_dir: &Path, urls: &[String]) -> Result<PathBuf> {
    let path = output_dir.join(URL_MANIFEST_NAME);
    let mut content = urls.join("\n");
    if !urls.is_empty() {
        content.push('\n');
    }
    std::fs::write(&path, content).map_err(|e| SiteforgeError::io(&path, e))?;
    debug!(path = %path.display(), count = urls.len(), "wrote IndexNow URL manifest");
    Ok(path)
}

/// Read the URL manifest back; missing file yields an empty list.
pub fn read_url_manifest(output_dir: &Path) -> Result<Vec<String>> {
    let path = output_dir.join(URL_MANIFEST_NAME);
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(&path).map_err(|e| SiteforgeError::io(&path, e))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "siteforge-manifest-{tag}-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn manifest_roundtrip() {
        let dir = temp_dir("roundtrip");
        let urls = vec![
            "https://example.com/".to_string(),
            "https://example.com/best-planner".to_string(),
        ];
        write_url_manifest(&dir, &urls).unwrap();
        let read = read_url_manifest(&dir).unwrap();
        assert_eq!(read, urls);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_manifest_reads_empty() {
        let dir = temp_dir("missing");
        assert!(read_url_manifest(&dir).unwrap().is_empty());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn key_file_only_written_with_key() {
        let dir = temp_dir("keyfile");
        assert!(write_key_file(&dir, "  ").unwrap().is_none());
        let path = write_key_file(&dir, "abc123").unwrap().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "abc123");
        assert!(path.ends_with("abc123.txt"));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
