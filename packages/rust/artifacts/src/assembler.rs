//! Site directory assembler.
//!
//! Takes the rendered `(path, content)` set and writes the final output
//! tree to disk. Each file is written to a temp name then renamed, so a
//! crashed run never leaves a half-written page at its final path.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use siteforge_shared::{FileOutput, Result, SiteforgeError};

use crate::report::GenerationReport;

/// Write every output under `output_root`, creating directories as needed.
/// Returns the number of files written.
pub fn write_outputs(output_root: &Path, outputs: &[FileOutput]) -> Result<usize> {
    std::fs::create_dir_all(output_root).map_err(|e| SiteforgeError::io(output_root, e))?;

    for output in outputs {
        let target = output_root.join(&output.path);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SiteforgeError::io(parent, e))?;
        }
        write_atomic(&target, &output.content)?;
        debug!(path = %output.path, bytes = output.content.len(), "wrote output file");
    }

    info!(count = outputs.len(), root = %output_root.display(), "site assembly complete");
    Ok(outputs.len())
}

/// Write `generation_report.json` under the output root.
pub fn write_report(output_root: &Path, report: &GenerationReport) -> Result<PathBuf> {
    std::fs::create_dir_all(output_root).map_err(|e| SiteforgeError::io(output_root, e))?;
    let path = output_root.join("generation_report.json");
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| SiteforgeError::config(format!("report serialization failed: {e}")))?;
    write_atomic(&path, &json)?;
    debug!(path = %path.display(), "wrote generation report");
    Ok(path)
}

/// Write to a dot-prefixed temp file in the same directory, then rename.
fn write_atomic(target: &Path, content: &str) -> Result<()> {
    let file_name = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| SiteforgeError::config(format!("invalid output path: {target:?}")))?;
    let temp = target.with_file_name(format!(".{file_name}.tmp"));

    std::fs::write(&temp, content).map_err(|e| SiteforgeError::io(&temp, e))?;
    std::fs::rename(&temp, target).map_err(|e| SiteforgeError::io(target, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use siteforge_shared::PageKind;

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "siteforge-assembler-{tag}-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn outputs() -> Vec<FileOutput> {
        vec![
            FileOutput {
                path: "index.html".into(),
                kind: PageKind::Home,
                content: "<html>home</html>".into(),
            },
            FileOutput {
                path: "assets/site.css".into(),
                kind: PageKind::Asset,
                content: "body{}".into(),
            },
        ]
    }

    #[test]
    fn writes_nested_outputs() {
        let dir = temp_dir("nested");
        let count = write_outputs(&dir, &outputs()).unwrap();
        assert_eq!(count, 2);
        assert!(dir.join("index.html").exists());
        assert!(dir.join("assets/site.css").exists());
        let css = std::fs::read_to_string(dir.join("assets/site.css")).unwrap();
        assert_eq!(css, "body{}");
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn no_temp_files_left_behind() {
        let dir = temp_dir("atomic");
        write_outputs(&dir, &outputs()).unwrap();
        for entry in std::fs::read_dir(&dir).unwrap() {
            let name = entry.unwrap().file_name().to_string_lossy().to_string();
            assert!(!name.starts_with('.'), "temp file left behind: {name}");
        }
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn rewrite_overwrites_existing_files() {
        let dir = temp_dir("overwrite");
        write_outputs(&dir, &outputs()).unwrap();
        let mut second = outputs();
        second[0].content = "<html>v2</html>".into();
        write_outputs(&dir, &second).unwrap();
        let html = std::fs::read_to_string(dir.join("index.html")).unwrap();
        assert_eq!(html, "<html>v2</html>");
        let _ = std::fs::remove_dir_all(&dir);
    }
}
