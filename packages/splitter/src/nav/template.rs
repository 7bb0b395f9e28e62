//! Splicing the sidebar into the VitePress config template.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::SIDEBAR_MARKER;
use crate::error::{Result, SplitterError};

/// Replace the sidebar marker in `template` with `fragment`.
///
/// Fails if the marker is absent, so a renamed marker cannot silently
/// produce a config without a sidebar.
pub fn fill_template(template: &str, template_path: &Path, fragment: &str) -> Result<String> {
    if !template.contains(SIDEBAR_MARKER) {
        return Err(SplitterError::TemplateMarkerMissing {
            path: template_path.to_path_buf(),
            marker: SIDEBAR_MARKER.to_string(),
        });
    }
    Ok(template.replace(SIDEBAR_MARKER, fragment))
}

/// Render the config from `template_path` and write it to `output_path`.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then renames.
/// A failed run leaves the previous config untouched.
///
/// # Returns
/// Path to the written config
pub fn write_config(template_path: &Path, output_path: &Path, fragment: &str) -> Result<PathBuf> {
    let template = fs::read_to_string(template_path)?;
    let content = fill_template(&template, template_path, fragment)?;

    let output_dir = output_path.parent().unwrap_or(Path::new("."));
    fs::create_dir_all(output_dir)?;

    let file_name = output_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "config.mjs".to_string());
    let temp_file = output_dir.join(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output_path.exists() {
        fs::remove_file(output_path)?;
    }

    fs::rename(&temp_file, output_path)?;

    Ok(output_path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const TEMPLATE: &str = "export default {\n  themeConfig: {\n    sidebar: {\n        \
        // template: sidebar\n    }\n  }\n}\n";

    #[test]
    fn test_fill_template() {
        let filled = fill_template(TEMPLATE, Path::new("t.mjs"), "'/oj': {}").unwrap();
        assert!(filled.contains("        '/oj': {}\n"));
        assert!(!filled.contains(SIDEBAR_MARKER));
    }

    #[test]
    fn test_fill_template_requires_marker() {
        let result = fill_template("export default {}", Path::new("t.mjs"), "x");
        assert!(matches!(
            result,
            Err(SplitterError::TemplateMarkerMissing { .. })
        ));
    }

    #[test]
    fn test_write_config_creates_parent_dirs() {
        let temp_dir = tempdir().unwrap();
        let template_path = temp_dir.path().join("config.templ.mjs");
        fs::write(&template_path, TEMPLATE).unwrap();
        let output_path = temp_dir.path().join("docs").join(".vitepress").join("config.mjs");

        let written = write_config(&template_path, &output_path, "'/oj': {}").unwrap();

        assert_eq!(written, output_path);
        let content = fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("'/oj': {}"));
        assert!(!output_path.with_file_name(".config.mjs.tmp").exists());
    }

    #[test]
    fn test_write_config_keeps_previous_on_failure() {
        let temp_dir = tempdir().unwrap();
        let template_path = temp_dir.path().join("config.templ.mjs");
        fs::write(&template_path, "no marker here").unwrap();
        let output_path = temp_dir.path().join("config.mjs");
        fs::write(&output_path, "previous").unwrap();

        assert!(write_config(&template_path, &output_path, "x").is_err());
        assert_eq!(fs::read_to_string(&output_path).unwrap(), "previous");
    }

    #[test]
    fn test_write_config_missing_template() {
        let temp_dir = tempdir().unwrap();
        let result = write_config(
            &temp_dir.path().join("missing.mjs"),
            &temp_dir.path().join("config.mjs"),
            "x",
        );
        assert!(matches!(result, Err(SplitterError::Io(_))));
    }
}
