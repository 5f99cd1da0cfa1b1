//! Pod template loading.

use std::path::Path;

use podwright_common::error::{PodwrightError, Result};

use crate::schema::PodManifest;

/// Loads and parses a YAML pod template.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid pod
/// template document.
pub fn load(path: &Path) -> Result<PodManifest> {
    tracing::debug!(path = %path.display(), "loading pod template");

    let raw = std::fs::read_to_string(path).map_err(|e| PodwrightError::Template {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    serde_yaml::from_str(&raw).map_err(|e| PodwrightError::Template {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_template(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("should create temp file");
        file.write_all(contents.as_bytes())
            .expect("should write template");
        file
    }

    #[test]
    fn load_parses_minimal_template() {
        let file = write_template(
            "apps:\n  - name: web\n    image:\n      name: nginx\n",
        );
        let manifest = load(file.path()).expect("should load");
        assert_eq!(manifest.apps.len(), 1);
        assert_eq!(manifest.apps[0].name, "web");
        assert!(manifest.volumes.is_empty());
    }

    #[test]
    fn load_missing_file_is_template_error() {
        let err = load(Path::new("/nonexistent/pod-template.yaml"))
            .expect_err("should fail");
        assert!(matches!(err, PodwrightError::Template { .. }));
    }

    #[test]
    fn load_malformed_yaml_is_template_error() {
        let file = write_template("apps: [unterminated");
        let err = load(file.path()).expect_err("should fail");
        assert!(matches!(err, PodwrightError::Template { .. }));
    }
}
