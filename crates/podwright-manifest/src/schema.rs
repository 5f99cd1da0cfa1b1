//! appc pod-manifest schema types.
//!
//! The wire shape (camelCase keys, name/value label lists) follows the
//! appc pod-manifest document so compiled output is consumable by the
//! container runtime unchanged. Templates may omit `acVersion` and
//! `acKind`; both are seeded with defaults at parse time.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use podwright_common::constants::{AC_KIND, AC_VERSION, SCHEMA_LABEL, VERSION_LABEL};

fn default_ac_version() -> String {
    AC_VERSION.to_string()
}

fn default_ac_kind() -> String {
    AC_KIND.to_string()
}

fn default_volume_kind() -> String {
    "host".to_string()
}

/// Declarative description of one or more application containers to run
/// together, including volumes and per-app settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PodManifest {
    /// appc spec version.
    #[serde(rename = "acVersion", default = "default_ac_version")]
    pub ac_version: String,
    /// Document kind; always `PodManifest`.
    #[serde(rename = "acKind", default = "default_ac_kind")]
    pub ac_kind: String,
    /// Applications in the pod, in template order.
    #[serde(default)]
    pub apps: Vec<RuntimeApp>,
    /// Volumes shared into the pod, in template order.
    #[serde(default)]
    pub volumes: Vec<Volume>,
}

impl Default for PodManifest {
    fn default() -> Self {
        Self {
            ac_version: default_ac_version(),
            ac_kind: default_ac_kind(),
            apps: Vec::new(),
            volumes: Vec::new(),
        }
    }
}

/// One application entry in the pod.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeApp {
    /// App name, unique within the pod.
    pub name: String,
    /// Image the app runs from.
    pub image: ImageRef,
    /// Execution settings.
    #[serde(default)]
    pub app: App,
}

/// Reference to a container image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Image name.
    pub name: String,
    /// Content identifier; empty until resolved.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Labels used to look up schema and version.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
}

impl ImageRef {
    /// Returns the value of the named label, if present.
    #[must_use]
    pub fn label(&self, name: &str) -> Option<&str> {
        self.labels
            .iter()
            .find(|label| label.name == name)
            .map(|label| label.value.as_str())
    }

    /// Builds the pull reference used to fetch this image:
    /// `schema + name + ":" + version`, with absent labels contributing
    /// empty strings.
    #[must_use]
    pub fn pull_reference(&self) -> String {
        let schema = self.label(SCHEMA_LABEL).unwrap_or_default();
        let version = self.label(VERSION_LABEL).unwrap_or_default();
        format!("{schema}{}:{version}", self.name)
    }
}

/// A name/value image label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Label name.
    pub name: String,
    /// Label value.
    pub value: String,
}

/// Execution settings for an app.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    /// Command line executed inside the container.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exec: Vec<String>,
    /// UID or user name the app runs as; defaulted to `"0"` when empty.
    #[serde(default)]
    pub user: String,
    /// GID or group name the app runs as; defaulted to `"0"` when empty.
    #[serde(default)]
    pub group: String,
    /// Environment variables passed to the app.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub environment: Vec<EnvVar>,
    /// Volume mount points inside the app's filesystem.
    #[serde(
        rename = "mountPoints",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub mount_points: Vec<MountPoint>,
}

/// A name/value environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVar {
    /// Variable name.
    pub name: String,
    /// Variable value.
    pub value: String,
}

/// A mount point inside an app's filesystem, satisfied by a pod volume
/// of the same name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountPoint {
    /// Volume name this mount point binds to.
    pub name: String,
    /// Path inside the app's filesystem.
    pub path: String,
    /// Whether the mount is read-only.
    #[serde(rename = "readOnly", default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
}

/// A volume shared into the pod.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    /// Volume name, referenced by app mount points.
    pub name: String,
    /// Volume kind; `host` volumes carry a source path.
    #[serde(default = "default_volume_kind")]
    pub kind: String,
    /// Host path backing the volume; absolutized by the pipeline.
    pub source: PathBuf,
    /// Whether the volume is read-only.
    #[serde(rename = "readOnly", default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = r#"
apps:
  - name: foo
    image:
      name: library/nginx
      labels:
        - name: schema
          value: "docker://"
        - name: version
          value: latest
volumes:
  - name: data
    kind: host
    source: data
"#;

    #[test]
    fn template_parse_seeds_ac_fields() {
        let manifest: PodManifest =
            serde_yaml::from_str(TEMPLATE).expect("should parse template");
        assert_eq!(manifest.ac_version, AC_VERSION);
        assert_eq!(manifest.ac_kind, AC_KIND);
    }

    #[test]
    fn template_parse_defaults_empty_fields() {
        let manifest: PodManifest =
            serde_yaml::from_str(TEMPLATE).expect("should parse template");
        let app = &manifest.apps[0];
        assert!(app.image.id.is_empty());
        assert!(app.app.user.is_empty());
        assert!(app.app.group.is_empty());
    }

    #[test]
    fn pull_reference_concatenates_schema_name_version() {
        let manifest: PodManifest =
            serde_yaml::from_str(TEMPLATE).expect("should parse template");
        assert_eq!(
            manifest.apps[0].image.pull_reference(),
            "docker://library/nginx:latest"
        );
    }

    #[test]
    fn pull_reference_tolerates_missing_labels() {
        let image = ImageRef {
            name: "busybox".into(),
            id: String::new(),
            labels: Vec::new(),
        };
        assert_eq!(image.pull_reference(), "busybox:");
    }

    #[test]
    fn label_lookup_misses_return_none() {
        let manifest: PodManifest =
            serde_yaml::from_str(TEMPLATE).expect("should parse template");
        assert!(manifest.apps[0].image.label("os").is_none());
    }
}
