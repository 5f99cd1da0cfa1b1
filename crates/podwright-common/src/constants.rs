//! System-wide constants and naming helpers.

/// Default pod template path.
pub const DEFAULT_TEMPLATE: &str = "pod-template.yaml";

/// Default base directory prepended to relative volume sources.
pub const DEFAULT_BASE: &str = ".";

/// appc spec version stamped into manifests that omit it.
pub const AC_VERSION: &str = "0.8.11";

/// appc kind stamped into manifests that omit it.
pub const AC_KIND: &str = "PodManifest";

/// Image label holding the pull schema (e.g. `docker://`).
pub const SCHEMA_LABEL: &str = "schema";

/// Image label holding the image version tag.
pub const VERSION_LABEL: &str = "version";

/// Pull schema that requires relaxed image verification on fetch.
pub const DOCKER_SCHEMA: &str = "docker://";

/// Privilege-escalation command prefixed to every collaborator call.
pub const ELEVATE: &str = "sudo";

/// Container runtime binary.
pub const RKT: &str = "rkt";

/// Transient-unit launcher binary.
pub const SYSTEMD_RUN: &str = "systemd-run";

/// Unit management/query binary.
pub const SYSTEMCTL: &str = "systemctl";

/// Journal query binary.
pub const JOURNALCTL: &str = "journalctl";

/// Naming convention for machines registered by the container runtime.
pub const MACHINE_PREFIX: &str = "rkt-";

/// Prefix of the temporary manifest file written by `start`.
pub const MANIFEST_TMP_PREFIX: &str = "pod-manifest";

/// Returns the systemd service unit name for a pod.
#[must_use]
pub fn unit_name(pod: &str) -> String {
    format!("{pod}.service")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_name_appends_service_suffix() {
        assert_eq!(unit_name("web"), "web.service");
    }
}
