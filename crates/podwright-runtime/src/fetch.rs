//! Production image fetcher backed by `rkt fetch`.

use podwright_common::constants::{DOCKER_SCHEMA, RKT};
use podwright_common::error::{PodwrightError, Result};
use podwright_manifest::pipeline::ImageFetcher;

use crate::invoke;

/// Fetches images by shelling out to `rkt fetch`.
///
/// Fetch progress goes to the operator on stderr; stdout carries the
/// resulting content identifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct RktFetcher;

impl ImageFetcher for RktFetcher {
    fn fetch(&self, reference: &str) -> Result<String> {
        invoke::require_binary(RKT)?;
        tracing::info!(reference, "fetching image");

        let mut cmd = invoke::elevated(RKT);
        let _ = cmd.arg("fetch").arg(reference);
        if reference.starts_with(DOCKER_SCHEMA) {
            // Docker registries carry no appc signatures.
            let _ = cmd.arg("--insecure-options=image");
        }

        let stdout = invoke::run_captured(cmd).map_err(|e| PodwrightError::Fetch {
            reference: reference.to_string(),
            message: e.to_string(),
        })?;

        parse_image_id(reference, &stdout)
    }
}

/// Extracts the single content identifier from fetch output.
fn parse_image_id(reference: &str, output: &str) -> Result<String> {
    let mut tokens = output.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(id), None) => Ok(id.to_string()),
        _ => Err(PodwrightError::Fetch {
            reference: reference.to_string(),
            message: format!("expected a single image id on stdout, got {output:?}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_single_id_with_trailing_newline() {
        let id = parse_image_id("docker://foo:latest", "sha512-8cf1e1c\n")
            .expect("should parse");
        assert_eq!(id, "sha512-8cf1e1c");
    }

    #[test]
    fn parse_rejects_empty_output() {
        let err = parse_image_id("docker://foo:latest", "\n").expect_err("should fail");
        assert!(matches!(err, PodwrightError::Fetch { .. }));
    }

    #[test]
    fn parse_rejects_multi_token_output() {
        let err = parse_image_id("docker://foo:latest", "downloading... sha512-8cf1e1c")
            .expect_err("should fail");
        assert!(matches!(err, PodwrightError::Fetch { .. }));
    }
}
