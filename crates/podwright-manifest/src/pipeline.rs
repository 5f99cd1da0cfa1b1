//! The manifest prepare pipeline.
//!
//! Composes template loading, image resolution, volume path
//! normalization, and user/group defaulting into one `prepare`
//! operation. Steps are strictly ordered; later steps rely on the
//! invariants established by earlier ones.

use std::path::{Component, Path, PathBuf};

use podwright_common::config::Config;
use podwright_common::error::{PodwrightError, Result};

use crate::schema::PodManifest;
use crate::template;

/// Resolves a pull reference to a content identifier.
///
/// The pipeline only knows this seam; the production implementation
/// shells out to the container runtime, tests substitute a fake.
pub trait ImageFetcher {
    /// Fetches `reference` and returns the image's content identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails or produces no identifier.
    fn fetch(&self, reference: &str) -> Result<String>;
}

/// Loads the template named by `config` and runs it through the full
/// pipeline, producing a manifest with no empty image ids, no relative
/// volume sources, and no empty user/group fields.
///
/// # Errors
///
/// Returns an error if the template cannot be loaded, an image fetch
/// fails, or a volume source cannot be made absolute.
pub fn prepare(config: &Config, fetcher: &dyn ImageFetcher) -> Result<PodManifest> {
    let mut manifest = template::load(&config.template)?;
    resolve_images(&mut manifest, fetcher)?;
    absolutize_volumes(&mut manifest, &config.base)?;
    apply_exec_defaults(&mut manifest);
    Ok(manifest)
}

/// Fills in the content identifier of every app that lacks one.
///
/// Apps with a pre-set id are left untouched and never hit the fetcher.
///
/// # Errors
///
/// Returns an error if a fetch fails.
pub fn resolve_images(manifest: &mut PodManifest, fetcher: &dyn ImageFetcher) -> Result<()> {
    for app in &mut manifest.apps {
        if !app.image.id.is_empty() {
            continue;
        }
        let reference = app.image.pull_reference();
        tracing::info!(
            app = %app.name,
            reference = %reference,
            "no image id specified, fetching"
        );
        app.image.id = fetcher.fetch(&reference)?;
    }
    Ok(())
}

/// Rewrites relative volume sources to absolute paths under `base`.
///
/// Resolution is lexical (join plus `.`/`..` normalization, anchored at
/// the current directory when `base` itself is relative), so sources
/// need not exist yet.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined.
pub fn absolutize_volumes(manifest: &mut PodManifest, base: &Path) -> Result<()> {
    for volume in &mut manifest.volumes {
        if volume.source.is_absolute() {
            continue;
        }
        volume.source = lexical_absolute(&volume.source, base)?;
    }
    Ok(())
}

/// Fills empty app user/group fields with `"0"`. Never fails.
pub fn apply_exec_defaults(manifest: &mut PodManifest) {
    for app in &mut manifest.apps {
        if app.app.user.is_empty() {
            app.app.user = "0".to_string();
        }
        if app.app.group.is_empty() {
            app.app.group = "0".to_string();
        }
    }
}

fn lexical_absolute(source: &Path, base: &Path) -> Result<PathBuf> {
    let joined = base.join(source);
    let anchored = if joined.is_absolute() {
        joined
    } else {
        let cwd = std::env::current_dir().map_err(|e| PodwrightError::Path {
            path: source.to_path_buf(),
            message: format!("cannot determine current directory: {e}"),
        })?;
        cwd.join(joined)
    };

    let mut normalized = PathBuf::new();
    for component in anchored.components() {
        match component {
            Component::Prefix(prefix) => normalized.push(prefix.as_os_str()),
            Component::RootDir => normalized.push(Component::RootDir.as_os_str()),
            Component::CurDir => {}
            // Popping above the root is a no-op, like lexical cleaning
            // of "/.." elsewhere.
            Component::ParentDir => {
                let _ = normalized.pop();
            }
            Component::Normal(part) => normalized.push(part),
        }
    }
    Ok(normalized)
}
