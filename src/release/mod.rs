//! Release bundle export.
//!
//! Assembles a distributable bundle manifest for the deck's asset
//! catalog. Release bundles fail closed: without a configured signing
//! credential the export aborts, unless the caller passes the explicit
//! `--allow-debug-signing` escape hatch, which stamps the bundle with a
//! debug-grade identity for local testing only.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;

use crate::config::{AppConfig, SigningConfig};
use crate::content;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Profile {
    Debug,
    Release,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Debug => "debug",
            Profile::Release => "release",
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which identity ends up signing the bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SigningIdentity {
    /// Real credential from the `[signing]` config table.
    Release { key_alias: String },
    /// Local-testing identity; never acceptable for distribution.
    Debug,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SigningError {
    #[error(
        "missing release signing config; add a [signing] table to config.toml \
         or pass --allow-debug-signing for local testing only"
    )]
    MissingReleaseSigning,
}

/// Resolve the signing identity for a bundle export.
///
/// Mirrors the mobile build's rule exactly: release + credential uses
/// the credential, release without one is a hard error unless the
/// explicit debug-signing opt-in is set. Debug bundles always take the
/// debug identity, even when a release credential exists.
pub fn resolve_identity(
    profile: Profile,
    signing: Option<&SigningConfig>,
    allow_debug_signing: bool,
) -> Result<SigningIdentity, SigningError> {
    match profile {
        Profile::Debug => Ok(SigningIdentity::Debug),
        Profile::Release => match signing.filter(|s| s.is_complete()) {
            Some(signing) => Ok(SigningIdentity::Release {
                key_alias: signing.key_alias.clone(),
            }),
            None if allow_debug_signing => {
                tracing::warn!("release bundle signed with DEBUG identity; do not distribute");
                Ok(SigningIdentity::Debug)
            }
            None => Err(SigningError::MissingReleaseSigning),
        },
    }
}

#[derive(Debug, Serialize)]
pub struct BundleManifest {
    pub name: &'static str,
    pub version: &'static str,
    pub profile: &'static str,
    pub signing: SigningIdentity,
    pub assets: Vec<String>,
}

impl BundleManifest {
    pub fn build(profile: Profile, signing: SigningIdentity) -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            profile: profile.as_str(),
            signing,
            assets: bundle_assets(),
        }
    }
}

/// Every image the deck references, deduplicated, in catalog order.
fn bundle_assets() -> Vec<String> {
    let mut assets: Vec<String> = Vec::new();
    for screen in content::hero_screens() {
        if !assets.contains(&screen.image_ref) {
            assets.push(screen.image_ref);
        }
    }
    for panel in content::interface_panels() {
        if !assets.contains(&panel.image_ref) {
            assets.push(panel.image_ref);
        }
    }
    assets
}

/// Write the bundle manifest to `<out_dir>/sportdeck-<profile>.json` and
/// return its path.
pub fn export_bundle(
    config: &AppConfig,
    profile: Profile,
    allow_debug_signing: bool,
    out_dir: &Path,
) -> Result<PathBuf> {
    let identity = resolve_identity(profile, config.signing.as_ref(), allow_debug_signing)?;
    let manifest = BundleManifest::build(profile, identity);

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;
    let path = out_dir.join(format!("sportdeck-{}.json", profile.as_str()));
    let json = serde_json::to_string_pretty(&manifest)?;
    std::fs::write(&path, json)
        .with_context(|| format!("writing bundle manifest {}", path.display()))?;

    tracing::info!(
        "exported {} bundle manifest to {}",
        profile.as_str(),
        path.display()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential() -> SigningConfig {
        SigningConfig {
            store_file: PathBuf::from("/keys/upload.jks"),
            store_password: "secret".to_string(),
            key_alias: "sportpass".to_string(),
            key_password: "secret".to_string(),
        }
    }

    #[test]
    fn release_without_signing_fails_closed() {
        let err = resolve_identity(Profile::Release, None, false).unwrap_err();
        assert_eq!(err, SigningError::MissingReleaseSigning);
    }

    #[test]
    fn release_with_signing_uses_the_credential() {
        let signing = credential();
        let identity = resolve_identity(Profile::Release, Some(&signing), false).unwrap();
        assert_eq!(
            identity,
            SigningIdentity::Release {
                key_alias: "sportpass".to_string()
            }
        );
    }

    #[test]
    fn explicit_opt_in_falls_back_to_debug_identity() {
        let identity = resolve_identity(Profile::Release, None, true).unwrap();
        assert_eq!(identity, SigningIdentity::Debug);
    }

    #[test]
    fn incomplete_credential_is_treated_as_missing() {
        let mut signing = credential();
        signing.key_password.clear();
        let err = resolve_identity(Profile::Release, Some(&signing), false).unwrap_err();
        assert_eq!(err, SigningError::MissingReleaseSigning);
    }

    #[test]
    fn debug_profile_never_needs_a_credential() {
        let identity = resolve_identity(Profile::Debug, None, false).unwrap();
        assert_eq!(identity, SigningIdentity::Debug);
    }

    #[test]
    fn manifest_lists_each_asset_once() {
        let manifest = BundleManifest::build(Profile::Debug, SigningIdentity::Debug);
        // The home screenshot appears in both catalogs but only once here.
        let count = manifest
            .assets
            .iter()
            .filter(|a| a.as_str() == "screenshots/shot_current.png")
            .count();
        assert_eq!(count, 1);
        assert!(!manifest.assets.is_empty());
    }
}
