//! The target project's `package.json`: read once, merged, rewritten once.
//!
//! The merge is deliberately conservative: only the `dependencies`,
//! `devDependencies`, and `scripts` maps are touched, and only by inserting
//! keys from the selected [`DependencyProfile`]. Profile entries win on key
//! collision; every other field of the manifest — including fields this tool
//! knows nothing about — round-trips unchanged via `#[serde(flatten)]`.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, ScaffoldError};
use crate::profile::DependencyProfile;

/// Fallback project name when the manifest has no `name` field.
pub const DEFAULT_PROJECT_NAME: &str = "my-app";

/// A `package.json` document.
///
/// The maps this tool merges into are modeled explicitly; everything else is
/// preserved verbatim in `extra`. Serialization order is stable: known fields
/// first, then the preserved fields, with dependency and script keys sorted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub scripts: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dependencies: BTreeMap<String, String>,

    #[serde(
        rename = "devDependencies",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub dev_dependencies: BTreeMap<String, String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Manifest {
    /// Read and parse the manifest. A missing or malformed file is fatal —
    /// this is checked before any project file is written.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ScaffoldError::ManifestNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ScaffoldError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Rewrite the full document in place, pretty-printed.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| anyhow::anyhow!(e))?;
        std::fs::write(path, json)?;
        tracing::debug!(path = %path.display(), "rewrote manifest");
        Ok(())
    }

    /// The project name recorded in the manifest, or [`DEFAULT_PROJECT_NAME`].
    pub fn project_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_PROJECT_NAME)
    }

    /// Merge a dependency profile into this manifest.
    ///
    /// Shallow, key-wise: profile entries overwrite same-named keys, all
    /// unrelated keys are left untouched.
    pub fn apply_profile(&mut self, profile: &DependencyProfile) {
        for (name, constraint) in &profile.dependencies {
            self.dependencies
                .insert((*name).to_string(), (*constraint).to_string());
        }
        for (name, constraint) in &profile.dev_dependencies {
            self.dev_dependencies
                .insert((*name).to_string(), (*constraint).to_string());
        }
        for (name, command) in &profile.scripts {
            self.scripts
                .insert((*name).to_string(), (*command).to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{self, RuntimeTier};

    fn manifest_from(json: &str) -> Manifest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_project_name_default() {
        let m = manifest_from("{}");
        assert_eq!(m.project_name(), "my-app");

        let m = manifest_from(r#"{"name":"demo"}"#);
        assert_eq!(m.project_name(), "demo");
    }

    #[test]
    fn test_apply_profile_overwrites_fixed_scripts() {
        let mut m = manifest_from(r#"{"scripts":{"start":"old","lint":"eslint ."}}"#);
        m.apply_profile(&profile::select(RuntimeTier::Modern, true));

        assert_eq!(m.scripts["start"], "node dist/server.js");
        assert_eq!(m.scripts["build"], "tsc");
        assert_eq!(m.scripts["dev"], "nodemon src/server.ts");
        // unrelated script untouched
        assert_eq!(m.scripts["lint"], "eslint .");
    }

    #[test]
    fn test_apply_profile_preserves_existing_dependencies() {
        let mut m = manifest_from(r#"{"dependencies":{"left-pad":"^1.3.0"}}"#);
        m.apply_profile(&profile::select(RuntimeTier::Modern, true));

        assert_eq!(m.dependencies["left-pad"], "^1.3.0");
        assert_eq!(m.dependencies["express"], "^4.18.2");
    }

    #[test]
    fn test_unknown_fields_round_trip() {
        let m = manifest_from(
            r#"{"name":"demo","version":"1.0.0","private":true,"engines":{"node":">=20"}}"#,
        );
        let out: Value = serde_json::from_str(&serde_json::to_string_pretty(&m).unwrap()).unwrap();

        assert_eq!(out["version"], "1.0.0");
        assert_eq!(out["private"], true);
        assert_eq!(out["engines"]["node"], ">=20");
    }

    #[test]
    fn test_load_missing_is_manifest_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = Manifest::load(&dir.path().join("package.json")).unwrap_err();
        assert!(matches!(err, ScaffoldError::ManifestNotFound { .. }));
    }

    #[test]
    fn test_load_invalid_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(&path, "not json").unwrap();

        let err = Manifest::load(&path).unwrap_err();
        assert!(matches!(err, ScaffoldError::ManifestParse { .. }));
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");

        let mut m = manifest_from(r#"{"name":"demo"}"#);
        m.apply_profile(&profile::select(RuntimeTier::Modern, false));
        m.save(&path).unwrap();

        let reread = Manifest::load(&path).unwrap();
        assert_eq!(reread.project_name(), "demo");
        assert_eq!(reread.scripts["start"], "node dist/main.js");
        assert!(reread.dependencies.is_empty());
    }
}
