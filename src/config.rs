//! Run configuration.
//!
//! The original generator kept these as module-level constants; here they
//! are explicit values carried by [`GraphConfig`] so the classifier and the
//! command layer never reach for globals.

use log::{debug, warn};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Directory scanned for Dart sources, relative to the project root.
pub const SOURCE_DIR: &str = "lib";

/// Output root for generated documents, relative to the project root.
pub const DOCS_DIR: &str = "docs/dependencies";

/// Suffix replacing the `.dart` extension of each source file.
pub const DOC_SUFFIX: &str = "_dependency.md";

pub const DART_EXTENSION: &str = ".dart";

/// The subset of `pubspec.yaml` the generator cares about.
#[derive(Debug, Deserialize)]
struct Pubspec {
    name: Option<String>,
}

#[derive(Clone, Debug)]
pub struct GraphConfig {
    pub project_root: PathBuf,
    /// Canonical package name distinguishing internal absolute imports
    /// from external packages.
    pub package_name: String,
}

impl GraphConfig {
    pub fn new(project_root: impl Into<PathBuf>, package_name: impl Into<String>) -> Self {
        Self {
            project_root: project_root.into(),
            package_name: package_name.into(),
        }
    }

    /// Build a configuration for `project_root`, reading the package name
    /// from its `pubspec.yaml`.
    pub fn discover(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        let package_name = detect_package_name(&project_root);
        Self {
            project_root,
            package_name,
        }
    }

    pub fn lib_dir(&self) -> PathBuf {
        self.project_root.join(SOURCE_DIR)
    }

    pub fn docs_dir(&self) -> PathBuf {
        self.project_root.join(DOCS_DIR)
    }
}

/// Read the `name:` field of `pubspec.yaml`. Falls back to the project
/// directory's own name when the manifest is missing or unusable; a wrong
/// guess only degrades classification (internal imports show up as
/// `Library`), so this is never fatal.
fn detect_package_name(project_root: &Path) -> String {
    let manifest = project_root.join("pubspec.yaml");
    match std::fs::read_to_string(&manifest) {
        Ok(text) => match serde_yaml::from_str::<Pubspec>(&text) {
            Ok(Pubspec { name: Some(name) }) if !name.is_empty() => {
                debug!("package name '{name}' from {}", manifest.display());
                name
            }
            Ok(_) => {
                warn!(
                    "{} has no 'name' field, falling back to directory name",
                    manifest.display()
                );
                directory_name(project_root)
            }
            Err(err) => {
                warn!(
                    "failed to parse {}: {err}, falling back to directory name",
                    manifest.display()
                );
                directory_name(project_root)
            }
        },
        Err(err) => {
            warn!(
                "could not read {}: {err}, falling back to directory name",
                manifest.display()
            );
            directory_name(project_root)
        }
    }
}

fn directory_name(project_root: &Path) -> String {
    project_root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "app".to_string())
}
