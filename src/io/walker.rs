use log::warn;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collects the Dart source files under a root directory.
///
/// Unreadable entries are logged and skipped rather than failing the walk;
/// fault isolation is per-file for the whole pipeline. Results are sorted
/// so processing order (and progress output) is deterministic.
pub struct DartWalker {
    root: PathBuf,
}

impl DartWalker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn walk(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(
                        "skipping unreadable entry under {}: {err}",
                        self.root.display()
                    );
                    continue;
                }
            };
            if entry.file_type().is_file() && is_dart_file(entry.path()) {
                files.push(entry.into_path());
            }
        }
        files.sort();
        files
    }
}

fn is_dart_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "dart")
}
