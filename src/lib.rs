//! depgraph scans a Flutter project's `lib/` tree, extracts each Dart
//! file's import declarations textually, classifies file and imports into
//! architectural layers, and writes one Markdown document per file with a
//! Mermaid dependency diagram, mirroring the source tree under
//! `docs/dependencies/`.

pub mod analyzers;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod output;

// Re-export commonly used types
pub use crate::analyzers::{classify_import, classify_path, extract_imports};
pub use crate::config::GraphConfig;
pub use crate::core::{
    sanitize_id, ClassifiedImport, DependencyDocument, GraphNode, ImportKind, LayerTag,
};

pub use crate::commands::generate::{build_document, generate_graphs};
pub use crate::output::mermaid::{render_document, render_graph};
