use serde::{Deserialize, Serialize};
use std::fmt;

/// Architectural layer assigned to a source file or import target by the
/// path heuristics in [`crate::analyzers::layers`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LayerTag {
    Entity,
    Domain,
    Infrastructure,
    Application,
    UI,
    Theme,
    Library,
    Project,
}

impl LayerTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayerTag::Entity => "Entity",
            LayerTag::Domain => "Domain",
            LayerTag::Infrastructure => "Infrastructure",
            LayerTag::Application => "Application",
            LayerTag::UI => "UI",
            LayerTag::Theme => "Theme",
            LayerTag::Library => "Library",
            LayerTag::Project => "Project",
        }
    }
}

impl fmt::Display for LayerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Syntactic category of an import target, which determines how the target
/// string is turned into a display name.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ImportKind {
    /// `dart:` core library, e.g. `dart:async`.
    DartCoreLibrary,
    /// `package:` import of some other package.
    ExternalPackage,
    /// `package:` import pointing back into the project's own package.
    InternalAbsolute,
    /// Everything else: a relative path, unresolved.
    Relative,
}

impl ImportKind {
    /// External code is always rendered with the `Library` tag.
    pub fn is_library(&self) -> bool {
        matches!(
            self,
            ImportKind::DartCoreLibrary | ImportKind::ExternalPackage
        )
    }
}

/// One import target after classification.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassifiedImport {
    pub kind: ImportKind,
    pub layer: LayerTag,
    pub name: String,
}

impl ClassifiedImport {
    pub fn node(&self) -> GraphNode {
        GraphNode::new(self.layer, &self.name)
    }
}

/// A Mermaid node: sanitized identifier plus `[Layer] name` label.
///
/// Nodes are built fresh for every document; an id is only meaningful
/// within one file's graph.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
}

impl GraphNode {
    pub fn new(layer: LayerTag, name: &str) -> Self {
        Self {
            id: sanitize_id(name),
            label: format!("[{layer}] {name}"),
        }
    }
}

/// Everything needed to render one source file's dependency document.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DependencyDocument {
    pub file_name: String,
    /// Forward-slashed path relative to the source root.
    pub relative_path: String,
    pub source: GraphNode,
    /// Classified imports in source order, duplicates included.
    pub imports: Vec<ClassifiedImport>,
}

/// Replace every character outside `[A-Za-z0-9_]` with `_` so the result
/// parses as a Mermaid node identifier. Character count is preserved.
pub fn sanitize_id(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}
