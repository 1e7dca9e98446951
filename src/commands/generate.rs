use crate::analyzers::{classify_import, classify_path, extract_imports};
use crate::config::{DART_EXTENSION, DOCS_DIR, DOC_SUFFIX, GraphConfig, SOURCE_DIR};
use crate::core::{DependencyDocument, GraphNode};
use crate::io::{self, DartWalker};
use crate::output::mermaid;
use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

/// Regenerate every dependency document under the docs root.
///
/// The docs root is deleted up front and rebuilt from scratch, so reruns on
/// unchanged input are byte-identical and stale documents never survive.
/// Read/write failures of individual files are reported on stdout and the
/// file is skipped; a completed run returns `Ok` regardless of how many
/// files were skipped.
pub fn generate_graphs(config: &GraphConfig) -> Result<()> {
    let lib_dir = config.lib_dir();
    if !lib_dir.is_dir() {
        anyhow::bail!(
            "'{SOURCE_DIR}' directory not found in {}",
            config.project_root.display()
        );
    }

    let docs_dir = config.docs_dir();
    if docs_dir.exists() {
        println!("Cleaning existing docs directory: {}", docs_dir.display());
        io::remove_dir_tree(&docs_dir)
            .with_context(|| format!("failed to clean {}", docs_dir.display()))?;
    }

    println!("Starting dependency graph generation...");
    for file in DartWalker::new(&lib_dir).walk() {
        process_file(&file, &lib_dir, &docs_dir, config);
    }
    println!("Finished generation.");

    Ok(())
}

/// Extract, classify, and assemble the document for one source file.
pub fn build_document(
    relative_path: &str,
    file_name: &str,
    content: &str,
    config: &GraphConfig,
) -> DependencyDocument {
    let layer = classify_path(relative_path);
    let imports = extract_imports(content)
        .iter()
        .map(|target| classify_import(target, &config.package_name))
        .collect();

    DependencyDocument {
        file_name: file_name.to_string(),
        relative_path: relative_path.to_string(),
        source: GraphNode::new(layer, file_name),
        imports,
    }
}

/// Produce one document for `file_path`. Failures are printed and
/// swallowed here; the caller moves on to the next file.
fn process_file(file_path: &Path, lib_dir: &Path, docs_dir: &Path, config: &GraphConfig) {
    let content = match io::read_file(file_path) {
        Ok(content) => content,
        Err(err) => {
            println!("Error reading {}: {err}", file_path.display());
            return;
        }
    };

    let Some(relative) = relative_from(file_path, lib_dir) else {
        println!(
            "Error processing {}: not under {}",
            file_path.display(),
            lib_dir.display()
        );
        return;
    };
    let file_name = file_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let document = build_document(&relative, &file_name, &content, config);
    debug!(
        "{}: {} import(s) extracted",
        file_path.display(),
        document.imports.len()
    );
    let rendered = mermaid::render_document(&document, SOURCE_DIR);

    let doc_relative = match relative.strip_suffix(DART_EXTENSION) {
        Some(stem) => format!("{stem}{DOC_SUFFIX}"),
        None => format!("{relative}{DOC_SUFFIX}"),
    };
    let doc_path = docs_dir.join(&doc_relative);

    let written = match doc_path.parent() {
        Some(parent) => io::ensure_dir(parent).and_then(|()| io::write_file(&doc_path, &rendered)),
        None => io::write_file(&doc_path, &rendered),
    };
    match written {
        Ok(()) => println!("Generated: {DOCS_DIR}/{doc_relative}"),
        Err(err) => println!("Error writing {}: {err}", doc_path.display()),
    }
}

/// Forward-slashed path of `file_path` relative to `lib_dir`.
fn relative_from(file_path: &Path, lib_dir: &Path) -> Option<String> {
    let relative = file_path.strip_prefix(lib_dir).ok()?;
    let segments: Vec<String> = relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ImportKind, LayerTag};
    use std::path::PathBuf;

    fn config() -> GraphConfig {
        GraphConfig::new("/project", "acme_shop")
    }

    #[test]
    fn document_classifies_source_file_by_its_relative_path() {
        let document = build_document("domain/entities/order.dart", "order.dart", "", &config());
        assert_eq!(document.source.id, "order_dart");
        assert_eq!(document.source.label, "[Entity] order.dart");
        assert!(document.imports.is_empty());
    }

    #[test]
    fn document_carries_classified_imports_in_source_order() {
        let content = "import 'dart:async';\nimport 'package:acme_shop/infrastructure/order_repo.dart';\n";
        let document = build_document(
            "domain/entities/order.dart",
            "order.dart",
            content,
            &config(),
        );

        assert_eq!(document.imports.len(), 2);
        assert_eq!(document.imports[0].kind, ImportKind::DartCoreLibrary);
        assert_eq!(document.imports[0].name, "dart:async");
        assert_eq!(document.imports[1].kind, ImportKind::InternalAbsolute);
        assert_eq!(document.imports[1].layer, LayerTag::Infrastructure);
        assert_eq!(document.imports[1].name, "order_repo.dart");
    }

    #[test]
    fn relative_from_joins_components_with_forward_slashes() {
        let lib = PathBuf::from("/project/lib");
        let file = lib.join("widgets").join("card.dart");
        assert_eq!(
            relative_from(&file, &lib).as_deref(),
            Some("widgets/card.dart")
        );
        assert_eq!(relative_from(&PathBuf::from("/elsewhere/x.dart"), &lib), None);
    }
}
