//! Mermaid document rendering.

use crate::core::DependencyDocument;

/// Render the `graph TD` body: the source node declaration followed by one
/// edge per import. Imports whose sanitized id collides with the source's
/// own id are dropped so the diagram never contains a self-loop.
pub fn render_graph(document: &DependencyDocument) -> String {
    let source = &document.source;
    let mut lines = vec![format!("    {}[\"{}\"]", source.id, source.label)];

    for import in &document.imports {
        let node = import.node();
        if node.id == source.id {
            continue;
        }
        lines.push(format!(
            "    {} --> {}[\"{}\"]",
            source.id, node.id, node.label
        ));
    }

    lines.join("\n")
}

/// Wrap the graph body into the full Markdown document: a title naming the
/// file, its location under `source_dir`, and a fenced `mermaid` block.
pub fn render_document(document: &DependencyDocument, source_dir: &str) -> String {
    format!(
        "# Dependency Graph: {name}\n\n\
         Location: `{dir}/{path}`\n\n\
         ```mermaid\n\
         graph TD\n\
         {graph}\n\
         ```\n",
        name = document.file_name,
        dir = source_dir,
        path = document.relative_path,
        graph = render_graph(document),
    )
}
