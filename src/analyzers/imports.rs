//! Textual import extraction.
//!
//! Matching is line-local and comment-unaware on purpose: a declaration
//! split across lines is not detected, and a commented-out line whose
//! trimmed text still starts with `import ` is. Downstream consumers rely
//! on exactly this behavior.

use once_cell::sync::Lazy;
use regex::Regex;

/// Captures the quoted target of an import statement.
static IMPORT_TARGET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"import\s+['"]([^'"]+)['"]"#).unwrap());

/// Collect import target strings from `content`, preserving source order
/// and duplicates.
///
/// A line counts only if its trimmed form starts with the `import` keyword
/// followed by a space and contains a quoted string after it.
pub fn extract_imports(content: &str) -> Vec<String> {
    let mut targets = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if !line.starts_with("import ") {
            continue;
        }
        if let Some(captures) = IMPORT_TARGET.captures(line) {
            targets.push(captures[1].to_string());
        }
    }
    targets
}
