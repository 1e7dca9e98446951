//! Layer classification for files and import targets.
//!
//! Classification is substring matching over path-like strings. The rules
//! overlap, so they are kept as an ordered table evaluated first-match-wins;
//! reordering them changes results (`lib/domain/utils.dart` must be
//! `Domain`, not `Theme`).

use crate::core::{ClassifiedImport, ImportKind, LayerTag};

const DART_CORE_PREFIX: &str = "dart:";
const PACKAGE_PREFIX: &str = "package:";

/// Theme constants file matched by name regardless of directory.
const THEME_CONSTANTS_FILE: &str = "app_colors.dart";

fn is_entity(path: &str) -> bool {
    path.contains("domain/entities") || path.contains("models")
}

fn is_domain(path: &str) -> bool {
    path.contains("domain") && !path.contains("entities")
}

fn is_infrastructure(path: &str) -> bool {
    ["infrastructure", "data", "repositories", "dtos", "repository"]
        .iter()
        .any(|keyword| path.contains(keyword))
}

fn is_application(path: &str) -> bool {
    ["application", "services", "providers", "usecases", "facade"]
        .iter()
        .any(|keyword| path.contains(keyword))
}

fn is_ui(path: &str) -> bool {
    ["pages", "widgets", "presentation", "views"]
        .iter()
        .any(|keyword| path.contains(keyword))
}

fn is_theme(path: &str) -> bool {
    path.contains("theme") || path.ends_with(THEME_CONSTANTS_FILE) || path.contains("utils")
}

/// Ordered rule table; the first matching predicate decides the tag.
const LAYER_RULES: &[(fn(&str) -> bool, LayerTag)] = &[
    (is_entity, LayerTag::Entity),
    (is_domain, LayerTag::Domain),
    (is_infrastructure, LayerTag::Infrastructure),
    (is_application, LayerTag::Application),
    (is_ui, LayerTag::UI),
    (is_theme, LayerTag::Theme),
];

/// Assign a layer tag to a path-like string. Used both for a source file's
/// own path (relative to the source root) and for internal import targets.
pub fn classify_path(path: &str) -> LayerTag {
    let path = path.replace('\\', "/");
    LAYER_RULES
        .iter()
        .find(|(matches, _)| matches(&path))
        .map(|(_, tag)| *tag)
        .unwrap_or(LayerTag::Project)
}

/// Classify one import target against the project's canonical package name.
///
/// `dart:` targets and foreign `package:` targets are libraries; targets
/// under `package:<package_name>/` are internal absolute imports classified
/// by their path; anything else is treated as a relative path and
/// classified as-is, without resolving it against the importing file.
pub fn classify_import(target: &str, package_name: &str) -> ClassifiedImport {
    if target.starts_with(DART_CORE_PREFIX) {
        return ClassifiedImport {
            kind: ImportKind::DartCoreLibrary,
            layer: LayerTag::Library,
            name: target.to_string(),
        };
    }

    if let Some(remainder) = target.strip_prefix(PACKAGE_PREFIX) {
        let internal_prefix = format!("{package_name}/");
        if let Some(path) = remainder.strip_prefix(&internal_prefix) {
            return ClassifiedImport {
                kind: ImportKind::InternalAbsolute,
                layer: classify_path(path),
                name: last_segment(target).to_string(),
            };
        }
        return ClassifiedImport {
            kind: ImportKind::ExternalPackage,
            layer: LayerTag::Library,
            name: compact_package_name(remainder),
        };
    }

    ClassifiedImport {
        kind: ImportKind::Relative,
        layer: classify_path(target),
        name: last_segment(target).to_string(),
    }
}

fn last_segment(target: &str) -> &str {
    target.rsplit('/').next().unwrap_or(target)
}

/// Compact an external target to `<package>/<file>`:
/// `flutter/src/material.dart` becomes `flutter/material.dart`, a bare
/// `collection` stays as-is.
fn compact_package_name(remainder: &str) -> String {
    let mut parts = remainder.split('/');
    let first = parts.next().unwrap_or(remainder);
    match parts.next_back() {
        Some(last) => format!("{first}/{last}"),
        None => first.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PACKAGE: &str = "acme_shop";

    #[test]
    fn dart_core_targets_are_libraries_with_unchanged_names() {
        let import = classify_import("dart:async", PACKAGE);
        assert_eq!(import.kind, ImportKind::DartCoreLibrary);
        assert_eq!(import.layer, LayerTag::Library);
        assert_eq!(import.name, "dart:async");
        assert!(import.kind.is_library());
    }

    #[test]
    fn internal_absolute_targets_classify_by_stripped_path() {
        let import = classify_import("package:acme_shop/domain/entities/user.dart", PACKAGE);
        assert_eq!(import.kind, ImportKind::InternalAbsolute);
        assert_eq!(import.layer, LayerTag::Entity);
        assert_eq!(import.name, "user.dart");
        assert!(!import.kind.is_library());
    }

    #[test]
    fn internal_target_outside_known_layers_is_project() {
        let import = classify_import("package:acme_shop/main.dart", PACKAGE);
        assert_eq!(import.kind, ImportKind::InternalAbsolute);
        assert_eq!(import.layer, LayerTag::Project);
        assert_eq!(import.name, "main.dart");
    }

    #[test]
    fn external_targets_compact_to_package_and_file() {
        let import = classify_import("package:flutter/material.dart", PACKAGE);
        assert_eq!(import.kind, ImportKind::ExternalPackage);
        assert_eq!(import.layer, LayerTag::Library);
        assert_eq!(import.name, "flutter/material.dart");

        let nested = classify_import("package:provider/src/provider.dart", PACKAGE);
        assert_eq!(nested.name, "provider/provider.dart");

        let bare = classify_import("package:collection", PACKAGE);
        assert_eq!(bare.name, "collection");
    }

    #[test]
    fn package_prefix_match_requires_trailing_slash() {
        // `acme_shop_extras` is a different package even though the name
        // shares a prefix with ours.
        let import = classify_import("package:acme_shop_extras/helper.dart", PACKAGE);
        assert_eq!(import.kind, ImportKind::ExternalPackage);
        assert_eq!(import.layer, LayerTag::Library);
        assert_eq!(import.name, "acme_shop_extras/helper.dart");
    }

    #[test]
    fn relative_targets_classify_their_raw_path() {
        let import = classify_import("../widgets/order_card.dart", PACKAGE);
        assert_eq!(import.kind, ImportKind::Relative);
        assert_eq!(import.layer, LayerTag::UI);
        assert_eq!(import.name, "order_card.dart");
    }

    #[test]
    fn classify_path_matches_in_priority_order() {
        assert_eq!(classify_path("domain/entities/user.dart"), LayerTag::Entity);
        assert_eq!(classify_path("data/models/user_dto.dart"), LayerTag::Entity);
        assert_eq!(classify_path("domain/value_objects/money.dart"), LayerTag::Domain);
        assert_eq!(classify_path("infrastructure/order_repo.dart"), LayerTag::Infrastructure);
        assert_eq!(classify_path("application/order_service.dart"), LayerTag::Application);
        assert_eq!(classify_path("pages/order_page.dart"), LayerTag::UI);
        assert_eq!(classify_path("theme/colors.dart"), LayerTag::Theme);
        assert_eq!(classify_path("app_colors.dart"), LayerTag::Theme);
        assert_eq!(classify_path("utils/format.dart"), LayerTag::Theme);
        assert_eq!(classify_path("main.dart"), LayerTag::Project);
    }

    #[test]
    fn overlapping_keywords_resolve_to_the_earlier_rule() {
        // Contains both `domain` and `utils`; the Domain rule fires first.
        assert_eq!(classify_path("domain/utils.dart"), LayerTag::Domain);
        // Contains both `services` and `widgets`; Application precedes UI.
        assert_eq!(classify_path("services/widgets_helper.dart"), LayerTag::Application);
    }

    #[test]
    fn entities_outside_domain_entities_suppress_the_domain_rule() {
        // `domain` is present, but so is `entities` (not as
        // `domain/entities`), so the Domain rule is skipped and the path
        // falls through to later rules.
        assert_eq!(classify_path("domain/sub/entities/user.dart"), LayerTag::Project);
    }

    #[test]
    fn backslashes_normalize_before_matching() {
        assert_eq!(classify_path("domain\\entities\\user.dart"), LayerTag::Entity);
    }
}
