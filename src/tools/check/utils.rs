use crate::tools::extract::{BodyAttributes, HeadAttributes};

/// Meta properties every page must fill for social sharing.
pub(super) const OPEN_GRAPH_PROPERTIES: &[&str] = &["og:title", "og:description", "og:url"];

/// Link relations every page must declare.
pub(super) const REQUIRED_LINK_RELATIONS: &[&str] = &["canonical", "alternate"];

pub(super) const JSONLD_TYPE: &str = "application/ld+json";

fn is_filled(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

pub(super) fn missing_meta(head: &HeadAttributes) -> Vec<String> {
    let mut violations = Vec::new();
    if !is_filled(head.meta_name("description")) {
        violations.push(r#"meta name="description" is missing or empty"#.to_string());
    }
    for property in OPEN_GRAPH_PROPERTIES {
        if !is_filled(head.meta_property(property)) {
            violations.push(format!(r#"meta property="{property}" is missing or empty"#));
        }
    }
    violations
}

pub(super) fn missing_links(head: &HeadAttributes) -> Vec<String> {
    REQUIRED_LINK_RELATIONS
        .iter()
        .filter(|rel| !head.has_link_relation(rel))
        .map(|rel| format!(r#"no <link rel="{rel}">"#))
        .collect()
}

pub(super) fn missing_structured_data(head: &HeadAttributes) -> Vec<String> {
    let found = head
        .script_types()
        .iter()
        .any(|t| t.eq_ignore_ascii_case(JSONLD_TYPE));
    if found {
        Vec::new()
    } else {
        vec![format!(r#"no <script type="{JSONLD_TYPE}"> structured data"#)]
    }
}

pub(super) fn missing_sections(body: &BodyAttributes, required: &[String]) -> Vec<String> {
    required
        .iter()
        .filter(|id| !body.has_section(id))
        .map(|id| format!(r#"no <section id="{id}">"#))
        .collect()
}
