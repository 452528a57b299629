use super::*;

const PAGE: &str = r#"
<!doctype html>
<html lang="de">
    <head>
        <meta charset="utf-8">
        <meta name="description" content="Briefe in Minuten">
        <meta property="og:title" content="BriefPro">
        <link rel="canonical" href="https://briefpro.de/">
        <link rel="alternate" hreflang="en" href="https://briefpro.de/en/">
        <script defer data-domain="briefpro.de" src="https://plausible.io/js/script.js"></script>
        <script type="application/ld+json">{"@type": "Organization"}</script>
    </head>
    <body>
        <a class="btn primary" href="/start">Start</a>
        <a name="top"></a>
        <section id="proof">
            <img src="/assets/proof-1.jpg" alt="">
        </section>
        <section></section>
    </body>
</html>
"#;

#[test]
fn test_extract_head_keeps_document_order() {
    let head = extract_head(PAGE);
    assert_eq!(head.metas.len(), 3);
    assert_eq!(head.metas[0].get("charset"), Some(&"utf-8".to_string()));
    assert_eq!(head.links.len(), 2);
    assert_eq!(head.link_relations(), vec!["canonical", "alternate"]);
    assert_eq!(head.scripts.len(), 2);
    assert_eq!(head.script_types(), vec!["application/ld+json"]);
}

#[test]
fn test_extract_head_captures_data_and_valueless_attributes() {
    let head = extract_head(PAGE);
    let script = &head.scripts[0];
    assert_eq!(script.get("data-domain"), Some(&"briefpro.de".to_string()));
    assert_eq!(script.get("defer"), Some(&String::new()));
    assert_eq!(head.scripts_with_data("domain", "briefpro.de").len(), 1);
    assert!(head.scripts_with_data("domain", "example.com").is_empty());
}

#[test]
fn test_meta_lookup_by_name_and_property() {
    let head = extract_head(PAGE);
    assert_eq!(head.meta_name("description"), Some("Briefe in Minuten"));
    assert_eq!(head.meta_property("og:title"), Some("BriefPro"));
    assert_eq!(head.meta_property("og:url"), None);
    // A property is not a name.
    assert_eq!(head.meta_name("og:title"), None);
}

#[test]
fn test_meta_lookup_later_duplicate_wins() {
    let head = extract_head(
        r#"<meta name="description" content="first"><meta name="description" content="">"#,
    );
    assert_eq!(head.meta_name("description"), Some(""));
}

#[test]
fn test_link_relations_split_tokens() {
    let head = extract_head(r#"<link rel="alternate  canonical" href="/"><link href="/x">"#);
    assert_eq!(head.link_relations(), vec!["alternate", "canonical"]);
    assert!(head.has_link_relation("canonical"));
    assert!(!head.has_link_relation("icon"));
}

#[test]
fn test_extract_body_collects_all_occurrences() {
    let body = extract_body(PAGE);
    assert_eq!(body.anchors.len(), 2);
    assert_eq!(body.hrefs(), vec!["/start"]);
    assert_eq!(body.image_sources(), vec!["/assets/proof-1.jpg"]);
    assert_eq!(body.sections.len(), 2);
    assert_eq!(body.section_ids(), vec!["proof"]);
    assert!(body.has_section("proof"));
    assert!(!body.has_section("faq"));
}

#[test]
fn test_anchors_with_classes_matches_tokens() {
    let body = extract_body(
        r#"
        <a class="btn primary" href="/a">A</a>
        <a class="primary large btn" href="/b">B</a>
        <a class="btn-primary" href="/c">C</a>
        <a class="btn" href="/d">D</a>
        <a href="/e">E</a>
        "#,
    );
    let hrefs: Vec<&str> = body
        .anchors_with_classes(&["btn", "primary"])
        .iter()
        .filter_map(|a| a.get("href"))
        .map(String::as_str)
        .collect();
    assert_eq!(hrefs, vec!["/a", "/b"]);
}

#[test]
fn test_extract_tolerates_malformed_markup() {
    let html = r#"
        <div><section id="faq"><p>Unclosed <a href="/x" class="btn primary">Go</a><img src="/a.png">
        </section></div></div></span>
        <custom-widget data-x="1"></custom-widget>
    "#;
    let page = extract_page(html);
    assert_eq!(page.body.section_ids(), vec!["faq"]);
    assert_eq!(page.body.anchors.len(), 1);
    assert_eq!(page.body.image_sources(), vec!["/a.png"]);
    assert!(page.head.metas.is_empty());
}

#[test]
fn test_extract_empty_document() {
    let page = extract_page("");
    assert_eq!(page, ExtractPageResult::default());
}

#[test]
fn test_extract_page_matches_separate_extractors() {
    let page = extract_page(PAGE);
    assert_eq!(page.head, extract_head(PAGE));
    assert_eq!(page.body, extract_body(PAGE));
}
