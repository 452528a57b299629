//! Content contracts for the pages shipped in this repository.

use std::path::PathBuf;

use sitecheck::tools::check::{
    check_analytics, check_company, check_primary_cta, check_proof, check_seo,
};
use sitecheck::{load_page, run_suite, Locale, PageSnapshot, SiteConfig};

fn config() -> SiteConfig {
    SiteConfig::default().with_root(PathBuf::from(env!("CARGO_MANIFEST_DIR")))
}

fn load(locale: Locale) -> PageSnapshot {
    let config = config();
    load_page(&config.page_path(locale), locale).unwrap_or_else(|e| panic!("{e}"))
}

#[test]
fn de_seo_and_social() {
    let page = load(Locale::De);
    let violations = check_seo(&page.head);
    assert!(violations.is_empty(), "{violations:#?}");
}

#[test]
fn en_seo_and_social() {
    let page = load(Locale::En);
    let violations = check_seo(&page.head);
    assert!(violations.is_empty(), "{violations:#?}");
}

#[test]
fn primary_cta_repeated() {
    let page = load(Locale::De);
    let violations = check_primary_cta(&page.body, &config());
    assert!(violations.is_empty(), "{violations:#?}");

    let ctas = page.body.anchors_with_classes(&["btn", "primary"]);
    assert!(ctas.len() >= 2);
}

#[test]
fn proof_assets_present() {
    let page = load(Locale::De);
    let violations = check_proof(&page.body, &config());
    assert!(violations.is_empty(), "{violations:#?}");
}

#[test]
fn analytics_present() {
    let page = load(Locale::De);
    let violations = check_analytics(&page.head, &config());
    assert!(violations.is_empty(), "{violations:#?}");
}

#[test]
fn de_company_and_team_sections() {
    let page = load(Locale::De);
    let violations = check_company(&page.body, Locale::De, &config());
    assert!(violations.is_empty(), "{violations:#?}");
}

#[test]
fn en_company_and_team_sections() {
    let page = load(Locale::En);
    let violations = check_company(&page.body, Locale::En, &config());
    assert!(violations.is_empty(), "{violations:#?}");
}

#[test]
fn full_suite_passes() {
    let report = run_suite(&config(), None);
    assert_eq!(report.outcomes.len(), 7);
    assert!(
        report.passed(),
        "{:#?}",
        report.failures().collect::<Vec<_>>()
    );
}
