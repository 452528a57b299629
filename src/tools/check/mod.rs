//! Content contracts over extracted page attributes.
//!
//! Each check returns every violation it finds; an empty list means the page
//! passes. Checks never depend on each other.

mod utils;


use utils::*;

use crate::config::SiteConfig;
use crate::tools::extract::{BodyAttributes, HeadAttributes};
use crate::types::{CheckKind, CheckOutcome, Locale, PageSnapshot};

/// Meta description, Open Graph tags, canonical/alternate links and JSON-LD.
pub fn check_seo(head: &HeadAttributes) -> Vec<String> {
    crate::merge!(
        missing_meta(head),
        missing_links(head),
        missing_structured_data(head),
    )
}

/// At least `min_primary_ctas` primary buttons, all pointing at one href.
pub fn check_primary_cta(body: &BodyAttributes, config: &SiteConfig) -> Vec<String> {
    let classes: Vec<&str> = config.cta_classes.iter().map(String::as_str).collect();
    let ctas = body.anchors_with_classes(&classes);
    let selector = format!(r#"class="{}""#, classes.join(" "));

    let mut violations = Vec::new();
    if ctas.len() < config.min_primary_ctas {
        violations.push(format!(
            "expected at least {} anchors with {selector}, found {}",
            config.min_primary_ctas,
            ctas.len()
        ));
    }

    // An anchor without href counts as its own (empty) destination.
    let hrefs: Vec<&str> = crate::distinct!(ctas
        .iter()
        .map(|a| a.get("href").map(String::as_str).unwrap_or("")));
    if !ctas.is_empty() && hrefs.len() != 1 {
        violations.push(format!(
            "primary CTA should be a single destination, found {}: {}",
            hrefs.len(),
            hrefs.join(", ")
        ));
    }
    violations
}

/// The proof section and its screenshots.
pub fn check_proof(body: &BodyAttributes, config: &SiteConfig) -> Vec<String> {
    let mut violations = missing_sections(body, std::slice::from_ref(&config.proof_section));

    let proof_images = body
        .image_sources()
        .iter()
        .filter(|src| src.starts_with(&config.proof_image_prefix))
        .count();
    if proof_images < config.min_proof_images {
        violations.push(format!(
            "expected at least {} images under {}, found {proof_images}",
            config.min_proof_images, config.proof_image_prefix
        ));
    }
    violations
}

/// A script tag carrying `data-domain` for the analytics site.
pub fn check_analytics(head: &HeadAttributes, config: &SiteConfig) -> Vec<String> {
    if head
        .scripts_with_data("domain", &config.analytics_domain)
        .is_empty()
    {
        vec![format!(
            r#"expected privacy-friendly analytics script with data-domain="{}""#,
            config.analytics_domain
        )]
    } else {
        Vec::new()
    }
}

/// Story, team and FAQ sections plus the founder's LinkedIn profile. The
/// default page also needs a team photo.
pub fn check_company(body: &BodyAttributes, locale: Locale, config: &SiteConfig) -> Vec<String> {
    let sections = missing_sections(body, &config.page(locale).required_sections);

    let has_profile = body
        .hrefs()
        .iter()
        .filter(|href| href.contains(&config.linkedin_path))
        .any(|href| href.contains(&config.linkedin_profile));
    let profile = if has_profile {
        Vec::new()
    } else {
        vec![format!(
            "no link to {}{}",
            config.linkedin_path, config.linkedin_profile
        )]
    };

    let has_team_photo = body
        .image_sources()
        .iter()
        .any(|src| src.contains(&config.team_image_marker));
    let photo = if !locale.is_default() || has_team_photo {
        Vec::new()
    } else {
        vec![format!(
            "no image with '{}' in its src",
            config.team_image_marker
        )]
    };

    crate::merge!(sections, profile, photo)
}

/// Run one check against a loaded page.
pub fn check_page(kind: CheckKind, page: &PageSnapshot, config: &SiteConfig) -> CheckOutcome {
    let violations = match kind {
        CheckKind::Seo => check_seo(&page.head),
        CheckKind::PrimaryCta => check_primary_cta(&page.body, config),
        CheckKind::Proof => check_proof(&page.body, config),
        CheckKind::Analytics => check_analytics(&page.head, config),
        CheckKind::Company => check_company(&page.body, page.locale, config),
    };
    CheckOutcome::from_violations(kind, page.locale, violations)
}
