//! Load pages from disk and run every applicable check.

use chrono::Utc;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::SiteConfig;
use crate::error::{Result, SiteCheckError};
use crate::tools::check::check_page;
use crate::tools::extract::extract_page;
use crate::types::{CheckKind, CheckOutcome, Locale, PageSnapshot, Report, Status};

/// Read and parse one page file.
pub fn load_page(path: &Path, locale: Locale) -> Result<PageSnapshot> {
    let html =
        std::fs::read_to_string(path).map_err(|e| SiteCheckError::page_read(path, e))?;
    let page = extract_page(&html);
    debug!(
        path = %path.display(),
        metas = page.head.metas.len(),
        anchors = page.body.anchors.len(),
        "parsed page"
    );
    Ok(PageSnapshot {
        locale,
        path: path.to_path_buf(),
        head: page.head,
        body: page.body,
    })
}

/// Run a single check. Each run reads its own copy of the page, so a missing
/// file turns into an error outcome without touching other checks.
pub fn run_check(kind: CheckKind, locale: Locale, config: &SiteConfig) -> CheckOutcome {
    let path = config.page_path(locale);
    let outcome = match load_page(&path, locale) {
        Ok(page) => check_page(kind, &page, config),
        Err(e) => CheckOutcome::error(kind, locale, e.to_string()),
    };
    match outcome.status {
        Status::Pass => debug!(check = %kind, %locale, "passed"),
        Status::Fail => info!(check = %kind, %locale, violations = outcome.messages.len(), "failed"),
        Status::Error => warn!(check = %kind, %locale, error = %outcome.messages.join("; "), "errored"),
    }
    outcome
}

/// Run every check that applies to the selected locales (all when `None`).
pub fn run_suite(config: &SiteConfig, only: Option<Locale>) -> Report {
    let outcomes = Locale::ALL
        .into_iter()
        .filter(|locale| only.map_or(true, |o| o == *locale))
        .flat_map(|locale| {
            CheckKind::ALL
                .into_iter()
                .filter(move |kind| kind.applies_to(locale))
                .map(move |kind| (kind, locale))
        })
        .map(|(kind, locale)| run_check(kind, locale, config))
        .collect();

    let report = Report {
        root: config.root.clone(),
        checked_at: Utc::now(),
        outcomes,
    };
    info!(
        checks = report.outcomes.len(),
        failed = report.failures().count(),
        "suite finished"
    );
    report
}
