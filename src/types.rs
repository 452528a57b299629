use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::tools::extract::{BodyAttributes, HeadAttributes};

/// The two variants of the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Default-language (German) page at the site root.
    De,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::De, Locale::En];

    pub fn is_default(self) -> bool {
        self == Locale::De
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::De => write!(f, "de"),
            Locale::En => write!(f, "en"),
        }
    }
}

/// Parsed, immutable view of one page, consumed by a single check run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot {
    pub locale: Locale,
    pub path: PathBuf,
    pub head: HeadAttributes,
    pub body: BodyAttributes,
}

/// The content contracts a page can be held to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckKind {
    /// Meta description, Open Graph, canonical/alternate links, JSON-LD.
    Seo,
    /// Repeated `btn primary` links to a single destination.
    PrimaryCta,
    /// Proof section with customer screenshots.
    Proof,
    /// Privacy-friendly analytics script.
    Analytics,
    /// Founding story, team, FAQ and founder profile.
    Company,
}

impl CheckKind {
    pub const ALL: [CheckKind; 5] = [
        CheckKind::Seo,
        CheckKind::PrimaryCta,
        CheckKind::Proof,
        CheckKind::Analytics,
        CheckKind::Company,
    ];

    /// Whether the check runs against `locale`.
    pub fn applies_to(self, locale: Locale) -> bool {
        match self {
            CheckKind::Seo | CheckKind::Company => true,
            CheckKind::PrimaryCta | CheckKind::Proof | CheckKind::Analytics => locale.is_default(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CheckKind::Seo => "seo",
            CheckKind::PrimaryCta => "primary-cta",
            CheckKind::Proof => "proof",
            CheckKind::Analytics => "analytics",
            CheckKind::Company => "company",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Fail,
    /// The page could not be loaded.
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutcome {
    pub check: CheckKind,
    pub locale: Locale,
    pub status: Status,
    #[serde(default)]
    pub messages: Vec<String>,
}

impl CheckOutcome {
    /// Pass when there are no violations, fail otherwise.
    pub fn from_violations(check: CheckKind, locale: Locale, violations: Vec<String>) -> Self {
        let status = if violations.is_empty() {
            Status::Pass
        } else {
            Status::Fail
        };
        Self {
            check,
            locale,
            status,
            messages: violations,
        }
    }

    pub fn error(check: CheckKind, locale: Locale, message: impl Into<String>) -> Self {
        Self {
            check,
            locale,
            status: Status::Error,
            messages: vec![message.into()],
        }
    }

    pub fn passed(&self) -> bool {
        self.status == Status::Pass
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub root: PathBuf,
    pub checked_at: DateTime<Utc>,
    pub outcomes: Vec<CheckOutcome>,
}

impl Report {
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(CheckOutcome::passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }

    pub fn outcome(&self, check: CheckKind, locale: Locale) -> Option<&CheckOutcome> {
        self.outcomes
            .iter()
            .find(|o| o.check == check && o.locale == locale)
    }
}
