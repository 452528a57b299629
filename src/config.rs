use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, SiteCheckError};
use crate::types::Locale;

/// Path and locale-specific expectations of one page variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    /// Relative to the site root.
    pub path: PathBuf,
    /// Section ids that must be present.
    #[serde(default)]
    pub required_sections: Vec<String>,
}

/// Everything the checks compare against. Every field has a default, so a
/// config file only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub root: PathBuf,
    pub de: PageConfig,
    pub en: PageConfig,
    pub analytics_domain: String,
    pub proof_section: String,
    pub proof_image_prefix: String,
    pub min_proof_images: usize,
    pub cta_classes: Vec<String>,
    pub min_primary_ctas: usize,
    pub linkedin_path: String,
    pub linkedin_profile: String,
    pub team_image_marker: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            de: PageConfig {
                path: PathBuf::from("index.html"),
                required_sections: vec!["gruendungsstory".into(), "team".into(), "faq".into()],
            },
            en: PageConfig {
                path: PathBuf::from("en").join("index.html"),
                required_sections: vec!["founder-story".into(), "team".into(), "faq".into()],
            },
            analytics_domain: "briefpro.de".into(),
            proof_section: "proof".into(),
            proof_image_prefix: "/assets/proof-".into(),
            min_proof_images: 3,
            cta_classes: vec!["btn".into(), "primary".into()],
            min_primary_ctas: 2,
            linkedin_path: "linkedin.com/in/".into(),
            linkedin_profile: "angelcastrom".into(),
            team_image_marker: "team-".into(),
        }
    }
}

impl SiteConfig {
    /// Defaults, or the defaults overlaid by a JSON file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path).map_err(|source| SiteCheckError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| SiteCheckError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn page(&self, locale: Locale) -> &PageConfig {
        match locale {
            Locale::De => &self.de,
            Locale::En => &self.en,
        }
    }

    /// Absolute-or-root-relative location of a page on disk.
    pub fn page_path(&self, locale: Locale) -> PathBuf {
        self.root.join(&self.page(locale).path)
    }
}
