use serde::{Deserialize, Serialize};

use crate::tools::types::{Attributes, TagList};

/// Head-level tags: `<meta>`, `<link>` and `<script>`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct HeadAttributes {
    #[serde(default)]
    pub metas: TagList,
    #[serde(default)]
    pub links: TagList,
    #[serde(default)]
    pub scripts: TagList,
}

impl HeadAttributes {
    /// Content of the `<meta name=…>` tag. A later duplicate wins.
    pub fn meta_name(&self, name: &str) -> Option<&str> {
        meta_lookup(&self.metas, "name", name)
    }

    /// Content of the `<meta property=…>` tag (Open Graph). A later duplicate wins.
    pub fn meta_property(&self, property: &str) -> Option<&str> {
        meta_lookup(&self.metas, "property", property)
    }

    /// All `rel` tokens of all link tags, in document order.
    pub fn link_relations(&self) -> Vec<&str> {
        self.links
            .iter()
            .filter_map(|link| link.get("rel"))
            .flat_map(|rel| rel.split_whitespace())
            .collect()
    }

    pub fn has_link_relation(&self, rel: &str) -> bool {
        self.link_relations()
            .iter()
            .any(|r| r.eq_ignore_ascii_case(rel))
    }

    /// `type` attribute of each script tag; untyped scripts are skipped.
    pub fn script_types(&self) -> Vec<&str> {
        self.scripts
            .iter()
            .filter_map(|script| script.get("type"))
            .map(|t| t.trim())
            .collect()
    }

    /// Script tags whose `data-<key>` attribute equals `value`.
    pub fn scripts_with_data(&self, key: &str, value: &str) -> Vec<&Attributes> {
        let attr = format!("data-{key}");
        self.scripts
            .iter()
            .filter(|script| script.get(&attr).map(String::as_str) == Some(value))
            .collect()
    }
}

fn meta_lookup<'a>(metas: &'a TagList, key_attr: &str, key: &str) -> Option<&'a str> {
    metas
        .iter()
        .filter(|meta| meta.get(key_attr).map(String::as_str) == Some(key))
        .last()
        .map(|meta| meta.get("content").map(String::as_str).unwrap_or(""))
}

/// Body-level tags: `<a>`, `<img>` and `<section>`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BodyAttributes {
    #[serde(default)]
    pub anchors: TagList,
    #[serde(default)]
    pub images: TagList,
    #[serde(default)]
    pub sections: TagList,
}

impl BodyAttributes {
    /// Anchors whose class list contains every one of `classes`.
    pub fn anchors_with_classes(&self, classes: &[&str]) -> Vec<&Attributes> {
        self.anchors
            .iter()
            .filter(|anchor| {
                let tokens: Vec<&str> = anchor
                    .get("class")
                    .map(|c| c.split_whitespace().collect())
                    .unwrap_or_default();
                classes.iter().all(|wanted| tokens.contains(wanted))
            })
            .collect()
    }

    /// Non-empty hrefs of all anchors, in document order.
    pub fn hrefs(&self) -> Vec<&str> {
        self.anchors
            .iter()
            .filter_map(|anchor| anchor.get("href"))
            .map(String::as_str)
            .filter(|href| !href.is_empty())
            .collect()
    }

    /// Image sources, in document order.
    pub fn image_sources(&self) -> Vec<&str> {
        self.images
            .iter()
            .filter_map(|img| img.get("src"))
            .map(String::as_str)
            .collect()
    }

    pub fn section_ids(&self) -> Vec<&str> {
        self.sections
            .iter()
            .filter_map(|section| section.get("id"))
            .map(String::as_str)
            .collect()
    }

    pub fn has_section(&self, id: &str) -> bool {
        self.section_ids().contains(&id)
    }
}

/// Both collections of one document.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExtractPageResult {
    pub head: HeadAttributes,
    pub body: BodyAttributes,
}
