use scraper::{Html, Selector};

use crate::selectors::{
    ANCHOR_SELECTOR, IMG_SELECTOR, LINK_TAG_SELECTOR, META_SELECTOR, SCRIPT_SELECTOR,
    SECTION_SELECTOR,
};
use crate::tools::types::{Attributes, TagList};

use super::types::{BodyAttributes, HeadAttributes};

/// Parse a full document; html5ever recovers from malformed markup on its own.
pub(super) fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

/// Collect the attributes of every element matching `selector`, in document order.
fn collect_tags(doc: &Html, selector: &Selector) -> TagList {
    doc.select(selector)
        .map(|el| {
            el.value()
                .attrs()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect::<Attributes>()
        })
        .collect()
}

pub(super) fn collect_head(doc: &Html) -> HeadAttributes {
    HeadAttributes {
        metas: collect_tags(doc, &META_SELECTOR),
        links: collect_tags(doc, &LINK_TAG_SELECTOR),
        scripts: collect_tags(doc, &SCRIPT_SELECTOR),
    }
}

pub(super) fn collect_body(doc: &Html) -> BodyAttributes {
    BodyAttributes {
        anchors: collect_tags(doc, &ANCHOR_SELECTOR),
        images: collect_tags(doc, &IMG_SELECTOR),
        sections: collect_tags(doc, &SECTION_SELECTOR),
    }
}
