//! Shared Selectors

use once_cell::sync::Lazy;
use scraper::Selector;

/// Selector for `<meta>` tags.
pub static META_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("meta").expect("valid meta selector"));

/// Selector for `<link>` tags.
pub static LINK_TAG_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("link").expect("valid link tag selector"));

/// Selector for `<script>` tags.
pub static SCRIPT_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("script").expect("valid script selector"));

/// Selector for anchors, with or without an href.
pub static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a").expect("valid anchor selector"));

/// Selector for `<img>` tags.
pub static IMG_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("img").expect("valid img selector"));

/// Selector for `<section>` containers.
pub static SECTION_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("section").expect("valid section selector"));
