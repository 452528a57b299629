pub mod types;
mod utils;

#[cfg(test)]
mod tests;

pub use types::*;
use utils::*;

/// Extract `<meta>`, `<link>` and `<script>` attributes from HTML.
pub fn extract_head(html: &str) -> HeadAttributes {
    collect_head(&parse_document(html))
}

/// Extract `<a>`, `<img>` and `<section>` attributes from HTML.
pub fn extract_body(html: &str) -> BodyAttributes {
    collect_body(&parse_document(html))
}

/// Extract head and body collections from a single parse.
pub fn extract_page(html: &str) -> ExtractPageResult {
    let doc = parse_document(html);
    ExtractPageResult {
        head: collect_head(&doc),
        body: collect_body(&doc),
    }
}
