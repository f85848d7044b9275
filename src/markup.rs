//! Conversion of the post body markup into HTML.
//!
//! The body is line oriented: [`scanner::Scanner`] turns lines into
//! [`Block`]s, running [`inline::format`] over their text, and
//! [`render::render_block`] maps each block to one HTML fragment.

pub(crate) mod inline;
pub(crate) mod render;
pub(crate) mod scanner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HeadingLevel {
    H2,
    H3,
}

/// One structural unit of a post body. Text is already inline-formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Block {
    Heading { level: HeadingLevel, text: String },
    Paragraph { text: String },
    List { items: Vec<String> },
    Blockquote { text: String },
    Figure { image_path: String, caption: String },
}

/// Scans a body and returns its blocks in document order.
pub(crate) fn parse_body(body: &str, folder: &str) -> Vec<Block> {
    scanner::Scanner::new(body, folder).collect()
}

/// Renders blocks into one HTML fragment per block.
pub(crate) fn render_fragment(blocks: &[Block]) -> Vec<String> {
    blocks
        .iter()
        .map(|block| render::render_block(block).into_string())
        .collect()
}

/// Body markup to the HTML placed inside the post content area.
pub(crate) fn to_html(body: &str, folder: &str) -> String {
    render_fragment(&parse_body(body, folder)).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_html_joins_fragments_in_order() {
        let html = to_html("## Uvod\n\nPrvi *red*\ndrugi red\n\n- a\n- b", "post");
        assert_eq!(
            html,
            "<h2>Uvod</h2>\n<p>Prvi <em>red</em> drugi red</p>\n<ul><li>a</li><li>b</li></ul>"
        );
    }

    #[test]
    fn empty_body_renders_nothing() {
        assert_eq!(to_html("\n  \n", "post"), "");
    }
}
