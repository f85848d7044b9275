use maud::{html, Markup, PreEscaped};

use super::{Block, HeadingLevel};

// Text is authored by trusted writers and goes into the page verbatim.
pub(crate) fn render_block(block: &Block) -> Markup {
    match block {
        Block::Heading {
            level: HeadingLevel::H2,
            text,
        } => html! { h2 { (PreEscaped(text)) } },
        Block::Heading {
            level: HeadingLevel::H3,
            text,
        } => html! { h3 { (PreEscaped(text)) } },
        Block::Paragraph { text } => html! { p { (PreEscaped(text)) } },
        Block::List { items } => html! {
            ul {
                @for item in items {
                    li { (PreEscaped(item)) }
                }
            }
        },
        Block::Blockquote { text } => html! { blockquote { (PreEscaped(text)) } },
        Block::Figure {
            image_path,
            caption,
        } => html! {
            figure.blog-figure {
                img src=(PreEscaped(image_path)) alt=(PreEscaped(caption)) loading="lazy";
                @if !caption.is_empty() {
                    figcaption { (PreEscaped(caption)) }
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(block: Block) -> String {
        render_block(&block).into_string()
    }

    #[test]
    fn headings() {
        assert_eq!(
            render(Block::Heading {
                level: HeadingLevel::H2,
                text: "A".to_string()
            }),
            "<h2>A</h2>"
        );
        assert_eq!(
            render(Block::Heading {
                level: HeadingLevel::H3,
                text: "B".to_string()
            }),
            "<h3>B</h3>"
        );
    }

    #[test]
    fn paragraph_keeps_markup_verbatim() {
        assert_eq!(
            render(Block::Paragraph {
                text: "<strong>x</strong> & y".to_string()
            }),
            "<p><strong>x</strong> & y</p>"
        );
    }

    #[test]
    fn list_wraps_each_item() {
        assert_eq!(
            render(Block::List {
                items: vec!["a".to_string(), "b".to_string()]
            }),
            "<ul><li>a</li><li>b</li></ul>"
        );
    }

    #[test]
    fn blockquote() {
        assert_eq!(
            render(Block::Blockquote {
                text: "a b".to_string()
            }),
            "<blockquote>a b</blockquote>"
        );
    }

    #[test]
    fn figure_with_caption() {
        assert_eq!(
            render(Block::Figure {
                image_path: "post/x.png".to_string(),
                caption: "Opis".to_string()
            }),
            "<figure class=\"blog-figure\"><img src=\"post/x.png\" alt=\"Opis\" loading=\"lazy\"><figcaption>Opis</figcaption></figure>"
        );
    }

    #[test]
    fn figure_without_caption_has_no_figcaption() {
        let html = render(Block::Figure {
            image_path: "post/x.png".to_string(),
            caption: String::new(),
        });
        assert!(!html.contains("figcaption"));
        assert!(html.contains("alt=\"\""));
    }
}
