use std::sync::LazyLock;

use regex::Regex;

use super::{inline, Block, HeadingLevel};

static FIGURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[SLIKA:\s*(.+?)\s*(?:\|\s*(.+?))?\s*\]").unwrap());

/// What a single trimmed line starts, before any state is considered.
#[derive(Debug, PartialEq, Eq)]
enum LineKind<'a> {
    Blank,
    Figure { file: &'a str, caption: &'a str },
    Heading(HeadingLevel, &'a str),
    Quote,
    ListItem(&'a str),
    Text,
}

impl<'a> LineKind<'a> {
    fn classify(line: &'a str) -> Self {
        if line.is_empty() {
            return LineKind::Blank;
        }
        if let Some(caps) = FIGURE.captures(line) {
            let file = caps.get(1).map_or("", |m| m.as_str());
            let caption = caps.get(2).map_or("", |m| m.as_str());
            return LineKind::Figure { file, caption };
        }
        if let Some(rest) = line.strip_prefix("### ") {
            return LineKind::Heading(HeadingLevel::H3, rest.trim());
        }
        if let Some(rest) = line.strip_prefix("## ") {
            return LineKind::Heading(HeadingLevel::H2, rest.trim());
        }
        if line.starts_with("> ") {
            return LineKind::Quote;
        }
        if let Some(rest) = line.strip_prefix("- ") {
            return LineKind::ListItem(rest.trim());
        }
        LineKind::Text
    }
}

#[derive(Debug, Default)]
enum State {
    #[default]
    Default,
    InList(Vec<String>),
}

/// Line cursor over a post body yielding one [`Block`] per step.
///
/// List items accumulate in [`State::InList`] and the list is emitted when
/// any other kind of line (or the end of input) is reached. Paragraphs and
/// blockquotes are consumed in one step.
pub(crate) struct Scanner<'a> {
    lines: Vec<&'a str>,
    pos: usize,
    folder: &'a str,
    state: State,
}

impl<'a> Scanner<'a> {
    pub fn new(body: &'a str, folder: &'a str) -> Self {
        Self {
            lines: body.trim().lines().map(str::trim).collect(),
            pos: 0,
            folder,
            state: State::Default,
        }
    }

    pub fn next_block(&mut self) -> Option<Block> {
        loop {
            let Some(&line) = self.lines.get(self.pos) else {
                return self.close_list();
            };
            let kind = LineKind::classify(line);

            if matches!(self.state, State::InList(_)) && !matches!(kind, LineKind::ListItem(_)) {
                if kind == LineKind::Blank {
                    self.pos += 1;
                }
                return self.close_list();
            }

            match kind {
                LineKind::Blank => self.pos += 1,
                LineKind::Figure { file, caption } => {
                    self.pos += 1;
                    return Some(Block::Figure {
                        image_path: format!("{}/{}", self.folder, file),
                        caption: caption.to_string(),
                    });
                }
                LineKind::Heading(level, text) => {
                    self.pos += 1;
                    return Some(Block::Heading {
                        level,
                        text: inline::format(text),
                    });
                }
                LineKind::Quote => return Some(self.take_quote()),
                LineKind::ListItem(text) => {
                    self.pos += 1;
                    let item = inline::format(text);
                    match &mut self.state {
                        State::InList(items) => items.push(item),
                        State::Default => self.state = State::InList(vec![item]),
                    }
                }
                LineKind::Text => return Some(self.take_paragraph()),
            }
        }
    }

    fn close_list(&mut self) -> Option<Block> {
        match std::mem::take(&mut self.state) {
            State::InList(items) => Some(Block::List { items }),
            State::Default => None,
        }
    }

    fn take_quote(&mut self) -> Block {
        let mut parts = vec![];
        while let Some(rest) = self.lines.get(self.pos).copied().and_then(|l| l.strip_prefix("> ")) {
            parts.push(rest);
            self.pos += 1;
        }
        Block::Blockquote {
            text: inline::format(&parts.join(" ")),
        }
    }

    fn take_paragraph(&mut self) -> Block {
        // The first line is always taken so malformed directives cannot stall the cursor.
        let mut parts = vec![self.lines[self.pos]];
        self.pos += 1;
        while let Some(&line) = self.lines.get(self.pos) {
            if LineKind::classify(line) != LineKind::Text {
                break;
            }
            parts.push(line);
            self.pos += 1;
        }
        Block::Paragraph {
            text: inline::format(&parts.join(" ")),
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        self.next_block()
    }
}
