use std::collections::BTreeMap;

use thiserror::Error;

pub(crate) const DEFAULT_DATE: &str = "2026-01-01";
pub(crate) const DEFAULT_TAG: &str = "Članak";

/// Content problems that exclude a single post from the build.
#[derive(Error, Debug, PartialEq, Eq)]
pub(crate) enum SourceError {
    #[error("no `---` separator between header and body")]
    MissingSeparator,
    #[error("header has no NASLOV")]
    MissingTitle,
}

/// Header fields of a post, keyed by uppercased name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Metadata {
    fields: BTreeMap<String, String>,
}

impl Metadata {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// NASLOV, or `""` when the header has none.
    pub fn title(&self) -> &str {
        self.get("NASLOV").unwrap_or_default()
    }

    pub fn date(&self) -> &str {
        self.get("DATUM").unwrap_or(DEFAULT_DATE)
    }

    pub fn tag(&self) -> &str {
        self.get("KATEGORIJA").unwrap_or(DEFAULT_TAG)
    }

    pub fn description(&self) -> &str {
        self.get("OPIS").unwrap_or_default()
    }

    pub fn hero(&self) -> Option<&str> {
        self.get("HERO").filter(|h| !h.is_empty())
    }
}

/// Parses `KEY: value` lines. Lines without a colon are ignored and a
/// repeated key keeps its last value.
pub(crate) fn parse_metadata(header: &str) -> Metadata {
    let mut fields = BTreeMap::new();
    for line in header.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some((key, value)) = line.split_once(':') {
            fields.insert(key.trim().to_uppercase(), value.trim().to_string());
        }
    }
    Metadata { fields }
}

/// Splits a source document at its first `---` line into header and body.
pub(crate) fn split_source(raw: &str) -> Result<(&str, &str), SourceError> {
    let mut offset = 0;
    for line in raw.split_inclusive('\n') {
        if line.trim() == "---" {
            return Ok((&raw[..offset], &raw[offset + line.len()..]));
        }
        offset += line.len();
    }
    Err(SourceError::MissingSeparator)
}

/// Header and body of a source document that carries a title.
pub(crate) fn parse_source(raw: &str) -> Result<(Metadata, &str), SourceError> {
    let (header, body) = split_source(raw)?;
    let meta = parse_metadata(header);
    if meta.title().is_empty() {
        return Err(SourceError::MissingTitle);
    }
    Ok((meta, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_metadata_trims_and_uppercases_keys() {
        let meta = parse_metadata("  naslov :  Javna nabava 2025  \nDatum: 2026-02-20\n");
        assert_eq!(meta.get("NASLOV"), Some("Javna nabava 2025"));
        assert_eq!(meta.title(), "Javna nabava 2025");
        assert_eq!(meta.date(), "2026-02-20");
    }

    #[test]
    fn parse_metadata_last_occurrence_wins() {
        let meta = parse_metadata("NASLOV: Prvi\nNASLOV: Drugi");
        assert_eq!(meta.title(), "Drugi");
    }

    #[test]
    fn parse_metadata_splits_on_first_colon_only() {
        let meta = parse_metadata("OPIS: Omjer 3:1 u korist malih\nHERO: a.png");
        assert_eq!(meta.description(), "Omjer 3:1 u korist malih");
        assert_eq!(meta.hero(), Some("a.png"));
    }

    #[test]
    fn parse_metadata_ignores_lines_without_colon() {
        let meta = parse_metadata("\nnothing here\n\nTEMA: x");
        assert_eq!(meta.get("NOTHING HERE"), None);
        assert_eq!(meta.get("TEMA"), Some("x"));
    }

    #[test]
    fn defaults_apply_for_missing_keys() {
        let meta = parse_metadata("NASLOV: T");
        assert_eq!(meta.date(), DEFAULT_DATE);
        assert_eq!(meta.tag(), DEFAULT_TAG);
        assert_eq!(meta.description(), "");
        assert_eq!(meta.hero(), None);
    }

    #[test]
    fn empty_hero_counts_as_unset() {
        assert_eq!(parse_metadata("HERO:").hero(), None);
    }

    #[test]
    fn split_source_at_separator_line() {
        let (header, body) = split_source("NASLOV: T\n---\nTekst\n").unwrap();
        assert_eq!(header, "NASLOV: T\n");
        assert_eq!(body, "Tekst\n");
    }

    #[test]
    fn split_source_uses_first_separator() {
        let (_, body) = split_source("NASLOV: T\n---\na\n---\nb").unwrap();
        assert_eq!(body, "a\n---\nb");
    }

    #[test]
    fn split_source_handles_crlf() {
        let (header, body) = split_source("NASLOV: T\r\n---\r\nTekst").unwrap();
        assert_eq!(header, "NASLOV: T\r\n");
        assert_eq!(body, "Tekst");
    }

    #[test]
    fn split_source_requires_whole_line() {
        assert_eq!(
            split_source("NASLOV: a---b\nTekst"),
            Err(SourceError::MissingSeparator)
        );
    }

    #[test]
    fn parse_source_rejects_missing_title() {
        assert_eq!(
            parse_source("DATUM: 2026-01-01\n---\nTekst").unwrap_err(),
            SourceError::MissingTitle
        );
        assert_eq!(
            parse_source("NASLOV:\n---\nTekst").unwrap_err(),
            SourceError::MissingTitle
        );
    }

    #[test]
    fn parse_source_returns_body() {
        let (meta, body) = parse_source("NASLOV: T\n---\n## H").unwrap();
        assert_eq!(meta.title(), "T");
        assert_eq!(body, "## H");
    }
}
