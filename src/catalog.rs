//! The listing catalog (`posts.json`): persisted post summaries, newest first.
//!
//! Persisted entries are kept as raw JSON objects so hand-curated records
//! pass through a rebuild exactly as written.

use std::{
    collections::BTreeSet,
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use log::info;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum CatalogError {
    #[error("catalog is not a valid list of posts: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("catalog could not be read: {0}")]
    Io(#[from] std::io::Error),
}

pub(crate) type CatalogEntry = Map<String, Value>;

/// Listing entry of a post generated in this run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PostRecord {
    pub file: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub image: String,
    pub tag: String,
}

impl PostRecord {
    fn into_entry(self) -> CatalogEntry {
        let mut entry = Map::new();
        entry.insert("file".to_string(), Value::String(self.file));
        entry.insert("title".to_string(), Value::String(self.title));
        entry.insert("description".to_string(), Value::String(self.description));
        entry.insert("date".to_string(), Value::String(self.date));
        entry.insert("image".to_string(), Value::String(self.image));
        entry.insert("tag".to_string(), Value::String(self.tag));
        entry
    }
}

/// String field of an entry; missing or non-string values read as `""`.
pub(crate) fn entry_str<'a>(entry: &'a CatalogEntry, key: &str) -> &'a str {
    entry.get(key).and_then(Value::as_str).unwrap_or_default()
}

pub(crate) fn entry_slug(entry: &CatalogEntry) -> &str {
    let file = entry_str(entry, "file");
    file.strip_suffix(".html").unwrap_or(file)
}

/// Generated records plus every persisted entry whose slug is not in
/// `handled`, sorted by date descending. Equal dates keep generated records
/// first.
///
/// `handled` holds every post folder seen this run, including folders that
/// failed to parse, so their stale entries are dropped too.
pub(crate) fn merge(
    generated: Vec<PostRecord>,
    handled: &BTreeSet<String>,
    persisted: Vec<CatalogEntry>,
) -> Vec<CatalogEntry> {
    let generated: Vec<CatalogEntry> = generated.into_iter().map(PostRecord::into_entry).collect();
    let carried: Vec<CatalogEntry> = persisted
        .into_iter()
        .filter(|e| {
            let slug = entry_slug(e);
            !handled.contains(slug) && !generated.iter().any(|g| entry_slug(g) == slug)
        })
        .collect();
    let mut merged = generated;
    merged.extend(carried);
    merged.sort_by(|a, b| entry_str(b, "date").cmp(entry_str(a, "date")));
    merged
}

/// Reads the persisted catalog. A missing file is an empty catalog.
pub(crate) fn load_catalog(path: &Path) -> Result<Vec<CatalogEntry>, CatalogError> {
    if path.exists() {
        let fd = File::open(path)?;
        let reader = BufReader::new(fd);
        serde_json::from_reader(reader).map_err(|e| {
            if e.is_io() {
                CatalogError::Io(e.into())
            } else {
                CatalogError::Malformed(e)
            }
        })
    } else {
        info!("Catalog file({path:?}) does not exist. starting empty...");
        Ok(vec![])
    }
}

pub(crate) fn save_catalog(path: &Path, catalog: &[CatalogEntry]) -> anyhow::Result<()> {
    let fd = File::create(path)?;
    let mut writer = BufWriter::new(fd);
    serde_json::to_writer_pretty(&mut writer, catalog)?;
    writer.flush()?;

    Ok(())
}
