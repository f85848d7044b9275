use std::collections::BTreeSet;

use serde::Serialize;

use crate::{
    catalog::PostRecord,
    metadata::{Metadata, SourceError},
};

/// A post folder as read from disk.
#[derive(Debug, Clone)]
pub(super) struct SourceFolder {
    pub slug: String,
    pub raw: String,
    /// Image file names directly inside the folder, sorted.
    pub images: Vec<String>,
}

/// A post that parsed successfully.
#[derive(Debug, Clone)]
pub(super) struct Post {
    pub slug: String,
    pub meta: Metadata,
    pub content: String,
    pub record: PostRecord,
}

#[derive(Debug, Default)]
pub(super) struct Batch {
    pub posts: Vec<Post>,
    pub skipped: Vec<(String, SourceError)>,
}

impl Batch {
    pub fn records(&self) -> Vec<PostRecord> {
        self.posts.iter().map(|p| p.record.clone()).collect()
    }

    /// Every folder handled this run, whether it parsed or was skipped.
    pub fn handled_slugs(&self) -> BTreeSet<String> {
        self.posts
            .iter()
            .map(|p| p.slug.clone())
            .chain(self.skipped.iter().map(|(slug, _)| slug.clone()))
            .collect()
    }
}

#[derive(Serialize, Debug)]
pub(super) struct PostPageData<'a> {
    pub blog_name: &'a str,
    pub blog_url: &'a str,
    pub slug: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub date: &'a str,
    pub tag: &'a str,
    pub hero: Option<String>,
    pub og_image: String,
    pub content: &'a str,
}
