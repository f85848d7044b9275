use std::path::{Path, PathBuf};

use crate::renderer::generate_renderer;

/// Settings of one build run, assembled once in `main`.
#[derive(Debug)]
pub(crate) struct Context {
    pub blog_dir: PathBuf,
    pub out_dir: PathBuf,
    pub catalog_path: PathBuf,

    pub blog_name: String,
    pub blog_url: String,

    pub handlebars: handlebars::Handlebars<'static>,
}

impl Context {
    pub fn new(
        blog_dir: PathBuf,
        out_dir: Option<PathBuf>,
        catalog_path: Option<PathBuf>,
        template_dir: Option<&Path>,
        blog_name: String,
        blog_url: String,
    ) -> anyhow::Result<Self> {
        let out_dir = out_dir.unwrap_or_else(|| blog_dir.clone());
        let catalog_path = catalog_path.unwrap_or_else(|| out_dir.join("posts.json"));
        Ok(Self {
            blog_dir,
            out_dir,
            catalog_path,
            blog_name,
            blog_url: blog_url.trim_end_matches('/').to_string(),
            handlebars: generate_renderer(template_dir)?,
        })
    }
}
