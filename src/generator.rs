mod data;
mod utils;

use std::path::Path;

use anyhow::Context as _;
use log::{debug, info, warn};

use crate::{
    catalog::{self, CatalogEntry, CatalogError, PostRecord},
    context::Context,
    markup,
    metadata::{parse_source, SourceError},
};

use data::{Batch, Post, PostPageData, SourceFolder};
use utils::{is_image, is_post_dir, select_thumbnail};

const SOURCE_FILE: &str = "sadrzaj.txt";

/// Reads every post folder under `blog_dir`, in name order.
fn scan_sources(blog_dir: &Path) -> anyhow::Result<Vec<SourceFolder>> {
    let mut dirs = vec![];
    for entry in std::fs::read_dir(blog_dir).with_context(|| format!("reading {blog_dir:?}"))? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            dirs.push(entry.path());
        }
    }
    dirs.sort();

    let mut sources = vec![];
    for dir in dirs {
        let slug = dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        if !is_post_dir(&slug) {
            debug!("Ignoring {slug}/");
            continue;
        }
        let source_path = dir.join(SOURCE_FILE);
        if !source_path.exists() {
            debug!("{slug}/ has no {SOURCE_FILE}, ignoring");
            continue;
        }

        let raw = std::fs::read_to_string(&source_path)
            .with_context(|| format!("reading {source_path:?}"))?;
        let mut images = vec![];
        for entry in std::fs::read_dir(&dir).with_context(|| format!("reading {dir:?}"))? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();
            if entry.file_type()?.is_file() && is_image(&name) {
                images.push(name);
            }
        }
        images.sort();

        sources.push(SourceFolder { slug, raw, images });
    }
    Ok(sources)
}

fn process_source(source: &SourceFolder) -> Result<Post, SourceError> {
    let (meta, body) = parse_source(&source.raw)?;
    let content = markup::to_html(body, &source.slug);
    let record = PostRecord {
        file: format!("{}.html", source.slug),
        title: meta.title().to_string(),
        description: meta.description().to_string(),
        date: meta.date().to_string(),
        image: select_thumbnail(&source.slug, meta.hero(), &source.images),
        tag: meta.tag().to_string(),
    };
    Ok(Post {
        slug: source.slug.clone(),
        meta,
        content,
        record,
    })
}

/// Parses and converts a batch of sources without touching the filesystem.
fn process_batch(sources: &[SourceFolder]) -> Batch {
    let mut batch = Batch::default();
    for source in sources {
        match process_source(source) {
            Ok(post) => batch.posts.push(post),
            Err(e) => batch.skipped.push((source.slug.clone(), e)),
        }
    }
    batch
}

fn render_page(ctx: &Context, post: &Post) -> anyhow::Result<String> {
    let hero = post.meta.hero().map(|h| format!("{}/{}", post.slug, h));
    let og_image = match &hero {
        Some(path) => format!("{}/blog/{}", ctx.blog_url, path),
        None => format!("{}/img.png", ctx.blog_url),
    };
    let data = PostPageData {
        blog_name: &ctx.blog_name,
        blog_url: &ctx.blog_url,
        slug: &post.slug,
        title: post.meta.title(),
        description: post.meta.description(),
        date: post.meta.date(),
        tag: post.meta.tag(),
        hero,
        og_image,
        content: &post.content,
    };
    ctx.handlebars
        .render("post", &data)
        .with_context(|| format!("while generating {}.html", post.slug))
}

fn load_prior_catalog(path: &Path) -> anyhow::Result<Vec<CatalogEntry>> {
    match catalog::load_catalog(path) {
        Ok(records) => Ok(records),
        Err(CatalogError::Malformed(e)) => {
            warn!("{path:?} is malformed ({e}), starting from an empty catalog");
            Ok(vec![])
        }
        Err(e) => Err(e).with_context(|| format!("while loading {path:?}")),
    }
}

pub(crate) fn generate(ctx: &Context) -> anyhow::Result<()> {
    let sources = scan_sources(&ctx.blog_dir)?;
    let batch = process_batch(&sources);

    for (slug, e) in batch.skipped.iter() {
        warn!("{slug}/{SOURCE_FILE}: {e}, skipping");
    }

    fs_extra::dir::create_all(&ctx.out_dir, false)?;
    for post in batch.posts.iter() {
        let html = render_page(ctx, post)?;
        let out_path = ctx.out_dir.join(&post.record.file);
        std::fs::write(&out_path, html).with_context(|| format!("writing {out_path:?}"))?;
        info!("Generated {}", post.record.file);
    }

    let prior = load_prior_catalog(&ctx.catalog_path)?;
    let merged = catalog::merge(batch.records(), &batch.handled_slugs(), prior);
    catalog::save_catalog(&ctx.catalog_path, &merged)
        .with_context(|| format!("while saving {:?}", ctx.catalog_path))?;
    info!("{:?} updated ({} posts)", ctx.catalog_path, merged.len());

    Ok(())
}
