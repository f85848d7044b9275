use std::path::PathBuf;

use anyhow::bail;
use clap::{command, value_parser, Arg};
use context::Context;
use generator::generate;

mod catalog;
mod context;
mod generator;
mod markup;
mod metadata;
mod renderer;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = command!()
        .args([
            Arg::new("blog_dir")
                .help("Directory of post folders, each holding a sadrzaj.txt")
                .value_parser(value_parser!(PathBuf))
                .default_value("blog"),
            Arg::new("out_dir")
                .long("out-dir")
                .help("Directory where <slug>.html pages are written. Defaults to blog_dir.")
                .value_parser(value_parser!(PathBuf)),
            Arg::new("catalog")
                .long("catalog")
                .help("Post catalog file. Defaults to <out_dir>/posts.json.")
                .value_parser(value_parser!(PathBuf)),
            Arg::new("template_dir")
                .long("template-dir")
                .help("Directory with a post.hbs replacing the built-in page template")
                .value_parser(value_parser!(PathBuf)),
        ])
        .get_matches();

    let Some(blog_dir) = matches.get_one::<PathBuf>("blog_dir") else {
        bail!("blog_dir is required.");
    };
    if !blog_dir.is_dir() {
        bail!("blog_dir must be a directory.");
    }
    let out_dir = matches.get_one::<PathBuf>("out_dir").cloned();
    if out_dir.as_ref().is_some_and(|d| d.exists() && !d.is_dir()) {
        bail!("if out_dir exists, it must be a directory.");
    }
    let template_dir = matches.get_one::<PathBuf>("template_dir");
    if template_dir.is_some_and(|d| !d.is_dir()) {
        bail!("template_dir must be a directory.");
    }

    let ctx = Context::new(
        blog_dir.to_owned(),
        out_dir,
        matches.get_one::<PathBuf>("catalog").cloned(),
        template_dir.map(PathBuf::as_path),
        std::env::var("BLOG_NAME").unwrap_or("TenderAtlas".to_string()),
        std::env::var("BLOG_URL").unwrap_or("https://tenderatlas.hr".to_string()),
    )?;

    generate(&ctx)
}
