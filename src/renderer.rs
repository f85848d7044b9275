use std::path::Path;

use anyhow::Context;
use chrono::{Datelike, NaiveDate};
use handlebars::{handlebars_helper, Handlebars};
use log::warn;

const POST_TEMPLATE: &str = include_str!("../templates/post.hbs");

const MONTHS_HR: [&str; 12] = [
    "siječnja",
    "veljače",
    "ožujka",
    "travnja",
    "svibnja",
    "lipnja",
    "srpnja",
    "kolovoza",
    "rujna",
    "listopada",
    "studenoga",
    "prosinca",
];

/// `2026-02-20` -> `20. veljače 2026.`
pub(crate) fn format_date_hr(date: &str) -> Option<String> {
    let d = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
    Some(format!(
        "{}. {} {}.",
        d.day(),
        MONTHS_HR[d.month0() as usize],
        d.year()
    ))
}

handlebars_helper!(date_hr: |date: str| {
    format_date_hr(date).unwrap_or_else(|| {
        warn!("Invalid date {date:?}, rendering as it is");
        date.to_string()
    })
});

/// Page chrome registry. Uses `post.hbs` from `template_dir` when present.
/// Escaping is off: post text is inserted as written.
pub(crate) fn generate_renderer(template_dir: Option<&Path>) -> anyhow::Result<Handlebars<'static>> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars.register_helper("date_hr", Box::new(date_hr));

    match template_dir.map(|dir| dir.join("post.hbs")) {
        Some(path) if path.exists() => handlebars
            .register_template_file("post", &path)
            .with_context(|| format!("{path:?}"))?,
        _ => handlebars
            .register_template_string("post", POST_TEMPLATE)
            .context("built-in post template")?,
    }

    Ok(handlebars)
}
