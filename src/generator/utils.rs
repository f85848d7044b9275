use std::path::Path;

pub(super) const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "webp", "gif", "svg"];
pub(super) const DEFAULT_THUMBNAIL: &str = "../img.png";
const RESERVED_DIRS: [&str; 1] = ["img"];

pub(super) fn is_image(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
}

/// Whether a directory under the blog root holds a post.
pub(super) fn is_post_dir(name: &str) -> bool {
    !(name.starts_with('_') || name.starts_with('.') || RESERVED_DIRS.contains(&name))
}

/// Listing image: the hero if set, else the first image in the folder.
pub(super) fn select_thumbnail(slug: &str, hero: Option<&str>, images: &[String]) -> String {
    match hero.or_else(|| images.first().map(String::as_str)) {
        Some(file) => format!("{slug}/{file}"),
        None => DEFAULT_THUMBNAIL.to_string(),
    }
}
