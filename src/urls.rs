use regex::Regex;
use std::path::Path;

use crate::config::BASE_URL;

/// Map a root-relative page path to its canonical URL.
///
/// `index.html` files address their directory, with a trailing slash;
/// the root `index.html` is the bare origin. Separators are always
/// forward slashes, whatever the host convention.
pub fn to_url(rel_path: &Path) -> String {
    let rel: String = rel_path
        .components()
        .filter_map(|c| match c {
            std::path::Component::Normal(os_str) => Some(os_str.to_string_lossy().to_string()),
            _ => None,
        })
        .collect::<Vec<String>>()
        .join("/");

    if rel == "index.html" {
        return format!("{}/", BASE_URL);
    }
    if let Some(dir) = rel.strip_suffix("/index.html") {
        return format!("{}/{}/", BASE_URL, dir);
    }
    format!("{}/{}", BASE_URL, rel)
}

/// Crawl priority for a canonical URL.
///
/// Rules are evaluated in order and the first match wins: the site root
/// outranks the key toolkit/pricing pages, which outrank anything under
/// /insights/, which outranks the rest.
pub fn priority_for(url: &str) -> &'static str {
    let key_pages = Regex::new(r"/(toolkit|pricing)\.html$").unwrap();

    if url == format!("{}/", BASE_URL) {
        "1.0"
    } else if key_pages.is_match(url) {
        "0.8"
    } else if url.contains("/insights/") {
        "0.6"
    } else {
        "0.7"
    }
}
