use std::path::PathBuf;

/// Canonical origin prepended to every generated URL.
pub const BASE_URL: &str = "https://www.agravicshift.com";

/// Directory names the walker never descends into.
pub const SKIP_DIRS: [&str; 6] = [
    ".git",
    ".github",
    "node_modules",
    "assets",
    ".vercel",
    "scripts",
];

/// File names excluded by exact match wherever they appear.
pub const SKIP_FILES: [&str; 1] = ["404.html"];

/// Unpublished pages live under this subtree, relative to the site root.
pub const DRAFTS_DIR: &str = "insights/drafts";

/// Name of the generated document, written into the site root.
pub const OUTPUT_FILE: &str = "sitemap.xml";

#[derive(Debug)]
pub struct Args {
    pub root: PathBuf,
    pub verbose: bool,
}

/// One `<url>` record of the generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: String,
    pub priority: String,
}

pub const COLOR_RED: &str = "\x1b[31m";
pub const COLOR_YELLOW: &str = "\x1b[33m";
pub const COLOR_CYAN: &str = "\x1b[36m";
pub const COLOR_RESET: &str = "\x1b[0m";
