use chrono::{DateTime, Utc};
use std::{fs, io, path::Path};

use crate::config::{Args, SitemapEntry, DRAFTS_DIR};
use crate::io::print_info;
use crate::urls::{priority_for, to_url};
use crate::walk::collect_pages;

/// Calendar date of a file's last modification, `YYYY-MM-DD` in UTC.
///
/// A failed stat (page deleted mid-run, permission error) is substituted
/// with today's date so a single bad file never aborts the build.
pub fn get_last_modified_date(path: &Path) -> String {
    match fs::metadata(path).and_then(|m| m.modified()) {
        Ok(mtime) => {
            let date: DateTime<Utc> = mtime.into();
            date.format("%Y-%m-%d").to_string()
        }
        Err(_) => Utc::now().format("%Y-%m-%d").to_string(),
    }
}

/// Walk the site root and assemble the finished entry list.
///
/// Pages under the drafts subtree are dropped, the rest are mapped to
/// entries and sorted by `loc` so repeated runs diff cleanly.
pub fn build_entries(args: &Args) -> io::Result<Vec<SitemapEntry>> {
    let pages = collect_pages(&args.root)?;

    let mut entries = Vec::new();
    for path in pages {
        let rel_path = path.strip_prefix(&args.root).unwrap_or(&path);

        if rel_path.starts_with(DRAFTS_DIR) {
            if args.verbose {
                print_info(&format!("Skipped (Draft): {}", rel_path.display()));
            }
            continue;
        }

        let loc = to_url(rel_path);
        let lastmod = get_last_modified_date(&path);
        let priority = priority_for(&loc).to_string();

        if args.verbose {
            print_info(&format!("Mapped: {} -> {}", rel_path.display(), loc));
        }

        entries.push(SitemapEntry {
            loc,
            lastmod,
            priority,
        });
    }

    entries.sort_by(|a, b| a.loc.cmp(&b.loc));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "<html></html>").unwrap();
    }

    fn args_for(root: &Path) -> Args {
        Args {
            root: root.to_path_buf(),
            verbose: false,
        }
    }

    #[test]
    fn lastmod_is_calendar_date() {
        let dir = tempdir().unwrap();
        let page = dir.path().join("index.html");
        touch(&page);

        let date_shape = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
        assert!(date_shape.is_match(&get_last_modified_date(&page)));
    }

    #[test]
    fn lastmod_recovers_for_missing_file() {
        let date_shape = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
        let date = get_last_modified_date(&PathBuf::from("/no/such/page.html"));
        assert!(date_shape.is_match(&date));
    }

    #[test]
    fn one_entry_per_qualifying_page() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("index.html"));
        touch(&dir.path().join("about.html"));
        touch(&dir.path().join("insights/post/index.html"));
        touch(&dir.path().join("404.html"));
        touch(&dir.path().join("assets/preview.html"));

        let entries = build_entries(&args_for(dir.path())).unwrap();
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn drafts_subtree_is_excluded() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("insights/published/index.html"));
        touch(&dir.path().join("insights/drafts/wip.html"));
        touch(&dir.path().join("insights/drafts/deep/nested.html"));

        let entries = build_entries(&args_for(dir.path())).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].loc,
            "https://www.agravicshift.com/insights/published/"
        );
    }

    #[test]
    fn drafts_match_is_component_wise() {
        let dir = tempdir().unwrap();
        // a sibling whose name merely starts with "drafts" is published
        touch(&dir.path().join("insights/drafts-archive/post.html"));

        let entries = build_entries(&args_for(dir.path())).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn entries_are_sorted_by_loc() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("b.html"));
        touch(&dir.path().join("a.html"));
        touch(&dir.path().join("index.html"));

        let entries = build_entries(&args_for(dir.path())).unwrap();
        let locs: Vec<&str> = entries.iter().map(|e| e.loc.as_str()).collect();
        // the root URL ends in '/' which sorts before "/a.html" and "/b.html"
        assert_eq!(
            locs,
            vec![
                "https://www.agravicshift.com/",
                "https://www.agravicshift.com/a.html",
                "https://www.agravicshift.com/b.html",
            ]
        );
    }

    #[test]
    fn rebuild_of_unchanged_tree_is_identical() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("index.html"));
        touch(&dir.path().join("insights/post/index.html"));

        let args = args_for(dir.path());
        let first = build_entries(&args).unwrap();
        let second = build_entries(&args).unwrap();
        assert_eq!(first, second);
    }
}
