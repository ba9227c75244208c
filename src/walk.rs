use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::config::{SKIP_DIRS, SKIP_FILES};

/// Collect every publishable `.html` file under the site root.
///
/// Depth-first; skipped directory names are never descended into, so
/// nothing beneath them is visited. Any unreadable directory fails the
/// whole walk.
pub fn collect_pages(root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut pages = Vec::new();

    fn traverse(dir: &Path, pages: &mut Vec<PathBuf>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_dir() {
                if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
                    if SKIP_DIRS.contains(&name) {
                        continue;
                    }
                }
                traverse(&path, pages)?;
            } else if path.is_file() {
                if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
                    if name.ends_with(".html") && !SKIP_FILES.contains(&name) {
                        pages.push(path);
                    }
                }
            }
        }
        Ok(())
    }

    traverse(root, &mut pages)?;
    Ok(pages)
}
