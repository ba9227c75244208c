use std::{fs, io, path::PathBuf};

use crate::config::{Args, SitemapEntry, OUTPUT_FILE};
use crate::io::{print_info, print_warning};

/// Render the finished entry list as a sitemaps.org urlset document.
///
/// `loc` values are emitted as-is; paths containing `&` or `<` would
/// produce invalid XML, which the exclusion rules are expected to avoid.
pub fn render_sitemap_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n\n");

    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", entry.loc));
        xml.push_str(&format!("    <lastmod>{}</lastmod>\n", entry.lastmod));
        xml.push_str(&format!("    <priority>{}</priority>\n", entry.priority));
        xml.push_str("  </url>\n");
    }

    xml.push_str("\n</urlset>\n");
    xml
}

/// Write the document into the site root, replacing any previous copy.
///
/// A plain overwrite, not an atomic rename; a crash mid-write can leave
/// a truncated file.
pub fn write_sitemap(args: &Args, entries: &[SitemapEntry]) -> io::Result<PathBuf> {
    let sitemap_path = args.root.join(OUTPUT_FILE);

    if entries.is_empty() {
        print_warning("No publishable .html files found; writing an empty sitemap.");
    }

    let xml_content = render_sitemap_xml(entries);
    fs::write(&sitemap_path, &xml_content)?;

    if args.verbose {
        print_info(&format!(
            "Successfully generated {} at: {}",
            OUTPUT_FILE,
            sitemap_path.display()
        ));
    }

    Ok(sitemap_path)
}
