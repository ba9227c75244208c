mod args;
mod build;
mod config;
mod io;
mod urls;
mod walk;
mod xml;

use crate::args::parse_args;
use crate::build::build_entries;
use crate::config::OUTPUT_FILE;
use crate::io::{print_error, print_info};
use crate::xml::write_sitemap;

fn main() -> std::io::Result<()> {
    let args = parse_args();

    if args.verbose {
        print_info("Verbose mode enabled.");
        print_info(&format!("Site root: {}", args.root.display()));
    }

    // A failed walk aborts before the write stage, so any previous
    // sitemap.xml is left untouched.
    let entries = match build_entries(&args) {
        Ok(entries) => entries,
        Err(e) => {
            print_error(&format!(
                "Failed to scan site root {}: {}",
                args.root.display(),
                e
            ));
            return Err(e);
        }
    };

    write_sitemap(&args, &entries)?;

    println!("Generated {} with {} URLs", OUTPUT_FILE, entries.len());
    Ok(())
}
