use clap::{Arg, Command};
use std::path::PathBuf;

use crate::config::Args;
use crate::io::print_error;

/// parse command line arguments
pub fn parse_args() -> Args {
    let matches = Command::new("Sitemap Builder")
        .version("1.0")
        .about("Generate sitemap.xml for a static HTML website.")
        .arg(
            Arg::new("root")
                .short('r')
                .long("root")
                .value_parser(clap::value_parser!(String))
                .value_name("SITE_ROOT")
                .help("Specifies the site root directory (defaults to current directory if not provided)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(clap::ArgAction::SetTrue)
                .help("Enables verbose output"),
        )
        .get_matches();

    let root_dir_str = matches
        .get_one::<String>("root")
        .cloned()
        .unwrap_or_else(|| {
            std::env::current_dir()
                .map(|p| p.to_string_lossy().to_string())
                .unwrap_or_else(|_| {
                    print_error("Unable to determine the current directory.");
                    std::process::exit(1);
                })
        });

    Args {
        root: PathBuf::from(root_dir_str),
        verbose: *matches.get_one::<bool>("verbose").unwrap_or(&false),
    }
}
