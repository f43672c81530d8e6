/// Java Census - a directory tree census for Java source code
///
/// The main entry point for the census binary. It parses command-line
/// arguments, sets up logging, scans the requested tree, and prints the
/// aggregated report.

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use log::{info, LevelFilter};

use java_census::{print_report, scan_directory};

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "java_census",
    version = "0.1.0",
    about = "A directory tree census for Java source code",
    long_about = "Recursively scans a directory tree, strips comments from every .java
file, counts occurrences of the keywords public, private, try, and catch,
and prints a per-directory report with byte sizes and keyword counts
rolled up from children to parents."
)]
struct Args {
    /// Root directory to scan
    root: String,

    /// Set logging level (default: INFO)
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,

    /// Log file path (default: java_census.log)
    #[arg(long = "log-file", default_value = "java_census.log")]
    log_file: String,
}

/// Main entry point function
fn main() -> Result<()> {
    // Record the start time
    let start_time = Instant::now();

    // Parse command line arguments
    let args = Args::parse();

    // Set up logging
    let _ = setup_logging(&args);

    if args.root.trim().is_empty() {
        eprintln!("{}", "Error: root directory argument is empty".red());
        process::exit(1);
    }

    // Build the whole tree before printing anything: a bad root must not
    // leave a partial report on stdout.
    let root = PathBuf::from(&args.root);
    let tree = match scan_directory(&root) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("{}", format!("Error: {}", e).red());
            process::exit(1);
        }
    };

    print_report(&tree)?;

    info!(
        "Scanned {} files in {:.2} seconds",
        tree.all_files().len(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Set up logging with file output so the report owns stdout
fn setup_logging(args: &Args) -> Result<()> {
    // Configure logging
    let mut builder = env_logger::Builder::new();

    // Set log level from arguments
    builder.filter_level(args.log_level);

    // Set format
    builder.format(|buf, record| {
        use chrono::Local;
        use std::io::Write;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    // Add file output
    if let Ok(file) = std::fs::File::create(&args.log_file) {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    // Initialize logger
    builder.init();

    Ok(())
}
