/// Java Census - a directory tree census for Java source code
///
/// This library scans a directory tree, analyzes every `.java` file it
/// finds (byte size plus keyword occurrence counts over comment-stripped
/// contents), and renders a per-directory report with statistics rolled up
/// from children to parents.

// Re-export core modules
pub mod core;
pub mod error;
pub mod utils;

// Re-export the main census types for convenience
pub use crate::core::analyzer::SourceFile;
pub use crate::core::patterns::{SOURCE_EXTENSION, TRACKED_KEYWORDS};
pub use crate::core::scanner::build_tree;
pub use crate::core::tree::DirNode;
pub use crate::error::{CensusError, Result};
pub use crate::utils::output_formatter::{format_report, print_report};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scan a directory tree and return its fully built root node.
///
/// This is a convenience function for simple use cases.
///
/// # Arguments
///
/// * `root` - Root directory to scan
///
/// # Returns
///
/// The root `DirNode` with every descendant directory and analyzed file
pub fn scan_directory<P: AsRef<std::path::Path>>(root: P) -> Result<DirNode> {
    crate::core::scanner::build_tree(root.as_ref())
}
