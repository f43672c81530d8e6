/// Recursive filesystem walk
///
/// Builds the directory tree bottom-up: every subdirectory is fully built,
/// its transitive file list included, before its parent node is
/// constructed.

use std::fs;
use std::path::Path;

use log::debug;

use crate::core::analyzer::SourceFile;
use crate::core::patterns::SOURCE_EXTENSION;
use crate::core::tree::DirNode;
use crate::error::{CensusError, Result};
use crate::utils::file_utils;

/// Recursively scan `root` and build its directory tree.
///
/// Immediate entries are partitioned into `.java` files (analyzed in
/// listing order) and subdirectories (recursed in listing order). No sort
/// is applied, so report ordering follows the platform's listing order.
/// Fails with `InvalidInput` unless `root` is a directory; read and
/// listing failures propagate unchanged.
pub fn build_tree(root: &Path) -> Result<DirNode> {
    if !root.is_dir() {
        return Err(CensusError::InvalidInput(format!(
            "{} is not a directory",
            root.display()
        )));
    }

    debug!("Scanning directory: {}", root.display());

    let mut files = Vec::new();
    let mut children = Vec::new();

    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            children.push(build_tree(&path)?);
        } else if path.is_file() && file_utils::has_extension(&path, SOURCE_EXTENSION) {
            files.push(SourceFile::new(&path)?);
        }
    }

    DirNode::new(root, files, children)
}
