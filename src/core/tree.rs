/// Directory tree aggregator
///
/// `DirNode` owns the analyzed files directly inside one directory plus one
/// node per immediate subdirectory, and aggregates byte size and keyword
/// counts over the whole subtree.

use std::path::{Path, PathBuf};

use crate::core::analyzer::SourceFile;
use crate::error::{CensusError, Result};

/// One directory in the scanned tree
#[derive(Debug)]
pub struct DirNode {
    /// The directory's filesystem path
    path: PathBuf,
    /// Files directly inside this directory, in discovery order
    files: Vec<SourceFile>,
    /// One node per immediate subdirectory, in discovery order
    children: Vec<DirNode>,
}

impl DirNode {
    /// Build a node from an existing directory and its already-analyzed
    /// contents.
    ///
    /// Fails with `InvalidInput` unless `path` is a directory. The file and
    /// child lists are supplied by the scanner; children must be fully
    /// built before their parent.
    pub fn new<P: AsRef<Path>>(
        path: P,
        files: Vec<SourceFile>,
        children: Vec<DirNode>,
    ) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.is_dir() {
            return Err(CensusError::InvalidInput(format!(
                "{} is not a directory",
                path.display()
            )));
        }
        Ok(Self {
            path,
            files,
            children,
        })
    }

    /// The directory's filesystem path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Files directly inside this directory (not in subdirectories).
    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    /// Immediate subdirectories in discovery order.
    pub fn children(&self) -> &[DirNode] {
        &self.children
    }

    /// Every file in this directory and all descendants: own files first,
    /// then each child's files in child order, recursively.
    pub fn all_files(&self) -> Vec<&SourceFile> {
        let mut all: Vec<&SourceFile> = self.files.iter().collect();
        for child in &self.children {
            all.extend(child.all_files());
        }
        all
    }

    /// Total byte size of every file in the subtree. 0 for an empty
    /// subtree.
    pub fn total_size(&self) -> u64 {
        self.all_files().iter().map(|f| f.size()).sum()
    }

    /// Sum of one keyword's count over every file in the subtree.
    ///
    /// Fails with `UnknownKeyword` if any file has no recorded count for
    /// the keyword, i.e. it is outside the tracked set and was never
    /// counted on demand.
    pub fn aggregate_count(&self, keyword: &str) -> Result<usize> {
        let mut total = 0;
        for file in self.all_files() {
            total += file.keyword_count(keyword)?;
        }
        Ok(total)
    }

    /// Count an arbitrary keyword on demand across the whole subtree and
    /// return the aggregated total.
    ///
    /// Afterwards [`DirNode::aggregate_count`] succeeds for the same word
    /// on this node and every node below it.
    pub fn count_keyword(&mut self, word: &str) -> Result<usize> {
        let mut total = 0;
        for file in &mut self.files {
            total += file.count_keyword(word)?;
        }
        for child in &mut self.children {
            total += child.count_keyword(word)?;
        }
        Ok(total)
    }
}
