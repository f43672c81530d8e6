/// Per-file statistics unit
///
/// This file contains the implementation of `SourceFile`, which records the
/// byte size of one Java source file together with how often each tracked
/// keyword occurs in its comment-stripped contents.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::info;

use crate::core::patterns::{self, SOURCE_EXTENSION, TRACKED_KEYWORDS};
use crate::error::{CensusError, Result};
use crate::utils::file_utils;

/// Statistics for a single source file
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path the file was read from
    path: PathBuf,
    /// Byte length on disk at construction time
    size: u64,
    /// Keyword occurrence counts, seeded with the tracked keywords
    counts: HashMap<String, usize>,
}

impl SourceFile {
    /// Analyze a `.java` file.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_extension(path, SOURCE_EXTENSION)
    }

    /// Analyze a file carrying the given extension.
    ///
    /// Fails with `InvalidInput` if the path does not carry the extension.
    /// Reads the file once to record its size and to count every tracked
    /// keyword against the comment-stripped contents; the contents are not
    /// retained afterwards.
    pub fn with_extension<P: AsRef<Path>>(path: P, extension: &str) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !file_utils::has_extension(&path, extension) {
            return Err(CensusError::InvalidInput(format!(
                "{} does not have extension .{}",
                path.display(),
                extension
            )));
        }

        info!("Analyzing file: {}", path.display());

        let size = file_utils::file_size(&path)?;
        let contents = file_utils::read_file_content(&path)?;
        let stripped = patterns::strip_comments(&contents);

        let mut counts = HashMap::with_capacity(TRACKED_KEYWORDS.len());
        for keyword in TRACKED_KEYWORDS {
            let pattern = patterns::keyword_pattern(keyword)?;
            counts.insert(
                keyword.to_string(),
                patterns::count_matches(&stripped, &pattern),
            );
        }

        Ok(Self { path, size, counts })
    }

    /// Path the file was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Byte length on disk at construction time.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Look up the recorded count for a keyword.
    ///
    /// Keywords outside the tracked set fail with `UnknownKeyword` unless
    /// they were previously counted via [`SourceFile::count_keyword`];
    /// lookups never silently return zero.
    pub fn keyword_count(&self, keyword: &str) -> Result<usize> {
        self.counts
            .get(keyword)
            .copied()
            .ok_or_else(|| CensusError::UnknownKeyword(keyword.to_string()))
    }

    /// Count an arbitrary keyword on demand, caching the result.
    ///
    /// Re-reads the file and applies the same strip-then-match rule as
    /// construction. The word is compiled as a regex pattern, so
    /// metacharacters must be pre-escaped by the caller.
    pub fn count_keyword(&mut self, word: &str) -> Result<usize> {
        let pattern = patterns::keyword_pattern(word)?;
        let contents = file_utils::read_file_content(&self.path)?;
        let stripped = patterns::strip_comments(&contents);
        let count = patterns::count_matches(&stripped, &pattern);
        self.counts.insert(word.to_string(), count);
        Ok(count)
    }
}
