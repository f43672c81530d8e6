/// Pattern definitions for the census
///
/// This module contains the comment-stripping pattern and the fixed set of
/// keywords that every analyzed file is counted against, plus the helpers
/// that compile and apply keyword patterns.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Result;

/// File extension (without the dot) a source file must carry to be analyzed
pub const SOURCE_EXTENSION: &str = "java";

/// Keywords counted for every file at construction time
pub const TRACKED_KEYWORDS: [&str; 4] = ["public", "private", "try", "catch"];

lazy_static! {
    /// Matches block comments (`/*` to the first following `*/`, spanning
    /// lines) and line comments (`//` to end of line). Purely textual: a
    /// `//` or `/*` inside a string literal still starts a comment here.
    static ref COMMENT_PATTERN: Regex =
        Regex::new(r"(?s:/\*.*?\*/)|//.*").expect("comment pattern must compile");
}

/// Remove block and line comments from source contents.
pub fn strip_comments(contents: &str) -> Cow<'_, str> {
    COMMENT_PATTERN.replace_all(contents, "")
}

/// Compile a keyword into its search pattern.
///
/// The word is used as a regex pattern verbatim, so metacharacters must be
/// pre-escaped by the caller. The tracked keywords contain none.
pub fn keyword_pattern(word: &str) -> Result<Regex> {
    Ok(Regex::new(word)?)
}

/// Count non-overlapping matches of a compiled keyword pattern.
///
/// Matching is a literal substring search, not token-aware: a keyword
/// embedded in a longer identifier still counts.
pub fn count_matches(contents: &str, pattern: &Regex) -> usize {
    pattern.find_iter(contents).count()
}
