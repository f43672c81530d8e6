/// Output formatter for the census report
///
/// This module renders the scanned tree as the fixed-width census report:
/// one line per directory, root first, depth-first, each subdirectory
/// dash-indented one level below its parent.

use crate::core::tree::DirNode;
use crate::error::Result;

/// Width the path field is left-padded to
const PATH_FIELD_WIDTH: usize = 33;

/// Longest path display kept before left-truncation
const PATH_DISPLAY_LIMIT: usize = 30;

/// Width every numeric field is right-justified to
const COUNT_FIELD_WIDTH: usize = 6;

/// Render the report body for a scanned tree, root line first.
pub fn format_report(root: &DirNode) -> Result<String> {
    let mut out = String::new();
    format_node(root, None, 0, &mut out)?;
    Ok(out)
}

/// Print the census report, preceded by its header line, to standard
/// output.
pub fn print_report(root: &DirNode) -> Result<()> {
    print!("RESULTS:\n{}", format_report(root)?);
    Ok(())
}

/// Emit one report line for `node`, then recurse into its children at
/// `depth + 1` with this node's path as the truncation base.
fn format_node(
    node: &DirNode,
    base: Option<&str>,
    depth: usize,
    out: &mut String,
) -> Result<()> {
    let path = node.path().to_string_lossy();
    let display = match base {
        // The root renders as its full, untruncated path.
        None => path.to_string(),
        Some(base) => truncate_left(&indent_relative(&path, base, depth)),
    };

    out.push_str(&format!(
        "{:<path_width$}\t\t{:>count_width$} bytes\t{:>count_width$} public\t{:>count_width$} private\t{:>count_width$} try\t{:>count_width$} catch\n",
        display,
        node.total_size(),
        node.aggregate_count("public")?,
        node.aggregate_count("private")?,
        node.aggregate_count("try")?,
        node.aggregate_count("catch")?,
        path_width = PATH_FIELD_WIDTH,
        count_width = COUNT_FIELD_WIDTH,
    ));

    for child in node.children() {
        format_node(child, Some(&*path), depth + 1, out)?;
    }
    Ok(())
}

/// Dash-indent a node's path relative to its parent's path.
fn indent_relative(path: &str, base: &str, depth: usize) -> String {
    let relative = path.strip_prefix(base).unwrap_or(path);
    format!("{}{}", "-".repeat(depth), relative)
}

/// Keep only the last `PATH_DISPLAY_LIMIT` characters of the composed
/// display (dashes included), marking the cut with an ellipsis.
fn truncate_left(display: &str) -> String {
    let chars: Vec<char> = display.chars().collect();
    if chars.len() <= PATH_DISPLAY_LIMIT {
        return display.to_string();
    }
    let tail: String = chars[chars.len() - PATH_DISPLAY_LIMIT..].iter().collect();
    format!("...{}", tail)
}
