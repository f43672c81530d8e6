/// Utility modules for the census
///
/// This module contains utility functions for file handling and for
/// rendering the census report.

pub mod file_utils;
pub mod output_formatter;
