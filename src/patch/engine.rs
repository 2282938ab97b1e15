//! Read-transform-write operations over single files
//!
//! Each operation reads one file in full, transforms the content in memory,
//! and writes the result back to the same path. Rules are literal substring
//! matches, never patterns, and applying any operation a second time leaves
//! the file unchanged.
//!
//! Every operation takes a `dry_run` flag and returns whether the file
//! content changed; the write is skipped when nothing changed.

use std::fs;
use std::path::Path;

use super::error::FileAccessError;

/// Replace every occurrence of each `(find, replace)` pair, in order.
///
/// A pair whose `find` string is absent is a no-op.
pub fn replace_all(content: &str, rules: &[(&str, &str)]) -> String {
    rules
        .iter()
        .fold(content.to_string(), |acc, (find, replace)| {
            acc.replace(find, replace)
        })
}

/// Drop lines matching `drop` and apply `rules` to each surviving line.
///
/// Lines keep their terminators, so the output is the concatenation of the
/// retained (rewritten) lines in their original order.
pub fn filter_lines<F>(content: &str, drop: F, rules: &[(&str, &str)]) -> String
where
    F: Fn(&str) -> bool,
{
    content
        .split_inclusive('\n')
        .filter(|line| !drop(line))
        .map(|line| replace_all(line, rules))
        .collect()
}

/// Apply whole-content substring rules to the file at `path`.
///
/// Returns whether the content changed.
pub fn apply_substring_rules(
    path: &Path,
    rules: &[(&str, &str)],
    dry_run: bool,
) -> Result<bool, FileAccessError> {
    let content = read_text(path)?;
    let new_content = replace_all(&content, rules);

    let modified = new_content != content;
    if modified && !dry_run {
        write_text(path, &new_content)?;
    }

    Ok(modified)
}

/// Drop matching lines from the file at `path`, rewriting the survivors.
///
/// Returns whether the content changed.
pub fn filter_and_rewrite_lines<F>(
    path: &Path,
    drop: F,
    rules: &[(&str, &str)],
    dry_run: bool,
) -> Result<bool, FileAccessError>
where
    F: Fn(&str) -> bool,
{
    let content = read_text(path)?;
    let new_content = filter_lines(&content, drop, rules);

    let modified = new_content != content;
    if modified && !dry_run {
        write_text(path, &new_content)?;
    }

    Ok(modified)
}

/// Replace the entire file at `path` with `content`, verbatim.
///
/// The prior content is discarded unconditionally; it may be empty, missing,
/// or not even valid text. Returns whether the content changed.
pub fn overwrite_with_fixed_content(
    path: &Path,
    content: &str,
    dry_run: bool,
) -> Result<bool, FileAccessError> {
    // Compare as bytes: the prior content is not required to be UTF-8.
    let prior = fs::read(path).ok();

    let modified = prior.as_deref() != Some(content.as_bytes());
    if modified && !dry_run {
        fs::write(path, content).map_err(|source| FileAccessError::new("write", path, source))?;
    }

    Ok(modified)
}

fn read_text(path: &Path) -> Result<String, FileAccessError> {
    fs::read_to_string(path).map_err(|source| FileAccessError::new("read", path, source))
}

fn write_text(path: &Path, content: &str) -> Result<(), FileAccessError> {
    fs::write(path, content).map_err(|source| FileAccessError::new("write", path, source))
}
