//! Centralized name derivations for vault entries.
//!
//! Every generated folder and file name is a pure function of user input:
//! topic and class names become slugs, article filenames yield a display
//! title and a publication year. This module is the single home for those
//! derivations so the topic and paper flows cannot drift apart.
//!
//! ## Slug Forms
//!
//! Two forms exist, both collapsing whitespace runs to a single underscore:
//! - `title_slug` preserves case and names folders/files:
//!   `"Gene  Editing"` → `"Gene_Editing"`
//! - `tag_slug` additionally lowercases and is used in frontmatter tags:
//!   `"Gene  Editing"` → `"gene_editing"`

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlugError {
    #[error("no digit run found in filename: {0}")]
    MissingYear(String),
    #[error("digit run in {0} does not fit a year")]
    YearOutOfRange(String),
}

/// Folder/file-name form of a display name: every whitespace run becomes a
/// single underscore, case preserved.
///
/// - `"Gene Editing"` → `"Gene_Editing"`
/// - `"Gene  Editing"` → `"Gene_Editing"` (runs collapse)
/// - `" Gene Editing "` → `"_Gene_Editing_"` (runs are replaced, not trimmed)
pub fn title_slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('_');
                in_space = true;
            }
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

/// Tag form of a display name: the title slug, lowercased.
pub fn tag_slug(name: &str) -> String {
    title_slug(name).to_lowercase()
}

/// Display title of an article: the filename with its extension removed.
///
/// - `"Smith2020.pdf"` → `"Smith2020"`
/// - `"Smith2020"` → `"Smith2020"` (no extension)
pub fn article_title(filename: &str) -> String {
    std::path::Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| filename.to_string())
}

/// Extract the publication year from an article filename: the first
/// contiguous run of ASCII digits, parsed as an integer.
///
/// A filename with no digits is a fatal input error, per the input contract
/// that source articles carry their year (`"Smith2020.pdf"` → 2020).
pub fn extract_year(filename: &str) -> Result<u32, SlugError> {
    let run: String = filename
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if run.is_empty() {
        return Err(SlugError::MissingYear(filename.to_string()));
    }
    run.parse()
        .map_err(|_| SlugError::YearOutOfRange(filename.to_string()))
}
