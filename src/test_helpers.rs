//! Shared test utilities for the annogen test suite.
//!
//! Provides a canonical temp vault fixture used by the scan and write tests.

use std::fs;
use tempfile::TempDir;

/// Build a small vault in a temp directory and return it.
///
/// ```text
/// vault/
/// ├── pdf/
/// │   ├── Smith2020.pdf
/// │   ├── Jones2019.pdf
/// │   └── Doe2021.pdf
/// ├── Biology/
/// │   └── Cell_Division/
/// │       └── Cell_Division_Notes.md
/// ├── History/
/// └── .obsidian/
/// ```
///
/// Tests get an isolated vault they can mutate without affecting other tests.
pub fn setup_vault() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    fs::create_dir(root.join("pdf")).unwrap();
    for article in ["Smith2020.pdf", "Jones2019.pdf", "Doe2021.pdf"] {
        fs::write(root.join("pdf").join(article), "fake pdf").unwrap();
    }

    fs::create_dir_all(root.join("Biology/Cell_Division")).unwrap();
    fs::write(
        root.join("Biology/Cell_Division/Cell_Division_Notes.md"),
        "# Notes: Cell_Division\n",
    )
    .unwrap();

    fs::create_dir(root.join("History")).unwrap();
    fs::create_dir(root.join(".obsidian")).unwrap();

    tmp
}
