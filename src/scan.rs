//! Vault inventory: directory listings that feed the two scaffolding flows.
//!
//! The vault layout annogen expects:
//!
//! ```text
//! vault/
//! ├── annogen.toml              # Config (optional)
//! ├── pdf/                      # Source articles (name set by sources_dir)
//! │   ├── Smith2020.pdf
//! │   └── Jones2019.pdf
//! ├── Biology/                  # Class folder
//! │   └── Cell_Division/        # Topic folder (previously scaffolded)
//! │       └── ...
//! ├── History/                  # Another class folder
//! └── .obsidian/                # Hidden - never listed
//! ```
//!
//! - **Class folders** are the directories directly under the vault root,
//!   minus hidden folders, the sources folder, and configured excludes.
//! - **Topic folders** are the directories directly under a class folder.
//! - **Articles** are the files directly under the sources folder.
//!
//! All listings are sorted by name. The `ensure_*` helpers validate request
//! inputs against these listings before any plan is built, so a typo in a
//! class or article name fails with a named error instead of a stray folder.

use crate::config::VaultConfig;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("sources folder not found: {0}")]
    MissingSourcesDir(PathBuf),
    #[error("class folder not found: {0}")]
    ClassNotFound(String),
    #[error("topic folder {topic} not found in class {class}")]
    TopicNotFound { class: String, topic: String },
    #[error("article not found in sources folder: {0}")]
    ArticleNotFound(String),
}

/// List class folders under the vault root.
///
/// Excludes hidden folders, the sources folder, and configured excludes.
pub fn class_folders(vault: &Path, config: &VaultConfig) -> Result<Vec<String>, ScanError> {
    let mut classes: Vec<String> = fs::read_dir(vault)?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_dir())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|name| {
            !name.starts_with('.')
                && *name != config.sources_dir
                && !config.exclude.contains(name)
        })
        .collect();
    classes.sort();
    Ok(classes)
}

/// List topic folders under a class folder.
pub fn topic_folders(vault: &Path, class: &str) -> Result<Vec<String>, ScanError> {
    let class_path = vault.join(class);
    if !class_path.is_dir() {
        return Err(ScanError::ClassNotFound(class.to_string()));
    }
    let mut topics: Vec<String> = fs::read_dir(&class_path)?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_dir())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|name| !name.starts_with('.'))
        .collect();
    topics.sort();
    Ok(topics)
}

/// List source articles (files directly under the sources folder).
pub fn articles(vault: &Path, config: &VaultConfig) -> Result<Vec<String>, ScanError> {
    let sources = vault.join(&config.sources_dir);
    if !sources.is_dir() {
        return Err(ScanError::MissingSourcesDir(sources));
    }
    let mut files: Vec<String> = fs::read_dir(&sources)?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|name| !name.starts_with('.'))
        .collect();
    files.sort();
    Ok(files)
}

/// Check that a class folder exists.
pub fn ensure_class(vault: &Path, config: &VaultConfig, class: &str) -> Result<(), ScanError> {
    if class_folders(vault, config)?.iter().any(|c| c == class) {
        Ok(())
    } else {
        Err(ScanError::ClassNotFound(class.to_string()))
    }
}

/// Check that a topic folder exists under a class.
pub fn ensure_topic(vault: &Path, class: &str, topic: &str) -> Result<(), ScanError> {
    if topic_folders(vault, class)?.iter().any(|t| t == topic) {
        Ok(())
    } else {
        Err(ScanError::TopicNotFound {
            class: class.to_string(),
            topic: topic.to_string(),
        })
    }
}

/// Check that every requested article exists in the sources folder.
///
/// An empty selection is valid and checks nothing.
pub fn ensure_articles(
    vault: &Path,
    config: &VaultConfig,
    requested: &[String],
) -> Result<(), ScanError> {
    if requested.is_empty() {
        return Ok(());
    }
    let available = articles(vault, config)?;
    for name in requested {
        if !available.iter().any(|a| a == name) {
            return Err(ScanError::ArticleNotFound(name.clone()));
        }
    }
    Ok(())
}
