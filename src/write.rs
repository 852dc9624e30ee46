//! Plan materialization: folders and files under the vault.
//!
//! Walks a [`Plan`](crate::plan::Plan) tree rooted at `<vault>/<class>`,
//! creating folders as needed and writing file contents. Existing files are
//! never overwritten: they are reported as skipped so a re-run of the same
//! request is harmless.

use crate::plan::{Node, Plan};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// What happened to one file of the plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// File was created with the generated content.
    Written,
    /// File already existed and was left untouched.
    Skipped,
}

/// Per-file report, path relative to the vault root.
#[derive(Debug, Clone)]
pub struct WriteReport {
    pub path: PathBuf,
    pub outcome: Outcome,
}

/// Materialize a plan beneath the vault root.
///
/// Folders are created recursively; files are written only when absent.
/// Returns one report per file in tree order.
pub fn materialize(vault: &Path, plan: &Plan) -> Result<Vec<WriteReport>, WriteError> {
    let mut reports = Vec::new();
    let class_rel = PathBuf::from(&plan.class);
    write_dir(vault, &class_rel, &plan.tree, &mut reports)?;
    Ok(reports)
}

fn write_dir(
    vault: &Path,
    rel: &Path,
    entries: &BTreeMap<String, Node>,
    reports: &mut Vec<WriteReport>,
) -> Result<(), WriteError> {
    fs::create_dir_all(vault.join(rel))?;

    for (name, node) in entries {
        let child_rel = rel.join(name);
        match node {
            Node::Dir(children) => write_dir(vault, &child_rel, children, reports)?,
            Node::File(content) => {
                let full = vault.join(&child_rel);
                let outcome = if full.exists() {
                    Outcome::Skipped
                } else {
                    fs::write(&full, content)?;
                    Outcome::Written
                };
                reports.push(WriteReport {
                    path: child_rel,
                    outcome,
                });
            }
        }
    }
    Ok(())
}
