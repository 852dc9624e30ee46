//! # annogen
//!
//! Annotation scaffolding generator for markdown knowledge vaults. Your
//! vault's filesystem is the data source: top-level folders are classes,
//! their subfolders are topics, and a sources folder holds the articles you
//! read. annogen turns a topic name plus a selection of articles into a
//! ready-to-fill folder of templated files.
//!
//! # Architecture: One Pipeline
//!
//! Every command runs the same short pipeline:
//!
//! ```text
//! 1. Collect    CLI args + vault listings  →  request
//! 2. Derive     topic/class names          →  slugs, per-article years
//! 3. Plan       template producers         →  nested path→content tree
//! 4. Write      plan                       →  folders + files under the class
//! ```
//!
//! The plan is a plain value in between, so `--dry-run` can print it and
//! `--json` can serialize it without touching the vault.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`slug`] | Pure name derivations: title/tag slugs, article titles, year extraction |
//! | [`scan`] | Vault inventory — class folders, topic folders, source articles |
//! | [`plan`] | Request types and plan assembly for the topic and paper flows |
//! | [`templates`] | The four content producers: canvas, reaction paper, notes, annotations |
//! | [`write`] | Plan materialization — folders created, files written, existing files skipped |
//! | [`config`] | `annogen.toml` loading and validation |
//! | [`output`] | CLI output formatting — tree display of plans and write results |
//!
//! # Design Decisions
//!
//! ## Two Flows, One Tree Shape
//!
//! The "new topic" flow creates a topic folder merging four producer
//! outputs; the "add paper" flow reuses an existing folder and merges only
//! annotations. Both produce the same [`plan::Plan`] value, so scanning,
//! display, and writing are shared.
//!
//! ## Never Overwrite
//!
//! Generated files are scaffolds the user immediately edits. The writer
//! treats an existing file as user property: it is reported as skipped and
//! left untouched, which makes re-running a request after adding articles
//! safe.
//!
//! ## Slugs Are Pure Functions
//!
//! Every generated name derives from user input through [`slug`]: whitespace
//! runs collapse to a single underscore, tags additionally lowercase. The
//! same derivation feeds folder names, file names, frontmatter tags, and
//! canvas paths, so they can never disagree.

pub mod config;
pub mod output;
pub mod plan;
pub mod scan;
pub mod slug;
pub mod templates;
pub mod write;

#[cfg(test)]
pub(crate) mod test_helpers;
