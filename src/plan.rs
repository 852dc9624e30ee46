//! Plan construction: from a request to a nested path→content tree.
//!
//! Both scaffolding flows produce a [`Plan`]: the class folder it applies to
//! plus a tree of folder/file segments mapping to generated text. The tree is
//! merged from independent template producers and handed to [`crate::write`]
//! for materialization, or serialized directly for `--json` output.
//!
//! ## Topic flow
//!
//! One new top-level folder keyed by the topic's title slug, containing the
//! merged output of exactly four producers:
//!
//! ```text
//! Gene_Editing/
//! ├── Gene_Editing.canvas             # canvas
//! ├── Gene_Editing_Reaction_Paper.md  # reaction paper
//! ├── Gene_Editing_Notes.md           # notes
//! ├── Smith2020_Annotated.md          # annotations (one per article)
//! └── Jones2019_Annotated.md
//! ```
//!
//! ## Paper flow
//!
//! Reuses an existing topic folder key and merges only the annotation
//! producer's output into it.

use crate::config::VaultConfig;
use crate::slug::{self, SlugError};
use crate::templates;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error(transparent)]
    Slug(#[from] SlugError),
}

/// Inputs of the "new topic" flow.
#[derive(Debug, Clone)]
pub struct TopicRequest {
    /// Topic display name, as typed by the user.
    pub topic: String,
    /// Class folder the topic lives under.
    pub class: String,
    /// Selected source article filenames. May be empty.
    pub articles: Vec<String>,
}

/// Inputs of the "add paper to existing topic" flow.
#[derive(Debug, Clone)]
pub struct PaperRequest {
    /// Existing topic folder. May be a vault-relative path, in which case
    /// only the last segment names the folder.
    pub topic_folder: String,
    /// Class folder the topic lives under.
    pub class: String,
    /// Selected source article filenames. May be empty.
    pub articles: Vec<String>,
}

/// Per-article annotation descriptor.
#[derive(Debug, Clone, Serialize)]
pub struct Annotation {
    /// Display title: the filename with its extension removed.
    pub title: String,
    /// Source filename under the sources folder.
    pub file: String,
    /// Publication year extracted from the filename.
    pub year: u32,
    /// Topic tag (lowercase slug).
    pub tag_topic: String,
    /// Class tag (lowercase slug).
    pub tag_class: String,
}

/// Topic-level context shared by the canvas, reaction paper, and notes
/// producers.
#[derive(Debug, Clone)]
pub struct TopicContext {
    /// Folder/file name form of the topic.
    pub title: String,
    /// Topic tag (lowercase slug).
    pub tag_topic: String,
    /// Class tag (lowercase slug).
    pub tag_class: String,
    /// Vault-relative paths of the annotation files, canvas node targets.
    pub annotation_paths: Vec<String>,
}

/// A node in the path→content tree: either a file with generated text or a
/// folder of child nodes.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Node {
    File(String),
    Dir(BTreeMap<String, Node>),
}

/// A scaffolding plan: the class folder it applies to and the tree of
/// entries to materialize beneath it.
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    /// Class folder the tree is rooted under.
    pub class: String,
    /// Folder/file segments mapping to generated content.
    pub tree: BTreeMap<String, Node>,
}

/// Build the plan for a new topic: one folder keyed by the topic's title
/// slug, merging the outputs of the four template producers.
pub fn topic_plan(request: &TopicRequest, config: &VaultConfig) -> Result<Plan, PlanError> {
    let title = slug::title_slug(&request.topic);
    let tag_topic = slug::tag_slug(&request.topic);
    let tag_class = slug::tag_slug(&request.class);

    let annotations = annotation_descriptors(&request.articles, &tag_topic, &tag_class)?;
    let context = TopicContext {
        annotation_paths: annotations
            .iter()
            .map(|a| format!("{}/{}/{}_Annotated.md", request.class, title, a.title))
            .collect(),
        title,
        tag_topic,
        tag_class,
    };

    let mut children = BTreeMap::new();
    merge_into(&mut children, templates::canvas(&context, &config.canvas));
    merge_into(&mut children, templates::reaction_paper(&context));
    merge_into(&mut children, templates::notes(&context));
    merge_into(&mut children, templates::annotations(&annotations));

    let mut tree = BTreeMap::new();
    tree.insert(context.title, Node::Dir(children));

    Ok(Plan {
        class: request.class.clone(),
        tree,
    })
}

/// Build the plan for adding papers to an existing topic: the existing
/// folder key, annotation content only.
pub fn paper_plan(request: &PaperRequest, _config: &VaultConfig) -> Result<Plan, PlanError> {
    let topic_folder = topic_folder_name(&request.topic_folder);
    let tag_topic = slug::tag_slug(topic_folder);
    let tag_class = slug::tag_slug(&request.class);

    let annotations = annotation_descriptors(&request.articles, &tag_topic, &tag_class)?;

    let mut children = BTreeMap::new();
    merge_into(&mut children, templates::annotations(&annotations));

    let mut tree = BTreeMap::new();
    tree.insert(topic_folder.to_string(), Node::Dir(children));

    Ok(Plan {
        class: request.class.clone(),
        tree,
    })
}

/// Resolve the folder name from a topic value that may be a vault-relative
/// path (`Biology/Cell_Division` → `Cell_Division`).
pub fn topic_folder_name(value: &str) -> &str {
    value.rsplit('/').next().unwrap_or(value)
}

fn annotation_descriptors(
    articles: &[String],
    tag_topic: &str,
    tag_class: &str,
) -> Result<Vec<Annotation>, PlanError> {
    articles
        .iter()
        .map(|file| {
            Ok(Annotation {
                title: slug::article_title(file),
                file: file.clone(),
                year: slug::extract_year(file)?,
                tag_topic: tag_topic.to_string(),
                tag_class: tag_class.to_string(),
            })
        })
        .collect()
}

fn merge_into(target: &mut BTreeMap<String, Node>, fragment: Vec<(String, String)>) {
    for (name, content) in fragment {
        target.insert(name, Node::File(content));
    }
}
