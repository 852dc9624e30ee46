//! The four template producers.
//!
//! Each producer is a pure function from its context to `(filename, content)`
//! fragments; [`crate::plan`] merges the fragments into the path→content
//! tree. Nothing here touches the filesystem.
//!
//! Markdown files carry YAML frontmatter whose tags combine a kind tag
//! (`annotation`, `reaction_paper`, `notes`), the class tag, the topic tag,
//! and for annotations a `year/NNNN` tag. The canvas is a JSON Canvas
//! document with one file node per annotation file.

use crate::config::CanvasConfig;
use crate::plan::{Annotation, TopicContext};
use serde_json::json;

/// Canvas producer: a JSON Canvas document linking every annotation file,
/// laid out as a vertical column of file nodes.
pub fn canvas(context: &TopicContext, config: &CanvasConfig) -> Vec<(String, String)> {
    let nodes: Vec<serde_json::Value> = context
        .annotation_paths
        .iter()
        .enumerate()
        .map(|(i, path)| {
            json!({
                "id": format!("{:016x}", i + 1),
                "type": "file",
                "file": path,
                "x": 0,
                "y": i as u32 * (config.node_height + config.gap),
                "width": config.node_width,
                "height": config.node_height,
            })
        })
        .collect();

    let document = json!({ "nodes": nodes, "edges": [] });
    // to_string_pretty on a json! literal cannot fail
    let content = serde_json::to_string_pretty(&document).unwrap_or_default();

    vec![(format!("{}.canvas", context.title), content)]
}

/// Reaction paper producer: a writing scaffold for the topic.
pub fn reaction_paper(context: &TopicContext) -> Vec<(String, String)> {
    let content = format!(
        "---\n\
         tags:\n\
         \x20 - reaction_paper\n\
         \x20 - {class}\n\
         \x20 - {topic}\n\
         ---\n\
         \n\
         # Reaction Paper: {title}\n\
         \n\
         ## Thesis\n\
         \n\
         ## Supporting Arguments\n\
         \n\
         ## Counterpoints\n\
         \n\
         ## References\n",
        class = context.tag_class,
        topic = context.tag_topic,
        title = context.title,
    );
    vec![(format!("{}_Reaction_Paper.md", context.title), content)]
}

/// Notes producer: a study-notes scaffold for the topic.
pub fn notes(context: &TopicContext) -> Vec<(String, String)> {
    let content = format!(
        "---\n\
         tags:\n\
         \x20 - notes\n\
         \x20 - {class}\n\
         \x20 - {topic}\n\
         ---\n\
         \n\
         # Notes: {title}\n\
         \n\
         ## Key Concepts\n\
         \n\
         ## Questions\n\
         \n\
         ## Synthesis\n",
        class = context.tag_class,
        topic = context.tag_topic,
        title = context.title,
    );
    vec![(format!("{}_Notes.md", context.title), content)]
}

/// Annotation producer: one reading scaffold per selected article, linking
/// back to the source file.
pub fn annotations(articles: &[Annotation]) -> Vec<(String, String)> {
    articles
        .iter()
        .map(|article| {
            let content = format!(
                "---\n\
                 tags:\n\
                 \x20 - annotation\n\
                 \x20 - {class}\n\
                 \x20 - {topic}\n\
                 \x20 - year/{year}\n\
                 ---\n\
                 \n\
                 # {title}\n\
                 \n\
                 Source: [[{file}]]\n\
                 \n\
                 ## Summary\n\
                 \n\
                 ## Key Points\n\
                 \n\
                 ## Quotes\n\
                 \n\
                 ## Critique\n",
                class = article.tag_class,
                topic = article.tag_topic,
                year = article.year,
                title = article.title,
                file = article.file,
            );
            (format!("{}_Annotated.md", article.title), content)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CanvasConfig;

    fn context() -> TopicContext {
        TopicContext {
            title: "Gene_Editing".into(),
            tag_topic: "gene_editing".into(),
            tag_class: "biology".into(),
            annotation_paths: vec![
                "Biology/Gene_Editing/Smith2020_Annotated.md".into(),
                "Biology/Gene_Editing/Jones2019_Annotated.md".into(),
            ],
        }
    }

    #[test]
    fn canvas_has_one_file_node_per_annotation() {
        let fragment = canvas(&context(), &CanvasConfig::default());
        assert_eq!(fragment.len(), 1);
        assert_eq!(fragment[0].0, "Gene_Editing.canvas");

        let doc: serde_json::Value = serde_json::from_str(&fragment[0].1).unwrap();
        let nodes = doc["nodes"].as_array().unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0]["type"], "file");
        assert_eq!(nodes[0]["file"], "Biology/Gene_Editing/Smith2020_Annotated.md");
        assert!(doc["edges"].as_array().unwrap().is_empty());
    }

    #[test]
    fn canvas_stacks_nodes_vertically() {
        let config = CanvasConfig {
            node_width: 400,
            node_height: 280,
            gap: 40,
        };
        let fragment = canvas(&context(), &config);
        let doc: serde_json::Value = serde_json::from_str(&fragment[0].1).unwrap();
        let nodes = doc["nodes"].as_array().unwrap();

        assert_eq!(nodes[0]["y"], 0);
        assert_eq!(nodes[1]["y"], 320);
        assert_eq!(nodes[0]["x"], nodes[1]["x"]);
    }

    #[test]
    fn canvas_empty_selection_yields_empty_node_list() {
        let context = TopicContext {
            annotation_paths: vec![],
            ..context()
        };
        let fragment = canvas(&context, &CanvasConfig::default());
        let doc: serde_json::Value = serde_json::from_str(&fragment[0].1).unwrap();
        assert!(doc["nodes"].as_array().unwrap().is_empty());
    }

    #[test]
    fn canvas_node_ids_are_unique() {
        let fragment = canvas(&context(), &CanvasConfig::default());
        let doc: serde_json::Value = serde_json::from_str(&fragment[0].1).unwrap();
        let nodes = doc["nodes"].as_array().unwrap();
        assert_ne!(nodes[0]["id"], nodes[1]["id"]);
    }

    #[test]
    fn reaction_paper_frontmatter_and_heading() {
        let fragment = reaction_paper(&context());
        assert_eq!(fragment[0].0, "Gene_Editing_Reaction_Paper.md");

        let body = &fragment[0].1;
        assert!(body.starts_with("---\n"));
        assert!(body.contains("  - reaction_paper\n"));
        assert!(body.contains("  - biology\n"));
        assert!(body.contains("  - gene_editing\n"));
        assert!(body.contains("# Reaction Paper: Gene_Editing\n"));
    }

    #[test]
    fn notes_frontmatter_and_sections() {
        let fragment = notes(&context());
        assert_eq!(fragment[0].0, "Gene_Editing_Notes.md");

        let body = &fragment[0].1;
        assert!(body.contains("  - notes\n"));
        assert!(body.contains("## Key Concepts\n"));
        assert!(body.contains("## Questions\n"));
    }

    #[test]
    fn annotation_links_source_and_tags_year() {
        let articles = vec![Annotation {
            title: "Smith2020".into(),
            file: "Smith2020.pdf".into(),
            year: 2020,
            tag_topic: "gene_editing".into(),
            tag_class: "biology".into(),
        }];
        let fragment = annotations(&articles);

        assert_eq!(fragment[0].0, "Smith2020_Annotated.md");
        let body = &fragment[0].1;
        assert!(body.contains("  - year/2020\n"));
        assert!(body.contains("Source: [[Smith2020.pdf]]\n"));
        assert!(body.contains("# Smith2020\n"));
        assert!(body.contains("## Summary\n"));
    }

    #[test]
    fn annotations_one_fragment_per_article() {
        let articles = vec![
            Annotation {
                title: "A2019".into(),
                file: "A2019.pdf".into(),
                year: 2019,
                tag_topic: "t".into(),
                tag_class: "c".into(),
            },
            Annotation {
                title: "B2021".into(),
                file: "B2021.pdf".into(),
                year: 2021,
                tag_topic: "t".into(),
                tag_class: "c".into(),
            },
        ];
        let fragment = annotations(&articles);
        assert_eq!(fragment.len(), 2);
        assert_eq!(fragment[0].0, "A2019_Annotated.md");
        assert_eq!(fragment[1].0, "B2021_Annotated.md");
    }

    #[test]
    fn annotations_empty_selection_is_empty() {
        assert!(annotations(&[]).is_empty());
    }
}
