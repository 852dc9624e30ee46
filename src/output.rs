//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ## Plan display
//!
//! ```text
//! Plan for Biology
//! Gene_Editing/
//!     Gene_Editing.canvas
//!     Gene_Editing_Notes.md
//!     Gene_Editing_Reaction_Paper.md
//!     Smith2020_Annotated.md
//! ```
//!
//! ## Write display
//!
//! ```text
//! written Biology/Gene_Editing/Gene_Editing.canvas
//! skipped Biology/Gene_Editing/Smith2020_Annotated.md
//! 3 written, 1 skipped
//! ```

use crate::plan::{Node, Plan};
use crate::write::{Outcome, WriteReport};
use std::collections::BTreeMap;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format a plan as an indented tree, folders suffixed with `/`.
pub fn format_plan(plan: &Plan) -> Vec<String> {
    let mut lines = vec![format!("Plan for {}", plan.class)];
    format_tree(&plan.tree, 0, &mut lines);
    lines
}

fn format_tree(entries: &BTreeMap<String, Node>, depth: usize, lines: &mut Vec<String>) {
    for (name, node) in entries {
        match node {
            Node::Dir(children) => {
                lines.push(format!("{}{}/", indent(depth), name));
                format_tree(children, depth + 1, lines);
            }
            Node::File(_) => lines.push(format!("{}{}", indent(depth), name)),
        }
    }
}

/// Format per-file write outcomes plus a summary line.
pub fn format_write_reports(reports: &[WriteReport]) -> Vec<String> {
    let mut lines: Vec<String> = reports
        .iter()
        .map(|r| {
            let status = match r.outcome {
                Outcome::Written => "written",
                Outcome::Skipped => "skipped",
            };
            format!("{} {}", status, r.path.display())
        })
        .collect();

    let written = reports
        .iter()
        .filter(|r| r.outcome == Outcome::Written)
        .count();
    let skipped = reports.len() - written;
    lines.push(format!("{} written, {} skipped", written, skipped));
    lines
}

/// Format a listing (classes, topics, articles), one item per line.
///
/// An empty listing formats as a single `(none)` marker so the output is
/// never silent.
pub fn format_listing(items: &[String]) -> Vec<String> {
    if items.is_empty() {
        vec!["(none)".to_string()]
    } else {
        items.to_vec()
    }
}

pub fn print_plan(plan: &Plan) {
    for line in format_plan(plan) {
        println!("{}", line);
    }
}

pub fn print_write_reports(reports: &[WriteReport]) {
    for line in format_write_reports(reports) {
        println!("{}", line);
    }
}

pub fn print_listing(items: &[String]) {
    for line in format_listing(items) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VaultConfig;
    use crate::plan::{self, TopicRequest};
    use std::path::PathBuf;

    fn sample_plan() -> Plan {
        let request = TopicRequest {
            topic: "Gene Editing".into(),
            class: "Biology".into(),
            articles: vec!["Smith2020.pdf".into()],
        };
        plan::topic_plan(&request, &VaultConfig::default()).unwrap()
    }

    #[test]
    fn plan_tree_is_indented() {
        let lines = format_plan(&sample_plan());

        assert_eq!(lines[0], "Plan for Biology");
        assert_eq!(lines[1], "Gene_Editing/");
        assert_eq!(lines[2], "    Gene_Editing.canvas");
        assert!(lines.contains(&"    Smith2020_Annotated.md".to_string()));
    }

    #[test]
    fn write_reports_show_status_and_summary() {
        let reports = vec![
            WriteReport {
                path: PathBuf::from("Biology/Gene_Editing/Gene_Editing.canvas"),
                outcome: Outcome::Written,
            },
            WriteReport {
                path: PathBuf::from("Biology/Gene_Editing/Smith2020_Annotated.md"),
                outcome: Outcome::Skipped,
            },
        ];
        let lines = format_write_reports(&reports);

        assert_eq!(lines[0], "written Biology/Gene_Editing/Gene_Editing.canvas");
        assert_eq!(
            lines[1],
            "skipped Biology/Gene_Editing/Smith2020_Annotated.md"
        );
        assert_eq!(lines[2], "1 written, 1 skipped");
    }

    #[test]
    fn empty_write_reports_still_summarize() {
        let lines = format_write_reports(&[]);
        assert_eq!(lines, vec!["0 written, 0 skipped"]);
    }

    #[test]
    fn empty_listing_shows_marker() {
        assert_eq!(format_listing(&[]), vec!["(none)"]);
    }

    #[test]
    fn listing_passes_items_through() {
        let items = vec!["Biology".to_string(), "History".to_string()];
        assert_eq!(format_listing(&items), items);
    }
}
