//! Org text rendering.
//!
//! Layout: level-1 heading with TODO keyword and trailing tags, then a
//! two-space indented block holding the SCHEDULED planning line, the
//! property drawer, and the body.

use chrono::NaiveDate;

use crate::models::OrgNode;

const INDENT: &str = "  ";

/// Format a calendar date as an inactive-style Org timestamp payload,
/// e.g. `2023-05-01 Mon`. Callers add the surrounding `[..]` or `<..>`.
pub fn org_timestamp(date: NaiveDate) -> String {
    date.format("%Y-%m-%d %a").to_string()
}

/// Render a node as Org text, newline-terminated.
pub fn render_node(node: &OrgNode) -> String {
    let mut out = String::new();

    out.push_str("* ");
    out.push_str(node.todo.as_str());
    if !node.headline.is_empty() {
        out.push(' ');
        out.push_str(node.headline.trim_end());
    }
    if !node.tags.is_empty() {
        out.push_str(" :");
        out.push_str(&node.tags.join(":"));
        out.push(':');
    }
    out.push('\n');

    if let Some(scheduled) = node.scheduled {
        out.push_str(INDENT);
        out.push_str("SCHEDULED: <");
        out.push_str(&org_timestamp(scheduled));
        out.push_str(">\n");
    }

    if !node.properties.is_empty() {
        out.push_str(INDENT);
        out.push_str(":PROPERTIES:\n");
        for (key, value) in &node.properties {
            out.push_str(INDENT);
            out.push(':');
            out.push_str(key);
            out.push_str(": ");
            out.push_str(value);
            out.push('\n');
        }
        out.push_str(INDENT);
        out.push_str(":END:\n");
    }

    if let Some(ref body) = node.body {
        for line in body.lines() {
            out.push_str(INDENT);
            out.push_str(line);
            out.push('\n');
        }
    }

    out
}
