use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// TODO-state keyword of a heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoKeyword {
    Todo,
    Done,
}

impl TodoKeyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoKeyword::Todo => "TODO",
            TodoKeyword::Done => "DONE",
        }
    }
}

/// OrgNode - one renderable Org heading with its planning line, property
/// drawer, and body.
///
/// Nodes are independent of each other: constructed once, rendered, and
/// discarded. The headline text arrives fully formed (a `[#A] ` priority
/// prefix, when any, is already part of it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgNode {
    /// Heading text after the TODO keyword
    pub headline: String,

    /// TODO-state keyword
    pub todo: TodoKeyword,

    /// Org tags, rendered `:a:b:` at the end of the heading
    pub tags: Vec<String>,

    /// Property drawer entries, in insertion order
    pub properties: Vec<(String, String)>,

    /// SCHEDULED date for the planning line
    pub scheduled: Option<NaiveDate>,

    /// Body text below the drawer; lines are newline-terminated
    pub body: Option<String>,
}

impl OrgNode {
    /// Create a node with empty tags, properties, and body.
    pub fn new(headline: impl Into<String>, todo: TodoKeyword) -> Self {
        Self {
            headline: headline.into(),
            todo,
            tags: Vec::new(),
            properties: Vec::new(),
            scheduled: None,
            body: None,
        }
    }

    /// Render this node as Org text. Output is newline-terminated so
    /// rendered nodes concatenate into a well-formed document.
    pub fn render(&self) -> String {
        crate::writer::render_node(self)
    }
}
