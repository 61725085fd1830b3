//! Line-oriented todo.txt parser.
//!
//! Grammar per trimmed line: optional `x ` completion marker, optional
//! `(A)`..`(Z)` priority marker, leading `YYYY-MM-DD` dates (completed
//! tasks carry up to two: completion date then creation date; open tasks
//! one), then free text interspersed with `+project`, `@context` and
//! `key:value` tokens. Every input line yields exactly one record, blank
//! lines included, so records stay positionally paired with raw lines.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::models::TodoRecord;

static DATE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date token pattern"));

static PRIORITY_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\(([A-Z])\)$").expect("valid priority token pattern"));

/// Parse a single todo.txt line into a record.
pub fn parse_line(line: &str) -> TodoRecord {
    let mut record = TodoRecord::default();
    let mut tokens = line.trim().split_whitespace().peekable();

    if tokens.peek() == Some(&"x") {
        record.completed = true;
        tokens.next();
    }

    if let Some(tok) = tokens.peek() {
        if let Some(caps) = PRIORITY_TOKEN.captures(tok) {
            record.priority = caps[1].chars().next();
            tokens.next();
        }
    }

    // Leading dates: completion date first on completed tasks.
    if record.completed {
        if next_is_date(&mut tokens) {
            record.completion_date = tokens.next().map(str::to_string);
        }
        if next_is_date(&mut tokens) {
            record.creation_date = tokens.next().map(str::to_string);
        }
    } else if next_is_date(&mut tokens) {
        record.creation_date = tokens.next().map(str::to_string);
    }

    let mut words: Vec<&str> = Vec::new();
    for tok in tokens {
        if let Some(project) = tok.strip_prefix('+') {
            if !project.is_empty() {
                record.projects.push(project.to_string());
                continue;
            }
        }
        if let Some(context) = tok.strip_prefix('@') {
            if !context.is_empty() {
                record.contexts.push(context.to_string());
                continue;
            }
        }
        if let Some((key, value)) = tag_parts(tok) {
            record.tags.insert(key.to_string(), value.to_string());
            continue;
        }
        words.push(tok);
    }
    record.text = words.join(" ");

    record
}

/// Parse full file content, one record per line.
pub fn parse_str(content: &str) -> Vec<TodoRecord> {
    let records: Vec<TodoRecord> = content.lines().map(parse_line).collect();
    debug!(records = records.len(), "parsed todo.txt content");
    records
}

/// Parse a todo.txt file from disk.
pub fn from_file(path: &Path) -> Result<Vec<TodoRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(parse_str(&content))
}

fn next_is_date(tokens: &mut std::iter::Peekable<std::str::SplitWhitespace<'_>>) -> bool {
    tokens.peek().is_some_and(|tok| DATE_TOKEN.is_match(tok))
}

/// Split a `key:value` tag token. Both sides must be non-empty and the
/// value must not contain a further colon, so `a:b:c` stays free text.
fn tag_parts(token: &str) -> Option<(&str, &str)> {
    let (key, value) = token.split_once(':')?;
    if key.is_empty() || value.is_empty() || value.contains(':') {
        return None;
    }
    Some((key, value))
}
