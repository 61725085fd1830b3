//! Record translation: todo.txt records into Org node descriptors.
//!
//! This is the whole field mapping. Records and raw source lines are
//! paired positionally and strictly; one [`OrgNode`] comes out per record,
//! in input order.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use chrono::NaiveDate;
use todorg_orgmode::{org_timestamp, OrgNode, TodoKeyword};
use todorg_todotxt::models::{PRIORITY_TAG, THRESHOLD_TAG};
use todorg_todotxt::TodoRecord;

use crate::error::ConvertError;

/// Property holding the original task line, set on every node.
pub const IMPORTED_LINE_PROPERTY: &str = "Imported todo.txt line";

/// Property holding the task's `@context` labels, space-joined.
pub const CONTEXTS_PROPERTY: &str = "todotxt_contexts";

// Date-shaped substring preceded by whitespace. Month 01-12 and day 01-31
// only; calendar validity is checked later when the date is parsed. No
// trailing anchor, and no match for dates glued to a tag key like
// `due:2023-06-01` (the colon fails the leading `\s`).
static RECOVERY_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s((?:[0-9]{4})-(?:1[0-2]|0[1-9])-(?:3[01]|0[1-9]|[12][0-9]))")
        .expect("valid recovery date pattern")
});

/// Translate records into Org nodes, strictly paired with their raw
/// source lines.
pub fn translate(
    records: &[TodoRecord],
    raw_lines: &[String],
) -> Result<Vec<OrgNode>, ConvertError> {
    if records.len() != raw_lines.len() {
        return Err(ConvertError::SequenceLengthMismatch {
            records: records.len(),
            lines: raw_lines.len(),
        });
    }

    records
        .iter()
        .zip(raw_lines)
        .map(|(record, raw_line)| translate_record(record, raw_line))
        .collect()
}

fn translate_record(record: &TodoRecord, raw_line: &str) -> Result<OrgNode, ConvertError> {
    let raw = raw_line.trim();
    debug!(?record, raw, "translating record");

    let todo = if record.completed {
        TodoKeyword::Done
    } else {
        TodoKeyword::Todo
    };

    // Dedicated priority field wins over a pri: tag.
    let priority = record
        .priority
        .map(|p| p.to_string())
        .or_else(|| record.tag(PRIORITY_TAG).map(str::to_string));

    let mut headline = record.text.clone();
    if let Some(ref p) = priority {
        headline = format!("[#{}] {}", p.to_uppercase(), headline);
    }

    // For an open task with a priority the record's own creation date is
    // not trusted; it is recovered from the raw line instead. All other
    // combinations use the record's field directly.
    let creation_date = if priority.is_some() && !record.completed {
        recover_creation_date(raw)?
    } else {
        record.creation_date.clone()
    };

    let creation_ts = creation_date
        .as_deref()
        .map(parse_date)
        .transpose()?
        .map(org_timestamp);

    // Body segments, each keyed off the creation date. DONE and DEADLINE
    // referencing the creation date rather than the completion or due
    // date is observed upstream behavior, kept as-is.
    let mut body = String::new();
    if let Some(ref ts) = creation_ts {
        if record.completion_date.is_some() {
            body.push_str(&format!("DONE: [{ts}]\n"));
        }
        body.push_str(&format!("[{ts}]\n"));
        if record.has_due_tag() {
            body.push_str(&format!("DEADLINE: <{ts}>\n"));
        }
    }

    let scheduled = record.tag(THRESHOLD_TAG).map(parse_date).transpose()?;

    let mut properties = vec![(IMPORTED_LINE_PROPERTY.to_string(), raw.to_string())];
    if !record.contexts.is_empty() {
        properties.push((CONTEXTS_PROPERTY.to_string(), record.contexts.join(" ")));
    }

    let mut node = OrgNode::new(headline, todo);
    node.tags = record.projects.clone();
    node.properties = properties;
    node.scheduled = scheduled;
    node.body = if body.is_empty() { None } else { Some(body) };

    Ok(node)
}

/// Scan a raw line for a creation date.
///
/// Precondition: only called for open tasks carrying a priority, the one
/// combination where the parsed record's creation date is unreliable.
/// Exactly one date-shaped substring wins, none means no creation date,
/// several is unrecoverable because any of them could be the creation
/// date.
fn recover_creation_date(raw_line: &str) -> Result<Option<String>, ConvertError> {
    let mut matches = RECOVERY_DATE.captures_iter(raw_line);
    let first = matches.next();
    if matches.next().is_some() {
        return Err(ConvertError::AmbiguousDateRecovery {
            line: raw_line.to_string(),
        });
    }
    Ok(first.map(|caps| caps[1].to_string()))
}

fn parse_date(value: &str) -> Result<NaiveDate, ConvertError> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|source| ConvertError::DateParse {
        value: trimmed.to_string(),
        source,
    })
}
