//! Org-mode node model and renderer for the todorg converter
//!
//! The converter core builds [`OrgNode`] descriptors and hands them here
//! for serialization. Rendering is plain text assembly; this crate owns
//! the exact Org layout (heading line, planning line, property drawer,
//! body) so the core only supplies structured fields.

pub mod models;
pub mod writer;

pub use models::{OrgNode, TodoKeyword};
pub use writer::{org_timestamp, render_node};
