//! todorg converter core
//!
//! One-shot batch translation of a todo.txt file into an Org-mode outline.
//! The todo.txt parser (`todorg-todotxt`) and the Org renderer
//! (`todorg-orgmode`) are collaborators; this crate owns the field mapping
//! between the two task models plus the thin file I/O around it.
//!
//! A run reads the source file twice, once as raw lines and once through
//! the parser, zips the two sequences strictly by position, translates
//! every pair into an Org node, and writes all rendered nodes in one shot.
//! Any error aborts the run before the output file is opened.

pub mod error;
pub mod io;
pub mod translator;

use anyhow::Result;
use std::path::Path;
use tracing::info;

pub use error::ConvertError;
pub use translator::{translate, CONTEXTS_PROPERTY, IMPORTED_LINE_PROPERTY};

/// Convert a todo.txt file into an Org file. Fatal on any parse, date,
/// pairing, or I/O failure; never writes a partial output.
pub fn convert_file(input: &Path, output: &Path) -> Result<()> {
    let raw_lines = io::read_lines(input)?;
    let records = todorg_todotxt::from_file(input)?;

    let nodes = translate(&records, &raw_lines)?;
    io::write_nodes(output, &nodes)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        nodes = nodes.len(),
        "conversion complete"
    );
    Ok(())
}
