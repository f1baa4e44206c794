//! Loader for whitespace-delimited rule files

use crate::error::{Error, Result};
use crate::rule::Record;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a rule file into one record per line
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let records = parse_records(&content);
    debug!(path = %path.display(), records = records.len(), "loaded rule file");
    Ok(records)
}

/// Split text into records (useful for testing)
///
/// Blank lines give empty records. Only ASCII whitespace separates fields,
/// so a full-width space stays inside its token.
pub fn parse_records(content: &str) -> Vec<Record> {
    content.lines().map(split_fields).collect()
}

fn split_fields(line: &str) -> Record {
    line.split(is_separator)
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}
