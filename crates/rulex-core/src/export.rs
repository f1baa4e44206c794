//! Alternate dumps of a rule table for inspection

use crate::error::{Error, Result};
use crate::rule::Rule;
use crate::writer::write_rules;
use std::io::Write;
use std::str::FromStr;

/// Output format for a dump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DumpFormat {
    /// The same line format as the generated table, exclusions applied
    #[default]
    Rules,
    /// Pretty JSON array of `{input, output}` objects
    Json,
    /// Tab-separated `input`/`output` with a header row
    Tsv,
}

impl FromStr for DumpFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "rules" => Ok(DumpFormat::Rules),
            "json" => Ok(DumpFormat::Json),
            "tsv" => Ok(DumpFormat::Tsv),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

/// Dump rules to a writer in the given format
pub fn dump_rules<W: Write>(writer: &mut W, rules: &[Rule], format: DumpFormat) -> Result<()> {
    match format {
        DumpFormat::Rules => {
            write_rules(writer, rules)?;
        }
        DumpFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, rules)?;
            writeln!(writer)?;
        }
        DumpFormat::Tsv => {
            let mut tsv = csv::WriterBuilder::new()
                .delimiter(b'\t')
                .from_writer(&mut *writer);
            for rule in rules {
                tsv.serialize(rule)?;
            }
            tsv.flush()?;
        }
    }
    Ok(())
}
