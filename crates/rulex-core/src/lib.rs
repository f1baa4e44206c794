//! rulex-core: Core library for expanding romaji input rules
//!
//! This library provides functionality to:
//! - Load whitespace-delimited rule files
//! - Expand three-field "develop" rules against two-field simple rules
//! - Append verbatim rules and the space rule
//! - Write the flat rule table, applying escapes and exclusions
//! - Describe runs with JSON job files and reports

pub mod error;
pub mod expander;
pub mod export;
pub mod job;
pub mod loader;
pub mod merger;
pub mod pipeline;
pub mod report;
pub mod rule;
pub mod writer;

pub use error::{Error, Result};
pub use expander::{expand, expand_records, partition, ExpandStats, Expansion, Partition};
pub use export::{dump_rules, DumpFormat};
pub use job::JobFile;
pub use loader::{load_records, parse_records};
pub use merger::{merge_etc, space_rule};
pub use pipeline::run_job;
pub use report::RunReport;
pub use rule::{DevelopRule, Record, Rule, RuleSet};
pub use writer::{escape, format_rule, write_rules, write_rules_file, WriteSummary};
