//! Appends verbatim rules after the expanded table

use crate::rule::{Record, Rule, RuleSet};

/// Append verbatim records, then the space-to-space rule.
///
/// No arity filtering happens here: every record becomes a rule through
/// [`Rule::from_record`]. Returns the number of verbatim rules appended.
pub fn merge_etc(rules: &mut RuleSet, etc: &[Record]) -> usize {
    rules.extend(etc.iter().map(|record| Rule::from_record(record)));
    rules.push(space_rule());
    etc.len()
}

/// The rule that maps a space to a space
pub fn space_rule() -> Rule {
    Rule::new(" ", " ")
}
