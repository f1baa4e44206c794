//! Rule types shared by every stage

use serde::{Deserialize, Serialize};
use std::fmt;

/// One line of a rule file, split on whitespace
pub type Record = Vec<String>;

/// An input pattern mapped to an output pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Romaji typed by the user
    pub input: String,
    /// Text produced for it
    pub output: String,
}

impl Rule {
    /// Create a new rule
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Build a rule from a record of any length.
    ///
    /// The first field is the input and the second the output; missing
    /// fields become empty strings and extra fields are ignored.
    pub fn from_record(record: &[String]) -> Self {
        let field = |i: usize| record.get(i).cloned().unwrap_or_default();
        Self {
            input: field(0),
            output: field(1),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.input, self.output)
    }
}

/// A partial rule that is completed by a simple rule starting with `key`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevelopRule {
    /// Prefix input (first field)
    pub prefix_input: String,
    /// Prefix output (second field)
    pub prefix_output: String,
    /// Match key (third field)
    pub key: String,
}

impl DevelopRule {
    /// Create a new develop rule
    pub fn new(
        prefix_input: impl Into<String>,
        prefix_output: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            prefix_input: prefix_input.into(),
            prefix_output: prefix_output.into(),
            key: key.into(),
        }
    }

    /// Compose with a simple rule, if its input starts with the key.
    ///
    /// The composed input is `key + simple.input`, not
    /// `prefix_input + simple.input`. Existing rule files depend on this.
    pub fn compose(&self, simple: &Rule) -> Option<Rule> {
        if !simple.input.starts_with(self.key.as_str()) {
            return None;
        }
        Some(Rule {
            input: format!("{}{}", self.key, simple.input),
            output: format!("{}{}", self.prefix_output, simple.output),
        })
    }
}

/// Ordered list of rules; order is significant to the consumer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Create a new empty rule set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule at the end
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Get the number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate in order
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Borrow the rules as a slice
    pub fn as_slice(&self) -> &[Rule] {
        &self.rules
    }

    /// Find the first rule with the given input
    pub fn find(&self, input: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.input == input)
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self { rules }
    }
}

impl Extend<Rule> for RuleSet {
    fn extend<T: IntoIterator<Item = Rule>>(&mut self, iter: T) {
        self.rules.extend(iter);
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
