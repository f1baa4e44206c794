//! Expansion of develop rules against simple rules

use crate::rule::{DevelopRule, Record, Rule, RuleSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Records split by field count
#[derive(Debug, Clone, Default)]
pub struct Partition {
    /// Two-field records
    pub simple: Vec<Rule>,
    /// Three-field records
    pub develop: Vec<DevelopRule>,
    /// Records with any other field count (dropped)
    pub skipped: usize,
}

/// Counts gathered while expanding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandStats {
    pub simple: usize,
    pub develop: usize,
    pub skipped: usize,
    pub composed: usize,
}

/// Result of expanding a rule file
#[derive(Debug, Clone, Default)]
pub struct Expansion {
    /// Simple rules followed by composed rules
    pub rules: RuleSet,
    pub stats: ExpandStats,
}

/// Split records into simple and develop rules
pub fn partition(records: &[Record]) -> Partition {
    let mut partition = Partition::default();

    for (line, record) in records.iter().enumerate() {
        match record.as_slice() {
            [input, output] => partition
                .simple
                .push(Rule::new(input.as_str(), output.as_str())),
            [input, output, key] => partition.develop.push(DevelopRule::new(
                input.as_str(),
                output.as_str(),
                key.as_str(),
            )),
            _ => {
                debug!(line = line + 1, fields = record.len(), "skipping record");
                partition.skipped += 1;
            }
        }
    }

    partition
}

/// Cross join develop rules with simple rules by prefix match.
///
/// Simple rules come first, then composed rules with develop rules as the
/// outer loop. Duplicates are kept.
pub fn expand(simple: &[Rule], develop: &[DevelopRule]) -> RuleSet {
    let mut rules = RuleSet::from(simple.to_vec());

    for d in develop {
        rules.extend(simple.iter().filter_map(|s| d.compose(s)));
    }

    rules
}

/// Partition and expand in one step
pub fn expand_records(records: &[Record]) -> Expansion {
    let partition = partition(records);
    let rules = expand(&partition.simple, &partition.develop);

    let stats = ExpandStats {
        simple: partition.simple.len(),
        develop: partition.develop.len(),
        skipped: partition.skipped,
        composed: rules.len() - partition.simple.len(),
    };
    debug!(?stats, "expanded rules");

    Expansion { rules, stats }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_records;

    #[test]
    fn test_partition_by_field_count() {
        let records = parse_records("a あ\nkk っ k\nlonely\n\none two three four\n");
        let partition = partition(&records);

        assert_eq!(partition.simple, vec![Rule::new("a", "あ")]);
        assert_eq!(partition.develop, vec![DevelopRule::new("kk", "っ", "k")]);
        assert_eq!(partition.skipped, 3);
    }

    #[test]
    fn test_expand_order() {
        let simple = vec![Rule::new("a", "1"), Rule::new("b", "2")];
        let develop = vec![DevelopRule::new("x", "X", "a")];

        let rules = expand(&simple, &develop);

        assert_eq!(
            rules.as_slice(),
            &[Rule::new("a", "1"), Rule::new("b", "2"), Rule::new("aa", "X1")]
        );
    }

    #[test]
    fn test_expand_develop_is_outer_loop() {
        let simple = vec![Rule::new("ka", "か"), Rule::new("ki", "き")];
        let develop = vec![
            DevelopRule::new("kk", "っ", "k"),
            DevelopRule::new("xk", "ヵ", "k"),
        ];

        let rules = expand(&simple, &develop);
        let inputs: Vec<&str> = rules.iter().map(|r| r.input.as_str()).collect();
        let outputs: Vec<&str> = rules.iter().map(|r| r.output.as_str()).collect();

        assert_eq!(inputs, vec!["ka", "ki", "kka", "kki", "kka", "kki"]);
        assert_eq!(outputs, vec!["か", "き", "っか", "っき", "ヵか", "ヵき"]);
    }

    #[test]
    fn test_expand_composes_iff_prefix_matches() {
        let simple = vec![
            Rule::new("ta", "た"),
            Rule::new("tsu", "つ"),
            Rule::new("a", "あ"),
        ];
        let develop = vec![DevelopRule::new("tt", "っ", "t")];

        let rules = expand(&simple, &develop);

        assert_eq!(rules.len(), 5);
        assert!(rules.find("tta").is_some());
        assert!(rules.find("ttsu").is_some());
        assert!(rules.find("ta").is_some());
        assert!(rules.iter().all(|r| r.input != "ta" || r.output == "た"));
    }

    #[test]
    fn test_expand_without_develop_rules() {
        let simple = vec![Rule::new("a", "あ")];
        let rules = expand(&simple, &[]);

        assert_eq!(rules.as_slice(), &[Rule::new("a", "あ")]);
    }

    #[test]
    fn test_expand_records_stats() {
        let records = parse_records("ka か\nsa さ\nkk っ k\nss っ s\nbogus\n");
        let expansion = expand_records(&records);

        assert_eq!(
            expansion.stats,
            ExpandStats {
                simple: 2,
                develop: 2,
                skipped: 1,
                composed: 2,
            }
        );
        assert_eq!(expansion.rules.len(), 4);
        assert_eq!(expansion.rules.find("kka"), Some(&Rule::new("kka", "っか")));
        assert_eq!(expansion.rules.find("ssa"), Some(&Rule::new("ssa", "っさ")));
    }
}
