//! Writer for the flat rule table format
//!
//! Each rule becomes one line of the form `, Rule "<input>" "<output>" 0`.

use crate::error::{Error, Result};
use crate::rule::Rule;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Inputs that are never written, even when generated or listed verbatim.
/// Both are doubled-consonant spellings of the small tsu.
pub const EXCLUDED_INPUTS: [&str; 2] = ["lltsu", "xxtsu"];

/// Counts from a write pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteSummary {
    pub written: usize,
    pub excluded: usize,
}

/// Escape a field that is exactly `"` or `\`; anything else is unchanged
pub fn escape(s: &str) -> String {
    match s {
        "\"" | "\\" => format!("\\{}", s),
        _ => s.to_string(),
    }
}

/// Check whether an escaped input is excluded from output
pub fn is_excluded(escaped_input: &str) -> bool {
    EXCLUDED_INPUTS.contains(&escaped_input)
}

/// Format a rule as an output line, or `None` if it is excluded
pub fn format_rule(rule: &Rule) -> Option<String> {
    let input = escape(&rule.input);
    if is_excluded(&input) {
        return None;
    }
    let output = escape(&rule.output);
    Some(format!(", Rule \"{}\" \"{}\" 0", input, output))
}

/// Write rules to any writer, one line each
pub fn write_rules<'a, W, I>(writer: &mut W, rules: I) -> Result<WriteSummary>
where
    W: Write,
    I: IntoIterator<Item = &'a Rule>,
{
    let mut summary = WriteSummary::default();

    for rule in rules {
        match format_rule(rule) {
            Some(line) => {
                writeln!(writer, "{}", line)?;
                summary.written += 1;
            }
            None => {
                debug!(input = %rule.input, "excluding rule");
                summary.excluded += 1;
            }
        }
    }

    Ok(summary)
}

/// Write rules to a file, replacing it
pub fn write_rules_file<'a, P, I>(path: P, rules: I) -> Result<WriteSummary>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a Rule>,
{
    let path = path.as_ref();
    let to_write_error = |e: std::io::Error| Error::FileWrite {
        path: path.to_path_buf(),
        source: e,
    };

    let file = File::create(path).map_err(to_write_error)?;
    let mut writer = BufWriter::new(file);
    let summary = write_rules(&mut writer, rules)?;
    writer.flush().map_err(to_write_error)?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(rules: &[Rule]) -> (String, WriteSummary) {
        let mut buf = Vec::new();
        let summary = write_rules(&mut buf, rules).unwrap();
        (String::from_utf8(buf).unwrap(), summary)
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("\""), "\\\"");
        assert_eq!(escape("\\"), "\\\\");
        assert_eq!(escape("ka"), "ka");
        // Only a lone quote or backslash is escaped
        assert_eq!(escape("a\""), "a\"");
        assert_eq!(escape("\\\\"), "\\\\");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_escape_round_trip() {
        for s in ["\"", "\\"] {
            let escaped = escape(s);
            assert_eq!(escaped.strip_prefix('\\'), Some(s));
        }
    }

    #[test]
    fn test_format_rule() {
        assert_eq!(
            format_rule(&Rule::new("ka", "か")).as_deref(),
            Some(", Rule \"ka\" \"か\" 0")
        );
        assert_eq!(
            format_rule(&Rule::new("\"", "”")).as_deref(),
            Some(", Rule \"\\\"\" \"”\" 0")
        );
        assert_eq!(
            format_rule(&Rule::new("z\\", "\\")).as_deref(),
            Some(", Rule \"z\\\" \"\\\\\" 0")
        );
    }

    #[test]
    fn test_excluded_inputs_are_skipped() {
        let rules = vec![
            Rule::new("ltsu", "っ"),
            Rule::new("lltsu", "っっ"),
            Rule::new("xxtsu", "っっ"),
            Rule::new("xtsu", "っ"),
        ];

        let (text, summary) = render(&rules);

        assert_eq!(summary, WriteSummary { written: 2, excluded: 2 });
        assert_eq!(text, ", Rule \"ltsu\" \"っ\" 0\n, Rule \"xtsu\" \"っ\" 0\n");
    }

    #[test]
    fn test_exclusion_checks_input_only() {
        let (text, summary) = render(&[Rule::new("q", "lltsu")]);

        assert_eq!(summary.written, 1);
        assert_eq!(text, ", Rule \"q\" \"lltsu\" 0\n");
    }

    #[test]
    fn test_space_rule_line() {
        let (text, _) = render(&[Rule::new(" ", " ")]);
        assert_eq!(text, ", Rule \" \" \" \" 0\n");
    }

    #[test]
    fn test_write_rules_file_bad_path() {
        let err = write_rules_file("/nonexistent/dir/outputRules.txt", &[] as &[Rule]).unwrap_err();
        assert!(matches!(err, Error::FileWrite { .. }));
    }
}
