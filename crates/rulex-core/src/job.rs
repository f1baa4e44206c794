//! Job file describing which rule files to read and write

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default path of the simple/develop rule file
pub const DEFAULT_INPUT_RULES: &str = "inputRomanRules.txt";
/// Default path of the verbatim rule file
pub const DEFAULT_ETC_RULES: &str = "inputEtcRules.txt";
/// Default path of the generated table
pub const DEFAULT_OUTPUT: &str = "outputRules.txt";

/// Paths for one conversion run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobFile {
    /// Simple and develop rules
    pub input_rules: PathBuf,
    /// Verbatim rules appended after expansion
    pub etc_rules: PathBuf,
    /// Generated rule table
    pub output: PathBuf,
    /// Where to save the run report, if anywhere
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<PathBuf>,
}

impl Default for JobFile {
    fn default() -> Self {
        Self {
            input_rules: PathBuf::from(DEFAULT_INPUT_RULES),
            etc_rules: PathBuf::from(DEFAULT_ETC_RULES),
            output: PathBuf::from(DEFAULT_OUTPUT),
            report: None,
        }
    }
}

impl JobFile {
    /// Load a job file from JSON
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| Error::FileRead {
            path: path.as_ref().to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(Error::Json)
    }

    /// Save the job file to JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), content).map_err(|e| Error::FileWrite {
            path: path.as_ref().to_path_buf(),
            source: e,
        })
    }
}
