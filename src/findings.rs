use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One issue reported by the analyzer.
///
/// Every field is required in the analyzer's JSON output; a line missing
/// any of them fails the whole parse. Extra keys are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Finding {
    pub filename: String,
    pub line: u32,
    pub column: u32,
    pub text: String,
    /// Documentation URL, may be empty.
    pub link: String,
    pub confidence: f64,
    /// Literal source line the finding refers to, including its trailing
    /// line terminator when the analyzer emits one.
    pub linetext: String,
    pub category: String,
}

/// Parse the analyzer's combined output stream: one JSON-encoded finding
/// per line, returned in stream order. Blank lines are skipped; the first
/// malformed line fails the call with no partial results.
pub fn parse_findings(output: &str) -> Result<Vec<Finding>> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            serde_json::from_str(line)
                .map_err(|e| Error::Parse(format!("bad finding line {line:?}: {e}")))
        })
        .collect()
}
