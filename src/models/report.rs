use serde::Serialize;

/// How many times one rewrite rule fired
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleOutcome {
    pub name: String,
    pub replacements: usize,
}

/// Result of running a patch job over an HTML document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PatchReport {
    /// Job name (e.g., "migrate-checkboxes")
    pub job: String,
    /// Per-rule outcomes, in application order
    pub rules: Vec<RuleOutcome>,
    /// Document length in characters before patching
    pub original_len: usize,
    /// Document length in characters after patching
    pub patched_len: usize,
    /// Whether the patched text differs from the input
    pub changed: bool,
    /// Whether the result was written back to disk
    pub written: bool,
}

impl PatchReport {
    pub fn new(job: impl Into<String>) -> Self {
        Self {
            job: job.into(),
            ..Self::default()
        }
    }

    /// Total matches replaced across all rules
    pub fn total_replacements(&self) -> usize {
        self.rules.iter().map(|r| r.replacements).sum()
    }

    pub(crate) fn record(&mut self, name: &str, replacements: usize) {
        self.rules.push(RuleOutcome {
            name: name.to_string(),
            replacements,
        });
    }
}
