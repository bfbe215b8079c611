use super::PatchError;
use regex::{Captures, Regex};

/// What a match is replaced with
pub enum Replacement {
    /// `regex` replacement template, with `${n}` group references
    Template(String),
    /// Replacement computed from the captures
    Render(fn(&Captures<'_>) -> String),
}

/// One named find/replace step of a patch job
pub struct RewriteRule {
    name: &'static str,
    regex: Regex,
    replacement: Replacement,
}

impl RewriteRule {
    /// Compile a rule with a template replacement
    pub fn template(
        name: &'static str,
        pattern: &str,
        replacement: impl Into<String>,
    ) -> Result<Self, PatchError> {
        Ok(Self {
            name,
            regex: compile(name, pattern)?,
            replacement: Replacement::Template(replacement.into()),
        })
    }

    /// Compile a rule whose replacement is built per match
    pub fn render(
        name: &'static str,
        pattern: &str,
        render: fn(&Captures<'_>) -> String,
    ) -> Result<Self, PatchError> {
        Ok(Self {
            name,
            regex: compile(name, pattern)?,
            replacement: Replacement::Render(render),
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Replace every non-overlapping match, leftmost first.
    ///
    /// Returns the rewritten text and the number of matches replaced.
    pub fn apply(&self, text: &str) -> (String, usize) {
        let count = self.regex.find_iter(text).count();
        if count == 0 {
            return (text.to_string(), 0);
        }

        let rewritten = match &self.replacement {
            Replacement::Template(template) => self.regex.replace_all(text, template.as_str()),
            Replacement::Render(render) => self.regex.replace_all(text, |caps: &Captures<'_>| render(caps)),
        };
        (rewritten.into_owned(), count)
    }
}

fn compile(name: &str, pattern: &str) -> Result<Regex, PatchError> {
    Regex::new(pattern).map_err(|e| PatchError::InvalidPattern(name.to_string(), e))
}
