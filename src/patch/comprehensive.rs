//! Comprehensive checkbox container fix
//!
//! Four rules applied in order, each to the output of the previous one.
//! Rules overlap (e.g. `group-closing-tags` sees what `item-text-nesting`
//! produced), so the order is part of the behavior.

use super::rules::RewriteRule;
use super::{run_rules, PatchError};
use crate::models::PatchReport;

pub const JOB_NAME: &str = "comprehensive-fix";

fn indent(width: usize) -> String {
    " ".repeat(width)
}

pub fn rules() -> Result<Vec<RewriteRule>, PatchError> {
    Ok(vec![
        // item-text stranded outside its checklist-item
        RewriteRule::template(
            "item-text-nesting",
            r#"(?s)(</div>\s*)</div>\s*(<div class="item-text">.*?</div>)\s*</div>"#,
            format!("${{1}}${{2}}\n{}</div>", indent(24)),
        )?,
        RewriteRule::template(
            "container-group-indent",
            r#"(<div class="checkbox-container">)\s*(<div class="checkbox-group">)"#,
            format!("${{1}}\n{}${{2}}", indent(32)),
        )?,
        RewriteRule::template(
            "group-closing-tags",
            r#"(</div>)\s*(</div>)\s*(</div>)\s*(<div class="item-text">)"#,
            format!(
                "${{1}}\n{}${{2}}\n{}${{3}}\n{}${{4}}",
                indent(28),
                indent(24),
                indent(24)
            ),
        )?,
        RewriteRule::template(
            "section-spacing",
            r#"(</div>\s*</div>\s*</div>\s*)(\s*)(<div class="section">)"#,
            format!("${{1}}\n\n{}${{3}}", indent(12)),
        )?,
    ])
}

/// Apply all four container fixes in order
pub fn fix_all_checkbox_issues(html: &str) -> Result<(String, PatchReport), PatchError> {
    Ok(run_rules(JOB_NAME, &rules()?, html))
}
