//! Targeted indentation fix
//!
//! Finds checklist items whose `item-text` ended up after the checkbox
//! container with broken indentation and re-indents it inside the item.

use super::rules::RewriteRule;
use super::{run_rules, PatchError};
use crate::models::PatchReport;

pub const JOB_NAME: &str = "fix-indentation";

const CHECKLIST_ITEM_TEXT: &str = concat!(
    r#"(?s)(<div class="checklist-item">\s*<div class="checkbox-container">"#,
    r#"(?:\s*<div class="checkbox-group">.*?</div>){2}\s*</div>)"#,
    r#"\s*(<div class="item-text">.*?</div>)\s*(</div>)"#,
);

pub fn rules() -> Result<Vec<RewriteRule>, PatchError> {
    let replacement = format!("${{1}}\n{}${{2}}\n{}${{3}}", " ".repeat(28), " ".repeat(24));
    Ok(vec![RewriteRule::template(
        "checklist-item-text",
        CHECKLIST_ITEM_TEXT,
        replacement,
    )?])
}

/// Re-indent `item-text` blocks that follow a two-group checkbox container
pub fn fix_checkbox_indentation(html: &str) -> Result<(String, PatchReport), PatchError> {
    Ok(run_rules(JOB_NAME, &rules()?, html))
}
