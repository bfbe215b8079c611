//! Pass/fail checkbox migration
//!
//! Replaces the old two-checkbox container with the expanded markup carrying
//! explicit `pass`/`fail` classes and labels. The migrated markup no longer
//! matches the old pattern, so running the migration twice is a no-op.

use super::rules::RewriteRule;
use super::{run_rules, PatchError};
use crate::models::PatchReport;
use regex::Captures;

pub const JOB_NAME: &str = "migrate-checkboxes";

const OLD_CHECKBOX_CONTAINER: &str = concat!(
    r#"(?ms)<div class="checkbox-container">\s*"#,
    r#"<input type="checkbox" class="checkbox(?:\s+\w+)?" name="([^"]+)" id="([^"]+)">\s*"#,
    r#"<input type="checkbox" class="checkbox (?:failed|fail)" name="([^"]+)" id="([^"]+)">\s*"#,
    r#"</div>"#,
);

/// Render the pass/fail block for one old container
pub fn pass_fail_block(pass_name: &str, pass_id: &str, fail_name: &str, fail_id: &str) -> String {
    format!(
        r#"<div class="checkbox-container">
                            <div class="checkbox-group">
                                <input type="checkbox" class="checkbox pass" name="{pass_name}" id="{pass_id}">
                                <label for="{pass_id}" class="checkbox-label pass">✓ PASS</label>
                            </div>
                            <div class="checkbox-group">
                                <input type="checkbox" class="checkbox fail" name="{fail_name}" id="{fail_id}">
                                <label for="{fail_id}" class="checkbox-label fail">✗ FAIL</label>
                            </div>
                        </div>"#
    )
}

fn render(caps: &Captures<'_>) -> String {
    pass_fail_block(&caps[1], &caps[2], &caps[3], &caps[4])
}

pub fn rules() -> Result<Vec<RewriteRule>, PatchError> {
    Ok(vec![RewriteRule::render(
        "pass-fail-checkboxes",
        OLD_CHECKBOX_CONTAINER,
        render,
    )?])
}

/// Migrate every old two-checkbox container to the pass/fail format
pub fn update_checkbox_format(html: &str) -> Result<(String, PatchReport), PatchError> {
    Ok(run_rules(JOB_NAME, &rules()?, html))
}
