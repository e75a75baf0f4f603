//! Branch-name driven commit message gating.
//!
//! Branches named `story/<TICKET>`, `bugfix/<TICKET>` or `rc/<VERSION>`
//! carry a prefix that commit messages are expected to repeat, as in
//! `ABC-123 | fix rounding in totals`. Everything in this module is a
//! pure function over strings; reading the branch name and deciding what
//! to do with a verdict is the caller's job.

use regex::Regex;

/// Outcome of checking a commit message against its branch prefix.
///
/// `NeedsConfirmation` is advisory, not a failure: the caller shows the
/// expected format and lets the user decide. Nothing in this module can
/// block a commit by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Message matches the expected format, or no gate applies.
    Pass,
    /// Message does not match; ask the user before continuing.
    NeedsConfirmation,
}

impl Verdict {
    #[must_use]
    pub fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }
}

/// Extract the gating prefix from a branch name.
///
/// Recognizes `story/ABC-123` and `bugfix/XY-9` (uppercase ticket codes
/// only) plus `rc/1.2.3` release branches. Returns `None` for anything
/// else, which means the branch carries no gate at all.
#[must_use]
pub fn extract_prefix(branch_name: &str) -> Option<String> {
    let re = Regex::new(r"(?:story|bugfix)/([A-Z]+-\d+)|rc/([\d.]+)").unwrap();
    let caps = re.captures(branch_name)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().to_string())
}

/// Check a commit message against an already-extracted prefix.
///
/// Passes iff the trimmed message starts with `"<prefix> |"`. An empty
/// message never passes.
#[must_use]
pub fn validate(commit_message: &str, prefix: &str) -> Verdict {
    if commit_message.trim().starts_with(&format!("{prefix} |")) {
        Verdict::Pass
    } else {
        Verdict::NeedsConfirmation
    }
}

/// Extract and validate in one step.
///
/// Branches without a recognizable prefix always pass.
#[must_use]
pub fn check(branch_name: &str, commit_message: &str) -> Verdict {
    match extract_prefix(branch_name) {
        Some(prefix) => validate(commit_message, &prefix),
        None => Verdict::Pass,
    }
}

/// The message format expected for the given prefix, for display to the
/// user when a check comes back [`Verdict::NeedsConfirmation`].
#[must_use]
pub fn expected_format(prefix: &str) -> String {
    format!("{prefix} | ...")
}
