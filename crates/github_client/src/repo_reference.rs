//! Repository reference parsing.
//!
//! Turns the textual conventions people use to identify a GitHub repository
//! into a normalized `(owner, name)` pair. The following forms are
//! recognized:
//!
//!   github-organization/github-repo-name
//!   github.com/github-organization/github-repo-name
//!   subdomain.github.com/github-organization/github-repo-name
//!   https://github.com/github-organization/github-repo-name
//!   https://github.com/github-organization/github-repo-name/blob/main
//!   https://github.com/github-organization/github-repo-name.git
//!   git+https://github.com/github-organization/github-repo-name.git
//!   git@github.com:github-organization/github-repo-name.git
//!
//! The parser anchors on the last two path segments before an optional
//! `.git` suffix or a `/blob/<ref>` / `/tree/<ref>` web-view tail, so deep
//! URLs on hosted subpaths resolve to the trailing pair rather than whatever
//! happens to come first. Owner-only inputs and strings with no plausible
//! owner/name structure are rejected.

use std::sync::LazyLock;

use regex::Regex;

#[cfg(test)]
#[path = "repo_reference_tests.rs"]
mod tests;

// A web-view tail such as `/blob/main/src/lib.rs` carries no information
// about the repository identity and is stripped before matching.
static WEB_VIEW_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(?:blob|tree)/\S*$").expect("valid web view tail pattern"));

// The trailing `owner/name` pair. The owner segment must be preceded by the
// start of the string, a `/`, or a `:` so that host fragments such as
// `github.com` never masquerade as an owner.
static TRAILING_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[/:])([\w-]+)/([\w-]+?)(?:\.git)?$").expect("valid owner/name pattern")
});

/// A normalized repository identity, derived once from a raw reference
/// string and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoReference {
    /// The GitHub organization or user that owns the repository
    pub owner: String,
    /// The name of the repository
    pub name: String,
}

/// The reference string did not match any supported repository convention.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Could not extract a GitHub owner and repository name from '{input}'")]
pub struct ParseReferenceError {
    /// The reference string that could not be parsed
    pub input: String,
}

/// Parses a free-form repository reference string.
///
/// Pure and deterministic: identical input always yields an identical pair
/// or an identical failure. No I/O is performed.
///
/// # Errors
/// Returns a `ParseReferenceError` when the input contains whitespace, names
/// only an owner, or does not resemble an owner/name pair at all.
pub fn parse(input: &str) -> Result<RepoReference, ParseReferenceError> {
    let reject = || ParseReferenceError {
        input: input.to_string(),
    };

    if input.is_empty() || input.chars().any(|c| c.is_whitespace()) {
        return Err(reject());
    }

    let trimmed = WEB_VIEW_TAIL.replace(input, "");
    let captures = TRAILING_PAIR.captures(&trimmed).ok_or_else(reject)?;

    Ok(RepoReference {
        owner: captures[1].to_string(),
        name: captures[2].to_string(),
    })
}
