//! Key matching against the configured deletion criteria.
//!
//! Three rule classes are evaluated in priority order; the first rule class
//! and first list entry that succeeds determines the reported reason:
//!
//! 1. Exact match: the full key, or its last path segment, equals an
//!    extension token (case-sensitive). Handles literal dotfile names
//!    like `.DS_Store`.
//! 2. Extension match: the key ends with a dot-prefixed extension token
//!    (case-insensitive).
//! 3. Substring match: the key contains a pattern token (case-insensitive).

use crate::types::MatchReason;

/// User-supplied deletion criteria: extension tokens and substring tokens.
///
/// Both lists keep their configured order; the matcher evaluates entries
/// in that order. Both may be empty individually but not simultaneously
/// (enforced at configuration time, see [`Config`](crate::config::Config)).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    pub extensions: Vec<String>,
    pub patterns: Vec<String>,
}

impl Criteria {
    /// Parse comma-separated extension and pattern lists.
    ///
    /// Entries are trimmed of surrounding whitespace; empty entries are
    /// discarded.
    pub fn from_lists(extensions: &str, patterns: &str) -> Self {
        Self {
            extensions: parse_list(extensions),
            patterns: parse_list(patterns),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty() && self.patterns.is_empty()
    }
}

fn parse_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

/// Decide whether `key` matches the criteria and why.
///
/// Returns `None` when no rule fires. See the module docs for the rule
/// priority order.
pub fn matches(key: &str, criteria: &Criteria) -> Option<MatchReason> {
    for ext in &criteria.extensions {
        if key == ext || key.ends_with(&format!("/{ext}")) {
            return Some(MatchReason::Exact(ext.clone()));
        }
    }

    let key_lower = key.to_lowercase();

    for ext in &criteria.extensions {
        if ext.starts_with('.') && key_lower.ends_with(&ext.to_lowercase()) {
            return Some(MatchReason::Extension(ext.clone()));
        }
    }

    for pattern in &criteria.patterns {
        if key_lower.contains(&pattern.to_lowercase()) {
            return Some(MatchReason::Contains(pattern.clone()));
        }
    }

    None
}
