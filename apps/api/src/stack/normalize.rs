use std::collections::HashSet;

use crate::stack::canonical::canonicalize;

/// Bounds applied to a normalized stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackLimits {
    /// Canonical names longer than this (in characters) are dropped.
    pub max_name_chars: usize,
    /// The stack is truncated to this many entries.
    pub max_items: usize,
}

impl Default for StackLimits {
    fn default() -> Self {
        Self {
            max_name_chars: 64,
            max_items: 20,
        }
    }
}

/// Canonicalizes a raw candidate list into a presentable stack.
///
/// Each candidate is cleaned and mapped through the canonical rule table.
/// Empty or over-long names are dropped, case-insensitive duplicates keep
/// their first occurrence, and the result is capped at `limits.max_items`.
/// Input order is preserved.
pub fn normalize_stack<S: AsRef<str>>(raw: &[S], limits: &StackLimits) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut stack = Vec::new();

    for candidate in raw {
        if stack.len() >= limits.max_items {
            break;
        }

        let name = canonicalize(candidate.as_ref());
        if name.is_empty() || name.chars().count() > limits.max_name_chars {
            continue;
        }

        if seen.insert(name.to_lowercase()) {
            stack.push(name);
        }
    }

    stack
}
