// SPDX-License-Identifier: MPL-2.0
//! Application list rules: search matching and per-app switch state.
//!
//! # Available Types
//!
//! - [`SearchQuery`]: Case-insensitive name prefix match
//! - [`SwitchStates`]: In-memory allow/deny switches keyed by app id

use std::collections::HashMap;

// =============================================================================
// Search Query
// =============================================================================

/// Search text typed by the user.
///
/// A blank query (empty or only whitespace) matches everything. Otherwise a
/// name matches when it starts with the query, ignoring case. The query is
/// not trimmed before matching, so a leading space only matches names that
/// start with one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    raw: String,
    lowered: String,
}

impl SearchQuery {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let raw = text.into();
        let lowered = raw.to_lowercase();
        Self { raw, lowered }
    }

    /// The text as typed, for the input field.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }

    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.is_blank() || name.to_lowercase().starts_with(&self.lowered)
    }

    /// Keeps the items whose name matches, preserving order.
    pub fn filter<'a, T>(
        &self,
        items: &'a [T],
        name: impl Fn(&T) -> &str,
    ) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(name(item))).collect()
    }
}

// =============================================================================
// Switch States
// =============================================================================

/// Whether a backend status string means the app is allowed.
#[must_use]
pub fn is_active_status(status: &str) -> bool {
    status.eq_ignore_ascii_case("active")
}

/// Per-app switch positions. Unknown ids read as off.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SwitchStates {
    states: HashMap<u64, bool>,
}

impl SwitchStates {
    /// Builds the initial switches from `(app_id, status)` pairs.
    pub fn from_statuses<'a>(records: impl IntoIterator<Item = (u64, &'a str)>) -> Self {
        Self {
            states: records
                .into_iter()
                .map(|(id, status)| (id, is_active_status(status)))
                .collect(),
        }
    }

    #[must_use]
    pub fn is_on(&self, app_id: u64) -> bool {
        self.states.get(&app_id).copied().unwrap_or(false)
    }

    /// Flips one switch and returns its new position.
    pub fn toggle(&mut self, app_id: u64) -> bool {
        let state = self.states.entry(app_id).or_insert(false);
        *state = !*state;
        *state
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
