// SPDX-License-Identifier: MPL-2.0
//! Pages held by a pager.

/// One logical page: a unique key, an arbitrary payload and a disabled flag.
///
/// Pages are fixed for the lifetime of the pager; only the active index moves.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<P> {
    pub key: String,
    pub payload: P,
    pub disabled: bool,
}

impl<P> Page<P> {
    pub fn new(key: impl Into<String>, payload: P) -> Self {
        Self {
            key: key.into(),
            payload,
            disabled: false,
        }
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Emitted exactly once per committed page change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageChange {
    pub key: String,
    pub index: usize,
}
