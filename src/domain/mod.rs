// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure rules with no I/O and no external dependencies.
//!
//! # Modules
//!
//! - [`applications`]: Search matching ([`SearchQuery`](applications::SearchQuery))
//!   and switch state ([`SwitchStates`](applications::SwitchStates))

pub mod applications;
