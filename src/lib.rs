// SPDX-License-Identifier: MPL-2.0
//! `profile_deck` is a profile screen built with the Iced GUI framework.
//!
//! It shows a profile header with a banner carousel above swipeable
//! "Applications" and "Settings" tabs. Both the tabs and the carousel are
//! driven by the headless [`pager::Pager`], which turns raw drag gestures
//! into page changes with spring and timing animations.

pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod pager;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
