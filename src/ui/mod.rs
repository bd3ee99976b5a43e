// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `view` and, where it has input, a `Message` the app routes back
//! into its `update`.
//!
//! # Screen Parts
//!
//! - [`profile_header`] - Back button, avatar, name and status
//! - [`carousel`] - Banner images with pagination dots
//! - [`tab_view`] - Tab bar with sliding indicator over swipeable pages
//! - [`applications`] - Searchable application list with switches
//! - [`settings_page`] - Static settings pane
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (gesture area, remote images)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`notifications`] - Toast notification system for user feedback

pub mod applications;
pub mod carousel;
pub mod design_tokens;
pub mod notifications;
pub mod profile_header;
pub mod settings_page;
pub mod tab_view;
pub mod widgets;
