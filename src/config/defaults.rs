// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **API**: Applications endpoint location and request timeout
//! - **Profile**: Header text and banner images
//! - **Tabs**: Tab bar geometry and slide duration
//! - **Carousel**: Banner height and autoplay cadence

// ==========================================================================
// API Defaults
// ==========================================================================

/// Base URL of the backend.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Path of the applications list endpoint, relative to the base URL.
pub const DEFAULT_APPS_LIST_PATH: &str = "apps/list";

/// Kid profile whose applications are listed.
pub const DEFAULT_KID_ID: &str = "378";

/// Request timeout (in seconds).
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 10;

/// Minimum request timeout (in seconds).
pub const MIN_API_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_API_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Profile Defaults
// ==========================================================================

pub const DEFAULT_PROFILE_NAME: &str = "My Profile";

pub const DEFAULT_PROFILE_STATUS: &str = "Connected";

/// Demo banner images shown when no banner list is configured.
pub const DEFAULT_BANNER_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=800&h=600",
    "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=800&h=600",
    "https://images.unsplash.com/photo-1549298916-b41d501d3772?w=800&h=600",
];

// ==========================================================================
// Tab Defaults
// ==========================================================================

/// Height of the tab bar (logical pixels).
pub const DEFAULT_TAB_BAR_HEIGHT: f32 = 50.0;

pub const MIN_TAB_BAR_HEIGHT: f32 = 24.0;

pub const MAX_TAB_BAR_HEIGHT: f32 = 120.0;

/// Height of the active tab indicator (logical pixels).
pub const DEFAULT_INDICATOR_HEIGHT: f32 = 3.0;

/// Width of a tab when the bar scrolls horizontally.
pub const DEFAULT_SCROLLABLE_TAB_WIDTH: f32 = 120.0;

/// Duration of a content slide (milliseconds).
pub const DEFAULT_TAB_ANIMATION_MS: u64 = 250;

pub const MAX_TAB_ANIMATION_MS: u64 = 2000;

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Banner carousel height (logical pixels).
pub const DEFAULT_CAROUSEL_HEIGHT: f32 = 200.0;

pub const MIN_CAROUSEL_HEIGHT: f32 = 80.0;

pub const MAX_CAROUSEL_HEIGHT: f32 = 600.0;

/// Autoplay interval (milliseconds).
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 3000;

pub const MIN_AUTOPLAY_INTERVAL_MS: u64 = 500;

pub const MAX_AUTOPLAY_INTERVAL_MS: u64 = 60_000;
