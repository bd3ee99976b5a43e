// SPDX-License-Identifier: MPL-2.0
//! Immutable pager configuration.
//!
//! A [`PagerConfig`] is built from one of the two presets and adjusted with
//! `with_*` builders; [`PagerConfig::validate`] runs when the pager is
//! constructed, so an invalid combination never reaches the state machine.

use crate::error::{Error, Result};
use std::time::Duration;

/// Shortest accepted autoplay interval.
pub const MIN_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(500);

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

fn is_in_range(value: f32, min: f32, max: f32) -> bool {
    (min..=max).contains(&value)
}

/// Which surface the pager drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerVariant {
    /// Tab bar with an indicator plus swappable content.
    Tabs,
    /// Horizontal image strip with dots and optional autoplay.
    Carousel,
}

/// Gesture tuning for one variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureThresholds {
    /// Horizontal travel before a drag activates.
    pub activation_distance: f32,
    /// Fraction of the viewport width that commits a release.
    pub commit_fraction: f32,
    /// Release speed (units/ms) that commits regardless of distance.
    pub velocity_threshold: f32,
    /// Damping applied when dragging past the first or last page.
    pub edge_resistance: f32,
}

impl GestureThresholds {
    #[must_use]
    pub const fn tabs() -> Self {
        Self {
            activation_distance: 10.0,
            commit_fraction: 0.25,
            velocity_threshold: 0.4,
            edge_resistance: 0.15,
        }
    }

    #[must_use]
    pub const fn carousel() -> Self {
        Self {
            activation_distance: 8.0,
            commit_fraction: 0.25,
            velocity_threshold: 0.5,
            edge_resistance: 0.15,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.activation_distance.is_nan() || self.activation_distance < 0.0 {
            return Err(Error::Config(
                "activation distance must not be negative".into(),
            ));
        }
        if !is_in_range(self.commit_fraction, 0.0, 1.0) || self.commit_fraction == 0.0 {
            return Err(Error::Config(
                "commit fraction must lie in (0, 1]".into(),
            ));
        }
        if !is_positive(self.velocity_threshold) {
            return Err(Error::Config(
                "velocity threshold must be positive".into(),
            ));
        }
        if !is_in_range(self.edge_resistance, 0.0, 1.0) {
            return Err(Error::Config(
                "edge resistance must lie in [0, 1]".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PagerConfig {
    variant: PagerVariant,
    bar_height: f32,
    scrollable: bool,
    tab_width: f32,
    animation_duration: Duration,
    indicator_height: f32,
    swipe_enabled: bool,
    autoplay: bool,
    autoplay_interval: Duration,
    show_pagination: bool,
    thresholds: GestureThresholds,
}

impl PagerConfig {
    /// Tab view defaults: 50 high bar, 3 high indicator, 250 ms slides.
    #[must_use]
    pub fn tabs() -> Self {
        Self {
            variant: PagerVariant::Tabs,
            bar_height: 50.0,
            scrollable: false,
            tab_width: 120.0,
            animation_duration: Duration::from_millis(250),
            indicator_height: 3.0,
            swipe_enabled: true,
            autoplay: false,
            autoplay_interval: Duration::from_millis(3000),
            show_pagination: false,
            thresholds: GestureThresholds::tabs(),
        }
    }

    /// Carousel defaults: dots shown, autoplay off, 3 s interval.
    #[must_use]
    pub fn carousel() -> Self {
        Self {
            variant: PagerVariant::Carousel,
            bar_height: 0.0,
            scrollable: false,
            tab_width: 0.0,
            animation_duration: Duration::from_millis(300),
            indicator_height: 0.0,
            swipe_enabled: true,
            autoplay: false,
            autoplay_interval: Duration::from_millis(3000),
            show_pagination: true,
            thresholds: GestureThresholds::carousel(),
        }
    }

    #[must_use]
    pub fn with_bar_height(mut self, bar_height: f32) -> Self {
        self.bar_height = bar_height;
        self
    }

    /// Fixed-width tabs in a horizontally scrolling bar instead of equal shares.
    #[must_use]
    pub fn with_scrollable(mut self, scrollable: bool, tab_width: f32) -> Self {
        self.scrollable = scrollable;
        self.tab_width = tab_width;
        self
    }

    #[must_use]
    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    #[must_use]
    pub fn with_indicator_height(mut self, indicator_height: f32) -> Self {
        self.indicator_height = indicator_height;
        self
    }

    #[must_use]
    pub fn with_swipe_enabled(mut self, swipe_enabled: bool) -> Self {
        self.swipe_enabled = swipe_enabled;
        self
    }

    #[must_use]
    pub fn with_autoplay(mut self, autoplay: bool, interval: Duration) -> Self {
        self.autoplay = autoplay;
        self.autoplay_interval = interval;
        self
    }

    #[must_use]
    pub fn with_pagination(mut self, show_pagination: bool) -> Self {
        self.show_pagination = show_pagination;
        self
    }

    #[must_use]
    pub fn with_thresholds(mut self, thresholds: GestureThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Rejects combinations the pager cannot honour.
    pub fn validate(&self) -> Result<()> {
        self.thresholds.validate()?;

        if self.variant == PagerVariant::Tabs {
            if !is_positive(self.bar_height) {
                return Err(Error::Config("tab bar height must be positive".into()));
            }
            if !is_in_range(self.indicator_height, 0.0, self.bar_height) {
                return Err(Error::Config(
                    "indicator height must fit inside the tab bar".into(),
                ));
            }
            if self.scrollable && !is_positive(self.tab_width) {
                return Err(Error::Config(
                    "scrollable tabs need a positive tab width".into(),
                ));
            }
        }

        if self.autoplay && self.autoplay_interval < MIN_AUTOPLAY_INTERVAL {
            return Err(Error::Config(format!(
                "autoplay interval must be at least {} ms",
                MIN_AUTOPLAY_INTERVAL.as_millis()
            )));
        }

        Ok(())
    }

    #[must_use]
    pub fn variant(&self) -> PagerVariant {
        self.variant
    }

    #[must_use]
    pub fn bar_height(&self) -> f32 {
        self.bar_height
    }

    #[must_use]
    pub fn scrollable(&self) -> bool {
        self.scrollable
    }

    #[must_use]
    pub fn tab_width(&self) -> f32 {
        self.tab_width
    }

    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        self.animation_duration
    }

    #[must_use]
    pub fn indicator_height(&self) -> f32 {
        self.indicator_height
    }

    #[must_use]
    pub fn swipe_enabled(&self) -> bool {
        self.swipe_enabled
    }

    #[must_use]
    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    #[must_use]
    pub fn autoplay_interval(&self) -> Duration {
        self.autoplay_interval
    }

    #[must_use]
    pub fn show_pagination(&self) -> bool {
        self.show_pagination
    }

    #[must_use]
    pub fn thresholds(&self) -> GestureThresholds {
        self.thresholds
    }
}
