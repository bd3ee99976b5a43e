// SPDX-License-Identifier: MPL-2.0
//! Per-page dot indicator state.

use super::animation::{AnimatedValue, SpringProfile, TimingProfile};
use std::time::{Duration, Instant};

pub const ACTIVE_SCALE: f32 = 1.2;
pub const INACTIVE_SCALE: f32 = 0.8;
pub const ACTIVE_OPACITY: f32 = 1.0;
pub const INACTIVE_OPACITY: f32 = 0.6;

const OPACITY_DURATION: Duration = Duration::from_millis(200);

fn scale_spring() -> SpringProfile {
    SpringProfile::from_tension(300.0, 8.0)
}

/// A single dot's animated appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    scale: AnimatedValue,
    opacity: AnimatedValue,
}

impl Dot {
    fn resting(active: bool) -> Self {
        let (scale, opacity) = targets(active);
        Self {
            scale: AnimatedValue::new(scale),
            opacity: AnimatedValue::new(opacity),
        }
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity.value()
    }
}

fn targets(active: bool) -> (f32, f32) {
    if active {
        (ACTIVE_SCALE, ACTIVE_OPACITY)
    } else {
        (INACTIVE_SCALE, INACTIVE_OPACITY)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pagination {
    dots: Vec<Dot>,
}

impl Pagination {
    /// Dots start at rest on their targets.
    #[must_use]
    pub fn new(page_count: usize, active_index: usize) -> Self {
        Self {
            dots: (0..page_count)
                .map(|index| Dot::resting(index == active_index))
                .collect(),
        }
    }

    /// Animates every dot toward the look for `active_index`.
    pub fn set_active(&mut self, active_index: usize, now: Instant) {
        for (index, dot) in self.dots.iter_mut().enumerate() {
            let (scale, opacity) = targets(index == active_index);
            dot.scale.spring_to(scale, scale_spring(), now);
            dot.opacity
                .time_to(opacity, TimingProfile::ease_in_out(OPACITY_DURATION), now);
        }
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        self.dots.iter_mut().fold(false, |moving, dot| {
            let scale = dot.scale.tick(now);
            let opacity = dot.opacity.tick(now);
            moving | scale | opacity
        })
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.dots
            .iter()
            .any(|dot| dot.scale.is_animating() || dot.opacity.is_animating())
    }

    #[must_use]
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn dots_start_at_their_targets() {
        let pagination = Pagination::new(3, 1);
        assert!(!pagination.is_animating());
        assert_abs_diff_eq!(pagination.dots()[1].scale(), ACTIVE_SCALE);
        assert_abs_diff_eq!(pagination.dots()[0].opacity(), INACTIVE_OPACITY);
    }

    #[test]
    fn changing_active_dot_animates_to_new_targets() {
        let start = Instant::now();
        let mut pagination = Pagination::new(3, 0);
        pagination.set_active(2, start);
        assert!(pagination.is_animating());

        pagination.tick(start + Duration::from_millis(100));
        let opacity = pagination.dots()[2].opacity();
        assert!(opacity > INACTIVE_OPACITY && opacity < ACTIVE_OPACITY);

        assert!(!pagination.tick(start + Duration::from_secs(5)));
        let dots = pagination.dots();
        assert_abs_diff_eq!(dots[0].scale(), INACTIVE_SCALE);
        assert_abs_diff_eq!(dots[2].scale(), ACTIVE_SCALE);
        assert_abs_diff_eq!(dots[2].opacity(), ACTIVE_OPACITY);
    }

    #[test]
    fn untouched_dots_stay_still() {
        let start = Instant::now();
        let mut pagination = Pagination::new(4, 0);
        pagination.set_active(1, start);
        assert!(!pagination.dots()[3].scale.is_animating());
    }
}
