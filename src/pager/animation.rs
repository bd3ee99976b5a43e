// SPDX-License-Identifier: MPL-2.0
//! Animated scalar channels.
//!
//! An [`AnimatedValue`] is a single number that either rests or moves toward a
//! target along a spring or a fixed-duration timing curve. Starting a new
//! motion always interrupts the current one: the new motion departs from the
//! value and velocity sampled at the moment it starts, so channels never
//! queue and never jump.
//!
//! All sampling is driven by explicit `Instant`s handed in by the caller, which
//! keeps the curves deterministic under test and independent of frame rate.

use std::time::{Duration, Instant};

/// Displacement below which a spring is considered at rest.
const SPRING_REST_DISPLACEMENT: f32 = 0.01;

/// Speed (units/s) below which a spring is considered at rest.
const SPRING_REST_SPEED: f32 = 0.01;

/// Springs are force-settled after this long to bound pathological profiles.
const SPRING_MAX_DURATION: Duration = Duration::from_secs(10);

/// Damped spring parameters.
///
/// Profiles are usually written in "origami" tension/friction terms, the
/// convention most mobile toolkits tune against; [`SpringProfile::from_tension`]
/// converts them to physical stiffness and damping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringProfile {
    stiffness: f32,
    damping: f32,
    mass: f32,
}

impl SpringProfile {
    /// Creates a profile from physical stiffness and damping (mass 1).
    #[must_use]
    pub const fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    /// Creates a profile from origami tension and friction values.
    #[must_use]
    pub fn from_tension(tension: f32, friction: f32) -> Self {
        Self::new(
            (tension - 30.0) * 3.62 + 194.0,
            (friction - 8.0) * 3.0 + 25.0,
        )
    }

    #[must_use]
    pub fn stiffness(self) -> f32 {
        self.stiffness
    }

    #[must_use]
    pub fn damping(self) -> f32 {
        self.damping
    }

    /// Samples position and velocity `t` seconds after release.
    ///
    /// `displacement` is `target - start`, `velocity` the initial velocity in
    /// units per second. Returns `(position_relative_to_target, velocity)`,
    /// where a relative position of zero means the target is reached.
    fn sample(self, displacement: f32, velocity: f32, t: f32) -> (f32, f32) {
        let omega0 = (self.stiffness / self.mass).sqrt();
        let zeta = self.damping / (2.0 * (self.stiffness * self.mass).sqrt());
        let x0 = displacement;
        let v0 = -velocity;

        if zeta < 1.0 {
            let omega1 = omega0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega0 * t).exp();
            let a = (v0 + zeta * omega0 * x0) / omega1;
            let (sin, cos) = (omega1 * t).sin_cos();
            let offset = envelope * (a * sin + x0 * cos);
            let speed = zeta * omega0 * offset
                - envelope * (cos * (v0 + zeta * omega0 * x0) - omega1 * x0 * sin);
            (-offset, speed)
        } else {
            let envelope = (-omega0 * t).exp();
            let offset = envelope * (x0 + (v0 + omega0 * x0) * t);
            let speed = envelope * (v0 * (t * omega0 - 1.0) + t * x0 * omega0 * omega0);
            (-offset, speed)
        }
    }
}

impl Default for SpringProfile {
    fn default() -> Self {
        Self::from_tension(40.0, 7.0)
    }
}

/// Easing curves for timing animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    EaseInOut,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` to eased progress.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }

    /// Derivative of [`Easing::apply`] with respect to linear progress.
    fn slope(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => 1.0,
            Easing::EaseInOut => {
                if t < 0.5 {
                    12.0 * t * t
                } else {
                    3.0 * (-2.0 * t + 2.0).powi(2)
                }
            }
        }
    }
}

/// Fixed-duration animation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingProfile {
    pub duration: Duration,
    pub easing: Easing,
}

impl TimingProfile {
    #[must_use]
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    #[must_use]
    pub const fn ease_in_out(duration: Duration) -> Self {
        Self::new(duration, Easing::EaseInOut)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Curve {
    Spring {
        profile: SpringProfile,
        initial_velocity: f32,
    },
    Timing(TimingProfile),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Motion {
    from: f32,
    to: f32,
    started_at: Instant,
    curve: Curve,
}

/// A scalar that can rest or animate toward a target.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedValue {
    value: f32,
    /// Units per second, as of the last sample.
    velocity: f32,
    motion: Option<Motion>,
}

impl AnimatedValue {
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            motion: None,
        }
    }

    /// Current sampled value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Current sampled velocity in units per second.
    #[must_use]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// The value this channel is heading toward (its own value at rest).
    #[must_use]
    pub fn target(&self) -> f32 {
        self.motion.map_or(self.value, |motion| motion.to)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    /// Jumps to `value`, cancelling any motion in flight.
    pub fn set(&mut self, value: f32) {
        self.value = value;
        self.velocity = 0.0;
        self.motion = None;
    }

    /// Springs toward `target`, carrying over the current velocity.
    pub fn spring_to(&mut self, target: f32, profile: SpringProfile, now: Instant) {
        self.sync(now);
        let velocity = self.velocity;
        self.start(target, Curve::Spring {
            profile,
            initial_velocity: velocity,
        }, now);
    }

    /// Springs toward `target` with an explicit initial velocity (units/s).
    pub fn spring_with_velocity(
        &mut self,
        target: f32,
        profile: SpringProfile,
        velocity: f32,
        now: Instant,
    ) {
        self.sync(now);
        self.velocity = velocity;
        self.start(target, Curve::Spring {
            profile,
            initial_velocity: velocity,
        }, now);
    }

    /// Moves toward `target` along a fixed-duration curve.
    pub fn time_to(&mut self, target: f32, profile: TimingProfile, now: Instant) {
        self.sync(now);
        self.start(target, Curve::Timing(profile), now);
    }

    /// Like [`AnimatedValue::time_to`] but anchored at `start`, which may lie
    /// before the next sample. Used to chain segments without drift.
    pub fn time_to_from(&mut self, target: f32, profile: TimingProfile, start: Instant) {
        self.start(target, Curve::Timing(profile), start);
    }

    /// Advances the channel to `now`. Returns whether it is still moving.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.sync(now);
        self.is_animating()
    }

    fn start(&mut self, target: f32, curve: Curve, now: Instant) {
        let at_rest = (self.value - target).abs() <= f32::EPSILON && self.velocity == 0.0;
        let zero_duration = matches!(curve, Curve::Timing(profile) if profile.duration.is_zero());
        if at_rest || zero_duration {
            self.set(target);
            return;
        }
        self.motion = Some(Motion {
            from: self.value,
            to: target,
            started_at: now,
            curve,
        });
    }

    fn sync(&mut self, now: Instant) {
        let Some(motion) = self.motion else {
            return;
        };
        let elapsed = now.saturating_duration_since(motion.started_at);

        match motion.curve {
            Curve::Timing(profile) => {
                if elapsed >= profile.duration {
                    self.set(motion.to);
                    return;
                }
                let progress = elapsed.as_secs_f32() / profile.duration.as_secs_f32();
                let span = motion.to - motion.from;
                self.value = motion.from + span * profile.easing.apply(progress);
                self.velocity =
                    span * profile.easing.slope(progress) / profile.duration.as_secs_f32();
            }
            Curve::Spring {
                profile,
                initial_velocity,
            } => {
                let (relative, velocity) = profile.sample(
                    motion.to - motion.from,
                    initial_velocity,
                    elapsed.as_secs_f32(),
                );
                let settled = relative.abs() <= SPRING_REST_DISPLACEMENT
                    && velocity.abs() <= SPRING_REST_SPEED;
                if settled || elapsed >= SPRING_MAX_DURATION {
                    self.set(motion.to);
                    return;
                }
                self.value = motion.to + relative;
                self.velocity = velocity;
            }
        }
    }
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// A cosmetic dim-and-restore pulse on an opacity channel.
///
/// The pulse never gates anything else: it only reports its own progress.
#[derive(Debug, Clone, PartialEq)]
pub struct FadePulse {
    opacity: AnimatedValue,
    restore: Option<(Instant, TimingProfile)>,
}

impl FadePulse {
    #[must_use]
    pub fn new() -> Self {
        Self {
            opacity: AnimatedValue::new(1.0),
            restore: None,
        }
    }

    /// Dims to `low` over `half`, then restores to fully opaque over `half`.
    pub fn pulse(&mut self, low: f32, half: Duration, now: Instant) {
        let profile = TimingProfile::ease_in_out(half);
        self.opacity.time_to(low, profile, now);
        self.restore = Some((now + half, profile));
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        self.opacity.tick(now);
        if let Some((restore_at, profile)) = self.restore {
            if now >= restore_at {
                self.restore = None;
                self.opacity.time_to_from(1.0, profile, restore_at);
                self.opacity.tick(now);
            }
        }
        self.is_animating()
    }

    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity.value()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.opacity.is_animating() || self.restore.is_some()
    }

    /// Drops any pulse in flight and returns to fully opaque.
    pub fn reset(&mut self) {
        self.opacity.set(1.0);
        self.restore = None;
    }
}

impl Default for FadePulse {
    fn default() -> Self {
        Self::new()
    }
}

/// Composites the settled and live channels into the rendered scroll offset.
#[must_use]
pub fn composite(settled: f32, live: f32) -> f32 {
    settled + live
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, OFFSET_EPSILON};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn composite_is_a_plain_sum() {
        assert_abs_diff_eq!(composite(750.0, -42.5), 707.5);
        assert_abs_diff_eq!(composite(0.0, 0.0), 0.0);
    }

    #[test]
    fn origami_conversion_matches_reference_values() {
        let profile = SpringProfile::from_tension(40.0, 7.0);
        assert_abs_diff_eq!(profile.stiffness(), 230.2, epsilon = 1e-3);
        assert_abs_diff_eq!(profile.damping(), 22.0, epsilon = 1e-3);
    }

    #[test]
    fn set_cancels_motion() {
        let start = Instant::now();
        let mut value = AnimatedValue::new(0.0);
        value.time_to(100.0, TimingProfile::ease_in_out(ms(250)), start);
        assert!(value.is_animating());

        value.set(10.0);
        assert!(!value.is_animating());
        assert_abs_diff_eq!(value.value(), 10.0);
    }

    #[test]
    fn timing_reaches_target_exactly_at_duration() {
        let start = Instant::now();
        let mut value = AnimatedValue::new(0.0);
        value.time_to(360.0, TimingProfile::ease_in_out(ms(250)), start);

        assert!(value.tick(start + ms(125)));
        assert_abs_diff_eq!(value.value(), 180.0, epsilon = OFFSET_EPSILON);

        assert!(!value.tick(start + ms(250)));
        assert_eq!(value.value(), 360.0);
    }

    #[test]
    fn animating_to_current_value_is_a_no_op() {
        let start = Instant::now();
        let mut value = AnimatedValue::new(5.0);
        value.time_to(5.0, TimingProfile::ease_in_out(ms(250)), start);
        value.spring_to(5.0, SpringProfile::default(), start);
        assert!(!value.is_animating());
    }

    #[test]
    fn spring_settles_on_target() {
        let start = Instant::now();
        let mut value = AnimatedValue::new(0.0);
        value.spring_to(100.0, SpringProfile::from_tension(70.0, 12.0), start);

        assert!(value.tick(start + ms(50)));
        assert!(value.value() > 0.0 && value.value() < 100.0);

        assert!(!value.tick(start + Duration::from_secs(5)));
        assert_eq!(value.value(), 100.0);
    }

    #[test]
    fn underdamped_spring_overshoots() {
        let start = Instant::now();
        let mut value = AnimatedValue::new(0.8);
        value.spring_to(1.2, SpringProfile::from_tension(300.0, 8.0), start);

        let peak = (1..200)
            .map(|step| {
                value.tick(start + ms(step * 5));
                value.value()
            })
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.2);
    }

    #[test]
    fn spring_seeded_with_velocity_moves_with_it_first() {
        let start = Instant::now();
        let mut value = AnimatedValue::new(0.0);
        value.spring_with_velocity(0.0, SpringProfile::from_tension(60.0, 12.0), 500.0, start);
        assert!(value.is_animating());

        value.tick(start + ms(16));
        assert!(value.value() > 0.0);
    }

    #[test]
    fn interrupting_motion_starts_from_sampled_value() {
        let start = Instant::now();
        let mut value = AnimatedValue::new(0.0);
        value.time_to(100.0, TimingProfile::new(ms(100), Easing::Linear), start);
        value.tick(start + ms(50));
        let midway = value.value();

        value.time_to(0.0, TimingProfile::new(ms(100), Easing::Linear), start + ms(50));
        assert_abs_diff_eq!(value.value(), midway, epsilon = 1e-3);
        assert_abs_diff_eq!(value.target(), 0.0);

        value.tick(start + ms(100));
        assert_abs_diff_eq!(value.value(), midway / 2.0, epsilon = 1e-2);
    }

    #[test]
    fn fade_pulse_dims_then_restores() {
        let start = Instant::now();
        let mut fade = FadePulse::new();
        fade.pulse(0.7, ms(150), start);

        fade.tick(start + ms(150));
        assert_abs_diff_eq!(fade.opacity(), 0.7, epsilon = 1e-4);
        assert!(fade.is_animating());

        assert!(!fade.tick(start + ms(300)));
        assert_abs_diff_eq!(fade.opacity(), 1.0);
    }

    #[test]
    fn fade_pulse_restores_even_when_ticked_late() {
        let start = Instant::now();
        let mut fade = FadePulse::new();
        fade.pulse(0.8, ms(100), start);

        assert!(!fade.tick(start + Duration::from_secs(2)));
        assert_abs_diff_eq!(fade.opacity(), 1.0);
    }
}
