// SPDX-License-Identifier: MPL-2.0
//! Horizontal drag interpretation.
//!
//! The interpreter is a pure function over a [`GesturePhase`]: it receives a
//! pointer or animation event together with a read-only [`GestureContext`]
//! and returns the next phase plus a [`GestureCommand`] for the pager to carry
//! out. It never touches animation channels itself.
//!
//! ```text
//! Idle ──activate──▶ Dragging ──release──▶ Settling ─────┐
//!  ▲                    │                               │
//!  │                    └──below threshold──▶ SnappingBack
//!  └──────────────── animations settled ◀───────────────┘
//! ```

use super::config::GestureThresholds;
use std::time::{Duration, Instant};

/// A move older than this at release time contributes no velocity.
pub const VELOCITY_STALE_AFTER: Duration = Duration::from_millis(100);

/// Weight of the newest sample in the smoothed velocity.
const VELOCITY_SMOOTHING: f32 = 0.7;

/// Pointer contact that has not (yet) become a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Press {
    pub x: f32,
    pub y: f32,
    pub at: Instant,
}

/// An activated drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    pub start_x: f32,
    pub start_y: f32,
    pub dx: f32,
    pub dy: f32,
    /// Smoothed horizontal velocity in units per millisecond.
    pub vx: f32,
    last_x: f32,
    last_at: Instant,
}

impl GestureSession {
    fn open(press: Press, x: f32, y: f32, at: Instant) -> Self {
        let mut session = Self {
            start_x: press.x,
            start_y: press.y,
            dx: 0.0,
            dy: 0.0,
            vx: 0.0,
            last_x: press.x,
            last_at: press.at,
        };
        session.track(x, y, at);
        session
    }

    fn track(&mut self, x: f32, y: f32, at: Instant) {
        let elapsed_ms = at.saturating_duration_since(self.last_at).as_secs_f32() * 1000.0;
        if elapsed_ms > 0.0 {
            let sample = (x - self.last_x) / elapsed_ms;
            self.vx = VELOCITY_SMOOTHING * sample + (1.0 - VELOCITY_SMOOTHING) * self.vx;
            self.last_x = x;
            self.last_at = at;
        }
        self.dx = x - self.start_x;
        self.dy = y - self.start_y;
    }

    /// Velocity to use for a release at `at`.
    fn release_velocity(&self, at: Instant) -> f32 {
        if at.saturating_duration_since(self.last_at) > VELOCITY_STALE_AFTER {
            0.0
        } else {
            self.vx
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    /// Pointer is down but has not travelled far enough to count as a drag.
    Pressed(Press),
    Dragging(GestureSession),
    /// A committed change is animating to `to`.
    Settling { from: usize, to: usize },
    /// Returning to the pre-gesture page.
    SnappingBack,
}

impl GesturePhase {
    /// Whether programmatic changes may run.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, GesturePhase::Idle | GesturePhase::Pressed(_))
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, GesturePhase::Dragging(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Press { x: f32, y: f32, at: Instant },
    Move { x: f32, y: f32, at: Instant },
    Release { x: f32, y: f32, at: Instant },
    /// Pointer lost (left the window, touch cancelled, layout changed).
    Cancel { at: Instant },
    /// Both offset channels reached their targets.
    AnimationsSettled { at: Instant },
}

impl GestureEvent {
    #[must_use]
    pub fn at(&self) -> Instant {
        match *self {
            GestureEvent::Press { at, .. }
            | GestureEvent::Move { at, .. }
            | GestureEvent::Release { at, .. }
            | GestureEvent::Cancel { at }
            | GestureEvent::AnimationsSettled { at } => at,
        }
    }
}

/// What the pager must do after a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureCommand {
    None,
    /// Pointer went down without activating anything yet.
    PressStarted,
    /// Pointer lifted before a drag activated.
    PressEnded,
    /// A drag activated; jump the live channel to `live`.
    Begin { live: f32 },
    TrackLive { live: f32 },
    /// Commit to page `to`; `vx` is the release velocity in units/ms.
    Settle { to: usize, vx: f32 },
    SnapBack { vx: f32 },
    /// Back to idle after an animation completed.
    Finish,
}

/// Read-only facts the transition function needs.
pub struct GestureContext<'a> {
    pub active_index: usize,
    pub page_count: usize,
    pub width: f32,
    pub thresholds: GestureThresholds,
    pub swipe_enabled: bool,
    pub is_disabled: &'a dyn Fn(usize) -> bool,
}

/// Scales `dx` by the edge resistance when dragging past either end.
#[must_use]
pub fn damp_delta(dx: f32, active_index: usize, page_count: usize, resistance: f32) -> f32 {
    let last = page_count.saturating_sub(1);
    let past_first = dx > 0.0 && active_index == 0;
    let past_last = dx < 0.0 && active_index >= last;
    if past_first || past_last {
        dx * resistance
    } else {
        dx
    }
}

/// Page a release lands on, clamped to the valid range.
///
/// A positive delta or velocity moves to the previous page, a negative one to
/// the next.
#[must_use]
pub fn decide_destination(
    dx: f32,
    vx: f32,
    active_index: usize,
    page_count: usize,
    width: f32,
    thresholds: &GestureThresholds,
) -> usize {
    let last = page_count.saturating_sub(1);
    let distance = thresholds.commit_fraction * width;
    let velocity = thresholds.velocity_threshold;

    let destination = if dx > distance || vx > velocity {
        active_index.saturating_sub(1)
    } else if dx < -distance || vx < -velocity {
        active_index + 1
    } else {
        active_index
    };
    destination.min(last)
}

/// Live offset in the scroll frame for a raw horizontal delta.
fn live_for(dx: f32, ctx: &GestureContext<'_>) -> f32 {
    -damp_delta(
        dx,
        ctx.active_index,
        ctx.page_count,
        ctx.thresholds.edge_resistance,
    )
}

/// Advances the interpreter by one event.
#[must_use]
pub fn transition(
    phase: GesturePhase,
    event: GestureEvent,
    ctx: &GestureContext<'_>,
) -> (GesturePhase, GestureCommand) {
    match (phase, event) {
        (GesturePhase::Idle, GestureEvent::Press { x, y, at }) => (
            GesturePhase::Pressed(Press { x, y, at }),
            GestureCommand::PressStarted,
        ),

        (GesturePhase::Pressed(press), GestureEvent::Move { x, y, at }) => {
            let dx = x - press.x;
            let dy = y - press.y;
            let activates = ctx.swipe_enabled
                && ctx.width > 0.0
                && dx.abs() > ctx.thresholds.activation_distance
                && dx.abs() > dy.abs();
            if !activates {
                return (phase, GestureCommand::None);
            }
            let session = GestureSession::open(press, x, y, at);
            (
                GesturePhase::Dragging(session),
                GestureCommand::Begin {
                    live: live_for(session.dx, ctx),
                },
            )
        }

        (
            GesturePhase::Pressed(_),
            GestureEvent::Release { .. } | GestureEvent::Cancel { .. },
        ) => (GesturePhase::Idle, GestureCommand::PressEnded),

        (GesturePhase::Dragging(mut session), GestureEvent::Move { x, y, at }) => {
            session.track(x, y, at);
            (
                GesturePhase::Dragging(session),
                GestureCommand::TrackLive {
                    live: live_for(session.dx, ctx),
                },
            )
        }

        (GesturePhase::Dragging(mut session), GestureEvent::Release { x, y, at }) => {
            let vx = session.release_velocity(at);
            session.track(x, y, at);
            let to = decide_destination(
                session.dx,
                vx,
                ctx.active_index,
                ctx.page_count,
                ctx.width,
                &ctx.thresholds,
            );
            if to == ctx.active_index || (ctx.is_disabled)(to) {
                (GesturePhase::SnappingBack, GestureCommand::SnapBack { vx })
            } else {
                (
                    GesturePhase::Settling {
                        from: ctx.active_index,
                        to,
                    },
                    GestureCommand::Settle { to, vx },
                )
            }
        }

        (GesturePhase::Dragging(_), GestureEvent::Cancel { .. }) => {
            (GesturePhase::SnappingBack, GestureCommand::SnapBack { vx: 0.0 })
        }

        (
            GesturePhase::Settling { .. } | GesturePhase::SnappingBack,
            GestureEvent::AnimationsSettled { .. },
        ) => (GesturePhase::Idle, GestureCommand::Finish),

        (phase, _) => (phase, GestureCommand::None),
    }
}
