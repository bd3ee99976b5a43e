// SPDX-License-Identifier: MPL-2.0
//! Headless paged view driven by horizontal gestures.
//!
//! A [`Pager`] holds an ordered set of pages and the active index, turns raw
//! pointer events into page changes or snap-backs, and animates two offset
//! channels:
//!
//! - the **settled** offset, `active_index * width`, which moves when a change
//!   commits;
//! - the **live** offset, which follows the finger during a drag and springs
//!   back to zero afterwards.
//!
//! Both are expressed as scroll positions; the rendered content is translated
//! by `-composite(settled, live)`. The pager performs no I/O and owns no
//! timers: the host feeds it layout sizes, pointer events and clock ticks and
//! receives a [`PageChange`] whenever a change commits.
//!
//! The same component backs the tab view and the image carousel; see
//! [`PagerVariant`].

pub mod animation;
pub mod autoplay;
pub mod config;
pub mod geometry;
pub mod gesture;
pub mod page;
pub mod pagination;

pub use animation::{composite, AnimatedValue, Easing, FadePulse, SpringProfile, TimingProfile};
pub use autoplay::{AutoplayDriver, AUTOPLAY_COOLDOWN};
pub use config::{GestureThresholds, PagerConfig, PagerVariant};
pub use geometry::ViewportGeometry;
pub use gesture::{GestureCommand, GestureContext, GestureEvent, GesturePhase, GestureSession};
pub use page::{Page, PageChange};
pub use pagination::{Dot, Pagination};

use crate::error::{Error, Result};
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Delay before retrying a programmatic change issued before the first layout.
pub const UNMEASURED_RETRY_DELAY: Duration = Duration::from_millis(100);

/// Scale applied to the release velocity when springing the live channel home.
const RELEASE_VELOCITY_SCALE: f32 = 0.5;

/// Duration of the live channel reset on a programmatic change.
const LIVE_RESET_DURATION: Duration = Duration::from_millis(100);

const SWIPE_FADE: (f32, Duration) = (0.7, Duration::from_millis(150));
const PRESS_FADE: (f32, Duration) = (0.8, Duration::from_millis(100));

fn live_release_spring() -> SpringProfile {
    SpringProfile::from_tension(60.0, 12.0)
}

fn indicator_press_spring() -> SpringProfile {
    SpringProfile::from_tension(80.0, 10.0)
}

fn indicator_swipe_spring() -> SpringProfile {
    SpringProfile::from_tension(70.0, 12.0)
}

/// What triggered a committed change.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ChangeSource {
    /// Released drag with its velocity in units/ms.
    Swipe { vx: f32 },
    /// Tab press or dot press.
    Request,
    Autoplay,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct RetryRequest {
    index: usize,
    due: Instant,
}

#[derive(Debug, Clone)]
pub struct Pager<P> {
    pages: Vec<Page<P>>,
    config: PagerConfig,
    active_index: usize,
    geometry: ViewportGeometry,
    phase: GesturePhase,
    settled: AnimatedValue,
    live: AnimatedValue,
    indicator: AnimatedValue,
    fade: FadePulse,
    pagination: Pagination,
    autoplay: AutoplayDriver,
    retry: Option<RetryRequest>,
    disposed: bool,
}

impl<P> Pager<P> {
    /// Creates a pager over `pages`, starting on `initial_key` when it exists.
    ///
    /// Fails when the configuration is invalid, `pages` is empty or two pages
    /// share a key.
    pub fn new(pages: Vec<Page<P>>, initial_key: Option<&str>, config: PagerConfig) -> Result<Self> {
        config.validate()?;
        if pages.is_empty() {
            return Err(Error::Config("a pager needs at least one page".into()));
        }
        let mut seen = HashSet::with_capacity(pages.len());
        if let Some(page) = pages.iter().find(|page| !seen.insert(page.key.as_str())) {
            return Err(Error::Config(format!("duplicate page key '{}'", page.key)));
        }

        let active_index = initial_key
            .and_then(|key| pages.iter().position(|page| page.key == key))
            .unwrap_or(0);
        let autoplay = AutoplayDriver::new(
            config.autoplay() && config.variant() == PagerVariant::Carousel,
            pages.len(),
            config.autoplay_interval(),
        );

        Ok(Self {
            pagination: Pagination::new(pages.len(), active_index),
            pages,
            config,
            active_index,
            geometry: ViewportGeometry::new(),
            phase: GesturePhase::Idle,
            settled: AnimatedValue::new(0.0),
            live: AnimatedValue::new(0.0),
            indicator: AnimatedValue::new(0.0),
            fade: FadePulse::new(),
            autoplay,
            retry: None,
            disposed: false,
        })
    }

    /// Applies a layout measurement of the viewport.
    ///
    /// A width change repositions everything for the current page directly,
    /// without animating, and abandons any drag or transition in flight.
    pub fn on_layout(&mut self, width: f32, height: f32, now: Instant) {
        if !self.geometry.update(width, height) {
            return;
        }
        log::debug!(
            "pager resized to {}x{} on page {}",
            self.geometry.width(),
            self.geometry.height(),
            self.active_index
        );

        self.settled
            .set(self.geometry.offset_for_index(self.active_index));
        self.live.set(0.0);
        self.indicator
            .set(self.active_index as f32 * self.indicator_width());

        if !matches!(self.phase, GesturePhase::Idle) {
            self.phase = GesturePhase::Idle;
            self.autoplay.release();
            self.autoplay.on_settled(now);
        }
    }

    /// Feeds a pointer event to the gesture interpreter.
    pub fn handle_gesture(&mut self, event: GestureEvent) -> Option<PageChange> {
        if self.disposed {
            return None;
        }
        let now = event.at();
        let (phase, command) = {
            let pages = &self.pages;
            let is_disabled = |index: usize| pages.get(index).is_some_and(|page| page.disabled);
            let ctx = GestureContext {
                active_index: self.active_index,
                page_count: pages.len(),
                width: self.geometry.width(),
                thresholds: self.config.thresholds(),
                swipe_enabled: self.config.swipe_enabled(),
                is_disabled: &is_disabled,
            };
            gesture::transition(self.phase, event, &ctx)
        };
        self.phase = phase;

        match command {
            GestureCommand::None => None,
            GestureCommand::PressStarted => {
                self.autoplay.suspend();
                None
            }
            GestureCommand::PressEnded => {
                self.autoplay.release();
                self.autoplay.on_settled(now);
                None
            }
            GestureCommand::Begin { live } => {
                self.autoplay.suspend();
                self.retry = None;
                self.live.set(live);
                None
            }
            GestureCommand::TrackLive { live } => {
                self.live.set(live);
                None
            }
            GestureCommand::Settle { to, vx } => {
                self.autoplay.release();
                Some(self.commit(to, ChangeSource::Swipe { vx }, now))
            }
            GestureCommand::SnapBack { vx } => {
                log::debug!("pager snapping back to page {}", self.active_index);
                self.autoplay.release();
                self.live.spring_with_velocity(
                    0.0,
                    live_release_spring(),
                    release_velocity(vx),
                    now,
                );
                None
            }
            GestureCommand::Finish => {
                self.autoplay.on_settled(now);
                None
            }
        }
    }

    /// Requests a change to `index` (tab press, dot press).
    ///
    /// Only honoured while idle; the current index, a disabled page or an out
    /// of range index is a silent no-op. A carousel that has not been measured
    /// yet retries once after [`UNMEASURED_RETRY_DELAY`].
    pub fn request_index(&mut self, index: usize, now: Instant) -> Option<PageChange> {
        if !self.accepts_request(index) {
            return None;
        }
        if self.config.variant() == PagerVariant::Carousel && !self.geometry.is_measured() {
            log::debug!("pager not measured yet, retrying page {} shortly", index);
            self.retry = Some(RetryRequest {
                index,
                due: now + UNMEASURED_RETRY_DELAY,
            });
            return None;
        }

        self.autoplay.suspend();
        self.autoplay.release();
        Some(self.commit(index, ChangeSource::Request, now))
    }

    /// Like [`Pager::request_index`], addressing the page by key.
    pub fn select_key(&mut self, key: &str, now: Instant) -> Option<PageChange> {
        let index = self.pages.iter().position(|page| page.key == key)?;
        self.request_index(index, now)
    }

    /// Advances all animations and timers to `now`.
    ///
    /// Returns a change when a retried request or an autoplay tick commits.
    pub fn tick(&mut self, now: Instant) -> Option<PageChange> {
        if self.disposed {
            return None;
        }

        self.settled.tick(now);
        self.live.tick(now);
        self.indicator.tick(now);
        self.fade.tick(now);
        self.pagination.tick(now);

        let transitioning = matches!(
            self.phase,
            GesturePhase::Settling { .. } | GesturePhase::SnappingBack
        );
        if transitioning && !self.settled.is_animating() && !self.live.is_animating() {
            self.handle_gesture(GestureEvent::AnimationsSettled { at: now });
        }

        if let Some(retry) = self.retry {
            if now >= retry.due {
                self.retry = None;
                if self.geometry.is_measured() {
                    return self.request_index(retry.index, now);
                }
                log::debug!("pager still unmeasured, dropping request for page {}", retry.index);
            }
        }

        if self.autoplay.poll(now) && self.phase.is_idle() && self.geometry.is_measured() {
            let pages = &self.pages;
            let next = autoplay::next_enabled_index(self.active_index, pages.len(), |index| {
                pages[index].disabled
            });
            if let Some(next) = next {
                return Some(self.commit(next, ChangeSource::Autoplay, now));
            }
        }

        None
    }

    /// Stops all timers and animations. The pager ignores input afterwards.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.autoplay.cancel();
        self.retry = None;
        self.phase = GesturePhase::Idle;
        self.settled.set(self.settled.target());
        self.live.set(0.0);
        self.indicator.set(self.indicator.target());
        self.fade.reset();
    }

    fn accepts_request(&self, index: usize) -> bool {
        !self.disposed
            && self.phase.is_idle()
            && index != self.active_index
            && self.pages.get(index).is_some_and(|page| !page.disabled)
    }

    fn commit(&mut self, to: usize, source: ChangeSource, now: Instant) -> PageChange {
        let from = self.active_index;
        self.active_index = to;

        let content = TimingProfile::ease_in_out(self.config.animation_duration());
        self.settled
            .time_to(self.geometry.offset_for_index(to), content, now);

        let indicator_target = to as f32 * self.indicator_width();
        let is_carousel = self.config.variant() == PagerVariant::Carousel;
        match source {
            ChangeSource::Swipe { vx } => {
                self.live.spring_with_velocity(
                    0.0,
                    live_release_spring(),
                    release_velocity(vx),
                    now,
                );
                self.indicator
                    .spring_to(indicator_target, indicator_swipe_spring(), now);
                if is_carousel {
                    self.fade.pulse(SWIPE_FADE.0, SWIPE_FADE.1, now);
                }
            }
            ChangeSource::Request | ChangeSource::Autoplay => {
                self.live
                    .time_to(0.0, TimingProfile::ease_in_out(LIVE_RESET_DURATION), now);
                self.indicator
                    .spring_to(indicator_target, indicator_press_spring(), now);
                if is_carousel {
                    self.fade.pulse(PRESS_FADE.0, PRESS_FADE.1, now);
                }
            }
        }
        self.pagination.set_active(to, now);
        self.phase = GesturePhase::Settling { from, to };

        let key = self.pages[to].key.clone();
        log::debug!("pager moved {} -> {} ({}) via {:?}", from, to, key, source);
        PageChange { key, index: to }
    }

    #[must_use]
    pub fn pages(&self) -> &[Page<P>] {
        &self.pages
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    #[must_use]
    pub fn active_page(&self) -> &Page<P> {
        &self.pages[self.active_index]
    }

    #[must_use]
    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    #[must_use]
    pub fn geometry(&self) -> &ViewportGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    #[must_use]
    pub fn settled_offset(&self) -> f32 {
        self.settled.value()
    }

    #[must_use]
    pub fn live_offset(&self) -> f32 {
        self.live.value()
    }

    /// Scroll position to render; content is translated by its negation.
    #[must_use]
    pub fn composited_offset(&self) -> f32 {
        composite(self.settled.value(), self.live.value())
    }

    #[must_use]
    pub fn indicator_offset(&self) -> f32 {
        self.indicator.value()
    }

    #[must_use]
    pub fn indicator_width(&self) -> f32 {
        self.geometry.tab_width(
            self.pages.len(),
            self.config.scrollable(),
            self.config.tab_width(),
        )
    }

    #[must_use]
    pub fn content_opacity(&self) -> f32 {
        self.fade.opacity()
    }

    /// Dot states, or `None` when pagination is hidden.
    #[must_use]
    pub fn dots(&self) -> Option<&[Dot]> {
        (self.config.show_pagination() && self.pages.len() > 1).then(|| self.pagination.dots())
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase.is_dragging()
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Whether something is moving and the host should tick at frame rate.
    #[must_use]
    pub fn needs_frames(&self) -> bool {
        !self.disposed
            && (self.settled.is_animating()
                || self.live.is_animating()
                || self.indicator.is_animating()
                || self.fade.is_animating()
                || self.pagination.is_animating()
                || matches!(
                    self.phase,
                    GesturePhase::Settling { .. } | GesturePhase::SnappingBack
                ))
    }

    /// Whether a timer (autoplay or retry) needs periodic ticks.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        !self.disposed && (self.autoplay.is_enabled() || self.retry.is_some())
    }
}

/// Live channel velocity (units/s, scroll frame) for a release velocity in
/// finger units/ms.
fn release_velocity(vx: f32) -> f32 {
    -vx * 1000.0 * RELEASE_VELOCITY_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, OFFSET_EPSILON};

    const WIDTH: f32 = 360.0;

    fn pages(count: usize) -> Vec<Page<()>> {
        (0..count).map(|index| Page::new(format!("page-{index}"), ())).collect()
    }

    fn measured(count: usize, config: PagerConfig, now: Instant) -> Pager<()> {
        let mut pager = Pager::new(pages(count), None, config).unwrap();
        pager.on_layout(WIDTH, 200.0, now);
        pager
    }

    fn settle(pager: &mut Pager<()>, now: Instant) -> Instant {
        let later = now + Duration::from_secs(5);
        pager.tick(later);
        later
    }

    #[test]
    fn construction_rejects_empty_and_duplicate_pages() {
        assert!(Pager::<()>::new(Vec::new(), None, PagerConfig::tabs()).is_err());
        let duplicated = vec![Page::new("a", ()), Page::new("a", ())];
        assert!(Pager::new(duplicated, None, PagerConfig::tabs()).is_err());
    }

    #[test]
    fn unknown_initial_key_falls_back_to_first_page() {
        let pager = Pager::new(pages(3), Some("missing"), PagerConfig::tabs()).unwrap();
        assert_eq!(pager.active_index(), 0);
        let pager = Pager::new(pages(3), Some("page-2"), PagerConfig::tabs()).unwrap();
        assert_eq!(pager.active_index(), 2);
    }

    #[test]
    fn first_layout_positions_initial_page_without_animation() {
        let now = Instant::now();
        let mut pager = Pager::new(pages(3), Some("page-1"), PagerConfig::tabs()).unwrap();
        pager.on_layout(WIDTH, 200.0, now);
        assert_eq!(pager.settled_offset(), WIDTH);
        assert_abs_diff_eq!(pager.indicator_offset(), WIDTH / 3.0, epsilon = OFFSET_EPSILON);
        assert!(!pager.needs_frames());
    }

    #[test]
    fn request_commits_once_and_animates() {
        let now = Instant::now();
        let mut pager = measured(3, PagerConfig::tabs(), now);

        let change = pager.request_index(2, now);
        assert_eq!(
            change,
            Some(PageChange {
                key: "page-2".into(),
                index: 2
            })
        );
        assert!(pager.needs_frames());
        assert!(pager.request_index(1, now).is_none(), "busy while settling");

        settle(&mut pager, now);
        assert_eq!(pager.phase(), GesturePhase::Idle);
        assert_eq!(pager.settled_offset(), 2.0 * WIDTH);
    }

    #[test]
    fn request_for_current_or_disabled_page_is_ignored() {
        let now = Instant::now();
        let pages = vec![
            Page::new("a", ()),
            Page::new("b", ()).disabled(true),
        ];
        let mut pager = Pager::new(pages, None, PagerConfig::tabs()).unwrap();
        pager.on_layout(WIDTH, 100.0, now);

        assert!(pager.request_index(0, now).is_none());
        assert!(pager.select_key("b", now).is_none());
        assert!(pager.request_index(7, now).is_none());
        assert!(!pager.needs_frames());
    }

    #[test]
    fn unmeasured_carousel_retries_once() {
        let now = Instant::now();
        let mut pager = Pager::new(pages(3), None, PagerConfig::carousel()).unwrap();

        assert!(pager.request_index(1, now).is_none());
        assert!(pager.has_pending_timers());

        pager.on_layout(WIDTH, 200.0, now + Duration::from_millis(40));
        let change = pager.tick(now + UNMEASURED_RETRY_DELAY);
        assert_eq!(change.map(|change| change.index), Some(1));
    }

    #[test]
    fn unmeasured_retry_is_dropped_when_still_unmeasured() {
        let now = Instant::now();
        let mut pager = Pager::new(pages(3), None, PagerConfig::carousel()).unwrap();
        pager.request_index(1, now);
        assert!(pager.tick(now + UNMEASURED_RETRY_DELAY).is_none());
        assert!(!pager.has_pending_timers());
        assert_eq!(pager.active_index(), 0);
    }

    #[test]
    fn drag_tracks_live_channel_and_snaps_back() {
        let start = Instant::now();
        let mut pager = measured(3, PagerConfig::tabs(), start);

        pager.handle_gesture(GestureEvent::Press { x: 100.0, y: 50.0, at: start });
        pager.handle_gesture(GestureEvent::Move {
            x: 60.0,
            y: 52.0,
            at: start + Duration::from_millis(400),
        });
        assert!(pager.is_dragging());
        assert_eq!(pager.live_offset(), 40.0);
        assert_eq!(pager.composited_offset(), 40.0);

        let change = pager.handle_gesture(GestureEvent::Release {
            x: 60.0,
            y: 52.0,
            at: start + Duration::from_millis(800),
        });
        assert!(change.is_none());
        assert_eq!(pager.phase(), GesturePhase::SnappingBack);

        settle(&mut pager, start);
        assert_eq!(pager.phase(), GesturePhase::Idle);
        assert_eq!(pager.live_offset(), 0.0);
        assert_eq!(pager.active_index(), 0);
    }

    #[test]
    fn dragging_past_first_page_is_damped() {
        let start = Instant::now();
        let mut pager = measured(3, PagerConfig::tabs(), start);
        pager.handle_gesture(GestureEvent::Press { x: 0.0, y: 0.0, at: start });
        pager.handle_gesture(GestureEvent::Move {
            x: 100.0,
            y: 0.0,
            at: start + Duration::from_millis(50),
        });
        assert_abs_diff_eq!(pager.live_offset(), -15.0, epsilon = 1e-4);
    }

    #[test]
    fn layout_change_during_drag_aborts_it() {
        let start = Instant::now();
        let mut pager = measured(3, PagerConfig::tabs(), start);
        pager.handle_gesture(GestureEvent::Press { x: 200.0, y: 0.0, at: start });
        pager.handle_gesture(GestureEvent::Move {
            x: 100.0,
            y: 0.0,
            at: start + Duration::from_millis(50),
        });

        pager.on_layout(500.0, 200.0, start + Duration::from_millis(60));
        assert_eq!(pager.phase(), GesturePhase::Idle);
        assert_eq!(pager.live_offset(), 0.0);
        assert_eq!(pager.settled_offset(), 0.0);
    }

    #[test]
    fn swipe_on_carousel_pulses_opacity() {
        let start = Instant::now();
        let mut pager = measured(3, PagerConfig::carousel(), start);
        pager.handle_gesture(GestureEvent::Press { x: 300.0, y: 0.0, at: start });
        pager.handle_gesture(GestureEvent::Move {
            x: 150.0,
            y: 0.0,
            at: start + Duration::from_millis(300),
        });
        let change = pager.handle_gesture(GestureEvent::Release {
            x: 150.0,
            y: 0.0,
            at: start + Duration::from_millis(300),
        });
        assert_eq!(change.map(|change| change.index), Some(1));

        pager.tick(start + Duration::from_millis(450));
        assert!(pager.content_opacity() < 1.0);
        settle(&mut pager, start);
        assert_abs_diff_eq!(pager.content_opacity(), 1.0);
    }

    #[test]
    fn dots_hidden_for_tabs_and_single_page() {
        let now = Instant::now();
        assert!(measured(3, PagerConfig::tabs(), now).dots().is_none());
        assert!(measured(1, PagerConfig::carousel(), now).dots().is_none());
        assert_eq!(
            measured(3, PagerConfig::carousel(), now).dots().map(<[Dot]>::len),
            Some(3)
        );
    }

    #[test]
    fn dispose_stops_everything() {
        let now = Instant::now();
        let config = PagerConfig::carousel().with_autoplay(true, Duration::from_millis(3000));
        let mut pager = measured(4, config, now);
        pager.tick(now);
        pager.request_index(2, now);

        pager.dispose();
        assert!(!pager.needs_frames());
        assert!(!pager.has_pending_timers());
        assert!(pager.tick(now + Duration::from_secs(60)).is_none());
        assert!(pager
            .handle_gesture(GestureEvent::Press { x: 0.0, y: 0.0, at: now })
            .is_none());
    }

    #[test]
    fn autoplay_skips_disabled_pages() {
        let now = Instant::now();
        let pages = vec![
            Page::new("a", ()),
            Page::new("b", ()).disabled(true),
            Page::new("c", ()),
        ];
        let config = PagerConfig::carousel().with_autoplay(true, Duration::from_millis(1000));
        let mut pager = Pager::new(pages, None, config).unwrap();
        pager.on_layout(WIDTH, 100.0, now);
        pager.tick(now);

        let change = pager.tick(now + Duration::from_millis(1000));
        assert_eq!(change.map(|change| change.key), Some("c".to_string()));
    }
}
