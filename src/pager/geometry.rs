// SPDX-License-Identifier: MPL-2.0
//! Viewport geometry tracking.
//!
//! Every offset/index conversion goes through the measured viewport width and
//! is recomputed from scratch, never patched incrementally.

/// Width changes at or below this are treated as layout jitter.
pub const WIDTH_CHANGE_TOLERANCE: f32 = 1.0;

/// Measured size of the pager viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportGeometry {
    width: f32,
    height: f32,
    measured: bool,
}

impl ViewportGeometry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a layout measurement.
    ///
    /// Returns `true` when the stored width changed, which is always the case
    /// for the first measurement. Height is stored unconditionally.
    pub fn update(&mut self, width: f32, height: f32) -> bool {
        let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        self.height = if height.is_finite() { height.max(0.0) } else { 0.0 };

        let changed =
            !self.measured || (width - self.width).abs() > WIDTH_CHANGE_TOLERANCE;
        if changed {
            self.width = width;
            self.measured = true;
        }
        changed
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Whether a usable (non-zero) width has been measured.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.measured && self.width > 0.0
    }

    /// Resting scroll offset for `index`.
    #[must_use]
    pub fn offset_for_index(&self, index: usize) -> f32 {
        index as f32 * self.width
    }

    /// Nearest page for a scroll offset, clamped to `[0, page_count - 1]`.
    #[must_use]
    pub fn index_for_offset(&self, offset: f32, page_count: usize) -> usize {
        if !self.is_measured() || page_count == 0 {
            return 0;
        }
        let last = page_count - 1;
        let raw = (offset / self.width).round();
        if raw <= 0.0 {
            0
        } else {
            (raw as usize).min(last)
        }
    }

    /// Width of a single tab in the tab bar.
    ///
    /// Scrollable bars use a fixed width; otherwise the viewport is shared
    /// equally between tabs.
    #[must_use]
    pub fn tab_width(&self, page_count: usize, scrollable: bool, fixed_width: f32) -> f32 {
        if scrollable {
            fixed_width
        } else if page_count == 0 {
            0.0
        } else {
            self.width / page_count as f32
        }
    }
}
