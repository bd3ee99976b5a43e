// SPDX-License-Identifier: MPL-2.0
//! A horizontal strip of pages that reports pointer gestures and its size.
//!
//! Every page is laid out at the full size of the area, side by side, and the
//! strip is shifted left by the scroll offset the host passes in. The widget
//! does not decide anything itself: it turns mouse and touch input into
//! [`GestureEvent`]s, reports its bounds whenever they change and clips the
//! pages to its own rectangle.
//!
//! Events reach the pages as usual so buttons and text inputs keep working.
//! Only while the host says a drag is active does the area swallow pointer
//! moves and the release, which keeps vertical scrolling in the pages usable.

use crate::pager::GestureEvent;
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{touch, Element, Event, Length, Point, Rectangle, Size};
use std::time::Instant;

/// Which pointer the area is following.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Tracking {
    #[default]
    None,
    Mouse,
    Finger(touch::Finger),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Pointer {
    Down(Point),
    Moved(Point),
    Up(Point),
    Lost,
}

#[derive(Debug, Default)]
struct State {
    tracking: Tracking,
    last_position: Point,
    measured: Option<Size>,
}

/// Maps a raw event to a pointer transition for the tracked pointer.
///
/// Presses only count inside the area (`over` is the cursor position when it
/// is over the bounds). A second finger is ignored while one is tracked.
fn classify(
    event: &Event,
    tracking: Tracking,
    over: Option<Point>,
    last: Point,
) -> Option<(Tracking, Pointer)> {
    match (event, tracking) {
        (Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)), Tracking::None) => {
            over.map(|position| (Tracking::Mouse, Pointer::Down(position)))
        }
        (Event::Mouse(mouse::Event::CursorMoved { position }), Tracking::Mouse) => {
            Some((Tracking::Mouse, Pointer::Moved(*position)))
        }
        (Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)), Tracking::Mouse) => {
            Some((Tracking::None, Pointer::Up(last)))
        }
        (Event::Mouse(mouse::Event::CursorLeft), Tracking::Mouse) => {
            Some((Tracking::None, Pointer::Lost))
        }
        (Event::Touch(touch::Event::FingerPressed { id, position }), Tracking::None) => {
            over.map(|_| (Tracking::Finger(*id), Pointer::Down(*position)))
        }
        (Event::Touch(touch::Event::FingerMoved { id, position }), Tracking::Finger(tracked))
            if *id == tracked =>
        {
            Some((tracking, Pointer::Moved(*position)))
        }
        (Event::Touch(touch::Event::FingerLifted { id, position }), Tracking::Finger(tracked))
            if *id == tracked =>
        {
            Some((Tracking::None, Pointer::Up(*position)))
        }
        (Event::Touch(touch::Event::FingerLost { id, .. }), Tracking::Finger(tracked))
            if *id == tracked =>
        {
            Some((Tracking::None, Pointer::Lost))
        }
        _ => None,
    }
}

fn to_gesture(pointer: Pointer, at: Instant) -> GestureEvent {
    match pointer {
        Pointer::Down(p) => GestureEvent::Press { x: p.x, y: p.y, at },
        Pointer::Moved(p) => GestureEvent::Move { x: p.x, y: p.y, at },
        Pointer::Up(p) => GestureEvent::Release { x: p.x, y: p.y, at },
        Pointer::Lost => GestureEvent::Cancel { at },
    }
}

pub struct GestureArea<'a, Message, Theme = iced::Theme, Renderer = iced::Renderer> {
    pages: Vec<Element<'a, Message, Theme, Renderer>>,
    offset: f32,
    capturing: bool,
    width: Length,
    height: Length,
    on_gesture: Box<dyn Fn(GestureEvent) -> Message + 'a>,
    on_resize: Box<dyn Fn(Size) -> Message + 'a>,
}

impl<'a, Message, Theme, Renderer> GestureArea<'a, Message, Theme, Renderer> {
    pub fn new(
        pages: Vec<Element<'a, Message, Theme, Renderer>>,
        on_gesture: impl Fn(GestureEvent) -> Message + 'a,
        on_resize: impl Fn(Size) -> Message + 'a,
    ) -> Self {
        Self {
            pages,
            offset: 0.0,
            capturing: false,
            width: Length::Fill,
            height: Length::Fill,
            on_gesture: Box::new(on_gesture),
            on_resize: Box::new(on_resize),
        }
    }

    /// Scroll position: the strip is drawn shifted left by this amount.
    #[must_use]
    pub fn offset(mut self, offset: f32) -> Self {
        self.offset = if offset.is_finite() { offset } else { 0.0 };
        self
    }

    /// Swallow pointer moves and releases (a drag is active).
    #[must_use]
    pub fn capturing(mut self, capturing: bool) -> Self {
        self.capturing = capturing;
        self
    }

    #[must_use]
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    #[must_use]
    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for GestureArea<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn children(&self) -> Vec<widget::Tree> {
        self.pages.iter().map(widget::Tree::new).collect()
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&self.pages);
    }

    fn size(&self) -> Size<Length> {
        Size::new(self.width, self.height)
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let size = limits.width(self.width).height(self.height).max();
        let page_limits = layout::Limits::new(size, size);

        let children = self
            .pages
            .iter_mut()
            .zip(tree.children.iter_mut())
            .enumerate()
            .map(|(index, (page, state))| {
                page.as_widget_mut()
                    .layout(state, renderer, &page_limits)
                    .move_to(Point::new(index as f32 * size.width - self.offset, 0.0))
            })
            .collect();

        layout::Node::with_children(size, children)
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let Some(visible) = bounds.intersection(viewport) else {
            return;
        };

        renderer.with_layer(visible, |renderer| {
            for ((page, state), page_layout) in self
                .pages
                .iter()
                .zip(&tree.children)
                .zip(layout.children())
            {
                if page_layout.bounds().intersects(&visible) {
                    page.as_widget()
                        .draw(state, renderer, theme, style, page_layout, cursor, &visible);
                }
            }
        });
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let state = tree.state.downcast_mut::<State>();

        if state.measured != Some(bounds.size()) {
            state.measured = Some(bounds.size());
            shell.publish((self.on_resize)(bounds.size()));
        }

        let pointer = classify(
            event,
            state.tracking,
            cursor.position_over(bounds),
            state.last_position,
        );
        let swallow = self.capturing
            && matches!(pointer, Some((_, Pointer::Moved(_) | Pointer::Up(_))));

        if let Some((tracking, pointer)) = pointer {
            state.tracking = tracking;
            if let Pointer::Down(p) | Pointer::Moved(p) | Pointer::Up(p) = pointer {
                state.last_position = p;
            }
            shell.publish((self.on_gesture)(to_gesture(pointer, Instant::now())));
        }

        if swallow {
            shell.capture_event();
            return;
        }

        for ((page, state), page_layout) in self
            .pages
            .iter_mut()
            .zip(&mut tree.children)
            .zip(layout.children())
        {
            page.as_widget_mut().update(
                state,
                event,
                page_layout,
                cursor,
                renderer,
                clipboard,
                shell,
                viewport,
            );
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        if self.capturing {
            return mouse::Interaction::Grabbing;
        }
        self.pages
            .iter()
            .zip(&tree.children)
            .zip(layout.children())
            .map(|((page, state), page_layout)| {
                page.as_widget()
                    .mouse_interaction(state, page_layout, cursor, viewport, renderer)
            })
            .max()
            .unwrap_or_default()
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        operation.container(None, layout.bounds());
        operation.traverse(&mut |operation| {
            self.pages
                .iter_mut()
                .zip(&mut tree.children)
                .zip(layout.children())
                .for_each(|((page, state), page_layout)| {
                    page.as_widget_mut()
                        .operate(state, page_layout, renderer, operation);
                });
        });
    }
}

impl<'a, Message, Theme, Renderer> From<GestureArea<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(area: GestureArea<'a, Message, Theme, Renderer>) -> Self {
        Self::new(area)
    }
}

/// Helper function to create a gesture area over `pages`.
pub fn gesture_area<'a, Message, Theme, Renderer>(
    pages: Vec<Element<'a, Message, Theme, Renderer>>,
    on_gesture: impl Fn(GestureEvent) -> Message + 'a,
    on_resize: impl Fn(Size) -> Message + 'a,
) -> GestureArea<'a, Message, Theme, Renderer> {
    GestureArea::new(pages, on_gesture, on_resize)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INSIDE: Option<Point> = Some(Point::new(10.0, 10.0));

    fn finger(id: u64) -> touch::Finger {
        touch::Finger(id)
    }

    #[test]
    fn left_press_inside_starts_tracking() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert_eq!(
            classify(&event, Tracking::None, INSIDE, Point::ORIGIN),
            Some((Tracking::Mouse, Pointer::Down(Point::new(10.0, 10.0))))
        );
    }

    #[test]
    fn press_outside_is_ignored() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert_eq!(classify(&event, Tracking::None, None, Point::ORIGIN), None);
    }

    #[test]
    fn moves_are_ignored_until_pressed() {
        let event = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(50.0, 0.0),
        });
        assert_eq!(classify(&event, Tracking::None, INSIDE, Point::ORIGIN), None);
        assert_eq!(
            classify(&event, Tracking::Mouse, INSIDE, Point::ORIGIN),
            Some((Tracking::Mouse, Pointer::Moved(Point::new(50.0, 0.0))))
        );
    }

    #[test]
    fn mouse_release_uses_last_position() {
        let event = Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));
        let last = Point::new(80.0, 5.0);
        assert_eq!(
            classify(&event, Tracking::Mouse, None, last),
            Some((Tracking::None, Pointer::Up(last)))
        );
    }

    #[test]
    fn cursor_leaving_window_cancels() {
        let event = Event::Mouse(mouse::Event::CursorLeft);
        assert_eq!(
            classify(&event, Tracking::Mouse, None, Point::ORIGIN),
            Some((Tracking::None, Pointer::Lost))
        );
    }

    #[test]
    fn second_finger_is_ignored() {
        let moved = Event::Touch(touch::Event::FingerMoved {
            id: finger(2),
            position: Point::new(30.0, 0.0),
        });
        assert_eq!(
            classify(&moved, Tracking::Finger(finger(1)), INSIDE, Point::ORIGIN),
            None
        );

        let pressed = Event::Touch(touch::Event::FingerPressed {
            id: finger(2),
            position: Point::new(30.0, 0.0),
        });
        assert_eq!(
            classify(&pressed, Tracking::Finger(finger(1)), INSIDE, Point::ORIGIN),
            None
        );
    }

    #[test]
    fn tracked_finger_lift_releases() {
        let lifted = Event::Touch(touch::Event::FingerLifted {
            id: finger(1),
            position: Point::new(5.0, 5.0),
        });
        assert_eq!(
            classify(&lifted, Tracking::Finger(finger(1)), None, Point::ORIGIN),
            Some((Tracking::None, Pointer::Up(Point::new(5.0, 5.0))))
        );
    }

    #[test]
    fn pointer_maps_to_gesture_events() {
        let at = Instant::now();
        assert_eq!(
            to_gesture(Pointer::Down(Point::new(1.0, 2.0)), at),
            GestureEvent::Press { x: 1.0, y: 2.0, at }
        );
        assert_eq!(to_gesture(Pointer::Lost, at), GestureEvent::Cancel { at });
    }
}
