// SPDX-License-Identifier: MPL-2.0
//! Swipeable tab view: a tab bar with a sliding indicator above a strip of
//! pages driven by a [`Pager`].
//!
//! The bar either shares the width equally between tabs or, when the pager
//! is configured as scrollable, lays out fixed-width tabs in a horizontal
//! scrollable.

use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::pager::{GestureEvent, Page, PageChange, Pager, PagerConfig};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::widgets::gesture_area;
use iced::widget::{button, container, scrollable, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length, Size, Theme};
use std::time::Instant;

/// The two profile tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Applications,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Applications, Tab::Settings];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Tab::Applications => "applications",
            Tab::Settings => "settings",
        }
    }

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Tab::Applications => "tab-applications",
            Tab::Settings => "tab-settings",
        }
    }
}

/// Builds the tab pager, starting on `initial_key` when it names a tab.
pub fn new_pager(initial_key: Option<&str>, config: PagerConfig) -> Result<Pager<Tab>> {
    let pages = Tab::ALL
        .iter()
        .map(|tab| Page::new(tab.key(), *tab))
        .collect();
    Pager::new(pages, initial_key, config)
}

#[derive(Debug, Clone)]
pub enum Message {
    TabPressed(usize),
    Gesture(GestureEvent),
    Resized(Size),
}

/// Feeds a tab view message to the pager. Returns the committed change, if any.
pub fn update(pager: &mut Pager<Tab>, message: Message, now: Instant) -> Option<PageChange> {
    match message {
        Message::TabPressed(index) => pager.request_index(index, now),
        Message::Gesture(event) => pager.handle_gesture(event),
        Message::Resized(size) => {
            pager.on_layout(size.width, size.height, now);
            None
        }
    }
}

/// Renders the tab bar and the page strip.
///
/// `pages` holds one element per tab, in [`Tab::ALL`] order; `map` lifts tab
/// view messages into the caller's message type.
pub fn view<'a, M: 'a>(
    pager: &'a Pager<Tab>,
    i18n: &'a I18n,
    pages: Vec<Element<'a, M>>,
    map: fn(Message) -> M,
) -> Element<'a, M> {
    let strip = gesture_area(
        pages,
        move |event| map(Message::Gesture(event)),
        move |size| map(Message::Resized(size)),
    )
    .offset(pager.composited_offset())
    .capturing(pager.is_dragging());

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(tab_bar(pager, i18n).map(map))
        .push(strip)
        .into()
}

fn tab_bar<'a>(pager: &'a Pager<Tab>, i18n: &'a I18n) -> Element<'a, Message> {
    let config = pager.config();
    let scrollable_bar = config.scrollable();
    let tab_width = if scrollable_bar {
        Length::Fixed(config.tab_width())
    } else {
        Length::FillPortion(1)
    };
    let label_height = (config.bar_height() - config.indicator_height()).max(0.0);

    let tabs = pager
        .pages()
        .iter()
        .enumerate()
        .fold(Row::new(), |row, (index, page)| {
            row.push(tab_button(
                i18n.tr(page.payload.label_key()),
                index,
                index == pager.active_index(),
                page.disabled,
                tab_width,
                label_height,
            ))
        });

    let indicator_width = pager.indicator_width();
    let indicator = Row::new()
        .push(Space::new().width(Length::Fixed(pager.indicator_offset().max(0.0))))
        .push(
            Container::new(Space::new().width(Length::Fill).height(Length::Fill))
                .width(Length::Fixed(indicator_width))
                .height(Length::Fixed(config.indicator_height()))
                .style(|_theme: &Theme| container::Style {
                    background: Some(palette::SEA_GREEN.into()),
                    ..Default::default()
                }),
        );

    let bar = Column::new().push(tabs).push(indicator);
    let bar: Element<'a, Message> = if scrollable_bar {
        scrollable(bar)
            .direction(scrollable::Direction::Horizontal(
                scrollable::Scrollbar::hidden(),
            ))
            .width(Length::Fill)
            .into()
    } else {
        bar.width(Length::Fill).into()
    };

    Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fixed(config.bar_height()))
        .style(|_theme: &Theme| container::Style {
            background: Some(palette::WHITE.into()),
            border: iced::Border {
                color: palette::GRAY_200,
                width: 1.0,
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn tab_button<'a>(
    label: String,
    index: usize,
    active: bool,
    disabled: bool,
    width: Length,
    height: f32,
) -> Element<'a, Message> {
    let color = if active { palette::SEA_GREEN } else { palette::GRAY };
    let text = Text::new(label).size(typography::BODY_LG).color(color);

    let tab = button(
        Container::new(text)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .width(width)
    .height(Length::Fixed(height))
    .padding([0.0, spacing::XS])
    .style(|_theme: &Theme, _status| button::Style {
        background: None,
        ..Default::default()
    });

    if disabled {
        tab.into()
    } else {
        tab.on_press(Message::TabPressed(index)).into()
    }
}
