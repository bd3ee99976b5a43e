// SPDX-License-Identifier: MPL-2.0
//! Banner carousel: remote images in a swipeable strip with pagination dots.
//!
//! Uses the carousel variant of the [`Pager`], so it can autoplay, fades the
//! images briefly on each change and shows one dot per image.

use crate::error::Result;
use crate::pager::{Dot, GestureEvent, Page, PageChange, Pager, PagerConfig};
use crate::ui::design_tokens::{palette, sizing, spacing};
use crate::ui::widgets::gesture_area;
use crate::ui::widgets::remote_image::{self, RemoteImageCache};
use iced::widget::{button, container, stack, Container, Row, Space};
use iced::{alignment, Color, ContentFit, Element, Length, Size, Theme};
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    Gesture(GestureEvent),
    Resized(Size),
    DotPressed(usize),
}

/// Builds a carousel pager over `urls`. Returns `None` for an empty list.
pub fn new_pager(urls: &[String], config: PagerConfig) -> Result<Option<Pager<String>>> {
    if urls.is_empty() {
        return Ok(None);
    }
    let pages = urls
        .iter()
        .enumerate()
        .map(|(index, url)| Page::new(format!("banner-{index}"), url.clone()))
        .collect();
    Pager::new(pages, None, config).map(Some)
}

pub fn update(pager: &mut Pager<String>, message: Message, now: Instant) -> Option<PageChange> {
    match message {
        Message::Gesture(event) => pager.handle_gesture(event),
        Message::Resized(size) => {
            pager.on_layout(size.width, size.height, now);
            None
        }
        Message::DotPressed(index) => pager.request_index(index, now),
    }
}

pub fn view<'a>(
    pager: &'a Pager<String>,
    images: &'a RemoteImageCache,
    height: f32,
) -> Element<'a, Message> {
    let opacity = pager.content_opacity();
    let slides = pager
        .pages()
        .iter()
        .map(|page| {
            remote_image::view(
                images,
                &page.payload,
                Length::Fill,
                Length::Fill,
                ContentFit::Cover,
                opacity,
            )
        })
        .collect();

    let strip = gesture_area(slides, Message::Gesture, Message::Resized)
        .offset(pager.composited_offset())
        .capturing(pager.is_dragging())
        .height(Length::Fixed(height));

    let mut layers = stack![strip].width(Length::Fill).height(Length::Fixed(height));
    if let Some(dots) = pager.dots() {
        layers = layers.push(pagination(dots));
    }
    layers.into()
}

fn pagination<'a>(dots: &[Dot]) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center);
    let row = dots.iter().enumerate().fold(row, |row, (index, dot)| {
        row.push(dot_button(index, dot.scale(), dot.opacity()))
    });

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::SM)
        .into()
}

fn dot_button<'a>(index: usize, scale: f32, opacity: f32) -> Element<'a, Message> {
    let diameter = sizing::DOT * scale;
    let color = Color {
        a: opacity,
        ..palette::WHITE
    };

    button(
        Container::new(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fixed(diameter))
            .height(Length::Fixed(diameter))
            .style(move |_theme: &Theme| container::Style {
                background: Some(color.into()),
                border: iced::Border {
                    radius: (diameter / 2.0).into(),
                    ..Default::default()
                },
                ..Default::default()
            }),
    )
    .padding(0)
    .style(|_theme: &Theme, _status| button::Style {
        background: None,
        ..Default::default()
    })
    .on_press(Message::DotPressed(index))
    .into()
}
