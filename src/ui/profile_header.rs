// SPDX-License-Identifier: MPL-2.0
//! Profile header: back button, avatar, name and connection status, with the
//! banner carousel underneath when there are banner images.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::widgets::remote_image::{self, RemoteImage, RemoteImageCache};
use iced::widget::{button, container, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length, Theme};

/// Contextual data needed to render the header.
pub struct ViewContext<'a, M> {
    pub i18n: &'a I18n,
    pub images: &'a RemoteImageCache,
    pub name: &'a str,
    pub status: &'a str,
    pub image_url: Option<&'a str>,
    /// Rendered below the profile block when present.
    pub banner: Option<Element<'a, M>>,
}

#[derive(Debug, Clone)]
pub enum Message {
    BackPressed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Back was pressed; there is no previous screen, the app only confirms it.
    BackRequested,
}

pub fn update(message: Message) -> Event {
    match message {
        Message::BackPressed => Event::BackRequested,
    }
}

pub fn view<'a, M: 'a>(ctx: ViewContext<'a, M>, map: fn(Message) -> M) -> Element<'a, M> {
    let back = button(
        Container::new(Text::new("‹").size(typography::TITLE_LG).color(palette::BLACK))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fixed(sizing::BACK_BUTTON))
    .height(Length::Fixed(sizing::BACK_BUTTON))
    .padding(0)
    .style(back_button_style)
    .on_press(Message::BackPressed);

    let top_bar = Row::new()
        .align_y(alignment::Vertical::Center)
        .padding([spacing::XS, spacing::MD])
        .push(Element::from(back).map(map));

    let profile = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .push(avatar(ctx.i18n, ctx.images, ctx.image_url))
        .push(
            Text::new(ctx.name)
                .size(typography::TITLE_MD)
                .color(palette::BLACK),
        )
        .push(
            Text::new(ctx.status)
                .size(typography::BODY)
                .color(palette::SEA_GREEN),
        );

    let mut header = Column::new()
        .width(Length::Fill)
        .spacing(spacing::SM)
        .push(top_bar)
        .push(profile);
    if let Some(banner) = ctx.banner {
        header = header.push(banner);
    }

    Container::new(header)
        .width(Length::Fill)
        .padding(iced::Padding::ZERO.bottom(spacing::SM))
        .style(|_theme: &Theme| container::Style {
            background: Some(palette::WHITE.into()),
            ..Default::default()
        })
        .into()
}

/// Circular avatar, or a labelled placeholder when the image is missing.
fn avatar<'a, M: 'a>(
    i18n: &I18n,
    images: &RemoteImageCache,
    image_url: Option<&str>,
) -> Element<'a, M> {
    let size = Length::Fixed(sizing::AVATAR);
    let loaded = image_url
        .and_then(|url| images.get(url))
        .and_then(RemoteImage::handle)
        .is_some();

    let content: Element<'a, M> = match image_url {
        Some(url) if loaded => {
            remote_image::view(images, url, size, size, ContentFit::Cover, opacity::OPAQUE)
        }
        _ => Container::new(
            Text::new(i18n.tr("header-avatar-placeholder"))
                .size(typography::CAPTION)
                .color(palette::GRAY),
        )
        .width(size)
        .height(size)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into(),
    };

    Container::new(content)
        .width(size)
        .height(size)
        .clip(true)
        .style(|_theme: &Theme| container::Style {
            background: Some(palette::WHITE_GREEN.into()),
            border: iced::Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn back_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Pressed => Some(palette::GRAY_200.into()),
        button::Status::Hovered => Some(palette::GRAY_100.into()),
        _ => None,
    };
    button::Style {
        background,
        text_color: palette::BLACK,
        border: iced::Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_press_is_reported() {
        assert_eq!(update(Message::BackPressed), Event::BackRequested);
    }

    #[test]
    fn back_button_highlights_when_pressed() {
        let theme = Theme::Light;
        assert!(back_button_style(&theme, button::Status::Active)
            .background
            .is_none());
        assert!(back_button_style(&theme, button::Status::Pressed)
            .background
            .is_some());
    }
}
