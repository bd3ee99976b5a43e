// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering notifications.
//!
//! Toasts are dark pills near the bottom of the screen with a thin severity
//! accent on the left. Tapping one dismisses it.

use super::manager::{Manager, Message, Shown};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length, Theme};

pub struct Toast;

impl Toast {
    /// Resolves the message text of a notification.
    pub fn message_text(notification: &Notification, i18n: &I18n) -> String {
        if notification.args().is_empty() {
            i18n.tr(notification.key())
        } else {
            let args: Vec<(&str, &str)> = notification
                .args()
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str()))
                .collect();
            i18n.tr_with_args(notification.key(), &args)
        }
    }

    pub fn view<'a>(shown: &'a Shown, i18n: &'a I18n) -> Element<'a, Message> {
        let notification = &shown.notification;
        let accent_color = notification.severity().accent();

        let accent = Container::new(Space::new().width(3.0).height(Length::Fill))
            .height(Length::Fixed(typography::BODY * 1.5))
            .style(move |_theme: &Theme| container::Style {
                background: Some(accent_color.into()),
                border: iced::Border {
                    radius: radius::SM.into(),
                    ..Default::default()
                },
                ..Default::default()
            });

        let message = Text::new(Self::message_text(notification, i18n))
            .size(typography::BODY)
            .color(palette::WHITE);

        let content = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(accent)
            .push(Container::new(message).width(Length::Fill));

        button(content)
            .on_press(Message::Dismiss(shown.id))
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding([spacing::XS, spacing::MD])
            .style(toast_style)
            .into()
    }

    /// Renders every visible toast stacked at the bottom center.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .shown()
            .map(|shown| Self::view(shown, i18n))
            .collect();

        if toasts.is_empty() {
            return Space::new().width(Length::Shrink).height(Length::Shrink).into();
        }

        Container::new(
            Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::XL)
        .into()
    }
}

fn toast_style(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Pressed => opacity::PRESSED,
        _ => opacity::TOAST,
    };
    button::Style {
        background: Some(
            Color {
                a: alpha,
                ..palette::INFO_500
            }
            .into(),
        ),
        text_color: palette::WHITE,
        border: iced::Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn pressed_toast_is_more_transparent() {
        let theme = Theme::Light;
        let active = toast_style(&theme, button::Status::Active);
        let pressed = toast_style(&theme, button::Status::Pressed);
        let alpha = |style: &button::Style| match style.background {
            Some(iced::Background::Color(color)) => color.a,
            _ => panic!("expected solid background"),
        };
        assert!(alpha(&pressed) < alpha(&active));
    }

    #[test]
    fn message_text_interpolates_arguments() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let notification =
            Notification::error("notification-fetch-failed").with_arg("detail", "Forbidden");
        assert!(Toast::message_text(&notification, &i18n).contains("Forbidden"));
    }
}
