// SPDX-License-Identifier: MPL-2.0
//! Settings tab: a static information pane.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

pub fn view<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(i18n.tr("settings-title"))
                .size(typography::TITLE_MD)
                .color(palette::BLACK),
        )
        .push(
            Text::new(i18n.tr("settings-description"))
                .size(typography::BODY_LG)
                .color(palette::GRAY),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
