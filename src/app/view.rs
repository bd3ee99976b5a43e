// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The screen is a single column (header with the optional banner carousel,
//! then the tab view) with the toast overlay stacked on top.

use super::Message;
use crate::config::ProfileConfig;
use crate::i18n::fluent::I18n;
use crate::pager::Pager;
use crate::ui::applications::{self, ViewContext as ApplicationsViewContext};
use crate::ui::carousel;
use crate::ui::design_tokens::palette;
use crate::ui::notifications::{self, Toast};
use crate::ui::profile_header::{self, ViewContext as HeaderViewContext};
use crate::ui::settings_page;
use crate::ui::tab_view::{self, Tab};
use crate::ui::widgets::RemoteImageCache;
use iced::widget::{container, stack, Column, Container};
use iced::{Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub profile: &'a ProfileConfig,
    pub carousel_height: f32,
    pub tabs: &'a Pager<Tab>,
    pub carousel: Option<&'a Pager<String>>,
    pub applications: &'a applications::State,
    pub images: &'a RemoteImageCache,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let banner = ctx.carousel.map(|pager| {
        carousel::view(pager, ctx.images, ctx.carousel_height).map(Message::Carousel)
    });

    let header = profile_header::view(
        HeaderViewContext {
            i18n: ctx.i18n,
            images: ctx.images,
            name: ctx.profile.name(),
            status: ctx.profile.status(),
            image_url: ctx.profile.image_url.as_deref(),
            banner,
        },
        Message::Header,
    );

    let pages = Tab::ALL
        .iter()
        .map(|tab| tab_page(*tab, &ctx))
        .collect();
    let tabs = tab_view::view(ctx.tabs, ctx.i18n, pages, Message::Tabs);

    let screen = Container::new(
        Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(header)
            .push(tabs),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(|_theme: &Theme| container::Style {
        background: Some(palette::GRAY_100.into()),
        ..Default::default()
    });

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    stack![screen, toasts].into()
}

fn tab_page<'a>(tab: Tab, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match tab {
        Tab::Applications => ctx
            .applications
            .view(ApplicationsViewContext {
                i18n: ctx.i18n,
                images: ctx.images,
            })
            .map(Message::Applications),
        Tab::Settings => settings_page::view(ctx.i18n),
    }
}
