// SPDX-License-Identifier: MPL-2.0
//! Applications tab: a search field over the kid's installed applications,
//! each row with its icon, name and an allow switch.

use crate::api::AppRecord;
use crate::domain::applications::{SearchQuery, SwitchStates};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::widgets::remote_image::{self, RemoteImageCache};
use iced::widget::{
    container, scrollable, text_input, toggler, Column, Container, Row, Text,
};
use iced::{alignment, ContentFit, Element, Length, Theme};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(Vec<AppRecord>),
}

#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    SwitchToggled(u64),
}

#[derive(Debug, Clone, Default)]
pub struct State {
    load: LoadState,
    query: SearchQuery,
    switches: SwitchStates,
}

/// Contextual data needed to render the applications tab.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a RemoteImageCache,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a fetched list and derives the switches from each status.
    pub fn set_loaded(&mut self, apps: Vec<AppRecord>) {
        self.switches = SwitchStates::from_statuses(
            apps.iter().map(|app| (app.app_id, app.status.as_str())),
        );
        self.load = LoadState::Loaded(apps);
    }

    /// A failed fetch shows the empty list.
    pub fn set_failed(&mut self) {
        self.set_loaded(Vec::new());
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::SearchChanged(text) => {
                self.query = SearchQuery::new(text);
            }
            Message::SwitchToggled(app_id) => {
                let on = self.switches.toggle(app_id);
                log::debug!("app {} switched {}", app_id, if on { "on" } else { "off" });
            }
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    #[must_use]
    pub fn applications(&self) -> &[AppRecord] {
        match &self.load {
            LoadState::Loading => &[],
            LoadState::Loaded(apps) => apps,
        }
    }

    /// Applications matching the current search, in backend order.
    #[must_use]
    pub fn visible(&self) -> Vec<&AppRecord> {
        self.query
            .filter(self.applications(), |app| app.app_name.as_str())
    }

    #[must_use]
    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    #[must_use]
    pub fn is_switched_on(&self, app_id: u64) -> bool {
        self.switches.is_on(app_id)
    }

    /// Icon URLs of every loaded application.
    pub fn icon_urls(&self) -> impl Iterator<Item = &str> {
        self.applications().iter().map(|app| app.app_icon.as_str())
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let search = text_input(
            &ctx.i18n.tr("applications-search-placeholder"),
            self.query.as_str(),
        )
        .on_input(Message::SearchChanged)
        .padding(spacing::SM)
        .size(typography::BODY_LG);

        let visible = self.visible();
        let list: Element<'a, Message> = if visible.is_empty() {
            let key = if self.is_loading() {
                "applications-loading"
            } else {
                "applications-empty"
            };
            Container::new(
                Text::new(ctx.i18n.tr(key))
                    .size(typography::BODY_LG)
                    .color(palette::GRAY),
            )
            .width(Length::Fill)
            .padding(spacing::XL)
            .align_x(alignment::Horizontal::Center)
            .into()
        } else {
            let rows = visible.into_iter().fold(
                Column::new().spacing(spacing::XS),
                |column, app| column.push(self.row(app, ctx.images)),
            );
            scrollable(rows).height(Length::Fill).into()
        };

        Column::new()
            .spacing(spacing::SM)
            .padding(spacing::MD)
            .width(Length::Fill)
            .height(Length::Fill)
            .push(search)
            .push(list)
            .into()
    }

    fn row<'a>(&'a self, app: &'a AppRecord, images: &RemoteImageCache) -> Element<'a, Message> {
        let icon = Container::new(remote_image::view(
            images,
            &app.app_icon,
            Length::Fixed(sizing::APP_ICON),
            Length::Fixed(sizing::APP_ICON),
            ContentFit::Cover,
            1.0,
        ))
        .width(Length::Fixed(sizing::APP_ICON))
        .height(Length::Fixed(sizing::APP_ICON))
        .clip(true)
        .style(|_theme: &Theme| container::Style {
            border: iced::Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        });

        let app_id = app.app_id;
        let switch = toggler(self.switches.is_on(app_id))
            .on_toggle(move |_| Message::SwitchToggled(app_id))
            .size(22.0);

        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(icon)
            .push(
                Text::new(app.app_name.as_str())
                    .size(typography::BODY_LG)
                    .color(palette::BLACK)
                    .width(Length::Fill),
            )
            .push(switch);

        Container::new(row)
            .width(Length::Fill)
            .padding([spacing::XS, spacing::SM])
            .style(|_theme: &Theme| container::Style {
                background: Some(palette::WHITE.into()),
                border: iced::Border {
                    color: palette::GRAY_100,
                    width: 1.0,
                    radius: radius::MD.into(),
                },
                ..Default::default()
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(app_id: u64, name: &str, status: &str) -> AppRecord {
        AppRecord {
            app_id,
            fk_kid_id: 378,
            kid_profile_image: String::new(),
            app_name: name.to_string(),
            app_icon: format!("https://example.com/{app_id}.png"),
            app_package_name: format!("com.example.{app_id}"),
            status: status.to_string(),
        }
    }

    fn loaded() -> State {
        let mut state = State::new();
        state.set_loaded(vec![
            app(1, "YouTube", "Active"),
            app(2, "Chrome", "inactive"),
            app(3, "Calculator", "ACTIVE"),
        ]);
        state
    }

    #[test]
    fn starts_loading_with_nothing_visible() {
        let state = State::new();
        assert!(state.is_loading());
        assert!(state.visible().is_empty());
    }

    #[test]
    fn switches_follow_status_after_load() {
        let state = loaded();
        assert!(state.is_switched_on(1));
        assert!(!state.is_switched_on(2));
        assert!(state.is_switched_on(3));
    }

    #[test]
    fn search_filters_by_prefix() {
        let mut state = loaded();
        state.update(Message::SearchChanged("c".to_string()));
        let names: Vec<&str> = state.visible().iter().map(|a| a.app_name.as_str()).collect();
        assert_eq!(names, vec!["Chrome", "Calculator"]);
        assert_eq!(state.query(), "c");
    }

    #[test]
    fn toggle_affects_one_row() {
        let mut state = loaded();
        state.update(Message::SwitchToggled(2));
        assert!(state.is_switched_on(2));
        assert!(state.is_switched_on(1));
    }

    #[test]
    fn failure_shows_empty_list() {
        let mut state = State::new();
        state.set_failed();
        assert!(!state.is_loading());
        assert!(state.applications().is_empty());
    }

    #[test]
    fn icon_urls_cover_every_app() {
        assert_eq!(loaded().icon_urls().count(), 3);
    }
}
