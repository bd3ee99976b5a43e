// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the profile screen.
//!
//! The `App` struct wires together the header, the banner carousel, the tab
//! view and its pages, and translates messages into side effects like the
//! applications request or image downloads.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::api::ApiClient;
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::pager::{Pager, PagerConfig};
use crate::ui::applications;
use crate::ui::carousel;
use crate::ui::design_tokens::sizing;
use crate::ui::notifications::{self, Notification};
use crate::ui::tab_view::{self, Tab};
use crate::ui::widgets::RemoteImageCache;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// `None` when the HTTP client could not be built; the list stays empty.
    api: Option<ApiClient>,
    tabs: Pager<Tab>,
    /// `None` when there are no banner images.
    carousel: Option<Pager<String>>,
    applications: applications::State,
    images: RemoteImageCache,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("active_tab", &self.tabs.active_index())
            .field("has_carousel", &self.carousel.is_some())
            .field("loading", &self.applications.is_loading())
            .finish()
    }
}

pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(sizing::WINDOW_WIDTH, sizing::WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings, builds both pagers and starts the initial requests.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (mut config, config_warning) = config::load();
        if let Some(kid_id) = flags.kid_id {
            config.api.kid_id = Some(kid_id);
        }
        let i18n = I18n::new(flags.lang, &config);

        let mut notifications = notifications::Manager::new();
        let now = std::time::Instant::now();
        if let Some(key) = config_warning {
            notifications.push(Notification::warning(key), now);
        }

        let tabs = tab_view::new_pager(None, config.tabs.pager_config())
            .or_else(|err| {
                log::warn!("invalid tab settings, using defaults: {}", err);
                tab_view::new_pager(None, PagerConfig::tabs())
            })
            .expect("built-in tabs must form a valid pager");

        let carousel = match carousel::new_pager(
            &config.profile.banner_images(),
            config.carousel.pager_config(),
        ) {
            Ok(carousel) => carousel,
            Err(err) => {
                log::warn!("banner carousel disabled: {}", err);
                None
            }
        };

        let mut applications = applications::State::new();
        let api = match ApiClient::new(&config.api) {
            Ok(client) => Some(client),
            Err(err) => {
                log::error!("cannot create HTTP client: {}", err);
                applications.set_failed();
                notifications.push(
                    Notification::error("notification-fetch-failed")
                        .with_arg("detail", err.to_string()),
                    now,
                );
                None
            }
        };

        let mut app = App {
            i18n,
            config,
            api,
            tabs,
            carousel,
            applications,
            images: RemoteImageCache::default(),
            notifications,
        };

        let mut urls: Vec<String> = app.config.profile.image_url.iter().cloned().collect();
        if let Some(carousel) = &app.carousel {
            urls.extend(carousel.pages().iter().map(|page| page.payload.clone()));
        }
        let images = update::fetch_images(&mut app.images, app.api.as_ref(), urls);
        let fetch = update::fetch_applications(app.api.as_ref());

        (app, Task::batch([fetch, images]))
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    /// Whether any pager is animating and needs frame ticks.
    fn needs_frames(&self) -> bool {
        self.tabs.needs_frames() || self.carousel.as_ref().is_some_and(Pager::needs_frames)
    }

    fn has_pending_timers(&self) -> bool {
        self.tabs.has_pending_timers()
            || self
                .carousel
                .as_ref()
                .is_some_and(Pager::has_pending_timers)
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let frame_sub = subscription::create_frame_subscription(self.needs_frames());
        let tick_sub = subscription::create_tick_subscription(
            self.has_pending_timers(),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, frame_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            api: self.api.as_ref(),
            tabs: &mut self.tabs,
            carousel: &mut self.carousel,
            applications: &mut self.applications,
            images: &mut self.images,
            notifications: &mut self.notifications,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            profile: &self.config.profile,
            carousel_height: self.config.carousel.height(),
            tabs: &self.tabs,
            carousel: self.carousel.as_ref(),
            applications: &self.applications,
            images: &self.images,
            notifications: &self.notifications,
        })
    }
}
