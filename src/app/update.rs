// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the main `update` function and the specialized
//! handlers for each part of the screen.

use super::Message;
use crate::api::{self, ApiClient, AppRecord};
use crate::error::ApiError;
use crate::i18n::fluent::I18n;
use crate::pager::{PageChange, Pager};
use crate::ui::applications;
use crate::ui::carousel;
use crate::ui::notifications::{self, Notification};
use crate::ui::profile_header::{self, Event as HeaderEvent};
use crate::ui::tab_view::{self, Tab};
use crate::ui::widgets::RemoteImageCache;
use iced::{window, Task};
use std::time::Instant;

/// Mutable view of the application state handed to the handlers.
pub(super) struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub api: Option<&'a ApiClient>,
    pub tabs: &'a mut Pager<Tab>,
    pub carousel: &'a mut Option<Pager<String>>,
    pub applications: &'a mut applications::State,
    pub images: &'a mut RemoteImageCache,
    pub notifications: &'a mut notifications::Manager,
}

pub(super) fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Header(header_message) => handle_header_message(ctx, header_message),
        Message::Tabs(tabs_message) => {
            let change = tab_view::update(ctx.tabs, tabs_message, Instant::now());
            log_change("tab", change);
            Task::none()
        }
        Message::Carousel(carousel_message) => {
            if let Some(carousel) = ctx.carousel.as_mut() {
                let change = carousel::update(carousel, carousel_message, Instant::now());
                log_change("banner", change);
            }
            Task::none()
        }
        Message::Applications(applications_message) => {
            ctx.applications.update(applications_message);
            Task::none()
        }
        Message::Notification(notification_message) => {
            ctx.notifications.handle_message(&notification_message);
            Task::none()
        }
        Message::ApplicationsLoaded(result) => handle_applications_loaded(ctx, result),
        Message::ImageLoaded { url, result } => {
            match result {
                Ok(bytes) => ctx.images.insert_loaded(&url, bytes),
                Err(err) => {
                    log::debug!("image {} failed: {}", url, err);
                    ctx.images.mark_failed(&url);
                }
            }
            Task::none()
        }
        Message::Frame(now) | Message::Tick(now) => {
            advance(ctx, now);
            Task::none()
        }
        Message::WindowCloseRequested(id) => {
            ctx.tabs.dispose();
            if let Some(carousel) = ctx.carousel.as_mut() {
                carousel.dispose();
            }
            window::close(id)
        }
    }
}

fn handle_header_message(
    ctx: &mut UpdateContext<'_>,
    message: profile_header::Message,
) -> Task<Message> {
    match profile_header::update(message) {
        HeaderEvent::BackRequested => {
            ctx.notifications
                .push(Notification::info("header-back-pressed"), Instant::now());
        }
    }
    Task::none()
}

fn handle_applications_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<Vec<AppRecord>, ApiError>,
) -> Task<Message> {
    match result {
        Ok(apps) => {
            ctx.applications.set_loaded(apps);
            let urls: Vec<String> = ctx.applications.icon_urls().map(str::to_string).collect();
            fetch_images(ctx.images, ctx.api, urls)
        }
        Err(err) => {
            log::warn!("applications request failed: {}", err);
            ctx.applications.set_failed();
            ctx.notifications.push(
                Notification::error("notification-fetch-failed")
                    .with_arg("detail", describe_api_error(&err, ctx.i18n)),
                Instant::now(),
            );
            Task::none()
        }
    }
}

/// Advances both pagers and the toast timers to `now`.
fn advance(ctx: &mut UpdateContext<'_>, now: Instant) {
    log_change("tab", ctx.tabs.tick(now));
    if let Some(carousel) = ctx.carousel.as_mut() {
        log_change("banner", carousel.tick(now));
    }
    ctx.notifications.tick(now);
}

fn log_change(what: &str, change: Option<PageChange>) {
    if let Some(change) = change {
        log::debug!("{} changed to {} ({})", what, change.index, change.key);
    }
}

/// Localized error label, with the status code and the server message when
/// they add information.
pub(super) fn describe_api_error(err: &ApiError, i18n: &I18n) -> String {
    let label = i18n.tr(err.i18n_key());
    let label = match err {
        ApiError::Http { status, .. } => format!("{label} {status}"),
        _ => label,
    };
    match err.server_message() {
        Some(message) => format!("{label}: {message}"),
        None => label,
    }
}

/// Starts the applications request, or does nothing without a client.
pub(super) fn fetch_applications(api: Option<&ApiClient>) -> Task<Message> {
    let Some(client) = api.cloned() else {
        return Task::none();
    };
    Task::perform(
        async move { client.fetch_applications().await },
        Message::ApplicationsLoaded,
    )
}

/// Downloads every URL not already cached or in flight.
pub(super) fn fetch_images(
    images: &mut RemoteImageCache,
    api: Option<&ApiClient>,
    urls: Vec<String>,
) -> Task<Message> {
    let Some(client) = api else {
        return Task::none();
    };
    let tasks: Vec<Task<Message>> = urls
        .into_iter()
        .filter(|url| images.request(url))
        .map(|url| {
            let http = client.http().clone();
            Task::perform(api::fetch_image(http, url.clone()), move |result| {
                Message::ImageLoaded { url, result }
            })
        })
        .collect();
    Task::batch(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiConfig, Config};

    fn i18n() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn describe_api_error_includes_status_and_message() {
        let i18n = i18n();
        let err = ApiError::from_status(418, Some("teapot".to_string()));
        assert_eq!(describe_api_error(&err, &i18n), "HTTP error 418: teapot");

        let err = ApiError::from_status(403, None);
        assert_eq!(describe_api_error(&err, &i18n), "Forbidden");
    }

    #[test]
    fn images_are_requested_once() {
        let client = ApiClient::new(&ApiConfig::default()).unwrap();
        let mut images = RemoteImageCache::default();
        let urls = vec!["https://example.com/a.png".to_string()];

        let _ = fetch_images(&mut images, Some(&client), urls.clone());
        assert_eq!(images.len(), 1);
        let _ = fetch_images(&mut images, Some(&client), urls);
        assert_eq!(images.len(), 1);
    }

    #[test]
    fn no_client_means_no_downloads() {
        let mut images = RemoteImageCache::default();
        let _ = fetch_images(&mut images, None, vec!["https://example.com/a.png".into()]);
        assert!(images.is_empty());
    }
}
