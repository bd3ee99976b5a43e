// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::AppRecord;
use crate::error::ApiError;
use crate::ui::applications;
use crate::ui::carousel;
use crate::ui::notifications;
use crate::ui::profile_header;
use crate::ui::tab_view;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(profile_header::Message),
    Tabs(tab_view::Message),
    Carousel(carousel::Message),
    Applications(applications::Message),
    Notification(notifications::NotificationMessage),
    ApplicationsLoaded(Result<Vec<AppRecord>, ApiError>),
    ImageLoaded {
        url: String,
        result: Result<Vec<u8>, ApiError>,
    },
    /// Animation frame while a pager is moving.
    Frame(Instant),
    /// Slow tick for pager timers and toast expiry.
    Tick(Instant),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override (e.g. "fr").
    pub lang: Option<String>,
    /// Optional config directory override (`--config-dir`).
    pub config_dir: Option<String>,
    /// Optional kid profile override (`--kid-id`), wins over the config file.
    pub kid_id: Option<String>,
}
