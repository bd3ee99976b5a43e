// SPDX-License-Identifier: MPL-2.0
//! Backend access: the applications list and remote image bytes.
//!
//! The client is cheap to clone (reqwest pools connections internally), so
//! each `Task` takes its own copy into the future it runs.

use crate::config::ApiConfig;
use crate::error::{ApiError, Error, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

/// One application installed on the kid's device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppRecord {
    pub app_id: u64,
    #[serde(default)]
    pub fk_kid_id: u64,
    #[serde(default)]
    pub kid_profile_image: String,
    pub app_name: String,
    #[serde(default)]
    pub app_icon: String,
    #[serde(default)]
    pub app_package_name: String,
    /// "active" (any case) means the app is allowed.
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Deserialize)]
struct AppsEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<AppsData>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AppsData {
    #[serde(default)]
    app_list: Vec<AppRecord>,
}

/// Only used to pull `message` out of error bodies.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, Serialize)]
struct AppsRequest<'a> {
    kid_id: &'a str,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    apps_list_url: String,
    kid_id: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()
            .map_err(Error::from)?;

        Ok(Self {
            http,
            apps_list_url: config.apps_list_url(),
            kid_id: config.kid_id().to_string(),
        })
    }

    /// Shared HTTP client, reused for image downloads.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub fn apps_list_url(&self) -> &str {
        &self.apps_list_url
    }

    /// Posts `{"kid_id": ...}` to the applications endpoint.
    ///
    /// A response flagged `success: false` yields an empty list rather than
    /// an error.
    pub async fn fetch_applications(&self) -> std::result::Result<Vec<AppRecord>, ApiError> {
        log::info!("fetching applications for kid {}", self.kid_id);

        let response = self
            .http
            .post(&self.apps_list_url)
            .json(&AppsRequest {
                kid_id: &self.kid_id,
            })
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        let apps = parse_apps_response(status, &body)?;

        log::info!("received {} application(s)", apps.len());
        Ok(apps)
    }
}

/// Interprets the status and body of an applications response.
pub fn parse_apps_response(
    status: u16,
    body: &str,
) -> std::result::Result<Vec<AppRecord>, ApiError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|error| error.message)
            .filter(|message| !message.is_empty());
        return Err(ApiError::from_status(status, message));
    }

    let envelope: AppsEnvelope =
        serde_json::from_str(body).map_err(|err| ApiError::Decode(err.to_string()))?;

    if !envelope.success {
        log::warn!(
            "applications request unsuccessful: {}",
            envelope.message.as_deref().unwrap_or("no message")
        );
        return Ok(Vec::new());
    }

    Ok(envelope.data.map(|data| data.app_list).unwrap_or_default())
}

/// Downloads the raw bytes behind `url`.
pub async fn fetch_image(
    http: reqwest::Client,
    url: String,
) -> std::result::Result<Vec<u8>, ApiError> {
    let response = http
        .get(&url)
        .header(ACCEPT, "image/*")
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::from_status(status.as_u16(), None));
    }

    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "success": true,
        "data": {
            "app_list": [
                {
                    "app_id": 1,
                    "fk_kid_id": 378,
                    "kid_profile_image": "",
                    "app_name": "YouTube",
                    "app_icon": "https://example.com/yt.png",
                    "app_package_name": "com.google.android.youtube",
                    "status": "Active"
                },
                {
                    "app_id": 2,
                    "fk_kid_id": 378,
                    "kid_profile_image": "",
                    "app_name": "Chrome",
                    "app_icon": "https://example.com/chrome.png",
                    "app_package_name": "com.android.chrome",
                    "status": "inactive"
                }
            ],
            "usage_access": 1
        },
        "message": "ok"
    }"#;

    #[test]
    fn parses_successful_envelope() {
        let apps = parse_apps_response(200, SAMPLE).unwrap();
        assert_eq!(apps.len(), 2);
        assert_eq!(apps[0].app_name, "YouTube");
        assert_eq!(apps[1].app_package_name, "com.android.chrome");
    }

    #[test]
    fn unsuccessful_envelope_is_empty_list() {
        let body = r#"{"success": false, "data": null, "message": "kid not linked"}"#;
        assert_eq!(parse_apps_response(200, body).unwrap(), Vec::new());
    }

    #[test]
    fn missing_data_is_empty_list() {
        let body = r#"{"success": true}"#;
        assert!(parse_apps_response(200, body).unwrap().is_empty());
    }

    #[test]
    fn error_status_carries_server_message() {
        let body = r#"{"success": false, "message": "token expired"}"#;
        assert_eq!(
            parse_apps_response(401, body),
            Err(ApiError::Unauthorized(Some("token expired".to_string())))
        );
    }

    #[test]
    fn error_status_without_json_body() {
        assert_eq!(
            parse_apps_response(503, "<html>down</html>"),
            Err(ApiError::Http {
                status: 503,
                message: None
            })
        );
    }

    #[test]
    fn malformed_success_body_is_decode_error() {
        assert!(matches!(
            parse_apps_response(200, "{not json"),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn client_targets_configured_endpoint() {
        let config = ApiConfig {
            base_url: Some("https://backend.test/api".to_string()),
            ..ApiConfig::default()
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.apps_list_url(), "https://backend.test/api/apps/list");
    }

    #[tokio::test]
    async fn unreachable_backend_is_network_error() {
        let config = ApiConfig {
            base_url: Some("http://127.0.0.1:9".to_string()),
            timeout_secs: Some(2),
            ..ApiConfig::default()
        };
        let client = ApiClient::new(&config).unwrap();
        let result = client.fetch_applications().await;
        assert!(matches!(result, Err(ApiError::Network(_))));
    }
}
