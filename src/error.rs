// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Api(ApiError),
}

/// Failures of the applications endpoint.
/// Each variant carries the server message when one was returned.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 400
    BadRequest(Option<String>),

    /// 401
    Unauthorized(Option<String>),

    /// 403
    Forbidden(Option<String>),

    /// 404
    NotFound(Option<String>),

    /// 500
    ServerError(Option<String>),

    /// Any other non-success status
    Http {
        status: u16,
        message: Option<String>,
    },

    /// The request never produced a response (DNS, refused, timeout...)
    Network(String),

    /// The body could not be decoded as the expected JSON envelope
    Decode(String),
}

impl ApiError {
    /// Maps a non-success HTTP status to its error variant.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            400 => ApiError::BadRequest(message),
            401 => ApiError::Unauthorized(message),
            403 => ApiError::Forbidden(message),
            404 => ApiError::NotFound(message),
            500 => ApiError::ServerError(message),
            status => ApiError::Http { status, message },
        }
    }

    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "error-api-bad-request",
            ApiError::Unauthorized(_) => "error-api-unauthorized",
            ApiError::Forbidden(_) => "error-api-forbidden",
            ApiError::NotFound(_) => "error-api-not-found",
            ApiError::ServerError(_) => "error-api-server",
            ApiError::Http { .. } => "error-api-http",
            ApiError::Network(_) => "error-api-network",
            ApiError::Decode(_) => "error-api-decode",
        }
    }

    /// Message returned by the server, when there was one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::BadRequest(message)
            | ApiError::Unauthorized(message)
            | ApiError::Forbidden(message)
            | ApiError::NotFound(message)
            | ApiError::ServerError(message)
            | ApiError::Http { message, .. } => message.as_deref(),
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ApiError::BadRequest(_) => "Bad Request".to_string(),
            ApiError::Unauthorized(_) => "Unauthorized".to_string(),
            ApiError::Forbidden(_) => "Forbidden".to_string(),
            ApiError::NotFound(_) => "Not Found".to_string(),
            ApiError::ServerError(_) => "Server Error".to_string(),
            ApiError::Http { status, .. } => format!("HTTP {}", status),
            ApiError::Network(e) => return write!(f, "Network Error: {}", e),
            ApiError::Decode(e) => return write!(f, "Invalid response: {}", e),
        };
        match self.server_message() {
            Some(message) => write!(f, "{}: {}", label, message),
            None => write!(f, "{}", label),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Api(e) => write!(f, "API Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::from_status(status.as_u16(), None)
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Api(err.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn from_toml_error_produces_config_variant() {
        let parse_error = toml::from_str::<toml::Value>("not = [valid").unwrap_err();
        let err: Error = parse_error.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn status_codes_map_to_named_variants() {
        assert_eq!(ApiError::from_status(400, None), ApiError::BadRequest(None));
        assert_eq!(ApiError::from_status(401, None), ApiError::Unauthorized(None));
        assert_eq!(ApiError::from_status(403, None), ApiError::Forbidden(None));
        assert_eq!(ApiError::from_status(404, None), ApiError::NotFound(None));
        assert_eq!(ApiError::from_status(500, None), ApiError::ServerError(None));
        assert_eq!(
            ApiError::from_status(418, None),
            ApiError::Http {
                status: 418,
                message: None
            }
        );
    }

    #[test]
    fn display_prefers_server_message() {
        let err = ApiError::from_status(404, Some("kid not found".into()));
        assert_eq!(err.to_string(), "Not Found: kid not found");

        let err = ApiError::from_status(502, None);
        assert_eq!(err.to_string(), "HTTP 502");
    }

    #[test]
    fn api_error_wraps_into_crate_error() {
        let err: Error = ApiError::Network("connection refused".into()).into();
        assert_eq!(
            err.to_string(),
            "API Error: Network Error: connection refused"
        );
    }

    #[test]
    fn every_api_error_has_an_i18n_key() {
        let errors = [
            ApiError::BadRequest(None),
            ApiError::Unauthorized(None),
            ApiError::Forbidden(None),
            ApiError::NotFound(None),
            ApiError::ServerError(None),
            ApiError::Http {
                status: 503,
                message: None,
            },
            ApiError::Network(String::new()),
            ApiError::Decode(String::new()),
        ];
        for err in errors {
            assert!(err.i18n_key().starts_with("error-api-"));
        }
    }
}
