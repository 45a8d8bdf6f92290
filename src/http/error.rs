use std::error::Error as StdError;
use std::fmt;

use reqwest::header::InvalidHeaderValue;
use reqwest::{Error as ReqwestError, Method, Response, StatusCode};
use url::ParseError as UrlError;

use crate::constants::json_error_codes;
use crate::json::decode_resp;

/// The JSON body Discord sends along with an unsuccessful response.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct DiscordJsonError {
    /// The error code.
    pub code: isize,
    /// The error message.
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct ErrorResponse {
    pub status_code: StatusCode,
    pub url: String,
    pub method: Method,
    pub error: DiscordJsonError,
}

impl ErrorResponse {
    // We need a freestanding from-function since we cannot implement an async From-trait.
    pub async fn from_response(r: Response, method: Method) -> Self {
        let status_code = r.status();
        let url = r.url().to_string();

        ErrorResponse {
            status_code,
            url,
            method,
            error: decode_resp(r).await.unwrap_or_else(|e| DiscordJsonError {
                code: -1,
                message: format!("[parley] Could not decode json when receiving error response from discord:, {e}"),
            }),
        }
    }
}

#[derive(Debug)]
#[non_exhaustive]
pub enum HttpError {
    /// When a non-successful status code was received for a request.
    UnsuccessfulRequest(ErrorResponse),
    /// When parsing an URL failed due to invalid input.
    Url(UrlError),
    /// Header value contains invalid input.
    InvalidHeader(InvalidHeaderValue),
    /// Reqwest's Error contain information on why sending a request failed.
    Request(ReqwestError),
    /// An endpoint scoped to the application was called before the application id was known.
    ApplicationIdMissing,
}

impl HttpError {
    /// Returns true when the error is caused by an unsuccessful request
    #[must_use]
    pub fn is_unsuccessful_request(&self) -> bool {
        matches!(self, Self::UnsuccessfulRequest(_))
    }

    /// Returns the status code if the error is an unsuccessful request
    #[must_use]
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            Self::UnsuccessfulRequest(res) => Some(res.status_code),
            _ => None,
        }
    }

    /// Returns true when Discord rejected a second initial response to the same interaction.
    #[must_use]
    pub fn is_already_acknowledged(&self) -> bool {
        match self {
            Self::UnsuccessfulRequest(res) => {
                res.error.code == json_error_codes::INTERACTION_ALREADY_ACKNOWLEDGED
            },
            _ => false,
        }
    }
}

impl From<ErrorResponse> for HttpError {
    fn from(error: ErrorResponse) -> Self {
        Self::UnsuccessfulRequest(error)
    }
}

impl From<ReqwestError> for HttpError {
    fn from(error: ReqwestError) -> Self {
        Self::Request(error)
    }
}

impl From<InvalidHeaderValue> for HttpError {
    fn from(error: InvalidHeaderValue) -> Self {
        Self::InvalidHeader(error)
    }
}

impl From<UrlError> for HttpError {
    fn from(error: UrlError) -> Self {
        Self::Url(error)
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsuccessfulRequest(e) => f.write_str(&e.error.message),
            Self::Url(_) => f.write_str("Provided URL is incorrect."),
            Self::InvalidHeader(_) => f.write_str("Provided value is an invalid header value."),
            Self::Request(_) => f.write_str("Error while sending HTTP request."),
            Self::ApplicationIdMissing => f.write_str("Application id was expected but not provided."),
        }
    }
}

impl StdError for HttpError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Url(inner) => Some(inner),
            Self::Request(inner) => Some(inner),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(code: isize, message: &str) -> HttpError {
        HttpError::UnsuccessfulRequest(ErrorResponse {
            status_code: StatusCode::BAD_REQUEST,
            url: String::from("https://discord.com/api/v10/interactions/1/token/callback"),
            method: Method::POST,
            error: DiscordJsonError {
                code,
                message: message.to_string(),
            },
        })
    }

    #[test]
    fn already_acknowledged() {
        let error = response(40060, "Interaction has already been acknowledged.");
        assert!(error.is_already_acknowledged());
        assert_eq!(error.status_code(), Some(StatusCode::BAD_REQUEST));
        assert_eq!(error.to_string(), "Interaction has already been acknowledged.");

        assert!(!response(10062, "Unknown interaction").is_already_acknowledged());
    }
}
