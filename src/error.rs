use std::error::Error as StdError;
use std::fmt;

#[cfg(feature = "http")]
use reqwest::{header::InvalidHeaderValue, Error as ReqwestError};

#[cfg(feature = "http")]
use crate::http::HttpError;
use crate::json::JsonError;
use crate::model::ModelError;

/// The common result type between most library functions.
///
/// The library exposes functions which, for a result type, exposes only one type, rather than the
/// usual 2 (`Result<T, Error>`). This is because all functions that return a result return
/// parley's [`Error`], so this is implied, and a "simpler" result is used.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A common error enum returned by most of the library's functionality within a custom
/// [`Result`].
///
/// The most common error types, the [`ModelError`] and [`HttpError`] enums, are both wrapped
/// around this in the form of the [`Self::Model`] and [`Self::Http`] variants.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// An error from the `serde_json` crate.
    Json(JsonError),
    /// An error from the [`model`] module, such as a response kind that is not legal for the
    /// interaction it answers.
    ///
    /// [`model`]: crate::model
    Model(ModelError),
    /// An [`http`] error.
    ///
    /// [`http`]: crate::http
    #[cfg(feature = "http")]
    Http(HttpError),
}

impl From<JsonError> for Error {
    fn from(e: JsonError) -> Error {
        Error::Json(e)
    }
}

impl From<ModelError> for Error {
    fn from(e: ModelError) -> Error {
        Error::Model(e)
    }
}

#[cfg(feature = "http")]
impl From<HttpError> for Error {
    fn from(e: HttpError) -> Error {
        Error::Http(e)
    }
}

#[cfg(feature = "http")]
impl From<InvalidHeaderValue> for Error {
    fn from(e: InvalidHeaderValue) -> Error {
        HttpError::InvalidHeader(e).into()
    }
}

#[cfg(feature = "http")]
impl From<ReqwestError> for Error {
    fn from(e: ReqwestError) -> Error {
        HttpError::Request(e).into()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(inner) => fmt::Display::fmt(&inner, f),
            Self::Model(inner) => fmt::Display::fmt(&inner, f),
            #[cfg(feature = "http")]
            Self::Http(inner) => fmt::Display::fmt(&inner, f),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Json(inner) => Some(inner),
            Self::Model(inner) => Some(inner),
            #[cfg(feature = "http")]
            Self::Http(inner) => Some(inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::application::{InteractionType, ResponseType};

    #[test]
    fn model_error_is_the_source() {
        let error = Error::from(ModelError::InvalidResponseType {
            interaction: InteractionType::Modal,
            response: ResponseType::Modal,
        });

        assert!(matches!(error, Error::Model(_)));
        assert!(error.source().is_some());
        assert_eq!(
            error.to_string(),
            "Response type is not valid for this kind of interaction."
        );
    }
}
