//! The HTTP module which provides functions for performing requests to endpoints in Discord's API.
//!
//! Requests are authorized with the bot token an [`Http`] client is built with. Answering an
//! interaction does not strictly need the token, since the interaction token itself authorizes the
//! callback, but followup and guild endpoints do.
//!
//! Note that you may want to perform requests through a [model]s' instance methods where possible,
//! as they each offer different levels of a high-level interface to the HTTP module.
//!
//! [model]: crate::model

mod client;
mod error;
pub mod request;
pub mod routing;

use reqwest::Method;

pub use self::client::*;
pub use self::error::*;
pub use self::request::Request;
pub use self::routing::Route;

/// An method used for making requests.
///
/// This is needed because `reqwest`'s `Method` enum does not derive Copy.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LightMethod {
    /// Indicates that a route is for the `DELETE` method only.
    Delete,
    /// Indicates that a route is for the `GET` method only.
    Get,
    /// Indicates that a route is for the `PATCH` method only.
    Patch,
    /// Indicates that a route is for the `POST` method only.
    Post,
    /// Indicates that a route is for the `PUT` method only.
    Put,
}

impl LightMethod {
    #[must_use]
    pub fn reqwest_method(self) -> Method {
        match self {
            Self::Delete => Method::DELETE,
            Self::Get => Method::GET,
            Self::Patch => Method::PATCH,
            Self::Post => Method::POST,
            Self::Put => Method::PUT,
        }
    }
}
