//! parley is a Rust library for the Discord API, centred on answering interactions.
//!
//! The library models the wire entities Discord sends along with an interaction (guilds, members,
//! users, messages) as typed data structures, and exposes thin builders for the responses an
//! application sends back.
//!
//! Responding to an interaction always starts from the interaction itself. A
//! [`ModalInteraction`] hands out an [`InteractionMessageBuilder`] through
//! [`ModalInteraction::build_response`], or an [`InteractionDeferredBuilder`] through
//! [`ModalInteraction::build_deferred_response`]. Which response kinds are legal depends on the
//! category of the interaction; see [`InteractionType::response_types`].
//!
//! ```rust,no_run
//! # #[cfg(feature = "http")]
//! # async fn run(http: &parley::http::Http, interaction: parley::model::application::ModalInteraction) -> parley::Result<()> {
//! use parley::model::application::RespondableInteraction;
//!
//! let name = interaction.value_of("name").unwrap_or("stranger");
//! let response = interaction.build_response(http).content(format!("Hello, {name}!"));
//!
//! interaction.create_initial_response(http, &response).await?;
//! #     Ok(())
//! # }
//! ```
//!
//! Note that, although this documentation will try to be as up-to-date and accurate as possible,
//! Discord hosts [official documentation][docs]. If you need to be sure that some information
//! piece is sanctioned by Discord, refer to their own documentation.
//!
//! [`ModalInteraction`]: crate::model::application::ModalInteraction
//! [`ModalInteraction::build_response`]: crate::model::application::ModalInteraction::build_response
//! [`ModalInteraction::build_deferred_response`]: crate::model::application::ModalInteraction::build_deferred_response
//! [`InteractionMessageBuilder`]: crate::builder::InteractionMessageBuilder
//! [`InteractionDeferredBuilder`]: crate::builder::InteractionDeferredBuilder
//! [`InteractionType::response_types`]: crate::model::application::InteractionType::response_types
//! [docs]: https://discord.com/developers/docs/intro
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(
    unused,
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::non_ascii_literal,
    clippy::fallible_impl_from,
    clippy::let_underscore_must_use,
    clippy::format_push_string,
    clippy::pedantic
)]
#![allow(
    // Allowed as they are too pedantic
    clippy::cast_possible_truncation,
    clippy::module_name_repetitions,
    clippy::unreadable_literal,
    clippy::cast_possible_wrap,
    clippy::wildcard_imports,
    clippy::cast_sign_loss,
    clippy::too_many_lines,
    clippy::doc_markdown,
    clippy::missing_panics_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

#[macro_use]
extern crate serde;

#[macro_use]
mod internal;

pub mod builder;
pub mod constants;
#[cfg(feature = "http")]
pub mod http;
pub mod json;
pub mod model;
pub mod prelude;

mod error;

pub use crate::error::{Error, Result};

/// Special module that re-exports most public items from this crate.
///
/// Useful, because you don't have to remember the full paths of parley items.
pub mod all {
    #[doc(no_inline)]
    pub use crate::builder::*;
    #[doc(no_inline)]
    pub use crate::constants::*;
    #[cfg(feature = "http")]
    #[doc(no_inline)]
    pub use crate::http::*;
    #[doc(no_inline)]
    pub use crate::{model::prelude::*, *};
}

// Re-exports of crates used internally which are already publically exposed.
pub use async_trait::async_trait;
