//! Mappings of objects received from the API, with optional helper methods for ease of use.
//!
//! Models can optionally have additional helper methods compiled, by enabling the `http` feature.
//!
//! Methods like [`RespondableInteraction::create_initial_response`] or [`GuildId::create_emoji`]
//! are provided with this feature, which are shorthands for operations that are otherwise in the
//! much lower-level [`http`] module.
//!
//! [`RespondableInteraction::create_initial_response`]: application::RespondableInteraction::create_initial_response
//! [`GuildId::create_emoji`]: id::GuildId::create_emoji
//! [`http`]: crate::http

pub(crate) mod utils;

pub mod application;
pub mod channel;
pub mod error;
pub mod guild;
pub mod id;
pub mod permissions;
pub mod prelude;
pub mod timestamp;
pub mod user;

pub use self::error::Error as ModelError;
pub use self::permissions::Permissions;
pub use self::timestamp::Timestamp;
