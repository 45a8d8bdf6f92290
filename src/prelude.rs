//! A set of exports which can be helpful to use.
//!
//! Note that the `ParleyError` re-export is equivalent to [`parley::Error`], although is
//! re-exported as a separate name to remove likely ambiguity with other crate error enums.
//!
//! # Examples
//!
//! Import all of the exports:
//!
//! ```rust
//! use parley::prelude::*;
//! ```
//!
//! [`parley::Error`]: crate::Error

pub use crate::builder::InteractionBuilderFactory;
pub use crate::error::Error as ParleyError;
#[cfg(feature = "http")]
pub use crate::http::{Http, HttpError};
pub use crate::model::application::RespondableInteraction;
pub use crate::model::ModelError;
