//! The model prelude re-exports all types in the model sub-modules.
//!
//! This allows for quick and easy access to all of the model types.
//!
//! # Examples
//!
//! Import all model types into scope:
//!
//! ```rust,no_run
//! use parley::model::prelude::*;
//! ```

#[doc(inline)]
pub use super::{
    application::*,
    channel::*,
    guild::*,
    id::*,
    permissions::*,
    timestamp::*,
    user::*,
    ModelError,
};
