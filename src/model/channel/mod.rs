//! Models relating to channels and types within channels.

mod embed;
mod message;

pub use self::embed::*;
pub use self::message::*;
