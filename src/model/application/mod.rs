//! Models about interactions and the responses an application sends to them.

mod component;
pub use component::*;
mod interaction;
pub use interaction::*;
mod modal_interaction;
pub use modal_interaction::*;
