//! A set of builders used to make using methods on certain structs simpler to use.
//!
//! These are used when not all parameters are required, all parameters are optional, and/or sane
//! default values for required parameters can be applied by a builder.
//!
//! Interaction responses are never constructed from an interaction directly. The interaction asks
//! an [`InteractionBuilderFactory`] for a builder of the response kind it needs, which keeps the
//! model free of any knowledge about how the response is eventually delivered.

use serde::Serialize;

use crate::internal::prelude::*;
use crate::model::application::ResponseType;
use crate::model::error::Maximum;
use crate::model::ModelError;

pub(crate) fn check_lengths(
    content: Option<&str>,
    embeds: &[CreateEmbed],
) -> StdResult<(), ModelError> {
    if let Some(content) = content {
        Maximum::MessageLength.check_overflow(content.chars().count())?;
    }

    Maximum::EmbedCount.check_overflow(embeds.len())?;

    let length = embeds.iter().map(CreateEmbed::get_length).sum();
    Maximum::EmbedLength.check_overflow(length)
}

/// A source of interaction response builders.
///
/// Every builder an interaction hands out is requested through this trait, tagged with the
/// response kind it will carry. [`Http`] implements it, as can anything else able to deliver
/// responses, such as a webhook-based interactions endpoint or a test double.
///
/// Each call returns a fresh builder; builders obtained from separate calls share no state.
///
/// [`Http`]: crate::http::Http
pub trait InteractionBuilderFactory {
    /// Returns an empty builder for a response that carries a message.
    fn interaction_message_builder(&self, kind: ResponseType) -> InteractionMessageBuilder;

    /// Returns an empty builder for a response that only acknowledges the interaction.
    fn interaction_deferred_builder(&self, kind: ResponseType) -> InteractionDeferredBuilder;
}

/// A builder that can be sent as the initial response to an interaction.
pub trait InteractionResponseBuilder: Serialize {
    /// The response kind the builder was created for.
    fn kind(&self) -> ResponseType;

    /// Checks the builder's content against Discord's limits.
    ///
    /// # Errors
    ///
    /// Returns a [`ModelError::TooLarge`] if a length limit is exceeded.
    fn check(&self) -> StdResult<(), ModelError>;
}

mod create_embed;
mod create_interaction_response;
mod create_interaction_response_followup;
mod edit_interaction_response;

pub use create_embed::*;
pub use create_interaction_response::*;
pub use create_interaction_response_followup::*;
pub use edit_interaction_response::*;
