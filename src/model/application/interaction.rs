#[cfg(feature = "http")]
use crate::builder::InteractionResponseBuilder;
use crate::builder::{InteractionBuilderFactory, InteractionDeferredBuilder, InteractionMessageBuilder};
#[cfg(feature = "http")]
use crate::builder::{CreateInteractionResponseFollowup, EditInteractionResponse};
#[cfg(feature = "http")]
use crate::http::Http;
#[cfg(feature = "http")]
use crate::internal::prelude::*;
#[cfg(feature = "http")]
use crate::model::channel::Message;
use crate::model::error::Error as ModelError;
#[cfg(feature = "http")]
use crate::model::id::MessageId;
use crate::model::id::{ApplicationId, InteractionId};

enum_number! {
    /// The type of an Interaction.
    ///
    /// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-object-interaction-type).
    #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
    #[serde(from = "u8", into = "u8")]
    #[non_exhaustive]
    pub enum InteractionType {
        Ping = 1,
        Command = 2,
        Component = 3,
        Autocomplete = 4,
        Modal = 5,
        _ => Unknown(u8),
    }
}

impl InteractionType {
    /// The response kinds Discord accepts as the initial response to an interaction of this type.
    ///
    /// An unknown interaction type has no legal response.
    #[must_use]
    pub const fn response_types(self) -> &'static [ResponseType] {
        match self {
            Self::Ping => &[ResponseType::Pong],
            Self::Command => &[
                ResponseType::MessageCreate,
                ResponseType::DeferredMessageCreate,
                ResponseType::Modal,
            ],
            Self::Component => &[
                ResponseType::MessageCreate,
                ResponseType::DeferredMessageCreate,
                ResponseType::DeferredMessageUpdate,
                ResponseType::MessageUpdate,
                ResponseType::Modal,
            ],
            Self::Autocomplete => &[ResponseType::AutocompleteResult],
            Self::Modal => &[ResponseType::MessageCreate, ResponseType::DeferredMessageCreate],
            Self::Unknown(_) => &[],
        }
    }

    /// Whether `kind` is a legal initial response to an interaction of this type.
    ///
    /// Kinds are compared by their wire value, so `ResponseType::Unknown(4)` counts as
    /// [`ResponseType::MessageCreate`].
    #[must_use]
    pub fn allows(self, kind: ResponseType) -> bool {
        self.response_types().contains(&kind.normalize())
    }
}

enum_number! {
    /// The type of an interaction response.
    ///
    /// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-response-object-interaction-callback-type).
    #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
    #[serde(from = "u8", into = "u8")]
    #[non_exhaustive]
    pub enum ResponseType {
        /// ACK a Ping.
        Pong = 1,
        /// Respond to an interaction with a message.
        MessageCreate = 4,
        /// ACK an interaction and edit a response later, the user sees a loading state.
        DeferredMessageCreate = 5,
        /// For components, ACK an interaction and edit the original message later; the user does
        /// not see a loading state.
        DeferredMessageUpdate = 6,
        /// For components, edit the message the component was attached to.
        MessageUpdate = 7,
        /// Respond to an autocomplete interaction with suggested choices.
        AutocompleteResult = 8,
        /// Respond to an interaction with a popup modal.
        Modal = 9,
        _ => Unknown(u8),
    }
}

impl ResponseType {
    /// Maps an [`ResponseType::Unknown`] carrying a known wire value to its named variant.
    #[must_use]
    pub fn normalize(self) -> Self {
        Self::from(u8::from(self))
    }

    /// Whether the response only acknowledges the interaction, with the content sent later.
    #[must_use]
    pub const fn is_deferred(self) -> bool {
        matches!(self, Self::DeferredMessageCreate | Self::DeferredMessageUpdate)
    }
}

/// Checks that `kind` may answer an interaction of type `interaction`.
///
/// # Errors
///
/// Returns [`ModelError::InvalidResponseType`] if `kind` is not one of
/// [`InteractionType::response_types`].
pub fn check_response_type(
    interaction: InteractionType,
    kind: ResponseType,
) -> Result<ResponseType, ModelError> {
    if interaction.allows(kind) {
        Ok(kind.normalize())
    } else {
        tracing::warn!("{kind:?} is not a legal response to a {interaction:?} interaction");
        Err(ModelError::InvalidResponseType {
            interaction,
            response: kind,
        })
    }
}

bitflags::bitflags! {
    /// The flags for an interaction response message.
    ///
    /// [Discord docs](https://discord.com/developers/docs/resources/channel#message-object-message-flags)
    /// ([only some are valid in this context](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-response-object-messages))
    #[derive(Copy, Clone, Default, Debug, Eq, Hash, PartialEq)]
    pub struct InteractionResponseFlags: u64 {
        /// Do not include any embeds when serializing this message.
        const SUPPRESS_EMBEDS = 1 << 2;
        /// Interaction message will only be visible to sender and will
        /// be quickly deleted.
        const EPHEMERAL = 1 << 6;
        /// Does not trigger push notifications or desktop notifications.
        const SUPPRESS_NOTIFICATIONS = 1 << 12;
    }
}

bitflags_serde!(InteractionResponseFlags: u64);

/// An interaction the application can respond to.
///
/// Each interaction category implements this once, supplying its [`InteractionType`] as
/// [`Self::KIND`]. The legal response kinds follow from it, see
/// [`InteractionType::response_types`], and every builder handed out through this trait is
/// tagged with a kind from that set.
///
/// Only one initial response can be sent per interaction. Sending a second one is rejected by
/// Discord, which surfaces as an [`Error::Http`] for which
/// [`HttpError::is_already_acknowledged`] returns `true`.
///
/// [`Error::Http`]: crate::Error::Http
/// [`HttpError::is_already_acknowledged`]: crate::http::HttpError::is_already_acknowledged
#[async_trait::async_trait]
pub trait RespondableInteraction: Sync {
    /// The category of the interaction.
    const KIND: InteractionType;

    /// Id of the interaction.
    fn id(&self) -> InteractionId;

    /// Id of the application this interaction is for.
    fn application_id(&self) -> ApplicationId;

    /// A continuation token for responding to the interaction.
    fn token(&self) -> &str;

    /// The response kinds legal for this interaction.
    fn response_types(&self) -> &'static [ResponseType] {
        Self::KIND.response_types()
    }

    /// Checks that `kind` may answer this interaction.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidResponseType`] if it may not.
    fn check_response_type(&self, kind: ResponseType) -> Result<ResponseType, ModelError> {
        check_response_type(Self::KIND, kind)
    }

    /// Requests a message builder of the given kind from `factory`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidResponseType`] if `kind` may not answer this interaction. The
    /// factory is not called in that case.
    fn message_builder<F>(
        &self,
        factory: &F,
        kind: ResponseType,
    ) -> Result<InteractionMessageBuilder, ModelError>
    where
        F: InteractionBuilderFactory + ?Sized,
    {
        let kind = self.check_response_type(kind)?;
        Ok(factory.interaction_message_builder(kind))
    }

    /// Requests a deferred builder of the given kind from `factory`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidResponseType`] if `kind` may not answer this interaction. The
    /// factory is not called in that case.
    fn deferred_builder<F>(
        &self,
        factory: &F,
        kind: ResponseType,
    ) -> Result<InteractionDeferredBuilder, ModelError>
    where
        F: InteractionBuilderFactory + ?Sized,
    {
        let kind = self.check_response_type(kind)?;
        Ok(factory.interaction_deferred_builder(kind))
    }

    /// Sends the initial response to the interaction.
    ///
    /// **Note**: Message contents must be under 2000 unicode code points.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::Model`] if the response kind is not legal for this interaction or the
    /// message content is too long. May also return an [`Error::Http`] if the API returns an
    /// error, such as when the interaction was already acknowledged.
    #[cfg(feature = "http")]
    async fn create_initial_response<B>(&self, http: &Http, builder: &B) -> Result<()>
    where
        B: InteractionResponseBuilder + Sync,
    {
        self.check_response_type(builder.kind())?;
        builder.check()?;

        http.create_interaction_response(self.id(), self.token(), builder).await
    }

    /// Gets the initial interaction response.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::Http`] if there is no interaction response.
    #[cfg(feature = "http")]
    async fn get_initial_response(&self, http: &Http) -> Result<Message> {
        http.get_original_interaction_response(self.token()).await
    }

    /// Edits the initial interaction response. Does not work for ephemeral messages.
    ///
    /// **Note**: Message contents must be under 2000 unicode code points.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::Model`] if the message content is too long. May also return an
    /// [`Error::Http`] if the API returns an error, or an [`Error::Json`] if there is an error in
    /// deserializing the API response.
    #[cfg(feature = "http")]
    async fn edit_initial_response(
        &self,
        http: &Http,
        builder: EditInteractionResponse,
    ) -> Result<Message> {
        builder.check()?;
        http.edit_original_interaction_response(self.token(), &builder).await
    }

    /// Deletes the initial interaction response.
    ///
    /// # Errors
    ///
    /// May return [`Error::Http`] if the API returns an error, such as if the response was
    /// already deleted.
    #[cfg(feature = "http")]
    async fn delete_initial_response(&self, http: &Http) -> Result<()> {
        http.delete_original_interaction_response(self.token()).await
    }

    /// Creates a followup message. This is how the content of a deferred response is delivered.
    ///
    /// **Note**: Message contents must be under 2000 unicode code points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Model`] if the content is too long. May also return [`Error::Http`] if
    /// the API returns an error, or [`Error::Json`] if there is an error in deserializing the
    /// response.
    #[cfg(feature = "http")]
    async fn create_followup(
        &self,
        http: &Http,
        builder: CreateInteractionResponseFollowup,
    ) -> Result<Message> {
        builder.check()?;
        http.create_followup_message(self.token(), &builder).await
    }

    /// Edits a followup message.
    ///
    /// **Note**: Message contents must be under 2000 unicode code points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Model`] if the content is too long. May also return [`Error::Http`] if
    /// the API returns an error, or [`Error::Json`] if there is an error in deserializing the
    /// response.
    #[cfg(feature = "http")]
    async fn edit_followup(
        &self,
        http: &Http,
        message_id: MessageId,
        builder: CreateInteractionResponseFollowup,
    ) -> Result<Message> {
        builder.check()?;
        http.edit_followup_message(self.token(), message_id, &builder).await
    }

    /// Deletes a followup message.
    ///
    /// # Errors
    ///
    /// May return [`Error::Http`] if the API returns an error, such as if the message was
    /// already deleted.
    #[cfg(feature = "http")]
    async fn delete_followup(&self, http: &Http, message_id: MessageId) -> Result<()> {
        http.delete_followup_message(self.token(), message_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::{assert_json, json};

    #[test]
    fn response_type_wire_values() {
        assert_json(&ResponseType::MessageCreate, json!(4));
        assert_json(&ResponseType::DeferredMessageCreate, json!(5));
        assert_json(&ResponseType::Unknown(42), json!(42));
        assert_json(&InteractionType::Modal, json!(5));
    }

    #[test]
    fn modal_accepts_only_message_create_kinds() {
        assert_eq!(
            InteractionType::Modal.response_types(),
            &[ResponseType::MessageCreate, ResponseType::DeferredMessageCreate]
        );

        for kind in [
            ResponseType::Pong,
            ResponseType::DeferredMessageUpdate,
            ResponseType::MessageUpdate,
            ResponseType::AutocompleteResult,
            ResponseType::Modal,
            ResponseType::Unknown(3),
        ] {
            assert_eq!(
                check_response_type(InteractionType::Modal, kind),
                Err(ModelError::InvalidResponseType {
                    interaction: InteractionType::Modal,
                    response: kind,
                })
            );
        }
    }

    #[test]
    fn legal_kinds_per_category() {
        assert!(InteractionType::Ping.allows(ResponseType::Pong));
        assert!(!InteractionType::Ping.allows(ResponseType::MessageCreate));
        assert!(InteractionType::Command.allows(ResponseType::Modal));
        assert!(!InteractionType::Command.allows(ResponseType::MessageUpdate));
        assert!(InteractionType::Component.allows(ResponseType::DeferredMessageUpdate));
        assert!(InteractionType::Autocomplete.allows(ResponseType::AutocompleteResult));
        assert!(InteractionType::Unknown(9).response_types().is_empty());

        assert_eq!(
            check_response_type(InteractionType::Component, ResponseType::MessageUpdate),
            Ok(ResponseType::MessageUpdate)
        );
    }

    #[test]
    fn unknown_kinds_are_judged_by_wire_value() {
        let raw = ResponseType::Unknown(4);
        assert_json(&raw, json!(4));

        assert!(InteractionType::Modal.allows(raw));
        assert_eq!(
            check_response_type(InteractionType::Modal, raw),
            Ok(ResponseType::MessageCreate)
        );
        assert_eq!(ResponseType::Unknown(5).normalize(), ResponseType::DeferredMessageCreate);
        assert_eq!(ResponseType::Unknown(42).normalize(), ResponseType::Unknown(42));
        assert!(!InteractionType::Modal.allows(ResponseType::Unknown(7)));
    }

    #[test]
    fn deferred_kinds() {
        assert!(ResponseType::DeferredMessageCreate.is_deferred());
        assert!(ResponseType::DeferredMessageUpdate.is_deferred());
        assert!(!ResponseType::MessageCreate.is_deferred());
    }
}
