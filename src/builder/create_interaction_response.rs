use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::{check_lengths, CreateEmbed, InteractionResponseBuilder};
use crate::internal::prelude::*;
use crate::model::application::{InteractionResponseFlags, ResponseType};
use crate::model::ModelError;

/// Builds the initial response to an interaction when that response carries a message.
///
/// Obtained from an [`InteractionBuilderFactory`], already tagged with the response kind it was
/// requested for.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-response-object).
///
/// [`InteractionBuilderFactory`]: super::InteractionBuilderFactory
#[derive(Clone, Debug, Serialize)]
#[must_use]
pub struct InteractionMessageBuilder {
    #[serde(rename = "type")]
    kind: ResponseType,
    data: InteractionMessageData,
}

#[derive(Clone, Debug, Default, Serialize)]
struct InteractionMessageData {
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    embeds: Vec<CreateEmbed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    flags: Option<InteractionResponseFlags>,
    #[serde(skip_serializing_if = "crate::model::utils::is_false")]
    tts: bool,
}

impl InteractionMessageBuilder {
    /// Creates an empty builder for a response of the given kind.
    pub fn new(kind: ResponseType) -> Self {
        Self {
            kind,
            data: InteractionMessageData::default(),
        }
    }

    /// The response kind this builder was created for.
    #[must_use]
    pub fn kind(&self) -> ResponseType {
        self.kind
    }

    /// Set the content of the message.
    ///
    /// **Note**: Message contents must be under 2000 unicode code points.
    #[inline]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.data.content = Some(content.into());
        self
    }

    /// The content set so far, if any.
    #[must_use]
    pub fn get_content(&self) -> Option<&str> {
        self.data.content.as_deref()
    }

    /// Adds an embed to the message.
    ///
    /// Calling this while editing a message will overwrite existing embeds.
    pub fn add_embed(mut self, embed: CreateEmbed) -> Self {
        self.data.embeds.push(embed);
        self
    }

    /// Sets a list of embeds to include in the message.
    ///
    /// Calling this multiple times will overwrite the embed list. To append embeds, call
    /// [`Self::add_embed`] instead.
    pub fn embeds(mut self, embeds: Vec<CreateEmbed>) -> Self {
        self.data.embeds = embeds;
        self
    }

    /// Sets the flags for the message.
    pub fn flags(mut self, flags: InteractionResponseFlags) -> Self {
        self.data.flags = Some(flags);
        self
    }

    /// Adds or removes the ephemeral flag.
    pub fn ephemeral(mut self, ephemeral: bool) -> Self {
        let mut flags = self.data.flags.unwrap_or_else(InteractionResponseFlags::empty);
        flags.set(InteractionResponseFlags::EPHEMERAL, ephemeral);

        self.data.flags = Some(flags);
        self
    }

    /// Set whether the message is text-to-speech.
    ///
    /// Think carefully before setting this to `true`.
    ///
    /// Defaults to `false`.
    pub fn tts(mut self, tts: bool) -> Self {
        self.data.tts = tts;
        self
    }
}

impl InteractionResponseBuilder for InteractionMessageBuilder {
    fn kind(&self) -> ResponseType {
        self.kind
    }

    fn check(&self) -> StdResult<(), ModelError> {
        check_lengths(self.data.content.as_deref(), &self.data.embeds)
    }
}

/// Builds an initial response that acknowledges an interaction without a message.
///
/// The message itself is supplied later by editing the original response.
#[derive(Clone, Debug)]
#[must_use]
pub struct InteractionDeferredBuilder {
    kind: ResponseType,
    flags: Option<InteractionResponseFlags>,
}

impl InteractionDeferredBuilder {
    /// Creates a builder for a response of the given kind.
    pub fn new(kind: ResponseType) -> Self {
        Self {
            kind,
            flags: None,
        }
    }

    /// The response kind this builder was created for.
    #[must_use]
    pub fn kind(&self) -> ResponseType {
        self.kind
    }

    /// Sets the flags of the message that will follow.
    pub fn flags(mut self, flags: InteractionResponseFlags) -> Self {
        self.flags = Some(flags);
        self
    }

    /// Makes the message that will follow visible only to the invoking user.
    pub fn ephemeral(mut self, ephemeral: bool) -> Self {
        let mut flags = self.flags.unwrap_or_else(InteractionResponseFlags::empty);
        flags.set(InteractionResponseFlags::EPHEMERAL, ephemeral);

        self.flags = Some(flags);
        self
    }
}

impl Serialize for InteractionDeferredBuilder {
    fn serialize<S: Serializer>(&self, serializer: S) -> StdResult<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Data {
            flags: InteractionResponseFlags,
        }

        let len = if self.flags.is_some() { 2 } else { 1 };
        let mut state = serializer.serialize_struct("InteractionDeferredBuilder", len)?;
        state.serialize_field("type", &self.kind)?;

        if let Some(flags) = self.flags {
            state.serialize_field("data", &Data {
                flags,
            })?;
        }

        state.end()
    }
}

impl InteractionResponseBuilder for InteractionDeferredBuilder {
    fn kind(&self) -> ResponseType {
        self.kind
    }

    fn check(&self) -> StdResult<(), ModelError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CreateEmbedFooter;
    use crate::json::{assert_serializes, json};

    #[test]
    fn message_shape() {
        let builder = InteractionMessageBuilder::new(ResponseType::MessageCreate)
            .content("Thanks!")
            .ephemeral(true);

        assert_serializes(
            &builder,
            json!({"type": 4, "data": {"content": "Thanks!", "flags": 64}}),
        );
    }

    #[test]
    fn deferred_shape() {
        let plain = InteractionDeferredBuilder::new(ResponseType::DeferredMessageCreate);
        assert_serializes(&plain, json!({"type": 5}));

        let ephemeral = plain.ephemeral(true);
        assert_serializes(&ephemeral, json!({"type": 5, "data": {"flags": 64}}));
    }

    #[test]
    fn ephemeral_can_be_cleared() {
        let builder = InteractionMessageBuilder::new(ResponseType::MessageCreate)
            .flags(InteractionResponseFlags::EPHEMERAL | InteractionResponseFlags::SUPPRESS_EMBEDS)
            .ephemeral(false);

        assert_serializes(&builder, json!({"type": 4, "data": {"flags": 4}}));
    }

    #[test]
    fn limits() {
        let ok = InteractionMessageBuilder::new(ResponseType::MessageCreate).content("a".repeat(2000));
        assert!(ok.check().is_ok());

        let long = ok.content("a".repeat(2001));
        assert!(long.check().unwrap_err().is_too_large());

        let embed = CreateEmbed::new().footer(CreateEmbedFooter::new("x".repeat(3500)));
        let embeds = InteractionMessageBuilder::new(ResponseType::MessageCreate)
            .add_embed(embed.clone())
            .add_embed(embed);
        assert!(embeds.check().unwrap_err().is_too_large());

        let many = InteractionMessageBuilder::new(ResponseType::MessageCreate)
            .embeds(vec![CreateEmbed::new(); 11]);
        assert!(many.check().unwrap_err().is_too_large());
    }
}
