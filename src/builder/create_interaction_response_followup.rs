#[cfg(feature = "http")]
use super::check_lengths;
use super::CreateEmbed;
#[cfg(feature = "http")]
use crate::internal::prelude::*;
use crate::model::channel::MessageFlags;
#[cfg(feature = "http")]
use crate::model::ModelError;

/// A builder for a followup message, sent after the initial response to an interaction.
///
/// Followups can be created for as long as the interaction token is valid.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#create-followup-message).
#[derive(Clone, Debug, Default, Serialize)]
#[must_use]
pub struct CreateInteractionResponseFollowup {
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    embeds: Vec<CreateEmbed>,
    #[serde(skip_serializing_if = "crate::model::utils::is_false")]
    tts: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    flags: Option<MessageFlags>,
}

impl CreateInteractionResponseFollowup {
    /// Equivalent to [`Self::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the content of the message.
    ///
    /// **Note**: Message contents must be under 2000 unicode code points.
    #[inline]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set whether the message is text-to-speech.
    ///
    /// Think carefully before setting this to `true`.
    ///
    /// Defaults to `false`.
    pub fn tts(mut self, tts: bool) -> Self {
        self.tts = tts;
        self
    }

    /// Adds an embed to the message.
    pub fn add_embed(mut self, embed: CreateEmbed) -> Self {
        self.embeds.push(embed);
        self
    }

    /// Adds multiple embeds to the message.
    pub fn add_embeds(mut self, embeds: impl IntoIterator<Item = CreateEmbed>) -> Self {
        self.embeds.extend(embeds);
        self
    }

    /// Sets a list of embeds to include in the message.
    ///
    /// Calling this multiple times will overwrite the embed list. To append embeds, call
    /// [`Self::add_embed`] instead.
    pub fn embeds(mut self, embeds: Vec<CreateEmbed>) -> Self {
        self.embeds = embeds;
        self
    }

    /// Sets the flags for the message.
    pub fn flags(mut self, flags: MessageFlags) -> Self {
        self.flags = Some(flags);
        self
    }

    /// Adds or removes the ephemeral flag
    pub fn ephemeral(mut self, ephemeral: bool) -> Self {
        let mut flags = self.flags.unwrap_or_else(MessageFlags::empty);
        flags.set(MessageFlags::EPHEMERAL, ephemeral);

        self.flags = Some(flags);
        self
    }

    #[cfg(feature = "http")]
    pub(crate) fn check(&self) -> StdResult<(), ModelError> {
        check_lengths(self.content.as_deref(), &self.embeds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::{assert_serializes, json};

    #[test]
    fn ephemeral_followup() {
        let builder = CreateInteractionResponseFollowup::new().content("Saved.").ephemeral(true);

        assert_serializes(&builder, json!({"content": "Saved.", "flags": 64}));
    }

    #[test]
    #[cfg(feature = "http")]
    fn followup_limits() {
        let builder = CreateInteractionResponseFollowup::new().content("Saved.");
        assert!(builder.check().is_ok());

        let builder = builder.content("a".repeat(2001));
        assert!(builder.check().unwrap_err().is_too_large());
    }
}
