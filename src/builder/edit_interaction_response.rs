#[cfg(feature = "http")]
use super::check_lengths;
use super::CreateEmbed;
#[cfg(feature = "http")]
use crate::internal::prelude::*;
#[cfg(feature = "http")]
use crate::model::ModelError;

/// A builder to edit the original response of an interaction.
///
/// Fields left unset are left untouched by Discord.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#edit-original-interaction-response).
#[derive(Clone, Debug, Default, Serialize)]
#[must_use]
pub struct EditInteractionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    embeds: Option<Vec<CreateEmbed>>,
}

impl EditInteractionResponse {
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

    /// Adds an embed for the message.
    ///
    /// Embeds from the original message are reset when adding new embeds and must be re-added.
    pub fn add_embed(mut self, embed: CreateEmbed) -> Self {
        self.embeds.get_or_insert_with(Vec::new).push(embed);
        self
    }

    /// Sets the embeds for the message, replacing the original ones.
    ///
    /// Passing an empty list removes every embed.
    pub fn embeds(mut self, embeds: Vec<CreateEmbed>) -> Self {
        self.embeds = Some(embeds);
        self
    }

    #[cfg(feature = "http")]
    pub(crate) fn check(&self) -> StdResult<(), ModelError> {
        check_lengths(self.content.as_deref(), self.embeds.as_deref().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::{assert_serializes, json};

    #[test]
    fn only_set_fields_are_sent() {
        assert_serializes(&EditInteractionResponse::new(), json!({}));
        assert_serializes(
            &EditInteractionResponse::new().content("done").embeds(Vec::new()),
            json!({"content": "done", "embeds": []}),
        );
    }

    #[test]
    #[cfg(feature = "http")]
    fn too_many_embeds() {
        let builder = EditInteractionResponse::new().embeds(vec![CreateEmbed::new(); 11]);
        assert!(builder.check().unwrap_err().is_too_large());
    }
}
