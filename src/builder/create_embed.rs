//! Developer note:
//!
//! This is a set of embed builders for rich embeds.
//!
//! These are used in the [`InteractionMessageBuilder::add_embed`] and
//! [`CreateInteractionResponseFollowup::add_embed`] methods, both as part of builders.
//!
//! The only builder that should be exposed is [`CreateEmbed`]. The rest of these have no real
//! reason for being exposed, but are for completeness' sake.
//!
//! Documentation for embeds can be found [here].
//!
//! [`InteractionMessageBuilder::add_embed`]: super::InteractionMessageBuilder::add_embed
//! [`CreateInteractionResponseFollowup::add_embed`]: super::CreateInteractionResponseFollowup::add_embed
//! [here]: https://discord.com/developers/docs/resources/channel#embed-object

use crate::model::prelude::*;

/// A builder to create an embed in a message
///
/// [Discord docs](https://discord.com/developers/docs/resources/channel#embed-object)
#[derive(Clone, Debug, Serialize)]
#[must_use]
pub struct CreateEmbed {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<Timestamp>,
    #[serde(rename = "color")]
    #[serde(skip_serializing_if = "Option::is_none")]
    colour: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    footer: Option<CreateEmbedFooter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<EmbedField>,
}

impl CreateEmbed {
    /// Equivalent to [`Self::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the colour of the left-hand side of the embed, as a `0xRRGGBB` value.
    pub fn colour(mut self, colour: u32) -> Self {
        self.colour = Some(colour);
        self
    }

    /// Set the description of the embed.
    ///
    /// **Note**: This can't be longer than 4096 characters.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set a field. Note that this will not overwrite other fields, and will add to them.
    ///
    /// **Note**: Maximum amount of characters you can put is 256 in a field name and 1024 in a
    /// field value.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(EmbedField::new(name, value, inline));
        self
    }

    /// Adds multiple fields at once.
    ///
    /// This is sugar to reduce the need of calling [`Self::field`] manually multiple times.
    pub fn fields<N, V>(mut self, fields: impl IntoIterator<Item = (N, V, bool)>) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        let fields =
            fields.into_iter().map(|(name, value, inline)| EmbedField::new(name, value, inline));

        self.fields.extend(fields);
        self
    }

    /// Set the footer of the embed.
    ///
    /// Refer to the documentation for [`CreateEmbedFooter`] for more information.
    pub fn footer(mut self, footer: CreateEmbedFooter) -> Self {
        self.footer = Some(footer);
        self
    }

    /// Set the timestamp.
    ///
    /// See the documentation of [`Timestamp`] for more information.
    ///
    /// # Examples
    ///
    /// Passing a string timestamp:
    ///
    /// ```rust
    /// # use parley::builder::CreateEmbed;
    /// # use parley::model::Timestamp;
    /// let timestamp: Timestamp = "2004-06-08T16:04:23Z".parse().expect("Invalid timestamp!");
    /// let embed = CreateEmbed::new().title("hello").timestamp(timestamp);
    /// ```
    pub fn timestamp<T: Into<Timestamp>>(mut self, timestamp: T) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Set the title of the embed.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the URL to direct to when clicking on the title.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Number of characters Discord counts towards the embed limit.
    #[must_use]
    pub fn get_length(&self) -> usize {
        let mut length = 0;

        if let Some(description) = &self.description {
            length += description.chars().count();
        }

        for field in &self.fields {
            length += field.name.chars().count();
            length += field.value.chars().count();
        }

        if let Some(footer) = &self.footer {
            length += footer.text.chars().count();
        }

        if let Some(title) = &self.title {
            length += title.chars().count();
        }

        length
    }
}

impl Default for CreateEmbed {
    /// Creates a builder with default values, setting the `type` to `rich`.
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            description: None,
            timestamp: None,
            kind: "rich",
            colour: None,
            footer: None,
            title: None,
            url: None,
        }
    }
}

impl From<Embed> for CreateEmbed {
    fn from(embed: Embed) -> Self {
        Self {
            fields: embed.fields,
            description: embed.description,
            timestamp: embed.timestamp,
            kind: "rich",
            colour: embed.colour,
            footer: embed.footer.map(Into::into),
            title: embed.title,
            url: embed.url,
        }
    }
}

/// A builder to create the footer data for an embed. See [`CreateEmbed::footer`]
#[derive(Clone, Debug, Serialize)]
#[must_use]
pub struct CreateEmbedFooter {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon_url: Option<String>,
}

impl CreateEmbedFooter {
    /// Creates a new footer object with the given text, leaving all other fields empty.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon_url: None,
        }
    }

    /// Set the footer's text, replacing the current value as set in [`Self::new`].
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the icon URL's value. This only supports HTTP(S).
    pub fn icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = Some(icon_url.into());
        self
    }
}

impl From<EmbedFooter> for CreateEmbedFooter {
    fn from(footer: EmbedFooter) -> Self {
        Self {
            text: footer.text,
            icon_url: footer.icon_url,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::json::{assert_serializes, json};

    #[test]
    fn test_from_embed() {
        let embed = Embed {
            colour: Some(0xff0011),
            description: Some("This is a test description".to_string()),
            fields: vec![
                EmbedField::new("a", "b", false),
                EmbedField::new("c", "d", true),
            ],
            footer: Some(EmbedFooter::new("This is a hello world")),
            timestamp: None,
            title: Some("hakase".to_string()),
            url: Some("https://i.imgur.com/XfWpfCV.gif".to_string()),
        };

        let builder = CreateEmbed::from(embed)
            .colour(0xff0011)
            .description("This is a hakase description")
            .title("still a hakase")
            .url("https://i.imgur.com/XfWpfCV.gif");

        assert_serializes(
            &builder,
            json!({
                "color": 0xff0011,
                "description": "This is a hakase description",
                "title": "still a hakase",
                "type": "rich",
                "url": "https://i.imgur.com/XfWpfCV.gif",
                "fields": [
                    {"inline": false, "name": "a", "value": "b"},
                    {"inline": true, "name": "c", "value": "d"},
                ],
                "footer": {"text": "This is a hello world"},
            }),
        );
    }

    #[test]
    fn length_counts_text() {
        let embed = CreateEmbed::new()
            .title("four")
            .description("five!")
            .field("ab", "cd", false)
            .footer(CreateEmbedFooter::new("xyz").icon_url("https://example.com/icon.png"));

        assert_eq!(embed.get_length(), 4 + 5 + 2 + 2 + 3);
    }
}
