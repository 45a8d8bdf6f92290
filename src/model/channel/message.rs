//! Models relating to Discord channels.

use std::fmt;

use crate::constants;
use crate::model::prelude::*;

/// A representation of a message over a guild's text channel, a group, or a private channel.
///
/// Only the parts of the message object an interaction round trip needs are kept.
///
/// [Discord docs](https://discord.com/developers/docs/resources/channel#message-object).
#[derive(Clone, Debug, Deserialize, Serialize)]
#[non_exhaustive]
pub struct Message {
    /// The unique Id of the message. Can be used to calculate the creation date of the message.
    pub id: MessageId,
    /// The Id of the [`Channel`] that the message was sent to.
    ///
    /// [`Channel`]: https://discord.com/developers/docs/resources/channel#channel-object
    pub channel_id: ChannelId,
    /// The Id of the [`Guild`] that the message was sent in. Only present for messages received
    /// over the gateway.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<GuildId>,
    /// The user that sent the message.
    pub author: User,
    /// The content of the message.
    pub content: String,
    /// Initial message creation timestamp, calculated from its Id.
    pub timestamp: Timestamp,
    /// The timestamp of the last time the message was updated, if it was.
    pub edited_timestamp: Option<Timestamp>,
    /// Array of embeds sent with the message.
    #[serde(default)]
    pub embeds: Vec<Embed>,
    /// Indicator of whether the message is pinned.
    #[serde(default)]
    pub pinned: bool,
    /// Indicator of whether the message was text-to-speech.
    #[serde(default)]
    pub tts: bool,
    /// Bit flags describing extra features of the message.
    #[serde(default)]
    pub flags: Option<MessageFlags>,
}

impl Message {
    /// Checks the length of a string to ensure that it is within Discord's maximum message length
    /// limit.
    ///
    /// Returns `None` if the message is within the limit, otherwise returns `Some` with an inner
    /// value of how many unicode code points the message is over.
    #[must_use]
    pub fn overflow_length(content: &str) -> Option<usize> {
        // Check if the content is over the maximum number of unicode code points.
        let count = content.chars().count();

        if count > constants::MESSAGE_CODE_LIMIT {
            Some(count - constants::MESSAGE_CODE_LIMIT)
        } else {
            None
        }
    }

    /// Whether the message is only visible to the user who triggered the interaction.
    #[must_use]
    pub fn is_ephemeral(&self) -> bool {
        self.flags.is_some_and(|flags| flags.contains(MessageFlags::EPHEMERAL))
    }

    /// Returns a link referencing this message. When clicked, users will jump to the message. The
    /// link will be valid for messages in either private channels or guilds.
    #[must_use]
    pub fn link(&self) -> String {
        match self.guild_id {
            Some(guild_id) => {
                format!("https://discord.com/channels/{guild_id}/{}/{}", self.channel_id, self.id)
            },
            None => format!("https://discord.com/channels/@me/{}/{}", self.channel_id, self.id),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

impl From<Message> for MessageId {
    /// Gets the Id of a [`Message`].
    fn from(message: Message) -> MessageId {
        message.id
    }
}

impl<'a> From<&'a Message> for MessageId {
    /// Gets the Id of a [`Message`].
    fn from(message: &Message) -> MessageId {
        message.id
    }
}

bitflags::bitflags! {
    /// Describes extra features of the message.
    ///
    /// [Discord docs](https://discord.com/developers/docs/resources/channel#message-object-message-flags).
    #[derive(Copy, Clone, Default, Debug, Eq, Hash, PartialEq)]
    pub struct MessageFlags: u64 {
        /// This message has been published to subscribed channels (via Channel Following).
        const CROSSPOSTED = 1 << 0;
        /// This message originated from a message in another channel (via Channel Following).
        const IS_CROSSPOST = 1 << 1;
        /// Do not include any embeds when serializing this message.
        const SUPPRESS_EMBEDS = 1 << 2;
        /// This message is only visible to the user who invoked the Interaction.
        const EPHEMERAL = 1 << 6;
        /// This message is an Interaction Response and the bot is "thinking".
        const LOADING = 1 << 7;
        /// This message will not trigger push and desktop notifications.
        const SUPPRESS_NOTIFICATIONS = 1 << 12;
    }
}

bitflags_serde!(MessageFlags: u64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::{from_value, json};

    #[test]
    fn ephemeral_followup() {
        let message: Message = from_value(json!({
            "id": "1100000000000000001",
            "channel_id": "1100000000000000002",
            "author": {"id": "1100000000000000003", "username": "parley", "avatar": null, "bot": true},
            "content": "Thanks, Alice!",
            "timestamp": "2023-05-01T12:00:00.000000+00:00",
            "edited_timestamp": null,
            "embeds": [],
            "flags": 64,
        }))
        .unwrap();

        assert!(message.is_ephemeral());
        assert!(message.author.bot);
        assert_eq!(message.to_string(), "Thanks, Alice!");
        assert_eq!(
            message.link(),
            "https://discord.com/channels/@me/1100000000000000002/1100000000000000001"
        );
    }

    #[test]
    fn overflow_length() {
        assert_eq!(Message::overflow_length("short"), None);
        assert_eq!(Message::overflow_length(&"a".repeat(2003)), Some(3));
    }
}
