//! A set of constants used by the library.

/// The maximum length of the textual size of an embed.
pub const EMBED_MAX_LENGTH: usize = 6000;

/// The maximum number of embeds in a message.
pub const EMBED_MAX_COUNT: usize = 10;

/// The maximum unicode code points allowed within a message by Discord.
pub const MESSAGE_CODE_LIMIT: usize = 2000;

/// The maximum length of an emoji name.
pub const EMOJI_NAME_MAX_LENGTH: usize = 32;

/// The minimum length of an emoji name.
pub const EMOJI_NAME_MIN_LENGTH: usize = 2;

/// The [UserAgent] sent along with every request.
///
/// [UserAgent]: https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers/User-Agent
pub const USER_AGENT: &str = concat!(
    "DiscordBot (https://github.com/parley-rs/parley, ",
    env!("CARGO_PKG_VERSION"),
    ")"
);

/// JSON error codes Discord returns in the body of an unsuccessful request.
///
/// [Discord docs](https://discord.com/developers/docs/topics/opcodes-and-status-codes#json-json-error-codes).
pub mod json_error_codes {
    /// Unknown emoji.
    pub const UNKNOWN_EMOJI: isize = 10014;
    /// Unknown interaction, usually because the interaction token expired.
    pub const UNKNOWN_INTERACTION: isize = 10062;
    /// An initial response was already sent for this interaction.
    pub const INTERACTION_ALREADY_ACKNOWLEDGED: isize = 40060;
    /// Invalid form body, or an invalid `Content-Type`.
    pub const INVALID_FORM_BODY: isize = 50035;
}
