//! Error enum definition wrapping potential model implementation errors.

use std::error::Error as StdError;
use std::fmt;

use super::application::{InteractionType, ResponseType};
use crate::constants;

/// An enum containing the maximum lengths and sizes Discord enforces on values the library sends.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Maximum {
    /// Total number of characters across all embeds of a message.
    EmbedLength,
    /// Number of embeds attached to a message.
    EmbedCount,
    /// Number of unicode code points in a message's content.
    MessageLength,
    /// Number of characters in an emoji name.
    EmojiNameLength,
}

impl Maximum {
    pub(crate) fn check_overflow(self, value: usize) -> Result<(), Error> {
        let max = self.value();
        if value > max {
            Err(Error::TooLarge {
                maximum: self,
                value,
            })
        } else {
            Ok(())
        }
    }

    pub(crate) fn value(self) -> usize {
        match self {
            Self::EmbedLength => constants::EMBED_MAX_LENGTH,
            Self::EmbedCount => constants::EMBED_MAX_COUNT,
            Self::MessageLength => constants::MESSAGE_CODE_LIMIT,
            Self::EmojiNameLength => constants::EMOJI_NAME_MAX_LENGTH,
        }
    }
}

impl fmt::Display for Maximum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmbedLength => f.write_str("Embed length"),
            Self::EmbedCount => f.write_str("Embed count"),
            Self::MessageLength => f.write_str("Message length"),
            Self::EmojiNameLength => f.write_str("Emoji name length"),
        }
    }
}

/// An enum containing the minimum lengths Discord enforces on values the library sends.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Minimum {
    /// Number of characters in an emoji name.
    EmojiNameLength,
}

impl Minimum {
    #[cfg(feature = "http")]
    pub(crate) fn check_underflow(self, value: usize) -> Result<(), Error> {
        let min = self.value();
        if value < min {
            Err(Error::TooSmall {
                minimum: self,
                value,
            })
        } else {
            Ok(())
        }
    }

    pub(crate) fn value(self) -> usize {
        match self {
            Self::EmojiNameLength => constants::EMOJI_NAME_MIN_LENGTH,
        }
    }
}

impl fmt::Display for Minimum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmojiNameLength => f.write_str("Emoji name length"),
        }
    }
}

/// An error returned from the [`model`] module.
///
/// This is always wrapped within the library's [`Error::Model`] variant.
///
/// # Examples
///
/// Matching an [`Error`] with this variant would look something like the following for the
/// [`RespondableInteraction::create_initial_response`] method, where a deferred update is sent in
/// answer to a modal submission:
///
/// ```rust,no_run
/// # #[cfg(feature = "http")]
/// # async fn run(http: &parley::http::Http, interaction: parley::model::application::ModalInteraction) {
/// use parley::builder::InteractionBuilderFactory;
/// use parley::model::application::{RespondableInteraction, ResponseType};
/// use parley::model::ModelError;
/// use parley::Error;
///
/// let response = http.interaction_deferred_builder(ResponseType::DeferredMessageUpdate);
///
/// match interaction.create_initial_response(http, &response).await {
///     Ok(()) => {},
///     Err(Error::Model(ModelError::InvalidResponseType {
///         interaction,
///         response,
///     })) => {
///         println!("{response:?} cannot answer a {interaction:?} interaction");
///     },
///     Err(why) => {
///         println!("Unexpected error: {why:?}");
///     },
/// }
/// # }
/// ```
///
/// [`Error`]: crate::Error
/// [`Error::Model`]: crate::Error::Model
/// [`model`]: crate::model
/// [`RespondableInteraction::create_initial_response`]: super::application::RespondableInteraction::create_initial_response
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A response kind was requested that is not legal for the category of interaction it would
    /// answer, such as a deferred message update in response to a modal submission.
    ///
    /// The legal kinds per category are listed by [`InteractionType::response_types`].
    InvalidResponseType { interaction: InteractionType, response: ResponseType },
    /// A value went over Discord's maximum.
    TooLarge { maximum: Maximum, value: usize },
    /// A value went under Discord's minimum.
    TooSmall { minimum: Minimum, value: usize },
}

impl Error {
    /// Returns true if the error was caused by a value going over a maximum.
    #[must_use]
    pub fn is_too_large(&self) -> bool {
        matches!(self, Self::TooLarge { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidResponseType {
                ..
            } => f.write_str("Response type is not valid for this kind of interaction."),
            Self::TooLarge {
                maximum,
                value,
            } => {
                write!(f, "{maximum} is over the limit of {} ({value} given).", maximum.value())
            },
            Self::TooSmall {
                minimum,
                value,
            } => {
                write!(f, "{minimum} is under the minimum of {} ({value} given).", minimum.value())
            },
        }
    }
}

impl StdError for Error {}
