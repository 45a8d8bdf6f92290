//! A collection of newtypes defining type-strong IDs.

use std::fmt;
use std::num::{NonZeroU64, ParseIntError};
use std::str::FromStr;

use serde::de::{Deserialize, Deserializer, Error as DeError};
use serde::ser::{Serialize, Serializer};

use super::utils::StrOrInt;
use super::Timestamp;

macro_rules! id_u64 {
    ($($name:ident;)*) => {
        $(
            impl $name {
                /// Creates a new Id from a u64
                ///
                /// # Panics
                /// Panics if `id` is zero.
                #[inline]
                #[must_use]
                #[track_caller]
                pub const fn new(id: u64) -> Self {
                    match NonZeroU64::new(id) {
                        Some(inner) => Self(inner),
                        None => panic!(concat!(
                            "Attempted to call ",
                            stringify!($name),
                            "::new with invalid (0) value"
                        )),
                    }
                }

                /// Retrieves the inner `id` as a [`u64`].
                #[inline]
                #[must_use]
                pub const fn get(self) -> u64 {
                    self.0.get()
                }

                #[doc = concat!("Retrieves the time that the ", stringify!($name), " was created.")]
                #[must_use]
                pub fn created_at(&self) -> Timestamp {
                    Timestamp::from_discord_id(self.get())
                }
            }

            impl AsRef<$name> for $name {
                fn as_ref(&self) -> &Self {
                    self
                }
            }

            impl<'a> From<&'a $name> for $name {
                fn from(id: &'a $name) -> $name {
                    *id
                }
            }

            impl From<NonZeroU64> for $name {
                fn from(id: NonZeroU64) -> $name {
                    $name(id)
                }
            }

            impl PartialEq<u64> for $name {
                fn eq(&self, u: &u64) -> bool {
                    self.get() == *u
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(&self.0, f)
                }
            }

            impl From<$name> for NonZeroU64 {
                fn from(id: $name) -> NonZeroU64 {
                    id.0
                }
            }

            impl From<$name> for u64 {
                fn from(id: $name) -> u64 {
                    id.get()
                }
            }

            impl FromStr for $name {
                type Err = ParseIdError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    let id = s.parse::<u64>().map_err(ParseIdError::Int)?;
                    NonZeroU64::new(id).map(Self).ok_or(ParseIdError::Zero)
                }
            }

            // Discord sends snowflakes as strings, so they are serialized back the same way.
            impl Serialize for $name {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.collect_str(&self.0)
                }
            }

            impl<'de> Deserialize<'de> for $name {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let id = StrOrInt::deserialize(deserializer)?.parse().map_err(DeError::custom)?;
                    NonZeroU64::new(id)
                        .map(Self)
                        .ok_or_else(|| DeError::custom(concat!(stringify!($name), " cannot be zero")))
                }
            }
        )*
    }
}

/// An identifier for an Application.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ApplicationId(NonZeroU64);

/// An identifier for a Channel
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ChannelId(NonZeroU64);

/// An identifier for an Emoji
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EmojiId(NonZeroU64);

/// An identifier for a Guild
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct GuildId(NonZeroU64);

/// An identifier for an Integration
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct IntegrationId(NonZeroU64);

/// An identifier for an interaction.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct InteractionId(NonZeroU64);

/// An identifier for a Message
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct MessageId(NonZeroU64);

/// An identifier for a Role
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct RoleId(NonZeroU64);

/// An identifier for a User
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct UserId(NonZeroU64);

id_u64! {
    ApplicationId;
    ChannelId;
    EmojiId;
    GuildId;
    IntegrationId;
    InteractionId;
    MessageId;
    RoleId;
    UserId;
}

/// Signifies the failure to parse an Id from a string.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ParseIdError {
    /// The string was not an integer.
    Int(ParseIntError),
    /// The string was `"0"`, which is never a valid snowflake.
    Zero,
}

impl std::error::Error for ParseIdError {}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(inner) => fmt::Display::fmt(inner, f),
            Self::Zero => f.write_str("Id cannot be zero"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GuildId, ParseIdError, UserId};
    use crate::json::{assert_json, json};

    #[test]
    fn test_created_at() {
        // The id is from discord's snowflake docs
        let id = GuildId::new(175928847299117063);
        assert_eq!(id.created_at().unix_timestamp(), 1462015105);
        assert_eq!(id.created_at().to_string(), "2016-04-30T11:18:25.796Z");
    }

    #[test]
    fn test_id_serde() {
        let id = UserId::new(175928847299117063);
        assert_json(&id, json!("175928847299117063"));

        let from_int: UserId = crate::json::from_value(json!(175928847299117063_u64)).unwrap();
        assert_eq!(from_int, id);

        assert!(crate::json::from_value::<UserId>(json!("0")).is_err());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("424242".parse::<GuildId>(), Ok(GuildId::new(424242)));
        assert_eq!("0".parse::<GuildId>(), Err(ParseIdError::Zero));
        assert!(matches!("abc".parse::<GuildId>(), Err(ParseIdError::Int(_))));
    }
}
