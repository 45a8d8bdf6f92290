use std::borrow::Cow;

use crate::model::id::*;

/// A macro for defining routes. Takes as input a list of route definitions, and generates a
/// definition for the `Route` enum and implements methods on it.
macro_rules! routes {
    ($lt:lifetime, {
        $(
            $name:ident $({ $($field_name:ident: $field_type:ty),* })?,
            $path:expr;
        )+
    }) => {
        #[derive(Clone, Copy, Debug)]
        pub enum Route<$lt> {
            $(
                $name $({ $($field_name: $field_type),* })?,
            )+
        }

        impl<$lt> Route<$lt> {
            #[must_use]
            pub fn path(self) -> Cow<'static, str> {
                match self {
                    $(
                        Self::$name $({ $($field_name),* })? => $path.into(),
                    )+
                }
            }
        }
    };
}

// This macro takes as input a list of route definitions, represented in the following way:
// 1. The first line defines an enum variant representing an endpoint.
// 2. The second line provides the url for that endpoint.
routes! ('a, {
    Guild { guild_id: GuildId },
    api!("/guilds/{}", guild_id);

    GuildBans { guild_id: GuildId },
    api!("/guilds/{}/bans", guild_id);

    GuildEmoji { guild_id: GuildId, emoji_id: EmojiId },
    api!("/guilds/{}/emojis/{}", guild_id, emoji_id);

    GuildEmojis { guild_id: GuildId },
    api!("/guilds/{}/emojis", guild_id);

    GuildMember { guild_id: GuildId, user_id: UserId },
    api!("/guilds/{}/members/{}", guild_id, user_id);

    InteractionResponse { interaction_id: InteractionId, token: &'a str },
    api!("/interactions/{}/{}/callback", interaction_id, token);

    WebhookFollowupMessage { application_id: ApplicationId, token: &'a str, message_id: MessageId },
    api!("/webhooks/{}/{}/messages/{}", application_id, token, message_id);

    WebhookFollowupMessages { application_id: ApplicationId, token: &'a str },
    api!("/webhooks/{}/{}", application_id, token);

    WebhookOriginalInteractionResponse { application_id: ApplicationId, token: &'a str },
    api!("/webhooks/{}/{}/messages/@original", application_id, token);
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths() {
        let route = Route::InteractionResponse {
            interaction_id: InteractionId::new(846962727232438282),
            token: "aW50ZXJhY3Rpb24",
        };
        assert_eq!(
            route.path(),
            "https://discord.com/api/v10/interactions/846962727232438282/aW50ZXJhY3Rpb24/callback"
        );

        let route = Route::WebhookOriginalInteractionResponse {
            application_id: ApplicationId::new(11),
            token: "abc",
        };
        assert_eq!(route.path(), "https://discord.com/api/v10/webhooks/11/abc/messages/@original");
    }
}
