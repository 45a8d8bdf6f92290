use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::{Client, ClientBuilder, Response as ReqwestResponse, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
#[cfg(feature = "tracing_instrument")]
use tracing::instrument;
use tracing::{debug, trace};

use super::request::{Request, RequestBuilder};
use super::routing::Route;
use super::{ErrorResponse, HttpError, LightMethod};
use crate::builder::{
    CreateInteractionResponseFollowup,
    EditInteractionResponse,
    InteractionBuilderFactory,
    InteractionDeferredBuilder,
    InteractionMessageBuilder,
    InteractionResponseBuilder,
};
use crate::internal::prelude::*;
use crate::json::{self, decode_resp, json};
use crate::model::error::{Maximum, Minimum};
use crate::model::prelude::*;

/// A builder implementing [`Default`] to construct a [`Http`] client.
///
/// # Examples
///
/// Create an instance of [`Http`] with a proxy and the application id set:
///
/// ```rust
/// # fn run() -> parley::Result<()> {
/// use parley::http::HttpBuilder;
/// use parley::model::id::ApplicationId;
///
/// let http = HttpBuilder::new("token")
///     .proxy("http://127.0.0.1:3000")
///     .application_id(ApplicationId::new(1))
///     .build()?;
/// #     Ok(())
/// # }
/// ```
#[must_use]
pub struct HttpBuilder {
    client: Option<Client>,
    token: SecretString,
    proxy: Option<String>,
    application_id: Option<ApplicationId>,
    timeout: Option<Duration>,
}

impl HttpBuilder {
    /// Construct a new builder to call methods on for the HTTP construction. The `token` will
    /// automatically be prefixed "Bot " if not already.
    pub fn new(token: impl AsRef<str>) -> Self {
        Self {
            client: None,
            token: SecretString::new(parse_token(token)),
            proxy: None,
            application_id: None,
            timeout: None,
        }
    }

    /// Sets the application_id to use interactions.
    pub fn application_id(mut self, application_id: ApplicationId) -> Self {
        self.application_id = Some(application_id);
        self
    }

    /// Sets a token for the bot. If the token is not prefixed "Bot ", this method will
    /// automatically do so.
    pub fn token(mut self, token: impl AsRef<str>) -> Self {
        self.token = SecretString::new(parse_token(token));
        self
    }

    /// Sets the [`reqwest::Client`]. If one isn't provided, a default one will be used.
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Sets the total timeout of a request. Ignored when a custom [`Self::client`] is given.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the proxy that Discord HTTP API requests will be passed to. This is mainly intended
    /// for something like [`twilight-http-proxy`] where multiple processes can make API requests
    /// while sharing a single ratelimiter.
    ///
    /// The proxy should be in the form of the protocol and hostname, e.g.
    /// `http://127.0.0.1:3000` or `http://myproxy.example`
    ///
    /// [`twilight-http-proxy`]: https://github.com/twilight-rs/http-proxy
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Use the given configuration to build the `Http` client.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Url`] if the proxy is not a valid URL, or [`HttpError::Request`] if
    /// the TLS backend could not be initialised.
    pub fn build(self) -> Result<Http> {
        let client = match self.client {
            Some(client) => client,
            None => {
                let mut builder = configure_client_backend(Client::builder());
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }

                builder.build()?
            },
        };

        let proxy = self.proxy.as_deref().map(Url::parse).transpose().map_err(HttpError::Url)?;
        let application_id = AtomicU64::new(self.application_id.map_or(0, ApplicationId::get));

        Ok(Http {
            client,
            token: self.token,
            proxy,
            application_id,
        })
    }
}

fn parse_token(token: impl AsRef<str>) -> String {
    let token = token.as_ref().trim();

    if token.starts_with("Bot ") || token.starts_with("Bearer ") {
        token.to_string()
    } else {
        format!("Bot {token}")
    }
}

/// Encodes raw image bytes as the data URI Discord expects for uploaded images.
fn image_data(image: &[u8]) -> String {
    let mime = if image.starts_with(b"\x89PNG") {
        "image/png"
    } else if image.starts_with(b"GIF8") {
        "image/gif"
    } else if image.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else if image.starts_with(b"RIFF") && image.get(8..12) == Some(b"WEBP".as_slice()) {
        "image/webp"
    } else {
        "image/png"
    };

    format!("data:{mime};base64,{}", STANDARD.encode(image))
}

/// A low-level client for sending requests to Discord's HTTP REST API.
///
/// **Note**: For all member functions that return a [`Result`], the Error kind will be either
/// [`Error::Http`] or [`Error::Json`].
///
/// [`Error::Http`]: crate::error::Error::Http
/// [`Error::Json`]: crate::error::Error::Json
pub struct Http {
    pub(crate) client: Client,
    token: SecretString,
    proxy: Option<Url>,
    application_id: AtomicU64,
}

impl Http {
    /// Creates a client with default settings for the given token.
    ///
    /// # Errors
    ///
    /// See [`HttpBuilder::build`].
    pub fn new(token: &str) -> Result<Self> {
        HttpBuilder::new(token).build()
    }

    /// The application id requests scoped to the application are made with, if known.
    #[must_use]
    pub fn application_id(&self) -> Option<ApplicationId> {
        let application_id = self.application_id.load(Ordering::Relaxed);
        NonZeroU64::new(application_id).map(ApplicationId::from)
    }

    fn try_application_id(&self) -> Result<ApplicationId> {
        self.application_id().ok_or_else(|| HttpError::ApplicationIdMissing.into())
    }

    /// Sets the application id used for followup and original response endpoints.
    pub fn set_application_id(&self, application_id: ApplicationId) {
        self.application_id.store(application_id.get(), Ordering::Relaxed);
    }

    /// The token requests are authorized with, including its `Bot ` prefix.
    #[must_use]
    pub fn token(&self) -> &str {
        self.token.expose_secret()
    }

    /// Sends the initial response to an interaction.
    ///
    /// Only one initial response can be sent per interaction. Discord rejects any further one,
    /// which is reported as an [`HttpError`] for which [`HttpError::is_already_acknowledged`]
    /// returns `true`.
    ///
    /// Refer to Discord's [docs] for the object it takes.
    ///
    /// [docs]: https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-response-object-interaction-callback-type
    #[cfg_attr(feature = "tracing_instrument", instrument(skip(self, builder)))]
    pub async fn create_interaction_response<B>(
        &self,
        interaction_id: InteractionId,
        interaction_token: &str,
        builder: &B,
    ) -> Result<()>
    where
        B: InteractionResponseBuilder,
    {
        let body = json::to_vec(builder)?;

        self.wind(
            204,
            RequestBuilder::new(
                Route::InteractionResponse {
                    interaction_id,
                    token: interaction_token,
                },
                LightMethod::Post,
            )
            .body(Some(body))
            .build(),
        )
        .await
    }

    /// Gets the initial interaction response.
    pub async fn get_original_interaction_response(
        &self,
        interaction_token: &str,
    ) -> Result<Message> {
        self.fire(
            RequestBuilder::new(
                Route::WebhookOriginalInteractionResponse {
                    application_id: self.try_application_id()?,
                    token: interaction_token,
                },
                LightMethod::Get,
            )
            .build(),
        )
        .await
    }

    /// Edits the initial interaction response.
    ///
    /// Refer to Discord's [docs] for Edit Webhook Message for field information.
    ///
    /// [docs]: https://discord.com/developers/docs/resources/webhook#edit-webhook-message
    pub async fn edit_original_interaction_response(
        &self,
        interaction_token: &str,
        builder: &EditInteractionResponse,
    ) -> Result<Message> {
        let body = json::to_vec(builder)?;

        self.fire(
            RequestBuilder::new(
                Route::WebhookOriginalInteractionResponse {
                    application_id: self.try_application_id()?,
                    token: interaction_token,
                },
                LightMethod::Patch,
            )
            .body(Some(body))
            .build(),
        )
        .await
    }

    /// Deletes the initial interaction response.
    pub async fn delete_original_interaction_response(&self, interaction_token: &str) -> Result<()> {
        self.wind(
            204,
            RequestBuilder::new(
                Route::WebhookOriginalInteractionResponse {
                    application_id: self.try_application_id()?,
                    token: interaction_token,
                },
                LightMethod::Delete,
            )
            .build(),
        )
        .await
    }

    /// Creates a followup message for an interaction.
    pub async fn create_followup_message(
        &self,
        interaction_token: &str,
        builder: &CreateInteractionResponseFollowup,
    ) -> Result<Message> {
        let body = json::to_vec(builder)?;

        self.fire(
            RequestBuilder::new(
                Route::WebhookFollowupMessages {
                    application_id: self.try_application_id()?,
                    token: interaction_token,
                },
                LightMethod::Post,
            )
            .body(Some(body))
            .build(),
        )
        .await
    }

    /// Edits a followup message for an interaction.
    pub async fn edit_followup_message(
        &self,
        interaction_token: &str,
        message_id: MessageId,
        builder: &CreateInteractionResponseFollowup,
    ) -> Result<Message> {
        let body = json::to_vec(builder)?;

        self.fire(
            RequestBuilder::new(
                Route::WebhookFollowupMessage {
                    application_id: self.try_application_id()?,
                    token: interaction_token,
                    message_id,
                },
                LightMethod::Patch,
            )
            .body(Some(body))
            .build(),
        )
        .await
    }

    /// Deletes a followup message for an interaction.
    pub async fn delete_followup_message(
        &self,
        interaction_token: &str,
        message_id: MessageId,
    ) -> Result<()> {
        self.wind(
            204,
            RequestBuilder::new(
                Route::WebhookFollowupMessage {
                    application_id: self.try_application_id()?,
                    token: interaction_token,
                    message_id,
                },
                LightMethod::Delete,
            )
            .build(),
        )
        .await
    }

    /// Creates an emoji in the given [`Guild`] from raw image bytes.
    ///
    /// The image is sent as a base64 data URI; PNG, GIF, JPEG and WebP are recognised by their
    /// signature, anything else is declared as PNG.
    ///
    /// **Note**: Requires the [Create Guild Expressions] permission.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Model`] if the name is shorter than 2 or longer than 32 characters.
    ///
    /// [Create Guild Expressions]: Permissions::CREATE_GUILD_EXPRESSIONS
    pub async fn create_guild_emoji(
        &self,
        guild_id: GuildId,
        name: &str,
        image: &[u8],
        roles: &[RoleId],
        audit_log_reason: Option<&str>,
    ) -> Result<Emoji> {
        let request = guild_emoji_request(guild_id, name, image, roles, audit_log_reason)?;
        self.fire(request).await
    }

    /// Gets a guild.
    pub async fn get_guild(&self, guild_id: GuildId) -> Result<Guild> {
        self.fire(
            RequestBuilder::new(
                Route::Guild {
                    guild_id,
                },
                LightMethod::Get,
            )
            .build(),
        )
        .await
    }

    /// Retrieves a member of a guild.
    ///
    /// The returned member does not carry its guild id; [`GuildId::member`] fills it in.
    pub async fn get_member(&self, guild_id: GuildId, user_id: UserId) -> Result<Member> {
        self.fire(
            RequestBuilder::new(
                Route::GuildMember {
                    guild_id,
                    user_id,
                },
                LightMethod::Get,
            )
            .build(),
        )
        .await
    }

    /// Gets all the bans of a guild.
    ///
    /// **Note**: Requires the [Ban Members] permission.
    ///
    /// [Ban Members]: Permissions::BAN_MEMBERS
    pub async fn get_bans(&self, guild_id: GuildId) -> Result<Vec<Ban>> {
        self.fire(
            RequestBuilder::new(
                Route::GuildBans {
                    guild_id,
                },
                LightMethod::Get,
            )
            .build(),
        )
        .await
    }

    /// Fires off a request, deserializing the response reader via the given type bound.
    ///
    /// If you don't need to deserialize the response and want the response instance itself, use
    /// [`Self::request`].
    #[cfg_attr(feature = "tracing_instrument", instrument(skip(self)))]
    pub async fn fire<T: DeserializeOwned>(&self, req: Request<'_>) -> Result<T> {
        let response = self.request(req).await?;
        decode_resp(response).await
    }

    /// Performs a request.
    ///
    /// Returns the raw reqwest Response. Use [`Self::fire`] to deserialize the response into
    /// some type.
    #[cfg_attr(feature = "tracing_instrument", instrument(skip(self)))]
    pub async fn request(&self, req: Request<'_>) -> Result<ReqwestResponse> {
        let method = req.method.reqwest_method();
        debug!("{} {}", method, req.route.path());

        let response = req.build(&self.client, self.token(), self.proxy.as_ref())?.send().await?;

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Error::Http(HttpError::UnsuccessfulRequest(
                ErrorResponse::from_response(response, method).await,
            )))
        }
    }

    /// Performs a request and then verifies that the response status code is equal to the
    /// expected value.
    ///
    /// This is a function that performs a light amount of work and returns an empty tuple, so
    /// it's called "self.wind" to denote that it's lightweight.
    pub(super) async fn wind(&self, expected: u16, req: Request<'_>) -> Result<()> {
        let method = req.method.reqwest_method();
        let response = self.request(req).await?;

        if response.status().as_u16() == expected {
            return Ok(());
        }

        debug!("Expected {}, got {}", expected, response.status());
        trace!("Unsuccessful response: {:?}", response);

        Err(Error::Http(HttpError::UnsuccessfulRequest(
            ErrorResponse::from_response(response, method).await,
        )))
    }
}

fn guild_emoji_request(
    guild_id: GuildId,
    name: &str,
    image: &[u8],
    roles: &[RoleId],
    audit_log_reason: Option<&str>,
) -> Result<Request<'static>> {
    let length = name.chars().count();
    Minimum::EmojiNameLength.check_underflow(length)?;
    Maximum::EmojiNameLength.check_overflow(length)?;

    let map = json!({
        "name": name,
        "image": image_data(image),
        "roles": roles,
    });

    RequestBuilder::new(
        Route::GuildEmojis {
            guild_id,
        },
        LightMethod::Post,
    )
    .body(Some(json::to_vec(&map)?))
    .build()
    .audit_log_reason(audit_log_reason)
}

impl InteractionBuilderFactory for Http {
    fn interaction_message_builder(&self, kind: ResponseType) -> InteractionMessageBuilder {
        debug!("Handing out a message builder for {kind:?}");
        InteractionMessageBuilder::new(kind)
    }

    fn interaction_deferred_builder(&self, kind: ResponseType) -> InteractionDeferredBuilder {
        debug!("Handing out a deferred builder for {kind:?}");
        InteractionDeferredBuilder::new(kind)
    }
}

#[cfg(feature = "rustls_backend")]
fn configure_client_backend(builder: ClientBuilder) -> ClientBuilder {
    builder.use_rustls_tls()
}

#[cfg(all(feature = "native_tls_backend", not(feature = "rustls_backend")))]
fn configure_client_backend(builder: ClientBuilder) -> ClientBuilder {
    builder.use_native_tls()
}

impl AsRef<Http> for Http {
    fn as_ref(&self) -> &Http {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::Value;

    #[test]
    fn token_prefix() {
        assert_eq!(parse_token("abc"), "Bot abc");
        assert_eq!(parse_token(" Bot abc "), "Bot abc");
        assert_eq!(parse_token("Bearer abc"), "Bearer abc");
    }

    #[test]
    fn image_mime() {
        assert!(image_data(b"\x89PNG\r\n\x1a\n").starts_with("data:image/png;base64,"));
        assert!(image_data(b"GIF89a").starts_with("data:image/gif;base64,"));
        assert!(image_data(&[0xFF, 0xD8, 0xFF, 0xE0]).starts_with("data:image/jpeg;base64,"));
        assert_eq!(image_data(b"abc"), "data:image/png;base64,YWJj");

        // The bare 12 byte RIFF header is enough to tell WebP apart.
        assert_eq!(
            image_data(b"RIFF\x04\x00\x00\x00WEBP"),
            "data:image/webp;base64,UklGRgQAAABXRUJQ"
        );
        assert!(image_data(b"RIFF\x04\x00\x00\x00WAVE").starts_with("data:image/png;base64,"));
    }

    #[test]
    fn emoji_request() {
        let request = guild_emoji_request(
            GuildId::new(424242),
            "parley",
            b"abc",
            &[RoleId::new(7)],
            Some("for the modal"),
        )
        .unwrap();

        assert_eq!(request.method_ref(), LightMethod::Post);
        assert_eq!(request.route_ref().path(), "https://discord.com/api/v10/guilds/424242/emojis");

        let body: Value = serde_json::from_slice(request.body_ref().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({"name": "parley", "image": "data:image/png;base64,YWJj", "roles": ["7"]})
        );
        assert_eq!(
            request.audit_log_reason_ref().and_then(|value| value.to_str().ok()),
            Some("for%20the%20modal")
        );
    }

    #[test]
    fn emoji_name_bounds() {
        let short = guild_emoji_request(GuildId::new(1), "a", b"", &[], None).unwrap_err();
        assert!(matches!(short, Error::Model(ModelError::TooSmall { .. })));

        let long = guild_emoji_request(GuildId::new(1), &"a".repeat(33), b"", &[], None);
        assert!(matches!(long.unwrap_err(), Error::Model(ModelError::TooLarge { .. })));
    }

    #[test]
    fn builder() {
        let http = HttpBuilder::new("token").build().unwrap();
        assert_eq!(http.token(), "Bot token");
        assert_eq!(http.application_id(), None);

        http.set_application_id(ApplicationId::new(9));
        assert_eq!(http.application_id(), Some(ApplicationId::new(9)));

        let bad_proxy = HttpBuilder::new("token").proxy("not a url").build();
        assert!(matches!(bad_proxy, Err(Error::Http(HttpError::Url(_)))));
    }

    #[tokio::test]
    async fn application_scoped_routes_need_an_id() {
        let http = HttpBuilder::new("token").build().unwrap();

        let error = http.get_original_interaction_response("token").await.unwrap_err();
        assert!(matches!(error, Error::Http(HttpError::ApplicationIdMissing)));
    }
}
