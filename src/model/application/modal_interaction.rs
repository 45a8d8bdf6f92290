use crate::builder::{InteractionBuilderFactory, InteractionDeferredBuilder, InteractionMessageBuilder};
#[cfg(feature = "http")]
use crate::http::Http;
use crate::internal::prelude::*;
use crate::model::prelude::*;

/// An interaction triggered by a modal submit.
///
/// A modal submission can only be answered with a message ([`Self::build_response`]) or with a
/// deferred acknowledgement whose content follows later ([`Self::build_deferred_response`]).
///
/// [`Self::member`] is present exactly when [`Self::guild_id`] is; payloads breaking this fail to
/// deserialize.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-object).
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(try_from = "RawModalInteraction", into = "RawModalInteraction")]
#[non_exhaustive]
pub struct ModalInteraction {
    /// Id of the interaction.
    pub id: InteractionId,
    /// Id of the application this interaction is for.
    pub application_id: ApplicationId,
    /// The data of the interaction which was triggered.
    pub data: ModalInteractionData,
    /// The guild Id this interaction was sent from, if there is one.
    pub guild_id: Option<GuildId>,
    /// The channel Id this interaction was sent from.
    pub channel_id: ChannelId,
    /// The `member` data for the invoking user.
    ///
    /// **Note**: It is only present if the interaction is triggered in a guild.
    pub member: Option<InteractionMember>,
    /// The `user` object for the invoking user.
    pub user: User,
    /// A continuation token for responding to the interaction.
    pub token: String,
    /// Always `1`.
    pub version: u8,
    /// The message this interaction was triggered by
    ///
    /// **Note**: Does not exist if the modal interaction originates from an application command
    /// interaction
    pub message: Option<Box<Message>>,
    /// Permissions the app or bot has within the channel the interaction was sent from.
    pub app_permissions: Option<Permissions>,
    /// The selected language of the invoking user.
    pub locale: String,
    /// The guild's preferred locale.
    ///
    /// Usually present for interactions from a guild, but this is not checked.
    pub guild_locale: Option<String>,
}

impl ModalInteraction {
    /// The custom id of the submitted modal.
    #[must_use]
    pub fn custom_id(&self) -> &str {
        &self.data.custom_id
    }

    /// The action rows of the submitted modal.
    #[must_use]
    pub fn components(&self) -> &[ModalInteractionActionRow] {
        &self.data.components
    }

    /// All submitted text inputs, in the order the modal laid them out.
    pub fn text_inputs(&self) -> impl Iterator<Item = &ModalInteractionTextInput> {
        self.data.components.iter().flat_map(|row| row.components.iter())
    }

    /// The value submitted for the text input with the given custom id.
    #[must_use]
    pub fn value_of(&self, custom_id: &str) -> Option<&str> {
        self.text_inputs().find(|input| input.custom_id == custom_id).map(|input| input.value.as_str())
    }

    /// Requests a builder for a message sent in response to the submission, tagged
    /// [`ResponseType::MessageCreate`].
    ///
    /// Nothing is sent until the builder is passed to
    /// [`RespondableInteraction::create_initial_response`]. Whether the interaction was already
    /// answered is not checked here; Discord rejects a second initial response.
    ///
    /// The factory must return a builder of the requested kind. Debug builds panic if it does not.
    pub fn build_response<F>(&self, factory: &F) -> InteractionMessageBuilder
    where
        F: InteractionBuilderFactory + ?Sized,
    {
        let builder = factory.interaction_message_builder(ResponseType::MessageCreate);
        debug_assert_eq!(
            builder.kind(),
            ResponseType::MessageCreate,
            "factory returned a builder of the wrong kind"
        );
        builder
    }

    /// Requests a builder acknowledging the submission now, tagged
    /// [`ResponseType::DeferredMessageCreate`].
    ///
    /// The builder is meant to be sent as-is. The actual content is sent later with
    /// [`RespondableInteraction::create_followup`] or
    /// [`RespondableInteraction::edit_initial_response`]. Only [`InteractionDeferredBuilder::flags`]
    /// can still be changed, and nothing enforces sending it unmodified.
    ///
    /// As with [`Self::build_response`], debug builds panic if the factory ignores the kind.
    pub fn build_deferred_response<F>(&self, factory: &F) -> InteractionDeferredBuilder
    where
        F: InteractionBuilderFactory + ?Sized,
    {
        let builder = factory.interaction_deferred_builder(ResponseType::DeferredMessageCreate);
        debug_assert_eq!(
            builder.kind(),
            ResponseType::DeferredMessageCreate,
            "factory returned a builder of the wrong kind"
        );
        builder
    }
}

#[cfg(feature = "http")]
impl ModalInteraction {
    /// Helper function to defer an interaction.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::Http`] if the API returns an error, or an [`Error::Json`] if there is
    /// an error in deserializing the API response.
    pub async fn defer(&self, http: &Http) -> Result<()> {
        let response = self.build_deferred_response(http);
        self.create_initial_response(http, &response).await
    }

    /// Helper function to defer an interaction ephemerally
    ///
    /// # Errors
    ///
    /// May also return an [`Error::Http`] if the API returns an error, or an [`Error::Json`] if
    /// there is an error in deserializing the API response.
    pub async fn defer_ephemeral(&self, http: &Http) -> Result<()> {
        let response = self.build_deferred_response(http).ephemeral(true);
        self.create_initial_response(http, &response).await
    }
}

impl RespondableInteraction for ModalInteraction {
    const KIND: InteractionType = InteractionType::Modal;

    fn id(&self) -> InteractionId {
        self.id
    }

    fn application_id(&self) -> ApplicationId {
        self.application_id
    }

    fn token(&self) -> &str {
        &self.token
    }
}

/// The interaction envelope as Discord sends it.
#[derive(Deserialize, Serialize)]
struct RawModalInteraction {
    id: InteractionId,
    application_id: ApplicationId,
    #[serde(rename = "type")]
    kind: InteractionType,
    data: ModalInteractionData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    guild_id: Option<GuildId>,
    channel_id: ChannelId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    member: Option<InteractionMember>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user: Option<User>,
    token: String,
    version: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<Box<Message>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    app_permissions: Option<Permissions>,
    locale: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    guild_locale: Option<String>,
}

impl TryFrom<RawModalInteraction> for ModalInteraction {
    type Error = &'static str;

    fn try_from(mut raw: RawModalInteraction) -> StdResult<Self, Self::Error> {
        if raw.kind != InteractionType::Modal {
            return Err("expected a modal submit interaction");
        }

        // In guilds Discord only sends `member`, which carries the user.
        let user = match (raw.guild_id, &mut raw.member) {
            (Some(guild_id), Some(member)) => {
                member.guild_id = Some(guild_id);
                member.user.clone()
            },
            (None, None) => raw.user.ok_or("missing field `user`")?,
            (Some(_), None) => return Err("interaction from a guild without `member`"),
            (None, Some(_)) => return Err("interaction with `member` but no `guild_id`"),
        };

        Ok(Self {
            id: raw.id,
            application_id: raw.application_id,
            data: raw.data,
            guild_id: raw.guild_id,
            channel_id: raw.channel_id,
            member: raw.member,
            user,
            token: raw.token,
            version: raw.version,
            message: raw.message,
            app_permissions: raw.app_permissions,
            locale: raw.locale,
            guild_locale: raw.guild_locale,
        })
    }
}

impl From<ModalInteraction> for RawModalInteraction {
    fn from(interaction: ModalInteraction) -> Self {
        let user = if interaction.member.is_some() { None } else { Some(interaction.user) };

        Self {
            id: interaction.id,
            application_id: interaction.application_id,
            kind: InteractionType::Modal,
            data: interaction.data,
            guild_id: interaction.guild_id,
            channel_id: interaction.channel_id,
            member: interaction.member,
            user,
            token: interaction.token,
            version: interaction.version,
            message: interaction.message,
            app_permissions: interaction.app_permissions,
            locale: interaction.locale,
            guild_locale: interaction.guild_locale,
        }
    }
}

/// A modal submit interaction data, provided by [`ModalInteraction::data`]
///
/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-object-modal-submit-data-structure).
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct ModalInteractionData {
    /// The custom id of the modal
    pub custom_id: String,
    /// The components.
    #[serde(default)]
    pub components: Vec<ModalInteractionActionRow>,
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::json::{from_value, json, to_value, Value};

    /// Records every builder request it receives.
    #[derive(Default)]
    struct RecordingFactory {
        requested: RefCell<Vec<ResponseType>>,
    }

    impl InteractionBuilderFactory for RecordingFactory {
        fn interaction_message_builder(&self, kind: ResponseType) -> InteractionMessageBuilder {
            self.requested.borrow_mut().push(kind);
            InteractionMessageBuilder::new(kind)
        }

        fn interaction_deferred_builder(&self, kind: ResponseType) -> InteractionDeferredBuilder {
            self.requested.borrow_mut().push(kind);
            InteractionDeferredBuilder::new(kind)
        }
    }

    /// Hands out builders of a fixed kind, whatever was asked for.
    struct StubbornFactory;

    impl InteractionBuilderFactory for StubbornFactory {
        fn interaction_message_builder(&self, _: ResponseType) -> InteractionMessageBuilder {
            InteractionMessageBuilder::new(ResponseType::MessageUpdate)
        }

        fn interaction_deferred_builder(&self, _: ResponseType) -> InteractionDeferredBuilder {
            InteractionDeferredBuilder::new(ResponseType::DeferredMessageUpdate)
        }
    }

    fn components() -> Value {
        json!([{
            "type": 1,
            "components": [
                {"type": 4, "custom_id": "name", "value": "Alice"},
                {"type": 4, "custom_id": "email", "value": "a@x.com"},
            ],
        }])
    }

    fn guild_payload() -> Value {
        json!({
            "id": "1100000000000000010",
            "application_id": "1100000000000000011",
            "type": 5,
            "data": {"custom_id": "signup", "components": components()},
            "guild_id": "123",
            "channel_id": "1100000000000000012",
            "member": {
                "user": {"id": "1100000000000000013", "username": "alice", "avatar": null},
                "roles": [],
                "joined_at": "2021-01-01T00:00:00.000000+00:00",
                "deaf": false,
                "mute": false,
                "permissions": "2048",
            },
            "token": "aW50ZXJhY3Rpb24",
            "version": 1,
            "locale": "en-US",
            "guild_locale": "en-US",
        })
    }

    fn dm_payload() -> Value {
        json!({
            "id": "1100000000000000020",
            "application_id": "1100000000000000011",
            "type": 5,
            "data": {"custom_id": "signup", "components": components()},
            "channel_id": "1100000000000000022",
            "user": {"id": "1100000000000000013", "username": "alice", "avatar": null},
            "token": "aW50ZXJhY3Rpb24",
            "version": 1,
            "locale": "de",
        })
    }

    #[test]
    fn guild_submission() {
        let interaction: ModalInteraction = from_value(guild_payload()).unwrap();

        assert_eq!(interaction.guild_id, Some(GuildId::new(123)));
        let member = interaction.member.as_ref().unwrap();
        assert_eq!(member.guild_id, Some(GuildId::new(123)));
        assert_eq!(interaction.user.id, member.user.id);
        assert_eq!(interaction.user.name, "alice");

        let factory = RecordingFactory::default();
        let response = interaction.build_response(&factory);
        assert_eq!(response.kind(), ResponseType::MessageCreate);
        assert_eq!(u8::from(response.kind()), 4);
        assert_eq!(*factory.requested.borrow(), [ResponseType::MessageCreate]);
    }

    #[test]
    fn guild_locale_is_not_tied_to_origin() {
        let mut guild = guild_payload();
        guild.as_object_mut().unwrap().remove("guild_locale");
        let interaction: ModalInteraction = from_value(guild).unwrap();
        assert_eq!(interaction.guild_id, Some(GuildId::new(123)));
        assert_eq!(interaction.guild_locale, None);

        let mut dm = dm_payload();
        dm.as_object_mut().unwrap().insert("guild_locale".into(), json!("fr"));
        let interaction: ModalInteraction = from_value(dm).unwrap();
        assert_eq!(interaction.guild_id, None);
        assert!(interaction.member.is_none());
        assert_eq!(interaction.guild_locale.as_deref(), Some("fr"));
        assert_eq!(to_value(&interaction).unwrap()["guild_locale"], json!("fr"));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "factory returned a builder of the wrong kind")]
    fn factory_must_honour_the_message_kind() {
        let interaction: ModalInteraction = from_value(dm_payload()).unwrap();
        let _response = interaction.build_response(&StubbornFactory);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "factory returned a builder of the wrong kind")]
    fn factory_must_honour_the_deferred_kind() {
        let interaction: ModalInteraction = from_value(dm_payload()).unwrap();
        let _response = interaction.build_deferred_response(&StubbornFactory);
    }

    #[test]
    fn direct_message_submission() {
        let interaction: ModalInteraction = from_value(dm_payload()).unwrap();

        assert!(interaction.guild_id.is_none());
        assert!(interaction.member.is_none());
        assert!(interaction.guild_locale.is_none());
        assert_eq!(interaction.user.name, "alice");

        let factory = RecordingFactory::default();
        let response = interaction.build_deferred_response(&factory);
        assert_eq!(response.kind(), ResponseType::DeferredMessageCreate);
        assert_eq!(u8::from(response.kind()), 5);
        assert_eq!(*factory.requested.borrow(), [ResponseType::DeferredMessageCreate]);
    }

    #[test]
    fn submitted_values_are_preserved() {
        let interaction: ModalInteraction = from_value(guild_payload()).unwrap();

        assert_eq!(interaction.custom_id(), "signup");
        assert_eq!(interaction.components().len(), 1);

        let inputs: Vec<_> = interaction
            .text_inputs()
            .map(|input| (input.custom_id.as_str(), input.value.as_str()))
            .collect();
        assert_eq!(inputs, [("name", "Alice"), ("email", "a@x.com")]);

        assert_eq!(interaction.value_of("name"), Some("Alice"));
        assert_eq!(interaction.value_of("email"), Some("a@x.com"));
        assert_eq!(interaction.value_of("phone"), None);
    }

    #[test]
    fn builders_are_independent() {
        let interaction: ModalInteraction = from_value(dm_payload()).unwrap();
        let factory = RecordingFactory::default();

        let first = interaction.build_response(&factory).content("first");
        let second = interaction.build_response(&factory);

        assert_eq!(first.get_content(), Some("first"));
        assert_eq!(second.get_content(), None);
        assert_eq!(factory.requested.borrow().len(), 2);
    }

    #[test]
    fn guild_origin_invariant() {
        let mut without_member = guild_payload();
        without_member.as_object_mut().unwrap().remove("member");
        assert!(from_value::<ModalInteraction>(without_member).is_err());

        let mut without_guild = guild_payload();
        without_guild.as_object_mut().unwrap().remove("guild_id");
        assert!(from_value::<ModalInteraction>(without_guild).is_err());

        let mut without_user = dm_payload();
        without_user.as_object_mut().unwrap().remove("user");
        assert!(from_value::<ModalInteraction>(without_user).is_err());

        let mut component = dm_payload();
        component["type"] = json!(3);
        assert!(from_value::<ModalInteraction>(component).is_err());
    }

    #[test]
    fn serializes_back_to_the_envelope() {
        let interaction: ModalInteraction = from_value(guild_payload()).unwrap();

        let value = to_value(&interaction).unwrap();
        assert_eq!(value["type"], json!(5));
        assert!(value.get("user").is_none());
        assert_eq!(value["member"]["permissions"], json!("2048"));

        let again: ModalInteraction = from_value(value).unwrap();
        assert_eq!(again.data, interaction.data);
        assert_eq!(again.user, interaction.user);
    }

    #[test]
    fn gate_through_the_trait() {
        let interaction: ModalInteraction = from_value(dm_payload()).unwrap();
        let factory = RecordingFactory::default();

        assert_eq!(interaction.response_types(), InteractionType::Modal.response_types());

        let builder = interaction.message_builder(&factory, ResponseType::MessageCreate).unwrap();
        assert_eq!(builder.kind(), ResponseType::MessageCreate);

        let rejected = interaction.deferred_builder(&factory, ResponseType::DeferredMessageUpdate);
        assert_eq!(
            rejected.unwrap_err(),
            ModelError::InvalidResponseType {
                interaction: InteractionType::Modal,
                response: ResponseType::DeferredMessageUpdate,
            }
        );
        assert_eq!(*factory.requested.borrow(), [ResponseType::MessageCreate]);
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn contract_violations_fail_before_sending() {
        use crate::http::HttpBuilder;

        let http = HttpBuilder::new("token").build().unwrap();
        let interaction: ModalInteraction = from_value(dm_payload()).unwrap();

        let update = http.interaction_deferred_builder(ResponseType::DeferredMessageUpdate);
        let error = interaction.create_initial_response(&http, &update).await.unwrap_err();
        assert!(matches!(
            error,
            Error::Model(ModelError::InvalidResponseType {
                interaction: InteractionType::Modal,
                response: ResponseType::DeferredMessageUpdate,
            })
        ));

        let too_long = interaction.build_response(&http).content("a".repeat(2001));
        let error = interaction.create_initial_response(&http, &too_long).await.unwrap_err();
        assert!(matches!(error, Error::Model(ModelError::TooLarge { .. })));
    }
}
