use crate::model::id::IntegrationId;
use crate::model::user::User;

/// Various information about integrations.
///
/// [Discord docs](https://discord.com/developers/docs/resources/guild#integration-object),
/// [extra fields 1](https://discord.com/developers/docs/topics/gateway-events#integration-create),
/// [extra fields 2](https://discord.com/developers/docs/topics/gateway-events#integration-update),
#[derive(Clone, Debug, Deserialize, Serialize)]
#[non_exhaustive]
pub struct Integration {
    pub id: IntegrationId,
    pub name: String,
    /// The integration type, such as `twitch`, `youtube` or `discord`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub enabled: bool,
    pub account: IntegrationAccount,
    /// The user for this integration, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl From<Integration> for IntegrationId {
    /// Gets the Id of integration.
    fn from(integration: Integration) -> IntegrationId {
        integration.id
    }
}

/// Integration account object.
///
/// [Discord docs](https://discord.com/developers/docs/resources/guild#integration-account-object).
#[derive(Clone, Debug, Deserialize, Serialize)]
#[non_exhaustive]
pub struct IntegrationAccount {
    pub id: String,
    pub name: String,
}
