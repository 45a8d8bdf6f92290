enum_number! {
    /// The type of a component
    ///
    /// [Discord docs](https://discord.com/developers/docs/interactions/message-components#component-object-component-types).
    #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
    #[serde(from = "u8", into = "u8")]
    #[non_exhaustive]
    pub enum ComponentType {
        ActionRow = 1,
        Button = 2,
        StringSelect = 3,
        InputText = 4,
        UserSelect = 5,
        RoleSelect = 6,
        MentionableSelect = 7,
        ChannelSelect = 8,
        _ => Unknown(u8),
    }
}

/// An action row of a submitted modal, grouping the text inputs it holds.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/message-components#action-rows).
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct ModalInteractionActionRow {
    /// Always [`ComponentType::ActionRow`].
    #[serde(rename = "type")]
    pub kind: ComponentType,
    /// The submitted text inputs, in the order the modal laid them out.
    #[serde(default)]
    pub components: Vec<ModalInteractionTextInput>,
}

impl ModalInteractionActionRow {
    /// Finds the text input with the given custom id in this row.
    #[must_use]
    pub fn get(&self, custom_id: &str) -> Option<&ModalInteractionTextInput> {
        self.components.iter().find(|input| input.custom_id == custom_id)
    }
}

/// A text input as submitted with a modal.
///
/// Discord guarantees the custom ids of the inputs in one submission are distinct.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/message-components#text-input-object).
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct ModalInteractionTextInput {
    /// Always [`ComponentType::InputText`].
    #[serde(rename = "type")]
    pub kind: ComponentType,
    /// Developer-defined identifier for the input; max 100 characters
    pub custom_id: String,
    /// The value the user submitted.
    #[serde(default)]
    pub value: String,
}
