use std::num::ParseIntError;

/// Discord sends some integers, such as snowflakes and permissions, as strings.
///
/// Used to accept either representation when deserializing.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum StrOrInt {
    String(String),
    Int(u64),
}

impl StrOrInt {
    pub fn parse(&self) -> Result<u64, ParseIntError> {
        match self {
            Self::String(string) => string.parse(),
            Self::Int(int) => Ok(*int),
        }
    }
}

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}
