use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A flashcard. Every content field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CardDto {
    pub id: Uuid,
    pub name: Option<String>,
    pub front_content: Option<String>,
    pub back_content: Option<String>,
}

/// Body of the card creation endpoint. Omitted fields are stored as null.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateCardDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub front_content: Option<String>,
    #[serde(default)]
    pub back_content: Option<String>,
}

/// Body of the card update endpoint.
///
/// Each field distinguishes three states: omitted (`None`, keep the stored value),
/// explicit `null` (`Some(None)`, clear the stored value), and a string
/// (`Some(Some(_))`, replace the stored value).
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateCardDto {
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub front_content: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub back_content: Option<Option<String>>,
}

/// Marks a field as present whenever its key appears in the payload, even as `null`.
///
/// Missing keys never reach this function; `#[serde(default)]` leaves them as `None`.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
