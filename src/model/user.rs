use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Full user record as returned by the API and kept in the session.
///
/// `user_image` carries the stored blob as standard base64.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub user_id: String,
    pub user_name: String,
    pub user_nickname: Option<String>,
    pub user_password: String,
    pub user_image: Option<String>,
    pub user_level: i32,
    pub created_date: DateTime<Utc>,
    pub created_by: String,
    pub updated_date: DateTime<Utc>,
    pub updated_by: String,
}

/// Registration payload. Every field is optional on the wire so that missing
/// mandatory fields surface as a 400 rather than a decoding rejection.
#[derive(Deserialize, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserDto {
    pub user_id: Option<String>,
    pub user_name: Option<String>,
    pub user_nickname: Option<String>,
    pub user_password: Option<String>,
    pub user_image: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i32_from_number_or_string")]
    #[schema(value_type = Option<i32>)]
    pub user_level: Option<i32>,
}

#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginDto {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub user_password: String,
}

/// Admin update payload.
///
/// All four fields are required; they are optional on the wire so that a
/// missing one surfaces as a 400. `userLevel` may arrive as a number or as a
/// numeric string, since HTML number inputs submit strings.
#[derive(Deserialize, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminUpdateUserDto {
    pub user_nickname: Option<String>,
    pub user_name: Option<String>,
    pub user_password: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i32_from_number_or_string")]
    #[schema(value_type = Option<i32>)]
    pub user_level: Option<i32>,
}

#[derive(Deserialize, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckDuplicateDto {
    pub user_id: Option<String>,
    pub user_nickname: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateCheckDto {
    pub user_id_exists: bool,
    pub nickname_exists: bool,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct FindIdDto {
    pub nickname: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FindPasswordDto {
    pub nickname: String,
    pub user_id: String,
}

/// Multipart profile update form.
///
/// Field names are the multipart part names.
#[derive(Debug, Default, ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ProfileFormDto {
    pub user_nickname: String,
    pub user_name: String,
    pub user_password: String,
    pub user_level: Option<i32>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub profile_image: Option<Vec<u8>>,
}

fn deserialize_optional_i32_from_number_or_string<'de, D>(
    deserializer: D,
) -> Result<Option<i32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(i32),
        Text(String),
    }

    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(value)) => Ok(Some(value)),
        Some(NumberOrString::Text(raw)) if raw.trim().is_empty() => Ok(None),
        Some(NumberOrString::Text(raw)) => raw
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(D::Error::custom),
    }
}
