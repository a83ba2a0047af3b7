//! Wire DTOs for the backend REST API.
//!
//! DESIGN
//! ======
//! Every endpoint answers with the same `{ success, data?, error? }` envelope.
//! Payloads are deliberately lenient: ids may be numbers or strings and most
//! fields are optional, because the backend has grown them over time.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::net::api::ApiError;
use crate::state::auth::SessionUser;

/// Standard response envelope.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap `data` from a successful envelope.
    ///
    /// # Errors
    ///
    /// `Rejected` when `success` is false, `MissingData` when it is true but
    /// carries no payload.
    pub fn into_result(self) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::Rejected(self.error.unwrap_or_else(|| "request rejected".to_owned())));
        }
        self.data.ok_or(ApiError::MissingData)
    }

    /// Accept a successful envelope whose payload is irrelevant.
    ///
    /// # Errors
    ///
    /// `Rejected` when `success` is false.
    pub fn into_ack(self) -> Result<(), ApiError> {
        if self.success {
            Ok(())
        } else {
            Err(ApiError::Rejected(self.error.unwrap_or_else(|| "request rejected".to_owned())))
        }
    }
}

/// Server-supplied copy/layout overrides for one page section.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(default, deserialize_with = "deserialize_lenient_string", skip_serializing_if = "Option::is_none")]
    pub layout_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_list", skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_config: Option<serde_json::Value>,
    /// Free-form text and list fields.
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl ContentBlock {
    pub fn text(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(serde_json::Value::as_str)
    }

    /// String items of an array field. Non-string items are skipped.
    pub fn list(&self, field: &str) -> Option<Vec<String>> {
        let items = self.fields.get(field)?.as_array()?;
        Some(items.iter().filter_map(|v| v.as_str().map(str::to_owned)).collect())
    }
}

/// `GET /api/frontend-content` payload, keyed by section name.
pub type FrontendContent = BTreeMap<String, ContentBlock>;

/// Parse the content payload one section at a time.
///
/// A section that is not an object is dropped, so the page falls back to its
/// default copy for that section only.
///
/// # Errors
///
/// `Decode` when the payload itself is not an object.
pub fn parse_frontend_content(value: serde_json::Value) -> Result<FrontendContent, ApiError> {
    let serde_json::Value::Object(sections) = value else {
        return Err(ApiError::Decode(format!("expected content object, got {value}")));
    };
    Ok(sections
        .into_iter()
        .filter(|(_, block)| block.is_object())
        .filter_map(|(name, block)| serde_json::from_value(block).ok().map(|block| (name, block)))
        .collect())
}

fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

fn deserialize_lenient_list<'de, D>(deserializer: D) -> Result<Vec<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(items) => Ok(items),
        _ => Ok(Vec::new()),
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub read_time: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// `GET /api/blog/posts` payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogPostList {
    #[serde(default)]
    pub posts: Vec<BlogPost>,
}

/// `POST /api/demo-requests` body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DemoRequest {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heard_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

/// A stored demo request as listed in the admin console.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DemoRequestRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(flatten)]
    pub request: DemoRequest,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/login` payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionUser,
}

/// `POST /api/admin/auth/login` payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AdminLoginResponse {
    pub token: String,
    #[serde(default)]
    pub user: serde_json::Value,
}

/// Accept a JSON string or number as an id string.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}

/// Optional variant of [`deserialize_id`]; anything else reads as `None`.
pub(crate) fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        _ => Ok(None),
    }
}
