//! Snipe-IT API Type Definitions
//!
//! Response bodies of the Snipe-IT REST API (`/api/v1/...`). Only the fields the
//! exporter reads are modelled.
//!
//! # Design Notes
//!
//! - **Serde Defaults**: every field is `#[serde(default)]`. A missing, null or
//!   wrongly typed field degrades into an empty string or zero instead of failing
//!   the scrape. Numeric labels such as `"model_number": 1234` are kept as text.
//! - **Opaque identifiers**: model numbers and serials are carried as strings and
//!   never parsed.
//!
//! # API Endpoints Covered
//!
//! - `statuslabels` → [`StatusLabelRow`]
//! - `categories` → [`CategoryRow`]
//! - `models` → [`ModelRow`]
//! - `hardware` → [`Rows::total`] (count only)
//! - `consumables` → [`ConsumableRow`]
//! - `components` → [`ComponentRow`]
//! - `users` → [`UserRow`]
//! - `users/{id}/assets` → [`AssetRow`]

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Envelope returned by every list endpoint
///
/// Snipe-IT reports some failures with a 200 response carrying
/// `{"status": "error", "messages": ...}` instead of rows.
#[derive(Debug, Deserialize, Clone)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Rows<T> {
    #[serde(default, deserialize_with = "lenient_count")]
    pub total: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rows: Vec<T>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub messages: Option<serde_json::Value>,
}

impl<T> Rows<T> {
    /// The error message if the body is an in-band error payload
    pub fn error_message(&self) -> Option<String> {
        if self.status.as_deref() != Some("error") {
            return None;
        }
        Some(match &self.messages {
            Some(serde_json::Value::String(message)) => message.clone(),
            Some(other) => other.to_string(),
            None => "unknown error".to_string(),
        })
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct StatusLabelRow {
    #[serde(default, deserialize_with = "lenient_count")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient_label")]
    pub name: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CategoryRow {
    #[serde(default, deserialize_with = "lenient_count")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient_label")]
    pub name: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ModelRow {
    #[serde(default, deserialize_with = "lenient_count")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient_label")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_label")]
    pub model_number: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConsumableRow {
    #[serde(default, deserialize_with = "lenient_label")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_label")]
    pub model_number: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub min_amt: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub remaining: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub qty: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ComponentRow {
    #[serde(default, deserialize_with = "lenient_label")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_label")]
    pub serial: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub min_amt: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub remaining: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub qty: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct UserRow {
    #[serde(default, deserialize_with = "lenient_count")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient_label")]
    pub username: String,
}

/// An asset checked out to a user; only the model number matters here
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AssetRow {
    #[serde(default, deserialize_with = "lenient_label")]
    pub model_number: String,
}

/// Snipe-IT sends `null` for unset fields, which plain `#[serde(default)]` rejects
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Label text; scalars of any JSON type are rendered as text, anything else is empty
fn lenient_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

/// Non-negative integer; numeric strings are parsed, anything unusable reads as zero
fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_u64().unwrap_or_default(),
        Value::String(text) => text.trim().parse().unwrap_or_default(),
        _ => 0,
    })
}
