//! Upstream record shapes.
//!
//! DESIGN
//! ======
//! Airtable fields are untyped on the wire. Every key the UI reads gets an
//! explicit optional member here, decoded leniently: a value of the wrong JSON
//! type becomes `None` instead of failing the whole page. Keys the UI never
//! reads are kept verbatim in `extra` so nothing is lost on re-serialization
//! (SSR hands records to the hydrating client as JSON).

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

/// One page of records as returned by the Airtable list endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordsPage {
    #[serde(default)]
    pub records: Vec<Record>,
    /// Continuation cursor. Reported by upstream, never followed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<String>,
}

/// A single row from the data source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(default)]
    pub fields: RecordFields,
    #[serde(rename = "createdTime", default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
}

/// Typed view over the fields the UI understands.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordFields {
    #[serde(rename = "Name", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Flow Name", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub flow_name: Option<String>,
    #[serde(rename = "Screenshots", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub screenshots: Option<Vec<Attachment>>,
    #[serde(rename = "S3 Links", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub s3_links: Option<String>,
    /// Every other column, untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An Airtable attachment object. Only `url` is required by the UI.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record {
    /// Display title for cards: `Flow Name`, falling back to `Name`.
    #[must_use]
    pub fn title(&self) -> &str {
        self.fields
            .flow_name
            .as_deref()
            .or(self.fields.name.as_deref())
            .unwrap_or_default()
    }
}

/// Decode an optional field, mapping a type mismatch to `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
