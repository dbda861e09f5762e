//! The specialty record exchanged with the backend.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A veterinary specialty as the backend represents it.
///
/// The backend schema owns the record shape; beyond the identifier the
/// client treats every field as opaque. Unknown fields land in `extra`
/// so server-side data survives a round-trip.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Specialty {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Backend-defined fields this client does not interpret.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Specialty {
    /// Record with just a name, as submitted from a creation form.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Outbound copy with transient fields stripped.
    ///
    /// Relationship stubs the UI keeps as placeholders (objects whose
    /// `id` is `""` or `-1`) must not reach the backend.
    pub fn cleaned(&self) -> Self {
        let mut cleaned = self.clone();
        cleaned.extra.retain(|_, value| !is_placeholder_ref(value));
        cleaned
    }
}

fn is_placeholder_ref(value: &Value) -> bool {
    let Value::Object(map) = value else {
        return false;
    };
    match map.get("id") {
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_i64() == Some(-1),
        _ => false,
    }
}

/// Paging and sorting parameters accepted by list and search operations.
///
/// The wire contract for those endpoints carries only `query` and
/// `cacheBuster`; these parameters are accepted for signature stability
/// and deliberately not serialized into requests.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Option<String>,
}
