//! Employee model exposed over the HTTP API.

use serde::{Deserialize, Serialize};

/// An employee record.
///
/// The identifier is assigned by the service on creation and preserved by
/// updates; client-supplied ids are ignored. Unknown body fields are dropped
/// on decode rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}
