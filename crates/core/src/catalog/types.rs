use serde::{Deserialize, Serialize};

use crate::storage::EntityKind;

/// A registered user.
///
/// Neither `name` nor `email` is constrained; both may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// A car category (e.g. "SUV", "Sedan").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: Option<String>,
}

/// A car as stored, with its optional category reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub id: i64,
    #[serde(rename = "marca")]
    pub make: Option<String>,
    #[serde(rename = "modelo")]
    pub model: Option<String>,
    pub category_id: Option<i64>,
}

/// A car joined with the name of its category.
///
/// `category_name` is `None` when the car has no category, including after
/// the referenced category was deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarListing {
    pub id: i64,
    #[serde(rename = "marca")]
    pub make: Option<String>,
    #[serde(rename = "modelo")]
    pub model: Option<String>,
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
}

/// Body returned after a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

impl DeleteConfirmation {
    /// Builds the confirmation for a deleted entity of the given kind.
    pub fn for_entity(entity: EntityKind) -> Self {
        Self {
            message: entity.deleted_message().to_string(),
        }
    }
}
