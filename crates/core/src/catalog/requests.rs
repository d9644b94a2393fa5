//! Request payloads for create and update operations.
//!
//! Every field is optional. Missing fields are stored as NULL rather than
//! rejected, and fields of the wrong JSON type are coerced or dropped, so
//! these types carry no validation.

use serde::{Deserialize, Serialize};

use super::types::{Car, Category, User};
use crate::serde::{deserialize_lenient_id, deserialize_lenient_string};

/// Mutable fields of a [`User`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFields {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub email: Option<String>,
}

impl UserFields {
    /// Create a payload with both fields set.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    /// Decorate the fields with a store-assigned id.
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

/// Mutable fields of a [`Category`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFields {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub name: Option<String>,
}

impl CategoryFields {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    pub fn into_category(self, id: i64) -> Category {
        Category {
            id,
            name: self.name,
        }
    }
}

/// Mutable fields of a [`Car`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarFields {
    #[serde(
        default,
        rename = "marca",
        deserialize_with = "deserialize_lenient_string"
    )]
    pub make: Option<String>,
    #[serde(
        default,
        rename = "modelo",
        deserialize_with = "deserialize_lenient_string"
    )]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_id")]
    pub category_id: Option<i64>,
}

impl CarFields {
    /// Create a payload without a category.
    pub fn new(make: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            make: Some(make.into()),
            model: Some(model.into()),
            category_id: None,
        }
    }

    /// Set the category reference.
    pub fn with_category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn into_car(self, id: i64) -> Car {
        Car {
            id,
            make: self.make,
            model: self.model,
            category_id: self.category_id,
        }
    }
}
