//! Database models for blueprint categories and code references.

use std::str::FromStr;

use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::StorageError;
use blueprint_core::blueprint::{BlueprintCategory, NecRef, NewBlueprintCategory, NewNecRef};

/// Parses a stored weight. Accepts plain and scientific notation.
pub(crate) fn parse_weight(code: &str, value: &str) -> Result<Decimal, StorageError> {
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .map_err(|e| {
            StorageError::SerializationError(format!(
                "Invalid weight '{}' stored for category {}: {}",
                value, code, e
            ))
        })
}

/// Database model for blueprint categories
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::blueprint_categories)]
#[diesel(primary_key(code))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct BlueprintCategoryDB {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub weight: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl BlueprintCategoryDB {
    pub fn from_new(category: NewBlueprintCategory, now: NaiveDateTime) -> Self {
        Self {
            code: category.code,
            name: category.name,
            description: category.description,
            weight: category.weight.map(|w| w.normalize().to_string()),
            is_active: category.is_active,
            created_at: now,
            updated_at: now,
        }
    }
}

impl TryFrom<BlueprintCategoryDB> for BlueprintCategory {
    type Error = StorageError;

    fn try_from(db: BlueprintCategoryDB) -> Result<Self, Self::Error> {
        let weight = db
            .weight
            .as_deref()
            .map(|w| parse_weight(&db.code, w))
            .transpose()?;
        Ok(Self {
            code: db.code,
            name: db.name,
            description: db.description,
            weight,
            is_active: db.is_active,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

/// Database model for NEC references
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::nec_refs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct NecRefDB {
    pub id: String,
    pub article: String,
    pub section: String,
    pub title: String,
    pub edition: String,
}

impl NecRefDB {
    pub fn from_new(id: String, nec_ref: NewNecRef) -> Self {
        Self {
            id,
            article: nec_ref.article,
            section: nec_ref.section,
            title: nec_ref.title,
            edition: nec_ref.edition,
        }
    }
}

impl From<NecRefDB> for NecRef {
    fn from(db: NecRefDB) -> Self {
        Self {
            id: db.id,
            article: db.article,
            section: db.section,
            title: db.title,
            edition: db.edition,
        }
    }
}
