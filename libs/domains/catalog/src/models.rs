use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::{IntoParams, ToSchema};

/// A category or sub-category reference on a product.
///
/// Legacy records carry a single id, newer records a list; both forms
/// live side by side in the document store, so the field deserializes
/// from either a JSON string or an array of strings. All predicate
/// logic goes through [`IdRef::as_slice`] / [`IdRef::contains`] so the
/// two shapes never diverge in behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum IdRef {
    One(String),
    Many(Vec<String>),
}

impl IdRef {
    /// The referenced ids, in declared order.
    pub fn as_slice(&self) -> &[String] {
        match self {
            IdRef::One(id) => std::slice::from_ref(id),
            IdRef::Many(ids) => ids,
        }
    }

    /// Whether `id` is among the referenced ids.
    pub fn contains(&self, id: &str) -> bool {
        self.as_slice().iter().any(|i| i == id)
    }

    /// The primary id: the scalar itself, or the first list element.
    /// `None` for an empty list.
    pub fn primary(&self) -> Option<&str> {
        self.as_slice().first().map(String::as_str)
    }
}

impl From<&str> for IdRef {
    fn from(id: &str) -> Self {
        IdRef::One(id.to_string())
    }
}

impl From<Vec<&str>> for IdRef {
    fn from(ids: Vec<&str>) -> Self {
        IdRef::Many(ids.into_iter().map(str::to_string).collect())
    }
}

/// Normalize an optional reference field to its id set.
///
/// Absent fields normalize to the empty set, so "product without a
/// sub-category" and "product with an empty sub-category list" filter
/// identically.
pub fn ids_of(field: Option<&IdRef>) -> &[String] {
    field.map(IdRef::as_slice).unwrap_or_default()
}

/// Product entity - a catalog entry as stored in the document store.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Product name
    pub name: String,
    /// Brand name
    #[serde(default)]
    pub brand: String,
    /// Product description
    #[serde(default)]
    pub description: String,
    /// Price in whole currency units
    pub price: i64,
    /// Pre-discount price; absent means no discount is shown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<i64>,
    /// URI of the representative image
    #[serde(default)]
    pub image: String,
    /// Category id(s); scalar on legacy records
    pub category: IdRef,
    /// Sub-category id(s), when assigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<IdRef>,
    /// Availability flag, tracked independently of stock_count
    #[serde(default)]
    pub in_stock: bool,
    /// Units on hand
    #[serde(default)]
    pub stock_count: i64,
    /// Average rating, 0-5; missing source data reads as 0
    #[serde(default)]
    pub rating: f64,
    /// Number of reviews
    #[serde(default)]
    pub reviews: i64,
    /// Attribute name -> value; display order irrelevant
    #[serde(default)]
    pub specifications: HashMap<String, String>,
    /// Selling points, in display order
    #[serde(default)]
    pub features: Vec<String>,
    /// Manual sort weight; lower sorts earlier, absent sorts last
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    /// Video reference URIs, in display order
    #[serde(default)]
    pub videos: Vec<String>,
    /// Explicit curation flag for the featured shelf
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

/// Category/sub-category selection, as the shop pages pass it around.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFilter {
    /// Category id to filter by
    pub category: String,
    /// Optional sub-category id to narrow within the category
    pub sub_category: Option<String>,
}
