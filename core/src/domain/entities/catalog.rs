//! Reference data shared by every recipe: ingredients, cuisines and food types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which reference list an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    Ingredient,
    Cuisine,
    FoodType,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 3] = [
        CatalogKind::Ingredient,
        CatalogKind::Cuisine,
        CatalogKind::FoodType,
    ];

    /// Backing table name
    pub fn table(&self) -> &'static str {
        match self {
            CatalogKind::Ingredient => "ingredients",
            CatalogKind::Cuisine => "cuisines",
            CatalogKind::FoodType => "food_types",
        }
    }

    /// Label used in user-facing messages
    pub fn label(&self) -> &'static str {
        match self {
            CatalogKind::Ingredient => "Ingredients",
            CatalogKind::Cuisine => "Cuisines",
            CatalogKind::FoodType => "food_type",
        }
    }
}

/// Normalize a catalog name: first character upper-case, the rest lower-case
pub fn capitalize(name: &str) -> String {
    let mut chars = name.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// A single named entry of one of the reference lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: Uuid,
    pub name: String,
}

impl CatalogItem {
    /// Creates an item with a fresh id and a normalized name
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: capitalize(name),
        }
    }
}
