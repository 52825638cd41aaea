//! Recipe entity saved by a user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recipe owned by a single account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique identifier for the recipe
    pub id: Uuid,

    /// Title shown in listings
    pub recipe_title: String,

    /// Full recipe body
    pub text: String,

    /// Owning account
    pub user_id: Uuid,

    pub created_at: DateTime<Utc>,
}

impl Recipe {
    pub fn new(user_id: Uuid, recipe_title: String, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            recipe_title,
            text,
            user_id,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_ids_serialize_as_strings() {
        let owner = Uuid::new_v4();
        let recipe = Recipe::new(owner, "Soup".into(), "Boil water".into());
        let json = serde_json::to_value(&recipe).unwrap();

        assert_eq!(json["user_id"], owner.to_string());
        assert_eq!(json["id"], recipe.id.to_string());
        assert_eq!(json["recipe_title"], "Soup");
    }
}
