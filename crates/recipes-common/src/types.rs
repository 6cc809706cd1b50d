//! Wire types for the recipe catalog API
//!
//! These are the JSON shapes clients send and receive. Field names are camelCase
//! on the wire (`servingCapacity`, `ingredientList`) and the dish category is
//! serialized as `type`.

use serde::{Deserialize, Deserializer, Serialize};

/// A recipe as exchanged over HTTP
///
/// `id` is absent when creating a recipe and is assigned by the server.
/// Missing or `null` string fields deserialize as empty strings so that the
/// server can report them as blank rather than rejecting the whole body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,

    /// Dish category, e.g. "veg" or "nonveg"
    #[serde(rename = "type", default, deserialize_with = "null_as_empty")]
    pub dish_type: String,

    #[serde(default)]
    pub serving_capacity: Option<i32>,

    #[serde(default)]
    pub ingredient_list: Vec<Ingredient>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub instruction: String,
}

/// A named component of a recipe with a free-form quantity ("1 tbsp", "200g")
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub quantity: String,
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        dish_type: impl Into<String>,
        serving_capacity: Option<i32>,
        instruction: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            dish_type: dish_type.into(),
            serving_capacity,
            ingredient_list: Vec::new(),
            instruction: instruction.into(),
        }
    }

    /// Append an ingredient, keeping insertion order
    pub fn with_ingredient(mut self, name: impl Into<String>, quantity: impl Into<String>) -> Self {
        self.ingredient_list.push(Ingredient::new(name, quantity));
        self
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            quantity: quantity.into(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
