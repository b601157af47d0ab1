use crate::model::Id;
use serde::{Deserialize, Serialize};

/// Category embedded in a product. Replaced wholesale on update, never
/// mutated field-by-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: Id,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
}

/// Product input model for creation and full replacement (without ID).
/// The ID will be set server-side by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
}

impl NewProduct {
    /// Boundary-layer validation. The store never sees a record that
    /// violates the price or category invariants.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("product name must not be empty".to_string());
        }
        if self.price < 0.0 {
            return Err("product price must not be negative".to_string());
        }
        if self.category.name.trim().is_empty() {
            return Err("product category name must not be empty".to_string());
        }
        Ok(())
    }

    pub fn into_product(self, id: Id) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
        }
    }
}

impl Product {
    /// Replace all mutable fields, keeping the existing id.
    pub fn apply(&mut self, new: NewProduct) {
        self.name = new.name;
        self.description = new.description;
        self.price = new.price;
        self.category = new.category;
    }
}
