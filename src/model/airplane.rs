use crate::model::Id;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airplane {
    pub id: Id,
    pub name: String,
    pub model: String,
    pub passenger_capacity: u32,
}

/// Airplane input model for creation and full replacement (without ID).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAirplane {
    pub name: String,
    pub model: String,
    pub passenger_capacity: u32,
}

impl NewAirplane {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("airplane name must not be empty".to_string());
        }
        if self.model.trim().is_empty() {
            return Err("airplane model must not be empty".to_string());
        }
        if self.passenger_capacity < 1 {
            return Err("airplane passenger capacity must be at least 1".to_string());
        }
        Ok(())
    }

    pub fn into_airplane(self, id: Id) -> Airplane {
        Airplane {
            id,
            name: self.name,
            model: self.model,
            passenger_capacity: self.passenger_capacity,
        }
    }
}

impl Airplane {
    /// Replace all mutable fields, keeping the existing id.
    pub fn apply(&mut self, new: NewAirplane) {
        self.name = new.name;
        self.model = new.model;
        self.passenger_capacity = new.passenger_capacity;
    }
}
