use crate::model::{Airplane, Product};

/// Search criteria for products. Every field is optional; an absent field
/// is unconstrained and matches any record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCriteria {
    pub name: Option<String>,
    pub min_price: Option<f64>,
}

/// Search criteria for airplanes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AirplaneCriteria {
    pub name: Option<String>,
    pub model: Option<String>,
    pub min_passengers: Option<u32>,
}

/// Case-insensitive substring test. An empty needle matches anything.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl ProductCriteria {
    /// True iff the product satisfies every present criterion.
    pub fn matches(&self, product: &Product) -> bool {
        self.name
            .as_deref()
            .map_or(true, |name| contains_ci(&product.name, name))
            && self
                .min_price
                .map_or(true, |min_price| product.price >= min_price)
    }

    /// Name criterion usable as a storage-layer pre-filter hint.
    pub fn name_hint(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl AirplaneCriteria {
    /// True iff the airplane satisfies every present criterion.
    pub fn matches(&self, airplane: &Airplane) -> bool {
        self.name
            .as_deref()
            .map_or(true, |name| contains_ci(&airplane.name, name))
            && self
                .model
                .as_deref()
                .map_or(true, |model| contains_ci(&airplane.model, model))
            && self
                .min_passengers
                .map_or(true, |min| airplane.passenger_capacity >= min)
    }

    pub fn name_hint(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
