use anyhow::Result;

use crate::model::{Category, NewAirplane, NewProduct};
use crate::store::traits::Store;

fn sample_products() -> Vec<NewProduct> {
    let electronics = Category {
        id: "cat_1".to_string(),
        name: "Electrónicos".to_string(),
        description: "Dispositivos y gadgets".to_string(),
    };
    let home = Category {
        id: "cat_2".to_string(),
        name: "Hogar".to_string(),
        description: "Artículos para el hogar".to_string(),
    };

    vec![
        NewProduct {
            name: "Smartphone".to_string(),
            description: "Teléfono inteligente de gama media".to_string(),
            price: 599.99,
            category: electronics.clone(),
        },
        NewProduct {
            name: "Laptop".to_string(),
            description: "Portátil para trabajo y estudio".to_string(),
            price: 1299.99,
            category: electronics,
        },
        NewProduct {
            name: "Cafetera".to_string(),
            description: "Cafetera de goteo programable".to_string(),
            price: 49.90,
            category: home,
        },
    ]
}

fn sample_airplanes() -> Vec<NewAirplane> {
    vec![
        NewAirplane {
            name: "Boeing 737".to_string(),
            model: "737-800".to_string(),
            passenger_capacity: 189,
        },
        NewAirplane {
            name: "Airbus A320".to_string(),
            model: "A320neo".to_string(),
            passenger_capacity: 180,
        },
        NewAirplane {
            name: "Cessna 172".to_string(),
            model: "Skyhawk".to_string(),
            passenger_capacity: 4,
        },
    ]
}

/// Load the demonstration catalog into the given store.
pub async fn load_seed_data<S: Store + ?Sized>(store: &S) -> Result<()> {
    for product in sample_products() {
        let id = store.create_product(product).await?;
        log::info!("Seeded product {}", id);
    }

    for airplane in sample_airplanes() {
        let id = store.create_airplane(airplane).await?;
        log::info!("Seeded airplane {}", id);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use crate::store::traits::{AirplaneStore, ProductStore};

    #[tokio::test]
    async fn seed_populates_both_collections() {
        let store = MemoryStore::new();
        load_seed_data(&store).await.unwrap();

        assert_eq!(store.list_products(None).await.unwrap().len(), 3);
        assert_eq!(store.list_airplanes(None).await.unwrap().len(), 3);
    }
}
