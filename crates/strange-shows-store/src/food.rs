//! CRUD operations for [`FoodItem`] records.

use strange_shows_shared::types::FoodItem;

use crate::collection::KEY_FOOD;
use crate::database::Database;
use crate::error::Result;

impl Database {
    /// Fetch all canteen items, insertion order preserved.
    pub fn food_get_all(&self) -> Result<Vec<FoodItem>> {
        self.read_collection(KEY_FOOD)
    }

    /// Append an item and persist the full list.
    pub fn food_add(&self, item: &FoodItem) -> Result<Vec<FoodItem>> {
        let mut items = self.food_get_all()?;
        items.push(item.clone());
        self.write_collection(KEY_FOOD, &items)?;
        tracing::debug!(item_id = %item.id, "food item added");
        Ok(items)
    }

    /// Replace the item whose id equals `item.id`; silent no-op when no id
    /// matches.
    pub fn food_update(&self, item: &FoodItem) -> Result<Vec<FoodItem>> {
        let mut items = self.food_get_all()?;
        for existing in &mut items {
            if existing.id == item.id {
                *existing = item.clone();
            }
        }
        self.write_collection(KEY_FOOD, &items)?;
        Ok(items)
    }

    /// Remove the item with the given id. No-op if absent.
    pub fn food_delete(&self, id: &str) -> Result<Vec<FoodItem>> {
        let mut items = self.food_get_all()?;
        items.retain(|f| f.id != id);
        self.write_collection(KEY_FOOD, &items)?;
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_stock_flag_survives_update() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open_at(&dir.path().join("test.db")).unwrap();

        let item = FoodItem {
            id: "f9".into(),
            name: "TEST SNACK".into(),
            price: 4.0,
            description: String::new(),
            image: String::new(),
            tags: vec![],
            is_out_of_stock: false,
        };
        db.food_add(&item).unwrap();

        let mut sold_out = item.clone();
        sold_out.is_out_of_stock = true;
        db.food_update(&sold_out).unwrap();

        let items = db.food_get_all().unwrap();
        let found = items.iter().find(|f| f.id == "f9").unwrap();
        assert!(found.is_out_of_stock);
    }
}
