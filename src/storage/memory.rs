use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::{
        ClothingItem, NewClothingItem, NewOutfit, NewShoppingItem, NewUser, Outfit, ShoppingItem,
        User,
    },
    storage::{Storage, check_outfit_items, sample_shopping_items},
};

/// Keyed in-memory store. Maps are ordered by id so listings are stable.
pub struct MemStorage {
    inner: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    users: BTreeMap<i32, User>,
    clothing: BTreeMap<i32, ClothingItem>,
    outfits: BTreeMap<i32, Outfit>,
    shopping: BTreeMap<i32, ShoppingItem>,
    next_user_id: i32,
    next_clothing_id: i32,
    next_outfit_id: i32,
    next_shopping_id: i32,
}

fn next_id(counter: &mut i32) -> i32 {
    *counter += 1;
    *counter
}

impl MemStorage {
    /// Empty store without the sample shopping catalog.
    pub fn empty() -> Self {
        Self {
            inner: RwLock::new(Tables::default()),
        }
    }

    /// Store seeded with the sample shopping catalog.
    pub fn new() -> Self {
        let storage = Self::empty();
        {
            let mut tables = storage.inner.write();
            for item in sample_shopping_items() {
                tables.insert_shopping(item);
            }
        }
        storage
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Tables {
    fn check_owned(&self, user_id: i32, items: &[i32]) -> AppResult<()> {
        let owned: Vec<i32> = self
            .clothing
            .values()
            .filter(|item| item.user_id == user_id && items.contains(&item.id))
            .map(|item| item.id)
            .collect();
        check_outfit_items(items, &owned)
    }

    fn insert_shopping(&mut self, item: NewShoppingItem) -> ShoppingItem {
        let id = next_id(&mut self.next_shopping_id);
        let item = ShoppingItem {
            id,
            name: item.name,
            price: item.price,
            brand: item.brand,
            category: item.category,
            image_url: item.image_url,
            colors: item.colors,
            compatible_with: item.compatible_with,
        };
        self.shopping.insert(id, item.clone());
        item
    }
}

#[async_trait]
impl Storage for MemStorage {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn get_user(&self, id: i32) -> AppResult<Option<User>> {
        Ok(self.inner.read().users.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .inner
            .read()
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .inner
            .read()
            .users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn create_user(&self, user: NewUser) -> AppResult<User> {
        let mut tables = self.inner.write();
        if tables.users.values().any(|u| u.username == user.username) {
            return Err(AppError::Conflict("Username already exists".into()));
        }
        if tables
            .users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(AppError::Conflict("Email already exists".into()));
        }

        let id = next_id(&mut tables.next_user_id);
        let user = User {
            id,
            username: user.username,
            password_hash: user.password_hash,
            email: user.email,
            name: user.name,
            created_at: Utc::now(),
        };
        tables.users.insert(id, user.clone());
        Ok(user)
    }

    async fn list_clothing_by_user(&self, user_id: i32) -> AppResult<Vec<ClothingItem>> {
        Ok(self
            .inner
            .read()
            .clothing
            .values()
            .filter(|item| item.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_clothing(&self, id: i32) -> AppResult<Option<ClothingItem>> {
        Ok(self.inner.read().clothing.get(&id).cloned())
    }

    async fn get_clothing_by_ids(&self, ids: &[i32], user_id: i32) -> AppResult<Vec<ClothingItem>> {
        Ok(self
            .inner
            .read()
            .clothing
            .values()
            .filter(|item| item.user_id == user_id && ids.contains(&item.id))
            .cloned()
            .collect())
    }

    async fn create_clothing(&self, item: NewClothingItem) -> AppResult<ClothingItem> {
        let mut tables = self.inner.write();
        let id = next_id(&mut tables.next_clothing_id);
        let item = ClothingItem {
            id,
            user_id: item.user_id,
            name: item.name,
            category: item.category,
            colors: item.colors,
            seasons: item.seasons,
            image_url: item.image_url,
            created_at: Utc::now(),
        };
        tables.clothing.insert(id, item.clone());
        Ok(item)
    }

    async fn update_clothing(&self, id: i32, item: NewClothingItem) -> AppResult<ClothingItem> {
        let mut tables = self.inner.write();
        let existing = tables.clothing.get_mut(&id).ok_or(AppError::NotFound)?;
        existing.user_id = item.user_id;
        existing.name = item.name;
        existing.category = item.category;
        existing.colors = item.colors;
        existing.seasons = item.seasons;
        existing.image_url = item.image_url;
        Ok(existing.clone())
    }

    async fn delete_clothing(&self, id: i32) -> AppResult<()> {
        let mut tables = self.inner.write();
        if tables.clothing.remove(&id).is_none() {
            return Err(AppError::NotFound);
        }
        for outfit in tables.outfits.values_mut() {
            outfit.items.retain(|item_id| *item_id != id);
        }
        Ok(())
    }

    async fn list_outfits_by_user(&self, user_id: i32) -> AppResult<Vec<Outfit>> {
        Ok(self
            .inner
            .read()
            .outfits
            .values()
            .filter(|outfit| outfit.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_outfit(&self, id: i32) -> AppResult<Option<Outfit>> {
        Ok(self.inner.read().outfits.get(&id).cloned())
    }

    async fn create_outfit(&self, outfit: NewOutfit) -> AppResult<Outfit> {
        let mut tables = self.inner.write();
        tables.check_owned(outfit.user_id, &outfit.items)?;
        let id = next_id(&mut tables.next_outfit_id);
        let outfit = Outfit {
            id,
            user_id: outfit.user_id,
            name: outfit.name,
            items: outfit.items,
            occasion: outfit.occasion,
            weather: outfit.weather,
            is_favorite: outfit.is_favorite,
            created_at: Utc::now(),
        };
        tables.outfits.insert(id, outfit.clone());
        Ok(outfit)
    }

    async fn update_outfit(&self, id: i32, outfit: NewOutfit) -> AppResult<Outfit> {
        let mut tables = self.inner.write();
        tables.check_owned(outfit.user_id, &outfit.items)?;
        let existing = tables.outfits.get_mut(&id).ok_or(AppError::NotFound)?;
        existing.user_id = outfit.user_id;
        existing.name = outfit.name;
        existing.items = outfit.items;
        existing.occasion = outfit.occasion;
        existing.weather = outfit.weather;
        existing.is_favorite = outfit.is_favorite;
        Ok(existing.clone())
    }

    async fn delete_outfit(&self, id: i32) -> AppResult<()> {
        match self.inner.write().outfits.remove(&id) {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound),
        }
    }

    async fn list_shopping(&self) -> AppResult<Vec<ShoppingItem>> {
        Ok(self.inner.read().shopping.values().cloned().collect())
    }

    async fn get_shopping(&self, id: i32) -> AppResult<Option<ShoppingItem>> {
        Ok(self.inner.read().shopping.get(&id).cloned())
    }

    async fn shopping_compatible_with(&self, clothing_id: i32) -> AppResult<Vec<ShoppingItem>> {
        Ok(self
            .inner
            .read()
            .shopping
            .values()
            .filter(|item| item.compatible_with.contains(&clothing_id))
            .cloned()
            .collect())
    }

    async fn create_shopping_item(&self, item: NewShoppingItem) -> AppResult<ShoppingItem> {
        Ok(self.inner.write().insert_shopping(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ClothingCategory, Color, Season};

    fn new_user(username: &str, email: &str) -> NewUser {
        NewUser {
            username: username.into(),
            password_hash: "hash".into(),
            email: email.into(),
            name: "Test".into(),
        }
    }

    fn shirt(user_id: i32, name: &str) -> NewClothingItem {
        NewClothingItem {
            user_id,
            name: name.into(),
            category: ClothingCategory::Shirts,
            colors: vec![Color::White],
            seasons: vec![Season::Summer],
            image_url: None,
        }
    }

    fn outfit(user_id: i32, items: Vec<i32>) -> NewOutfit {
        NewOutfit {
            user_id,
            name: "Look".into(),
            items,
            occasion: None,
            weather: None,
            is_favorite: false,
        }
    }

    #[tokio::test]
    async fn usernames_and_emails_are_unique() {
        let store = MemStorage::empty();
        store.create_user(new_user("sara", "sara@example.com")).await.unwrap();

        let dup_name = store.create_user(new_user("sara", "other@example.com")).await;
        assert!(matches!(dup_name, Err(AppError::Conflict(_))));

        let dup_email = store.create_user(new_user("omar", "SARA@example.com")).await;
        assert!(matches!(dup_email, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn ids_start_at_one_per_table() {
        let store = MemStorage::empty();
        let user = store.create_user(new_user("sara", "sara@example.com")).await.unwrap();
        let item = store.create_clothing(shirt(user.id, "Tee")).await.unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(item.id, 1);
    }

    #[tokio::test]
    async fn deleting_clothing_cleans_outfit_references() {
        let store = MemStorage::empty();
        let a = store.create_clothing(shirt(1, "A")).await.unwrap();
        let b = store.create_clothing(shirt(1, "B")).await.unwrap();
        let look = store.create_outfit(outfit(1, vec![a.id, b.id])).await.unwrap();
        let other = store.create_outfit(outfit(1, vec![b.id])).await.unwrap();

        store.delete_clothing(a.id).await.unwrap();

        assert_eq!(store.get_outfit(look.id).await.unwrap().unwrap().items, vec![b.id]);
        assert_eq!(store.get_outfit(other.id).await.unwrap().unwrap().items, vec![b.id]);
        assert!(matches!(store.delete_clothing(a.id).await, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn outfits_only_reference_owned_items() {
        let store = MemStorage::empty();
        let mine = store.create_clothing(shirt(1, "Mine")).await.unwrap();
        let theirs = store.create_clothing(shirt(2, "Theirs")).await.unwrap();

        let foreign = store.create_outfit(outfit(1, vec![mine.id, theirs.id])).await;
        assert!(matches!(foreign, Err(AppError::BadRequest(_))));

        let look = store.create_outfit(outfit(1, vec![mine.id])).await.unwrap();
        store.delete_clothing(mine.id).await.unwrap();
        let stale = store.update_outfit(look.id, outfit(1, vec![mine.id])).await;
        assert!(matches!(stale, Err(AppError::BadRequest(_))));
        assert!(store.get_outfit(look.id).await.unwrap().unwrap().items.is_empty());
    }

    #[tokio::test]
    async fn lookup_by_ids_only_returns_owned_items() {
        let store = MemStorage::empty();
        let mine = store.create_clothing(shirt(1, "Mine")).await.unwrap();
        let theirs = store.create_clothing(shirt(2, "Theirs")).await.unwrap();

        let found = store
            .get_clothing_by_ids(&[mine.id, theirs.id, 99], 1)
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, mine.id);
    }

    #[tokio::test]
    async fn update_keeps_id_and_creation_time() {
        let store = MemStorage::empty();
        let item = store.create_clothing(shirt(1, "Old")).await.unwrap();
        let updated = store.update_clothing(item.id, shirt(1, "New")).await.unwrap();
        assert_eq!(updated.id, item.id);
        assert_eq!(updated.created_at, item.created_at);
        assert_eq!(updated.name, "New");

        let missing = store.update_clothing(42, shirt(1, "Ghost")).await;
        assert!(matches!(missing, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn sample_catalog_is_seeded() {
        let store = MemStorage::new();
        let items = store.list_shopping().await.unwrap();
        assert_eq!(items.len(), 4);

        let compatible = store.shopping_compatible_with(3).await.unwrap();
        let names: Vec<_> = compatible.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Classic Blue Shirt", "Classic Leather Belt"]);
    }
}
