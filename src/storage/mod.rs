//! Persistence for users, wardrobes, saved outfits and the shopping catalog.
//!
//! Both backends enforce the same invariants: unique usernames and emails,
//! and removal of a deleted clothing item's id from every outfit that
//! referenced it.

use async_trait::async_trait;

use crate::{
    catalog::ClothingCategory,
    error::{AppError, AppResult},
    models::{
        ClothingItem, NewClothingItem, NewOutfit, NewShoppingItem, NewUser, Outfit, ShoppingItem,
        User,
    },
};

pub mod memory;
pub mod postgres;

pub use memory::MemStorage;
pub use postgres::PgStorage;

#[async_trait]
pub trait Storage: Send + Sync {
    /// Short backend name for health reporting.
    fn backend(&self) -> &'static str;

    async fn get_user(&self, id: i32) -> AppResult<Option<User>>;
    async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>>;
    async fn get_user_by_email(&self, email: &str) -> AppResult<Option<User>>;
    async fn create_user(&self, user: NewUser) -> AppResult<User>;

    async fn list_clothing_by_user(&self, user_id: i32) -> AppResult<Vec<ClothingItem>>;
    async fn get_clothing(&self, id: i32) -> AppResult<Option<ClothingItem>>;
    /// Items among `ids` that belong to `user_id`; foreign or unknown ids are skipped.
    async fn get_clothing_by_ids(&self, ids: &[i32], user_id: i32) -> AppResult<Vec<ClothingItem>>;
    async fn create_clothing(&self, item: NewClothingItem) -> AppResult<ClothingItem>;
    async fn update_clothing(&self, id: i32, item: NewClothingItem) -> AppResult<ClothingItem>;
    async fn delete_clothing(&self, id: i32) -> AppResult<()>;

    async fn list_outfits_by_user(&self, user_id: i32) -> AppResult<Vec<Outfit>>;
    async fn get_outfit(&self, id: i32) -> AppResult<Option<Outfit>>;
    /// Fails with `BadRequest` when an item is not owned by `outfit.user_id`.
    /// The check and the write happen under one lock or transaction.
    async fn create_outfit(&self, outfit: NewOutfit) -> AppResult<Outfit>;
    /// Same ownership rule as `create_outfit`.
    async fn update_outfit(&self, id: i32, outfit: NewOutfit) -> AppResult<Outfit>;
    async fn delete_outfit(&self, id: i32) -> AppResult<()>;

    async fn list_shopping(&self) -> AppResult<Vec<ShoppingItem>>;
    async fn get_shopping(&self, id: i32) -> AppResult<Option<ShoppingItem>>;
    async fn shopping_compatible_with(&self, clothing_id: i32) -> AppResult<Vec<ShoppingItem>>;
    async fn create_shopping_item(&self, item: NewShoppingItem) -> AppResult<ShoppingItem>;
}

/// Every id in `items` must appear in `owned`.
fn check_outfit_items(items: &[i32], owned: &[i32]) -> AppResult<()> {
    match items.iter().find(|id| !owned.contains(id)) {
        Some(missing) => Err(AppError::BadRequest(format!(
            "clothing item {missing} is not in your wardrobe"
        ))),
        None => Ok(()),
    }
}

/// The sample shopping catalog every fresh store starts with.
pub fn sample_shopping_items() -> Vec<NewShoppingItem> {
    let item = |name: &str,
                price: i32,
                brand: &str,
                category: ClothingCategory,
                image: &str,
                color: &str,
                compatible_with: &[i32]| NewShoppingItem {
        name: name.to_string(),
        price,
        brand: brand.to_string(),
        category,
        image_url: Some(format!(
            "https://images.unsplash.com/{image}?w=500&auto=format&fit=crop&q=60"
        )),
        colors: vec![color.to_string()],
        compatible_with: compatible_with.to_vec(),
    };

    vec![
        item(
            "Classic Blue Shirt",
            299,
            "Elegance Co.",
            ClothingCategory::Shirts,
            "photo-1521572163474-6864f9cf17ab",
            "blue",
            &[1, 3, 5],
        ),
        item(
            "Classic Beige Trousers",
            349,
            "Style Co.",
            ClothingCategory::Pants,
            "photo-1541099649105-f69ad21f3246",
            "beige",
            &[2, 4],
        ),
        item(
            "Elegant Brown Jacket",
            599,
            "Luxe Co.",
            ClothingCategory::Jackets,
            "photo-1551537482-f2075a1d41f2",
            "brown",
            &[1, 2],
        ),
        item(
            "Classic Leather Belt",
            149,
            "Classic Co.",
            ClothingCategory::Accessories,
            "photo-1600269452121-4f2416e55c28",
            "black",
            &[1, 2, 3],
        ),
    ]
}
