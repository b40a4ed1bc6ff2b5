use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, Postgres, Transaction};

use crate::{
    catalog::{self, UnknownValue},
    db::DbPool,
    error::{AppError, AppResult},
    models::{
        ClothingItem, NewClothingItem, NewOutfit, NewShoppingItem, NewUser, Outfit, ShoppingItem,
        User,
    },
    storage::{Storage, check_outfit_items},
};

/// Postgres-backed store. Schema lives in `migrations/`.
#[derive(Clone)]
pub struct PgStorage {
    pool: DbPool,
}

impl PgStorage {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: i32,
    username: String,
    password_hash: String,
    email: String,
    name: String,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            username: row.username,
            password_hash: row.password_hash,
            email: row.email,
            name: row.name,
            created_at: row.created_at,
        }
    }
}

#[derive(FromRow)]
struct ClothingRow {
    id: i32,
    user_id: i32,
    name: String,
    category: String,
    colors: Vec<String>,
    seasons: Vec<String>,
    image_url: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<ClothingRow> for ClothingItem {
    type Error = UnknownValue;

    fn try_from(row: ClothingRow) -> Result<Self, Self::Error> {
        Ok(ClothingItem {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            category: row.category.parse()?,
            colors: catalog::parse_all(&row.colors)?,
            seasons: catalog::parse_all(&row.seasons)?,
            image_url: row.image_url,
            created_at: row.created_at,
        })
    }
}

#[derive(FromRow)]
struct OutfitRow {
    id: i32,
    user_id: i32,
    name: String,
    items: Vec<i32>,
    occasion: Option<String>,
    weather: Option<String>,
    is_favorite: bool,
    created_at: DateTime<Utc>,
}

impl From<OutfitRow> for Outfit {
    fn from(row: OutfitRow) -> Self {
        Outfit {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            items: row.items,
            occasion: row.occasion,
            weather: row.weather,
            is_favorite: row.is_favorite,
            created_at: row.created_at,
        }
    }
}

#[derive(FromRow)]
struct ShoppingRow {
    id: i32,
    name: String,
    price: i32,
    brand: String,
    category: String,
    image_url: Option<String>,
    colors: Vec<String>,
    compatible_with: Vec<i32>,
}

impl TryFrom<ShoppingRow> for ShoppingItem {
    type Error = UnknownValue;

    fn try_from(row: ShoppingRow) -> Result<Self, Self::Error> {
        Ok(ShoppingItem {
            id: row.id,
            name: row.name,
            price: row.price,
            brand: row.brand,
            category: row.category.parse()?,
            image_url: row.image_url,
            colors: row.colors,
            compatible_with: row.compatible_with,
        })
    }
}

fn corrupt(err: UnknownValue) -> AppError {
    AppError::Internal(anyhow::anyhow!("stored row is invalid: {err}"))
}

fn clothing_rows(rows: Vec<ClothingRow>) -> AppResult<Vec<ClothingItem>> {
    rows.into_iter()
        .map(|row| ClothingItem::try_from(row).map_err(corrupt))
        .collect()
}

fn shopping_rows(rows: Vec<ShoppingRow>) -> AppResult<Vec<ShoppingItem>> {
    rows.into_iter()
        .map(|row| ShoppingItem::try_from(row).map_err(corrupt))
        .collect()
}

fn unique_violation(err: sqlx::Error, message: &str) -> AppError {
    match err.as_database_error() {
        Some(db_err) if db_err.is_unique_violation() => AppError::Conflict(message.to_string()),
        _ => AppError::DbError(err),
    }
}

/// Share-lock the caller's referenced items for the rest of the transaction
/// so a concurrent delete waits until the outfit row is written.
async fn lock_owned_items(
    tx: &mut Transaction<'_, Postgres>,
    user_id: i32,
    items: &[i32],
) -> AppResult<()> {
    let owned: Vec<i32> = sqlx::query_scalar(
        "SELECT id FROM clothing_items WHERE id = ANY($1) AND user_id = $2 FOR SHARE",
    )
    .bind(items)
    .bind(user_id)
    .fetch_all(&mut **tx)
    .await?;
    check_outfit_items(items, &owned)
}

#[async_trait]
impl Storage for PgStorage {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn get_user(&self, id: i32) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(User::from))
    }

    async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(User::from))
    }

    async fn get_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE lower(email) = lower($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(User::from))
    }

    async fn create_user(&self, user: NewUser) -> AppResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (username, password_hash, email, name)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(user.username)
        .bind(user.password_hash)
        .bind(user.email)
        .bind(user.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| unique_violation(e, "Username or email already exists"))?;
        Ok(row.into())
    }

    async fn list_clothing_by_user(&self, user_id: i32) -> AppResult<Vec<ClothingItem>> {
        let rows = sqlx::query_as::<_, ClothingRow>(
            "SELECT * FROM clothing_items WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        clothing_rows(rows)
    }

    async fn get_clothing(&self, id: i32) -> AppResult<Option<ClothingItem>> {
        let row = sqlx::query_as::<_, ClothingRow>("SELECT * FROM clothing_items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| ClothingItem::try_from(r).map_err(corrupt))
            .transpose()
    }

    async fn get_clothing_by_ids(&self, ids: &[i32], user_id: i32) -> AppResult<Vec<ClothingItem>> {
        let rows = sqlx::query_as::<_, ClothingRow>(
            "SELECT * FROM clothing_items WHERE id = ANY($1) AND user_id = $2 ORDER BY id",
        )
        .bind(ids)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        clothing_rows(rows)
    }

    async fn create_clothing(&self, item: NewClothingItem) -> AppResult<ClothingItem> {
        let row = sqlx::query_as::<_, ClothingRow>(
            r#"
            INSERT INTO clothing_items (user_id, name, category, colors, seasons, image_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(item.user_id)
        .bind(item.name)
        .bind(item.category.as_str())
        .bind(catalog::to_strings(&item.colors))
        .bind(catalog::to_strings(&item.seasons))
        .bind(item.image_url)
        .fetch_one(&self.pool)
        .await?;
        ClothingItem::try_from(row).map_err(corrupt)
    }

    async fn update_clothing(&self, id: i32, item: NewClothingItem) -> AppResult<ClothingItem> {
        let row = sqlx::query_as::<_, ClothingRow>(
            r#"
            UPDATE clothing_items
            SET user_id = $2, name = $3, category = $4, colors = $5, seasons = $6, image_url = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(item.user_id)
        .bind(item.name)
        .bind(item.category.as_str())
        .bind(catalog::to_strings(&item.colors))
        .bind(catalog::to_strings(&item.seasons))
        .bind(item.image_url)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound)?;
        ClothingItem::try_from(row).map_err(corrupt)
    }

    async fn delete_clothing(&self, id: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query("DELETE FROM clothing_items WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        sqlx::query("UPDATE outfits SET items = array_remove(items, $1) WHERE $1 = ANY(items)")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(())
    }

    async fn list_outfits_by_user(&self, user_id: i32) -> AppResult<Vec<Outfit>> {
        let rows = sqlx::query_as::<_, OutfitRow>(
            "SELECT * FROM outfits WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Outfit::from).collect())
    }

    async fn get_outfit(&self, id: i32) -> AppResult<Option<Outfit>> {
        let row = sqlx::query_as::<_, OutfitRow>("SELECT * FROM outfits WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Outfit::from))
    }

    async fn create_outfit(&self, outfit: NewOutfit) -> AppResult<Outfit> {
        let mut tx = self.pool.begin().await?;
        lock_owned_items(&mut tx, outfit.user_id, &outfit.items).await?;

        let row = sqlx::query_as::<_, OutfitRow>(
            r#"
            INSERT INTO outfits (user_id, name, items, occasion, weather, is_favorite)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(outfit.user_id)
        .bind(outfit.name)
        .bind(outfit.items)
        .bind(outfit.occasion)
        .bind(outfit.weather)
        .bind(outfit.is_favorite)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(row.into())
    }

    async fn update_outfit(&self, id: i32, outfit: NewOutfit) -> AppResult<Outfit> {
        let mut tx = self.pool.begin().await?;
        lock_owned_items(&mut tx, outfit.user_id, &outfit.items).await?;

        let row = sqlx::query_as::<_, OutfitRow>(
            r#"
            UPDATE outfits
            SET user_id = $2, name = $3, items = $4, occasion = $5, weather = $6, is_favorite = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(outfit.user_id)
        .bind(outfit.name)
        .bind(outfit.items)
        .bind(outfit.occasion)
        .bind(outfit.weather)
        .bind(outfit.is_favorite)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(AppError::NotFound)?;
        tx.commit().await?;
        Ok(row.into())
    }

    async fn delete_outfit(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM outfits WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn list_shopping(&self) -> AppResult<Vec<ShoppingItem>> {
        let rows = sqlx::query_as::<_, ShoppingRow>("SELECT * FROM shopping_items ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        shopping_rows(rows)
    }

    async fn get_shopping(&self, id: i32) -> AppResult<Option<ShoppingItem>> {
        let row = sqlx::query_as::<_, ShoppingRow>("SELECT * FROM shopping_items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| ShoppingItem::try_from(r).map_err(corrupt))
            .transpose()
    }

    async fn shopping_compatible_with(&self, clothing_id: i32) -> AppResult<Vec<ShoppingItem>> {
        let rows = sqlx::query_as::<_, ShoppingRow>(
            "SELECT * FROM shopping_items WHERE $1 = ANY(compatible_with) ORDER BY id",
        )
        .bind(clothing_id)
        .fetch_all(&self.pool)
        .await?;
        shopping_rows(rows)
    }

    async fn create_shopping_item(&self, item: NewShoppingItem) -> AppResult<ShoppingItem> {
        let row = sqlx::query_as::<_, ShoppingRow>(
            r#"
            INSERT INTO shopping_items (name, price, brand, category, image_url, colors, compatible_with)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING *
            "#,
        )
        .bind(item.name)
        .bind(item.price)
        .bind(item.brand)
        .bind(item.category.as_str())
        .bind(item.image_url)
        .bind(item.colors)
        .bind(item.compatible_with)
        .fetch_one(&self.pool)
        .await?;
        ShoppingItem::try_from(row).map_err(corrupt)
    }
}
