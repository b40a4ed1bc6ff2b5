use styler_api::{
    catalog::{ClothingCategory, Color, Season},
    config::AppConfig,
    db::{create_pool, run_migrations},
    models::{NewClothingItem, NewUser, User},
    services::auth_service::hash_password,
    storage::{PgStorage, Storage, sample_shopping_items},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let database_url = config
        .database_url
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set to seed the database"))?;

    let pool = create_pool(&database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&pool).await?;
    let storage = PgStorage::new(pool);

    let user = ensure_user(&storage, "demo", "demo123", "demo@example.com", "Demo User").await?;
    seed_wardrobe(&storage, &user).await?;
    seed_shopping(&storage).await?;

    println!("Seed completed. Demo user ID: {}", user.id);
    Ok(())
}

async fn ensure_user(
    storage: &PgStorage,
    username: &str,
    password: &str,
    email: &str,
    name: &str,
) -> anyhow::Result<User> {
    if let Some(existing) = storage.get_user_by_username(username).await? {
        println!("User {username} already exists");
        return Ok(existing);
    }

    let user = storage
        .create_user(NewUser {
            username: username.to_string(),
            password_hash: hash_password(password)?,
            email: email.to_string(),
            name: name.to_string(),
        })
        .await?;
    println!("Created user {username}");
    Ok(user)
}

async fn seed_wardrobe(storage: &PgStorage, user: &User) -> anyhow::Result<()> {
    if !storage.list_clothing_by_user(user.id).await?.is_empty() {
        println!("Wardrobe already seeded");
        return Ok(());
    }

    use ClothingCategory::*;
    let pieces: [(&str, ClothingCategory, Color, &[Season]); 5] = [
        ("White Oxford Shirt", Shirts, Color::White, &[Season::Spring, Season::Summer]),
        ("Navy Chinos", Pants, Color::Blue, &[Season::Spring, Season::Fall]),
        ("Brown Loafers", Shoes, Color::Brown, &[Season::Summer, Season::Fall]),
        ("Grey Wool Coat", Jackets, Color::Gray, &[Season::Fall, Season::Winter]),
        ("Black Leather Belt", Accessories, Color::Black, Season::ALL),
    ];

    for (name, category, color, seasons) in pieces {
        storage
            .create_clothing(NewClothingItem {
                user_id: user.id,
                name: name.to_string(),
                category,
                colors: vec![color],
                seasons: seasons.to_vec(),
                image_url: None,
            })
            .await?;
    }

    println!("Seeded wardrobe");
    Ok(())
}

async fn seed_shopping(storage: &PgStorage) -> anyhow::Result<()> {
    for item in sample_shopping_items() {
        storage.create_shopping_item(item).await?;
    }

    println!("Seeded shopping catalog");
    Ok(())
}
