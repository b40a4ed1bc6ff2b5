use styler_api::{
    catalog::{ClothingCategory, Color, Season},
    db::{create_pool, run_migrations},
    error::AppError,
    models::{NewClothingItem, NewOutfit, NewUser},
    storage::{PgStorage, Storage, sample_shopping_items},
};
use uuid::Uuid;

// Integration flow against Postgres: user -> wardrobe -> outfit -> delete piece.
#[tokio::test]
async fn postgres_storage_flow() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
            );
            return Ok(());
        }
    };

    let pool = create_pool(&database_url).await?;
    run_migrations(&pool).await?;
    let storage = PgStorage::new(pool);

    let suffix = Uuid::new_v4().simple().to_string();
    let username = format!("user_{}", &suffix[..12]);
    let email = format!("{username}@example.com");
    let user = storage
        .create_user(NewUser {
            username: username.clone(),
            password_hash: "hash".into(),
            email: email.clone(),
            name: "Flow Test".into(),
        })
        .await?;

    let duplicate = storage
        .create_user(NewUser {
            username,
            password_hash: "hash".into(),
            email: email.to_uppercase(),
            name: "Again".into(),
        })
        .await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));
    assert!(storage.get_user_by_email(&email.to_uppercase()).await?.is_some());

    let piece = |name: &str, category| NewClothingItem {
        user_id: user.id,
        name: name.into(),
        category,
        colors: vec![Color::Black, Color::White],
        seasons: vec![Season::Fall],
        image_url: None,
    };
    let shirt = storage
        .create_clothing(piece("Striped Shirt", ClothingCategory::Shirts))
        .await?;
    let shoes = storage
        .create_clothing(piece("Sneakers", ClothingCategory::Shoes))
        .await?;
    assert_eq!(shirt.colors, vec![Color::Black, Color::White]);

    let outfit = storage
        .create_outfit(NewOutfit {
            user_id: user.id,
            name: "Weekend".into(),
            items: vec![shirt.id, shoes.id],
            occasion: None,
            weather: None,
            is_favorite: true,
        })
        .await?;

    storage.delete_clothing(shirt.id).await?;
    let outfit = storage.get_outfit(outfit.id).await?.expect("outfit");
    assert_eq!(outfit.items, vec![shoes.id]);
    assert!(outfit.is_favorite);

    let stale = storage
        .create_outfit(NewOutfit {
            user_id: user.id,
            name: "Stale".into(),
            items: vec![shirt.id],
            occasion: None,
            weather: None,
            is_favorite: false,
        })
        .await;
    assert!(matches!(stale, Err(AppError::BadRequest(_))));

    let owned = storage
        .get_clothing_by_ids(&[shirt.id, shoes.id], user.id)
        .await?;
    assert_eq!(owned.len(), 1);

    for item in sample_shopping_items() {
        storage.create_shopping_item(item).await?;
    }
    let catalog = storage.list_shopping().await?;
    assert!(catalog.iter().any(|i| i.name == "Classic Leather Belt"));

    Ok(())
}
