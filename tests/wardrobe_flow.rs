use std::sync::Arc;

use chrono::Utc;
use styler_api::{
    catalog::{ClothingCategory, Color, Season},
    config::AppConfig,
    dto::{
        auth::{LoginRequest, RegisterRequest},
        outfits::{OutfitQuery, OutfitRequest},
        suggestions::{
            OccasionOutfitRequest, WardrobeOutfitRequest, WardrobeWeather, WeatherOutfitRequest,
        },
        wardrobe::{ClothingItemRequest, ClothingQuery},
    },
    error::AppError,
    middleware::auth::AuthUser,
    services::{auth_service, outfit_service, shopping_service, suggestion_service, wardrobe_service},
    state::AppState,
    storage::MemStorage,
};
use uuid::Uuid;

fn setup_state() -> AppState {
    AppState::new(Arc::new(MemStorage::new()), AppConfig::for_tests())
}

async fn register(state: &AppState, username: &str) -> anyhow::Result<AuthUser> {
    let resp = auth_service::register_user(
        state,
        RegisterRequest {
            username: username.into(),
            password: "secret123".into(),
            email: format!("{username}@example.com"),
            name: username.to_uppercase(),
        },
    )
    .await?;
    let user = resp.data.expect("auth data").user;
    Ok(AuthUser {
        user_id: user.id,
        jti: Uuid::new_v4(),
        expires_at: Utc::now() + chrono::Duration::hours(1),
    })
}

fn clothing(
    name: &str,
    category: ClothingCategory,
    color: Color,
    seasons: Vec<Season>,
) -> ClothingItemRequest {
    ClothingItemRequest {
        name: name.into(),
        category,
        colors: vec![color],
        seasons,
        image_url: None,
    }
}

// register -> add wardrobe -> save outfit -> delete a piece -> outfit no longer references it
#[tokio::test]
async fn wardrobe_and_outfit_flow() -> anyhow::Result<()> {
    let state = setup_state();
    let sara = register(&state, "sara").await?;

    let login = auth_service::login_user(
        &state,
        LoginRequest {
            username: "sara".into(),
            password: "secret123".into(),
        },
    )
    .await?;
    assert!(login.data.expect("login data").token.starts_with("Bearer "));

    let shirt = wardrobe_service::add_item(
        &state,
        &sara,
        clothing("White Shirt", ClothingCategory::Shirts, Color::White, vec![Season::Summer]),
    )
    .await?
    .data
    .expect("shirt");
    let pants = wardrobe_service::add_item(
        &state,
        &sara,
        clothing("Navy Chinos", ClothingCategory::Pants, Color::Blue, vec![Season::Summer]),
    )
    .await?
    .data
    .expect("pants");

    let listed = wardrobe_service::list_items(
        &state,
        &sara,
        ClothingQuery {
            category: Some(ClothingCategory::Pants),
            ..Default::default()
        },
    )
    .await?;
    let items = listed.data.expect("list").items;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, pants.id);

    let outfit = outfit_service::create_outfit(
        &state,
        &sara,
        OutfitRequest {
            name: "Summer look".into(),
            items: vec![shirt.id, pants.id],
            occasion: Some("outing".into()),
            weather: None,
            is_favorite: false,
        },
    )
    .await?
    .data
    .expect("outfit");

    let toggled = outfit_service::toggle_favorite(&state, &sara, outfit.id)
        .await?
        .data
        .expect("toggled");
    assert!(toggled.is_favorite);

    let favorites = outfit_service::list_outfits(
        &state,
        &sara,
        OutfitQuery {
            favorites_only: true,
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(favorites.data.expect("favorites").items.len(), 1);

    wardrobe_service::delete_item(&state, &sara, shirt.id).await?;
    let after = outfit_service::get_outfit(&state, &sara, outfit.id)
        .await?
        .data
        .expect("outfit after delete");
    assert_eq!(after.items, vec![pants.id]);

    Ok(())
}

#[tokio::test]
async fn other_users_items_are_forbidden() -> anyhow::Result<()> {
    let state = setup_state();
    let sara = register(&state, "sara").await?;
    let omar = register(&state, "omar").await?;

    let shirt = wardrobe_service::add_item(
        &state,
        &sara,
        clothing("Tee", ClothingCategory::Shirts, Color::Black, vec![Season::Summer]),
    )
    .await?
    .data
    .expect("shirt");

    let read = wardrobe_service::get_item(&state, &omar, shirt.id).await;
    assert!(matches!(read, Err(AppError::Forbidden)));

    let borrowed = outfit_service::create_outfit(
        &state,
        &omar,
        OutfitRequest {
            name: "Borrowed".into(),
            items: vec![shirt.id],
            occasion: None,
            weather: None,
            is_favorite: false,
        },
    )
    .await;
    assert!(matches!(borrowed, Err(AppError::BadRequest(_))));

    let compatible = shopping_service::compatible_with(&state, &omar, shirt.id).await;
    assert!(matches!(compatible, Err(AppError::Forbidden)));

    let missing = wardrobe_service::get_item(&state, &omar, 999).await;
    assert!(matches!(missing, Err(AppError::NotFound)));

    Ok(())
}

#[tokio::test]
async fn duplicate_registration_conflicts() -> anyhow::Result<()> {
    let state = setup_state();
    register(&state, "sara").await?;

    let again = auth_service::register_user(
        &state,
        RegisterRequest {
            username: "sara".into(),
            password: "secret123".into(),
            email: "another@example.com".into(),
            name: "Sara".into(),
        },
    )
    .await;
    assert!(matches!(again, Err(AppError::Conflict(_))));

    let bad_login = auth_service::login_user(
        &state,
        LoginRequest {
            username: "sara".into(),
            password: "wrong-password".into(),
        },
    )
    .await;
    assert!(matches!(bad_login, Err(AppError::Unauthorized)));

    Ok(())
}

#[tokio::test]
async fn suggestions_use_owned_wardrobe_items() -> anyhow::Result<()> {
    let state = setup_state();
    let sara = register(&state, "sara").await?;
    let omar = register(&state, "omar").await?;

    let linen = wardrobe_service::add_item(
        &state,
        &sara,
        clothing("Linen Shirt", ClothingCategory::Shirts, Color::White, vec![Season::Summer]),
    )
    .await?
    .data
    .expect("linen");
    let flannel = wardrobe_service::add_item(
        &state,
        &sara,
        clothing("Flannel Shirt", ClothingCategory::Shirts, Color::Red, vec![Season::Winter]),
    )
    .await?
    .data
    .expect("flannel");
    let boots = wardrobe_service::add_item(
        &state,
        &sara,
        clothing("Boots", ClothingCategory::Shoes, Color::Brown, vec![Season::Winter]),
    )
    .await?
    .data
    .expect("boots");

    let generated = suggestion_service::from_wardrobe(
        &state,
        &sara,
        WardrobeOutfitRequest {
            clothing_items: vec![linen.id, flannel.id, boots.id],
            occasion: None,
            weather: Some(WardrobeWeather {
                condition: "snow".into(),
                temperature: 2.0,
            }),
        },
    )
    .await?
    .data
    .expect("generated");
    let ids: Vec<_> = generated
        .items
        .iter()
        .filter_map(|piece| piece.clothing_item_id)
        .collect();
    // the summer shirt has the lower id but does not fit 2°C
    assert_eq!(ids, vec![flannel.id, boots.id]);
    assert!(generated.outfit_image.starts_with("data:image/svg+xml"));

    let foreign = suggestion_service::from_wardrobe(
        &state,
        &omar,
        WardrobeOutfitRequest {
            clothing_items: vec![flannel.id],
            occasion: None,
            weather: None,
        },
    )
    .await;
    assert!(matches!(foreign, Err(AppError::NotFound)));

    let empty = suggestion_service::from_wardrobe(
        &state,
        &sara,
        WardrobeOutfitRequest {
            clothing_items: vec![],
            occasion: None,
            weather: None,
        },
    )
    .await;
    assert!(matches!(empty, Err(AppError::BadRequest(_))));

    let party = suggestion_service::for_occasion(
        &sara,
        OccasionOutfitRequest {
            occasion: "birthday party".into(),
            preferences: vec![],
        },
    )
    .await?
    .data
    .expect("party");
    assert_eq!(party.name, "Evening party outfit");
    assert!(party.items.iter().all(|piece| piece.image.starts_with("data:image/svg+xml")));

    Ok(())
}

#[tokio::test]
async fn registration_rejects_invalid_fields() -> anyhow::Result<()> {
    let state = setup_state();
    let valid = || RegisterRequest {
        username: "layla".into(),
        password: "secret123".into(),
        email: "layla@example.com".into(),
        name: "Layla".into(),
    };

    let cases = [
        RegisterRequest {
            username: "ab".into(),
            ..valid()
        },
        RegisterRequest {
            password: "12345".into(),
            ..valid()
        },
        RegisterRequest {
            email: "layla.example.com".into(),
            ..valid()
        },
        RegisterRequest {
            name: "   ".into(),
            ..valid()
        },
    ];
    for payload in cases {
        let result = auth_service::register_user(&state, payload).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    auth_service::register_user(&state, valid()).await?;
    Ok(())
}

#[tokio::test]
async fn clothing_update_keeps_image_when_omitted() -> anyhow::Result<()> {
    let state = setup_state();
    let sara = register(&state, "sara").await?;
    let omar = register(&state, "omar").await?;

    let mut request = clothing("Tee", ClothingCategory::Shirts, Color::White, vec![Season::Summer]);
    request.image_url = Some("https://img.example.com/tee.png".into());
    let tee = wardrobe_service::add_item(&state, &sara, request)
        .await?
        .data
        .expect("tee");

    let updated = wardrobe_service::update_item(
        &state,
        &sara,
        tee.id,
        clothing("Black Tee", ClothingCategory::Shirts, Color::Black, vec![Season::Spring]),
    )
    .await?
    .data
    .expect("updated");
    assert_eq!(updated.id, tee.id);
    assert_eq!(updated.name, "Black Tee");
    assert_eq!(updated.colors, vec![Color::Black]);
    assert_eq!(updated.seasons, vec![Season::Spring]);
    assert_eq!(updated.image_url.as_deref(), Some("https://img.example.com/tee.png"));

    let stolen = wardrobe_service::update_item(
        &state,
        &omar,
        tee.id,
        clothing("Mine now", ClothingCategory::Shirts, Color::Red, vec![Season::Summer]),
    )
    .await;
    assert!(matches!(stolen, Err(AppError::Forbidden)));

    let missing = wardrobe_service::update_item(
        &state,
        &sara,
        999,
        clothing("Ghost", ClothingCategory::Shirts, Color::Red, vec![Season::Summer]),
    )
    .await;
    assert!(matches!(missing, Err(AppError::NotFound)));
    Ok(())
}

#[tokio::test]
async fn outfit_update_and_delete() -> anyhow::Result<()> {
    let state = setup_state();
    let sara = register(&state, "sara").await?;
    let omar = register(&state, "omar").await?;

    let shirt = wardrobe_service::add_item(
        &state,
        &sara,
        clothing("Shirt", ClothingCategory::Shirts, Color::Blue, vec![Season::Fall]),
    )
    .await?
    .data
    .expect("shirt");
    let shoes = wardrobe_service::add_item(
        &state,
        &sara,
        clothing("Shoes", ClothingCategory::Shoes, Color::Brown, vec![Season::Fall]),
    )
    .await?
    .data
    .expect("shoes");
    let foreign = wardrobe_service::add_item(
        &state,
        &omar,
        clothing("Cap", ClothingCategory::Accessories, Color::Red, vec![Season::Fall]),
    )
    .await?
    .data
    .expect("cap");

    let request = |name: &str, items: Vec<i32>| OutfitRequest {
        name: name.into(),
        items,
        occasion: Some("work".into()),
        weather: Some("cloudy".into()),
        is_favorite: false,
    };

    let outfit = outfit_service::create_outfit(&state, &sara, request("Office", vec![shirt.id]))
        .await?
        .data
        .expect("outfit");

    let updated = outfit_service::update_outfit(
        &state,
        &sara,
        outfit.id,
        request("Office, with shoes", vec![shirt.id, shoes.id, shirt.id]),
    )
    .await?
    .data
    .expect("updated");
    assert_eq!(updated.name, "Office, with shoes");
    assert_eq!(updated.items, vec![shirt.id, shoes.id]);

    let borrowed = outfit_service::update_outfit(
        &state,
        &sara,
        outfit.id,
        request("Office", vec![shirt.id, foreign.id]),
    )
    .await;
    assert!(matches!(borrowed, Err(AppError::BadRequest(_))));
    let unchanged = outfit_service::get_outfit(&state, &sara, outfit.id)
        .await?
        .data
        .expect("unchanged");
    assert_eq!(unchanged.items, vec![shirt.id, shoes.id]);

    let not_theirs = outfit_service::delete_outfit(&state, &omar, outfit.id).await;
    assert!(matches!(not_theirs, Err(AppError::Forbidden)));

    outfit_service::delete_outfit(&state, &sara, outfit.id).await?;
    let gone = outfit_service::get_outfit(&state, &sara, outfit.id).await;
    assert!(matches!(gone, Err(AppError::NotFound)));
    Ok(())
}

#[tokio::test]
async fn weather_suggestion_requires_condition_and_date() -> anyhow::Result<()> {
    let state = setup_state();
    let sara = register(&state, "sara").await?;
    let request = |condition: &str, date: &str| WeatherOutfitRequest {
        weather_condition: condition.into(),
        temperature: 25.0,
        date: date.into(),
    };

    let no_condition = suggestion_service::for_weather(&sara, request("  ", "2025-06-01")).await;
    assert!(matches!(no_condition, Err(AppError::BadRequest(_))));

    let no_date = suggestion_service::for_weather(&sara, request("sunny", "")).await;
    assert!(matches!(no_date, Err(AppError::BadRequest(_))));

    let outfit = suggestion_service::for_weather(&sara, request("sunny", "2025-06-01"))
        .await?
        .data
        .expect("outfit");
    assert_eq!(outfit.name, "Outfit for 25°C and sunny");
    Ok(())
}
