use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    catalog::{ClothingCategory, Color, Season},
    dto::{
        auth::{AuthResponse, LoginRequest, RegisterRequest},
        outfits::{OutfitList, OutfitRequest},
        shopping::ShoppingList,
        suggestions::{
            GeneratedOutfit, IllustratedPiece, OccasionOutfitRequest, WardrobeOutfitRequest,
            WardrobeWeather, WeatherOutfitRequest,
        },
        wardrobe::{ClothingItemRequest, ClothingList},
        weather::{WeatherForecast, WeatherInfo},
    },
    models::{ClothingItem, Outfit, ShoppingItem, User},
    response::{ApiResponse, Meta},
    routes::{auth, health, images, outfits, shopping, suggestions, wardrobe, weather},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::register,
        auth::login,
        auth::logout,
        auth::me,
        wardrobe::list_clothing,
        wardrobe::add_clothing,
        wardrobe::get_clothing,
        wardrobe::update_clothing,
        wardrobe::delete_clothing,
        outfits::list_outfits,
        outfits::create_outfit,
        outfits::get_outfit,
        outfits::update_outfit,
        outfits::toggle_favorite,
        outfits::delete_outfit,
        suggestions::outfit_for_weather,
        suggestions::outfit_for_occasion,
        suggestions::outfit_from_wardrobe,
        shopping::list_shopping,
        shopping::get_shopping,
        shopping::compatible_shopping,
        weather::get_forecast,
        images::clothing_image
    ),
    components(
        schemas(
            User,
            ClothingItem,
            Outfit,
            ShoppingItem,
            ClothingCategory,
            Color,
            Season,
            RegisterRequest,
            LoginRequest,
            AuthResponse,
            ClothingItemRequest,
            ClothingList,
            OutfitRequest,
            OutfitList,
            ShoppingList,
            WeatherOutfitRequest,
            OccasionOutfitRequest,
            WardrobeOutfitRequest,
            WardrobeWeather,
            IllustratedPiece,
            GeneratedOutfit,
            WeatherInfo,
            WeatherForecast,
            health::HealthData,
            Meta,
            ApiResponse<ClothingItem>,
            ApiResponse<Outfit>,
            ApiResponse<GeneratedOutfit>,
            ApiResponse<WeatherForecast>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Wardrobe", description = "Clothing item endpoints"),
        (name = "Outfits", description = "Saved outfit endpoints"),
        (name = "Suggestions", description = "Outfit suggestion endpoints"),
        (name = "Shopping", description = "Shopping catalog endpoints"),
        (name = "Weather", description = "Weather forecast endpoint"),
        (name = "Images", description = "Generated clothing illustrations"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
