use crate::{
    dto::suggestions::{
        GeneratedOutfit, IllustratedPiece, OccasionOutfitRequest, WardrobeOutfitRequest,
        WeatherOutfitRequest,
    },
    error::{AppError, AppResult},
    imagery::{item_svg, outfit_svg, svg_to_data_url},
    middleware::auth::AuthUser,
    recommend::{self, OutfitProposal, WeatherContext},
    response::{ApiResponse, Meta},
    state::AppState,
};

/// Attach piece and composite illustrations to a proposal.
pub fn illustrate(proposal: OutfitProposal) -> GeneratedOutfit {
    let outfit_image = svg_to_data_url(&outfit_svg(&proposal.items));
    let items = proposal
        .items
        .into_iter()
        .map(|piece| IllustratedPiece {
            image: svg_to_data_url(&item_svg(piece.category, piece.color)),
            category: piece.category,
            description: piece.description,
            color: piece.color,
            clothing_item_id: piece.clothing_item_id,
        })
        .collect();

    GeneratedOutfit {
        name: proposal.name,
        description: proposal.description,
        items,
        outfit_image,
    }
}

pub async fn for_weather(
    user: &AuthUser,
    payload: WeatherOutfitRequest,
) -> AppResult<ApiResponse<GeneratedOutfit>> {
    let condition = payload.weather_condition.trim();
    if condition.is_empty() || payload.date.trim().is_empty() || !payload.temperature.is_finite() {
        return Err(AppError::BadRequest(
            "Weather condition, temperature, and date are required".into(),
        ));
    }

    tracing::debug!(
        user_id = user.user_id,
        temperature = payload.temperature,
        condition,
        date = %payload.date,
        "weather outfit requested"
    );
    let proposal = recommend::for_weather(payload.temperature, condition);
    Ok(ApiResponse::success(
        "Outfit generated",
        illustrate(proposal),
        Some(Meta::empty()),
    ))
}

pub async fn for_occasion(
    user: &AuthUser,
    payload: OccasionOutfitRequest,
) -> AppResult<ApiResponse<GeneratedOutfit>> {
    let occasion = payload.occasion.trim();
    if occasion.is_empty() {
        return Err(AppError::BadRequest("Occasion is required".into()));
    }

    tracing::debug!(user_id = user.user_id, occasion, "occasion outfit requested");
    let proposal = recommend::for_occasion(occasion, &payload.preferences);
    Ok(ApiResponse::success(
        "Outfit generated",
        illustrate(proposal),
        Some(Meta::empty()),
    ))
}

pub async fn from_wardrobe(
    state: &AppState,
    user: &AuthUser,
    payload: WardrobeOutfitRequest,
) -> AppResult<ApiResponse<GeneratedOutfit>> {
    if payload.clothing_items.is_empty() {
        return Err(AppError::BadRequest(
            "At least one clothing item is required".into(),
        ));
    }

    let items = state
        .storage
        .get_clothing_by_ids(&payload.clothing_items, user.user_id)
        .await?;
    let weather = payload
        .weather
        .filter(|w| w.temperature.is_finite())
        .map(|w| WeatherContext {
            condition: w.condition,
            temperature: w.temperature,
        });

    let proposal = recommend::from_wardrobe(&items, payload.occasion.as_deref(), weather.as_ref())
        .ok_or(AppError::NotFound)?;

    Ok(ApiResponse::success(
        "Outfit generated",
        illustrate(proposal),
        Some(Meta::empty()),
    ))
}
