use axum::{
    http::header,
    response::IntoResponse,
};

use crate::{
    catalog::{ClothingCategory, Color},
    error::AppResult,
    extract::AppPath,
    imagery::item_svg,
};

#[utoipa::path(
    get,
    path = "/api/images/{category}/{color}",
    params(
        ("category" = ClothingCategory, Path, description = "Clothing category"),
        ("color" = Color, Path, description = "Color name")
    ),
    responses(
        (status = 200, description = "SVG illustration of a piece", content_type = "image/svg+xml", body = String),
        (status = 400, description = "Unknown category or color")
    ),
    tag = "Images"
)]
pub async fn clothing_image(
    AppPath((category, color)): AppPath<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let category: ClothingCategory = category.parse()?;
    let color: Color = color.trim_end_matches(".svg").parse()?;

    Ok((
        [(header::CONTENT_TYPE, "image/svg+xml")],
        item_svg(category, color),
    ))
}
