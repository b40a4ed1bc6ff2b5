pub mod auth_service;
pub mod outfit_service;
pub mod shopping_service;
pub mod suggestion_service;
pub mod wardrobe_service;
pub mod weather_service;
