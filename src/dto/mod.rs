pub mod auth;
pub mod outfits;
pub mod shopping;
pub mod suggestions;
pub mod wardrobe;
pub mod weather;
