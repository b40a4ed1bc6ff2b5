//! Closed vocabularies shared by the wardrobe, the rule tables and the
//! illustrations.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

macro_rules! vocabulary {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($text => Ok($name::$variant),)+
                    _ => Err(UnknownValue {
                        kind: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

vocabulary!(
    /// Wardrobe category of a piece of clothing.
    ClothingCategory {
        Shirts => "shirts",
        Pants => "pants",
        Shoes => "shoes",
        Jackets => "jackets",
        Accessories => "accessories",
        Dresses => "dresses",
        Skirts => "skirts",
        Suits => "suits",
        Other => "other",
    }
);

vocabulary!(
    Season {
        Summer => "summer",
        Winter => "winter",
        Fall => "fall",
        Spring => "spring",
    }
);

vocabulary!(
    Color {
        Black => "black",
        White => "white",
        Blue => "blue",
        Red => "red",
        Green => "green",
        Yellow => "yellow",
        Brown => "brown",
        Gray => "gray",
        Purple => "purple",
        Orange => "orange",
        Pink => "pink",
        Other => "other",
    }
);

impl Season {
    /// Season implied by a temperature in °C.
    pub fn for_temperature(temperature: f64) -> Self {
        if temperature < 10.0 {
            Season::Winter
        } else if temperature < 20.0 {
            Season::Fall
        } else if temperature < 30.0 {
            Season::Spring
        } else {
            Season::Summer
        }
    }
}

/// Parse a list of stored strings, failing on the first unknown entry.
pub fn parse_all<T: FromStr<Err = UnknownValue>>(values: &[String]) -> Result<Vec<T>, UnknownValue> {
    values.iter().map(|v| v.parse()).collect()
}

pub fn to_strings<T: fmt::Display>(values: &[T]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Shirts".parse::<ClothingCategory>().unwrap(), ClothingCategory::Shirts);
        assert_eq!(" gray ".parse::<Color>().unwrap(), Color::Gray);
        assert!("beige".parse::<Color>().is_err());
    }

    #[test]
    fn season_buckets_follow_temperature() {
        assert_eq!(Season::for_temperature(-3.0), Season::Winter);
        assert_eq!(Season::for_temperature(10.0), Season::Fall);
        assert_eq!(Season::for_temperature(19.9), Season::Fall);
        assert_eq!(Season::for_temperature(20.0), Season::Spring);
        assert_eq!(Season::for_temperature(30.0), Season::Summer);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&ClothingCategory::Accessories).unwrap();
        assert_eq!(json, "\"accessories\"");
        let season: Season = serde_json::from_str("\"winter\"").unwrap();
        assert_eq!(season, Season::Winter);
    }
}
