//! SVG illustrations for single pieces and whole outfits.

use crate::{
    catalog::{ClothingCategory, Color},
    recommend::SuggestedPiece,
};

const COLOR_TOKEN: &str = "{{COLOR}}";

const SHIRT_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
    <path d="M20,30 L40,10 L60,10 L80,30 L70,35 L70,90 L30,90 L30,35 Z" fill="{{COLOR}}" stroke="black" stroke-width="2"/>
    <path d="M40,10 L50,15 L60,10" fill="none" stroke="black" stroke-width="1"/>
  </svg>"#;

const PANTS_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
    <path d="M30,10 L70,10 L75,90 L55,90 L50,40 L45,90 L25,90 Z" fill="{{COLOR}}" stroke="black" stroke-width="2"/>
    <path d="M30,15 L70,15" fill="none" stroke="black" stroke-width="1"/>
  </svg>"#;

const SHOES_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
    <path d="M10,60 C10,50 20,50 30,50 L60,50 C80,50 80,60 90,65 L90,75 C90,80 85,80 80,80 L20,80 C15,80 10,75 10,70 Z" fill="{{COLOR}}" stroke="black" stroke-width="2"/>
  </svg>"#;

const JACKET_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
    <path d="M15,30 L35,10 L65,10 L85,30 L75,40 L75,90 L25,90 L25,40 Z" fill="{{COLOR}}" stroke="black" stroke-width="2"/>
    <path d="M35,10 L35,90" fill="none" stroke="black" stroke-width="1"/>
    <path d="M65,10 L65,90" fill="none" stroke="black" stroke-width="1"/>
    <path d="M50,10 L50,30" fill="none" stroke="black" stroke-width="1"/>
  </svg>"#;

const ACCESSORY_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
    <circle cx="50" cy="50" r="30" fill="{{COLOR}}" stroke="black" stroke-width="2"/>
    <circle cx="50" cy="50" r="25" fill="none" stroke="black" stroke-width="1"/>
    <rect x="45" y="20" width="10" height="5" fill="{{COLOR}}" stroke="black" stroke-width="1"/>
    <rect x="45" y="75" width="10" height="5" fill="{{COLOR}}" stroke="black" stroke-width="1"/>
  </svg>"#;

/// CSS value used to fill a piece of the given color.
pub fn color_hex(color: Color) -> &'static str {
    match color {
        Color::White => "#FFFFFF",
        Color::Black => "#000000",
        Color::Blue => "#2563EB",
        Color::Red => "#DC2626",
        Color::Green => "#10B981",
        Color::Yellow => "#FBBF24",
        Color::Gray => "#6B7280",
        Color::Brown => "#92400E",
        Color::Purple => "#7C3AED",
        Color::Orange => "#F97316",
        Color::Pink => "#EC4899",
        Color::Other => "#000000",
    }
}

pub fn category_label(category: ClothingCategory) -> &'static str {
    match category {
        ClothingCategory::Shirts => "Shirt",
        ClothingCategory::Pants => "Pants",
        ClothingCategory::Shoes => "Shoes",
        ClothingCategory::Jackets => "Jacket",
        ClothingCategory::Accessories => "Accessory",
        other => other.as_str(),
    }
}

/// Single-piece illustration with the color substituted.
pub fn item_svg(category: ClothingCategory, color: Color) -> String {
    let template = match category {
        ClothingCategory::Shirts => SHIRT_SVG.to_string(),
        ClothingCategory::Pants => PANTS_SVG.to_string(),
        ClothingCategory::Shoes => SHOES_SVG.to_string(),
        ClothingCategory::Jackets => JACKET_SVG.to_string(),
        ClothingCategory::Accessories => ACCESSORY_SVG.to_string(),
        other => format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
    <rect x="10" y="10" width="80" height="80" fill="{COLOR_TOKEN}" stroke="black" stroke-width="2"/>
    <text x="50" y="50" font-family="Arial" font-size="12" text-anchor="middle" fill="white">{}</text>
  </svg>"#,
            other.as_str()
        ),
    };
    template.replace(COLOR_TOKEN, color_hex(color))
}

fn stacking_order(category: ClothingCategory) -> u8 {
    match category {
        ClothingCategory::Jackets => 1,
        ClothingCategory::Shirts => 2,
        ClothingCategory::Pants => 3,
        ClothingCategory::Shoes => 4,
        ClothingCategory::Accessories => 5,
        _ => 99,
    }
}

fn slot_height(category: ClothingCategory) -> u32 {
    match category {
        ClothingCategory::Jackets => 100,
        ClothingCategory::Shirts => 80,
        ClothingCategory::Pants => 120,
        ClothingCategory::Shoes => 40,
        _ => 50,
    }
}

const SLOT_GAP: u32 = 10;

/// Composite 300x400 illustration stacking the pieces top to bottom.
pub fn outfit_svg(pieces: &[SuggestedPiece]) -> String {
    let mut sorted: Vec<&SuggestedPiece> = pieces.iter().collect();
    sorted.sort_by_key(|p| stacking_order(p.category));

    let mut svg = String::from(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 300 400" width="300" height="400">
    <rect width="300" height="400" fill="#f8f9fa" />
    <text x="150" y="30" font-family="Arial" font-size="16" text-anchor="middle">Suggested outfit</text>
    <g transform="translate(100, 60)">"##,
    );

    let mut y_offset = 0;
    for piece in sorted {
        let height = slot_height(piece.category);
        svg.push_str(&format!(
            r#"
    <g transform="translate(0, {y_offset})">
      <rect x="0" y="0" width="100" height="{height}" fill="none" />
      <text x="-10" y="{label_y}" font-family="Arial" font-size="12" text-anchor="end" dominant-baseline="middle">{label}</text>
      {body}
    </g>"#,
            label_y = height as f64 / 2.0,
            label = category_label(piece.category),
            body = item_svg(piece.category, piece.color),
        ));
        y_offset += height + SLOT_GAP;
    }

    svg.push_str(
        r#"
    </g>
  </svg>"#,
    );
    svg
}

/// Percent-encoded `data:` URL for embedding an SVG in JSON or an `<img>`.
pub fn svg_to_data_url(svg: &str) -> String {
    format!(
        "data:image/svg+xml;charset=UTF-8,{}",
        urlencoding::encode(svg)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(category: ClothingCategory, color: Color) -> SuggestedPiece {
        SuggestedPiece {
            category,
            description: String::new(),
            color,
            clothing_item_id: None,
        }
    }

    #[test]
    fn item_svg_substitutes_every_color_token() {
        let svg = item_svg(ClothingCategory::Accessories, Color::Purple);
        assert!(!svg.contains(COLOR_TOKEN));
        assert_eq!(svg.matches("#7C3AED").count(), 3);
    }

    #[test]
    fn categories_without_template_get_labelled_square() {
        let svg = item_svg(ClothingCategory::Dresses, Color::Pink);
        assert!(svg.contains("<rect x=\"10\""));
        assert!(svg.contains(">dresses</text>"));
        assert!(svg.contains("#EC4899"));
    }

    #[test]
    fn outfit_svg_stacks_jacket_above_shoes() {
        let svg = outfit_svg(&[
            piece(ClothingCategory::Shoes, Color::Black),
            piece(ClothingCategory::Jackets, Color::Brown),
            piece(ClothingCategory::Pants, Color::Blue),
        ]);
        let jacket = svg.find(">Jacket<").unwrap();
        let pants = svg.find(">Pants<").unwrap();
        let shoes = svg.find(">Shoes<").unwrap();
        assert!(jacket < pants && pants < shoes);
        // jacket slot 100 + gap, pants slot 120 + gap
        assert!(svg.contains("translate(0, 110)"));
        assert!(svg.contains("translate(0, 240)"));
    }

    #[test]
    fn data_url_is_fully_encoded() {
        let url = svg_to_data_url(&item_svg(ClothingCategory::Shirts, Color::White));
        assert!(url.starts_with("data:image/svg+xml;charset=UTF-8,%3Csvg"));
        assert!(!url.contains('"'));
        assert!(!url.contains('\''));
        assert!(!url.contains(' '));
    }
}
