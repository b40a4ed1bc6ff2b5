use crate::dto::weather::{WeatherForecast, WeatherInfo, WeatherQuery};

const SUNNY: (&str, &str) = ("Sunny", "☀️");
const PARTLY_CLOUDY: (&str, &str) = ("Partly cloudy", "⛅");
const CLOUDY: (&str, &str) = ("Cloudy", "☁️");

fn info(temp: i32, (condition, icon): (&str, &str)) -> WeatherInfo {
    WeatherInfo {
        temp,
        condition: condition.to_string(),
        icon: icon.to_string(),
    }
}

pub fn default_forecast() -> WeatherForecast {
    WeatherForecast {
        today: info(27, SUNNY),
        tomorrow: info(23, PARTLY_CLOUDY),
        after_tomorrow: info(21, CLOUDY),
    }
}

/// Forecast derived from coordinates: warmer in the northern hemisphere,
/// clearing or clouding over depending on the side of the meridian.
pub fn forecast_for(lat: f64, lon: f64) -> WeatherForecast {
    let base = if lat > 0.0 { 27 } else { 23 };
    let conditions = if lon > 0.0 {
        [SUNNY, PARTLY_CLOUDY, CLOUDY]
    } else {
        [PARTLY_CLOUDY, CLOUDY, SUNNY]
    };

    WeatherForecast {
        today: info(base + 2, conditions[0]),
        tomorrow: info(base, conditions[1]),
        after_tomorrow: info(base - 3, conditions[2]),
    }
}

pub fn forecast(query: &WeatherQuery, api_key: Option<&str>) -> WeatherForecast {
    match (query.lat, query.lon) {
        (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => {
            if api_key.is_some() {
                forecast_for(lat, lon)
            } else {
                tracing::warn!("weather API key not configured, serving default forecast");
                default_forecast()
            }
        }
        _ => default_forecast(),
    }
}
