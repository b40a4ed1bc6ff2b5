use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WeatherQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct WeatherInfo {
    pub temp: i32,
    pub condition: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct WeatherForecast {
    pub today: WeatherInfo,
    pub tomorrow: WeatherInfo,
    pub after_tomorrow: WeatherInfo,
}
