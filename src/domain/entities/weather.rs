use serde::{Deserialize, Serialize};

/// Current conditions card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeather {
    pub city: String,
    /// Degrees Fahrenheit, rounded
    pub temperature: i64,
    pub condition: String,
    /// Relative humidity in percent
    pub humidity: i64,
    /// Miles per hour, rounded
    pub wind_speed: i64,
}
