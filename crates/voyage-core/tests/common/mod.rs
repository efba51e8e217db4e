#![allow(dead_code)]

use std::fs;
use std::path::Path;
use voyage_core::dataset::TravelData;
use voyage_core::weather::{Temperature, WeatherProvider, WeatherSnapshot};
use voyage_core::TripPlanner;

/// Reports the same weather for every city.
pub struct FixedWeather(pub WeatherSnapshot);

impl WeatherProvider for FixedWeather {
    fn get_weather(&self, _city: &str) -> WeatherSnapshot {
        self.0.clone()
    }
}

pub fn sunny() -> WeatherSnapshot {
    WeatherSnapshot {
        temperature: Temperature::Celsius(31),
        description: "Clear sky".to_string(),
    }
}

/// Delhi -> Goa ranks as 6E-201 (4500), SG-113 (4500), AI-887 (6200), UK-845 (7100).
/// Goa hotels rank as Palm Grove (1800), Sea Breeze (2500), Taj (12000).
/// Jaipur has a flight and places but no hotels.
pub fn write_dataset(dir: &Path) {
    fs::write(
        dir.join("flights.json"),
        r#"[
  {"airline":"Air India","flight_id":"AI-887","from":"Delhi","to":"Goa","price":6200,"departure_time":"07:10","arrival_time":"09:45"},
  {"airline":"IndiGo","flight_id":"6E-201","from":"Delhi","to":"Goa","price":4500,"departure_time":"06:00","arrival_time":"08:35"},
  {"airline":"SpiceJet","flight_id":"SG-113","from":"delhi","to":"GOA","price":4500,"departure_time":"13:20","arrival_time":"15:55"},
  {"airline":"Vistara","flight_id":"UK-845","from":"Delhi","to":"Goa","price":7100,"departure_time":"18:40","arrival_time":"21:10"},
  {"airline":"IndiGo","flight_id":"6E-512","from":"Delhi","to":"Jaipur","price":2800,"departure_time":"08:15","arrival_time":"09:20"},
  {"airline":"Air India","flight_id":"AI-101","from":"Mumbai","to":"Delhi","price":5100,"departure_time":"06:30","arrival_time":"08:40"}
]"#,
    )
    .unwrap();
    fs::write(
        dir.join("hotels.json"),
        r#"[
  {"name":"Sea Breeze Inn","city":"Goa","price_per_night":2500,"stars":3},
  {"name":"Taj Fort Aguada","city":"GOA","price_per_night":12000,"stars":5},
  {"name":"Palm Grove Cottages","city":"Goa","price_per_night":1800,"stars":2},
  {"name":"Connaught Residency","city":"Delhi","price_per_night":4000,"stars":4}
]"#,
    )
    .unwrap();
    fs::write(
        dir.join("places.json"),
        r#"[
  {"name":"Baga Beach","city":"Goa"},
  {"name":"Fort Aguada","city":"Goa"},
  {"name":"Basilica of Bom Jesus","city":"Goa"},
  {"name":"Dudhsagar Falls","city":"Goa"},
  {"name":"Amber Fort","city":"Jaipur"},
  {"name":"Hawa Mahal","city":"Jaipur"}
]"#,
    )
    .unwrap();
}

pub fn planner_with(dir: &Path, weather: WeatherSnapshot) -> TripPlanner {
    TripPlanner::new(TravelData::new(dir), Box::new(FixedWeather(weather)))
}
