use crate::TripError;
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const FLIGHTS_FILE: &str = "flights.json";
pub const HOTELS_FILE: &str = "hotels.json";
pub const PLACES_FILE: &str = "places.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub airline: String,
    pub flight_id: String,
    pub from: String,
    pub to: String,
    pub price: u64,
    pub departure_time: String,
    pub arrival_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelRecord {
    pub name: String,
    pub city: String,
    pub price_per_night: u64,
    pub stars: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub name: String,
    pub city: String,
}

/// Read-only access to the JSON datasets in one directory.
///
/// Files are read on every call; edits to the data directory show up on the
/// next request without a restart.
#[derive(Debug, Clone)]
pub struct TravelData {
    root: PathBuf,
}

impl TravelData {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn flights(&self) -> Result<Vec<FlightRecord>, TripError> {
        self.load(FLIGHTS_FILE)
    }

    pub fn hotels(&self) -> Result<Vec<HotelRecord>, TripError> {
        self.load(HOTELS_FILE)
    }

    pub fn places(&self) -> Result<Vec<PlaceRecord>, TripError> {
        self.load(PLACES_FILE)
    }

    fn load<T: DeserializeOwned>(&self, file_name: &str) -> Result<Vec<T>, TripError> {
        let path = self.root.join(file_name);
        let content = fs::read_to_string(&path).map_err(|source| TripError::DatasetRead {
            path: path.clone(),
            source,
        })?;
        let records: Vec<T> =
            serde_json::from_str(&content).map_err(|source| TripError::DatasetFormat {
                path: path.clone(),
                source,
            })?;

        debug!(
            "Loaded dataset — path={} records={}",
            path.display(),
            records.len()
        );
        Ok(records)
    }
}
