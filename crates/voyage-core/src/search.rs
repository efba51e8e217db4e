use crate::dataset::{FlightRecord, HotelRecord, PlaceRecord, TravelData};
use crate::TripError;
use log::debug;

fn same_city(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Flights on the exact route, cheapest first. Equal prices keep dataset order.
pub fn rank_flights(flights: &[FlightRecord], source: &str, destination: &str) -> Vec<FlightRecord> {
    if source.trim().is_empty() || destination.trim().is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<FlightRecord> = flights
        .iter()
        .filter(|f| same_city(&f.from, source) && same_city(&f.to, destination))
        .cloned()
        .collect();
    // sort_by_key is stable
    matches.sort_by_key(|f| f.price);
    matches
}

/// Hotels in `city`, cheapest nightly rate first.
pub fn rank_hotels(hotels: &[HotelRecord], city: &str) -> Vec<HotelRecord> {
    if city.trim().is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<HotelRecord> = hotels
        .iter()
        .filter(|h| same_city(&h.city, city))
        .cloned()
        .collect();
    matches.sort_by_key(|h| h.price_per_night);
    matches
}

pub fn filter_places(places: &[PlaceRecord], city: &str) -> Vec<PlaceRecord> {
    if city.trim().is_empty() {
        return Vec::new();
    }

    places
        .iter()
        .filter(|p| same_city(&p.city, city))
        .cloned()
        .collect()
}

pub fn search_flights(
    data: &TravelData,
    source: &str,
    destination: &str,
) -> Result<Vec<FlightRecord>, TripError> {
    let ranked = rank_flights(&data.flights()?, source, destination);
    debug!(
        "search_flights — source={} destination={} matches={}",
        source,
        destination,
        ranked.len()
    );
    Ok(ranked)
}

pub fn search_hotels(data: &TravelData, city: &str) -> Result<Vec<HotelRecord>, TripError> {
    let ranked = rank_hotels(&data.hotels()?, city);
    debug!("search_hotels — city={} matches={}", city, ranked.len());
    Ok(ranked)
}

pub fn suggest_places(data: &TravelData, city: &str) -> Result<Vec<PlaceRecord>, TripError> {
    let places = filter_places(&data.places()?, city);
    debug!("suggest_places — city={} matches={}", city, places.len());
    Ok(places)
}
