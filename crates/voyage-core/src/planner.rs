use crate::dataset::{FlightRecord, HotelRecord, PlaceRecord, TravelData};
use crate::itinerary::{build_itinerary, render_itinerary};
use crate::search::{search_flights, search_hotels, suggest_places};
use crate::session::SearchSession;
use crate::settings::Settings;
use crate::weather::{OpenWeatherClient, WeatherProvider, WeatherSnapshot};
use crate::{format_money, TripError};
use log::{debug, info};
use std::fmt::Write;

pub const DEFAULT_DISPLAY_LIMIT: usize = 5;
pub const SELECTION_HINT: &str = "💬 Reply like: option 2 flight + option 1 hotel";
pub const NO_FLIGHTS_LINE: &str = "❌ No flights found.";
pub const NO_HOTELS_LINE: &str = "❌ No hotels found.";
pub const INVALID_FLIGHT_LINE: &str = "⚠️ Invalid flight option.";
pub const INVALID_HOTEL_LINE: &str = "⚠️ Invalid hotel option.";

struct TripSearch {
    flights: Vec<FlightRecord>,
    hotels: Vec<HotelRecord>,
    places: Vec<PlaceRecord>,
    weather: WeatherSnapshot,
}

/// Cheapest flight plus the cheapest hotel for `days` nights, if both legs
/// have results.
pub fn estimate_cheapest(flights: &[FlightRecord], hotels: &[HotelRecord], days: u32) -> Option<u64> {
    let flight = flights.iter().map(|f| f.price).min()?;
    let nightly = hotels.iter().map(|h| h.price_per_night).min()?;
    Some(flight.saturating_add(nightly.saturating_mul(u64::from(days))))
}

/// 1-based lookup; 0 and out-of-range indices resolve to nothing.
fn pick<T>(items: &[T], index: Option<usize>) -> Option<&T> {
    index?.checked_sub(1).and_then(|i| items.get(i))
}

pub struct TripPlanner {
    data: TravelData,
    weather: Box<dyn WeatherProvider>,
    display_limit: usize,
}

impl TripPlanner {
    pub fn new(data: TravelData, weather: Box<dyn WeatherProvider>) -> Self {
        Self {
            data,
            weather,
            display_limit: DEFAULT_DISPLAY_LIMIT,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            TravelData::new(&settings.data_dir),
            Box::new(OpenWeatherClient::new(&settings.weather)),
        )
        .with_display_limit(settings.display_limit)
    }

    pub fn with_display_limit(mut self, limit: usize) -> Self {
        self.display_limit = limit.max(1);
        self
    }

    fn search(&self, source: &str, destination: &str) -> Result<TripSearch, TripError> {
        Ok(TripSearch {
            flights: search_flights(&self.data, source, destination)?,
            hotels: search_hotels(&self.data, destination)?,
            places: suggest_places(&self.data, destination)?,
            weather: self.weather.get_weather(destination),
        })
    }

    fn render_plan(&self, source: &str, destination: &str, found: &TripSearch) -> String {
        let mut out = String::new();

        if found.flights.is_empty() {
            let _ = writeln!(out, "{}", NO_FLIGHTS_LINE);
        } else {
            let _ = writeln!(out, "✈️ Available Flights ({} → {}):", source, destination);
            for (i, f) in found.flights.iter().take(self.display_limit).enumerate() {
                let _ = writeln!(
                    out,
                    "{}. {} ({}) {} → {} — {}",
                    i + 1,
                    f.airline,
                    f.flight_id,
                    f.departure_time,
                    f.arrival_time,
                    format_money(f.price)
                );
            }
        }

        out.push('\n');
        if found.hotels.is_empty() {
            let _ = writeln!(out, "{}", NO_HOTELS_LINE);
        } else {
            let _ = writeln!(out, "🏨 Hotels in {}:", destination);
            for (i, h) in found.hotels.iter().take(self.display_limit).enumerate() {
                let _ = writeln!(
                    out,
                    "{}. {} ({}★) — {}/night",
                    i + 1,
                    h.name,
                    h.stars,
                    format_money(h.price_per_night)
                );
            }
        }

        let _ = writeln!(out, "\n🌦 Weather in {}: {}", destination, found.weather);
        self.render_places(&mut out, &found.places);

        out.push('\n');
        out.push_str(SELECTION_HINT);
        out
    }

    fn render_places(&self, out: &mut String, places: &[PlaceRecord]) {
        if places.is_empty() {
            return;
        }
        let _ = writeln!(out, "\n📍 Suggested Places:");
        for p in places.iter().take(self.display_limit) {
            let _ = writeln!(out, "- {}", p.name);
        }
    }

    /// Searches flights, hotels, places and weather for the trip, replaces
    /// the session's cached results and renders the summary.
    pub fn plan_trip(
        &self,
        session: &mut SearchSession,
        source: &str,
        destination: &str,
        days: u32,
    ) -> Result<String, TripError> {
        info!(
            "Planning trip — source={} destination={} days={}",
            source, destination, days
        );
        let found = self.search(source, destination)?;
        let reply = self.render_plan(source, destination, &found);

        session.record_search(found.flights, found.hotels, days);
        Ok(reply)
    }

    /// [`plan_trip`](Self::plan_trip) followed by a budget verdict for the
    /// cheapest combination and a day-wise itinerary.
    pub fn plan_budget_trip(
        &self,
        session: &mut SearchSession,
        source: &str,
        destination: &str,
        days: u32,
        budget: u64,
    ) -> Result<String, TripError> {
        info!(
            "Planning budget trip — source={} destination={} days={} budget={}",
            source, destination, days, budget
        );
        let found = self.search(source, destination)?;
        let mut reply = self.render_plan(source, destination, &found);

        let _ = writeln!(reply, "\n\n💰 Budget Check ({} days):", days);
        match estimate_cheapest(&found.flights, &found.hotels, days) {
            Some(total) => {
                let _ = writeln!(reply, "Cheapest trip estimate: {}", format_money(total));
                if total <= budget {
                    let _ = writeln!(
                        reply,
                        "✅ Fits your budget of {} ({} to spare).",
                        format_money(budget),
                        format_money(budget - total)
                    );
                } else {
                    let _ = writeln!(
                        reply,
                        "⚠️ Exceeds your budget of {} by {}.",
                        format_money(budget),
                        format_money(total - budget)
                    );
                }
            }
            None => {
                let _ = writeln!(
                    reply,
                    "⚠️ Cannot estimate the cost: no flights or hotels found for this route."
                );
            }
        }

        reply.push('\n');
        reply.push_str(&render_itinerary(&build_itinerary(&found.places, days)));

        session.record_search(found.flights, found.hotels, days);
        Ok(reply)
    }

    /// Resolves 1-based option numbers against the session's last search and
    /// renders the cost summary plus itinerary.
    ///
    /// An invalid index only drops its own leg from the total.
    pub fn pick_options(
        &self,
        session: &SearchSession,
        flight_index: Option<usize>,
        hotel_index: Option<usize>,
        days: u32,
    ) -> Result<String, TripError> {
        if !session.has_results() {
            return Err(TripError::NoSearchYet);
        }
        debug!(
            "Picking options — flight={:?} hotel={:?} days={}",
            flight_index, hotel_index, days
        );

        let mut out = String::new();
        let mut total: u64 = 0;

        match pick(&session.last_flights, flight_index) {
            Some(f) => {
                total = total.saturating_add(f.price);
                let _ = writeln!(out, "🛫 Selected Flight:");
                let _ = writeln!(
                    out,
                    "{} ({}) {} → {}, {} → {}",
                    f.airline, f.flight_id, f.from, f.to, f.departure_time, f.arrival_time
                );
                let _ = writeln!(out, "Price: {}\n", format_money(f.price));
            }
            None => {
                let _ = writeln!(out, "{}\n", INVALID_FLIGHT_LINE);
            }
        }

        let hotel = pick(&session.last_hotels, hotel_index);
        match hotel {
            Some(h) => {
                let stay = h.price_per_night.saturating_mul(u64::from(days));
                total = total.saturating_add(stay);
                let _ = writeln!(out, "🏨 Selected Hotel:");
                let _ = writeln!(out, "{} ({}★)", h.name, h.stars);
                let _ = writeln!(
                    out,
                    "{} per night × {} nights = {}\n",
                    format_money(h.price_per_night),
                    days,
                    format_money(stay)
                );
            }
            None => {
                let _ = writeln!(out, "{}\n", INVALID_HOTEL_LINE);
            }
        }

        let _ = writeln!(out, "💰 Total Cost: {}", format_money(total));

        // Weather and places follow the chosen hotel's city
        let places = match hotel {
            Some(h) => {
                let weather = self.weather.get_weather(&h.city);
                let _ = writeln!(out, "\n🌦 Weather in {}: {}", h.city, weather);
                let places = suggest_places(&self.data, &h.city)?;
                self.render_places(&mut out, &places);
                places
            }
            None => Vec::new(),
        };

        out.push('\n');
        out.push_str(&render_itinerary(&build_itinerary(&places, days)));
        Ok(out)
    }
}
