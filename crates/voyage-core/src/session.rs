use crate::dataset::{FlightRecord, HotelRecord};
use log::debug;
use std::collections::HashMap;

/// The last search results of one conversation.
///
/// Every new plan overwrites the previous one. Selections are resolved
/// against whatever is cached at the time; there is no staleness check.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchSession {
    pub last_flights: Vec<FlightRecord>,
    pub last_hotels: Vec<HotelRecord>,
    /// Day count of the last plan, reused when options are picked
    pub trip_days: Option<u32>,
}

impl SearchSession {
    pub fn record_search(
        &mut self,
        flights: Vec<FlightRecord>,
        hotels: Vec<HotelRecord>,
        days: u32,
    ) {
        self.last_flights = flights;
        self.last_hotels = hotels;
        self.trip_days = Some(days);
    }

    /// Both legs must have cached results before options can be picked.
    pub fn has_results(&self) -> bool {
        !self.last_flights.is_empty() && !self.last_hotels.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Sessions keyed by conversation id.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<String, SearchSession>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the conversation's session, creating an empty one on first use.
    pub fn open(&mut self, conversation_id: &str) -> &mut SearchSession {
        self.sessions
            .entry(conversation_id.to_string())
            .or_insert_with(|| {
                debug!("Session created — conversation={}", conversation_id);
                SearchSession::default()
            })
    }

    pub fn get(&self, conversation_id: &str) -> Option<&SearchSession> {
        self.sessions.get(conversation_id)
    }

    /// Drops cached results but keeps the conversation known.
    pub fn reset(&mut self, conversation_id: &str) {
        if let Some(session) = self.sessions.get_mut(conversation_id) {
            debug!("Session reset — conversation={}", conversation_id);
            session.clear();
        }
    }

    pub fn close(&mut self, conversation_id: &str) -> Option<SearchSession> {
        debug!("Session closed — conversation={}", conversation_id);
        self.sessions.remove(conversation_id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
