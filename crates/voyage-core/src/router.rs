use crate::planner::TripPlanner;
use crate::session::{SearchSession, SessionStore};
use crate::settings::Settings;
use crate::TripError;
use log::{debug, error, info};
use voyage_intent::{classify, Intent, DEFAULT_TRIP_DAYS};

pub const HELP_MESSAGE: &str = "I can help you plan a trip. Try one of these:\n\
- Plan a trip from Delhi to Goa\n\
- Plan a trip from Delhi to Goa for 5 days\n\
- Plan a 4days trip from Delhi to Goa with budget 30000\n\
- option 2 flight + option 1 hotel (after a search)";

/// Classifies one chat line and runs the matching operation.
pub fn respond(
    planner: &TripPlanner,
    session: &mut SearchSession,
    message: &str,
    default_days: u32,
) -> Result<String, TripError> {
    match classify(message)? {
        Intent::PickOptions(selection) => {
            let days = session.trip_days.unwrap_or(default_days);
            planner.pick_options(session, selection.flight, selection.hotel, days)
        }
        Intent::BudgetItinerary(query) => planner.plan_budget_trip(
            session,
            &query.route.source,
            &query.route.destination,
            query.days,
            query.budget,
        ),
        Intent::PlanTrip(query) => planner.plan_trip(
            session,
            &query.route.source,
            &query.route.destination,
            query.days.unwrap_or(default_days),
        ),
        Intent::Help => Ok(HELP_MESSAGE.to_string()),
    }
}

/// Like [`respond`], but every failure becomes user-facing text.
pub fn reply(
    planner: &TripPlanner,
    session: &mut SearchSession,
    message: &str,
    default_days: u32,
) -> String {
    match respond(planner, session, message, default_days) {
        Ok(text) => text,
        Err(e) => {
            match &e {
                TripError::Parse(_) => info!("Could not parse request — error={}", e),
                TripError::NoSearchYet => debug!("Selection before any search"),
                TripError::DatasetRead { .. } | TripError::DatasetFormat { .. } => {
                    error!("Dataset failure — error={}", e)
                }
            }
            e.user_message()
        }
    }
}

/// The planner plus one search session per conversation.
pub struct Assistant {
    planner: TripPlanner,
    sessions: SessionStore,
    default_days: u32,
}

impl Assistant {
    pub fn new(planner: TripPlanner) -> Self {
        Self {
            planner,
            sessions: SessionStore::new(),
            default_days: DEFAULT_TRIP_DAYS,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(TripPlanner::from_settings(settings)).with_default_days(settings.default_days)
    }

    pub fn with_default_days(mut self, days: u32) -> Self {
        self.default_days = days;
        self
    }

    pub fn reply(&mut self, conversation_id: &str, message: &str) -> String {
        let session = self.sessions.open(conversation_id);
        reply(&self.planner, session, message, self.default_days)
    }

    pub fn reset(&mut self, conversation_id: &str) {
        self.sessions.reset(conversation_id);
    }

    pub fn close(&mut self, conversation_id: &str) {
        self.sessions.close(conversation_id);
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }
}
