// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

pub mod dataset;
pub mod itinerary;
pub mod planner;
pub mod router;
pub mod search;
pub mod session;
pub mod settings;
pub mod weather;

use std::path::PathBuf;
use thiserror::Error;
use voyage_intent::ParseError;

pub use planner::TripPlanner;
pub use router::Assistant;
pub use session::{SearchSession, SessionStore};

pub const SEARCH_FIRST_MESSAGE: &str =
    "Please search for a trip first, e.g. \"Plan a trip from Delhi to Goa\".";

#[derive(Error, Debug)]
pub enum TripError {
    #[error("could not understand the request: {0}")]
    Parse(#[from] ParseError),
    #[error("failed to read dataset {path:?}: {source}")]
    DatasetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed dataset {path:?}: {source}")]
    DatasetFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no search results cached for this conversation")]
    NoSearchYet,
}

impl TripError {
    /// Text shown to the user in place of a reply.
    pub fn user_message(&self) -> String {
        match self {
            TripError::Parse(e) => format!(
                "Sorry, I could not understand that ({}). Please say something like: Plan a trip from Mumbai to Delhi.",
                e
            ),
            TripError::DatasetRead { .. } | TripError::DatasetFormat { .. } => {
                "Sorry, travel data is unavailable right now. Please try again later.".to_string()
            }
            TripError::NoSearchYet => SEARCH_FIRST_MESSAGE.to_string(),
        }
    }
}

/// Per-user configuration directory (settings file lives here).
pub fn get_config_root() -> PathBuf {
    directories::ProjectDirs::from("org", "voyage", "Voyage")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".voyage"))
}

pub(crate) fn format_money(amount: u64) -> String {
    format!("₹{}", amount)
}
