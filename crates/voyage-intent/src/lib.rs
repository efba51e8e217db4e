// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Free-text understanding for the Voyage chat surface.
//!
//! Everything in this crate is pure: a chat line goes in, a typed [`Intent`]
//! or a [`ParseError`] comes out. Dispatching the intent is the job of
//! `voyage-core`.

use thiserror::Error;

pub mod prompt;
pub mod rules;

pub use prompt::{
    BudgetQuery, Intent, Route, Selection, TripQuery, DEFAULT_TRIP_DAYS, MAX_TRIP_DAYS,
};
pub use rules::{classify, IntentRule, RULES};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("could not find a \"from <city> to <city>\" route")]
    MissingRoute,
    #[error("could not find a day count such as \"3 days\"")]
    MissingDayCount,
    #[error("could not find a numeric budget")]
    MissingBudget,
    #[error("number is too large: {0}")]
    NumberOutOfRange(String),
}

/// Capitalizes each whitespace-separated word: "new delhi" -> "New Delhi".
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
