use crate::{title_case, ParseError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Day count used when a request does not name one.
pub const DEFAULT_TRIP_DAYS: u32 = 3;

/// Longest trip a request may ask for.
pub const MAX_TRIP_DAYS: u32 = 365;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub source: String,
    pub destination: String,
}

/// 1-based indices into the last shown flight and hotel lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub flight: Option<usize>,
    pub hotel: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripQuery {
    pub route: Route,
    pub days: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetQuery {
    pub route: Route,
    pub days: u32,
    pub budget: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    PickOptions(Selection),
    BudgetItinerary(BudgetQuery),
    PlanTrip(TripQuery),
    Help,
}

fn is_number(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

fn parse_number<T: std::str::FromStr>(token: &str) -> Result<T, ParseError> {
    token
        .parse::<T>()
        .map_err(|_| ParseError::NumberOutOfRange(token.to_string()))
}

fn parse_days(token: &str) -> Result<u32, ParseError> {
    match parse_number::<u32>(token)? {
        days if days <= MAX_TRIP_DAYS => Ok(days),
        _ => Err(ParseError::NumberOutOfRange(token.to_string())),
    }
}

/// Pulls the option numbers out of "option 2 flight + option 1 hotel".
///
/// Only tokens made entirely of digits count; the first is the flight, the
/// second the hotel. Missing numbers stay `None`.
pub fn parse_selection(input: &str) -> Result<Selection, ParseError> {
    let mut numbers = input.split_whitespace().filter(|t| is_number(t));

    let flight = numbers.next().map(parse_number::<usize>).transpose()?;
    let hotel = numbers.next().map(parse_number::<usize>).transpose()?;

    Ok(Selection { flight, hotel })
}

/// Finds the day count and, when the digits sat in the token before the
/// "day" word ("5 days"), the index of that token.
fn find_day_count(tokens: &[&str]) -> Result<Option<(u32, Option<usize>)>, ParseError> {
    for (i, token) in tokens.iter().enumerate() {
        let Some(at) = token.find("day") else {
            continue;
        };

        // "4days", "4-day", "4day," keep one digit run before "day";
        // "2-3day" or "today" are not day counts
        let prefix = &token[..at];
        let prefix = prefix.strip_suffix('-').unwrap_or(prefix);
        if is_number(prefix) {
            return Ok(Some((parse_days(prefix)?, None)));
        }

        if prefix.is_empty() && i > 0 && is_number(tokens[i - 1]) {
            return Ok(Some((parse_days(tokens[i - 1])?, Some(i - 1))));
        }
    }
    Ok(None)
}

/// Optional "N days" phrase of a plain trip request.
pub fn parse_trip_days(input: &str) -> Result<Option<u32>, ParseError> {
    static DAYS_RE: OnceLock<Regex> = OnceLock::new();
    let days_re = DAYS_RE.get_or_init(|| Regex::new(r"\b(\d+)\s*-?\s*days?\b").unwrap());

    days_re
        .captures(input)
        .map(|caps| parse_days(&caps[1]))
        .transpose()
}

/// Cuts a captured city at the first trailing modifier, so
/// "goa for 3 days" yields "goa".
fn trim_city(raw: &str) -> &str {
    static STOP_RE: OnceLock<Regex> = OnceLock::new();
    let stop_re = STOP_RE.get_or_init(|| {
        Regex::new(r"\s+\b(?:in|for|with|under|within|on|budget)\b|\s+\d|[.,!?;]").unwrap()
    });

    let cut = stop_re.find(raw).map(|m| m.start()).unwrap_or(raw.len());
    raw[..cut].trim()
}

/// Recovers source and destination from "from X to Y" (or "to Y from X").
pub fn parse_route(input: &str) -> Result<Route, ParseError> {
    static FROM_TO_RE: OnceLock<Regex> = OnceLock::new();
    static TO_FROM_RE: OnceLock<Regex> = OnceLock::new();
    let from_to_re =
        FROM_TO_RE.get_or_init(|| Regex::new(r"\bfrom\s+(.+?)\s+to\s+(.+)$").unwrap());
    let to_from_re =
        TO_FROM_RE.get_or_init(|| Regex::new(r"\bto\s+(.+?)\s+from\s+(.+)$").unwrap());

    let (source, destination) = if let Some(caps) = from_to_re.captures(input) {
        (
            trim_city(caps.get(1).map_or("", |m| m.as_str())),
            trim_city(caps.get(2).map_or("", |m| m.as_str())),
        )
    } else if let Some(caps) = to_from_re.captures(input) {
        (
            trim_city(caps.get(2).map_or("", |m| m.as_str())),
            trim_city(caps.get(1).map_or("", |m| m.as_str())),
        )
    } else {
        return Err(ParseError::MissingRoute);
    };

    if source.is_empty() || destination.is_empty() {
        return Err(ParseError::MissingRoute);
    }

    Ok(Route {
        source: title_case(source),
        destination: title_case(destination),
    })
}

pub fn parse_budget_query(input: &str) -> Result<BudgetQuery, ParseError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();

    let (days, consumed) = find_day_count(&tokens)?.ok_or(ParseError::MissingDayCount)?;

    let budget_token = tokens
        .iter()
        .enumerate()
        .find(|(i, t)| Some(*i) != consumed && is_number(t))
        .map(|(_, t)| *t)
        .ok_or(ParseError::MissingBudget)?;
    let budget = parse_number::<u64>(budget_token)?;

    let route = parse_route(input)?;

    Ok(BudgetQuery {
        route,
        days,
        budget,
    })
}

pub fn parse_trip_query(input: &str) -> Result<TripQuery, ParseError> {
    Ok(TripQuery {
        route: parse_route(input)?,
        days: parse_trip_days(input)?,
    })
}
