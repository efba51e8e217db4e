use crate::prompt::{self, Intent};
use crate::ParseError;
use log::debug;

/// One routing rule: when `matches` accepts the lowercased input, `parse`
/// turns it into an [`Intent`].
pub struct IntentRule {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    pub parse: fn(&str) -> Result<Intent, ParseError>,
}

fn is_selection(input: &str) -> bool {
    input.contains("option")
}

fn is_budget_request(input: &str) -> bool {
    input.contains("budget") && input.contains("day")
}

fn has_word(input: &str, word: &str) -> bool {
    input
        .split(|c: char| !c.is_alphanumeric())
        .any(|w| w == word)
}

fn is_trip_request(input: &str) -> bool {
    has_word(input, "from") && has_word(input, "to")
}

fn parse_selection(input: &str) -> Result<Intent, ParseError> {
    prompt::parse_selection(input).map(Intent::PickOptions)
}

fn parse_budget(input: &str) -> Result<Intent, ParseError> {
    prompt::parse_budget_query(input).map(Intent::BudgetItinerary)
}

fn parse_trip(input: &str) -> Result<Intent, ParseError> {
    prompt::parse_trip_query(input).map(Intent::PlanTrip)
}

/// Evaluated top to bottom; the first match wins.
pub const RULES: &[IntentRule] = &[
    IntentRule {
        name: "pick-options",
        matches: is_selection,
        parse: parse_selection,
    },
    IntentRule {
        name: "budgeted-itinerary",
        matches: is_budget_request,
        parse: parse_budget,
    },
    IntentRule {
        name: "plain-trip-search",
        matches: is_trip_request,
        parse: parse_trip,
    },
];

/// Classifies one chat line. Input matching no rule is [`Intent::Help`].
pub fn classify(input: &str) -> Result<Intent, ParseError> {
    let lowered = input.trim().to_lowercase();

    for rule in RULES {
        if (rule.matches)(&lowered) {
            debug!("Intent rule matched — rule={} input={:?}", rule.name, lowered);
            return (rule.parse)(&lowered);
        }
    }

    debug!("No intent rule matched — input={:?}", lowered);
    Ok(Intent::Help)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::Selection;

    #[test]
    fn test_option_wins_over_trip() {
        // Contains "from"/"to" too, but "option" is checked first
        let intent = classify("Option 1 from the list to book").unwrap();
        assert_eq!(
            intent,
            Intent::PickOptions(Selection {
                flight: Some(1),
                hotel: None
            })
        );
    }

    #[test]
    fn test_budget_before_plain_trip() {
        match classify("Budget 20000 for 2days from Delhi to Goa").unwrap() {
            Intent::BudgetItinerary(q) => {
                assert_eq!(q.budget, 20000);
                assert_eq!(q.days, 2);
                assert_eq!(q.route.destination, "Goa");
            }
            other => panic!("expected budget itinerary, got {:?}", other),
        }
    }

    #[test]
    fn test_plain_trip() {
        match classify("Plan a trip from Mumbai to Delhi").unwrap() {
            Intent::PlanTrip(q) => {
                assert_eq!(q.route.source, "Mumbai");
                assert_eq!(q.route.destination, "Delhi");
                assert_eq!(q.days, None);
            }
            other => panic!("expected trip, got {:?}", other),
        }
    }

    #[test]
    fn test_fallback_is_help() {
        assert_eq!(classify("hello there").unwrap(), Intent::Help);
        assert_eq!(classify("").unwrap(), Intent::Help);
    }

    #[test]
    fn test_matched_rule_with_bad_params_is_error() {
        // Both words present, but nothing after "to"
        assert_eq!(classify("from delhi to"), Err(ParseError::MissingRoute));
    }

    #[test]
    fn test_trip_words_must_stand_alone() {
        // "to" only inside "tomorrow"
        assert_eq!(classify("tomorrow from here").unwrap(), Intent::Help);
        assert!(!is_trip_request("fromage tour"));
        assert!(is_trip_request("from delhi, to goa"));
    }

    #[test]
    fn test_predicates_independent() {
        assert!(is_selection("option 2"));
        assert!(!is_selection("opt 2"));
        assert!(is_budget_request("budget for 3 days"));
        assert!(!is_budget_request("budget trip"));
        assert!(is_trip_request("from a to b"));
        assert!(!is_trip_request("to goa"));
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<&str> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec!["pick-options", "budgeted-itinerary", "plain-trip-search"]
        );
    }
}
