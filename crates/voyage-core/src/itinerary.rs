use crate::dataset::PlaceRecord;
use std::fmt::Write;

/// Filler for days that have no sightseeing assigned.
pub const FALLBACK_ACTIVITIES: [&str; 2] = ["Explore a local market", "Relax at a nearby café"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPlan {
    pub day: u32,
    pub activities: Vec<String>,
}

/// Places assigned to each day.
///
/// Integer division: with 7 places over 3 days each day gets 2 and the last
/// place is not scheduled.
pub fn places_per_day(total_places: usize, days: u32) -> usize {
    (total_places / days.max(1) as usize).max(1)
}

pub fn build_itinerary(places: &[PlaceRecord], days: u32) -> Vec<DayPlan> {
    let per_day = places_per_day(places.len(), days);

    (0..days)
        .map(|i| {
            let assigned: Vec<&PlaceRecord> = places
                .iter()
                .skip((i as usize).saturating_mul(per_day))
                .take(per_day)
                .collect();

            let mut activities = vec!["Breakfast at the hotel".to_string()];
            if assigned.is_empty() {
                activities.extend(FALLBACK_ACTIVITIES.iter().map(|a| a.to_string()));
            } else {
                activities.extend(assigned.iter().map(|p| format!("Visit {}", p.name)));
            }
            activities.push("Try the local food".to_string());
            activities.push("Evening walk".to_string());

            DayPlan {
                day: i + 1,
                activities,
            }
        })
        .collect()
}

pub fn render_itinerary(plans: &[DayPlan]) -> String {
    let mut out = format!("🗓 Day-wise Itinerary ({} days):\n", plans.len());
    for plan in plans {
        let _ = writeln!(out, "Day {}:", plan.day);
        for activity in &plan.activities {
            let _ = writeln!(out, "  - {}", activity);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn places(n: usize) -> Vec<PlaceRecord> {
        (1..=n)
            .map(|i| PlaceRecord {
                name: format!("Place {}", i),
                city: "Goa".to_string(),
            })
            .collect()
    }

    fn visits(plan: &DayPlan) -> Vec<&str> {
        plan.activities
            .iter()
            .filter(|a| a.starts_with("Visit "))
            .map(|a| a.as_str())
            .collect()
    }

    #[test]
    fn test_places_per_day() {
        assert_eq!(places_per_day(6, 3), 2);
        assert_eq!(places_per_day(7, 3), 2);
        assert_eq!(places_per_day(2, 3), 1);
        assert_eq!(places_per_day(0, 3), 1);
        assert_eq!(places_per_day(5, 0), 5);
    }

    #[test]
    fn test_even_spread() {
        let plans = build_itinerary(&places(6), 3);
        assert_eq!(plans.len(), 3);
        assert_eq!(visits(&plans[0]), vec!["Visit Place 1", "Visit Place 2"]);
        assert_eq!(visits(&plans[2]), vec!["Visit Place 5", "Visit Place 6"]);
    }

    #[test]
    fn test_remainder_dropped() {
        let plans = build_itinerary(&places(7), 3);
        let all: Vec<&str> = plans.iter().flat_map(visits).collect();
        assert_eq!(all.len(), 6);
        assert!(!all.contains(&"Visit Place 7"));
    }

    #[test]
    fn test_fixed_activities_wrap_places() {
        let plans = build_itinerary(&places(1), 1);
        assert_eq!(
            plans[0].activities,
            vec![
                "Breakfast at the hotel",
                "Visit Place 1",
                "Try the local food",
                "Evening walk"
            ]
        );
    }

    #[test]
    fn test_no_places_uses_fallback() {
        let plans = build_itinerary(&[], 2);
        for plan in &plans {
            assert!(visits(plan).is_empty());
            assert!(plan.activities.contains(&FALLBACK_ACTIVITIES[0].to_string()));
            assert!(plan.activities.contains(&FALLBACK_ACTIVITIES[1].to_string()));
        }
    }

    #[test]
    fn test_more_days_than_places() {
        let plans = build_itinerary(&places(2), 4);
        assert_eq!(visits(&plans[1]), vec!["Visit Place 2"]);
        assert!(visits(&plans[3]).is_empty());
        assert!(plans[3]
            .activities
            .contains(&FALLBACK_ACTIVITIES[0].to_string()));
    }

    #[test]
    fn test_zero_days_is_empty_not_panic() {
        let plans = build_itinerary(&places(4), 0);
        assert!(plans.is_empty());
        assert_eq!(render_itinerary(&plans), "🗓 Day-wise Itinerary (0 days):\n");
    }

    #[test]
    fn test_render() {
        let text = render_itinerary(&build_itinerary(&places(2), 2));
        assert!(text.starts_with("🗓 Day-wise Itinerary (2 days):\n"));
        assert!(text.contains("Day 1:\n  - Breakfast at the hotel\n  - Visit Place 1\n"));
        assert!(text.contains("Day 2:\n"));
    }
}
