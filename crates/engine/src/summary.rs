//! Aggregation and classification over spending entries.
//!
//! Everything here is pure: no I/O, no locks, one pass over an
//! already-fetched snapshot. Store failures never reach these functions;
//! they operate only on data the caller fetched successfully.

use crate::{Category, MoneyCents, SpendingEntry};

/// Total amount and entry count for a single category.
///
/// Derived, never persisted. An empty match is a normal result
/// (`total = 0`, `count = 0`), not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: Category,
    pub total: MoneyCents,
    pub count: u64,
}

/// Classification label for the dominant spending pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserType {
    BeerEnthusiast,
    FitnessEnthusiast,
    Balanced,
}

impl UserType {
    /// Returns the canonical wire spelling of the label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BeerEnthusiast => "beer_enthusiast",
            Self::FitnessEnthusiast => "fitness_enthusiast",
            Self::Balanced => "balanced",
        }
    }
}

/// Both category aggregates plus the derived user type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpendingSummary {
    pub beer_total: MoneyCents,
    pub gym_total: MoneyCents,
    pub beer_count: u64,
    pub gym_count: u64,
    pub user_type: UserType,
}

/// Reduces a snapshot into the aggregate for one category.
///
/// Order-independent; entries of the other category are skipped.
#[must_use]
pub fn summarize_category(entries: &[SpendingEntry], category: Category) -> CategorySummary {
    let (total, count) = entries
        .iter()
        .filter(|entry| entry.category == category)
        .fold((MoneyCents::ZERO, 0u64), |(total, count), entry| {
            (total + entry.amount, count + 1)
        });

    CategorySummary {
        category,
        total,
        count,
    }
}

/// Reduces one snapshot into both category aggregates in a single pass, then
/// classifies.
///
/// A single reduction keyed by category means the two totals always describe
/// the same set of entries; there is no window for one total to see a row
/// the other missed.
#[must_use]
pub fn summarize(entries: &[SpendingEntry]) -> SpendingSummary {
    let mut beer = (MoneyCents::ZERO, 0u64);
    let mut gym = (MoneyCents::ZERO, 0u64);

    for entry in entries {
        let slot = match entry.category {
            Category::Beer => &mut beer,
            Category::Gym => &mut gym,
        };
        slot.0 += entry.amount;
        slot.1 += 1;
    }

    SpendingSummary {
        beer_total: beer.0,
        gym_total: gym.0,
        beer_count: beer.1,
        gym_count: gym.1,
        user_type: classify(beer.0, gym.0),
    }
}

/// Derives the user type from the two category totals.
///
/// Strict total order over exact cents; counts never participate. The three
/// labels are exhaustive and mutually exclusive, with equality (including
/// the empty 0 == 0 case) mapping to [`UserType::Balanced`].
#[must_use]
pub fn classify(beer_total: MoneyCents, gym_total: MoneyCents) -> UserType {
    if beer_total > gym_total {
        UserType::BeerEnthusiast
    } else if gym_total > beer_total {
        UserType::FitnessEnthusiast
    } else {
        UserType::Balanced
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use super::*;

    fn entry(id: i32, category: Category, cents: i64) -> SpendingEntry {
        SpendingEntry {
            id,
            category,
            amount: MoneyCents::new(cents),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            description: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn empty_snapshot_yields_balanced_zeros() {
        let summary = summarize(&[]);
        assert_eq!(summary.beer_total, MoneyCents::ZERO);
        assert_eq!(summary.gym_total, MoneyCents::ZERO);
        assert_eq!(summary.beer_count, 0);
        assert_eq!(summary.gym_count, 0);
        assert_eq!(summary.user_type, UserType::Balanced);
    }

    #[test]
    fn category_with_no_entries_is_zero_not_error() {
        let entries = [entry(1, Category::Gym, 2000)];
        let summary = summarize_category(&entries, Category::Beer);
        assert_eq!(summary.total, MoneyCents::ZERO);
        assert_eq!(summary.count, 0);
    }

    #[test]
    fn beer_dominant_scenario() {
        let entries = [
            entry(1, Category::Beer, 1550),
            entry(2, Category::Beer, 825),
            entry(3, Category::Gym, 2000),
        ];
        let summary = summarize(&entries);
        assert_eq!(summary.beer_total, MoneyCents::new(2375));
        assert_eq!(summary.gym_total, MoneyCents::new(2000));
        assert_eq!(summary.beer_count, 2);
        assert_eq!(summary.gym_count, 1);
        assert_eq!(summary.user_type, UserType::BeerEnthusiast);
    }

    #[test]
    fn equal_totals_are_balanced() {
        let entries = [
            entry(1, Category::Beer, 3000),
            entry(2, Category::Gym, 3000),
        ];
        assert_eq!(summarize(&entries).user_type, UserType::Balanced);
    }

    #[test]
    fn classification_ignores_counts() {
        // Same totals, different counts: still balanced.
        let entries = [
            entry(1, Category::Beer, 3000),
            entry(2, Category::Gym, 1000),
            entry(3, Category::Gym, 2000),
        ];
        let summary = summarize(&entries);
        assert_ne!(summary.beer_count, summary.gym_count);
        assert_eq!(summary.user_type, UserType::Balanced);

        // More beer entries but less beer money: gym wins on amount.
        let entries = [
            entry(1, Category::Beer, 100),
            entry(2, Category::Beer, 100),
            entry(3, Category::Beer, 100),
            entry(4, Category::Gym, 5000),
        ];
        assert_eq!(summarize(&entries).user_type, UserType::FitnessEnthusiast);
    }

    #[test]
    fn single_pass_matches_per_category_folds() {
        let entries = [
            entry(1, Category::Beer, 799),
            entry(2, Category::Beer, 1233),
            entry(3, Category::Gym, 10),
            entry(4, Category::Gym, 20),
        ];
        let summary = summarize(&entries);
        let beer = summarize_category(&entries, Category::Beer);
        let gym = summarize_category(&entries, Category::Gym);

        assert_eq!(summary.beer_total, beer.total);
        assert_eq!(summary.gym_total, gym.total);
        assert_eq!(summary.beer_count, beer.count);
        assert_eq!(summary.gym_count, gym.count);

        // 7.99 + 12.33 is exactly 20.32, and both totals cover every entry.
        assert_eq!(beer.total, MoneyCents::new(2032));
        let all: i64 = entries.iter().map(|e| e.amount.cents()).sum();
        assert_eq!(summary.beer_total.cents() + summary.gym_total.cents(), all);
    }

    #[test]
    fn classify_is_total_and_swap_symmetric() {
        let cases = [(0, 0), (1, 0), (0, 1), (2375, 2000), (3000, 3000)];
        for (beer, gym) in cases {
            let forward = classify(MoneyCents::new(beer), MoneyCents::new(gym));
            let swapped = classify(MoneyCents::new(gym), MoneyCents::new(beer));
            match forward {
                UserType::BeerEnthusiast => {
                    assert_eq!(swapped, UserType::FitnessEnthusiast)
                }
                UserType::FitnessEnthusiast => {
                    assert_eq!(swapped, UserType::BeerEnthusiast)
                }
                UserType::Balanced => assert_eq!(swapped, UserType::Balanced),
            }
        }
    }
}
