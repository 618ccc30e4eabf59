use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Spending category as spelled on the wire.
///
/// Exactly two values; anything else is rejected at deserialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Beer,
    Gym,
}

impl Category {
    /// Returns the canonical category string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beer => "Beer",
            Self::Gym => "Gym",
        }
    }
}

pub mod entry {
    use super::*;

    /// Request body for creating a spending entry.
    ///
    /// `description` distinguishes absent/`null` (`None`) from an empty
    /// string (`Some("")`); both survive the round trip unchanged.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct EntryNew {
        pub category: Category,
        /// Amount in major units; must be finite, at most two decimals and
        /// strictly positive.
        pub amount: f64,
        pub date: NaiveDate,
        #[serde(default)]
        pub description: Option<String>,
    }

    /// A stored entry as returned to clients.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct EntryView {
        pub id: i32,
        pub category: Category,
        pub amount: f64,
        pub date: NaiveDate,
        pub description: Option<String>,
        pub created_at: DateTime<Utc>,
    }

    /// Response body for listing entries, newest business date first.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct EntryListResponse {
        pub entries: Vec<EntryView>,
    }
}

pub mod summary {
    use super::*;

    /// Classification label for the dominant spending pattern.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum UserType {
        BeerEnthusiast,
        FitnessEnthusiast,
        Balanced,
    }

    /// Total and count for one category. Zeros when no entries match.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategorySummaryView {
        pub category: Category,
        pub total: f64,
        pub count: u64,
    }

    /// Both category aggregates plus the derived user type.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct SpendingSummaryView {
        pub beer_total: f64,
        pub gym_total: f64,
        pub beer_count: u64,
        pub gym_count: u64,
        pub user_type: UserType,
    }
}
