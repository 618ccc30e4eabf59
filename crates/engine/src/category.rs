use std::{fmt, str::FromStr};

use crate::EngineError;

/// Spending category.
///
/// The set is closed by design of the classifier: the three-way user-type
/// rule compares exactly two totals, so adding a variant means redesigning
/// [`classify`](crate::classify) as well.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Beer,
    Gym,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Beer, Category::Gym];

    /// Returns the canonical string stored in the database and used on the
    /// wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beer => "Beer",
            Self::Gym => "Gym",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Beer" => Ok(Self::Beer),
            "Gym" => Ok(Self::Gym),
            other => Err(EngineError::InvalidCategory(other.to_string())),
        }
    }
}
