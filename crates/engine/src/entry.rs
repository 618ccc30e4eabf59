use chrono::{DateTime, NaiveDate, Utc};

use crate::{Category, EngineError, MoneyCents, entries};

/// One recorded expense.
///
/// Immutable after creation: `id` and `created_at` are assigned by the store
/// exactly once, and no update/delete operation exists. `description` keeps
/// the absent/empty distinction (`None` vs `Some("")`).
#[derive(Clone, Debug, PartialEq)]
pub struct SpendingEntry {
    pub id: i32,
    pub category: Category,
    pub amount: MoneyCents,
    /// Business date the expense pertains to; may differ from `created_at`.
    pub date: NaiveDate,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<entries::Model> for SpendingEntry {
    type Error = EngineError;

    fn try_from(model: entries::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            category: model.category.parse()?,
            amount: MoneyCents::new(model.amount),
            date: model.date,
            description: model.description,
            created_at: model.created_at,
        })
    }
}
