//! Store-facing operations.
//!
//! Each read issues a single statement, so every summary is computed over
//! one internally consistent snapshot: a concurrent insert lands either
//! entirely before or entirely after it, never half-way.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveValue, QueryFilter, QueryOrder, prelude::*};

use crate::{
    Category, CategorySummary, Engine, EngineError, MoneyCents, ResultEngine, SpendingEntry,
    SpendingSummary, entries, summary,
};

impl Engine {
    /// Validates and persists one spending entry.
    ///
    /// The store assigns `id`; `created_at` is stamped here, once. A failed
    /// validation returns before anything is written.
    pub async fn add_entry(
        &self,
        category: Category,
        amount: MoneyCents,
        date: NaiveDate,
        description: Option<String>,
    ) -> ResultEngine<SpendingEntry> {
        if !amount.is_positive() {
            return Err(EngineError::InvalidAmount(format!(
                "amount must be greater than zero, got {amount}"
            )));
        }

        let active = entries::ActiveModel {
            category: ActiveValue::Set(category.as_str().to_string()),
            amount: ActiveValue::Set(amount.cents()),
            date: ActiveValue::Set(date),
            description: ActiveValue::Set(description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };
        let model = active.insert(&self.database).await?;

        SpendingEntry::try_from(model)
    }

    /// Returns every stored entry, newest business date first.
    ///
    /// The sort order is a display convention; aggregation does not depend
    /// on it.
    pub async fn entries(&self) -> ResultEngine<Vec<SpendingEntry>> {
        let models = entries::Entity::find()
            .order_by_desc(entries::Column::Date)
            .all(&self.database)
            .await?;

        models.into_iter().map(SpendingEntry::try_from).collect()
    }

    /// Total and count for one category. Zero entries is a normal result.
    pub async fn category_summary(&self, category: Category) -> ResultEngine<CategorySummary> {
        let models = entries::Entity::find()
            .filter(entries::Column::Category.eq(category.as_str()))
            .all(&self.database)
            .await?;
        let entries = models
            .into_iter()
            .map(SpendingEntry::try_from)
            .collect::<ResultEngine<Vec<_>>>()?;

        Ok(summary::summarize_category(&entries, category))
    }

    /// Both category aggregates and the user type, from a single snapshot.
    pub async fn summary(&self) -> ResultEngine<SpendingSummary> {
        let models = entries::Entity::find().all(&self.database).await?;
        let entries = models
            .into_iter()
            .map(SpendingEntry::try_from)
            .collect::<ResultEngine<Vec<_>>>()?;

        Ok(summary::summarize(&entries))
    }
}
