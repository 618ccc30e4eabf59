//! Summary API endpoints.

use api_types::summary::{CategorySummaryView, SpendingSummaryView, UserType};
use axum::{
    Json,
    extract::{Path, State},
};

use crate::{ServerError, engine_category, server::ServerState};

fn map_user_type(user_type: engine::UserType) -> UserType {
    match user_type {
        engine::UserType::BeerEnthusiast => UserType::BeerEnthusiast,
        engine::UserType::FitnessEnthusiast => UserType::FitnessEnthusiast,
        engine::UserType::Balanced => UserType::Balanced,
    }
}

/// Handle requests for the overall spending summary.
pub async fn overall(
    State(state): State<ServerState>,
) -> Result<Json<SpendingSummaryView>, ServerError> {
    let summary = state.engine.summary().await?;

    Ok(Json(SpendingSummaryView {
        beer_total: summary.beer_total.to_major(),
        gym_total: summary.gym_total.to_major(),
        beer_count: summary.beer_count,
        gym_count: summary.gym_count,
        user_type: map_user_type(summary.user_type),
    }))
}

/// Handle requests for a single category's total and count.
pub async fn category(
    State(state): State<ServerState>,
    Path(category): Path<api_types::Category>,
) -> Result<Json<CategorySummaryView>, ServerError> {
    let summary = state
        .engine
        .category_summary(engine_category(category))
        .await?;

    Ok(Json(CategorySummaryView {
        category,
        total: summary.total.to_major(),
        count: summary.count,
    }))
}
