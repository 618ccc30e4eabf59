//! Entries API endpoints.

use api_types::entry::{EntryListResponse, EntryNew, EntryView};
use axum::{Json, extract::State, http::StatusCode};
use engine::{MoneyCents, SpendingEntry};

use crate::{ServerError, api_category, engine_category, server::ServerState};

fn map_entry(entry: SpendingEntry) -> EntryView {
    EntryView {
        id: entry.id,
        category: api_category(entry.category),
        amount: entry.amount.to_major(),
        date: entry.date,
        description: entry.description,
        created_at: entry.created_at,
    }
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EntryNew>,
) -> Result<(StatusCode, Json<EntryView>), ServerError> {
    let amount = MoneyCents::try_from_major(payload.amount)?;
    let entry = state
        .engine
        .add_entry(
            engine_category(payload.category),
            amount,
            payload.date,
            payload.description,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(map_entry(entry))))
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<EntryListResponse>, ServerError> {
    let entries = state
        .engine
        .entries()
        .await?
        .into_iter()
        .map(map_entry)
        .collect();

    Ok(Json(EntryListResponse { entries }))
}
