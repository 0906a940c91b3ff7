// HTTP interface - the facade's REST-shaped contract served over axum.
// Handlers translate lookup misses into 404s; domain errors map to status
// codes in AppError's IntoResponse.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::app_state::AppState;
use crate::core::ids::{BusinessId, DiscountId, EventId};
use crate::error::{AppError, AppResult};
use crate::models::{AwardOutcome, Business, Discount, Event, RedemptionOutcome, User, UserInteraction};
use crate::search;

#[derive(Deserialize)]
pub struct BusinessListQuery {
    pub q: Option<String>,
    pub category: Option<String>,
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "Localize API"
    }))
}

async fn get_user_handler(State(state): State<AppState>) -> AppResult<Json<User>> {
    Ok(Json(state.api.get_user().await?))
}

async fn get_user_interactions_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<UserInteraction>>> {
    Ok(Json(state.api.get_user_interactions().await?))
}

async fn list_businesses_handler(
    State(state): State<AppState>,
    Query(params): Query<BusinessListQuery>,
) -> AppResult<Json<Vec<Business>>> {
    let businesses = match (params.q.as_deref(), params.category.as_deref()) {
        (Some(q), Some(category)) => {
            let hits = state.api.search_businesses(q).await?;
            search::filter_by_category(&hits, category)
        }
        (Some(q), None) => state.api.search_businesses(q).await?,
        (None, Some(category)) => state.api.businesses_by_category(category).await?,
        (None, None) => state.api.get_businesses().await?,
    };
    Ok(Json(businesses))
}

async fn get_business_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<Business>> {
    state
        .api
        .get_business(BusinessId::new(id))
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("business {} not found", id)))
}

async fn list_events_handler(State(state): State<AppState>) -> AppResult<Json<Vec<Event>>> {
    Ok(Json(state.api.get_events().await?))
}

async fn get_event_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<Event>> {
    state
        .api
        .get_event(EventId::new(id))
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("event {} not found", id)))
}

async fn list_discounts_handler(State(state): State<AppState>) -> AppResult<Json<Vec<Discount>>> {
    Ok(Json(state.api.get_discounts().await?))
}

async fn check_in_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<AwardOutcome>> {
    Ok(Json(state.api.check_in_to_business(BusinessId::new(id)).await?))
}

async fn attend_event_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<AwardOutcome>> {
    Ok(Json(state.api.attend_event(EventId::new(id)).await?))
}

async fn redeem_discount_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<RedemptionOutcome>> {
    Ok(Json(state.api.redeem_discount(DiscountId::new(id)).await?))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/user", get(get_user_handler))
        .route("/api/user/interactions", get(get_user_interactions_handler))
        .route("/api/businesses", get(list_businesses_handler))
        .route("/api/businesses/{id}", get(get_business_handler))
        .route("/api/businesses/{id}/checkin", post(check_in_handler))
        .route("/api/events", get(list_events_handler))
        .route("/api/events/{id}", get(get_event_handler))
        .route("/api/events/{id}/attend", post(attend_event_handler))
        .route("/api/discounts", get(list_discounts_handler))
        .route("/api/discounts/{id}/redeem", post(redeem_discount_handler))
        .with_state(state)
}
