use crate::error::{Error, Result};
use crate::models::{
    BarChart, CategoryCount, CombinedView, Search, Statistics, TransactionFilter, TransactionPage,
};
use crate::services::{analytics, listing, seed_loader};
use crate::state::AppState;
use crate::utils::helpers::{parse_month, parse_positive};
use axum::extract::{Query, State};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use log::{error, info};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub month: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MonthParams {
    pub month: Option<String>,
}

/// Builds the HTTP surface, mounting the `/transactions` routes under
/// `prefix` (an empty prefix mounts them at the root).
pub fn router(state: Arc<AppState>, prefix: &str) -> Router {
    let transactions = Router::new()
        .route("/transactions", get(list_transactions))
        .route("/transactions/initialize", get(initialize))
        .route("/transactions/statistics", get(statistics))
        .route("/transactions/barchart", get(bar_chart))
        .route("/transactions/piechart", get(pie_chart))
        .route("/transactions/combine", get(combined));

    let app = if prefix.is_empty() {
        transactions
    } else {
        Router::new().nest(prefix, transactions)
    };

    app.layer(CorsLayer::permissive()).with_state(state)
}

fn log_failure<T>(what: &str, result: Result<T>) -> Result<T> {
    if let Err(e) = &result {
        if !matches!(e, Error::InvalidInput(_)) {
            error!("Error fetching {}: {}", what, e);
        }
    }
    result
}

/// GET /transactions/initialize
///
/// Replaces every stored transaction with the contents of the seed feed.
pub async fn initialize(State(state): State<Arc<AppState>>) -> Result<Json<Value>> {
    let outcome = seed_loader::reseed(state.store.as_ref(), &state.http, &state.seed_url)
        .await
        .map_err(|e| Error::Initialize(e.to_string()))?;
    Ok(Json(json!({
        "message": "Database initialized with seed data.",
        "inserted": outcome.inserted,
    })))
}

/// GET /transactions?month=march&page=1&perPage=10&search=bag
pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<TransactionPage>> {
    info!(
        "Listing transactions: month={:?} page={:?} perPage={:?} search={:?}",
        params.month, params.page, params.per_page, params.search
    );
    let page = parse_positive("page", params.page.as_deref())?;
    let per_page = parse_positive("perPage", params.per_page.as_deref())?;
    let month = parse_month(params.month.as_deref())?;

    let filter = TransactionFilter::for_month(month)
        .with_search(params.search.as_deref().and_then(Search::parse));
    let result = listing::list_transactions(state.store.as_ref(), &filter, page, per_page).await;
    log_failure("transactions", result).map(Json)
}

/// GET /transactions/statistics?month=march
pub async fn statistics(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MonthParams>,
) -> Result<Json<Statistics>> {
    info!("Statistics requested for month={:?}", params.month);
    let month = parse_month(params.month.as_deref())?;
    log_failure("statistics", analytics::statistics(state.store.as_ref(), month).await).map(Json)
}

/// GET /transactions/barchart?month=march
pub async fn bar_chart(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MonthParams>,
) -> Result<Json<BarChart>> {
    info!("Bar chart requested for month={:?}", params.month);
    let month = parse_month(params.month.as_deref())?;
    log_failure("bar chart data", analytics::bar_chart(state.store.as_ref(), month).await)
        .map(Json)
}

/// GET /transactions/piechart?month=march
pub async fn pie_chart(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MonthParams>,
) -> Result<Json<Vec<CategoryCount>>> {
    info!("Pie chart requested for month={:?}", params.month);
    let month = parse_month(params.month.as_deref())?;
    log_failure("pie chart data", analytics::pie_chart(state.store.as_ref(), month).await)
        .map(Json)
}

/// GET /transactions/combine?month=march
///
/// Every failure, bad input included, is reported as a server error.
pub async fn combined(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MonthParams>,
) -> Result<Json<CombinedView>> {
    info!("Combined view requested for month={:?}", params.month);
    let month =
        parse_month(params.month.as_deref()).map_err(|e| Error::Combined(e.to_string()))?;
    log_failure("combined data", analytics::combined(state.store.as_ref(), month).await).map(Json)
}
