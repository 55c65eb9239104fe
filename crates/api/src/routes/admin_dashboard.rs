//! Admin dashboard summary counts.

use axum::{extract::State, Json};
use domain::models::DashboardStats;
use persistence::repositories::DashboardRepository;

use crate::app::AppState;
use crate::error::ApiError;

/// Content and lead counts for the admin landing page.
///
/// GET /api/v1/admin/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardStats>, ApiError> {
    let stats = DashboardRepository::new(state.pool.clone()).stats().await?;
    Ok(Json(stats))
}
