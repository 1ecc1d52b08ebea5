//! Navigation API endpoint.
//!
//! Returns the navigation tree for the documentation site in the same JSON
//! shape the navigation file is authored in.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use fdocs_nav::NavEntry;
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/navigation.
#[derive(Serialize)]
pub(crate) struct NavigationResponse {
    /// Navigation tree items.
    items: Vec<NavEntry>,
}

/// Handle GET /api/navigation.
pub(crate) async fn get_navigation(State(state): State<Arc<AppState>>) -> Json<NavigationResponse> {
    Json(NavigationResponse {
        items: state.site.nav().entries.clone(),
    })
}
