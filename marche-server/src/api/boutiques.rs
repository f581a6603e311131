use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use compact_str::CompactString;
use marche_sdk::objects::{BoutiqueNotFound, ResolvedBoutique};

use super::ApiError;
use crate::state::AppState;

/// `GET /boutiques` — list every known boutique in registry order.
///
/// This is the single source of known slugs for static pages and
/// navigation.
pub(super) async fn list_boutiques(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.resolver.fallback_links())
}

/// `GET /boutiques/{slug}` — resolve a boutique by exact slug.
///
/// Unknown slugs yield a 404 whose body links to every known boutique.
pub(super) async fn get_boutique(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let config = state.resolver.resolve(&slug).map_err(|e| {
        tracing::debug!(slug = %e.slug, "Unknown boutique requested");
        ApiError::BoutiqueNotFound(BoutiqueNotFound {
            error: "boutique not found".to_owned(),
            slug: e.slug,
            boutiques: state.resolver.fallback_links(),
        })
    })?;

    Ok(Json(ResolvedBoutique {
        slug: CompactString::from(slug),
        config: config.clone(),
    }))
}
