use crate::error::ServerResult;
use crate::state::ServerState;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use catalogo::EditionYear;
use std::sync::Arc;

/// Works from every author with the given edition year, as one flat list
///
/// GET /api/edicion/{year}
///
/// A year that is not an integer is rejected with 400 before the catalog is
/// consulted.
pub async fn by_edition_year(
    State(state): State<Arc<ServerState>>,
    Path(year): Path<String>,
) -> ServerResult<Response> {
    let year: EditionYear = year.parse()?;
    let works = state.catalog.find_by_edition_year(year)?;
    Ok(Json(works).into_response())
}
