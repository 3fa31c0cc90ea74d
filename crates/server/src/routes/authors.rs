use crate::error::ServerResult;
use crate::state::ServerState;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use catalogo::{SearchTerm, SurnamePrefix};
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for the name lookup
#[derive(Debug, Default, Deserialize)]
pub struct NameQuery {
    /// Leading letters of the surname; absent or empty disables the filter
    #[serde(default)]
    pub apellido: Option<String>,
}

/// Full catalog in surname order
///
/// GET /api
pub async fn list_all(State(state): State<Arc<ServerState>>) -> Response {
    Json(state.catalog.list_all()).into_response()
}

/// Authors with an exact (case-insensitive) surname
///
/// GET /api/apellido/{surname}
pub async fn by_surname(
    State(state): State<Arc<ServerState>>,
    Path(surname): Path<String>,
) -> ServerResult<Response> {
    let surname = SearchTerm::parse("apellido", surname)?;
    let found = state.catalog.find_by_surname(&surname)?;
    Ok(Json(found).into_response())
}

/// Authors with an exact name and surname
///
/// GET /api/nombre_apellido/{name}/{surname}
pub async fn by_name_and_surname(
    State(state): State<Arc<ServerState>>,
    Path((name, surname)): Path<(String, String)>,
) -> ServerResult<Response> {
    let name = SearchTerm::parse("nombre", name)?;
    let surname = SearchTerm::parse("apellido", surname)?;
    let found = state.catalog.find_by_name_and_surname(&name, &surname)?;
    Ok(Json(found).into_response())
}

/// Authors by name, optionally narrowed by surname prefix
///
/// GET /api/nombre/{name}?apellido=<prefix>
pub async fn by_name(
    State(state): State<Arc<ServerState>>,
    Path(name): Path<String>,
    Query(query): Query<NameQuery>,
) -> ServerResult<Response> {
    let name = SearchTerm::parse("nombre", name)?;
    let prefix = SurnamePrefix::from_query(query.apellido);
    let found = state.catalog.find_by_name(&name, prefix.as_ref())?;
    Ok(Json(found).into_response())
}
