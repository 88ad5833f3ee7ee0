use crate::api::{ApiState, authenticate};
use crate::core::duration::compute_duration_minutes;
use crate::errors::{AppError, AppResult};
use crate::export::EntryExport;
use crate::models::entry::Entry;
use crate::store::RecordStore;
use crate::store::clients::ClientList;
use crate::utils::{date, time};
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn to_api_error(err: AppError) -> ApiError {
    let status = match &err {
        AppError::InvalidApiKey | AppError::Forbidden(_, _) => StatusCode::FORBIDDEN,
        AppError::InvalidDate(_)
        | AppError::InvalidTime(_)
        | AppError::InvalidLength(_)
        | AppError::InvalidPlies(_) => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ErrorResponse { error: err.to_string() }))
}

#[derive(Deserialize)]
pub struct EntriesQuery {
    pub client: Option<String>,
}

/// GET /entries — every row, insertion order, optional client filter.
/// Supervisors receive the rows with the matricule field redacted.
pub async fn get_entries(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Query(query): Query<EntriesQuery>,
) -> Result<Json<Vec<EntryExport>>, ApiError> {
    let role = authenticate(&headers, &state.cfg).map_err(to_api_error)?;

    let entries = {
        let store = state.store.lock().await;
        store.read_all().map_err(to_api_error)?
    };

    let selected = RecordStore::filter(&entries, |e| match &query.client {
        None => true,
        Some(c) => &e.client == c,
    });

    tracing::info!(role = role.as_str(), rows = selected.len(), "table read");

    let rows = selected
        .iter()
        .map(EntryExport::from_entry)
        .map(|row| {
            if role.sees_matricule() {
                row
            } else {
                row.redacted()
            }
        })
        .collect();

    Ok(Json(rows))
}

/// POST /entries body. Field names mirror the stored columns; the
/// duration is always computed server-side, never trusted from the
/// client. Operator identity defaults to the configured one.
#[derive(Deserialize)]
pub struct NewEntryRequest {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Client")]
    pub client: String,
    #[serde(rename = "N_Commande")]
    pub order_no: String,
    #[serde(rename = "Tissu")]
    pub fabric: String,
    #[serde(rename = "Code_Rouleau")]
    pub roll_code: String,
    #[serde(rename = "Longueur_Matelas")]
    pub length_m: f64,
    #[serde(rename = "Nombre_Plis")]
    pub plies: u32,
    #[serde(rename = "Heure_Debut")]
    pub start: String,
    #[serde(rename = "Heure_Fin")]
    pub end: String,
    #[serde(rename = "Nom_Operateur", default)]
    pub operator: Option<String>,
    #[serde(rename = "Matricule", default)]
    pub matricule: Option<String>,
}

/// POST /entries — validate, compute the duration, append one row.
pub async fn post_entry(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Json(req): Json<NewEntryRequest>,
) -> Result<(StatusCode, Json<EntryExport>), ApiError> {
    let role = authenticate(&headers, &state.cfg).map_err(to_api_error)?;
    if !role.can_append() {
        return Err(to_api_error(AppError::Forbidden(
            role.as_str().to_string(),
            "append entries".to_string(),
        )));
    }

    let entry = build_entry(&state, req).map_err(to_api_error)?;

    {
        // Append and client-list growth under the same lock; overlapping
        // submissions are serialized rather than losing the earlier one.
        let store = state.store.lock().await;
        store.initialize().map_err(to_api_error)?;
        store.append(&entry).map_err(to_api_error)?;

        let mut clients =
            ClientList::load(&state.cfg.clients_file).map_err(to_api_error)?;
        clients.add(&entry.client).map_err(to_api_error)?;
    }

    tracing::info!(
        client = %entry.client,
        duration_min = entry.duration_min,
        "entry appended"
    );

    Ok((StatusCode::CREATED, Json(EntryExport::from_entry(&entry))))
}

/// GET /clients — the known-client list (either role).
pub async fn get_clients(
    State(state): State<ApiState>,
    headers: HeaderMap,
) -> Result<Json<Vec<String>>, ApiError> {
    authenticate(&headers, &state.cfg).map_err(to_api_error)?;

    let clients = ClientList::load(&state.cfg.clients_file).map_err(to_api_error)?;
    Ok(Json(clients.names().to_vec()))
}

fn build_entry(state: &ApiState, req: NewEntryRequest) -> AppResult<Entry> {
    let parsed_date =
        date::parse_date(&req.date).ok_or_else(|| AppError::InvalidDate(req.date.clone()))?;
    let start = time::parse_required_time(&req.start)?;
    let end = time::parse_required_time(&req.end)?;

    if req.length_m < 0.0 || !req.length_m.is_finite() {
        return Err(AppError::InvalidLength(req.length_m.to_string()));
    }

    Ok(Entry {
        date: parsed_date,
        client: req.client,
        order_no: req.order_no,
        fabric: req.fabric,
        roll_code: req.roll_code,
        length_m: req.length_m,
        plies: req.plies,
        start,
        end,
        duration_min: compute_duration_minutes(start, end),
        operator: req
            .operator
            .unwrap_or_else(|| state.cfg.operator_name.clone()),
        matricule: req
            .matricule
            .unwrap_or_else(|| state.cfg.matricule.clone()),
    })
}
