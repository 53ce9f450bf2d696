//! REST API server implementation using Axum
//!
//! This module provides the REST API server with OpenAPI documentation,
//! wrapping the collection registry from backup-organizer-core.

use crate::api::{
    add_backup, collection_info, create_collection, edit_collection, list_backups,
    remove_backup, search_collections, ActionResponse, AddBackupRequest,
    CreateCollectionRequest, EditCollectionRequest, ErrorMap, InfoResponse,
    ListBackupsResponse, ListResponse, NameQuery, OverviewResponse, RemoveBackupRequest,
    SearchQuery, SearchResponse,
};
#[cfg(feature = "openapi")]
use crate::api::{CollectionInfo, EditPatch, FailureResponse};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::{HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use backup_organizer_core::config::ServerConfig;
use backup_organizer_core::{CollectionManager, Error};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
#[cfg(feature = "openapi")]
use utoipa::OpenApi;
#[cfg(feature = "openapi")]
use utoipa_swagger_ui::SwaggerUi;

const ABORTED: &str = "Action aborted. Exception raised";

/// Shared application state
///
/// The registry itself has no synchronization; every handler holds this lock
/// for the duration of exactly one registry operation.
#[derive(Clone)]
pub struct AppState {
    manager: Arc<RwLock<CollectionManager>>,
}

impl AppState {
    pub fn new(manager: CollectionManager) -> Self {
        Self {
            manager: Arc::new(RwLock::new(manager)),
        }
    }
}

/// Build the Axum router with all endpoints
pub fn build_router(state: AppState, server_config: &ServerConfig) -> Router {
    let router = Router::new()
        // Collection endpoints
        .route("/api/Collection", post(create_collection_handler))
        .route("/api/Edit", post(edit_handler))
        .route("/api/Delete", delete(delete_handler))
        .route("/api/Overview", get(overview_handler))
        .route("/api/List", get(list_handler))
        .route("/api/Info", get(info_handler))
        .route("/api/Search", get(search_handler))
        // Backup endpoints
        .route("/api/Backup", post(backup_handler))
        .route("/api/Unbackup", post(unbackup_handler))
        .route("/api/ListBackups", get(list_backups_handler))
        // Health check
        .route("/health", get(health_handler));

    // OpenAPI documentation
    #[cfg(feature = "openapi")]
    let router = router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // Configure CORS based on allowed_origins
    let cors_layer = if server_config.allowed_origins.is_empty() {
        // CORS disabled
        CorsLayer::new()
    } else if server_config.allowed_origins.contains(&"*".to_string()) {
        // Allow all origins
        CorsLayer::permissive()
    } else {
        // Allow specific origins
        let mut cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers([axum::http::header::CONTENT_TYPE]);

        for origin in &server_config.allowed_origins {
            if let Ok(header_value) = HeaderValue::from_str(origin) {
                cors = cors.allow_origin(header_value);
            } else {
                tracing::warn!("Ignoring invalid CORS origin '{origin}'");
            }
        }
        cors
    };

    router
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn action(message: &str) -> Json<ActionResponse> {
    Json(ActionResponse {
        errors: ErrorMap::new(),
        message: message.to_string(),
    })
}

/// POST /api/Collection
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/api/Collection",
    request_body = CreateCollectionRequest,
    responses(
        (status = 200, description = "Collection created", body = ActionResponse),
        (status = 400, description = "Name taken or invalid payload", body = FailureResponse)
    ),
    tag = "collections"
))]
async fn create_collection_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateCollectionRequest>, JsonRejection>,
) -> Result<Json<ActionResponse>, ApiError> {
    const FAILURE: &str = "No Collection Was Created";
    let Json(request) = payload.map_err(|e| ApiError::payload(e, FAILURE))?;

    tracing::info!("Create collection request: name='{}'", request.name);

    let mut manager = state.manager.write().await;
    create_collection(&mut manager, request).map_err(|e| ApiError::operation(e, FAILURE))?;
    Ok(action("Collection Created Successfully"))
}

/// POST /api/Edit
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/api/Edit",
    request_body = EditCollectionRequest,
    responses(
        (status = 200, description = "Edit applied", body = ActionResponse),
        (status = 400, description = "Unknown collection or invalid edit", body = FailureResponse)
    ),
    tag = "collections"
))]
async fn edit_handler(
    State(state): State<AppState>,
    payload: Result<Json<EditCollectionRequest>, JsonRejection>,
) -> Result<Json<ActionResponse>, ApiError> {
    const FAILURE: &str = "No Edit Was Made";
    let Json(request) = payload.map_err(|e| ApiError::payload(e, FAILURE))?;

    tracing::info!(
        "Edit request: collection='{}', {} field(s)",
        request.collection_name,
        request.patch.len()
    );

    let mut manager = state.manager.write().await;
    edit_collection(&mut manager, request).map_err(|e| ApiError::operation(e, FAILURE))?;
    Ok(action("Edit Was Successfull"))
}

/// DELETE /api/Delete
#[cfg_attr(feature = "openapi", utoipa::path(
    delete,
    path = "/api/Delete",
    params(NameQuery),
    responses(
        (status = 200, description = "Collection deleted", body = ActionResponse),
        (status = 400, description = "Missing parameter or unknown collection", body = FailureResponse)
    ),
    tag = "collections"
))]
async fn delete_handler(
    State(state): State<AppState>,
    query: Result<Query<NameQuery>, QueryRejection>,
) -> Result<Json<ActionResponse>, ApiError> {
    let Query(query) = query.map_err(ApiError::query)?;
    let name = query.name.ok_or(ApiError::MissingParameter { parameter: "name" })?;

    tracing::info!("Delete request: name='{name}'");

    let mut manager = state.manager.write().await;
    manager
        .delete_collection(&name)
        .map_err(|e| ApiError::operation(e, ABORTED))?;
    Ok(action("Successfully Deleted DataCollection"))
}

/// GET /api/Overview
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/Overview",
    responses(
        (status = 200, description = "One summary line per collection", body = OverviewResponse)
    ),
    tag = "collections"
))]
async fn overview_handler(State(state): State<AppState>) -> Json<OverviewResponse> {
    tracing::info!("Overview request");

    let overview = state.manager.read().await.overview();
    Json(OverviewResponse {
        errors: ErrorMap::new(),
        message: "Successfully Fetched Overview".to_string(),
        overview,
    })
}

/// GET /api/List
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/List",
    responses(
        (status = 200, description = "Every collection keyed by name", body = ListResponse)
    ),
    tag = "collections"
))]
async fn list_handler(State(state): State<AppState>) -> Json<ListResponse> {
    tracing::info!("Detailed overview request");

    let overview = state.manager.read().await.json_overview();
    Json(ListResponse {
        errors: ErrorMap::new(),
        message: "Successfully Fetched a Detailed Overview".to_string(),
        overview,
    })
}

/// GET /api/Info
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/Info",
    params(NameQuery),
    responses(
        (status = 200, description = "Fields of one collection", body = InfoResponse),
        (status = 400, description = "Missing parameter or unknown collection", body = FailureResponse)
    ),
    tag = "collections"
))]
async fn info_handler(
    State(state): State<AppState>,
    query: Result<Query<NameQuery>, QueryRejection>,
) -> Result<Json<InfoResponse>, ApiError> {
    let Query(query) = query.map_err(ApiError::query)?;
    let name = query.name.ok_or(ApiError::MissingParameter { parameter: "name" })?;

    tracing::info!("Info request: name='{name}'");

    let info = collection_info(&*state.manager.read().await, &name)
        .map_err(|e| ApiError::operation(e, ABORTED))?;
    Ok(Json(InfoResponse {
        errors: ErrorMap::new(),
        message: "Successfully Fetched Info".to_string(),
        info,
    }))
}

/// GET /api/Search
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/Search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Collections whose name contains the term", body = SearchResponse),
        (status = 400, description = "Missing or invalid parameter", body = FailureResponse)
    ),
    tag = "collections"
))]
async fn search_handler(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Query(query) = query.map_err(ApiError::query)?;
    let term = query.name.ok_or(ApiError::MissingParameter { parameter: "name" })?;
    let case_sensitive = parse_case_sensitive(query.case_sensitive.as_deref())?;

    tracing::info!("Search request: term='{term}', case_sensitive={case_sensitive}");

    let search = search_collections(&*state.manager.read().await, &term, case_sensitive);
    Ok(Json(SearchResponse {
        errors: ErrorMap::new(),
        message: "Successfully Fetched Search Results".to_string(),
        search,
    }))
}

/// `true`/`false` in any letter case; absent means case sensitive
fn parse_case_sensitive(raw: Option<&str>) -> Result<bool, ApiError> {
    match raw.map(str::to_lowercase).as_deref() {
        None | Some("true") => Ok(true),
        Some("false") => Ok(false),
        Some(_) => Err(ApiError::InvalidParameter {
            parameter: "case_sensitive",
        }),
    }
}

/// POST /api/Backup
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/api/Backup",
    request_body = AddBackupRequest,
    responses(
        (status = 200, description = "Backup entry created", body = ActionResponse),
        (status = 400, description = "Unknown collection, name taken or invalid payload", body = FailureResponse)
    ),
    tag = "backups"
))]
async fn backup_handler(
    State(state): State<AppState>,
    payload: Result<Json<AddBackupRequest>, JsonRejection>,
) -> Result<Json<ActionResponse>, ApiError> {
    const FAILURE: &str = "No Backup Was Created";
    let Json(request) = payload.map_err(|e| ApiError::payload(e, FAILURE))?;

    tracing::info!(
        "Add backup request: collection='{}', backup='{}'",
        request.collection_name,
        request.backup_name
    );

    let mut manager = state.manager.write().await;
    add_backup(&mut manager, request).map_err(|e| ApiError::operation(e, FAILURE))?;
    Ok(action("Backup Created Successfully"))
}

/// POST /api/Unbackup
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/api/Unbackup",
    request_body = RemoveBackupRequest,
    responses(
        (status = 200, description = "Backup entry removed", body = ActionResponse),
        (status = 400, description = "Unknown collection or backup", body = FailureResponse)
    ),
    tag = "backups"
))]
async fn unbackup_handler(
    State(state): State<AppState>,
    payload: Result<Json<RemoveBackupRequest>, JsonRejection>,
) -> Result<Json<ActionResponse>, ApiError> {
    const FAILURE: &str = "No Deletion Was Made";
    let Json(request) = payload.map_err(|e| ApiError::payload(e, FAILURE))?;

    tracing::info!(
        "Remove backup request: collection='{}', backup='{}'",
        request.collection_name,
        request.backup_name
    );

    let mut manager = state.manager.write().await;
    remove_backup(&mut manager, request).map_err(|e| ApiError::operation(e, FAILURE))?;
    Ok(action("Deletion Was Successfull"))
}

/// GET /api/ListBackups
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/ListBackups",
    params(NameQuery),
    responses(
        (status = 200, description = "Backup entries keyed by name", body = ListBackupsResponse),
        (status = 400, description = "Missing parameter or unknown collection", body = FailureResponse)
    ),
    tag = "backups"
))]
async fn list_backups_handler(
    State(state): State<AppState>,
    query: Result<Query<NameQuery>, QueryRejection>,
) -> Result<Json<ListBackupsResponse>, ApiError> {
    let Query(query) = query.map_err(ApiError::query)?;
    let name = query.name.ok_or(ApiError::MissingParameter { parameter: "name" })?;

    tracing::info!("List backups request: collection='{name}'");

    let backup_entries = list_backups(&*state.manager.read().await, &name)
        .map_err(|e| ApiError::operation(e, ABORTED))?;
    Ok(Json(ListBackupsResponse {
        errors: ErrorMap::new(),
        message: "Successfully Fetched a List of BackupEntries".to_string(),
        backup_entries,
    }))
}

/// GET /health
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy")
    ),
    tag = "health"
))]
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    use serde_json::json;

    let collection_count = state.manager.read().await.len();

    let health_status = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "collections": {"count": collection_count}
    });

    (StatusCode::OK, Json(health_status))
}

/// Error handling for API endpoints
///
/// Every variant renders as a `{"errors": {kind: detail}, "message": ...}`
/// envelope with status 400.
#[derive(Debug)]
pub enum ApiError {
    /// The registry rejected the operation
    Operation { source: Error, message: &'static str },
    /// Request body could not be deserialized
    InvalidPayload { detail: String, message: &'static str },
    /// Required query parameter absent
    MissingParameter { parameter: &'static str },
    /// Query parameter present but malformed
    InvalidParameter { parameter: &'static str },
    /// Query string could not be deserialized, e.g. a repeated parameter
    InvalidQuery { detail: String },
}

impl ApiError {
    fn operation(source: Error, message: &'static str) -> Self {
        ApiError::Operation { source, message }
    }

    fn payload(rejection: JsonRejection, message: &'static str) -> Self {
        ApiError::InvalidPayload {
            detail: rejection.body_text(),
            message,
        }
    }

    fn query(rejection: QueryRejection) -> Self {
        ApiError::InvalidQuery {
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (kind, detail, message) = match self {
            ApiError::Operation { source, message } => {
                (source.kind().to_string(), source.to_string(), message)
            }
            ApiError::InvalidPayload { detail, message } => {
                ("InvalidPayload".to_string(), detail, message)
            }
            ApiError::MissingParameter { parameter } => (
                "MissingParameter".to_string(),
                format!("Parameter \"{parameter}\" is required"),
                ABORTED,
            ),
            ApiError::InvalidParameter { parameter } => (
                "InvalidParameter".to_string(),
                format!(
                    "Parameter \"{parameter}\" is not a valid value. Only (true/false) is valid input"
                ),
                ABORTED,
            ),
            ApiError::InvalidQuery { detail } => {
                ("InvalidParameter".to_string(), detail, ABORTED)
            }
        };

        tracing::warn!("Request failed: {kind}: {detail}");

        let mut errors = ErrorMap::new();
        errors.insert(kind, detail);
        let body = serde_json::json!({ "errors": errors, "message": message });

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// OpenAPI documentation
#[cfg(feature = "openapi")]
#[derive(OpenApi)]
#[openapi(
    info(title = "Backup Organizer REST API"),
    paths(
        create_collection_handler,
        edit_handler,
        delete_handler,
        overview_handler,
        list_handler,
        info_handler,
        search_handler,
        backup_handler,
        unbackup_handler,
        list_backups_handler,
        health_handler
    ),
    components(schemas(
        CreateCollectionRequest,
        EditCollectionRequest,
        EditPatch,
        AddBackupRequest,
        RemoveBackupRequest,
        ActionResponse,
        OverviewResponse,
        ListResponse,
        CollectionInfo,
        InfoResponse,
        SearchResponse,
        ListBackupsResponse,
        FailureResponse
    )),
    tags(
        (name = "collections", description = "Collection management endpoints"),
        (name = "backups", description = "Backup entry endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
struct ApiDoc;
