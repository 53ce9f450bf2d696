//! Integration tests for REST API endpoints
//!
//! These tests drive the full router in-process, one request at a time.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use backup_organizer_core::config::ServerConfig;
use backup_organizer_core::CollectionManager;
use backup_organizer_server::{build_router, AppState};
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn app() -> Router {
    build_router(
        AppState::new(CollectionManager::new()),
        &ServerConfig::default(),
    )
}

fn post_json(uri: &str, body: Value) -> Result<Request<Body>, axum::http::Error> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
}

fn get(uri: &str) -> Result<Request<Body>, axum::http::Error> {
    Request::builder().uri(uri).body(Body::empty())
}

fn delete(uri: &str) -> Result<Request<Body>, axum::http::Error> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
}

async fn send(
    app: &Router,
    request: Request<Body>,
) -> Result<(StatusCode, Value), Box<dyn std::error::Error>> {
    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    Ok((status, serde_json::from_slice(&bytes)?))
}

async fn create(app: &Router, name: &str) -> TestResult {
    let (status, _) = send(
        app,
        post_json(
            "/api/Collection",
            json!({
                "name": name,
                "description": format!("{name} description"),
                "creation_date": "1960-06-01 15:31:10",
                "modification_date": "1960-06-02 15:31:10",
                "updated": false
            }),
        )?,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn test_health_endpoint() -> TestResult {
    let app = app();
    create(&app, "Photos").await?;

    let (status, body) = send(&app, get("/health")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["collections"]["count"], 1);
    Ok(())
}

#[tokio::test]
async fn test_create_collection_and_overview() -> TestResult {
    let app = app();

    let (status, body) = send(
        &app,
        post_json(
            "/api/Collection",
            json!({"name": "Photos", "description": "Family pictures"}),
        )?,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"errors": {}, "message": "Collection Created Successfully"})
    );

    let (status, body) = send(&app, get("/api/Overview")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Successfully Fetched Overview");

    let line = body["overview"][0].as_str().ok_or("overview line missing")?;
    assert!(line.starts_with("Photos | "));
    assert!(line.ends_with(" | Updated: True"));
    Ok(())
}

#[tokio::test]
async fn test_create_duplicate_collection() -> TestResult {
    let app = app();
    create(&app, "Photos").await?;

    let (status, body) = send(
        &app,
        post_json("/api/Collection", json!({"name": "Photos", "description": ""}))?,
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "errors": {"CollectionAlreadyExists": "Collection with name 'Photos' already exists"},
            "message": "No Collection Was Created"
        })
    );
    Ok(())
}

#[tokio::test]
async fn test_create_collection_rejects_unknown_fields() -> TestResult {
    let app = app();

    let (status, body) = send(
        &app,
        post_json(
            "/api/Collection",
            json!({"name": "Photos", "description": "", "color": "red"}),
        )?,
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]["InvalidPayload"].is_string());
    assert_eq!(body["message"], "No Collection Was Created");

    let (_, body) = send(&app, get("/api/Overview")?).await?;
    assert_eq!(body["overview"], json!([]));
    Ok(())
}

#[tokio::test]
async fn test_list_and_info() -> TestResult {
    let app = app();
    create(&app, "Zeta").await?;
    create(&app, "Alpha").await?;

    let (status, body) = send(&app, get("/api/List")?).await?;
    assert_eq!(status, StatusCode::OK);
    let keys: Vec<_> = body["overview"]
        .as_object()
        .ok_or("overview is not an object")?
        .keys()
        .cloned()
        .collect();
    assert_eq!(keys, vec!["Zeta", "Alpha"]);
    assert_eq!(
        body["overview"]["Alpha"],
        json!({
            "description": "Alpha description",
            "creation_date": "1960-06-01 15:31:10",
            "modification_date": "1960-06-02 15:31:10",
            "updated": false
        })
    );

    let (status, body) = send(&app, get("/api/Info?name=Alpha")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["info"],
        json!({
            "name": "Alpha",
            "description": "Alpha description",
            "creation_date": "1960-06-01 15:31:10",
            "modification_date": "1960-06-02 15:31:10",
            "updated": false
        })
    );
    Ok(())
}

#[tokio::test]
async fn test_info_errors() -> TestResult {
    let app = app();

    let (status, body) = send(&app, get("/api/Info")?).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "errors": {"MissingParameter": "Parameter \"name\" is required"},
            "message": "Action aborted. Exception raised"
        })
    );

    let (status, body) = send(&app, get("/api/Info?name=Nope")?).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"]["CollectionNotFound"],
        "Collection with name 'Nope' not found"
    );
    Ok(())
}

#[tokio::test]
async fn test_repeated_query_parameter_returns_envelope() -> TestResult {
    let app = app();
    create(&app, "a").await?;

    let requests = [
        get("/api/Info?name=a&name=b")?,
        get("/api/ListBackups?name=a&name=b")?,
        get("/api/Search?name=a&case_sensitive=true&case_sensitive=false")?,
        delete("/api/Delete?name=a&name=b")?,
    ];

    for request in requests {
        let uri = request.uri().to_string();
        let (status, body) = send(&app, request).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["message"], "Action aborted. Exception raised", "{uri}");
        assert!(body["errors"]["InvalidParameter"].is_string(), "{uri}");
    }

    // Nothing was deleted by the rejected request
    let (_, body) = send(&app, get("/api/Info?name=a")?).await?;
    assert_eq!(body["info"]["name"], "a");
    Ok(())
}

#[tokio::test]
async fn test_search() -> TestResult {
    let app = app();
    create(&app, "Test Collection").await?;
    create(&app, "ECOLLECTION").await?;
    create(&app, "Other").await?;

    let (status, body) = send(&app, get("/api/Search?name=test")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["search"], json!({}));

    let (_, body) = send(&app, get("/api/Search?name=COLLECTION&case_sensitive=false")?).await?;
    let keys: Vec<_> = body["search"]
        .as_object()
        .ok_or("search is not an object")?
        .keys()
        .cloned()
        .collect();
    assert_eq!(keys, vec!["Test Collection", "ECOLLECTION"]);

    let (_, body) = send(&app, get("/api/Search?name=")?).await?;
    assert_eq!(body["search"].as_object().map(|m| m.len()), Some(3));
    Ok(())
}

#[tokio::test]
async fn test_search_invalid_case_sensitive() -> TestResult {
    let app = app();

    let (status, body) = send(&app, get("/api/Search?name=a&case_sensitive=maybe")?).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"]["InvalidParameter"],
        "Parameter \"case_sensitive\" is not a valid value. Only (true/false) is valid input"
    );
    Ok(())
}

#[tokio::test]
async fn test_edit_collection() -> TestResult {
    let app = app();
    create(&app, "Photos").await?;

    let (status, body) = send(
        &app,
        post_json(
            "/api/Edit",
            json!({"collection_name": "Photos", "name": "Pictures", "updated": true}),
        )?,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Edit Was Successfull");

    let (status, body) = send(&app, get("/api/Info?name=Pictures")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["updated"], true);
    assert_eq!(body["info"]["creation_date"], "1960-06-01 15:31:10");
    Ok(())
}

#[tokio::test]
async fn test_edit_invalid_key_keeps_earlier_edits() -> TestResult {
    let app = app();
    create(&app, "Photos").await?;

    let (status, body) = send(
        &app,
        post_json(
            "/api/Edit",
            json!({
                "collection_name": "Photos",
                "description": "applied",
                "creation_date": "rejected"
            }),
        )?,
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "errors": {
                "InvalidCollectionEdit": "Key 'creation_date' and associated value is not a valid edit"
            },
            "message": "No Edit Was Made"
        })
    );

    let (_, body) = send(&app, get("/api/Info?name=Photos")?).await?;
    assert_eq!(body["info"]["description"], "applied");
    assert_eq!(body["info"]["creation_date"], "1960-06-01 15:31:10");
    Ok(())
}

#[tokio::test]
async fn test_backup_lifecycle() -> TestResult {
    let app = app();
    create(&app, "Photos").await?;

    let (status, body) = send(
        &app,
        post_json(
            "/api/Backup",
            json!({
                "collection_name": "Photos",
                "backup_name": "nightly",
                "backup_location": "/home/user/backup.bak",
                "backup_date": "1960"
            }),
        )?,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Backup Created Successfully");

    let (status, body) = send(
        &app,
        post_json(
            "/api/Backup",
            json!({
                "collection_name": "Photos",
                "backup_name": "nightly",
                "backup_location": "/elsewhere"
            }),
        )?,
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"]["BackupAlreadyExists"],
        "BackupEntry with name 'nightly' already exists"
    );
    assert_eq!(body["message"], "No Backup Was Created");

    let (status, body) = send(&app, get("/api/ListBackups?name=Photos")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["backup_entries"],
        json!({"nightly": {"date": "1960", "location": "/home/user/backup.bak"}})
    );

    let (status, body) = send(
        &app,
        post_json(
            "/api/Unbackup",
            json!({"collection_name": "Photos", "backup_name": "nightly"}),
        )?,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Deletion Was Successfull");

    let (status, body) = send(
        &app,
        post_json(
            "/api/Unbackup",
            json!({"collection_name": "Photos", "backup_name": "nightly"}),
        )?,
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"]["BackupNotFound"],
        "BackupEntry with name 'nightly' not found in backup_entries"
    );
    assert_eq!(body["message"], "No Deletion Was Made");
    Ok(())
}

#[tokio::test]
async fn test_backup_unknown_collection() -> TestResult {
    let app = app();

    let (status, body) = send(
        &app,
        post_json(
            "/api/Backup",
            json!({
                "collection_name": "Photos",
                "backup_name": "nightly",
                "backup_location": "/b"
            }),
        )?,
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]["CollectionNotFound"].is_string());
    Ok(())
}

#[tokio::test]
async fn test_delete_collection() -> TestResult {
    let app = app();
    create(&app, "Photos").await?;
    create(&app, "Music").await?;

    let (status, body) = send(&app, delete("/api/Delete?name=Photos")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Successfully Deleted DataCollection");

    let (_, body) = send(&app, get("/api/List")?).await?;
    let keys: Vec<_> = body["overview"]
        .as_object()
        .ok_or("overview is not an object")?
        .keys()
        .cloned()
        .collect();
    assert_eq!(keys, vec!["Music"]);

    let (status, body) = send(&app, delete("/api/Delete?name=Photos")?).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]["CollectionNotFound"].is_string());

    let (status, _) = send(&app, delete("/api/Delete")?).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}
