mod common;

use anyhow::Result;
use axum::http::StatusCode;

#[tokio::test]
async fn root_reports_service_info() -> Result<()> {
    let (status, body) = common::send(common::app(), common::get("/")).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "relief-grid-api");
    assert!(body["endpoints"].is_object(), "body: {}", body);
    Ok(())
}

#[tokio::test]
async fn health_reports_degraded_without_store() -> Result<()> {
    let (status, body) = common::send(common::app(), common::get("/health")).await?;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    Ok(())
}
