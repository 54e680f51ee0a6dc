//! Company endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Company, CompanyWithInvoices};
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{CompanyUpdate, NewCompany};

/// Create/update company request
#[derive(Deserialize)]
pub struct CompanyRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Serialize)]
pub struct CompanyResponse<T> {
    pub company: T,
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

/// GET /companies/{code} - company plus its invoice ids
async fn get_company(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<CompanyResponse<CompanyWithInvoices>>, ApiError> {
    let company = state.store.company_with_invoices(&code).await?;
    Ok(Json(CompanyResponse { company }))
}

/// POST /companies - create a company, code derived from name
async fn create_company(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CompanyRequest>,
) -> Result<(StatusCode, Json<CompanyResponse<Company>>), ApiError> {
    let new = NewCompany::new(&req.name, req.description)?;
    let company = state.store.create_company(&new).await?;
    tracing::debug!(code = %company.code, "company created");

    Ok((StatusCode::CREATED, Json(CompanyResponse { company })))
}

/// PUT /companies/{code} - replace name and description
async fn update_company(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
    JsonBody(req): JsonBody<CompanyRequest>,
) -> Result<Json<CompanyResponse<Company>>, ApiError> {
    let update = CompanyUpdate::new(&req.name, req.description)?;
    let company = state.store.update_company(&code, &update).await?;
    Ok(Json(CompanyResponse { company }))
}

/// DELETE /companies/{code}
async fn delete_company(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<StatusResponse>, ApiError> {
    state.store.delete_company(&code).await?;
    tracing::debug!(%code, "company deleted");
    Ok(Json(StatusResponse { status: "deleted" }))
}

/// Company routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/companies", post(create_company))
        .route(
            "/companies/{code}",
            get(get_company).put(update_company).delete(delete_company),
        )
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::http::routes::testing::{send, test_app};

    #[tokio::test]
    async fn create_derives_code_from_name() {
        let app = test_app();
        let (status, body) = send(
            &app,
            "POST",
            "/companies",
            Some(json!({"name": "New Co", "description": "A new company."})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            json!({"company": {"code": "new-co", "name": "New Co", "description": "A new company."}})
        );
    }

    #[tokio::test]
    async fn accented_name_is_transliterated_into_code() {
        let app = test_app();
        let (status, body) = send(&app, "POST", "/companies", Some(json!({"name": "Ölwerk GmbH"}))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["company"]["code"], "olwerk-gmbh");
        assert_eq!(body["company"]["name"], "Ölwerk GmbH");

        let (status, _) = send(&app, "GET", "/companies/olwerk-gmbh", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn get_includes_invoice_ids() {
        let app = test_app();
        send(
            &app,
            "POST",
            "/companies",
            Some(json!({"name": "Apple", "description": "Maker of OSX."})),
        )
        .await;
        let (_, inv) = send(
            &app,
            "POST",
            "/invoices",
            Some(json!({"comp_code": "apple", "amt": 100})),
        )
        .await;

        let (status, body) = send(&app, "GET", "/companies/apple", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["company"]["code"], "apple");
        assert_eq!(body["company"]["name"], "Apple");
        assert_eq!(body["company"]["description"], "Maker of OSX.");
        assert_eq!(body["company"]["invoices"], json!([inv["invoice"]["id"]]));
    }

    #[tokio::test]
    async fn get_missing_company_is_404() {
        let app = test_app();
        let (status, body) = send(&app, "GET", "/companies/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "No such company: nope");
    }

    #[tokio::test]
    async fn update_reflects_submitted_fields() {
        let app = test_app();
        send(
            &app,
            "POST",
            "/companies",
            Some(json!({"name": "Apple", "description": "Maker of OSX."})),
        )
        .await;

        let (status, body) = send(
            &app,
            "PUT",
            "/companies/apple",
            Some(json!({"name": "Updated Co", "description": "An updated company."})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"company": {"code": "apple", "name": "Updated Co", "description": "An updated company."}})
        );
    }

    #[tokio::test]
    async fn update_missing_company_is_404() {
        let app = test_app();
        let (status, _) = send(
            &app,
            "PUT",
            "/companies/nope",
            Some(json!({"name": "X", "description": "Y"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_then_delete_again() {
        let app = test_app();
        send(&app, "POST", "/companies", Some(json!({"name": "Apple"}))).await;

        let (status, body) = send(&app, "DELETE", "/companies/apple", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "deleted"}));

        let (status, _) = send(&app, "DELETE", "/companies/apple", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, "GET", "/companies/apple", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn duplicate_company_is_conflict() {
        let app = test_app();
        let payload = json!({"name": "New Co", "description": "A new company."});
        send(&app, "POST", "/companies", Some(payload.clone())).await;

        let (status, body) = send(&app, "POST", "/companies", Some(payload)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "conflict");
    }

    #[tokio::test]
    async fn blank_name_is_400() {
        let app = test_app();
        let (status, body) = send(&app, "POST", "/companies", Some(json!({"name": "  "}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation_error");
    }

    #[tokio::test]
    async fn missing_name_is_rejected_as_json() {
        let app = test_app();
        let (status, body) = send(
            &app,
            "POST",
            "/companies",
            Some(json!({"description": "no name"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "bad_request");
    }
}
