//! Industry endpoints, mounted beside the company routes

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Association, Industry, IndustryWithCompanies};
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::NewIndustry;

#[derive(Deserialize)]
pub struct CreateIndustryRequest {
    pub code: String,
    pub industry: String,
}

#[derive(Serialize)]
pub struct IndustryResponse {
    pub industry: Industry,
}

#[derive(Serialize)]
pub struct IndustriesResponse {
    pub industries: Vec<IndustryWithCompanies>,
}

#[derive(Serialize)]
pub struct AssociationResponse {
    pub association: Association,
}

/// POST /companies/industries
async fn create_industry(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateIndustryRequest>,
) -> Result<(StatusCode, Json<IndustryResponse>), ApiError> {
    let new = NewIndustry::new(&req.code, &req.industry)?;
    let industry = state.store.create_industry(&new).await?;
    Ok((StatusCode::CREATED, Json(IndustryResponse { industry })))
}

/// GET /companies/industries - every industry with its company codes
async fn list_industries(
    State(state): State<Arc<AppState>>,
) -> Result<Json<IndustriesResponse>, ApiError> {
    let industries = state.store.list_industries().await?;
    Ok(Json(IndustriesResponse { industries }))
}

/// POST /companies/companies/{comp_code}/industries/{ind_code}
async fn associate(
    State(state): State<Arc<AppState>>,
    Path((comp_code, ind_code)): Path<(String, String)>,
) -> Result<(StatusCode, Json<AssociationResponse>), ApiError> {
    let association = state.store.associate(&comp_code, &ind_code).await?;
    Ok((StatusCode::CREATED, Json(AssociationResponse { association })))
}

/// Industry routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/companies/industries",
            get(list_industries).post(create_industry),
        )
        .route(
            "/companies/companies/{comp_code}/industries/{ind_code}",
            post(associate),
        )
}
