//! Invoice endpoints
//!
//! Creation answers 200 rather than 201; existing clients depend on it.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::repos::Invoice;
use crate::http::error::ApiError;
use crate::http::extractors::{InvoiceId, JsonBody};
use crate::http::server::AppState;
use crate::models::{InvoiceUpdate, NewInvoice};

#[derive(Deserialize)]
pub struct CreateInvoiceRequest {
    pub comp_code: String,
    pub amt: f64,
}

#[derive(Deserialize)]
pub struct UpdateInvoiceRequest {
    pub amt: f64,
    pub paid: bool,
}

#[derive(Serialize)]
pub struct InvoiceResponse {
    pub invoice: Invoice,
}

#[derive(Serialize)]
pub struct InvoicesResponse {
    pub invoices: Vec<Invoice>,
}

/// GET /invoices
async fn list_invoices(
    State(state): State<Arc<AppState>>,
) -> Result<Json<InvoicesResponse>, ApiError> {
    let invoices = state.store.list_invoices().await?;
    Ok(Json(InvoicesResponse { invoices }))
}

/// POST /invoices
async fn create_invoice(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateInvoiceRequest>,
) -> Result<Json<InvoiceResponse>, ApiError> {
    let new = NewInvoice::new(&req.comp_code, req.amt)?;
    let invoice = state.store.create_invoice(&new).await?;
    tracing::debug!(id = invoice.id, comp_code = %invoice.comp_code, "invoice created");
    Ok(Json(InvoiceResponse { invoice }))
}

/// GET /invoices/{id}
async fn get_invoice(
    State(state): State<Arc<AppState>>,
    InvoiceId(id): InvoiceId,
) -> Result<Json<InvoiceResponse>, ApiError> {
    let invoice = state.store.get_invoice(id).await?;
    Ok(Json(InvoiceResponse { invoice }))
}

/// PUT /invoices/{id} - new amount and paid flag
async fn update_invoice(
    State(state): State<Arc<AppState>>,
    InvoiceId(id): InvoiceId,
    JsonBody(req): JsonBody<UpdateInvoiceRequest>,
) -> Result<Json<InvoiceResponse>, ApiError> {
    let update = InvoiceUpdate::new(req.amt, req.paid)?;
    let invoice = state.store.update_invoice(id, &update).await?;
    Ok(Json(InvoiceResponse { invoice }))
}

/// Invoice routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/invoices", get(list_invoices).post(create_invoice))
        .route("/invoices/{id}", get(get_invoice).put(update_invoice))
}
