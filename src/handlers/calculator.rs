// src/handlers/calculator.rs
use axum::extract::rejection::JsonRejection;
use axum::Json;
use tracing::{debug, instrument};

use crate::calculator::calculate_profit;
use crate::dtos::calculation::{CalculateRequest, CalculateResponse};
use crate::error::AppError;
use crate::validation::Validate;

// POST /api/calculate - Profit breakdown for one product
#[instrument(skip(payload))]
pub async fn calculate(
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<CalculateResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let costs = payload.cost_inputs();
    let tax = payload.tax_settings();
    let breakdown = calculate_profit(&costs, payload.pricing.selling_price, tax.as_ref());

    debug!(
        total_costs = breakdown.total_costs,
        profit_margin = breakdown.profit_margin,
        "Calculated profit"
    );

    Ok(Json(CalculateResponse::from(breakdown)))
}
