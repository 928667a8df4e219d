// src/dtos/calculation.rs
use serde::{Deserialize, Serialize};

use crate::calculator::{format_currency, CostInputs, ProfitBreakdown, TaxSettings};
use crate::validation::{FieldRule, FieldValue, Validate, CALCULATION_RULES, TAX_RULES};

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostInputsRequest {
    pub product_cost: f64,
    pub shipping_cost: f64,
    pub packaging_cost: f64,
    pub marketing_cost: f64,
    pub platform_fees: f64,
    pub additional_costs: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRequest {
    pub selling_price: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxAndFeesRequest {
    pub gst_rate: f64,
    pub payment_gateway_rate: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    /// Accepted and validated but not used by any formula.
    pub product_quantity: f64,
    pub costs: CostInputsRequest,
    pub pricing: PricingRequest,
    #[serde(default)]
    pub include_taxes: bool,
    pub tax_and_fees: Option<TaxAndFeesRequest>,
}

impl Validate for CalculateRequest {
    fn rules() -> &'static [FieldRule] {
        CALCULATION_RULES
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let c = &self.costs;
        let n = match name {
            "productQuantity" => self.product_quantity,
            "costs.productCost" => c.product_cost,
            "costs.shippingCost" => c.shipping_cost,
            "costs.packagingCost" => c.packaging_cost,
            "costs.marketingCost" => c.marketing_cost,
            "costs.platformFees" => c.platform_fees,
            "costs.additionalCosts" => c.additional_costs,
            "pricing.sellingPrice" => self.pricing.selling_price,
            "taxAndFees.gstRate" => self.tax_and_fees?.gst_rate,
            "taxAndFees.paymentGatewayRate" => self.tax_and_fees?.payment_gateway_rate,
            _ => return None,
        };
        Some(FieldValue::Number(n))
    }

    fn validate(&self) -> Result<(), crate::error::AppError> {
        let tax_rules: &[FieldRule] = if self.tax_and_fees.is_some() { TAX_RULES } else { &[] };
        for rule in CALCULATION_RULES.iter().chain(tax_rules) {
            rule.check(self.field(rule.field))
                .map_err(crate::error::AppError::validation)?;
        }
        Ok(())
    }
}

impl CalculateRequest {
    pub fn cost_inputs(&self) -> CostInputs {
        let c = &self.costs;
        CostInputs {
            product_cost: c.product_cost,
            shipping_cost: c.shipping_cost,
            packaging_cost: c.packaging_cost,
            marketing_cost: c.marketing_cost,
            platform_fees: c.platform_fees,
            additional_costs: c.additional_costs,
        }
    }

    /// Tax settings to apply, if the toggle is on. Missing rates fall back
    /// to the form defaults.
    pub fn tax_settings(&self) -> Option<TaxSettings> {
        if !self.include_taxes {
            return None;
        }
        Some(match self.tax_and_fees {
            Some(t) => TaxSettings {
                gst_rate: t.gst_rate,
                payment_gateway_rate: t.payment_gateway_rate,
            },
            None => TaxSettings::default(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct SuggestedPricingResponse {
    pub profit20: f64,
    pub profit30: f64,
    pub profit50: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedBreakdown {
    pub total_costs: String,
    pub profit_per_product: String,
    pub profit20: String,
    pub profit30: String,
    pub profit50: String,
}

/// Non-finite numbers serialize as `null`; `formatted` still shows them.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    pub total_costs: f64,
    pub profit_per_product: f64,
    pub profit_margin: f64,
    pub break_even_units: f64,
    pub suggested_pricing: SuggestedPricingResponse,
    pub formatted: FormattedBreakdown,
}

impl From<ProfitBreakdown> for CalculateResponse {
    fn from(b: ProfitBreakdown) -> Self {
        let s = b.suggested_pricing;
        Self {
            total_costs: b.total_costs,
            profit_per_product: b.profit_per_product,
            profit_margin: b.profit_margin,
            break_even_units: b.break_even_units,
            suggested_pricing: SuggestedPricingResponse {
                profit20: s.profit20,
                profit30: s.profit30,
                profit50: s.profit50,
            },
            formatted: FormattedBreakdown {
                total_costs: format_currency(b.total_costs),
                profit_per_product: format_currency(b.profit_per_product),
                profit20: format_currency(s.profit20),
                profit30: format_currency(s.profit30),
                profit50: format_currency(s.profit50),
            },
        }
    }
}
