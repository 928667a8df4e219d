// src/calculator/mod.rs
//! Per-unit profit arithmetic for e-commerce sellers.
//!
//! Everything here is plain `f64` math with no validation and no error path.
//! Inputs are expected to be non-negative (the HTTP layer enforces that), but
//! anything else still flows through and produces whatever IEEE-754 yields.

pub mod currency;

pub use currency::format_currency;

/// Margins, in percent, that `SuggestedPricing` is computed for.
pub const TARGET_MARGINS: [f64; 3] = [20.0, 30.0, 50.0];

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CostInputs {
    pub product_cost: f64,
    pub shipping_cost: f64,
    pub packaging_cost: f64,
    pub marketing_cost: f64,
    pub platform_fees: f64,
    pub additional_costs: f64,
}

impl CostInputs {
    /// Sum of every cost field, excluding tax and gateway fees.
    pub fn total_base_costs(&self) -> f64 {
        self.product_cost
            + self.shipping_cost
            + self.packaging_cost
            + self.marketing_cost
            + self.platform_fees
            + self.additional_costs
    }
}

/// Percentages levied on the selling price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxSettings {
    pub gst_rate: f64,
    pub payment_gateway_rate: f64,
}

impl Default for TaxSettings {
    fn default() -> Self {
        Self {
            gst_rate: 18.0,
            payment_gateway_rate: 2.0,
        }
    }
}

impl TaxSettings {
    /// Tax and gateway fees owed on a single sale at `selling_price`.
    pub fn amount_on(&self, selling_price: f64) -> f64 {
        let gst_amount = selling_price * (self.gst_rate / 100.0);
        let payment_fees = selling_price * (self.payment_gateway_rate / 100.0);
        gst_amount + payment_fees
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuggestedPricing {
    pub profit20: f64,
    pub profit30: f64,
    pub profit50: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfitBreakdown {
    pub total_costs: f64,
    pub profit_per_product: f64,
    pub profit_margin: f64,
    /// Kept as `f64` so a zero contribution margin surfaces as `inf`/`NaN`.
    pub break_even_units: f64,
    pub suggested_pricing: SuggestedPricing,
}

/// Price at which `base_costs` leaves `target_margin` percent of the price as profit.
pub fn suggested_price(base_costs: f64, target_margin: f64) -> f64 {
    base_costs / (1.0 - target_margin / 100.0)
}

pub fn calculate_profit(
    costs: &CostInputs,
    selling_price: f64,
    tax_settings: Option<&TaxSettings>,
) -> ProfitBreakdown {
    let total_base_costs = costs.total_base_costs();

    let total_costs = match tax_settings {
        Some(tax) => total_base_costs + tax.amount_on(selling_price),
        None => total_base_costs,
    };

    let profit_per_product = selling_price - total_costs;
    // Division is unguarded: a zero price gives inf or NaN.
    let profit_margin = (profit_per_product / selling_price) * 100.0;

    // Denominator is the margin over base costs, not over total costs.
    let break_even_units = (total_costs / (selling_price - total_base_costs)).ceil();

    let [m20, m30, m50] = TARGET_MARGINS;

    ProfitBreakdown {
        total_costs,
        profit_per_product,
        profit_margin,
        break_even_units,
        suggested_pricing: SuggestedPricing {
            profit20: suggested_price(total_base_costs, m20),
            profit30: suggested_price(total_base_costs, m30),
            profit50: suggested_price(total_base_costs, m50),
        },
    }
}
