//! Yield and revenue formulas.
//!
//! Both modes are pure functions of their inputs: validate against the form
//! minimums, compute, then attach display strings.

pub mod format;

use thiserror::Error;

use crate::models::*;

/// Grams to kilograms. Applied in the flowers-per-cane formula.
pub const KG_PER_GRAM: f64 = 0.001;

pub const GRAMS_PER_KG: f64 = 1000.0;

pub const KG_PER_TONNE: f64 = 1000.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    #[error("{field} must be at least {minimum} (got {value})")]
    BelowMinimum {
        field: &'static str,
        minimum: f64,
        value: f64,
    },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{quantity} is too large to compute")]
    Overflow { quantity: &'static str },
}

/// Validate an input and return it with any negative zero folded to `0.0`.
fn check_min(field: &'static str, value: f64, minimum: f64) -> Result<f64, EstimateError> {
    if !value.is_finite() {
        return Err(EstimateError::NotFinite { field });
    }
    if value < minimum {
        return Err(EstimateError::BelowMinimum {
            field,
            minimum,
            value,
        });
    }
    Ok(value + 0.0)
}

fn check_trees(num_trees: u32) -> Result<(), EstimateError> {
    if num_trees < MIN_NUM_TREES {
        return Err(EstimateError::BelowMinimum {
            field: "num_trees",
            minimum: f64::from(MIN_NUM_TREES),
            value: f64::from(num_trees),
        });
    }
    Ok(())
}

fn finite(quantity: &'static str, value: f64) -> Result<f64, EstimateError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EstimateError::Overflow { quantity })
    }
}

pub fn total_canes(num_trees: u32) -> u64 {
    u64::from(num_trees) * u64::from(CANES_PER_PLANT)
}

/// Flowers that must be left on each cane to reach the target yield.
///
/// ```text
/// target_kg   = target_yield_t_per_ha * 1000 * land_size_ha
/// total_canes = num_trees * 16
/// fpc         = target_kg / (total_canes * fruit_weight_g * 0.001)
/// ```
pub fn flowers_per_cane(
    input: &FlowersPerCaneInput,
) -> Result<FlowersPerCaneEstimate, EstimateError> {
    check_trees(input.num_trees)?;
    let land_size_ha = check_min("land_size_ha", input.land_size_ha, MIN_LAND_SIZE_HA)?;
    let target_yield = check_min(
        "target_yield_t_per_ha",
        input.target_yield_t_per_ha,
        MIN_TARGET_YIELD_T_PER_HA,
    )?;
    let fruit_weight_g = check_min("fruit_weight_g", input.fruit_weight_g, MIN_FRUIT_WEIGHT_G)?;

    let target_kg = finite("target_kg", target_yield * KG_PER_TONNE * land_size_ha)?;
    let total_canes = total_canes(input.num_trees);
    let fruit_kg_per_cane_flower = total_canes as f64 * fruit_weight_g * KG_PER_GRAM;
    let fpc = finite("flowers_per_cane", target_kg / fruit_kg_per_cane_flower)?;

    let display = FlowersPerCaneDisplay {
        flowers_per_cane: format::fixed(fpc, 2),
        messages: vec![
            format!(
                "To reach your target of {} tons/ha,",
                format::fixed(target_yield, 1)
            ),
            format!("You need to leave {} flowers per cane.", format::fixed(fpc, 2)),
        ],
    };

    Ok(FlowersPerCaneEstimate {
        target_kg,
        total_canes,
        flowers_per_cane: fpc,
        display,
    })
}

/// Harvest mass and revenue for a given flowers-per-cane figure.
///
/// ```text
/// total_canes      = num_trees * 16
/// total_kg         = flowers_per_cane * total_canes * fruit_weight_g / 1000
/// revenue          = total_kg * avg_price_per_kg
/// revenue_per_tree = revenue / num_trees
/// ```
pub fn revenue(
    input: &RevenueInput,
    currency_symbol: &str,
) -> Result<RevenueEstimate, EstimateError> {
    check_trees(input.num_trees)?;
    let fpc = check_min("flowers_per_cane", input.flowers_per_cane, MIN_FLOWERS_PER_CANE)?;
    let price = check_min("avg_price_per_kg", input.avg_price_per_kg, MIN_AVG_PRICE_PER_KG)?;
    let fruit_weight_g = check_min("fruit_weight_g", input.fruit_weight_g, MIN_FRUIT_WEIGHT_G)?;

    let total_canes = total_canes(input.num_trees);
    let total_kg = finite(
        "total_kg",
        fpc * total_canes as f64 * fruit_weight_g / GRAMS_PER_KG,
    )?;
    let revenue = finite("revenue", total_kg * price)?;
    let revenue_per_tree = revenue / f64::from(input.num_trees);

    let total_kg_text = format::grouped(total_kg, 2);
    let revenue_text = format::money(currency_symbol, revenue, true);
    let per_tree_text = format::money(currency_symbol, revenue_per_tree, false);

    let display = RevenueDisplay {
        messages: vec![
            format!("Estimated Yield: {} kg", total_kg_text),
            format!("Total Revenue: {}", revenue_text),
            format!("Revenue per Tree: {}", per_tree_text),
        ],
        total_kg: total_kg_text,
        revenue: revenue_text,
        revenue_per_tree: per_tree_text,
    };

    Ok(RevenueEstimate {
        total_canes,
        total_kg,
        revenue,
        revenue_per_tree,
        display,
    })
}

/// Dispatch a request to the selected mode.
pub fn estimate(
    request: &EstimateRequest,
    currency_symbol: &str,
) -> Result<Estimate, EstimateError> {
    match request {
        EstimateRequest::FlowersPerCane(input) => {
            flowers_per_cane(input).map(Estimate::FlowersPerCane)
        }
        EstimateRequest::Revenue(input) => {
            revenue(input, currency_symbol).map(Estimate::Revenue)
        }
    }
}
