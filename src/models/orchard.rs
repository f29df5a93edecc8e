use serde::{Deserialize, Serialize};

/// Fixed number of fruiting canes retained per tree.
pub const CANES_PER_PLANT: u32 = 16;

/// Reference planting density (5m rows, 3m between trees) used as the default tree count.
pub const DEFAULT_NUM_TREES: u32 = 660;

pub const DEFAULT_LAND_SIZE_HA: f64 = 1.0;
pub const DEFAULT_TARGET_YIELD_T_PER_HA: f64 = 10.0;
pub const DEFAULT_FRUIT_WEIGHT_G: f64 = 90.0;
pub const DEFAULT_FLOWERS_PER_CANE: f64 = 8.0;
pub const DEFAULT_AVG_PRICE_PER_KG: f64 = 60.0;

pub const MIN_NUM_TREES: u32 = 1;
pub const MIN_LAND_SIZE_HA: f64 = 0.1;
pub const MIN_TARGET_YIELD_T_PER_HA: f64 = 1.0;
pub const MIN_FRUIT_WEIGHT_G: f64 = 1.0;
pub const MIN_FLOWERS_PER_CANE: f64 = 0.0;
pub const MIN_AVG_PRICE_PER_KG: f64 = 0.0;

/// Inputs for the "flowers per cane to hit target yield" mode.
///
/// Fields left out of a request take the form defaults, so an empty JSON
/// object is a valid submission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowersPerCaneInput {
    #[serde(default = "default_num_trees")]
    pub num_trees: u32,
    #[serde(default = "default_land_size_ha")]
    pub land_size_ha: f64,
    #[serde(default = "default_target_yield")]
    pub target_yield_t_per_ha: f64,
    #[serde(default = "default_fruit_weight")]
    pub fruit_weight_g: f64,
}

impl Default for FlowersPerCaneInput {
    fn default() -> Self {
        Self {
            num_trees: DEFAULT_NUM_TREES,
            land_size_ha: DEFAULT_LAND_SIZE_HA,
            target_yield_t_per_ha: DEFAULT_TARGET_YIELD_T_PER_HA,
            fruit_weight_g: DEFAULT_FRUIT_WEIGHT_G,
        }
    }
}

/// Inputs for the revenue estimate mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueInput {
    #[serde(default = "default_num_trees")]
    pub num_trees: u32,
    #[serde(default = "default_flowers_per_cane")]
    pub flowers_per_cane: f64,
    #[serde(default = "default_avg_price")]
    pub avg_price_per_kg: f64,
    #[serde(default = "default_fruit_weight")]
    pub fruit_weight_g: f64,
}

impl Default for RevenueInput {
    fn default() -> Self {
        Self {
            num_trees: DEFAULT_NUM_TREES,
            flowers_per_cane: DEFAULT_FLOWERS_PER_CANE,
            avg_price_per_kg: DEFAULT_AVG_PRICE_PER_KG,
            fruit_weight_g: DEFAULT_FRUIT_WEIGHT_G,
        }
    }
}

/// The two mutually exclusive estimator modes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EstimateRequest {
    FlowersPerCane(FlowersPerCaneInput),
    Revenue(RevenueInput),
}

fn default_num_trees() -> u32 {
    DEFAULT_NUM_TREES
}

fn default_land_size_ha() -> f64 {
    DEFAULT_LAND_SIZE_HA
}

fn default_target_yield() -> f64 {
    DEFAULT_TARGET_YIELD_T_PER_HA
}

fn default_fruit_weight() -> f64 {
    DEFAULT_FRUIT_WEIGHT_G
}

fn default_flowers_per_cane() -> f64 {
    DEFAULT_FLOWERS_PER_CANE
}

fn default_avg_price() -> f64 {
    DEFAULT_AVG_PRICE_PER_KG
}
