use serde::{Deserialize, Serialize};

/// Result of the flowers-per-cane mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowersPerCaneEstimate {
    /// Target harvest for the whole orchard.
    pub target_kg: f64,
    pub total_canes: u64,
    /// Flowers to retain on every cane after thinning.
    pub flowers_per_cane: f64,
    pub display: FlowersPerCaneDisplay,
}

/// Preformatted strings for a flowers-per-cane result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowersPerCaneDisplay {
    /// Two decimals, e.g. `"10.52"`.
    pub flowers_per_cane: String,
    pub messages: Vec<String>,
}

/// Result of the revenue mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueEstimate {
    pub total_canes: u64,
    pub total_kg: f64,
    pub revenue: f64,
    pub revenue_per_tree: f64,
    pub display: RevenueDisplay,
}

/// Preformatted strings for a revenue result.
///
/// `total_kg` and `revenue` are thousands-separated; monetary values carry the
/// configured currency prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueDisplay {
    pub total_kg: String,
    pub revenue: String,
    pub revenue_per_tree: String,
    pub messages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Estimate {
    FlowersPerCane(FlowersPerCaneEstimate),
    Revenue(RevenueEstimate),
}

impl Estimate {
    pub fn messages(&self) -> &[String] {
        match self {
            Self::FlowersPerCane(e) => &e.display.messages,
            Self::Revenue(e) => &e.display.messages,
        }
    }
}
