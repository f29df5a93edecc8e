use serde::{Deserialize, Serialize};

/// Terms a user must acknowledge before the estimator is reachable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disclaimer {
    pub title: String,
    pub notices: Vec<String>,
    pub assumptions: Vec<String>,
    /// Label of the confirmation control.
    pub accept_label: String,
}

impl Disclaimer {
    pub fn standard() -> Self {
        Self {
            title: "Disclaimer & Assumptions".to_string(),
            notices: vec![
                "This calculator is provided as a general planning tool for kiwi fruit yield \
                 and revenue estimation."
                    .to_string(),
                "Estimates are based on user inputs and standard assumptions.".to_string(),
                "Actual results may vary due to farm-specific factors such as climate, \
                 irrigation, fruit set variation, and tree age."
                    .to_string(),
                "No liability is accepted by the developer or distributor for financial \
                 decisions or crop outcomes influenced by this tool."
                    .to_string(),
                "The password for this tool may change at any time; request the new password \
                 if access stops working."
                    .to_string(),
            ],
            assumptions: vec![
                "This tool assumes 16 canes per tree.".to_string(),
                "Yield and revenue are calculated entirely from the orchard data you provide."
                    .to_string(),
                "A common reference density is ~660 trees/ha (5m row spacing, 3m between \
                 trees). It is not assumed by the calculations; multiply your orchard size \
                 in hectares by 660 to estimate your tree count."
                    .to_string(),
            ],
            accept_label: "I have read and accept the information above".to_string(),
        }
    }
}
