//! Pricing plan model

use serde::{Deserialize, Serialize};

/// A plan shown on the pricing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPlan {
    pub id: String,
    pub name: String,
    /// Display price, e.g. `"$9/mo"` or `"Custom"`
    pub price: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub popular: bool,
}

impl PricingPlan {
    pub fn new(id: &str, name: &str, price: &str, features: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price: price.to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
            popular: false,
        }
    }

    /// Mark the plan as the highlighted one
    pub fn popular(mut self) -> Self {
        self.popular = true;
        self
    }
}
