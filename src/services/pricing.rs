//! Static pricing catalogue

use crate::models::PricingPlan;

/// The plans shown on the pricing page, cheapest first.
pub fn plans() -> Vec<PricingPlan> {
    vec![
        PricingPlan::new(
            "starter",
            "Starter",
            "$9/mo",
            &["Up to 3 projects", "Basic analytics", "Email support"],
        ),
        PricingPlan::new(
            "pro",
            "Pro",
            "$29/mo",
            &["Unlimited projects", "Advanced analytics", "Priority support", "Team seats"],
        )
        .popular(),
        PricingPlan::new(
            "enterprise",
            "Enterprise",
            "Custom",
            &["SAML SSO", "Dedicated support", "Custom limits", "Onboarding"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_plans() {
        let ids: Vec<_> = plans().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["starter", "pro", "enterprise"]);
    }

    #[test]
    fn test_only_pro_is_popular() {
        let popular: Vec<_> = plans().into_iter().filter(|p| p.popular).collect();
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].id, "pro");
    }

    #[test]
    fn test_every_plan_has_features() {
        assert!(plans().iter().all(|p| !p.features.is_empty()));
    }
}
