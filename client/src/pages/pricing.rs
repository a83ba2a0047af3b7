//! Pricing page. Plan cards are fixed; headline copy is server-overridable.

use leptos::prelude::*;

use crate::pages::content::{content_text, use_frontend_content};

struct Plan {
    name: &'static str,
    price: &'static str,
    blurb: &'static str,
    features: &'static [&'static str],
}

const PLANS: &[Plan] = &[
    Plan {
        name: "Individual",
        price: "$1/mo",
        blurb: "Round-ups for one person.",
        features: &["Unlimited linked cards", "Fractional shares", "Personal goals"],
    },
    Plan {
        name: "Family",
        price: "$3/mo",
        blurb: "One portfolio, everyone contributes.",
        features: &["Up to 6 members", "Per-member contributions", "Shared goals"],
    },
    Plan {
        name: "Business",
        price: "$15/mo",
        blurb: "Round-ups as an employee benefit.",
        features: &["Employee enrollment", "Company matching", "Admin reporting"],
    },
];

#[component]
pub fn PricingPage() -> impl IntoView {
    let content = use_frontend_content();

    let title = content_text(content, "pricing", "title", "Simple pricing");
    let subtitle = content_text(content, "pricing", "subtitle", "No trading fees. Cancel anytime.");

    view! {
        <div class="pricing-page">
            <h1>{title}</h1>
            <p class="pricing-page__subtitle">{subtitle}</p>
            <div class="pricing-page__plans">
                {PLANS
                    .iter()
                    .map(|plan| {
                        view! {
                            <div class="plan-card">
                                <h2 class="plan-card__name">{plan.name}</h2>
                                <p class="plan-card__price">{plan.price}</p>
                                <p class="plan-card__blurb">{plan.blurb}</p>
                                <ul class="plan-card__features">
                                    {plan.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                                </ul>
                                <a href="/login" class="btn btn--primary">"Choose "{plan.name}</a>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
