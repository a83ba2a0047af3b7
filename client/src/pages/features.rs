//! Product features page.

use leptos::prelude::*;

use crate::pages::content::{content_list, content_text, use_frontend_content};

const FEATURES: &[&str] = &[
    "Automatic round-ups on every linked card",
    "Fractional shares of the brands you shop",
    "Family accounts with per-member contributions",
    "Business accounts with employee enrollment",
    "Goals that track progress as you invest",
];

#[component]
pub fn FeaturesPage() -> impl IntoView {
    let content = use_frontend_content();

    let title = content_text(content, "features", "title", "Everything you need to start investing");
    let intro = content_text(
        content,
        "features",
        "subtitle",
        "Kamioi turns spending into ownership without changing how you pay.",
    );
    let items = content_list(content, "features", "items", FEATURES);

    view! {
        <div class="features-page">
            <h1>{title}</h1>
            <p class="features-page__intro">{intro}</p>
            <ul class="features-page__list">
                {move || {
                    items()
                        .into_iter()
                        .map(|item| view! { <li class="features-page__item">{item}</li> })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
