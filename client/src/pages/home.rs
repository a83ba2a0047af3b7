//! Marketing landing page.

use leptos::prelude::*;

use crate::pages::content::{content_list, content_text, use_frontend_content};

const HOW_IT_WORKS: &[&str] = &[
    "Link the cards you already use.",
    "Every purchase is rounded up to the next dollar.",
    "Your spare change buys shares in the brands you shop.",
];

#[component]
pub fn HomePage() -> impl IntoView {
    let content = use_frontend_content();

    let title = content_text(content, "hero", "title", "Invest in the brands you love, with your spare change.");
    let subtitle = content_text(
        content,
        "hero",
        "subtitle",
        "Kamioi rounds up everyday purchases and invests the difference in the companies you buy from.",
    );
    let cta = content_text(content, "hero", "cta_text", "Get started");
    let steps_title = content_text(content, "how_it_works", "title", "How it works");
    let steps = content_list(content, "how_it_works", "steps", HOW_IT_WORKS);

    view! {
        <div class="home-page">
            <section class="hero">
                <h1 class="hero__title">{title}</h1>
                <p class="hero__subtitle">{subtitle}</p>
                <div class="hero__actions">
                    <a href="/login" class="btn btn--primary">{cta}</a>
                    <a href="/demo" class="btn">"Try the demo"</a>
                </div>
            </section>
            <section class="how-it-works">
                <h2>{steps_title}</h2>
                <ol class="how-it-works__steps">
                    {move || steps().into_iter().map(|step| view! { <li>{step}</li> }).collect_view()}
                </ol>
            </section>
        </div>
    }
}
