use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"Page not found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <a href="/" class="btn btn--primary">"Go home"</a>
        </div>
    }
}
