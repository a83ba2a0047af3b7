//! Admin console: incoming demo requests.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::DemoRequestRecord;
use crate::state::auth::AdminSession;
use crate::state::remote::Remote;
use crate::util::storage::SharedStore;

#[component]
pub fn AdminPage() -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminSession>>();
    let store = expect_context::<SharedStore>();
    let navigate = use_navigate();
    let requests = RwSignal::new(Remote::<Vec<DemoRequestRecord>>::Pending);
    let reload = RwSignal::new(0_u32);

    #[cfg(feature = "hydrate")]
    {
        let api = expect_context::<crate::net::api::ApiClient>();
        let alive = crate::util::liveness::use_liveness();
        Effect::new(move || {
            let round = reload.get();
            let api = api.clone();
            let alive = alive.clone();
            requests.set(Remote::Pending);
            leptos::task::spawn_local(async move {
                let result = api.fetch_admin_demo_requests().await;
                if let Err(e) = &result {
                    log::warn!("demo requests unavailable: {e}");
                }
                if alive.accepts(&reload.get_untracked(), &round) {
                    requests.set(Remote::from_result(result));
                }
            });
        });
    }

    let on_logout = move |_| {
        admin.update(|s| s.sign_out(store.as_dyn()));
        navigate("/admin-login", NavigateOptions::default());
    };

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <h1>"Demo requests"</h1>
                <button class="btn" on:click=move |_| reload.update(|n| *n += 1)>"Refresh"</button>
                <button class="btn admin-page__logout" on:click=on_logout>"Sign out"</button>
            </header>
            {move || match requests.get() {
                Remote::Pending => view! { <p>"Loading requests..."</p> }.into_any(),
                Remote::Failed => view! { <p class="admin-page__error">"Could not load demo requests."</p> }.into_any(),
                Remote::Ready(list) if list.is_empty() => view! { <p>"No demo requests yet."</p> }.into_any(),
                Remote::Ready(list) => {
                    view! {
                        <table class="admin-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Email"</th>
                                    <th>"Interest"</th>
                                    <th>"Status"</th>
                                    <th>"Received"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {list
                                    .into_iter()
                                    .map(|r| {
                                        view! {
                                            <tr>
                                                <td>{r.request.name}</td>
                                                <td>{r.request.email}</td>
                                                <td>{r.request.interest_type.unwrap_or_default()}</td>
                                                <td>{r.status.unwrap_or_else(|| "new".to_owned())}</td>
                                                <td>{r.created_at.unwrap_or_default()}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
