//! Banner shown while demo mode is active, with a persona switcher.

#[cfg(test)]
#[path = "demo_banner_test.rs"]
mod demo_banner_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::pages::demo::demo_dashboard_path;
use crate::state::demo::{DemoState, Persona};
use crate::util::storage::SharedStore;

/// Where to go after picking `persona` while on `pathname`. Sample dashboards
/// are keyed by persona in the path, so switching persona there must follow.
fn persona_switch_target(pathname: &str, persona: Persona) -> Option<String> {
    pathname.starts_with("/demo/").then(|| demo_dashboard_path(persona))
}

/// Buttons for choosing the demo persona.
#[component]
pub fn PersonaPicker() -> impl IntoView {
    let demo = expect_context::<RwSignal<DemoState>>();
    let store = expect_context::<SharedStore>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    view! {
        <div class="demo-persona-picker" role="group" aria-label="Demo account type">
            {Persona::ALL
                .into_iter()
                .map(|persona| {
                    let store = store.clone();
                    let navigate = navigate.clone();
                    let on_pick = move |_| {
                        demo.update(|d| d.enable(persona, store.as_dyn()));
                        if let Some(target) = persona_switch_target(&pathname.get_untracked(), persona) {
                            navigate(&target, NavigateOptions::default());
                        }
                    };
                    view! {
                        <button
                            class="btn demo-persona-picker__option"
                            class:demo-persona-picker__option--selected=move || demo.get().persona == persona
                            on:click=on_pick
                        >
                            {persona.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn DemoBanner() -> impl IntoView {
    let demo = expect_context::<RwSignal<DemoState>>();
    let store = expect_context::<SharedStore>();

    view! {
        <Show when=move || demo.get().active>
            <div class="demo-banner">
                <span class="demo-banner__label">
                    "Demo mode: showing sample "
                    {move || demo.get().persona.label()}
                    " account data"
                </span>
                <PersonaPicker />
                <button
                    class="btn demo-banner__exit"
                    on:click={
                        let store = store.clone();
                        move |_| demo.update(|d| d.disable(store.as_dyn()))
                    }
                >
                    "Exit demo"
                </button>
            </div>
        </Show>
    }
}
