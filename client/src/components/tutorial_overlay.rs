//! Guided-tour tooltip for the active tutorial step.

use leptos::prelude::*;

use crate::state::tutorial::TutorialState;
use crate::util::storage::SharedStore;

#[component]
pub fn TutorialOverlay() -> impl IntoView {
    let tutorial = expect_context::<RwSignal<TutorialState>>();
    let store = expect_context::<SharedStore>();

    let next_store = store.clone();
    let on_next = move |_| tutorial.update(|t| t.next(next_store.as_dyn()));
    let on_back = move |_| tutorial.update(TutorialState::prev);
    let on_skip = move |_| tutorial.update(|t| t.skip(store.as_dyn()));

    let step = move || tutorial.with(TutorialState::current_step);
    let progress = move || tutorial.with(TutorialState::progress).unwrap_or((0, 0));

    view! {
        <Show when=move || step().is_some()>
            <div class="tutorial-backdrop"></div>
            <div
                class=move || {
                    let placement = step().map_or("", |s| s.placement.as_class());
                    format!("tutorial-tip {placement}")
                }
                data-target=move || step().map(|s| s.target)
                role="dialog"
            >
                <div class="tutorial-tip__progress">
                    {move || {
                        let (index, total) = progress();
                        format!("Step {index} of {total}")
                    }}
                </div>
                <h3 class="tutorial-tip__title">{move || step().map(|s| s.title)}</h3>
                <p class="tutorial-tip__body">{move || step().map(|s| s.description)}</p>
                {move || {
                    step()
                        .and_then(|s| s.action)
                        .map(|action| view! { <p class="tutorial-tip__action">{action}</p> })
                }}
                <div class="tutorial-tip__buttons">
                    <button class="btn btn--link" on:click=on_skip.clone()>"Skip tour"</button>
                    <button class="btn" on:click=on_back disabled=move || { progress().0 <= 1 }>
                        "Back"
                    </button>
                    <button class="btn btn--primary" on:click=on_next.clone()>
                        {move || {
                            let (index, total) = progress();
                            if index >= total { "Finish" } else { "Next" }
                        }}
                    </button>
                </div>
            </div>
        </Show>
    }
}
