//! Demo landing page: try the product with sample data, or ask for a
//! guided demo.

#[cfg(test)]
#[path = "demo_test.rs"]
mod demo_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::demo_banner::PersonaPicker;
#[cfg(feature = "hydrate")]
use crate::components::notification_center::notify;
use crate::net::types::DemoRequest;
use crate::state::demo::{DemoState, Persona};
#[cfg(feature = "hydrate")]
use crate::state::notifications::NotificationKind;
use crate::state::notifications::NotificationState;
use crate::state::tutorial::TutorialState;
use crate::util::storage::SharedStore;

/// Raw form input, kept intact across failed submissions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DemoRequestForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub interest_type: String,
    pub heard_from: String,
    pub experience_level: String,
    pub memo: String,
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

impl DemoRequestForm {
    /// Check the form and build the request body.
    ///
    /// # Errors
    ///
    /// A single form-level message describing the first problem found.
    pub fn validate(&self) -> Result<DemoRequest, String> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() {
            return Err("Please enter your name.".to_owned());
        }
        if email.is_empty() {
            return Err("Please enter your email address.".to_owned());
        }
        let valid_email = email
            .split_once('@')
            .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.') && !domain.ends_with('.'));
        if !valid_email {
            return Err("Please enter a valid email address.".to_owned());
        }
        let phone = optional(&self.phone);
        if let Some(phone) = &phone {
            let digits = phone.chars().filter(char::is_ascii_digit).count();
            let allowed = phone.chars().all(|c| c.is_ascii_digit() || " +-().".contains(c));
            if !allowed || digits < 7 {
                return Err("Please enter a valid phone number.".to_owned());
            }
        }
        Ok(DemoRequest {
            name: name.to_owned(),
            email: email.to_owned(),
            phone,
            address: optional(&self.address),
            interest_type: optional(&self.interest_type),
            heard_from: optional(&self.heard_from),
            experience_level: optional(&self.experience_level),
            memo: optional(&self.memo),
        })
    }
}

/// Unguarded dashboard preview for a persona.
pub fn demo_dashboard_path(persona: Persona) -> String {
    format!("/demo/{persona}")
}

fn text_field(
    form: RwSignal<DemoRequestForm>,
    label: &'static str,
    kind: &'static str,
    get: fn(&DemoRequestForm) -> &String,
    set: fn(&mut DemoRequestForm, String),
) -> impl IntoView {
    view! {
        <label class="demo-form__field">
            <span>{label}</span>
            <input
                type=kind
                prop:value=move || form.with(|f| get(f).clone())
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        </label>
    }
}

#[component]
fn DemoRequestFormView() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let form = RwSignal::new(DemoRequestForm::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let sent = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let (api, alive) = (expect_context::<crate::net::api::ApiClient>(), crate::util::liveness::use_liveness());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match form.with(DemoRequestForm::validate) {
            Ok(r) => r,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let (api, alive) = (api.clone(), alive.clone());
            leptos::task::spawn_local(async move {
                let result = api.submit_demo_request(&request).await;
                if let Err(e) = &result {
                    log::warn!("demo request failed: {e}");
                }
                if !alive.is_alive() {
                    return;
                }
                match result {
                    Ok(()) => {
                        sent.set(true);
                        notify(notifications, NotificationKind::Success, "Request received", "We'll be in touch soon.");
                    }
                    Err(e) => error.set(Some(format!("We couldn't send your request: {e}"))),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, notifications);
            busy.set(false);
        }
    };

    view! {
        <Show
            when=move || !sent.get()
            fallback=|| view! { <p class="demo-form__sent">"Thanks! Our team will reach out to schedule your demo."</p> }
        >
            <form class="demo-form" on:submit=on_submit.clone()>
                {text_field(form, "Name", "text", |f| &f.name, |f, v| f.name = v)}
                {text_field(form, "Email", "email", |f| &f.email, |f, v| f.email = v)}
                {text_field(form, "Phone", "tel", |f| &f.phone, |f, v| f.phone = v)}
                {text_field(form, "Address", "text", |f| &f.address, |f, v| f.address = v)}
                <label class="demo-form__field">
                    <span>"I'm interested in"</span>
                    <select on:change=move |ev| form.update(|f| f.interest_type = event_target_value(&ev))>
                        <option value="">"Choose one"</option>
                        {Persona::ALL
                            .into_iter()
                            .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                {text_field(form, "How did you hear about us?", "text", |f| &f.heard_from, |f, v| f.heard_from = v)}
                <label class="demo-form__field">
                    <span>"Investing experience"</span>
                    <select on:change=move |ev| form.update(|f| f.experience_level = event_target_value(&ev))>
                        <option value="">"Choose one"</option>
                        <option value="beginner">"Beginner"</option>
                        <option value="intermediate">"Intermediate"</option>
                        <option value="advanced">"Advanced"</option>
                    </select>
                </label>
                <label class="demo-form__field">
                    <span>"Anything else?"</span>
                    <textarea
                        prop:value=move || form.with(|f| f.memo.clone())
                        on:input=move |ev| form.update(|f| f.memo = event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="demo-form__error" role="alert">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Sending..." } else { "Request a demo" }}
                </button>
            </form>
        </Show>
    }
}

#[component]
pub fn DemoPage() -> impl IntoView {
    let demo = expect_context::<RwSignal<DemoState>>();
    let tutorial = expect_context::<RwSignal<TutorialState>>();
    let store = expect_context::<SharedStore>();
    let navigate = use_navigate();

    let on_enter = move |_| {
        let persona = demo.get_untracked().persona;
        demo.update(|d| d.enable(persona, store.as_dyn()));
        let _ = tutorial.try_update(|t| t.start("demo", persona.as_str()));
        navigate(&demo_dashboard_path(persona), NavigateOptions::default());
    };

    view! {
        <div class="demo-page">
            <section class="demo-page__try">
                <h1>"See Kamioi in action"</h1>
                <p>"Pick a sample account and explore a fully populated dashboard. Nothing you do here touches real money."</p>
                <PersonaPicker />
                <button class="btn btn--primary" on:click=on_enter>"Enter demo"</button>
            </section>
            <section class="demo-page__request">
                <h2>"Want a guided walkthrough?"</h2>
                <DemoRequestFormView />
            </section>
        </div>
    }
}

/// Sample dashboard for `/demo/:persona`. Visiting it switches demo mode on.
#[component]
pub fn DemoDashboardPage() -> impl IntoView {
    let demo = expect_context::<RwSignal<DemoState>>();
    let store = expect_context::<SharedStore>();
    let params = leptos_router::hooks::use_params_map();
    let persona = Memo::new(move |_| {
        params.with(|p| p.get("persona").and_then(|raw| raw.parse::<Persona>().ok()).unwrap_or_default())
    });

    Effect::new(move || {
        let wanted = persona.get();
        let current = demo.get_untracked();
        if !current.active || current.persona != wanted {
            demo.update(|d| d.enable(wanted, store.as_dyn()));
        }
    });

    move || view! { <crate::pages::dashboard::DashboardPage kind=persona.get() /> }
}
