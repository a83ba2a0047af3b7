//! Account dashboards for individual, family and business investors.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard has already matched the `:id` segment to the signed-in
//! user. Data comes from demo fixtures while demo mode is active, otherwise
//! from `GET /api/dashboard/:id`. Both share one record shape, parsed
//! section by section so one malformed section only blanks itself.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::components::notification_center::notify;
use crate::state::auth::AuthState;
use crate::state::demo::{DemoState, Persona};
use crate::state::demo_data;
use crate::state::notifications::{NotificationKind, NotificationState};
use crate::state::remote::Remote;
use crate::state::tutorial::TutorialState;
use crate::util::storage::SharedStore;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Portfolio {
    pub total_value: f64,
    pub total_invested: f64,
    pub total_gain: f64,
    pub gain_percent: f64,
    pub holdings: Vec<Holding>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Holding {
    pub symbol: String,
    pub name: String,
    pub shares: f64,
    pub value: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transaction {
    pub id: String,
    pub date: String,
    pub merchant: String,
    pub amount: f64,
    pub round_up: f64,
    pub ticker: String,
    pub status: String,
    pub member: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub target: f64,
    pub current: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub role: String,
    pub contributed: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub department: String,
    pub enrolled: bool,
}

/// Parsed dashboard record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardData {
    pub name: String,
    pub portfolio: Portfolio,
    pub transactions: Vec<Transaction>,
    pub goals: Vec<Goal>,
    pub members: Vec<Member>,
    pub employees: Vec<Employee>,
}

fn section<T: DeserializeOwned + Default>(record: &serde_json::Value, name: &str) -> T {
    record
        .get(name)
        .and_then(|v| serde_json::from_value(v.clone()).ok())
        .unwrap_or_default()
}

impl DashboardData {
    pub fn from_value(record: &serde_json::Value) -> Self {
        let name = record
            .pointer("/profile/name")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_owned();
        Self {
            name,
            portfolio: section(record, "portfolio"),
            transactions: section(record, "transactions"),
            goals: section(record, "goals"),
            members: section(record, "members"),
            employees: section(record, "employees"),
        }
    }
}

/// `$12,487.52`, negative as `-$3.10`.
pub fn format_currency(amount: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}

/// Goal progress as a whole percentage in `[0, 100]`.
pub fn goal_percent(goal: &Goal) -> u32 {
    if goal.target <= 0.0 {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let pct = ((goal.current / goal.target) * 100.0).clamp(0.0, 100.0).round() as u32;
    pct
}

/// Tutorial shown on a dashboard kind.
pub fn tutorial_id_for(kind: Persona) -> &'static str {
    match kind {
        Persona::Individual => "dashboard",
        Persona::Family => "family",
        Persona::Business => "business",
    }
}

#[component]
fn Summary(portfolio: Portfolio) -> impl IntoView {
    view! {
        <section class="dashboard-summary">
            <div class="dashboard-summary__stat">
                <span class="dashboard-summary__label">"Portfolio value"</span>
                <span class="dashboard-summary__value">{format_currency(portfolio.total_value)}</span>
            </div>
            <div class="dashboard-summary__stat">
                <span class="dashboard-summary__label">"Invested"</span>
                <span class="dashboard-summary__value">{format_currency(portfolio.total_invested)}</span>
            </div>
            <div class="dashboard-summary__stat">
                <span class="dashboard-summary__label">"Gain"</span>
                <span class="dashboard-summary__value">
                    {format!("{} ({:.2}%)", format_currency(portfolio.total_gain), portfolio.gain_percent)}
                </span>
            </div>
        </section>
    }
}

#[component]
fn Holdings(holdings: Vec<Holding>) -> impl IntoView {
    view! {
        <section class="dashboard-holdings">
            <h2>"Holdings"</h2>
            <table class="dashboard-table">
                <tbody>
                    {holdings
                        .into_iter()
                        .map(|h| {
                            view! {
                                <tr>
                                    <td class="dashboard-table__symbol">{h.symbol}</td>
                                    <td>{h.name}</td>
                                    <td>{format!("{:.2} sh", h.shares)}</td>
                                    <td>{format_currency(h.value)}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn Transactions(transactions: Vec<Transaction>) -> impl IntoView {
    view! {
        <section class="dashboard-transactions">
            <h2>"Recent round-ups"</h2>
            <ul class="dashboard-list">
                {transactions
                    .into_iter()
                    .map(|t| {
                        let who = t.member.map(|m| format!(" · {m}")).unwrap_or_default();
                        view! {
                            <li class=format!("dashboard-list__item dashboard-list__item--{}", t.status)>
                                <span>{t.date}" "{t.merchant}{who}</span>
                                <span>{format_currency(t.amount)}</span>
                                <span class="dashboard-list__roundup">
                                    {format!("+{} → {}", format_currency(t.round_up), t.ticker)}
                                </span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[component]
fn Goals(goals: Vec<Goal>) -> impl IntoView {
    view! {
        <section class="dashboard-goals">
            <h2>"Goals"</h2>
            {goals
                .into_iter()
                .map(|g| {
                    let pct = goal_percent(&g);
                    view! {
                        <div class="goal">
                            <span class="goal__title">{g.title}</span>
                            <div class="goal__bar">
                                <div class="goal__fill" style=format!("width: {pct}%")></div>
                            </div>
                            <span class="goal__amount">
                                {format!("{} of {}", format_currency(g.current), format_currency(g.target))}
                            </span>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}

#[component]
fn Members(members: Vec<Member>) -> impl IntoView {
    view! {
        <section class="dashboard-members">
            <h2>"Family members"</h2>
            <ul class="dashboard-list">
                {members
                    .into_iter()
                    .map(|m| {
                        view! {
                            <li class="dashboard-list__item">
                                <span>{m.name}" ("{m.role}")"</span>
                                <span>{format_currency(m.contributed)}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[component]
fn Employees(employees: Vec<Employee>) -> impl IntoView {
    view! {
        <section class="dashboard-employees">
            <h2>"Employees"</h2>
            <ul class="dashboard-list">
                {employees
                    .into_iter()
                    .map(|e| {
                        view! {
                            <li class="dashboard-list__item">
                                <span>{e.name}" · "{e.department}</span>
                                <span>{if e.enrolled { "Enrolled" } else { "Not enrolled" }}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

/// Fixture shown for a dashboard kind in demo mode. The page layout decides
/// the persona, not the persona last picked in the banner.
fn demo_record(kind: Persona) -> Option<serde_json::Value> {
    demo_data::lookup(kind.as_str(), None)
}

/// Dashboard for one account kind.
#[component]
pub fn DashboardPage(kind: Persona) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let demo = expect_context::<RwSignal<DemoState>>();
    let tutorial = expect_context::<RwSignal<TutorialState>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let params = use_params_map();
    let account_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));
    let live = RwSignal::new(Remote::<serde_json::Value>::Pending);

    #[cfg(feature = "hydrate")]
    {
        let api = expect_context::<crate::net::api::ApiClient>();
        let alive = crate::util::liveness::use_liveness();
        Effect::new(move || {
            if demo.with(|d| d.active) {
                return;
            }
            let id = account_id.get();
            let api = api.clone();
            let alive = alive.clone();
            live.set(Remote::Pending);
            leptos::task::spawn_local(async move {
                let result = api.fetch_dashboard(&id).await;
                if let Err(e) = &result {
                    log::warn!("dashboard {id} unavailable: {e}");
                }
                if alive.accepts(&account_id.get_untracked(), &id) {
                    live.set(Remote::from_result(result));
                }
            });
        });
    }

    // Demo fixtures win over live data while demo mode is on.
    let data = Memo::new(move |_| {
        if demo.with(|d| d.active) {
            return Remote::from_result(demo_record(kind).ok_or(()));
        }
        live.get()
    });

    let user_type = kind.as_str();
    let tutorial_id = tutorial_id_for(kind);
    let store = expect_context::<SharedStore>();
    let on_tour = move |_| {
        let started = tutorial.try_update(|t| {
            t.reset(tutorial_id, user_type, store.as_dyn());
            t.start(tutorial_id, user_type)
        });
        if let Some(Err(e)) = started {
            notify(notifications, NotificationKind::Warning, "Tour unavailable", e.to_string());
        }
    };

    // Offer the tour once per account kind.
    Effect::new(move || {
        if matches!(data.get(), Remote::Ready(_)) && !tutorial.with_untracked(TutorialState::is_active) {
            let _ = tutorial.try_update(|t| t.start(tutorial_id, user_type));
        }
    });

    let greeting = move || {
        auth.with(|a| a.user.as_ref().map(|u| u.display_name().to_owned())).unwrap_or_else(|| "Investor".to_owned())
    };

    view! {
        <div class=format!("dashboard-page dashboard-page--{user_type}")>
            <header class="dashboard-page__header">
                <h1>{move || format!("Welcome back, {}", greeting())}</h1>
                <span class="dashboard-page__account">
                    {move || {
                        let id = account_id.get();
                        (!id.is_empty()).then(|| format!("Account {id}"))
                    }}
                </span>
                <button class="btn dashboard-page__tour" on:click=on_tour>"Take the tour"</button>
            </header>
            {move || match data.get() {
                Remote::Pending => view! { <p class="dashboard-page__status">"Loading your dashboard..."</p> }.into_any(),
                Remote::Failed => {
                    view! {
                        <p class="dashboard-page__status">
                            "We couldn't load your account right now. Turn on demo mode to explore with sample data."
                        </p>
                    }
                        .into_any()
                }
                Remote::Ready(record) => {
                    let d = DashboardData::from_value(&record);
                    let sample = (demo.with(|s| s.active) && !d.name.is_empty())
                        .then(|| view! { <p class="dashboard-page__sample">"Sample account: "{d.name}</p> });
                    let members = (kind == Persona::Family).then(|| view! { <Members members=d.members /> });
                    let employees = (kind == Persona::Business).then(|| view! { <Employees employees=d.employees /> });
                    let goals = (kind != Persona::Business).then(|| view! { <Goals goals=d.goals /> });
                    view! {
                        {sample}
                        <Summary portfolio=d.portfolio.clone() />
                        <Holdings holdings=d.portfolio.holdings />
                        {members}
                        {employees}
                        <Transactions transactions=d.transactions />
                        {goals}
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
