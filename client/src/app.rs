//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every shared object is built once here and handed down through Leptos
//! context: the storage handle, the API client with its request middleware,
//! and one `RwSignal` per state container. Nothing else reaches for globals.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::demo_banner::DemoBanner;
use crate::components::navbar::Navbar;
use crate::components::notification_center::Toasts;
use crate::components::route_guard::{AdminRoute, ProtectedRoute, UserIdRoute};
use crate::components::tutorial_overlay::TutorialOverlay;
use crate::config::{api_base_for_host, is_local_host, page_location};
use crate::net::api::ApiClient;
use crate::net::middleware::{AdminBearer, HostRewrite, Middleware};
use crate::pages::admin::AdminPage;
use crate::pages::blog::{BlogPage, BlogPostPage};
use crate::pages::dashboard::DashboardPage;
use crate::pages::demo::{DemoDashboardPage, DemoPage};
use crate::pages::features::FeaturesPage;
use crate::pages::home::HomePage;
use crate::pages::login::{AdminLoginPage, LoginPage};
use crate::pages::not_found::NotFoundPage;
use crate::pages::pricing::PricingPage;
use crate::state::auth::{AdminSession, AuthState, Role};
use crate::state::demo::{DemoState, Persona};
use crate::state::notifications::NotificationState;
use crate::state::tutorial::TutorialState;
use crate::state::ui::UiState;
use crate::util::storage::{BrowserStore, SharedStore};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// API client for the current page: backend base from the hostname, with
/// host rewriting and admin auth in the middleware chain.
pub fn build_api_client(store: SharedStore) -> ApiClient {
    let (hostname, origin) = page_location();
    let local = is_local_host(&hostname);
    let middleware = Middleware::new().with(HostRewrite::new(origin, local)).with(AdminBearer::new(store));
    ApiClient::new(api_base_for_host(&hostname), middleware)
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SharedStore::new(BrowserStore);
    provide_context(build_api_client(store.clone()));
    provide_context(store.clone());

    // Containers start empty so server and client render the same markup.
    let auth = RwSignal::new(AuthState::default());
    let admin = RwSignal::new(AdminSession::default());
    let demo = RwSignal::new(DemoState::default());
    let tutorial = RwSignal::new(TutorialState::default());
    let notifications = RwSignal::new(NotificationState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(admin);
    provide_context(demo);
    provide_context(tutorial);
    provide_context(notifications);
    provide_context(ui);

    // Restore persisted state once, in the browser.
    Effect::new(move || {
        let store = store.as_dyn();
        admin.set(AdminSession::restore(store));
        demo.set(DemoState::load(store));
        tutorial.set(TutorialState::load(store));
        let dark = crate::util::dark_mode::read_preference(store);
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
        auth.set(AuthState::restore(store));
        log::debug!("session restored");
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/kamioi.css"/>
        <Title text="Kamioi"/>

        <Router>
            <Navbar/>
            <DemoBanner/>
            <main class="app-main">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("features") view=FeaturesPage/>
                    <Route path=StaticSegment("pricing") view=PricingPage/>
                    <Route path=StaticSegment("blog") view=BlogPage/>
                    <Route path=(StaticSegment("blog"), ParamSegment("slug")) view=BlogPostPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("admin-login") view=AdminLoginPage/>
                    <Route path=StaticSegment("demo") view=DemoPage/>
                    <Route path=(StaticSegment("demo"), ParamSegment("persona")) view=DemoDashboardPage/>
                    <Route
                        path=(StaticSegment("dashboard"), ParamSegment("id"))
                        view=|| view! {
                            <ProtectedRoute role=Role::Individual>
                                <UserIdRoute>
                                    <DashboardPage kind=Persona::Individual/>
                                </UserIdRoute>
                            </ProtectedRoute>
                        }
                    />
                    <Route
                        path=(StaticSegment("family"), ParamSegment("id"))
                        view=|| view! {
                            <ProtectedRoute role=Role::Family>
                                <UserIdRoute>
                                    <DashboardPage kind=Persona::Family/>
                                </UserIdRoute>
                            </ProtectedRoute>
                        }
                    />
                    <Route
                        path=(StaticSegment("business"), ParamSegment("id"))
                        view=|| view! {
                            <ProtectedRoute role=Role::Business>
                                <UserIdRoute>
                                    <DashboardPage kind=Persona::Business/>
                                </UserIdRoute>
                            </ProtectedRoute>
                        }
                    />
                    <Route
                        path=(StaticSegment("admin"), ParamSegment("id"))
                        view=|| view! {
                            <AdminRoute>
                                <AdminPage/>
                            </AdminRoute>
                        }
                    />
                </Routes>
            </main>
            <TutorialOverlay/>
            <Toasts/>
        </Router>
    }
}
