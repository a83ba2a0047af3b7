//! Frontend content loading shared by the marketing pages.

use leptos::prelude::*;

use crate::net::types::FrontendContent;
use crate::state::remote::Remote;

/// Load server-supplied copy for the current page.
///
/// Starts `Pending`. Failures are logged and resolve to `Failed`, which makes
/// every section fall back to its hardcoded default.
pub fn use_frontend_content() -> RwSignal<Remote<FrontendContent>> {
    let content = RwSignal::new(Remote::Pending);

    #[cfg(feature = "hydrate")]
    {
        let api = expect_context::<crate::net::api::ApiClient>();
        let alive = crate::util::liveness::use_liveness();
        leptos::task::spawn_local(async move {
            let result = api.fetch_frontend_content().await;
            if let Err(e) = &result {
                log::warn!("frontend content unavailable: {e}");
            }
            if alive.is_alive() {
                content.set(Remote::from_result(result));
            }
        });
    }
    content
}

/// Reactive text for one section field; empty while content is pending.
pub fn content_text(
    content: RwSignal<Remote<FrontendContent>>,
    section: &'static str,
    field: &'static str,
    default: &'static str,
) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || content.with(|c| c.resolve_text(section, field, default)).unwrap_or_default()
}

/// Reactive list for one section field; empty while content is pending.
pub fn content_list(
    content: RwSignal<Remote<FrontendContent>>,
    section: &'static str,
    field: &'static str,
    default: &'static [&'static str],
) -> impl Fn() -> Vec<String> + Copy + Send + Sync + 'static {
    move || content.with(|c| c.resolve_list(section, field, default)).unwrap_or_default()
}
