//! Share-link helpers backed by the async clipboard API.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard is not available")]
    Unavailable,
    #[error("copy was rejected: {0}")]
    Rejected(String),
}

/// Absolute URL of a blog post for sharing.
pub fn post_share_url(origin: &str, slug: &str) -> String {
    format!("{}/blog/{}", origin.trim_end_matches('/'), slug.trim_matches('/'))
}

/// Copy `text` to the system clipboard.
///
/// # Errors
///
/// `Unavailable` outside a browser or without clipboard access, `Rejected`
/// when the browser refuses the write (permissions, insecure context).
pub async fn copy_text(text: &str) -> Result<(), ClipboardError> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| ClipboardError::Rejected(e.as_string().unwrap_or_else(|| "unknown error".to_owned())))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err(ClipboardError::Unavailable)
    }
}
