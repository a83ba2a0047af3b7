//! REST client for the Kamioi backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, after the request
//! has gone through the [`Middleware`] chain.
//! Server-side (SSR): every call fails with [`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. Pages turn failures into
//! fallback content; nothing here is allowed to take the UI down.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use serde::de::DeserializeOwned;

use super::middleware::{Middleware, OutgoingRequest};
use super::query_cache::{CachePolicy, Lookup, QueryCache};
use super::types::{
    AdminLoginResponse, BlogPost, BlogPostList, Credentials, DemoRequest, DemoRequestRecord, FrontendContent,
    LoginResponse, parse_frontend_content,
};
#[cfg(feature = "hydrate")]
use super::types::ApiEnvelope;
use crate::util::clock::now_ms;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("request failed: {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("{0}")]
    Rejected(String),
    #[error("response carried no data")]
    MissingData,
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Transport hiccups and server errors are worth another attempt; a
    /// rejection or a malformed body is not.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Status(code) => *code >= 500 || *code == 408 || *code == 429,
            Self::Decode(_) | Self::Rejected(_) | Self::MissingData | Self::Unavailable => false,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status(404))
    }
}

fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

fn blog_posts_key(limit: u32, category: Option<&str>) -> String {
    format!("blog-posts:{limit}:{}", category.unwrap_or("all"))
}

fn blog_posts_query(limit: u32, category: Option<&str>) -> Vec<(String, String)> {
    let mut query = vec![("limit".to_owned(), limit.to_string())];
    if let Some(category) = category.filter(|c| !c.is_empty() && *c != "all") {
        query.push(("category".to_owned(), category.to_owned()));
    }
    query
}

fn blog_post_path(slug: &str) -> String {
    format!("/api/blog/posts/{}", slug.trim_matches('/'))
}

fn dashboard_path(account_id: &str) -> String {
    format!("/api/dashboard/{account_id}")
}

/// Run `attempt` once, then up to `retries` more times while it fails with a
/// retryable error.
async fn with_retry<T, F, Fut>(retries: u32, mut attempt: F) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut tries = 0;
    loop {
        match attempt().await {
            Err(e) if e.is_retryable() && tries < retries => tries += 1,
            result => return result,
        }
    }
}

/// Shared API client placed in Leptos context.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    middleware: Middleware,
    cache: Arc<Mutex<QueryCache>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, middleware: Middleware) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            middleware,
            cache: Arc::new(Mutex::new(QueryCache::new(CachePolicy::default()))),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Run the middleware chain over a request.
    pub fn prepare(&self, request: OutgoingRequest) -> OutgoingRequest {
        self.middleware.apply(request)
    }

    fn with_cache<R>(&self, f: impl FnOnce(&mut QueryCache) -> R) -> R {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cache)
    }

    /// `GET /api/frontend-content`.
    pub async fn fetch_frontend_content(&self) -> Result<FrontendContent, ApiError> {
        let value: serde_json::Value = self
            .cached_get("frontend-content", OutgoingRequest::get(self.url("/api/frontend-content")))
            .await?;
        parse_frontend_content(value)
    }

    /// `GET /api/blog/posts?limit=N&category=C`.
    pub async fn fetch_blog_posts(&self, limit: u32, category: Option<&str>) -> Result<Vec<BlogPost>, ApiError> {
        let request = OutgoingRequest::get(self.url("/api/blog/posts")).with_query(blog_posts_query(limit, category));
        let list: BlogPostList = self.cached_get(&blog_posts_key(limit, category), request).await?;
        Ok(list.posts)
    }

    /// `GET /api/blog/posts/:slug`.
    pub async fn fetch_blog_post(&self, slug: &str) -> Result<BlogPost, ApiError> {
        let path = blog_post_path(slug);
        self.cached_get(&path, OutgoingRequest::get(self.url(&path))).await
    }

    /// `POST /api/demo-requests`.
    pub async fn submit_demo_request(&self, request: &DemoRequest) -> Result<(), ApiError> {
        let body = serde_json::to_string(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.send_ack(OutgoingRequest::post_json(self.url("/api/demo-requests"), body)).await
    }

    /// `POST /api/auth/login`.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let body = serde_json::to_string(credentials).map_err(|e| ApiError::Decode(e.to_string()))?;
        let value = self.send(OutgoingRequest::post_json(self.url("/api/auth/login"), body)).await?;
        decode(value)
    }

    /// `POST /api/admin/auth/login`.
    pub async fn admin_login(&self, credentials: &Credentials) -> Result<AdminLoginResponse, ApiError> {
        let body = serde_json::to_string(credentials).map_err(|e| ApiError::Decode(e.to_string()))?;
        let value = self.send(OutgoingRequest::post_json(self.url("/api/admin/auth/login"), body)).await?;
        decode(value)
    }

    /// `GET /api/dashboard/:account_id`, shaped like a demo fixture record.
    pub async fn fetch_dashboard(&self, account_id: &str) -> Result<serde_json::Value, ApiError> {
        let path = dashboard_path(account_id);
        self.cached_get(&path, OutgoingRequest::get(self.url(&path))).await
    }

    /// `GET /api/admin/demo-requests`. Never cached.
    pub async fn fetch_admin_demo_requests(&self) -> Result<Vec<DemoRequestRecord>, ApiError> {
        let value = self
            .send_with_retry(OutgoingRequest::get(self.url("/api/admin/demo-requests")))
            .await?;
        decode(value)
    }

    async fn cached_get<T: DeserializeOwned>(&self, key: &str, request: OutgoingRequest) -> Result<T, ApiError> {
        let value = self.cached_value(key, now_ms(), || self.send_with_retry(request)).await?;
        decode(value)
    }

    /// Serve fresh cache hits locally; otherwise run `fetch`, falling back to
    /// a stale entry if it fails. Storing a response also evicts every entry
    /// past retention.
    async fn cached_value<F, Fut>(&self, key: &str, now: f64, fetch: F) -> Result<serde_json::Value, ApiError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<serde_json::Value, ApiError>>,
    {
        let cached = self.with_cache(|c| c.lookup(key, now));
        if let Lookup::Fresh(value) = cached {
            return Ok(value);
        }
        match fetch().await {
            Ok(value) => {
                self.with_cache(|c| {
                    c.evict_expired(now);
                    c.insert(key, value.clone(), now);
                });
                Ok(value)
            }
            Err(e) => match cached {
                Lookup::Stale(value) => Ok(value),
                _ => Err(e),
            },
        }
    }

    async fn send_with_retry(&self, request: OutgoingRequest) -> Result<serde_json::Value, ApiError> {
        let retries = self.with_cache(|c| c.policy().retries);
        with_retry(retries, || self.send(request.clone())).await
    }

    async fn send_ack(&self, request: OutgoingRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let envelope: ApiEnvelope<serde_json::Value> = self.transport(request).await?;
            envelope.into_ack()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self.prepare(request);
            Err(ApiError::Unavailable)
        }
    }

    /// Send one request and unwrap the envelope's `data`.
    async fn send(&self, request: OutgoingRequest) -> Result<serde_json::Value, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let envelope: ApiEnvelope<serde_json::Value> = self.transport(request).await?;
            envelope.into_result()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self.prepare(request);
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "hydrate")]
    async fn transport<T: DeserializeOwned>(&self, request: OutgoingRequest) -> Result<T, ApiError> {
        use super::middleware::Method;
        use gloo_net::http::Request;

        let request = self.prepare(request);
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };
        if !request.query.is_empty() {
            builder = builder.query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let resp = match request.body {
            Some(body) => builder
                .body(body)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        // The backend still sends an envelope on 4xx; prefer its error text.
        let status = resp.status();
        let parsed = resp.json::<T>().await;
        match parsed {
            Ok(body) if resp.ok() || status < 500 => Ok(body),
            Ok(_) => Err(ApiError::Status(status)),
            Err(_) if !resp.ok() => Err(ApiError::Status(status)),
            Err(e) => Err(ApiError::Decode(e.to_string())),
        }
    }
}
