//! Outgoing request middleware.
//!
//! DESIGN
//! ======
//! Each transform is a pure function from request to request. `App` builds
//! one [`Middleware`] at startup and every API call passes through it before
//! hitting the network, so host rewriting and admin auth live in one place.

#[cfg(test)]
#[path = "middleware_test.rs"]
mod middleware_test;

use std::sync::Arc;

use crate::config::{LEGACY_API_HOSTS, STORAGE_ADMIN_TOKEN};
use crate::util::storage::SharedStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Request description handed to the transport after all transforms ran.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutgoingRequest {
    pub method: Method,
    pub url: String,
    /// Query parameters, encoded by the transport.
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl OutgoingRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self { method: Method::Get, url: url.into(), query: Vec::new(), headers: Vec::new(), body: None }
    }

    pub fn post_json(url: impl Into<String>, body: String) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            query: Vec::new(),
            headers: vec![("Content-Type".to_owned(), "application/json".to_owned())],
            body: Some(body),
        }
    }

    /// Header lookup, case-insensitive on the name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn with_query(mut self, params: Vec<(String, String)>) -> Self {
        self.query.extend(params);
        self
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_owned(), value.into()));
        self
    }
}

pub trait RequestTransform: Send + Sync {
    fn transform(&self, request: OutgoingRequest) -> OutgoingRequest;
}

/// Ordered transform chain.
#[derive(Clone, Default)]
pub struct Middleware {
    transforms: Vec<Arc<dyn RequestTransform>>,
}

impl Middleware {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, transform: impl RequestTransform + 'static) -> Self {
        self.transforms.push(Arc::new(transform));
        self
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    pub fn apply(&self, request: OutgoingRequest) -> OutgoingRequest {
        self.transforms.iter().fold(request, |req, t| t.transform(req))
    }
}

/// Rewrites URLs that point at a development backend to the production origin.
/// Inactive when the page itself is served from a local host.
#[derive(Clone, Debug)]
pub struct HostRewrite {
    production_origin: String,
    active: bool,
}

impl HostRewrite {
    pub fn new(production_origin: impl Into<String>, running_locally: bool) -> Self {
        Self { production_origin: production_origin.into().trim_end_matches('/').to_owned(), active: !running_locally }
    }
}

impl RequestTransform for HostRewrite {
    fn transform(&self, mut request: OutgoingRequest) -> OutgoingRequest {
        if !self.active {
            return request;
        }
        for &host in LEGACY_API_HOSTS {
            if !request.url.contains(host) {
                continue;
            }
            let host_only = self
                .production_origin
                .split_once("://")
                .map_or(self.production_origin.as_str(), |(_, rest)| rest);
            request.url = request
                .url
                .replace(&format!("http://{host}"), &self.production_origin)
                .replace(&format!("https://{host}"), &self.production_origin)
                .replace(host, host_only);
        }
        request
    }
}

/// Adds the persisted admin token as a bearer header on admin API calls.
///
/// The token is read at request time, so signing in to the admin console
/// takes effect without rebuilding the chain.
#[derive(Clone)]
pub struct AdminBearer {
    store: SharedStore,
}

impl AdminBearer {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

impl RequestTransform for AdminBearer {
    fn transform(&self, request: OutgoingRequest) -> OutgoingRequest {
        if !request.url.contains("/api/admin") || request.header("Authorization").is_some() {
            return request;
        }
        match self.store.as_dyn().get(STORAGE_ADMIN_TOKEN).filter(|t| !t.is_empty()) {
            Some(token) => request.with_header("Authorization", format!("Bearer {token}")),
            None => request,
        }
    }
}
