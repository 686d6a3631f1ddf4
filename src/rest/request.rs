//! Per-call resource inputs.
//!
//! A [`ResourceRequest`] carries everything one accessor call needs: where
//! the resource lives (location, account, path identifiers), the optional
//! credential, and the optional typed query parameters and request body.
//! Requests are plain data, so a request can be reused or cloned without any
//! state leaking from one call into the next.

use std::collections::HashMap;

use crate::auth::AccessToken;
use crate::config::{AccountId, Location};

/// The inputs of one resource call.
///
/// `P` is the resource's query parameter type and `B` its request body type;
/// both default to `()` for resources that take neither.
///
/// # Example
///
/// ```rust
/// use video_indexer::{AccessToken, AccountId, Location};
/// use video_indexer::rest::ResourceRequest;
/// use video_indexer::rest::resources::VideoSearchParams;
///
/// let request: ResourceRequest<VideoSearchParams> = ResourceRequest::builder(Location::trial())
///     .account(AccountId::new("abc123").unwrap())
///     .access_token(AccessToken::new("token").unwrap())
///     .params(VideoSearchParams {
///         query: Some("sunset".to_string()),
///         ..Default::default()
///     })
///     .build();
///
/// assert_eq!(request.location().as_ref(), "trial");
/// ```
#[derive(Clone, Debug)]
pub struct ResourceRequest<P = (), B = ()> {
    location: Location,
    account_id: Option<AccountId>,
    path_ids: HashMap<&'static str, String>,
    access_token: Option<AccessToken>,
    params: Option<P>,
    body: Option<B>,
}

impl<P, B> ResourceRequest<P, B> {
    /// Creates a new builder for a request against `location`.
    #[must_use]
    pub fn builder(location: Location) -> ResourceRequestBuilder<P, B> {
        ResourceRequestBuilder::new(location)
    }

    /// Returns the location segment.
    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }

    /// Returns the account id, if set.
    #[must_use]
    pub const fn account_id(&self) -> Option<&AccountId> {
        self.account_id.as_ref()
    }

    /// Returns the path identifier registered under `name`.
    #[must_use]
    pub fn path_id(&self, name: &str) -> Option<&str> {
        self.path_ids.get(name).map(String::as_str)
    }

    /// Returns every path identifier.
    #[must_use]
    pub const fn path_ids(&self) -> &HashMap<&'static str, String> {
        &self.path_ids
    }

    /// Returns the access token, if set.
    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Returns the query parameters, if set.
    #[must_use]
    pub const fn params(&self) -> Option<&P> {
        self.params.as_ref()
    }

    /// Returns the request body, if set.
    #[must_use]
    pub const fn body(&self) -> Option<&B> {
        self.body.as_ref()
    }
}

/// Builder for constructing [`ResourceRequest`] instances.
#[derive(Debug)]
pub struct ResourceRequestBuilder<P = (), B = ()> {
    request: ResourceRequest<P, B>,
}

impl<P, B> ResourceRequestBuilder<P, B> {
    fn new(location: Location) -> Self {
        Self {
            request: ResourceRequest {
                location,
                account_id: None,
                path_ids: HashMap::new(),
                access_token: None,
                params: None,
                body: None,
            },
        }
    }

    /// Sets the account id.
    #[must_use]
    pub fn account(mut self, account_id: AccountId) -> Self {
        self.request.account_id = Some(account_id);
        self
    }

    /// Sets the resource id (the `{id}` placeholder).
    #[must_use]
    pub fn resource_id(self, id: impl Into<String>) -> Self {
        self.path_id("id", id)
    }

    /// Sets a named path identifier.
    #[must_use]
    pub fn path_id(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.request.path_ids.insert(name, value.into());
        self
    }

    /// Sets the access token.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.request.access_token = Some(token);
        self
    }

    /// Sets the access token, or clears it with `None`.
    #[must_use]
    pub fn maybe_access_token(mut self, token: Option<AccessToken>) -> Self {
        self.request.access_token = token;
        self
    }

    /// Sets the query parameters.
    #[must_use]
    pub fn params(mut self, params: P) -> Self {
        self.request.params = Some(params);
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: B) -> Self {
        self.request.body = Some(body);
        self
    }

    /// Builds the [`ResourceRequest`].
    ///
    /// Validation against a resource's path happens when the URL is built.
    #[must_use]
    pub fn build(self) -> ResourceRequest<P, B> {
        self.request
    }
}
