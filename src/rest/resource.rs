//! The resource access pipeline.
//!
//! This module defines the [`Resource`] trait. Every Video Indexer resource
//! is a thin piece of configuration over one shared pipeline:
//!
//! 1. [`build_url`](Resource::build_url) composes the URL from the request
//! 2. [`fetch_json`](Resource::fetch_json) performs the exchange and returns the raw body
//! 3. [`parse_json`](Resource::parse_json) deserializes the body into the payload model
//! 4. [`get`](Resource::get) composes the three
//!
//! Each stage can be called on its own, so callers can cache raw bodies,
//! parse fixtures, or inspect the URL without touching the network.
//!
//! # Implementing a Resource
//!
//! ```rust,ignore
//! use video_indexer::clients::{AuthStyle, HttpMethod};
//! use video_indexer::rest::{EndpointScope, Resource, ResourcePath};
//!
//! pub struct SupportedLanguages;
//!
//! impl Resource for SupportedLanguages {
//!     type Payload = Vec<SupportedLanguage>;
//!     type Params = ();
//!     type Body = ();
//!
//!     const NAME: &'static str = "SupportedLanguages";
//!     const PATH: ResourcePath = ResourcePath::new(
//!         HttpMethod::Get,
//!         EndpointScope::Location,
//!         AuthStyle::Query,
//!         &[],
//!         "SupportedLanguages",
//!     );
//! }
//! ```

use serde::{de::DeserializeOwned, Serialize};

use crate::clients::{
    redact, DataType, FailureKind, HttpClient, HttpError, HttpRequest, HttpResponse,
};
use crate::rest::{
    append_query, build_path, deserialize, endpoint_url, serialize_to_query, EndpointScope,
    ResourceError, ResourcePath, ResourceRequest,
};

/// A Video Indexer resource reachable through the shared pipeline.
///
/// Implementors supply only configuration: the payload model, the parameter
/// and body types, a name for diagnostics, and the [`ResourcePath`]. Every
/// operation is provided.
///
/// # Associated Types
///
/// - `Payload`: The typed result (a model, a `Vec` of models, a [`Page`](crate::rest::resources::Page), or a `String`)
/// - `Params`: Query parameters (use `()` if none)
/// - `Body`: Request body for POST resources (use `()` if none)
///
/// # Associated Constants
///
/// - `NAME`: The resource name used in errors (e.g., "VideoIndex")
/// - `PATH`: Method, scope, credential convention and URL template
#[allow(async_fn_in_trait)]
pub trait Resource: Sized {
    /// The typed result of [`get`](Self::get).
    type Payload: DeserializeOwned;

    /// Query parameters for the request.
    type Params: Serialize;

    /// Request body for the request.
    type Body: Serialize;

    /// The resource name used in errors.
    const NAME: &'static str;

    /// How the request is shaped.
    const PATH: ResourcePath;

    /// Builds the absolute request URL, without credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if an account-scoped
    /// resource has no account id, or a template identifier is missing or
    /// blank. Returns [`ResourceError::InvalidRequest`] if the parameters
    /// cannot be encoded.
    fn build_url(
        client: &HttpClient,
        request: &ResourceRequest<Self::Params, Self::Body>,
    ) -> Result<String, ResourceError> {
        let account = match Self::PATH.scope {
            EndpointScope::Location => None,
            EndpointScope::Account => Some(request.account_id().ok_or(
                ResourceError::PathResolutionFailed {
                    resource: Self::NAME,
                    missing: "account_id",
                },
            )?),
        };

        let available_ids: Vec<&str> = request
            .path_ids()
            .iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();
        if let Some(missing) = Self::PATH.missing_id(&available_ids) {
            return Err(ResourceError::PathResolutionFailed {
                resource: Self::NAME,
                missing,
            });
        }

        let path = build_path(Self::PATH.template, request.path_ids());
        let url = endpoint_url(client.base_url(), request.location(), account, &path);

        let query = request
            .params()
            .map(|params| serialize_to_query(Self::NAME, params))
            .transpose()?
            .unwrap_or_default();

        Ok(append_query(url, &query))
    }

    /// Performs the exchange and returns the undecoded response body.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for transport failures and non-2xx
    /// statuses (both logged once through the redacted URL), and the
    /// [`build_url`](Self::build_url) errors.
    async fn fetch_json(
        client: &HttpClient,
        request: &ResourceRequest<Self::Params, Self::Body>,
    ) -> Result<String, ResourceError> {
        let response = send::<Self>(client, request, false).await?;
        Ok(response.body)
    }

    /// Parses a raw body into the payload model, ignoring field-name case.
    ///
    /// Pure: nothing is logged and every call yields an independent value.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Deserialization`] if `json` is malformed or
    /// does not match the payload model.
    fn parse_json(json: &str) -> Result<Self::Payload, ResourceError> {
        deserialize::from_str(json).map_err(|source| ResourceError::Deserialization {
            resource: Self::NAME,
            source,
        })
    }

    /// Fetches and parses the resource.
    ///
    /// # Errors
    ///
    /// Returns the [`fetch_json`](Self::fetch_json) errors, and
    /// [`ResourceError::Deserialization`] (logged once) if the body does not
    /// match the payload model.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let request = ResourceRequest::builder(Location::trial())
    ///     .account(AccountId::new("abc123")?)
    ///     .resource_id("e7a2b1")
    ///     .access_token(token)
    ///     .build();
    ///
    /// let index = VideoIndex::get(&client, &request).await?;
    /// ```
    async fn get(
        client: &HttpClient,
        request: &ResourceRequest<Self::Params, Self::Body>,
    ) -> Result<Self::Payload, ResourceError> {
        let response = send::<Self>(client, request, false).await?;
        parse_reported::<Self>(client, request, &response)
    }
}

/// A resource for which the service reports absence with `404`.
///
/// [`get_optional`](Self::get_optional) maps exactly that status to
/// `Ok(None)` without logging a failure. Every other failure is reported and
/// returned as with [`Resource::get`].
#[allow(async_fn_in_trait)]
pub trait OptionalResource: Resource {
    /// Fetches and parses the resource, or `None` if the service answers 404.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Resource::get`] for everything except 404.
    async fn get_optional(
        client: &HttpClient,
        request: &ResourceRequest<Self::Params, Self::Body>,
    ) -> Result<Option<Self::Payload>, ResourceError> {
        let response = send::<Self>(client, request, true).await?;
        if response.is_not_found() {
            return Ok(None);
        }
        parse_reported::<Self>(client, request, &response).map(Some)
    }
}

/// Builds the HTTP request for `R` and sends it.
async fn send<R: Resource>(
    client: &HttpClient,
    request: &ResourceRequest<R::Params, R::Body>,
    accept_not_found: bool,
) -> Result<HttpResponse, ResourceError> {
    let url = R::build_url(client, request)?;

    let mut builder = HttpRequest::builder(R::PATH.http_method, url)
        .access_token(request.access_token().cloned())
        .auth_style(R::PATH.auth);

    if let Some(body) = request.body() {
        let body = serde_json::to_value(body).map_err(|e| ResourceError::InvalidRequest {
            resource: R::NAME,
            reason: format!("Failed to serialize body: {e}"),
        })?;
        builder = builder.body(body).body_type(DataType::Json);
    }

    if accept_not_found {
        builder = builder.accept_status(404);
    }

    let http_request = builder.build().map_err(HttpError::from)?;
    Ok(client.request(http_request).await?)
}

/// Parses a response body, logging a deserialization failure once.
fn parse_reported<R: Resource>(
    client: &HttpClient,
    request: &ResourceRequest<R::Params, R::Body>,
    response: &HttpResponse,
) -> Result<R::Payload, ResourceError> {
    R::parse_json(&response.body).map_err(|error| {
        let credential = request.access_token().map(AsRef::as_ref);
        client.reporter().report(
            &response.log_uri,
            Some(response.code),
            FailureKind::Deserialization,
            &redact(&error.to_string(), credential),
        );
        error
    })
}
