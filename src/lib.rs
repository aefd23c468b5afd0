#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod auth;
pub mod client;
pub mod error;
pub(crate) mod serde_helpers;
pub mod types;

use reqwest::header::HeaderMap;
use reqwest::{Request, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub use crate::client::{Client, Config, DEFAULT_HOST};
use crate::error::Error;
use crate::types::response::ErrorResponse;

pub type Result<T> = std::result::Result<T, Error>;

/// Trait for converting request types to URL query parameters.
///
/// This trait is automatically implemented for all types that implement [`Serialize`].
/// It uses [`serde_html_form`] to serialize the struct fields into a query string, in field
/// declaration order.
pub trait ToQueryParams: Serialize {
    /// Converts the request to a URL-encoded query string without the leading `?`.
    ///
    /// Returns an empty string if no parameters are set.
    fn query_params(&self) -> String {
        serde_html_form::to_string(self)
            .inspect_err(|e| {
                #[cfg(feature = "tracing")]
                tracing::error!("Unable to convert to URL-encoded string {e:?}");
                #[cfg(not(feature = "tracing"))]
                let _: &serde_html_form::ser::Error = e;
            })
            .unwrap_or_default()
    }
}

impl<T: Serialize> ToQueryParams for T {}

#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(client, request, headers),
        fields(
            method = %request.method(),
            path = request.url().path(),
            status_code
        )
    )
)]
async fn request<Response: DeserializeOwned>(
    client: &reqwest::Client,
    mut request: Request,
    headers: Option<HeaderMap>,
) -> Result<Response> {
    let method = request.method().clone();
    let path = request.url().path().to_owned();

    if let Some(h) = headers {
        *request.headers_mut() = h;
    }

    let response = client.execute(request).await?;
    let status_code = response.status();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", status_code.as_u16());

    if status_code != StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        let envelope: ErrorResponse = serde_json::from_str(&body).unwrap_or_default();

        #[cfg(feature = "tracing")]
        tracing::warn!(
            status = %status_code,
            method = %method,
            path = %path,
            code = %envelope.code,
            message = %envelope.message,
            "API request failed"
        );

        return Err(Error::api(status_code, method, path, envelope));
    }

    let body = response.text().await?;
    serde_helpers::deserialize_with_warnings(&body)
}
