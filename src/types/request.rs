//! Parameter structs for the News API endpoints.
//!
//! Every field is optional. A field left at its zero value (empty string, empty list, `0`,
//! `None`, or the option enum's default variant) is omitted from the query string. Keys are
//! emitted in declaration order.
//!
//! Numeric values are not range checked; the API rejects values it does not accept.

#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use serde::Serialize;
use serde_with::{StringWithSeparator, formats::CommaSeparator, serde_as};

use super::{Category, Country, DateTime, Language, SearchIn, SortBy, Utc};
use crate::serde_helpers::{is_zero, rfc3339_seconds};

/// Request parameters for the `/everything` endpoint.
///
/// Searches every article the API has indexed, optionally filtered by keywords, sources,
/// domains and a publication date range.
///
/// # Example
///
/// ```
/// use newsapi_client_sdk::types::request::EverythingRequest;
/// use newsapi_client_sdk::types::{Language, SortBy};
///
/// let request = EverythingRequest::builder()
///     .q("golang")
///     .language(Language::English)
///     .sort_by(SortBy::Popularity)
///     .domains(vec!["espn.com".to_owned(), "clickhole.com".to_owned()])
///     .build();
/// ```
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct EverythingRequest {
    /// Keywords or phrases to search for in the article title and body.
    #[builder(into, default)]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub q: String,
    /// Restrict keyword matching to a single field.
    #[builder(default)]
    #[serde(skip_serializing_if = "SearchIn::is_unset")]
    pub search_in: SearchIn,
    /// News source identifiers, e.g. `bbc-news`.
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    pub sources: Vec<String>,
    /// Domains to restrict the search to, e.g. `bbc.co.uk`.
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    pub domains: Vec<String>,
    /// Domains to remove from the results.
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    pub exclude_domains: Vec<String>,
    /// Oldest publication instant allowed.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "rfc3339_seconds"
    )]
    pub from: Option<DateTime<Utc>>,
    /// Newest publication instant allowed.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "rfc3339_seconds"
    )]
    pub to: Option<DateTime<Utc>>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Language::is_unset")]
    pub language: Language,
    #[builder(default)]
    #[serde(skip_serializing_if = "SortBy::is_unset")]
    pub sort_by: SortBy,
    /// Number of results per page.
    #[builder(default)]
    #[serde(skip_serializing_if = "is_zero")]
    pub page_size: i32,
    /// 1-based page number.
    #[builder(default)]
    #[serde(skip_serializing_if = "is_zero")]
    pub page: i32,
}

/// Request parameters for the `/top-headlines` endpoint.
///
/// `sources` cannot be combined with `country` or `category`; the API reports that as an error.
///
/// # Example
///
/// ```
/// use newsapi_client_sdk::types::request::TopHeadlinesRequest;
/// use newsapi_client_sdk::types::{Category, Country};
///
/// let request = TopHeadlinesRequest::builder()
///     .q("messi")
///     .category(Category::Sports)
///     .country(Country::UnitedStates)
///     .build();
/// ```
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct TopHeadlinesRequest {
    #[builder(default)]
    #[serde(skip_serializing_if = "Country::is_unset")]
    pub country: Country,
    #[builder(default)]
    #[serde(skip_serializing_if = "Category::is_unset")]
    pub category: Category,
    /// News source identifiers, e.g. `bbc-news`.
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    pub sources: Vec<String>,
    /// Keywords or a phrase to search for.
    #[builder(into, default)]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub q: String,
    #[builder(default)]
    #[serde(skip_serializing_if = "is_zero")]
    pub page_size: i32,
    #[builder(default)]
    #[serde(skip_serializing_if = "is_zero")]
    pub page: i32,
}

/// Request parameters for the `/top-headlines/sources` endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Builder, Serialize)]
#[non_exhaustive]
pub struct SourcesRequest {
    #[builder(default)]
    #[serde(skip_serializing_if = "Category::is_unset")]
    pub category: Category,
    #[builder(default)]
    #[serde(skip_serializing_if = "Language::is_unset")]
    pub language: Language,
    #[builder(default)]
    #[serde(skip_serializing_if = "Country::is_unset")]
    pub country: Country,
}
