//! Response types for the News API.
//!
//! String fields that the API sends as `null` or leaves out decode to an empty string.

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

/// Response from the `/everything` endpoint.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Builder)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct EverythingResponse {
    /// `"ok"` for every successful response.
    pub status: String,
    /// Total number of matching articles, across all pages.
    #[serde(default)]
    #[builder(default)]
    pub total_results: u64,
    /// The current page of matching articles.
    pub articles: Vec<Article>,
}

/// Response from the `/top-headlines` endpoint.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Builder)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct TopHeadlinesResponse {
    pub status: String,
    #[serde(default)]
    #[builder(default)]
    pub total_results: u64,
    pub articles: Vec<Article>,
}

/// Response from the `/top-headlines/sources` endpoint.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct SourcesResponse {
    pub status: String,
    pub sources: Vec<Source>,
}

/// A single news article.
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Builder)]
#[builder(on(String, into))]
#[serde(default, rename_all = "camelCase")]
pub struct Article {
    /// The publisher the article came from.
    #[builder(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub source: ArticleSource,
    #[builder(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub author: String,
    #[builder(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub title: String,
    #[builder(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub description: String,
    /// Direct link to the article.
    #[builder(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub url: String,
    /// Link to a relevant image for the article.
    #[builder(default)]
    #[serde(rename = "urlToImage")]
    #[serde_as(as = "DefaultOnNull")]
    pub image_url: String,
    /// Publication instant in UTC, as sent by the API.
    #[builder(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub published_at: String,
    /// Unformatted content, truncated by the API.
    #[builder(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub content: String,
}

/// Identifier and display name of the source an article came from.
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Builder)]
#[builder(on(String, into))]
#[serde(default)]
pub struct ArticleSource {
    /// Empty for publishers that are not in the sources directory.
    #[builder(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub id: String,
    #[builder(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub name: String,
}

/// A news publisher from the sources directory.
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Builder)]
#[builder(on(String, into))]
#[serde(default)]
pub struct Source {
    /// Identifier usable in the `sources` filter.
    #[builder(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub id: String,
    #[builder(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub name: String,
    #[builder(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub description: String,
    /// Homepage of the publisher.
    #[builder(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub url: String,
    #[builder(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub category: String,
    #[builder(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub language: String,
    #[builder(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub country: String,
}

/// Error envelope returned with every non-200 response.
///
/// Every field is empty when the body was not a JSON error envelope.
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq, Builder)]
#[builder(on(String, into))]
#[serde(default)]
pub struct ErrorResponse {
    /// `"error"` for every error response.
    #[builder(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub status: String,
    /// Machine readable code, e.g. `apiKeyInvalid` or `rateLimited`.
    #[builder(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub code: String,
    #[builder(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub message: String,
}
