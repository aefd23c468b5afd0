use std::time::Duration;

use bon::Builder;
use reqwest::{Client as ReqwestClient, Method};
use secrecy::SecretString;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::Error;
use crate::types::request::{EverythingRequest, SourcesRequest, TopHeadlinesRequest};
use crate::types::response::{EverythingResponse, SourcesResponse, TopHeadlinesResponse};
use crate::{Result, ToQueryParams as _, auth};

/// Production News API host.
pub const DEFAULT_HOST: &str = "https://newsapi.org/v2";

const EVERYTHING: &str = "/everything";
const TOP_HEADLINES: &str = "/top-headlines";
const SOURCES: &str = "/top-headlines/sources";

/// Configuration for [`Client`]
#[derive(Clone, Debug, Builder)]
pub struct Config {
    /// The key sent in the `X-Api-Key` header of every request.
    #[builder(into)]
    api_key: SecretString,
    /// Deadline for a whole request, from connecting until the body has been read.
    timeout: Option<Duration>,
    /// Deadline for establishing the connection only.
    connect_timeout: Option<Duration>,
}

/// Client for the News API.
///
/// Each endpoint call issues exactly one GET request. There are no retries; a failed call
/// returns its error and the caller decides what to do next.
///
/// # Example
///
/// ```no_run
/// use newsapi_client_sdk::client::{Client, Config, DEFAULT_HOST};
/// use newsapi_client_sdk::types::request::TopHeadlinesRequest;
/// use newsapi_client_sdk::types::{Category, Country};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config::builder()
///     .api_key(std::env::var("NEWS_API_KEY")?)
///     .build();
/// let client = Client::new(DEFAULT_HOST, config)?;
///
/// let request = TopHeadlinesRequest::builder()
///     .q("messi")
///     .category(Category::Sports)
///     .country(Country::UnitedStates)
///     .build();
/// let response = client.top_headlines(&request).await?;
///
/// for article in response.articles {
///     println!("{} ({})", article.title, article.url);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    host: Url,
    config: Config,
    client: ReqwestClient,
}

impl Client {
    /// Creates a new client against `host`, e.g. [`DEFAULT_HOST`].
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::Kind::Validation`] error if `host` is not an absolute http(s)
    /// URL, and a transport error if the HTTP client cannot be created.
    pub fn new(host: &str, config: Config) -> Result<Client> {
        let mut builder = ReqwestClient::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        let host = Url::parse(host)?;
        if host.cannot_be_a_base() || !matches!(host.scheme(), "http" | "https") {
            return Err(Error::validation(format!(
                "host must be an http(s) base URL, got {host}"
            )));
        }

        Ok(Self {
            host,
            config,
            client: builder.build()?,
        })
    }

    /// Returns the base URL of the API.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Joins the host, `path` and `query`. The `?` is only added for a non-empty query.
    fn url(&self, path: &str, query: &str) -> String {
        let host = self.host.as_str().trim_end_matches('/');
        if query.is_empty() {
            format!("{host}{path}")
        } else {
            format!("{host}{path}?{query}")
        }
    }

    async fn get<Req: Serialize, Res: DeserializeOwned>(
        &self,
        path: &str,
        req: &Req,
    ) -> Result<Res> {
        let url = self.url(path, &req.query_params());
        let headers = auth::create_headers(&self.config.api_key)?;
        let request = self.client.request(Method::GET, url).build()?;

        crate::request(&self.client, request, Some(headers)).await
    }

    /// Searches every indexed article.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use newsapi_client_sdk::client::{Client, Config, DEFAULT_HOST};
    /// use newsapi_client_sdk::types::request::EverythingRequest;
    /// use newsapi_client_sdk::types::SortBy;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = Config::builder().api_key("my-key".to_owned()).build();
    /// let client = Client::new(DEFAULT_HOST, config)?;
    ///
    /// let request = EverythingRequest::builder()
    ///     .q("golang")
    ///     .sort_by(SortBy::Relevancy)
    ///     .build();
    /// let response = client.everything(&request).await?;
    /// println!("{} results", response.total_results);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn everything(&self, request: &EverythingRequest) -> Result<EverythingResponse> {
        self.get(EVERYTHING, request)
            .await
            .map_err(|e| e.context("everything"))
    }

    /// Fetches live top and breaking headlines.
    pub async fn top_headlines(
        &self,
        request: &TopHeadlinesRequest,
    ) -> Result<TopHeadlinesResponse> {
        self.get(TOP_HEADLINES, request)
            .await
            .map_err(|e| e.context("top_headlines"))
    }

    /// Lists the publishers that top headlines are drawn from.
    pub async fn sources(&self, request: &SourcesRequest) -> Result<SourcesResponse> {
        self.get(SOURCES, request)
            .await
            .map_err(|e| e.context("sources"))
    }
}
