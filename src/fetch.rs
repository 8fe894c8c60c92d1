// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Single-page retrieval of the public events timeline.
///
/// [`PageSource`] is the seam the pagination driver talks to;
/// [`GitHubPageSource`] implements it on top of an octocrab client.
use std::future::Future;

use http::header::{AUTHORIZATION, LINK};
use octocrab::{Octocrab, service::middleware::retry::RetryConfig};
use tracing::{debug, info};

use crate::{
    config::ActivityConfig,
    error::Error,
    event::{RawEvent, decode_events},
    link::{LinkRelations, parse_link_header},
};

/// One page of the timeline together with its pagination cursor.
#[derive(Debug, Clone, Default, PartialEq,)]
pub struct Page
{
    /// Events in the order the API returned them.
    pub events: Vec<RawEvent,>,
    /// Relations parsed from the `Link` header; empty when it was absent.
    pub links:  LinkRelations,
}

/// Fetches one page of events from an absolute URL.
pub trait PageSource
{
    /// Retrieves the page at `url`.
    ///
    /// # Errors
    ///
    /// Implementations return [`Error::Api`] for non-success responses and
    /// never hand back a partial page.
    fn fetch_page(&self, url: &str,) -> impl Future<Output = Result<Page, Error,>,>;
}

/// [`PageSource`] backed by the GitHub REST API.
#[derive(Debug, Clone,)]
pub struct GitHubPageSource
{
    octocrab: Octocrab,
}

impl GitHubPageSource
{
    /// Builds a client for the API described by `config`.
    ///
    /// When a token is configured it is sent as `Authorization: token
    /// <value>` on every request. Octocrab's own retry layer is switched off:
    /// a failing page aborts the run instead of being retried.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when the API base is not a valid URI
    /// or the client cannot be initialized.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gh_activity::{ActivityConfig, GitHubPageSource, PageSource};
    ///
    /// # async fn example() -> Result<(), gh_activity::Error> {
    /// let config = ActivityConfig::new("octocat", None,)?;
    /// let source = GitHubPageSource::new(&config,)?;
    /// let page = source.fetch_page(&config.first_page_url(),).await?;
    /// println!("{} events, next: {:?}", page.events.len(), page.links.next());
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: &ActivityConfig,) -> Result<Self, Error,>
    {
        let mut builder = Octocrab::builder()
            .base_uri(config.api_base(),)
            .map_err(|e| Error::configuration(format!("invalid API base URL: {e}"),),)?
            .add_retry_config(RetryConfig::None,);

        if let Some(token,) = config.token() {
            builder = builder.add_header(AUTHORIZATION, format!("token {token}"),);
        }

        let octocrab = builder.build().map_err(|e| {
            Error::configuration(format!("failed to initialize GitHub client: {e}"),)
        },)?;

        Ok(Self {
            octocrab,
        },)
    }
}

impl PageSource for GitHubPageSource
{
    async fn fetch_page(&self, url: &str,) -> Result<Page, Error,>
    {
        debug!("Fetching events page {}", url);

        let response = self.octocrab._get(url,).await?;
        let status = response.status();
        let links = response
            .headers()
            .get(LINK,)
            .and_then(|value| value.to_str().ok(),)
            .map(parse_link_header,)
            .unwrap_or_default();

        let body = self.octocrab.body_to_string(response,).await?;
        if !status.is_success() {
            return Err(Error::api(status.as_u16(), body,),);
        }

        let events = decode_events(&body,)?;

        info!(
            "Fetched {} events from {} (next page: {})",
            events.len(),
            url,
            links.next().unwrap_or("none")
        );

        Ok(Page {
            events,
            links,
        },)
    }
}
