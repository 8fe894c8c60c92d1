// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Cursor-driven walk over every page of the timeline.
///
/// Pages are requested strictly one after another, following the `next`
/// relation of each response until a response no longer carries one.
use tracing::{debug, info};

use crate::{aggregate::ActivityReport, error::Error, event::RendererRegistry, fetch::PageSource};

/// Progress reported after each page has been aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq,)]
pub struct PageProgress
{
    /// One-based number of the page just processed.
    pub page:     u32,
    /// Events returned by the page.
    pub events:   usize,
    /// Events of the page that passed the allow-list.
    pub recorded: usize,
    /// Whether another page follows.
    pub has_next: bool,
}

#[derive(Debug,)]
enum DriverState
{
    Fetching(String,),
    Done,
}

/// Fetches every page starting at `first_url` and aggregates its events.
///
/// `on_page` is invoked once per page after its events were recorded.
///
/// # Errors
///
/// The first failing fetch aborts the run and its error is returned as is;
/// no report is produced for partially fetched timelines.
///
/// # Example
///
/// ```no_run
/// use gh_activity::{ActivityConfig, GitHubPageSource, RendererRegistry, collect_activity};
///
/// # async fn example() -> Result<(), gh_activity::Error> {
/// let config = ActivityConfig::new("octocat", None,)?;
/// let source = GitHubPageSource::new(&config,)?;
/// let registry = RendererRegistry::default();
/// let report = collect_activity(&source, &registry, config.first_page_url(), |_| {},).await?;
/// println!("{:?}", report.summary());
/// # Ok(())
/// # }
/// ```
pub async fn collect_activity<S, F,>(
    source: &S,
    registry: &RendererRegistry,
    first_url: String,
    mut on_page: F,
) -> Result<ActivityReport, Error,>
where
    S: PageSource,
    F: FnMut(&PageProgress,),
{
    let mut report = ActivityReport::new();
    let mut state = DriverState::Fetching(first_url,);
    let mut page_number = 0u32;

    while let DriverState::Fetching(url,) = state {
        page_number += 1;
        let page = source.fetch_page(&url,).await?;
        let recorded = report.ingest(registry, &page.events,);

        let progress = PageProgress {
            page: page_number,
            events: page.events.len(),
            recorded,
            has_next: page.links.next().is_some(),
        };
        debug!("Page {} aggregated: {:?}", page_number, progress);
        on_page(&progress,);

        state = match page.links.next() {
            Some(next,) => DriverState::Fetching(next.to_owned(),),
            None => DriverState::Done,
        };
    }

    info!(
        "Collected {} event types across {} pages",
        report.summary().len(),
        page_number
    );

    Ok(report,)
}
