//! Summaries of a GitHub user's public activity timeline.
//!
//! The library walks the paginated `GET /users/{user}/events` endpoint by
//! following `Link: rel="next"` cursors, keeps issue, pull request, review
//! comment and wiki events, and folds them into an [`ActivityReport`]:
//! per-type counts plus one-line summaries grouped by event type and
//! repository. [`ReportRenderer`] prints the result as an indented list.

mod aggregate;
mod config;
mod error;
mod event;
mod fetch;
mod link;
mod paginate;
mod report;

pub use aggregate::{ActivityLog, ActivityReport, Summary};
pub use config::{ActivityConfig, DEFAULT_API_BASE, TOKEN_ENV};
pub use error::Error;
pub use event::{
    ALLOWED_EVENTS, EventRenderer, GollumRenderer, IssueCommentRenderer, IssuesRenderer,
    MISSING_FIELD, PullRequestRenderer, PullRequestReviewCommentRenderer, RawEvent, RendererRegistry,
    RepoRef, decode_events,
};
pub use fetch::{GitHubPageSource, Page, PageSource};
pub use link::{LinkRelations, NEXT_RELATION, parse_link_header};
pub use paginate::{PageProgress, collect_activity};
pub use report::ReportRenderer;
