// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Event records returned by the activity endpoint and the per-type
//! renderers that turn them into one-line summaries.
//!
//! Dispatch goes through [`RendererRegistry`], a lookup keyed by event-type
//! name. The registry doubles as the allow-list: an event is processed iff a
//! renderer is registered for its type. Supporting a new event kind means
//! writing one [`EventRenderer`] and registering it; existing renderers and
//! the dispatch site stay untouched.
//!
//! Renderers never fail. Absent or `null` fields are replaced with
//! [`MISSING_FIELD`] so a single odd payload cannot abort a run.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::Error;

/// Placeholder substituted for absent payload fields.
pub const MISSING_FIELD: &str = "<missing>";

/// Event types processed by [`RendererRegistry::default`].
pub const ALLOWED_EVENTS: [&str; 5] = [
    IssueCommentRenderer::EVENT_TYPE,
    IssuesRenderer::EVENT_TYPE,
    PullRequestRenderer::EVENT_TYPE,
    PullRequestReviewCommentRenderer::EVENT_TYPE,
    GollumRenderer::EVENT_TYPE,
];

/// One record of the user's public timeline.
///
/// Deserialization is lenient: every field is optional, unknown fields are
/// ignored and wrongly typed `type`, `repo` or `repo.name` values read as
/// absent, so the shape of one event never fails a page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawEvent {
    /// Event type name, e.g. `IssuesEvent`.
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub event_type: Option<String>,
    /// Repository the event happened in.
    #[serde(default, deserialize_with = "lenient_repo")]
    pub repo: Option<RepoRef>,
    /// Type-specific payload.
    #[serde(default)]
    pub payload: Value,
}

/// Repository reference embedded in an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RepoRef {
    /// Repository name in `owner/name` form.
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
}

/// Decodes one page body into events.
///
/// The body must be a JSON array. Elements that are not event objects are
/// kept as untyped events, which no registry accepts.
///
/// # Errors
///
/// Returns [`Error::Decode`] when the body is not a JSON array.
pub fn decode_events(body: &str) -> Result<Vec<RawEvent>, Error> {
    let values: Vec<Value> = serde_json::from_str(body)?;
    Ok(values
        .into_iter()
        .map(|value| serde_json::from_value(value).unwrap_or_default())
        .collect())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_owned))
}

fn lenient_repo<'de, D>(deserializer: D) -> Result<Option<RepoRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl RawEvent {
    /// Repository name, or [`MISSING_FIELD`] when the event carries none.
    pub fn repo_name(&self) -> &str {
        self.repo
            .as_ref()
            .and_then(|repo| repo.name.as_deref())
            .unwrap_or(MISSING_FIELD)
    }
}

/// Converts the payload of one event kind into a one-line summary.
pub trait EventRenderer {
    /// Event type name this renderer is registered under.
    fn event_type(&self) -> &'static str;

    /// Renders the payload, or returns `None` when there is nothing worth
    /// reporting.
    fn render(&self, payload: &Value) -> Option<String>;
}

/// Lookup from event-type name to its renderer.
pub struct RendererRegistry {
    renderers: IndexMap<&'static str, Box<dyn EventRenderer>>,
}

impl RendererRegistry {
    /// Creates a registry that accepts no event type.
    pub fn empty() -> Self {
        Self {
            renderers: IndexMap::new(),
        }
    }

    /// Registers `renderer` under its event type, replacing any previous
    /// renderer for the same type.
    pub fn register<R>(&mut self, renderer: R) -> &mut Self
    where
        R: EventRenderer + 'static,
    {
        self.renderers.insert(renderer.event_type(), Box::new(renderer));
        self
    }

    /// Whether events of `event_type` are processed.
    pub fn is_allowed(&self, event_type: &str) -> bool {
        self.renderers.contains_key(event_type)
    }

    /// Returns the renderer for `event` when its type is allow-listed.
    pub fn classify(&self, event: &RawEvent) -> Option<&dyn EventRenderer> {
        let event_type = event.event_type.as_deref()?;
        self.renderers.get(event_type).map(|renderer| renderer.as_ref())
    }

    /// Registered event types in registration order.
    pub fn event_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.renderers.keys().copied()
    }
}

impl Default for RendererRegistry {
    /// Registry covering [`ALLOWED_EVENTS`].
    fn default() -> Self {
        let mut registry = Self::empty();
        registry
            .register(IssueCommentRenderer)
            .register(IssuesRenderer)
            .register(PullRequestRenderer)
            .register(PullRequestReviewCommentRenderer)
            .register(GollumRenderer);
        registry
    }
}

impl fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.renderers.keys()).finish()
    }
}

/// Comment left on an issue or pull request conversation.
#[derive(Debug, Clone, Copy, Default)]
pub struct IssueCommentRenderer;

impl IssueCommentRenderer {
    const EVENT_TYPE: &'static str = "IssueCommentEvent";
}

impl EventRenderer for IssueCommentRenderer {
    fn event_type(&self) -> &'static str {
        Self::EVENT_TYPE
    }

    fn render(&self, payload: &Value) -> Option<String> {
        Some(format!(
            "(issue: {}) \"{}\"",
            field(payload, &["issue", "number"]),
            field(payload, &["comment", "body"]),
        ))
    }
}

/// Issue opened, closed, reopened, labeled and so on.
#[derive(Debug, Clone, Copy, Default)]
pub struct IssuesRenderer;

impl IssuesRenderer {
    const EVENT_TYPE: &'static str = "IssuesEvent";
}

impl EventRenderer for IssuesRenderer {
    fn event_type(&self) -> &'static str {
        Self::EVENT_TYPE
    }

    fn render(&self, payload: &Value) -> Option<String> {
        Some(format!(
            "[action:{}] ({}) {}",
            action(payload),
            field(payload, &["issue", "number"]),
            field(payload, &["issue", "title"]),
        ))
    }
}

/// Pull request activity. Every action is rendered, not only `opened`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PullRequestRenderer;

impl PullRequestRenderer {
    const EVENT_TYPE: &'static str = "PullRequestEvent";
}

impl EventRenderer for PullRequestRenderer {
    fn event_type(&self) -> &'static str {
        Self::EVENT_TYPE
    }

    fn render(&self, payload: &Value) -> Option<String> {
        Some(format!(
            "[action:{}] {}({})",
            action(payload),
            field(payload, &["pull_request", "title"]),
            field(payload, &["pull_request", "number"]),
        ))
    }
}

/// Review comment on a pull request diff.
#[derive(Debug, Clone, Copy, Default)]
pub struct PullRequestReviewCommentRenderer;

impl PullRequestReviewCommentRenderer {
    const EVENT_TYPE: &'static str = "PullRequestReviewCommentEvent";
}

impl EventRenderer for PullRequestReviewCommentRenderer {
    fn event_type(&self) -> &'static str {
        Self::EVENT_TYPE
    }

    fn render(&self, payload: &Value) -> Option<String> {
        Some(format!(
            "[pr: {}({})] \"{}\"",
            field(payload, &["pull_request", "title"]),
            field(payload, &["pull_request", "number"]),
            field(payload, &["comment", "body"]),
        ))
    }
}

/// Wiki page created or edited.
///
/// Only the first page of the payload is rendered even though the event is
/// counted once as a whole.
#[derive(Debug, Clone, Copy, Default)]
pub struct GollumRenderer;

impl GollumRenderer {
    const EVENT_TYPE: &'static str = "GollumEvent";
}

impl EventRenderer for GollumRenderer {
    fn event_type(&self) -> &'static str {
        Self::EVENT_TYPE
    }

    fn render(&self, payload: &Value) -> Option<String> {
        // TODO: render every edited page once the summary counts pages instead of events.
        let first_page = payload.get("pages")?.as_array()?.first()?;

        Some(format!(
            "[action:{}] {}",
            field(first_page, &["action"]),
            field(first_page, &["title"]),
        ))
    }
}

/// Upper-cased `action`, empty when absent or `null`.
fn action(payload: &Value) -> String {
    payload
        .get("action")
        .filter(|value| !value.is_null())
        .map(display_value)
        .unwrap_or_default()
        .to_uppercase()
}

/// Renders the value at `path`, or [`MISSING_FIELD`].
fn field(value: &Value, path: &[&str]) -> String {
    path.iter()
        .try_fold(value, |current, key| current.get(key))
        .map(display_value)
        .unwrap_or_else(|| MISSING_FIELD.to_owned())
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => MISSING_FIELD.to_owned(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
