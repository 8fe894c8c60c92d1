// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Running aggregate of the activity timeline.
///
/// The report is owned by the pagination driver and mutated in place while
/// pages arrive, then handed to the report renderer for read-only traversal.
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::{
    error::Error,
    event::{RawEvent, RendererRegistry},
};

/// Occurrence count per event type.
pub type Summary = IndexMap<String, u64,>;

/// Rendered lines grouped by event type, then by repository.
pub type ActivityLog = IndexMap<String, IndexMap<String, Vec<String,>,>,>;

/// Per-type counts and per-repository summaries collected across pages.
///
/// Maps keep first-insertion order and every line list keeps the order in
/// which the API returned the events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize,)]
pub struct ActivityReport
{
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    summary:  Summary,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    activity: ActivityLog,
}

impl ActivityReport
{
    /// Creates an empty report.
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Records one allow-listed event.
    ///
    /// The counter for `event_type` is always incremented; `rendered` is
    /// appended under `event_type`/`repo` only when present.
    pub fn record(&mut self, event_type: &str, repo: &str, rendered: Option<String,>,)
    {
        *self.summary.entry(event_type.to_owned(),).or_insert(0,) += 1;

        if let Some(line,) = rendered {
            self.activity
                .entry(event_type.to_owned(),)
                .or_default()
                .entry(repo.to_owned(),)
                .or_default()
                .push(line,);
        }
    }

    /// Classifies, renders and records every event of one page.
    ///
    /// Events whose type is not registered in `registry` leave the report
    /// untouched. Returns the number of events that were recorded.
    pub fn ingest(&mut self, registry: &RendererRegistry, events: &[RawEvent],) -> usize
    {
        let mut recorded = 0;

        for event in events {
            let Some(renderer,) = registry.classify(event,) else {
                continue;
            };

            let rendered = renderer.render(&event.payload,);
            if rendered.is_none() {
                debug!("{} in {} produced no output", renderer.event_type(), event.repo_name());
            }

            self.record(renderer.event_type(), event.repo_name(), rendered,);
            recorded += 1;
        }

        recorded
    }

    /// Occurrence count per event type.
    pub fn summary(&self,) -> &Summary
    {
        &self.summary
    }

    /// Rendered lines grouped by event type and repository.
    pub fn activity(&self,) -> &ActivityLog
    {
        &self.activity
    }

    /// Number of recorded events of `event_type`.
    pub fn count(&self, event_type: &str,) -> u64
    {
        self.summary.get(event_type,).copied().unwrap_or_default()
    }

    /// Rendered lines for `event_type` in `repo`, empty when none exist.
    pub fn entries(&self, event_type: &str, repo: &str,) -> &[String]
    {
        self.activity
            .get(event_type,)
            .and_then(|repos| repos.get(repo,),)
            .map(Vec::as_slice,)
            .unwrap_or_default()
    }

    /// Whether no allow-listed event has been seen.
    pub fn is_empty(&self,) -> bool
    {
        self.summary.is_empty()
    }

    /// Converts the report into the nested structure consumed by
    /// [`ReportRenderer`](crate::ReportRenderer).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialize`] if serialization fails.
    pub fn to_value(&self,) -> Result<Value, Error,>
    {
        serde_json::to_value(self,).map_err(|source| Error::Serialize {
            source,
        },)
    }
}
