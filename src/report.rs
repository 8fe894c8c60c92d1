// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Indented console rendering of nested report values.
//!
//! Every mapping key is printed as `- key` at the current depth and its value
//! one level deeper. Sequence elements and scalars become leaf lines. Depth
//! is expressed with one tab per level.

use std::io::Write;

use console::style;
use serde_json::Value;

use crate::error::Error;

/// Writes nested mappings, sequences and scalars as an indented list.
#[derive(Debug, Clone, Copy, PartialEq, Eq,)]
pub struct ReportRenderer
{
    colored: bool,
}

impl ReportRenderer
{
    /// Creates a renderer that styles output only when `colored` is set.
    pub fn new(colored: bool,) -> Self
    {
        Self {
            colored,
        }
    }

    /// Creates a renderer honoring the terminal's color settings.
    pub fn for_terminal() -> Self
    {
        Self::new(console::colors_enabled(),)
    }

    /// Writes `value` to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Output`] when writing fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use gh_activity::ReportRenderer;
    /// use serde_json::json;
    ///
    /// let mut out = Vec::new();
    /// ReportRenderer::new(false,)
    ///     .write(&mut out, &json!({"summary": {"IssuesEvent": 2}}),)
    ///     .expect("in-memory write",);
    /// assert_eq!(String::from_utf8(out,).unwrap(), "- summary\n\t- IssuesEvent\n\t\t- 2\n");
    /// ```
    pub fn write<W: Write,>(&self, out: &mut W, value: &Value,) -> Result<(), Error,>
    {
        self.write_value(out, value, 0,)
    }

    /// Renders `value` into a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Output`] if the rendered bytes cannot be buffered.
    pub fn render_to_string(&self, value: &Value,) -> Result<String, Error,>
    {
        let mut buffer = Vec::new();
        self.write(&mut buffer, value,)?;
        Ok(String::from_utf8_lossy(&buffer,).into_owned(),)
    }

    fn write_value<W: Write,>(&self, out: &mut W, value: &Value, depth: usize,) -> Result<(), Error,>
    {
        match value {
            Value::Object(map,) => {
                for (key, child,) in map {
                    let line = format!("{}- {key}", indent(depth,));
                    writeln!(out, "{}", style(line,).blue().bold().force_styling(self.colored))?;
                    self.write_value(out, child, depth + 1,)?;
                }
            }
            Value::Array(items,) => {
                for item in items {
                    self.write_leaf(out, item, depth,)?;
                }
            }
            scalar => self.write_leaf(out, scalar, depth,)?,
        }

        Ok((),)
    }

    fn write_leaf<W: Write,>(&self, out: &mut W, value: &Value, depth: usize,) -> Result<(), Error,>
    {
        let text = match value {
            Value::String(text,) => text.clone(),
            other => other.to_string(),
        };
        let line = format!("{}- {text}", indent(depth,));
        writeln!(out, "{}", style(line,).white().force_styling(self.colored))?;
        Ok((),)
    }
}

fn indent(depth: usize,) -> String
{
    "\t".repeat(depth,)
}
