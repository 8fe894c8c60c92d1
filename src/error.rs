#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the activity crate."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free.
//!
//! Only configuration, transport and API failures are represented here.
//! Malformed event payloads never surface as errors: the renderers in
//! [`crate::event`] degrade them to placeholders instead.

/// Unified error type returned by the fetch pipeline and CLI.
///
/// Any variant aborts the whole run. There is no partial report once one of
/// these has been produced.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Raised before any network activity when the inputs are unusable.
    #[error("invalid configuration: {message}")]
    Configuration {
        /// Human readable message describing the configuration problem.
        message: String
    },
    /// The API answered with a non-success status code.
    #[error("unexpected error from github api, status code: {status}, response content: {body}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Raw response body as received.
        body:   String
    },
    /// The request could not be completed at the transport level.
    #[error("request failed: {message}")]
    Transport {
        /// Human readable message describing the transport failure.
        message: String
    },
    /// The response body was not a JSON array of events.
    #[error("failed to decode events page: {source}")]
    Decode {
        /// Underlying decoding error from serde_json.
        source: serde_json::Error
    },
    /// The aggregated report could not be converted for rendering.
    #[error("failed to serialize report: {source}")]
    Serialize {
        /// Underlying serialization error from serde_json.
        source: serde_json::Error
    },
    /// Writing the rendered report failed.
    #[error("failed to write report: {source}")]
    Output {
        /// Underlying I/O error.
        source: std::io::Error
    }
}

impl Error {
    /// Constructs a configuration error from the provided message.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the configuration failure.
    pub fn configuration<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Configuration {
            message: message.into()
        }
    }

    /// Constructs a transport error from the provided message.
    pub fn transport<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Transport {
            message: message.into()
        }
    }

    /// Constructs an API error carrying the status code and raw body.
    pub fn api<B>(status: u16, body: B) -> Self
    where
        B: Into<String>
    {
        Self::Api {
            status,
            body: body.into()
        }
    }

    /// Returns the HTTP status when the error originated from the API.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api {
                status, ..
            } => Some(*status),
            _ => None
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// This method is primarily intended for CLI contexts where the variant
    /// name does not add value to end users. The returned string matches the
    /// [`std::fmt::Display`] implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Decode {
            source
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Output {
            source
        }
    }
}

impl From<octocrab::Error> for Error {
    fn from(error: octocrab::Error) -> Self {
        Self::Transport {
            message: error.to_string()
        }
    }
}
