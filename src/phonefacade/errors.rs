// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

/// Reasons why a raw number could not be turned into a
/// [`ParsedNumber`](crate::ParsedNumber).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    /// The engine rejected the input as not being a phone number
    /// (too short, too long, invalid country calling code...).
    #[error("Malformed number: {0}")]
    Malformed(String),

    /// The region hint is not a region the engine knows about.
    #[error("Unknown region code: {0}")]
    UnknownRegion(String),

    /// The engine failed in an unexpected way, e.g. panicked on its own
    /// metadata.
    #[error("Number engine failed unexpectedly: {0}")]
    Engine(String),
}

impl ParseFailure {
    /// Returns true for failures caused by the shape of the input number
    /// itself, as opposed to a bad region hint or an engine bug.
    pub fn is_malformed(&self) -> bool {
        matches!(self, ParseFailure::Malformed(_))
    }
}

/// Errors raised while building tables from bundled or user supplied
/// resources.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("Failed to deserialize resource: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    CountryData(#[from] CountryDataError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountryDataError {
    /// Calling code keys must be 1 to 4 ascii digits.
    #[error("Invalid calling code key '{key}' for country '{iso2}'")]
    InvalidCallingCode { iso2: String, key: String },

    #[error("Priority {priority} of country '{iso2}' is out of range")]
    InvalidPriority { iso2: String, priority: usize },

    #[error("Two countries share the same ISO2 code '{0}'")]
    DuplicateIso2(String),

    #[error("Calling code '{key}' has more than one country with priority {priority}")]
    DuplicatePriority { key: String, priority: usize },
}
