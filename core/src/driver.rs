// III-IV
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Common types for the business logic layer.
//!
//! Services define their own `Driver` type that encapsulates the in-memory state of the app and
//! coordinates access to it.  Operations return `DriverResult`s so that errors can float up to
//! the REST layer with `?`.

use crate::model::ModelError;

/// Business logic errors.  These errors encapsulate the conditions that the REST layer knows how
/// to translate into HTTP status codes.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum DriverError {
    /// Indicates an error in the input data.
    #[error("{0}")]
    InvalidInput(String),

    /// Indicates that a requested entry does not exist.
    #[error("{0}")]
    NotFound(String),
}

impl From<ModelError> for DriverError {
    fn from(e: ModelError) -> Self {
        DriverError::InvalidInput(e.to_string())
    }
}

/// Result type for this module.
pub type DriverResult<T> = Result<T, DriverError>;
