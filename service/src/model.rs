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

//! High-level data types.

use catalog_core::model::{ModelError, ModelResult};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a record.  Identifiers are positive and are never reused by a store.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
#[serde(transparent)]
pub(crate) struct RecordId(u64);

impl RecordId {
    /// Creates a new identifier from an untrusted number, making sure it is valid.
    pub(crate) fn new(id: u64) -> ModelResult<RecordId> {
        if id == 0 {
            return Err(ModelError("Record id must be positive".to_owned()));
        }
        Ok(RecordId(id))
    }

    /// Returns the identifier assigned to the first record of a store.
    pub(crate) fn initial() -> RecordId {
        RecordId(1)
    }

    /// Returns the identifier that follows this one.
    pub(crate) fn next(self) -> RecordId {
        RecordId(self.0 + 1)
    }
}

impl FromStr for RecordId {
    type Err = ModelError;

    fn from_str(s: &str) -> ModelResult<Self> {
        match s.parse::<u64>() {
            Ok(id) => RecordId::new(id),
            Err(e) => Err(ModelError(format!("Invalid record id '{}': {}", s, e))),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated contents of a record.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RecordContent {
    /// Name of the record.  Never blank.
    name: String,

    /// Price of the record.  Always finite.
    price: f64,
}

impl RecordContent {
    /// Creates new record contents from untrusted values, making sure they are valid.
    pub(crate) fn new<S: Into<String>>(name: S, price: f64) -> ModelResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ModelError("Name cannot be empty".to_owned()));
        }
        if !price.is_finite() {
            return Err(ModelError(format!("Price {} is not a finite number", price)));
        }
        Ok(Self { name, price })
    }
}

/// Untrusted fields of a record as they come from a client.
///
/// All fields are optional here so that missing fields are reported while converting into a
/// `RecordContent` instead of by the deserializer.
#[derive(Deserialize)]
pub(crate) struct RecordFields {
    /// Requested name of the record.
    pub(crate) name: Option<String>,

    /// Requested price of the record.
    pub(crate) price: Option<f64>,
}

impl TryFrom<RecordFields> for RecordContent {
    type Error = ModelError;

    fn try_from(fields: RecordFields) -> ModelResult<Self> {
        let name = fields.name.ok_or_else(|| ModelError("Missing field 'name'".to_owned()))?;
        let price = fields.price.ok_or_else(|| ModelError("Missing field 'price'".to_owned()))?;
        RecordContent::new(name, price)
    }
}

/// A record as held by the store.
#[derive(Clone, Debug, Getters, PartialEq, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
pub(crate) struct Record {
    /// Identifier of the record, assigned at creation time.
    id: RecordId,

    /// Name of the record.
    name: String,

    /// Price of the record.
    price: f64,
}

impl Record {
    /// Creates a record with identifier `id` out of validated `content`.
    pub(crate) fn new(id: RecordId, content: RecordContent) -> Self {
        Self { id, name: content.name, price: content.price }
    }
}
