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

//! Business logic for the service.

use crate::db::RecordStore;
use crate::model::RecordId;
use catalog_core::driver::DriverError;
use futures::lock::Mutex;
use std::sync::Arc;

mod record;
mod records;
#[cfg(test)]
mod testutils;

/// Business logic.
///
/// The store is shared by all clones of the driver and every operation holds its lock for the
/// whole read-modify-write sequence, so operations are atomic with respect to each other.  The
/// public operations consume the driver to prevent callers from mistaking two separate calls for
/// a single atomic one.
#[derive(Clone)]
pub(crate) struct Driver {
    /// The store that owns all records.
    store: Arc<Mutex<Box<dyn RecordStore + Send>>>,
}

impl Driver {
    /// Creates a new driver backed by the given injected components.
    pub(crate) fn new(store: Box<dyn RecordStore + Send>) -> Self {
        Self { store: Arc::from(Mutex::from(store)) }
    }
}

/// Builds the error returned when no record is identified by `id`.
fn not_found(id: RecordId) -> DriverError {
    DriverError::NotFound(format!("Record {} not found", id))
}
