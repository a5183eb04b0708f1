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

//! Storage abstraction in terms of the operations needed by the service.
//!
//! Lookups by identifier are expected to miss from time to time, so stores report absent records
//! with `None` instead of with errors.  Turning absence into a failure is up to the driver.

use crate::model::*;

mod memory;
pub(crate) use memory::MemoryStore;

/// An ordered collection of records with identifier-based access.
pub(crate) trait RecordStore {
    /// Appends a new record with `content`, assigning it the next available identifier.
    fn insert(&mut self, content: RecordContent) -> Record;

    /// Gets all records in insertion order.
    fn list(&self) -> Vec<Record>;

    /// Gets the record identified by `id`, if any.
    fn find_by_id(&self, id: RecordId) -> Option<Record>;

    /// Overwrites the contents of the record identified by `id` in place and returns the updated
    /// record, or `None` (without changes) if there is no such record.
    fn replace(&mut self, id: RecordId, content: RecordContent) -> Option<Record>;

    /// Removes the record identified by `id` and returns it, or `None` (without changes) if there
    /// is no such record.
    fn remove(&mut self, id: RecordId) -> Option<Record>;
}
