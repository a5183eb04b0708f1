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

//! Store implementation backed by process memory.

use crate::db::RecordStore;
use crate::model::*;

/// Records held in a vector in insertion order.
///
/// Lookups are linear scans, which is fine for the sizes this store is meant for.
pub(crate) struct MemoryStore {
    /// All live records, in insertion order.
    records: Vec<Record>,

    /// Identifier to assign to the next inserted record.  Greater than any identifier ever
    /// assigned by this store, including those of removed records.
    next_id: RecordId,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self { records: vec![], next_id: RecordId::initial() }
    }
}

impl MemoryStore {
    /// Returns the position of the record identified by `id` in the sequence.
    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| *record.id() == id)
    }
}

impl RecordStore for MemoryStore {
    fn insert(&mut self, content: RecordContent) -> Record {
        let id = self.next_id;
        self.next_id = id.next();
        let record = Record::new(id, content);
        self.records.push(record.clone());
        record
    }

    fn list(&self) -> Vec<Record> {
        self.records.clone()
    }

    fn find_by_id(&self, id: RecordId) -> Option<Record> {
        self.records.iter().find(|record| *record.id() == id).cloned()
    }

    fn replace(&mut self, id: RecordId, content: RecordContent) -> Option<Record> {
        let index = self.position(id)?;
        let record = Record::new(id, content);
        self.records[index] = record.clone();
        Some(record)
    }

    fn remove(&mut self, id: RecordId) -> Option<Record> {
        let index = self.position(id)?;
        Some(self.records.remove(index))
    }
}
