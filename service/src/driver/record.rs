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

//! Operations on one record.

use crate::driver::{not_found, Driver};
use crate::model::*;
use catalog_core::driver::DriverResult;
use log::info;

impl Driver {
    /// Gets the record identified by `id`.
    pub(crate) async fn get(self, id: RecordId) -> DriverResult<Record> {
        let store = self.store.lock().await;
        store.find_by_id(id).ok_or_else(|| not_found(id))
    }

    /// Replaces the name and price of the record identified by `id` with `fields`.
    pub(crate) async fn update(self, id: RecordId, fields: RecordFields) -> DriverResult<Record> {
        let content = RecordContent::try_from(fields)?;
        let mut store = self.store.lock().await;
        store.replace(id, content).ok_or_else(|| not_found(id))
    }

    /// Deletes the record identified by `id` and returns its last contents.
    pub(crate) async fn delete(self, id: RecordId) -> DriverResult<Record> {
        let mut store = self.store.lock().await;
        let record = store.remove(id).ok_or_else(|| not_found(id))?;
        info!("Deleted record {} ({})", id, record.name());
        Ok(record)
    }
}
