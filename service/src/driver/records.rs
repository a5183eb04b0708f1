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

//! Operations on the collection of records.

use crate::driver::Driver;
use crate::model::*;
use catalog_core::driver::DriverResult;

impl Driver {
    /// Creates a new record out of `fields` and returns it with its newly-assigned identifier.
    pub(crate) async fn create(self, fields: RecordFields) -> DriverResult<Record> {
        let content = RecordContent::try_from(fields)?;
        let mut store = self.store.lock().await;
        Ok(store.insert(content))
    }

    /// Gets all existing records in creation order.
    pub(crate) async fn list_all(self) -> DriverResult<Vec<Record>> {
        let store = self.store.lock().await;
        Ok(store.list())
    }
}
