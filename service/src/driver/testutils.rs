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

//! Test utilities for the business layer.

use crate::db::MemoryStore;
use crate::driver::Driver;
use crate::model::*;

pub(crate) struct TestContext {
    driver: Driver,
}

impl TestContext {
    pub(crate) fn setup() -> Self {
        let driver = Driver::new(Box::new(MemoryStore::default()));
        Self { driver }
    }

    pub(crate) fn driver(&self) -> Driver {
        self.driver.clone()
    }

    /// Adds a record directly to the store, bypassing the driver.
    pub(crate) async fn insert(&self, name: &str, price: f64) -> Record {
        let content = RecordContent::new(name, price).unwrap();
        self.driver.store.lock().await.insert(content)
    }

    /// Fetches all records directly from the store, bypassing the driver.
    pub(crate) async fn records(&self) -> Vec<Record> {
        self.driver.store.lock().await.list()
    }
}
