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

//! Test utilities for the REST API.

use crate::db::MemoryStore;
use crate::driver::Driver;
use crate::model::*;
use crate::rest::app;
use axum::Router;
use catalog_core::clocks::testutils::SettableClock;
use catalog_core::rest::access_log::testutils::RecordingAccessLogger;
use catalog_core::rest::access_log::{AccessEvent, AccessLog};
use std::sync::Arc;
use time::macros::datetime;

pub(crate) struct TestContext {
    driver: Driver,
    logger: RecordingAccessLogger,
    app: Router,
}

impl TestContext {
    pub(crate) fn setup() -> Self {
        let driver = Driver::new(Box::new(MemoryStore::default()));
        let logger = RecordingAccessLogger::default();
        let clock = Arc::new(SettableClock::new(datetime!(2023-12-01 10:00:00 UTC)));
        let app = app(driver.clone(), AccessLog::new(Arc::new(logger.clone()), clock));
        Self { driver, logger, app }
    }

    pub(crate) fn app(&self) -> Router {
        self.app.clone()
    }

    pub(crate) fn into_app(self) -> Router {
        self.app
    }

    pub(crate) async fn create(&self, name: &str, price: f64) -> Record {
        let fields = RecordFields { name: Some(name.to_owned()), price: Some(price) };
        self.driver.clone().create(fields).await.unwrap()
    }

    pub(crate) async fn get(&self, id: RecordId) -> Option<Record> {
        self.driver.clone().get(id).await.ok()
    }

    pub(crate) async fn delete(&self, id: RecordId) {
        self.driver.clone().delete(id).await.unwrap();
    }

    pub(crate) async fn records(&self) -> Vec<Record> {
        self.driver.clone().list_all().await.unwrap()
    }

    pub(crate) async fn access_events(&self) -> Vec<AccessEvent> {
        self.logger.take().await
    }
}
