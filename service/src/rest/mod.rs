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

//! Entry point to the REST server.

use crate::driver::Driver;
use axum::Router;
use catalog_core::rest::access_log::{log_access, AccessLog};

mod record_delete;
mod record_get;
mod record_put;
mod records_get;
mod records_post;
#[cfg(test)]
mod testutils;

/// Creates the router for the application, logging every routed request to `access_log`.
pub(crate) fn app(driver: Driver, access_log: AccessLog) -> Router {
    use axum::routing::get;
    Router::new()
        .route(
            "/api/v1/records/:id",
            get(record_get::handler).put(record_put::handler).delete(record_delete::handler),
        )
        .route("/api/v1/records", get(records_get::handler).post(records_post::handler))
        .route_layer(axum::middleware::from_fn_with_state(access_log, log_access))
        .with_state(driver)
}
